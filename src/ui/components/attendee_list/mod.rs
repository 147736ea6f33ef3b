mod footer;
mod item;
mod list;
mod page;
mod search_form;
mod status;

pub use page::AttendeeListPage;
