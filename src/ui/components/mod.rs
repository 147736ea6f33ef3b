pub mod app;
pub mod attendee_list;
pub mod icon_button;
pub mod table;

pub use app::App;
pub use attendee_list::AttendeeListPage;
pub use icon_button::IconButton;
pub use table::{Table, TableCell, TableHeader, TableRow};
