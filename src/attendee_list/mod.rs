pub mod controller;
pub mod state;

pub use controller::{AttendeeListController, FetchTicket};
pub use state::{FetchStatus, PageControl, ViewState};
