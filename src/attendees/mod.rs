pub mod client;
pub mod models;

pub use client::{AttendeeClient, AttendeeError};
pub use models::{Attendee, AttendeePage, PageRequest};
