// Library exports for integration tests and reusable components

pub mod attendee_list;
pub mod attendees;
pub mod config;
pub mod location;
pub mod relative_time;

// Dioxus components and routing (hidden from docs)
#[doc(hidden)]
pub mod ui;

// Re-export AppContext at crate root for easier access
pub use ui::AppContext;
