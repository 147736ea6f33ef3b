use crate::attendees::AttendeeClient;
use crate::config;

#[derive(Clone)]
pub struct AppContext {
    pub config: config::Config,
    pub client: AttendeeClient,
}
