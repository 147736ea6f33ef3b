use pass_in::attendees::AttendeeClient;
use pass_in::config::Config;
use pass_in::ui::{App, AppContext};
use tracing::{error, info};

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let client = match AttendeeClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create attendees client: {}", e);
            std::process::exit(1);
        }
    };

    info!("Starting pass.in attendee list for event {}", client.event_id());
    let context = AppContext { config, client };

    #[cfg(feature = "desktop")]
    dioxus::LaunchBuilder::desktop()
        .with_cfg(pass_in::ui::make_config())
        .with_context(context)
        .launch(App);

    #[cfg(not(feature = "desktop"))]
    dioxus::LaunchBuilder::new().with_context(context).launch(App);
}
