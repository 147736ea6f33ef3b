pub mod mock_api;

pub use mock_api::{MockApi, EVENT_ID};

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
