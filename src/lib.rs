// booking-demos - Hello-world counter and flight booker desktop demos
//
// This is the library crate containing models, services, presenters and the Slint
// front-end. The binaries in src/bin/ only set up logging, configuration and the
// tokio runtime before handing over to a controller.

pub mod config;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod state;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use metrics::Metrics;
pub use models::{AppConfig, DateFormat, FormData};
pub use state::{BookingOutcome, BookingPhase, CancellationFlag};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Directory holding `Demos.yaml`
pub const CONFIG_DIR: &str = "Demo Data";

/// Directory for rotating log files
pub const LOG_DIR: &str = "logs";
