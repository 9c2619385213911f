//! Flight booker demo.
//!
//! A one-way/return flight form whose Book button runs a simulated, cancellable
//! booking on a worker thread.
//!
//! # Threading
//!
//! - **Main thread**: runs the Slint event loop and the presenter
//! - **Tokio blocking pool**: runs booking workers
//!
//! Worker results travel back through the presenter's UI bridge; nothing but the
//! main thread touches the window.
//!
//! # Configuration
//!
//! `Demo Data/Demos.yaml` (optional), overridable with `DEMOS__*` environment
//! variables, e.g. `DEMOS__FLIGHT_BOOKER__FAIL_AT_STEP=2`.

use anyhow::Result;
use booking_demos::ui::FlightBookerController;
use booking_demos::{APP_NAME, CONFIG_DIR, ConfigManager, LOG_DIR, Metrics, VERSION};
use std::sync::Arc;
use std::time::Duration;

/// Log file prefix, matching the application id.
const APPLICATION_ID: &str = "es.udc.fic.ipm.FlightBooker";

fn main() -> Result<()> {
    let config = ConfigManager::new(CONFIG_DIR)?.load_config()?;

    let _log_guard = booking_demos::logging::setup_logging_with_console(
        LOG_DIR,
        APPLICATION_ID,
        config.debug_mode,
        true,
    )?;

    tracing::info!("Starting {} v{} (flight booker)", APP_NAME, VERSION);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(1)
        .thread_name("booking-worker")
        .build()?;

    let metrics = Arc::new(Metrics::new());
    let controller =
        FlightBookerController::new(&config, runtime.handle().clone(), Arc::clone(&metrics))?;

    // Blocks until the window is closed
    let result = controller.run();

    tracing::info!("GUI closed, shutting down");

    // Booking workers hold no durable state; don't wait long for them
    runtime.shutdown_timeout(Duration::from_secs(1));
    metrics.log_summary();

    result.map_err(|e| {
        tracing::error!("GUI error: {}", e);
        anyhow::anyhow!("GUI error: {}", e)
    })
}
