//! Hello-world counter demo.
//!
//! Every "Say Hello" click runs a slow greeting on a worker thread; the label is
//! updated on the UI thread once the greeting returns.

use anyhow::Result;
use booking_demos::ui::HelloWorldController;
use booking_demos::{APP_NAME, CONFIG_DIR, ConfigManager, LOG_DIR, Metrics, VERSION};
use std::sync::Arc;
use std::time::Duration;

const APPLICATION_ID: &str = "es.udc.fic.ipm.HelloWorld";

fn main() -> Result<()> {
    let config = ConfigManager::new(CONFIG_DIR)?.load_config()?;

    let _log_guard = booking_demos::logging::setup_logging_with_console(
        LOG_DIR,
        APPLICATION_ID,
        config.debug_mode,
        true,
    )?;

    tracing::info!("Starting {} v{} (hello world)", APP_NAME, VERSION);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(1)
        .thread_name("greeting-worker")
        .build()?;

    let metrics = Arc::new(Metrics::new());
    let controller =
        HelloWorldController::new(&config, runtime.handle().clone(), Arc::clone(&metrics))?;

    let result = controller.run();

    tracing::info!("GUI closed, shutting down");
    runtime.shutdown_timeout(Duration::from_secs(1));
    metrics.log_summary();

    result.map_err(|e| {
        tracing::error!("GUI error: {}", e);
        anyhow::anyhow!("GUI error: {}", e)
    })
}
