//! Logging utilities
//!
//! Logs go to `<data dir>/pagenav.log`; the terminal belongs to the UI.

use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    self, filter::EnvFilter, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt, Layer,
};

use super::paths::{get_data_dir, LOG_ENV, LOG_FILE};

/// Filter used when neither `RUST_LOG` nor `PAGENAV_LOGLEVEL` is set
pub fn default_directive() -> String {
    format!("{}=info", env!("CARGO_CRATE_NAME"))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV.as_str()))
        .unwrap_or_else(|_| EnvFilter::new(default_directive()))
}

pub fn initialize_logging() -> Result<()> {
    let directory = get_data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_path = directory.join(LOG_FILE.as_str());
    let log_file = std::fs::File::create(&log_path)?;
    let file_subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter());
    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .try_init()?;
    tracing::info!("logging to {}", log_path.display());
    Ok(())
}
