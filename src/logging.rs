//! File-based logging for the terminal front-end
//!
//! The terminal belongs to the UI, so tracing output goes to a daily rolling
//! file under the configured directory.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use clickwheel_rs::config::LoggingSettings;

const LOG_FILE_PREFIX: &str = "clickwheel";

/// Initialize the logging system.
///
/// Lines go to `<dir>/clickwheel.YYYY-MM-DD`. `RUST_LOG` overrides the
/// configured filter. Keep the returned guard alive until exit; dropping it
/// flushes pending lines.
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(&settings.dir)?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &settings.dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_span_events(FmtSpan::CLOSE),
        )
        .try_init()?;

    tracing::info!(dir = %settings.dir.display(), "Logging initialized");
    Ok(guard)
}
