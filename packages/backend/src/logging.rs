//! Tracing setup for the lookup service: stdout always, plus a daily
//! rolling file when [`Config::log_dir`] is set.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Keeps the non-blocking file writer flushing until the process exits.
/// Hold this in `main` for the lifetime of the service.
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

pub fn init_tracing(config: &Config) -> LogGuard {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout = fmt::layer().with_target(true);
    let base = tracing_subscriber::registry().with(filter).with(stdout);

    let Some(log_dir) = config.log_dir.as_deref() else {
        base.init();
        return LogGuard { _file: None };
    };

    if let Err(err) = std::fs::create_dir_all(log_dir) {
        base.init();
        tracing::warn!(%log_dir, error = %err, "log directory unavailable, file logging disabled");
        return LogGuard { _file: None };
    }

    let appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "words-api.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    base.with(fmt::layer().with_writer(writer).with_ansi(false).with_target(true))
        .init();
    LogGuard { _file: Some(guard) }
}
