//! Tracing setup for hosts embedding the engine. The library itself only
//! emits events; a binary calls [`init_tracing`] once at startup with its
//! resolved [`EngineConfig`].

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::EngineConfig;

const LOG_FILE_PREFIX: &str = "eval.log";
const FALLBACK_FILTER: &str = "info";

/// Keeps the background file writer alive; dropping it flushes and stops
/// the worker thread.
pub struct FileLogGuard {
    _guard: WorkerGuard,
}

pub fn file_logging_enabled() -> bool {
    enabled_flag(std::env::var("ENABLE_FILE_LOGS").ok().as_deref())
}

fn enabled_flag(value: Option<&str>) -> bool {
    matches!(value, Some("true") | Some("1"))
}

fn env_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

/// Installs the global subscriber at the engine's configured level. With
/// `ENABLE_FILE_LOGS` set, events also go to a daily-rolling file under
/// `LOG_DIR`; the returned guard must outlive the program's logging.
pub fn init_tracing(config: &EngineConfig) -> Option<FileLogGuard> {
    let registry = tracing_subscriber::registry()
        .with(env_filter(&config.log_level))
        .with(fmt::layer().with_target(true));

    if file_logging_enabled() {
        let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string());
        match std::fs::create_dir_all(&log_dir) {
            Ok(()) => {
                let appender = rolling::daily(&log_dir, LOG_FILE_PREFIX);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                registry
                    .with(fmt::layer().with_writer(writer).with_ansi(false))
                    .init();
                return Some(FileLogGuard { _guard: guard });
            }
            Err(err) => eprintln!("failed to create log directory {log_dir}: {err}"),
        }
    }

    registry.init();
    None
}
