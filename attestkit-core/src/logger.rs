//! Bridges the `log` facade to a host-provided logger.
//!
//! The debug provider announces freshly generated tokens through this
//! bridge so a developer can read the value off the host's console and
//! register it.

use std::sync::{Arc, OnceLock};

/// Receiver for log messages emitted by `AttestKit`.
///
/// Implemented by the host application; exported via `UniFFI` so foreign
/// languages can supply their own sink.
#[uniffi::export(with_foreign)]
pub trait Logger: Sync + Send {
    /// Logs `message` at `level`.
    fn log(&self, level: LogLevel, message: String);
}

/// Severity of a log message.
#[derive(Debug, Clone, uniffi::Enum)]
pub enum LogLevel {
    /// Very low priority, extremely detailed messages.
    Trace,
    /// Lower priority debugging information.
    Debug,
    /// Informational messages highlighting progress.
    Info,
    /// Potentially harmful situations.
    Warn,
    /// Error events the library may still recover from.
    Error,
}

/// Forwards `log` records to the host-provided [`Logger`].
struct ForeignLogger;

impl log::Log for ForeignLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let is_record_from_attestkit = record
            .module_path()
            .is_some_and(|module_path| module_path.starts_with("attestkit"));

        let is_debug_or_trace_level =
            record.level() == log::Level::Debug || record.level() == log::Level::Trace;

        // Debug/Trace noise from other crates is not forwarded to the host.
        if is_debug_or_trace_level && !is_record_from_attestkit {
            return;
        }

        if let Some(logger) = LOGGER_INSTANCE.get() {
            let message = format!("{}", record.args());
            logger.log(log_level(record.level()), message);
        } else {
            eprintln!("Logger not set: {}", record.args());
        }
    }

    fn flush(&self) {}
}

const fn log_level(level: log::Level) -> LogLevel {
    match level {
        log::Level::Error => LogLevel::Error,
        log::Level::Warn => LogLevel::Warn,
        log::Level::Info => LogLevel::Info,
        log::Level::Debug => LogLevel::Debug,
        log::Level::Trace => LogLevel::Trace,
    }
}

static LOGGER_INSTANCE: OnceLock<Arc<dyn Logger>> = OnceLock::new();

/// Sets the global logger. Call once, before any other `AttestKit` API.
///
/// A second call is ignored.
#[uniffi::export]
pub fn set_logger(logger: Arc<dyn Logger>) {
    match LOGGER_INSTANCE.set(logger) {
        Ok(()) => (),
        Err(_) => println!("Logger already set"),
    }

    if let Err(e) = init_logger() {
        eprintln!("Failed to set logger: {e}");
    }
}

fn init_logger() -> Result<(), log::SetLoggerError> {
    static LOGGER: ForeignLogger = ForeignLogger;
    log::set_logger(&LOGGER)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
