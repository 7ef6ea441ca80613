/// Viewer — process-wide logging front end.
///
/// Scene, camera and controls are NOT stored here; they live in a
/// caller-owned `RenderContext`. The only global state is the logger slot,
/// guarded by an RwLock so any thread may log.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::error::Error;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn logger_slot() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::default())))
}

/// Entry point for the viewer's logging.
///
/// # Example
///
/// ```no_run
/// use furniture_viewer::furniture::Viewer;
/// use furniture_viewer::furniture::log::{DefaultLogger, LogSeverity};
///
/// Viewer::set_logger(DefaultLogger::with_min_severity(LogSeverity::Warn));
/// furniture_viewer::viewer_warn!("app", "model still loading");
/// Viewer::reset_logger();
/// ```
pub struct Viewer;

impl Viewer {
    /// Log an error with its source, then hand it back for `Err(...)`.
    pub(crate) fn log_and_return_error(source: &str, error: Error) -> Error {
        crate::viewer_error!(source, "{}", error);
        error
    }

    /// Replace the global logger.
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_slot().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_slot().write() {
            *lock = Box::new(DefaultLogger::default());
        }
    }

    /// Log without file:line. Used by viewer_trace! .. viewer_warn!.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = logger_slot().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Log with file:line. Used by viewer_error!.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = logger_slot().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}
