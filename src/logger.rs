use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use chrono::Local;

use crate::{
    arg::{Arg, render_args},
    config::LINELOG_CONFIG,
    level::Level,
    sink::{LogSink, LogStdout},
};

/// Thread-safe line logger.
///
/// One mutex guards the sink and the color flag and serializes each whole
/// format-and-write sequence, so concurrent callers never interleave within a
/// line. Lines reach the sink in lock-acquisition order.
pub struct Logger {
    inner: Mutex<Inner>,
}

struct Inner {
    sink: Box<dyn LogSink>,
    colors: bool,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Logger writing to stdout, colors per `LINELOG_COLORS` (default on).
    pub fn new() -> Self {
        Self::with_sink(Box::new(LogStdout))
    }

    /// Logger writing to the given sink.
    pub fn with_sink(sink: Box<dyn LogSink>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                sink,
                colors: LINELOG_CONFIG.COLORS,
            }),
        }
    }

    pub fn debug(&self, args: &[Arg]) {
        self.log(Level::Debug, args);
    }

    pub fn info(&self, args: &[Arg]) {
        self.log(Level::Info, args);
    }

    pub fn warning(&self, args: &[Arg]) {
        self.log(Level::Warning, args);
    }

    pub fn error(&self, args: &[Arg]) {
        self.log(Level::Error, args);
    }

    /// Redirects all subsequent lines to `sink`. The logger owns the sink
    /// until the next redirect or reset.
    pub fn set_output(&self, sink: Box<dyn LogSink>) {
        self.lock().sink = sink;
    }

    /// Reverts the sink to stdout. Idempotent.
    pub fn reset_output(&self) {
        self.lock().sink = Box::new(LogStdout);
    }

    pub fn colors_enabled(&self) -> bool {
        self.lock().colors
    }

    /// Colors apply to the Info/Warning/Error tag and message. Turn them off
    /// when the sink is a file.
    pub fn set_colors(&self, enabled: bool) {
        self.lock().colors = enabled;
    }

    /// Formats and emits one line at `level`.
    pub fn log(&self, level: Level, args: &[Arg]) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let mut inner = self.lock();
        let tagged = format!("{:>8}{}", level.tag(), render_args(args));
        let tagged = if inner.colors {
            level.colorize(tagged)
        } else {
            tagged
        };
        inner.sink.write_line(&format!("{timestamp} {tagged}"));
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A caller panicking mid-write must not take logging down with it.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

static GLOBAL_LOGGER: LazyLock<Logger> = LazyLock::new(Logger::new);

/// Process-wide logger used by the `log_*!` macros when no `to:` target is
/// given.
pub fn global() -> &'static Logger {
    &GLOBAL_LOGGER
}

/// Forwards `log` facade records to the global logger.
struct FacadeLogger;

static FACADE_LOGGER: FacadeLogger = FacadeLogger;

impl log::Log for FacadeLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        global().log(record.level().into(), &[Arg::display(record.args())]);
    }

    fn flush(&self) {}
}

/// Routes `log::info!` and friends through the global logger. Level
/// filtering stays with the `log` facade.
pub fn init() -> Result<(), log::SetLoggerError> {
    log::set_logger(&FACADE_LOGGER)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

#[cfg(test)]
fn captured_logger() -> (Logger, crate::sink::SharedBuffer) {
    let buffer = crate::sink::SharedBuffer::new();
    let logger = Logger::with_sink(Box::new(buffer.clone()));
    (logger, buffer)
}

#[cfg(test)]
fn strip_colors(text: &str) -> String {
    regex::Regex::new("\x1b\\[[0-9;]*m")
        .unwrap()
        .replace_all(text, "")
        .into_owned()
}

#[test]
fn test_line_shape() {
    let (logger, buffer) = captured_logger();
    logger.set_colors(false);
    crate::log_info!(to: logger, "loop", 0, "- thread", 3);
    let contents = buffer.contents();
    let shape = regex::Regex::new(
        r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3}\s+\[INFO\] loop 0 - thread 3\n$",
    )
    .unwrap();
    assert!(shape.is_match(&contents), "unexpected line: {contents:?}");
}

#[test]
fn test_empty_args_end_at_the_tag() {
    let (logger, buffer) = captured_logger();
    logger.set_colors(false);
    crate::log_warning!(to: logger);
    let contents = buffer.contents();
    assert!(contents.ends_with("[WARN]\n"), "unexpected line: {contents:?}");
}

#[test]
fn test_bools_and_precision_in_a_call() {
    let (logger, buffer) = captured_logger();
    logger.set_colors(false);
    crate::log_debug!(
        to: logger,
        true,
        crate::arg::precision(2),
        3.14159,
        crate::arg::precision(6),
        3.14159
    );
    let contents = buffer.contents();
    assert!(contents.ends_with("[DEBUG] true 3.14 3.141590\n"));
    assert!(!contents.contains(" 1 "));
}

#[test]
fn test_error_lines_carry_color_when_enabled() {
    colored::control::set_override(true);
    let (logger, buffer) = captured_logger();
    logger.set_colors(true);
    crate::log_error!(to: logger, "disk almost full");
    let line = buffer.contents();
    assert!(line.contains("\x1b[31m"), "missing red escape: {line:?}");
    assert!(line.trim_end().ends_with("\x1b[0m"), "missing reset: {line:?}");
    assert!(strip_colors(&line).contains("[ERROR] disk almost full"));
}

#[test]
fn test_colors_off_emits_no_escapes() {
    colored::control::set_override(true);
    let (logger, buffer) = captured_logger();
    logger.set_colors(false);
    assert!(!logger.colors_enabled());
    crate::log_error!(to: logger, "disk almost full");
    assert!(!buffer.contents().contains('\x1b'));
}

#[test]
fn test_debug_is_never_colorized() {
    colored::control::set_override(true);
    let (logger, buffer) = captured_logger();
    logger.set_colors(true);
    crate::log_debug!(to: logger, "verbose detail");
    assert!(!buffer.contents().contains('\x1b'));
}

#[test]
fn test_redirect_and_reset_round_trip() {
    let (logger, buffer) = captured_logger();
    logger.set_colors(false);
    crate::log_info!(to: logger, "captured");
    logger.reset_output();
    crate::log_info!(to: logger, "to stdout");
    let second = crate::sink::SharedBuffer::new();
    logger.set_output(Box::new(second.clone()));
    crate::log_info!(to: logger, "captured again");
    logger.reset_output();
    logger.reset_output();
    assert_eq!(buffer.contents().lines().count(), 1);
    assert_eq!(second.contents().lines().count(), 1);
    assert!(buffer.contents().contains("captured"));
    assert!(second.contents().contains("captured again"));
}
