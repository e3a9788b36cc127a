/// Logs a debug line. Targets the global logger, or the logger given with the
/// `to:` form. Arguments are anything convertible to [`Arg`](crate::Arg),
/// including [`precision`](crate::precision) tokens.
#[macro_export]
macro_rules! log_debug {
    (to: $logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.debug(&[$($crate::Arg::from($arg)),*])
    };
    ($($arg:expr),* $(,)?) => {
        $crate::global().debug(&[$($crate::Arg::from($arg)),*])
    };
}

/// Logs an info line. Same forms as [`log_debug!`].
#[macro_export]
macro_rules! log_info {
    (to: $logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.info(&[$($crate::Arg::from($arg)),*])
    };
    ($($arg:expr),* $(,)?) => {
        $crate::global().info(&[$($crate::Arg::from($arg)),*])
    };
}

/// Logs a warning line. Same forms as [`log_debug!`].
#[macro_export]
macro_rules! log_warning {
    (to: $logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.warning(&[$($crate::Arg::from($arg)),*])
    };
    ($($arg:expr),* $(,)?) => {
        $crate::global().warning(&[$($crate::Arg::from($arg)),*])
    };
}

/// Logs an error line. Same forms as [`log_debug!`].
#[macro_export]
macro_rules! log_error {
    (to: $logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.error(&[$($crate::Arg::from($arg)),*])
    };
    ($($arg:expr),* $(,)?) => {
        $crate::global().error(&[$($crate::Arg::from($arg)),*])
    };
}
