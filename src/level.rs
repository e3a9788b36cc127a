use colored::Colorize;

/// Severity attached to a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
}

impl Level {
    /// Bracketed tag. The formatter right-justifies it to a fixed column.
    pub(crate) fn tag(self) -> &'static str {
        match self {
            Level::Debug => "[DEBUG]",
            Level::Info => "[INFO]",
            Level::Warning => "[WARN]",
            Level::Error => "[ERROR]",
        }
    }

    /// Wraps tag and message in the level color. Debug stays uncolored.
    pub(crate) fn colorize(self, text: String) -> String {
        match self {
            Level::Debug => text,
            Level::Info => text.green().to_string(),
            Level::Warning => text.yellow().to_string(),
            Level::Error => text.red().to_string(),
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warning,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        }
    }
}

#[test]
fn test_tags_fit_in_eight_columns() {
    for level in [Level::Debug, Level::Info, Level::Warning, Level::Error] {
        assert!(level.tag().len() <= 8);
    }
}

#[test]
fn test_facade_level_mapping() {
    assert_eq!(Level::from(log::Level::Trace), Level::Debug);
    assert_eq!(Level::from(log::Level::Warn), Level::Warning);
}
