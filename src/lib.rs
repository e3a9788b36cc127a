//! # linelog
//! Thread-safe console/file logger with timestamped, level-tagged, optionally
//! colorized single-line output.
//!
//! Each call produces one line of the form
//! `YYYY-MM-DD HH:MM:SS.mmm [LEVEL] arg1 arg2 ...`, serialized under a single
//! lock so concurrent callers never interleave.
//!
//! ## Usage
//! ```rust
//! use linelog::{log_info, log_warning, precision};
//!
//! log_info!("loop", 0, "- thread", 3);
//! log_warning!("pi is roughly", precision(2), 3.14159);
//! ```
//!
//! ## Logging to a file
//! The logger owns its sink. Turn colors off when redirecting to a file.
//! ```rust
//! use linelog::{LogFile, Logger, log_error};
//!
//! let logger = Logger::new();
//! logger.set_colors(false);
//! let file = LogFile::new("/tmp/linelog_doc.log").unwrap();
//! logger.set_output(Box::new(file));
//! log_error!(to: logger, "disk almost full");
//! logger.reset_output();
//! ```
//!
//! ## `log` facade
//! ```rust
//! linelog::init().ok();
//! log::info!("Hello, world!");
//! ```

mod arg;
mod config;
mod level;
mod logger;
mod macros;
mod sink;

pub use arg::{Arg, precision};
pub use config::LINELOG_CONFIG;
pub use level::Level;
pub use logger::{Logger, global, init};
pub use sink::{LogFile, LogSink, LogStdout, SharedBuffer};
