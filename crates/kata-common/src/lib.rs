//! Shared plumbing for the kata command-line tools.
//!
//! Provides `tracing` subscriber setup and the logging/color flags that
//! both `csvviewer` and `wordcount` flatten into their argument parsers.

pub mod cli;
pub mod logging;

pub use cli::{CommonArgs, LogFormatArg, LogLevelArg};
pub use logging::{LogConfig, LogFormat, init_logging, init_logging_with_writer};
