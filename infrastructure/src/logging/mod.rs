//! Logging infrastructure — the failed read log file.
//!
//! Provides [`TextFailureLog`], a capped text file writer that implements
//! the [`FailureLog`](dictwrap_application::FailureLog) port.

mod text_log;

pub use text_log::TextFailureLog;
