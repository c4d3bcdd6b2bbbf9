//! osc library - OSC 52 clipboard access from inside a terminal
//!
//! This library exposes the clipboard engine used by the `osc` binary.

pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod tty;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use clipboard::{ClipboardSelector, MultiplexerMode, SequenceWrapper};
pub use config::Settings;
pub use error::OscError;
