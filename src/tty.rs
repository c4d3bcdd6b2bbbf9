//! Terminal transport
//!
//! Opens the terminal device in raw mode for the duration of one copy or
//! paste. Dropping the [`Tty`] drains pending output and restores the
//! previous terminal mode on every exit path.

mod trace;
#[cfg(not(unix))]
mod stdio;
#[cfg(unix)]
mod unix;

pub use trace::{LoggingReader, LoggingWriter};

#[cfg(not(unix))]
pub use stdio::{Tty, TtyReader};
#[cfg(unix)]
pub use unix::{Tty, TtyReader};
