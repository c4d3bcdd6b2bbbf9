//! Clipboard module for osc
//!
//! OSC 52 protocol engine:
//! - Sequence framing for plain terminals, screen and tmux
//! - Chunked copy for screen's DCS length limit
//! - Timeout-bounded paste response parsing
//! - tmux paste-buffer bridge

mod chunking;
pub mod framer;
pub mod osc52;
pub mod paste;
pub mod selector;
pub mod timed_read;
pub mod tmux;

pub use chunking::{CHUNK_SIZE, ChunkingWriter};
pub use framer::{MultiplexerMode, SequenceWrapper};
pub use osc52::{copy, encode_osc52};
pub use paste::{PasteOptions, paste};
pub use selector::ClipboardSelector;
