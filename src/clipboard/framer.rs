//! OSC 52 sequence framing
//!
//! Computes the open/close strings around the base64 payload, including the
//! Device Control String envelope that screen and tmux need to pass the
//! sequence through to the outer terminal.

use super::selector::ClipboardSelector;

pub const ESC: u8 = 0x1b;
pub const BEL: u8 = 0x07;

/// `ESC ] 5 2 ;`, also the header of a terminal's query response
pub const OSC52_HEADER: &[u8] = b"\x1b]52;";
pub const DCS_OPEN: &[u8] = b"\x1bP";
/// String Terminator, closes a DCS envelope
pub const DCS_CLOSE: &[u8] = b"\x1b\\";

/// Terminal multiplexer wrapping the terminal this process writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MultiplexerMode {
    #[default]
    None,
    Screen,
    Tmux,
    Zellij,
}

impl MultiplexerMode {
    /// Whether the payload must be split into several DCS envelopes
    pub fn chunks_payload(self) -> bool {
        self == MultiplexerMode::Screen
    }
}

/// Open/close byte strings for one copy or paste operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceWrapper {
    open: Vec<u8>,
    close: Vec<u8>,
}

impl SequenceWrapper {
    pub fn new(mode: MultiplexerMode, selector: &ClipboardSelector) -> Self {
        let (mut open, mut close) = match mode {
            MultiplexerMode::Screen => {
                log::debug!("Setting screen dcs passthrough");
                (DCS_OPEN.to_vec(), DCS_CLOSE.to_vec())
            }
            MultiplexerMode::Tmux => {
                log::debug!("Setting tmux dcs passthrough");
                ([DCS_OPEN, b"tmux;".as_slice(), &[ESC][..]].concat(), DCS_CLOSE.to_vec())
            }
            MultiplexerMode::None | MultiplexerMode::Zellij => (Vec::new(), Vec::new()),
        };

        open.extend_from_slice(OSC52_HEADER);
        open.extend_from_slice(selector.as_str().as_bytes());
        open.push(b';');
        close.insert(0, BEL);

        Self { open, close }
    }

    pub fn open(&self) -> &[u8] {
        &self.open
    }

    pub fn close(&self) -> &[u8] {
        &self.close
    }

    /// `open ? close`, asks the terminal to report the clipboard
    pub fn query(&self) -> Vec<u8> {
        let mut query = Vec::with_capacity(self.open.len() + 1 + self.close.len());
        query.extend_from_slice(&self.open);
        query.push(b'?');
        query.extend_from_slice(&self.close);
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapper(mode: MultiplexerMode, selector: &str) -> SequenceWrapper {
        SequenceWrapper::new(mode, &ClipboardSelector::new(selector).unwrap())
    }

    #[test]
    fn test_base_form() {
        let w = wrapper(MultiplexerMode::None, "c");
        assert_eq!(w.open(), b"\x1b]52;c;");
        assert_eq!(w.close(), b"\x07");
    }

    #[test]
    fn test_screen_envelope() {
        let w = wrapper(MultiplexerMode::Screen, "p");
        assert_eq!(w.open(), b"\x1bP\x1b]52;p;");
        assert_eq!(w.close(), b"\x07\x1b\\");
    }

    #[test]
    fn test_tmux_envelope() {
        let w = wrapper(MultiplexerMode::Tmux, "c");
        assert_eq!(w.open(), b"\x1bPtmux;\x1b\x1b]52;c;");
        assert_eq!(w.close(), b"\x07\x1b\\");
    }

    #[test]
    fn test_zellij_uses_base_form() {
        assert_eq!(
            wrapper(MultiplexerMode::Zellij, "c"),
            wrapper(MultiplexerMode::None, "c")
        );
    }

    #[test]
    fn test_empty_selector() {
        let w = wrapper(MultiplexerMode::None, "");
        assert_eq!(w.open(), b"\x1b]52;;");
    }

    #[test]
    fn test_query() {
        assert_eq!(
            wrapper(MultiplexerMode::None, "c").query(),
            b"\x1b]52;c;?\x07"
        );
        assert_eq!(
            wrapper(MultiplexerMode::Tmux, "").query(),
            b"\x1bPtmux;\x1b\x1b]52;;?\x07\x1b\\"
        );
    }

    #[test]
    fn test_only_screen_chunks() {
        assert!(MultiplexerMode::Screen.chunks_payload());
        assert!(!MultiplexerMode::Tmux.chunks_payload());
        assert!(!MultiplexerMode::None.chunks_payload());
        assert!(!MultiplexerMode::Zellij.chunks_payload());
    }
}
