//! Clipboard selection parameter of OSC 52 (`Pc`)

use std::fmt;
use std::str::FromStr;

use crate::error::OscError;

/// Which clipboard buffers an OSC 52 sequence targets
///
/// Zero or more of `c` (clipboard), `p` (primary), `q` (secondary),
/// `s` (select) and `0`-`7` (cut buffers), in the order given.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClipboardSelector(String);

impl ClipboardSelector {
    pub fn new(selector: &str) -> Result<Self, OscError> {
        if selector.bytes().all(is_selector_byte) {
            Ok(Self(selector.to_string()))
        } else {
            Err(OscError::InvalidSelector(selector.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_selector_byte(b: u8) -> bool {
    matches!(b, b'c' | b'p' | b'q' | b's' | b'0'..=b'7')
}

impl FromStr for ClipboardSelector {
    type Err = OscError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ClipboardSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_selector_is_valid() {
        assert_eq!(ClipboardSelector::new("").unwrap().as_str(), "");
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        assert_eq!(ClipboardSelector::new("pcc7").unwrap().as_str(), "pcc7");
    }

    #[test]
    fn test_rejects_semicolon() {
        // ';' would break the response framing
        assert!(matches!(
            ClipboardSelector::new("c;"),
            Err(OscError::InvalidSelector(s)) if s == "c;"
        ));
    }

    #[test]
    fn test_rejects_cut_buffer_eight() {
        assert!(ClipboardSelector::new("8").is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_selectors_accepted(s in "[cpqs0-7]{0,8}") {
            let selector = ClipboardSelector::new(&s).unwrap();
            prop_assert_eq!(selector.as_str(), s.as_str());
        }

        #[test]
        fn prop_foreign_bytes_rejected(
            prefix in "[cpqs0-7]{0,4}",
            bad in "[^cpqs0-7]",
        ) {
            let s = format!("{}{}", prefix, bad);
            prop_assert!(ClipboardSelector::new(&s).is_err());
        }
    }
}
