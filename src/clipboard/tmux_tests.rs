//! Tests for tmux

use super::*;
use crate::error::ErrorKind;
use std::cell::RefCell;
use std::collections::HashMap;

/// Scripted tmux that records every invocation
#[derive(Default)]
struct FakeTmux {
    replies: HashMap<String, Vec<u8>>,
    calls: RefCell<Vec<String>>,
}

impl FakeTmux {
    fn reply(mut self, command: &str, stdout: &str) -> Self {
        self.replies.insert(command.to_string(), stdout.as_bytes().to_vec());
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl TmuxRunner for FakeTmux {
    fn run(&self, args: &[&str]) -> Result<Vec<u8>, OscError> {
        let command = args.join(" ");
        self.calls.borrow_mut().push(command.clone());
        Ok(self.replies.get(&command).cloned().unwrap_or_default())
    }
}

fn bridge(fake: &FakeTmux) -> TmuxBridge<&FakeTmux> {
    TmuxBridge::new(fake, Duration::ZERO)
}

#[test]
fn test_paste_emits_buffer_verbatim() {
    let fake = FakeTmux::default()
        .reply("show -v set-clipboard", "external\n")
        .reply("save-buffer -", "clip\x00board\n");

    let mut out = Vec::new();
    let n = bridge(&fake).paste(&mut out).unwrap();

    assert_eq!(out, b"clip\x00board\n");
    assert_eq!(n, out.len());
    assert_eq!(
        fake.calls(),
        vec!["show -v set-clipboard", "refresh-client -l", "save-buffer -"]
    );
}

#[test]
fn test_paste_accepts_on() {
    let fake = FakeTmux::default().reply("show -v set-clipboard", "on");
    let mut out = Vec::new();
    assert!(bridge(&fake).paste(&mut out).is_ok());
}

#[test]
fn test_paste_refuses_without_set_clipboard() {
    for value in ["off", "", "external-ish"] {
        let fake = FakeTmux::default().reply("show -v set-clipboard", value);
        let mut out = Vec::new();

        let err = bridge(&fake).paste(&mut out).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Precondition);
        assert_eq!(fake.calls(), vec!["show -v set-clipboard"]);
        assert!(out.is_empty());
    }
}

#[test]
fn test_allow_passthrough_values() {
    for (value, ok) in [("on\n", true), ("all", true), ("off", false)] {
        let fake = FakeTmux::default().reply("show -gwsv allow-passthrough", value);
        assert_eq!(bridge(&fake).check_allow_passthrough().is_ok(), ok, "{}", value);
    }
}

#[test]
fn test_command_failure_aborts_paste() {
    struct Failing;
    impl TmuxRunner for Failing {
        fn run(&self, _args: &[&str]) -> Result<Vec<u8>, OscError> {
            Err(OscError::TmuxNotFound)
        }
    }

    let mut out = Vec::new();
    let err = TmuxBridge::new(Failing, Duration::ZERO)
        .paste(&mut out)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}
