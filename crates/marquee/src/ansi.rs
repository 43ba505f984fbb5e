//! Escape-sequence handling for width measurement.
//!
//! Only SGR sequences (`ESC [ params m`) are recognised. That is the full set
//! `colored` emits, including 256-colour and truecolor forms.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

const SGR_PATTERN: &str = r"\x1b\[[0-9;]*m";

/// Clears every active style
pub const RESET: &str = "\x1b[0m";

static SGR_REGEX: Lazy<Regex> =
  Lazy::new(|| Regex::new(SGR_PATTERN).expect("SGR pattern is a valid regex"));

/// Remove styling escape sequences, borrowing when there is nothing to strip
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
  SGR_REGEX.replace_all(text, "")
}

/// Character count of `text` once styling is removed
pub fn visible_width(text: &str) -> usize {
  strip_ansi(text).chars().count()
}

/// The styling sequences in `text`, in order
pub fn sgr_sequences(text: &str) -> impl Iterator<Item = &str> {
  SGR_REGEX.find_iter(text).map(|found| found.as_str())
}

pub fn is_reset(sequence: &str) -> bool {
  sequence == RESET || sequence == "\x1b[m"
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_strip_plain_text_is_borrowed() {
    assert!(matches!(strip_ansi("hello"), Cow::Borrowed("hello")));
  }

  #[test]
  fn test_strip_removes_sgr_sequences() {
    assert_eq!(strip_ansi("\x1b[1;36mHarsh\x1b[0m \x1b[90m@dev\x1b[39m"), "Harsh @dev");
    assert_eq!(strip_ansi("\x1b[38;2;255;0;0m█\x1b[0m"), "█");
    assert_eq!(strip_ansi("\x1b[m"), "");
  }

  #[test]
  fn test_other_escapes_are_left_alone() {
    // Cursor movement is not styling and keeps its bytes.
    assert_eq!(strip_ansi("\x1b[2Jx"), "\x1b[2Jx");
  }

  #[test]
  fn test_visible_width_counts_chars_not_bytes() {
    assert_eq!(visible_width("╭──╮"), 4);
    assert_eq!(visible_width("\x1b[33m8.33\x1b[0m"), 4);
    assert_eq!(visible_width(""), 0);
  }

  #[test]
  fn test_sgr_sequences_in_order() {
    let found: Vec<&str> = sgr_sequences("\x1b[1m\x1b[36mhi\x1b[0m there").collect();
    assert_eq!(found, ["\x1b[1m", "\x1b[36m", RESET]);
    assert!(is_reset("\x1b[m"));
    assert!(!is_reset("\x1b[39m"));
  }
}
