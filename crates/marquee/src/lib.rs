//! ## Features
//!
//! - Escape-sequence aware width measurement
//! - Multi-line block centering against the live terminal width
//! - Rounded frames with padding, margin and optional fixed width
//! - Rainbow gradients for banner art
//!
//! ## Usage
//!
//! Measuring: `strip_ansi()`, `visible_width()`, `block_width()`
//!
//! Layout: `center_block()`, `terminal_width()`, `Frame::render()`
//!
//! Decoration: `rainbow()`, `banner_line()`
//!
//! Everything here returns a `String`; nothing writes to the terminal.

pub mod ansi;
pub mod center;
pub mod frame;
pub mod gradient;

pub use ansi::{strip_ansi, visible_width};
pub use center::{block_width, center_block, left_padding, terminal_width, FALLBACK_WIDTH};
pub use frame::Frame;
pub use gradient::rainbow;

/// Create a banner line of the specified length and character
pub fn banner_line(length: usize, char: char) -> String {
  char.to_string().repeat(length)
}
