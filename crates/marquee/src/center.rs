//! Horizontal centering of multi-line, possibly colored, text blocks.

use crate::ansi::{strip_ansi, visible_width};

/// Width assumed when stdout is not attached to a terminal.
pub const FALLBACK_WIDTH: usize = 80;

/// Current column count of stdout, or `FALLBACK_WIDTH` when output is redirected
pub fn terminal_width() -> usize {
  console::Term::stdout()
    .size_checked()
    .map(|(_rows, cols)| usize::from(cols))
    .filter(|&cols| cols > 0)
    .unwrap_or(FALLBACK_WIDTH)
}

/// Widest visible line of `block`. Blank lines are not measured.
pub fn block_width(block: &str) -> usize {
  block
    .split('\n')
    .filter(|line| !strip_ansi(line).trim().is_empty())
    .map(visible_width)
    .max()
    .unwrap_or(0)
}

/// Left padding that centers a block of `block_width` columns, clamped at zero
pub fn left_padding(block_width: usize, terminal_width: usize) -> usize {
  terminal_width.saturating_sub(block_width) / 2
}

/// Prefix every line of `block` with the same padding so the block sits
/// centered within `terminal_width` columns.
///
/// Lines wider than the terminal are never truncated; the whole block is
/// then left at column zero.
pub fn center_block(block: &str, terminal_width: usize) -> String {
  let padding = " ".repeat(left_padding(block_width(block), terminal_width));
  block.split('\n').map(|line| format!("{padding}{line}")).collect::<Vec<_>>().join("\n")
}
