//! Rounded frames around blocks of styled text.
//!
//! Spacing follows the usual terminal box convention: one unit of padding
//! or margin is one row vertically and three columns horizontally.

use colored::{Color, Colorize};
use std::borrow::Cow;
use textwrap::core::display_width;

use crate::ansi::{is_reset, sgr_sequences, RESET};
use crate::banner_line;

const HORIZONTAL_SCALE: usize = 3;

/// A bordered box with a coloured rounded outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
  pub border_color: Color,
  pub padding: usize,
  pub margin: usize,
  /// Total width including the border. Content is wrapped to fit.
  pub width: Option<usize>,
}

impl Frame {
  /// One unit of padding and margin, sized to the content
  pub fn new(border_color: Color) -> Self {
    Self { border_color, padding: 1, margin: 1, width: None }
  }

  /// Lock the outer width so the box does not follow its content
  pub fn width(mut self, width: usize) -> Self {
    self.width = Some(width);
    self
  }

  /// Draw `content` inside the frame. Lines are joined with `\n` and the
  /// result has no trailing newline.
  pub fn render(&self, content: &str) -> String {
    let gutter = " ".repeat(self.padding * HORIZONTAL_SCALE);
    let margin = " ".repeat(self.margin * HORIZONTAL_SCALE);

    let inner = match self.width {
      Some(width) => width.saturating_sub(2 + 2 * gutter.len()).max(1),
      None => content.split('\n').map(display_width).max().unwrap_or(0),
    };
    let span = inner + 2 * gutter.len();

    let side = "│".color(self.border_color).to_string();
    let edge = |left: char, right: char| {
      let rule = format!("{left}{}{right}", banner_line(span, '─'));
      format!("{margin}{}", rule.color(self.border_color))
    };
    let blank = format!("{margin}{side}{}{side}", " ".repeat(span));

    let mut rows = vec![String::new(); self.margin];
    rows.push(edge('╭', '╮'));
    rows.extend(std::iter::repeat(blank.clone()).take(self.padding));
    for line in content.split('\n').flat_map(|line| fit(line, inner)) {
      let fill = " ".repeat(inner.saturating_sub(display_width(&line)));
      rows.push(format!("{margin}{side}{gutter}{line}{fill}{gutter}{side}"));
    }
    rows.extend(std::iter::repeat(blank).take(self.padding));
    rows.push(edge('╰', '╯'));
    rows.extend(std::iter::repeat(String::new()).take(self.margin));
    rows.join("\n")
  }
}

/// Wrap a line only when it does not fit. Styling open at the end of a
/// wrapped row is closed there and reopened on the next one, so every row
/// stands alone between the borders.
fn fit(line: &str, width: usize) -> Vec<Cow<'_, str>> {
  if display_width(line) <= width {
    return vec![Cow::Borrowed(line)];
  }
  let mut active = String::new();
  textwrap::wrap(line, width)
    .into_iter()
    .map(|row| {
      let mut styled = format!("{active}{row}");
      for sequence in sgr_sequences(&row) {
        if is_reset(sequence) {
          active.clear();
        } else {
          active.push_str(sequence);
        }
      }
      if !active.is_empty() {
        styled.push_str(RESET);
      }
      Cow::Owned(styled)
    })
    .collect()
}
