//! The rainbow "HARSH" banner shown above the summary card.

use marquee::{banner_line, center_block, rainbow};

use crate::layout::Layout;

const INNER_WIDTH: usize = 55;
const LETTER_INDENT: usize = 8;

const LETTERS: [&str; 6] = [
  "██╗  ██╗ █████╗ ██████╗ ███████╗██╗  ██╗",
  "██║  ██║██╔══██╗██╔══██╗██╔════╝██║  ██║",
  "███████║███████║██████╔╝███████╗███████║",
  "██╔══██║██╔══██║██╔══██╗╚════██║██╔══██║",
  "██║  ██║██║  ██║██║  ██║███████║██║  ██║",
  "╚═╝  ╚═╝╚═╝  ╚═╝╚═╝  ╚═╝╚══════╝╚═╝  ╚═╝",
];

/// Uncoloured banner art framed in double-line glyphs
pub fn art(headline: &str) -> String {
  let edge = banner_line(INNER_WIDTH, '═');
  let blank = format!("║{}║", " ".repeat(INNER_WIDTH));

  let mut rows = vec![format!("╔{edge}╗"), blank.clone()];
  rows.extend(LETTERS.iter().map(|letters| {
    format!(
      "║{}{letters:<width$}║",
      " ".repeat(LETTER_INDENT),
      width = INNER_WIDTH - LETTER_INDENT
    )
  }));
  rows.push(blank.clone());
  rows.push(format!("║{headline:^width$}║", width = INNER_WIDTH));
  rows.push(blank);
  rows.push(format!("╚{edge}╝"));
  rows.join("\n")
}

/// Banner painted with a rainbow and centered for the terminal
pub fn render(headline: &str, layout: &Layout) -> String {
  center_block(&rainbow(&art(headline)), layout.terminal_width)
}
