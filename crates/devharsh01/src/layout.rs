/// Terminal geometry, measured once per run and threaded through rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
  pub terminal_width: usize,
}

impl Layout {
  pub fn detect() -> Self {
    Self::with_width(marquee::terminal_width())
  }

  pub fn with_width(terminal_width: usize) -> Self {
    Self { terminal_width }
  }

  /// Outer width of the summary card: six columns narrower than the
  /// terminal, kept between 60 and 75.
  pub fn summary_width(&self) -> usize {
    self.terminal_width.saturating_sub(6).clamp(60, 75)
  }
}

impl Default for Layout {
  fn default() -> Self {
    Self::with_width(marquee::FALLBACK_WIDTH)
  }
}
