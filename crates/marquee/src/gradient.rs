//! Horizontal rainbow gradients for banner art.

use colored::Colorize;

use crate::ansi::visible_width;

/// Colour each non-whitespace character by its column, sweeping the hue
/// wheel once across the widest line. Columns line up across rows, so
/// vertical strokes keep a single colour.
///
/// Expects unstyled input. Output is plain when colouring is disabled.
pub fn rainbow(text: &str) -> String {
  let width = text.split('\n').map(visible_width).max().unwrap_or(0).max(1);

  text
    .split('\n')
    .map(|line| {
      line
        .chars()
        .enumerate()
        .map(|(column, ch)| {
          if ch.is_whitespace() {
            ch.to_string()
          } else {
            let (r, g, b) = hue_to_rgb(360.0 * column as f64 / width as f64);
            ch.to_string().truecolor(r, g, b).to_string()
          }
        })
        .collect::<String>()
    })
    .collect::<Vec<_>>()
    .join("\n")
}

/// Fully saturated, full value HSV colour for `hue` in degrees
pub fn hue_to_rgb(hue: f64) -> (u8, u8, u8) {
  let sector = hue.rem_euclid(360.0) / 60.0;
  let rising = 1.0 - ((sector % 2.0) - 1.0).abs();
  let (r, g, b) = match sector as u32 {
    0 => (1.0, rising, 0.0),
    1 => (rising, 1.0, 0.0),
    2 => (0.0, 1.0, rising),
    3 => (0.0, rising, 1.0),
    4 => (rising, 0.0, 1.0),
    _ => (1.0, 0.0, rising),
  };
  let channel = |value: f64| (value * 255.0).round() as u8;
  (channel(r), channel(g), channel(b))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::strip_ansi;

  #[test]
  fn test_primary_hues() {
    assert_eq!(hue_to_rgb(0.0), (255, 0, 0));
    assert_eq!(hue_to_rgb(60.0), (255, 255, 0));
    assert_eq!(hue_to_rgb(120.0), (0, 255, 0));
    assert_eq!(hue_to_rgb(240.0), (0, 0, 255));
    assert_eq!(hue_to_rgb(360.0), (255, 0, 0));
  }

  #[test]
  fn test_rainbow_keeps_visible_text() {
    let art = "╔═══╗\n║ █ ║\n╚═══╝";
    assert_eq!(strip_ansi(&rainbow(art)), art);
  }

  #[test]
  fn test_rainbow_keeps_line_structure() {
    let painted = rainbow("ab\n\ncd");
    assert_eq!(painted.split('\n').count(), 3);
    assert_eq!(painted.split('\n').nth(1), Some(""));
  }
}
