//! Harsh Anand's business card for the terminal.
//!
//! One run prints one panel: the banner and contact card by default, or the
//! panel picked by a flag. The output is composed in memory and written to
//! stdout in a single call.

pub mod banner;
pub mod cli;
pub mod layout;
pub mod output;
pub mod panels;
pub mod profile;

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::io::Write;

pub use cli::Cli;
pub use layout::Layout;
pub use panels::PanelKind;
pub use profile::{Profile, PROFILE};

/// Parse `args`, render the selected panel for `layout` and write it to `out`
pub fn run<I, T, W>(args: I, layout: &Layout, out: &mut W) -> Result<()>
where
  I: IntoIterator<Item = T>,
  T: Into<OsString>,
  W: Write,
{
  let cli = Cli::parse_lenient(args);
  let kind = PanelKind::from(&cli);
  tracing::debug!(?kind, width = layout.terminal_width, "rendering panel");

  let payload = panels::render(kind, &PROFILE, layout);
  output::emit(out, &payload).context("Failed to write the card to stdout")
}
