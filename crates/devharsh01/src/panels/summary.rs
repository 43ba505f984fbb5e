use colored::Colorize;
use marquee::{center_block, Frame};

use crate::banner;
use crate::cli::BIN_NAME;
use crate::layout::Layout;
use crate::profile::Profile;

/// Banner and contact card, both centered. The card width is locked from
/// the measured terminal width so a resize mid-run cannot change it.
pub(super) fn render(profile: &Profile, layout: &Layout, frame: Frame) -> String {
  let card = frame.width(layout.summary_width()).render(&body(profile));
  format!(
    "{}\n{}\n",
    banner::render(profile.headline, layout),
    center_block(&card, layout.terminal_width)
  )
}

fn body(profile: &Profile) -> String {
  let links = &profile.links;
  [
    format!("{} {}", profile.name.cyan().bold(), profile.handle.bright_black()),
    String::new(),
    format!("{}  {}", "Bio:".bold(), profile.bio.white()),
    String::new(),
    format!("{}  {}", "📧 Email:".bold(), links.email.bright_black()),
    format!("{}  {}", "📄 Resume:".bold(), links.resume.bright_black()),
    format!("{}  {}", "🌐 Website:".bold(), links.website.cyan()),
    format!("{}  {}", "💻 GitHub:".bold(), links.github.bright_black()),
    format!("{}  {}", "💼 LinkedIn:".bold(), links.linkedin.bright_black()),
    String::new(),
    format!(
      "{} {} {}",
      "Run".bright_black(),
      format!("{BIN_NAME} --help").cyan(),
      "for more options".bright_black()
    ),
  ]
  .join("\n")
}
