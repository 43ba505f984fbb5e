//! One bordered panel per flag.

mod achievements;
mod education;
mod experience;
mod help;
mod links;
mod projects;
mod skills;
mod summary;

use colored::{Color, Colorize};
use marquee::Frame;

use crate::cli::Cli;
use crate::layout::Layout;
use crate::profile::Profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
  Summary,
  Help,
  Skills,
  Experience,
  Projects,
  Achievements,
  Education,
  Links,
}

impl PanelKind {
  pub fn border_color(self) -> Color {
    match self {
      PanelKind::Summary | PanelKind::Education => Color::Cyan,
      PanelKind::Help | PanelKind::Achievements => Color::Green,
      PanelKind::Skills => Color::Yellow,
      PanelKind::Experience => Color::Blue,
      PanelKind::Projects | PanelKind::Links => Color::Magenta,
    }
  }
}

impl From<&Cli> for PanelKind {
  fn from(cli: &Cli) -> Self {
    // Highest priority first
    let flag_groups = [
      (cli.help, PanelKind::Help),
      (cli.skills, PanelKind::Skills),
      (cli.experience, PanelKind::Experience),
      (cli.projects, PanelKind::Projects),
      (cli.achievements, PanelKind::Achievements),
      (cli.education, PanelKind::Education),
      (cli.links, PanelKind::Links),
    ];

    flag_groups
      .iter()
      .find(|(is_set, _)| *is_set)
      .map(|(_, kind)| *kind)
      .unwrap_or(PanelKind::Summary)
  }
}

/// Everything one invocation prints, newline-terminated
pub fn render(kind: PanelKind, profile: &Profile, layout: &Layout) -> String {
  let frame = Frame::new(kind.border_color());
  let body = match kind {
    PanelKind::Summary => return summary::render(profile, layout, frame),
    PanelKind::Help => help::body(profile),
    PanelKind::Skills => skills::body(profile),
    PanelKind::Experience => experience::body(profile),
    PanelKind::Projects => projects::body(profile),
    PanelKind::Achievements => achievements::body(profile),
    PanelKind::Education => education::body(profile),
    PanelKind::Links => links::body(profile),
  };
  format!("{}\n", frame.render(&body))
}

/// Numbered entry heading shared by the list panels
fn numbered(index: usize, title: &str) -> String {
  format!("{}. {title}", index + 1).yellow().bold().to_string()
}
