use clap::CommandFactory;
use colored::Colorize;

use crate::cli::{Cli, BIN_NAME};
use crate::profile::Profile;

/// Command list generated from the declared flags, so it cannot drift
/// from what the parser accepts.
pub(super) fn body(profile: &Profile) -> String {
  let command = Cli::command();

  let mut rows = vec![(BIN_NAME.to_string(), "Show main card".to_string(), Vec::new())];
  for arg in command.get_arguments() {
    let Some(long) = arg.get_long() else { continue };
    let description = arg.get_help().map(ToString::to_string).unwrap_or_default();
    let mut aliases: Vec<String> =
      arg.get_short().map(|short| format!("-{short}")).into_iter().collect();
    let visible = arg.get_visible_aliases().unwrap_or_default();
    aliases.extend(visible.into_iter().map(|alias| format!("--{alias}")));
    rows.push((format!("{BIN_NAME} --{long}"), description, aliases));
  }

  let column = rows.iter().map(|(invocation, _, _)| invocation.len()).max().unwrap_or(0);

  let mut lines = vec!["Available Commands:".cyan().bold().to_string(), String::new()];
  lines.extend(rows.into_iter().map(|(invocation, description, aliases)| {
    let invocation = format!("{invocation:<column$}");
    if aliases.is_empty() {
      format!("  {}  {description}", invocation.cyan())
    } else {
      let aliases = format!("({})", aliases.join(", "));
      format!("  {}  {description} {}", invocation.cyan(), aliases.bright_black())
    }
  }));
  lines.push(String::new());
  let website = profile.links.website.cyan();
  lines.push(format!("{} {website}", "For more info, visit:".bright_black()));
  lines.join("\n")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::profile::PROFILE;
  use marquee::strip_ansi;

  #[test]
  fn test_lists_every_flag_with_aliases() {
    let body = strip_ansi(&body(&PROFILE)).into_owned();
    let flags = [
      "--help",
      "--skills",
      "--experience",
      "--projects",
      "--achievements",
      "--education",
      "--links",
    ];
    for flag in flags {
      assert!(body.contains(&format!("devharsh01 {flag}")), "missing {flag}");
    }
    assert!(body.contains("Show this help message (-h)"));
    assert!(body.contains("Show work experience (--exp)"));
    assert!(body.contains("Show education details (--edu)"));
  }

  #[test]
  fn test_descriptions_are_aligned() {
    let body = strip_ansi(&body(&PROFILE)).into_owned();
    let starts: Vec<usize> = body
      .lines()
      .filter(|line| line.trim_start().starts_with("devharsh01"))
      .filter_map(|line| line.find("Show"))
      .collect();
    assert_eq!(starts.len(), 8);
    assert!(starts.iter().all(|start| *start == starts[0]));
  }
}
