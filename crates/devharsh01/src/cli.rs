use clap::{Command, CommandFactory, Parser};
use std::collections::HashSet;
use std::ffi::OsString;

pub const BIN_NAME: &str = "devharsh01";

/// Harsh Anand - Software Engineer & Tech Enthusiast
///
/// Flags pick a single panel. Unknown arguments are ignored.
#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
#[command(name = BIN_NAME)]
#[command(disable_help_flag = true, disable_version_flag = true, args_override_self = true)]
pub struct Cli {
  /// Show this help message
  #[arg(short, long)]
  pub help: bool,

  /// Show detailed skills
  #[arg(long)]
  pub skills: bool,

  /// Show work experience
  #[arg(long, visible_alias = "exp")]
  pub experience: bool,

  /// Show projects
  #[arg(long, visible_alias = "proj")]
  pub projects: bool,

  /// Show achievements
  #[arg(long, visible_alias = "ach")]
  pub achievements: bool,

  /// Show education details
  #[arg(long, visible_alias = "edu")]
  pub education: bool,

  /// Show all links
  #[arg(long)]
  pub links: bool,
}

impl Cli {
  /// Parse process arguments, dropping anything that is not a declared flag.
  ///
  /// The first item is the program name, as with `Cli::parse_from`.
  pub fn parse_lenient<I, T>(args: I) -> Self
  where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
  {
    let known = known_flags(&Cli::command());
    let mut args = args.into_iter().map(Into::into);
    let program = args.next().unwrap_or_else(|| OsString::from(BIN_NAME));

    let (recognized, ignored): (Vec<OsString>, Vec<OsString>) =
      args.partition(|arg| arg.to_str().is_some_and(|flag| known.contains(flag)));
    if !ignored.is_empty() {
      tracing::debug!(?ignored, "ignoring unrecognized arguments");
    }

    match Cli::try_parse_from(std::iter::once(program).chain(recognized)) {
      Ok(cli) => cli,
      Err(err) => {
        tracing::debug!(%err, "falling back to the default panel");
        Cli::default()
      }
    }
  }
}

/// Every spelling clap accepts for the declared flags: `--long`, aliases and `-s`
fn known_flags(command: &Command) -> HashSet<String> {
  let mut flags = HashSet::new();
  for arg in command.get_arguments() {
    if let Some(long) = arg.get_long() {
      flags.insert(format!("--{long}"));
    }
    if let Some(aliases) = arg.get_all_aliases() {
      flags.extend(aliases.into_iter().map(|alias| format!("--{alias}")));
    }
    if let Some(short) = arg.get_short() {
      flags.insert(format!("-{short}"));
    }
  }
  flags
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(args: &[&str]) -> Cli {
    Cli::parse_lenient(std::iter::once(BIN_NAME).chain(args.iter().copied()))
  }

  #[test]
  fn test_no_arguments_sets_nothing() {
    assert_eq!(parse(&[]), Cli::default());
    assert_eq!(Cli::parse_lenient(Vec::<String>::new()), Cli::default());
  }

  #[test]
  fn test_long_flags_and_aliases() {
    assert!(parse(&["--help"]).help);
    assert!(parse(&["-h"]).help);
    assert!(parse(&["--exp"]).experience);
    assert!(parse(&["--proj"]).projects);
    assert!(parse(&["--ach"]).achievements);
    assert!(parse(&["--edu"]).education);
    assert!(parse(&["--links"]).links);
  }

  #[test]
  fn test_unknown_arguments_are_dropped() {
    assert_eq!(parse(&["--bogus", "stray", "-x"]), Cli::default());
    let cli = parse(&["--bogus", "--skills", "--version"]);
    assert!(cli.skills);
    assert!(!cli.help);
  }

  #[test]
  fn test_repeated_and_aliased_flags_do_not_error() {
    assert!(parse(&["--skills", "--skills"]).skills);
    assert!(parse(&["--experience", "--exp"]).experience);
  }

  #[test]
  fn test_flag_values_are_not_accepted() {
    // `--skills=yes` is not a declared spelling, so it is ignored
    assert_eq!(parse(&["--skills=yes"]), Cli::default());
  }

  #[test]
  fn test_known_flags_cover_every_spelling() {
    let flags = known_flags(&Cli::command());
    for flag in [
      "-h", "--help", "--skills", "--experience", "--exp", "--projects", "--proj", "--achievements",
      "--ach", "--education", "--edu", "--links",
    ] {
      assert!(flags.contains(flag), "missing {flag}");
    }
    assert_eq!(flags.len(), 12);
  }
}
