use assert_cmd::prelude::*;

use predicates::prelude::*;
use predicates::str::contains;
use std::process::Command;

/// The card binary with colour forced off so output is plain text
fn card_cmd() -> Command {
  let mut cmd = Command::cargo_bin("devharsh01").expect("binary exists");
  cmd.env("NO_COLOR", "1").env_remove("CLICOLOR_FORCE");
  cmd
}

fn plain_stdout(args: &[&str]) -> String {
  let output = card_cmd().args(args).output().expect("binary runs");
  assert!(output.status.success());
  marquee::strip_ansi(&String::from_utf8_lossy(&output.stdout)).into_owned()
}

#[test]
fn test_default_shows_banner_and_contact_card() {
  let stdout = plain_stdout(&[]);
  assert!(stdout.contains("╔═══"));
  assert!(stdout.contains("██╗  ██╗"));
  assert!(stdout.contains("Harsh Anand @devHarsh01"));
  assert!(stdout.contains("Software Engineer & Tech Enthusiast"));
  assert_eq!(stdout.matches("Harsh Anand @devHarsh01").count(), 1);
}

#[test]
fn test_each_flag_shows_its_panel() {
  let cases = [
    ("--help", "Available Commands:"),
    ("-h", "Available Commands:"),
    ("--skills", "Technical Skills"),
    ("--experience", "Work Experience"),
    ("--exp", "Work Experience"),
    ("--projects", "Projects & Open Source"),
    ("--proj", "Projects & Open Source"),
    ("--achievements", "Achievements & Certifications"),
    ("--ach", "Achievements & Certifications"),
    ("--education", "8.33"),
    ("--edu", "8.33"),
    ("--links", "Connect with me:"),
  ];

  for (flag, header) in cases {
    let without_banner = contains(header).and(contains("╔═══").not());
    card_cmd().arg(flag).assert().success().stdout(without_banner);
  }
}

#[test]
fn test_help_panel_wins_over_other_flags() {
  card_cmd()
    .args(["--links", "--skills", "--help"])
    .assert()
    .success()
    .stdout(contains("Available Commands:").and(contains("Technical Skills").not()));
}

#[test]
fn test_unknown_flags_fall_through_to_default() {
  let stdout = plain_stdout(&["--frobnicate", "extra"]);
  assert!(stdout.contains("Harsh Anand @devHarsh01"));
  assert!(stdout.contains("╔═══"));
}

#[test]
fn test_unknown_flags_do_not_hide_known_ones() {
  assert!(plain_stdout(&["--verbose", "--edu"]).contains("CGPA: 8.33"));
}

#[test]
fn test_nothing_is_logged_by_default() {
  card_cmd()
    .args(["--frobnicate"])
    .env_remove("RUST_LOG")
    .assert()
    .success()
    .stderr(predicate::str::is_empty());
}

#[test]
fn test_redirected_output_uses_fallback_width() {
  // stdout is a pipe here, so the summary card is locked at 74 columns
  let stdout = plain_stdout(&[]);
  let top = stdout.lines().find(|line| line.contains('╭')).expect("card top border");
  assert_eq!(top.trim_start().chars().count(), 74);
}
