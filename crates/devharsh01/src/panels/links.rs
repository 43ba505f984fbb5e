use colored::Colorize;

use crate::profile::Profile;

const LABEL_WIDTH: usize = 18;

pub(super) fn body(profile: &Profile) -> String {
  let links = &profile.links;
  let entries = [
    ("📧 Email:", links.email.bright_black()),
    ("🌐 Website:", links.website.cyan()),
    ("💼 LinkedIn:", links.linkedin.bright_black()),
    ("💻 GitHub:", links.github.bright_black()),
    ("📚 Stack Overflow:", links.stackoverflow.bright_black()),
    ("📄 Resume:", links.resume.bright_black()),
  ];

  let mut lines = vec!["Connect with me:".cyan().bold().to_string(), String::new()];
  // Pad before styling so escape codes do not count toward the width
  lines.extend(entries.into_iter().map(|(label, value)| {
    format!("{} {value}", format!("{label:<width$}", width = LABEL_WIDTH).bold())
  }));
  lines.push(String::new());
  lines.push("Feel free to reach out!".bright_black().to_string());
  lines.join("\n")
}
