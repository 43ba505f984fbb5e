use colored::Colorize;

use crate::profile::Profile;

pub(super) fn body(profile: &Profile) -> String {
  let education = &profile.education;
  [
    "Education".cyan().bold().to_string(),
    String::new(),
    format!("{} {}", "Degree:".bold(), education.degree),
    format!("{} {}", "Institution:".bold(), education.institution),
    format!("{} {}", "CGPA:".bold(), education.cgpa.yellow()),
    format!("{} {}", "Period:".bold(), education.period),
    String::new(),
    education.remark.bright_black().to_string(),
  ]
  .join("\n")
}
