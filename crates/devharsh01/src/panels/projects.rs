use colored::Colorize;

use super::numbered;
use crate::profile::Profile;

pub(super) fn body(profile: &Profile) -> String {
  let mut lines = vec!["Projects & Open Source".cyan().bold().to_string(), String::new()];

  for (index, project) in profile.projects.iter().enumerate() {
    lines.push(numbered(index, project.name));
    lines.push(format!("   {}", project.description.white()));
    lines.push(format!("   {} {}", "Tech:".bold(), project.tech.bright_black()));
    if let Some(achievement) = project.achievement {
      lines.push(format!("   {}", format!("🏆 {achievement}").green()));
    }
    if index + 1 < profile.projects.len() {
      lines.push(String::new());
    }
  }
  lines.join("\n")
}
