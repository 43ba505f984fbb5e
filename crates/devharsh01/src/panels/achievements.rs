use colored::Colorize;

use super::numbered;
use crate::profile::Profile;

pub(super) fn body(profile: &Profile) -> String {
  let mut lines = vec!["Achievements & Certifications".cyan().bold().to_string(), String::new()];

  for (index, achievement) in profile.achievements.iter().enumerate() {
    lines.push(numbered(index, achievement.title));
    lines.push(format!("   {}", achievement.detail.white()));
    if index + 1 < profile.achievements.len() {
      lines.push(String::new());
    }
  }
  lines.join("\n")
}
