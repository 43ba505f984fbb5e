use colored::Colorize;

use super::numbered;
use crate::profile::Profile;

pub(super) fn body(profile: &Profile) -> String {
  let mut lines = vec!["Work Experience".cyan().bold().to_string(), String::new()];

  for (index, exp) in profile.experience.iter().enumerate() {
    lines.push(numbered(index, exp.company));
    let (period, location) = (exp.period.bright_black(), exp.location.bright_black());
    lines.push(format!("   {} | {period} | {location}", exp.role.white()));
    lines.push(String::new());
    lines.push("Key Contributions:".bold().to_string());
    let bullet = "•".green();
    lines.extend(exp.highlights.iter().map(|item| format!("   {bullet} {}", item.white())));
    if index + 1 < profile.experience.len() {
      lines.push(String::new());
    }
  }
  lines.join("\n")
}
