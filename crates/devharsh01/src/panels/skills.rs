use colored::{Color, Colorize};

use crate::profile::Profile;

const CATEGORY_COLORS: [Color; 5] =
  [Color::Yellow, Color::Blue, Color::Green, Color::Magenta, Color::Cyan];
const PROBLEM_SOLVING_COLORS: [Color; 2] = [Color::Yellow, Color::Cyan];

pub(super) fn body(profile: &Profile) -> String {
  let skills = &profile.skills;
  let mut lines = vec!["Technical Skills".cyan().bold().to_string(), String::new()];

  for (category, color) in skills.categories.iter().zip(CATEGORY_COLORS.iter().cycle()) {
    lines.push(format!("{}:", category.name).color(*color).bold().to_string());
    lines.push(format!("  • {}", category.items.join(", ")));
    lines.push(String::new());
  }

  lines.push("Problem Solving:".white().bold().to_string());
  for (item, color) in skills.problem_solving.iter().zip(PROBLEM_SOLVING_COLORS.iter().cycle()) {
    lines.push(format!("  • {}", item.color(*color)));
  }
  lines.join("\n")
}
