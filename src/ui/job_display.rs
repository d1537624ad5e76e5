//! Colorized printing of formatted job lists

use colored::Colorize;

use super::theme::{Glyphs, Theme};

/// Print a tool response to stdout, coloring the parts of each job block.
pub fn print_jobs(text: &str) {
    for line in text.lines() {
        println!("{}", style_line(line));
    }
}

pub fn style_line(line: &str) -> String {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];

    if line.starts_with("Found ") {
        return format!("{} {}", Glyphs::DIAMOND.color(Theme::ACCENT), line.bold());
    }

    if let Some((number, rest)) = split_heading(line) {
        // "N. **title** at company"
        if let Some((title, company)) = rest
            .strip_prefix("**")
            .and_then(|r| r.split_once("** at "))
        {
            return format!(
                "{} {} at {}",
                number.color(Theme::SUBTLE),
                title.color(Theme::ACCENT).bold(),
                company.color(Theme::HIGHLIGHT)
            );
        }
    }

    if let Some((label, value)) = trimmed.split_once(": ") {
        let value = match label {
            "Salary" => value.color(Theme::SALARY),
            "Link" => value.underline(),
            "Location" | "Posted" => value.normal(),
            _ => return line.to_string(),
        };
        return format!("{}{} {}", indent, format!("{}:", label).color(Theme::SUBTLE), value);
    }

    line.to_string()
}

fn split_heading(line: &str) -> Option<(&str, &str)> {
    let (number, rest) = line.split_once(". ")?;
    if !number.is_empty() && number.chars().all(|c| c.is_ascii_digit()) {
        Some((&line[..number.len() + 1], rest))
    } else {
        None
    }
}
