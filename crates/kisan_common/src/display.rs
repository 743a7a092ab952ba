//! Terminal output helpers shared by the console commands.
//!
//! Every line the console shows goes through here so the styling stays
//! consistent. Color is gated on NO_COLOR and TTY detection.

use owo_colors::OwoColorize;

/// Check if color output should be used.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Console output helper.
#[derive(Debug, Clone, Copy)]
pub struct Ui {
    use_color: bool,
}

impl Ui {
    /// Detect color support from the environment.
    pub fn auto() -> Self {
        Self {
            use_color: should_use_color(),
        }
    }

    /// Force color on or off (config override, tests).
    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Build from an explicit preference, falling back to auto-detection.
    pub fn from_preference(preference: Option<bool>) -> Self {
        match preference {
            Some(use_color) => Self::with_color(use_color),
            None => Self::auto(),
        }
    }

    pub fn color_enabled(&self) -> bool {
        self.use_color
    }

    pub fn info(&self, text: &str) {
        println!("{}", text);
    }

    pub fn success(&self, text: &str) {
        if self.use_color {
            println!("{}", text.green());
        } else {
            println!("{}", text);
        }
    }

    pub fn warning(&self, text: &str) {
        if self.use_color {
            println!("{}", text.yellow());
        } else {
            println!("WARNING: {}", text);
        }
    }

    pub fn error(&self, text: &str) {
        if self.use_color {
            eprintln!("{}", text.red());
        } else {
            eprintln!("ERROR: {}", text);
        }
    }

    pub fn section_header(&self, title: &str) {
        println!();
        if self.use_color {
            println!("{}", title.bold());
        } else {
            println!("{}", title);
        }
    }

    pub fn bullet_list(&self, items: &[&str]) {
        for item in items {
            println!("  • {}", item);
        }
    }

    pub fn blank(&self) {
        println!();
    }

    /// Dimmed metadata line, e.g. a speaker label with a clock.
    pub fn meta(&self, text: &str) {
        if self.use_color {
            println!("{}", text.dimmed());
        } else {
            println!("{}", text);
        }
    }
}

/// Boxed capsule summary for the knowledge highlights panel.
pub fn capsule_box(title: &str, summary: &str, tags: &[String], use_color: bool) -> String {
    let mut output = String::new();
    output.push_str("┌────────────────────────────────────────────────────────┐\n");
    let formatted_title = if use_color {
        format!("│ {}\n", title.bold())
    } else {
        format!("│ {}\n", title)
    };
    output.push_str(&formatted_title);
    output.push_str("├────────────────────────────────────────────────────────┤\n");
    for line in wrap_text(summary, 54) {
        output.push_str(&format!("│ {}\n", line));
    }
    if !tags.is_empty() {
        let tag_line = tags
            .iter()
            .take(3)
            .map(|t| format!("[{}]", t))
            .collect::<Vec<_>>()
            .join(" ");
        if use_color {
            output.push_str(&format!("│ {}\n", tag_line.cyan()));
        } else {
            output.push_str(&format!("│ {}\n", tag_line));
        }
    }
    output.push_str("└────────────────────────────────────────────────────────┘\n");
    output
}

/// Ten-cell confidence bar, e.g. `███████░░░ 72%`.
pub fn confidence_bar(confidence: f32) -> String {
    let clamped = confidence.clamp(0.0, 1.0);
    let filled = (clamped * 10.0).round() as usize;
    let empty = 10 - filled.min(10);
    format!(
        "{}{} {:.0}%",
        "█".repeat(filled.min(10)),
        "░".repeat(empty),
        clamped * 100.0
    )
}

/// Greedy word wrap at `width` columns.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_bar_bounds() {
        assert!(confidence_bar(0.0).starts_with("░░░░░░░░░░"));
        assert!(confidence_bar(1.0).starts_with("██████████"));
        // Out-of-range input clamps rather than panicking
        assert!(confidence_bar(3.5).contains("100%"));
    }

    #[test]
    fn test_capsule_box_contains_content() {
        let tags = vec!["cotton".to_string(), "pest".to_string()];
        let boxed = capsule_box("Title", "A short summary.", &tags, false);
        assert!(boxed.contains("Title"));
        assert!(boxed.contains("summary"));
        assert!(boxed.contains("[cotton]"));
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let wrapped = wrap_text("one two three four five six seven", 10);
        assert!(wrapped.len() > 1);
        for line in wrapped {
            assert!(line.chars().count() <= 10);
        }
    }
}
