//! Renders a structured reply into the transcript-entry text block.
//!
//! Pure string assembly; coloring is the display module's job. The block
//! order is headline, summary, numbered action steps, then the dashed
//! bullet sections, closing with the percent confidence line. Empty
//! sections are omitted.

use crate::engine::AgentResponse;
use crate::language::Language;
use chrono::{DateTime, Local, Utc};

/// Format a reply as the multi-section transcript text.
pub fn render_response(response: &AgentResponse, language: Language) -> String {
    let pack = language.pack();
    let mut lines: Vec<String> = Vec::new();

    lines.push(response.headline.clone());
    lines.push(String::new());
    lines.push(response.summary.clone());

    if !response.detailed_plan.is_empty() {
        lines.push(String::new());
        lines.push(pack.action_steps.to_string());
        for (index, step) in response.detailed_plan.iter().enumerate() {
            lines.push(format!("{}. {}", index + 1, step));
        }
    }

    push_bullet_section(&mut lines, pack.seasonal_watchouts, &response.seasonal_notes);
    push_bullet_section(&mut lines, pack.pro_tips, &response.improvement_tips);
    push_bullet_section(&mut lines, pack.need_from_farmer, &response.suggested_follow_ups);

    lines.push(String::new());
    lines.push(format!(
        "{} {:.0}%",
        pack.confidence_label,
        response.confidence * 100.0
    ));

    lines.join("\n")
}

fn push_bullet_section(lines: &mut Vec<String>, label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(label.to_string());
    for item in items {
        lines.push(format!("- {}", item));
    }
}

/// Clock text for a transcript entry, in the operator's local time.
pub fn format_clock(sent_at: &DateTime<Utc>) -> String {
    sent_at.with_timezone(&Local).format("%H:%M").to_string()
}

// Tests are in tests/render_tests.rs
