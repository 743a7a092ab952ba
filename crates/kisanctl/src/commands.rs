//! One-shot subcommand implementations.

use anyhow::Result;
use kisan_common::config::ConsoleConfig;
use kisan_common::display::{capsule_box, confidence_bar, Ui};
use kisan_common::engine::{respond, AgentContext};
use kisan_common::knowledge::KnowledgeBase;
use kisan_common::language::Language;
use kisan_common::render::render_response;

use crate::console::{thinking_delay, QUICK_PROMPTS};

/// Answer a single question and exit.
pub async fn ask(
    question: String,
    crop: Option<String>,
    state: Option<String>,
    lang: Option<Language>,
    no_delay: bool,
) -> Result<()> {
    let config = ConsoleConfig::load();
    let ui = Ui::from_preference(config.use_color);

    let question = question.trim().to_string();
    if question.is_empty() {
        // Same contract as the console loop: a blank question is a no-op
        ui.warning("Nothing to ask: the question was empty.");
        return Ok(());
    }

    let ctx = AgentContext::new(
        crop.unwrap_or_else(|| config.default_crop.clone()),
        state.unwrap_or_else(|| config.default_state.clone()),
        lang.unwrap_or(config.language),
    );

    let kb = KnowledgeBase::builtin();
    let response = respond(&question, &ctx, &kb);

    if !no_delay {
        thinking_delay(config.response_delay_ms).await;
    }

    ui.blank();
    ui.info(&render_response(&response, ctx.language));
    ui.blank();
    ui.meta(&confidence_bar(response.confidence));
    Ok(())
}

/// List the knowledge base, or show one capsule in full.
pub fn kb(id: Option<String>) -> Result<()> {
    let ui = Ui::auto();
    let kb = KnowledgeBase::builtin();

    match id {
        Some(id) => match kb.get(&id) {
            Some(capsule) => {
                ui.section_header(&capsule.title);
                ui.info(&capsule.summary);
                ui.blank();
                ui.info(&capsule.body);
                ui.section_header("Action steps");
                for (index, step) in capsule.plan.iter().enumerate() {
                    ui.info(&format!("  {}. {}", index + 1, step));
                }
                if !capsule.seasonal_notes.is_empty() {
                    ui.section_header("Seasonal notes");
                    let notes: Vec<&str> = capsule.seasonal_notes.iter().map(String::as_str).collect();
                    ui.bullet_list(&notes);
                }
                ui.blank();
                ui.meta(&format!("tags: {}", capsule.crop_focus.join(", ")));
            }
            None => {
                ui.error(&format!("No capsule with id {:?}", id));
                ui.info("Run `kisanctl kb` to list available capsules.");
            }
        },
        None => {
            ui.section_header(&format!("Advisory knowledge base ({} capsules)", kb.len()));
            for capsule in kb.capsules() {
                println!(
                    "{}",
                    capsule_box(&capsule.title, &capsule.summary, &capsule.crop_focus, ui.color_enabled())
                );
                ui.meta(&format!("  id: {}", capsule.id));
                ui.blank();
            }
            ui.meta("Show one in full with `kisanctl kb --id <id>`.");
        }
    }
    Ok(())
}

/// Print the quick prompts used at the desk.
pub fn prompts() -> Result<()> {
    let ui = Ui::auto();
    ui.section_header("Quick prompts");
    for (index, prompt) in QUICK_PROMPTS.iter().enumerate() {
        ui.info(&format!("  {}. {}", index + 1, prompt));
    }
    ui.blank();
    ui.meta("In the console, submit one with /quick <n>.");
    Ok(())
}
