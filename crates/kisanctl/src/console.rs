//! Interactive console - the call simulation desk.
//!
//! Line-oriented loop: slash commands fill in the caller form, anything
//! else is treated as the farmer's question. A blank line is ignored
//! without touching the engine. The agent reply appears after a fixed
//! cosmetic delay; tearing the console down mid-delay just drops the
//! pending reply.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use kisan_common::config::ConsoleConfig;
use kisan_common::display::{capsule_box, confidence_bar, Ui};
use kisan_common::engine::respond;
use kisan_common::knowledge::KnowledgeBase;
use kisan_common::language::Language;
use kisan_common::render::{format_clock, render_response};
use kisan_common::session::CallSession;
use kisan_common::transcript::Speaker;
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Canned example queries, pre-filled on the desk's quick buttons.
pub const QUICK_PROMPTS: [&str; 4] = [
    "My cotton crop leaves are curling with small insects. What should I spray?",
    "How often should I irrigate sugarcane with drip during peak summer?",
    "Mandis are paying low for tomatoes. Any buyers offering better prices?",
    "Need a soil plan to increase organic carbon before next paddy season.",
];

const TRANSCRIPT_WIDTH: usize = 72;

/// One parsed line of operator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    /// Empty after trimming; ignored, the engine is not invoked.
    Blank,
    Quit,
    Help,
    Name(String),
    State(String),
    Crop(String),
    Lang(String),
    Prompts,
    Quick(usize),
    Kb,
    Playbook,
    Question(String),
}

/// Parse one line of operator input.
pub fn parse_input(line: &str) -> ConsoleInput {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ConsoleInput::Blank;
    }
    if !trimmed.starts_with('/') {
        return ConsoleInput::Question(trimmed.to_string());
    }

    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    };

    match command {
        "/quit" | "/exit" => ConsoleInput::Quit,
        "/help" => ConsoleInput::Help,
        "/name" => ConsoleInput::Name(rest.to_string()),
        "/state" => ConsoleInput::State(rest.to_string()),
        "/crop" => ConsoleInput::Crop(rest.to_string()),
        "/lang" => ConsoleInput::Lang(rest.to_string()),
        "/prompts" => ConsoleInput::Prompts,
        "/quick" => match rest.parse::<usize>() {
            Ok(n) => ConsoleInput::Quick(n),
            Err(_) => ConsoleInput::Help,
        },
        "/kb" => ConsoleInput::Kb,
        "/playbook" => ConsoleInput::Playbook,
        // Unknown slash commands get the help text, not the engine
        _ => ConsoleInput::Help,
    }
}

/// Cosmetic "analysing" pause before the agent reply. A zero delay skips
/// the spinner entirely.
pub async fn thinking_delay(delay_ms: u64) {
    if delay_ms == 0 {
        return;
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message("Analysing scenario...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    spinner.finish_and_clear();
}

/// Start the interactive console.
pub async fn run() -> Result<()> {
    let config = ConsoleConfig::load();
    let ui = Ui::from_preference(config.use_color);
    let kb = KnowledgeBase::builtin();
    tracing::debug!(
        capsules = kb.len(),
        delay_ms = config.response_delay_ms,
        "console starting"
    );

    let mut session = CallSession::new(config.language);
    session.region = config.default_state.clone();
    session.crop = config.default_crop.clone();

    print_welcome(&ui, &kb, &session);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_prompt(ui.color_enabled());
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                ui.error(&format!("Error reading input: {}", e));
                continue;
            }
            None => break, // EOF
        };

        match parse_input(&line) {
            ConsoleInput::Blank => continue,

            ConsoleInput::Quit => {
                ui.blank();
                ui.info("Call closed. The transcript is not kept.");
                break;
            }

            ConsoleInput::Help => print_help(&ui),

            ConsoleInput::Name(value) => {
                session.caller_name = value;
                ack_field(&ui, "Caller name", &session.caller_name);
            }

            ConsoleInput::State(value) => {
                session.region = value;
                ack_field(&ui, "State / district", &session.region);
            }

            ConsoleInput::Crop(value) => {
                session.crop = value;
                ack_field(&ui, "Crop focus", &session.crop);
            }

            ConsoleInput::Lang(code) => match Language::from_code(&code) {
                Some(language) => {
                    session.language = language;
                    ui.success(&format!("Interaction language: {}", language.native_name()));
                }
                None => {
                    ui.warning(&format!("Unknown language {:?}. I can speak:", code));
                    ui.bullet_list(&["en - English", "hi - हिंदी"]);
                }
            },

            ConsoleInput::Prompts => {
                ui.section_header("Quick prompts");
                for (index, prompt) in QUICK_PROMPTS.iter().enumerate() {
                    ui.info(&format!("  {}. {}", index + 1, prompt));
                }
                ui.meta("Submit one with /quick <n>.");
            }

            ConsoleInput::Quick(n) => match QUICK_PROMPTS.get(n.wrapping_sub(1)) {
                Some(prompt) => {
                    handle_question(&ui, &mut session, &kb, &config, prompt).await;
                }
                None => {
                    ui.warning(&format!("No quick prompt {}. There are {}.", n, QUICK_PROMPTS.len()));
                }
            },

            ConsoleInput::Kb => {
                ui.section_header(&format!("Advisory knowledge base ({} capsules)", kb.len()));
                for capsule in kb.capsules() {
                    println!(
                        "{}",
                        capsule_box(&capsule.title, &capsule.summary, &capsule.crop_focus, ui.color_enabled())
                    );
                }
            }

            ConsoleInput::Playbook => {
                ui.section_header("Escalation playbook");
                let steps: Vec<&str> = session
                    .language
                    .pack()
                    .escalation_steps
                    .iter()
                    .copied()
                    .collect();
                ui.bullet_list(&steps);
            }

            ConsoleInput::Question(question) => {
                handle_question(&ui, &mut session, &kb, &config, &question).await;
            }
        }
    }

    Ok(())
}

/// Record and answer one farmer question.
async fn handle_question(
    ui: &Ui,
    session: &mut CallSession,
    kb: &KnowledgeBase,
    config: &ConsoleConfig,
    question: &str,
) {
    if !session.record_farmer(question) {
        ui.warning("Transcript is full; this call should be closed and a new one opened.");
        return;
    }
    print_entry(ui, session, session.transcript.len() - 1);

    let response = respond(question, &session.context(), kb);
    thinking_delay(config.response_delay_ms).await;

    let text = render_response(&response, session.language);
    if session.record_agent(text) {
        print_entry(ui, session, session.transcript.len() - 1);
        ui.meta(&format!("  {}", confidence_bar(response.confidence)));
        ui.blank();
    }
}

/// Print one transcript entry with its speaker label and clock.
fn print_entry(ui: &Ui, session: &CallSession, index: usize) {
    let Some(message) = session.transcript.messages().get(index) else {
        return;
    };

    let label = match message.speaker {
        Speaker::Farmer if !session.caller_name.is_empty() => {
            format!("FARMER · {}", session.caller_name)
        }
        Speaker::Farmer => "FARMER".to_string(),
        Speaker::Agent => "AGENT".to_string(),
    };

    ui.blank();
    ui.meta(&format!("[{}] {}", format_clock(&message.sent_at), label));
    for line in message.text.lines() {
        if line.chars().count() > TRANSCRIPT_WIDTH {
            for wrapped in textwrap::wrap(line, TRANSCRIPT_WIDTH) {
                ui.info(&format!("  {}", wrapped));
            }
        } else {
            ui.info(&format!("  {}", line));
        }
    }
}

fn print_prompt(use_color: bool) {
    if use_color {
        print!("{} ", "desk>".green().bold());
    } else {
        print!("desk> ");
    }
    let _ = io::stdout().flush();
}

fn ack_field(ui: &Ui, field: &str, value: &str) {
    if value.is_empty() {
        ui.info(&format!("{} cleared.", field));
    } else {
        ui.success(&format!("{}: {}", field, value));
    }
}

fn print_welcome(ui: &Ui, kb: &KnowledgeBase, session: &CallSession) {
    ui.section_header("Kisan Desk - call simulation console");
    ui.info("Capture the caller's details, type the farmer's question, and");
    ui.info("dispatch an actionable response within the first 180 seconds.");
    ui.blank();

    for capsule in kb.highlights(3) {
        println!(
            "{}",
            capsule_box(&capsule.title, &capsule.summary, &capsule.crop_focus, ui.color_enabled())
        );
    }

    ui.meta(&format!(
        "Language: {} · /help for commands · /quit to close the call",
        session.language.native_name()
    ));
    ui.blank();
}

fn print_help(ui: &Ui) {
    ui.section_header("Console commands");
    ui.bullet_list(&[
        "/name <caller>   - set the caller's name",
        "/state <place>   - set the state / district",
        "/crop <crop>     - set the crop focus",
        "/lang <en|hi>    - set the interaction language",
        "/prompts         - list the quick prompts",
        "/quick <n>       - submit quick prompt n",
        "/kb              - browse the advisory knowledge base",
        "/playbook        - show the escalation playbook",
        "/quit            - close the call",
    ]);
    ui.info("Anything else is sent to the desk as the farmer's question.");
    ui.blank();
}
