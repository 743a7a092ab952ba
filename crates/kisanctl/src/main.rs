//! kisanctl - operator console for the kisan-desk advisory engine.

use anyhow::Result;
use clap::Parser;
use kisanctl::cli::{Cli, Commands};
use kisanctl::{commands, console};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so the console transcript stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => console::run().await,
        Some(Commands::Ask {
            question,
            crop,
            state,
            lang,
            no_delay,
        }) => commands::ask(question, crop, state, lang, no_delay).await,
        Some(Commands::Kb { id }) => commands::kb(id),
        Some(Commands::Prompts) => commands::prompts(),
    }
}
