//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap. Keeps argument parsing separate
//! from execution logic; with no subcommand the interactive console
//! starts.

use clap::{Parser, Subcommand};
use kisan_common::language::Language;

/// Kisan Desk operator console
#[derive(Parser)]
#[command(name = "kisanctl")]
#[command(about = "Kisan Desk - farmer advisory call-center console", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Subcommand (if not provided, starts the interactive console)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Answer a single farmer question and exit
    Ask {
        /// The farmer's question
        question: String,

        /// Crop focus, e.g. "Cotton"
        #[arg(long)]
        crop: Option<String>,

        /// State or district, e.g. "Akola, Maharashtra"
        #[arg(long)]
        state: Option<String>,

        /// Interaction language code (en or hi)
        #[arg(long)]
        lang: Option<Language>,

        /// Skip the cosmetic response delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Browse the advisory knowledge base
    Kb {
        /// Show a single capsule in full by id
        #[arg(long)]
        id: Option<String>,
    },

    /// Print the quick prompts used at the desk
    Prompts,
}
