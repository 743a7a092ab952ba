//! Shared library for the kisan-desk advisory console.
//!
//! Everything the operator console needs that is not terminal plumbing
//! lives here: the static advisory pack, the response engine that matches
//! a farmer's question against it, the per-call session and transcript
//! model, language packs for the templated reply framing, and the small
//! config/display helpers shared by the CLI.

pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod knowledge;
pub mod language;
pub mod render;
pub mod session;
pub mod transcript;

pub use engine::{respond, AgentContext, AgentResponse};
pub use error::DeskError;
pub use knowledge::{KnowledgeBase, KnowledgeCapsule};
pub use language::Language;
pub use session::CallSession;
pub use transcript::{Message, Speaker, Transcript};
