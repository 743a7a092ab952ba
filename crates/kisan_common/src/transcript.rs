//! Transcript model for the live call notes panel.
//!
//! An ordered, in-memory list of farmer/agent messages for the current
//! session only. Never persisted. A hard cap keeps a runaway session from
//! growing without bound; pushes past the cap are refused and counted
//! rather than silently dropped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hard cap on messages per session transcript.
pub const MAX_TRANSCRIPT_MESSAGES: usize = 200;

/// Who is speaking in a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Farmer,
    Agent,
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Farmer => write!(f, "farmer"),
            Self::Agent => write!(f, "agent"),
        }
    }
}

/// A single transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub speaker: Speaker,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    pub fn new(speaker: Speaker, text: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self {
            speaker,
            text: text.into(),
            sent_at,
        }
    }

    /// A farmer message stamped now.
    pub fn farmer(text: impl Into<String>) -> Self {
        Self::new(Speaker::Farmer, text, Utc::now())
    }

    /// An agent message stamped now.
    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(Speaker::Agent, text, Utc::now())
    }
}

/// Ordered list of messages for the current session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<Message>,
    /// Messages refused by the cap; not serialized.
    #[serde(skip)]
    dropped: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a message, enforcing the cap. Returns false when refused.
    pub fn push(&mut self, message: Message) -> bool {
        if self.messages.len() >= MAX_TRANSCRIPT_MESSAGES {
            self.dropped += 1;
            false
        } else {
            self.messages.push(message);
            true
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn was_capped(&self) -> bool {
        self.dropped > 0
    }

    pub fn dropped_count(&self) -> usize {
        self.dropped
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
// Tests are in tests/transcript_tests.rs
