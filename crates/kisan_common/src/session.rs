//! Per-call session state owned by the console loop.
//!
//! Holds the caller details the operator fills in plus the transcript.
//! No global state: tearing the session down drops everything with it.

use crate::engine::AgentContext;
use crate::language::Language;
use crate::transcript::{Message, Transcript};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallSession {
    pub id: Uuid,
    pub caller_name: String,
    /// State or district.
    pub region: String,
    pub crop: String,
    pub language: Language,
    pub transcript: Transcript,
}

impl CallSession {
    pub fn new(language: Language) -> Self {
        Self {
            id: Uuid::new_v4(),
            caller_name: String::new(),
            region: String::new(),
            crop: String::new(),
            language,
            transcript: Transcript::new(),
        }
    }

    /// The engine context for the session's current form fields.
    pub fn context(&self) -> AgentContext {
        AgentContext::new(self.crop.clone(), self.region.clone(), self.language)
    }

    /// Record the farmer's question. Returns false if the transcript cap
    /// refused it.
    pub fn record_farmer(&mut self, text: impl Into<String>) -> bool {
        self.transcript.push(Message::farmer(text))
    }

    /// Record the agent's reply. Returns false if the transcript cap
    /// refused it.
    pub fn record_agent(&mut self, text: impl Into<String>) -> bool {
        self.transcript.push(Message::agent(text))
    }
}

impl Default for CallSession {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
