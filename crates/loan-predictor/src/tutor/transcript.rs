use chrono::{DateTime, Utc};
use serde::Serialize;

use super::responder::TutorResponder;

pub const GREETING: &str = "Hello! I'm your AI Tutor. I'm here to help you understand how loan predictions work in simple terms. What would you like to know?";
pub const FAILURE_REPLY: &str = "Oops! Something went wrong. Try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub speaker: Speaker,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Conversation state for one tutor session, owned by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatTranscript {
    pub fn new() -> Self {
        let mut transcript = Self {
            messages: Vec::new(),
            next_id: 1,
        };
        transcript.push(Speaker::Bot, GREETING.to_string());
        transcript
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Record a question and the tutor's reply. Blank questions are ignored.
    pub fn ask(&mut self, question: &str, responder: &TutorResponder) -> Option<&ChatMessage> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }

        self.push(Speaker::User, question.to_string());
        let answer = responder.answer(question);
        self.push(Speaker::Bot, answer.to_string());
        self.messages.last()
    }

    /// Record a question whose answer could not be fetched.
    pub fn record_failure(&mut self, question: &str) {
        let question = question.trim();
        if !question.is_empty() {
            self.push(Speaker::User, question.to_string());
        }
        self.push(Speaker::Bot, FAILURE_REPLY.to_string());
    }

    fn push(&mut self, speaker: Speaker, message: String) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            speaker,
            message,
            timestamp: Utc::now(),
        });
        self.next_id += 1;
    }
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new()
    }
}
