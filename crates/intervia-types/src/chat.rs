//! Conversational chat-session types for the alternate chat entry point.
//!
//! The chat flow is a thinner, stateful alternative to the structured
//! interview endpoints: it shares the same question cycle but is keyed by
//! this simpler in-memory shape and driven by free-text messages (the
//! `"start"` sentinel begins the interview).

use serde::{Deserialize, Serialize};

use std::fmt;

use crate::interview::{InterviewMode, TOTAL_QUESTIONS};

/// Who produced a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSpeaker {
    User,
    Bot,
}

impl fmt::Display for ChatSpeaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatSpeaker::User => write!(f, "user"),
            ChatSpeaker::Bot => write!(f, "bot"),
        }
    }
}

/// One turn in a chat-style interview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub speaker: ChatSpeaker,
    pub content: String,
}

/// Chat-style interview session state.
///
/// Lazily created on the first message with default role/domain/mode; the
/// question counter and completion flag follow the same five-slot cycle as
/// the structured [`Session`](crate::interview::Session).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub role: String,
    pub domain: String,
    pub mode: InterviewMode,
    pub question_number: u32,
    pub last_question: Option<String>,
    pub history: Vec<ChatTurn>,
    pub is_complete: bool,
}

impl ChatSession {
    /// Record a turn in the transcript.
    pub fn push_turn(&mut self, speaker: ChatSpeaker, content: impl Into<String>) {
        self.history.push(ChatTurn {
            speaker,
            content: content.into(),
        });
    }

    /// True when every question slot has been consumed.
    pub fn past_final_question(&self) -> bool {
        self.question_number > TOTAL_QUESTIONS
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self {
            role: "Software Engineer".to_string(),
            domain: "General".to_string(),
            mode: InterviewMode::Technical,
            question_number: 1,
            last_question: None,
            history: Vec::new(),
            is_complete: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chat_session() {
        let session = ChatSession::default();
        assert_eq!(session.role, "Software Engineer");
        assert_eq!(session.domain, "General");
        assert_eq!(session.mode, InterviewMode::Technical);
        assert_eq!(session.question_number, 1);
        assert!(session.last_question.is_none());
        assert!(!session.is_complete);
    }

    #[test]
    fn test_past_final_question() {
        let mut session = ChatSession::default();
        assert!(!session.past_final_question());
        session.question_number = TOTAL_QUESTIONS + 1;
        assert!(session.past_final_question());
    }

    #[test]
    fn test_push_turn_appends_history() {
        let mut session = ChatSession::default();
        session.push_turn(ChatSpeaker::User, "start");
        session.push_turn(ChatSpeaker::Bot, "Tell me about yourself.");
        assert_eq!(session.history.len(), 2);
        assert_eq!(session.history[0].speaker, ChatSpeaker::User);
    }
}
