//! Chat transcript domain types.
//!
//! Defines the append-only transcript entry (`Message`), the static
//! keyword-triggered response table entry (`KeywordResponse`), and the
//! bookkeeping types produced while resolving a bot reply.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single line in the visible conversation.
///
/// Appended in transcript order and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub text: String,
    pub is_user: bool,
}

impl Message {
    /// A line typed by the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: true,
        }
    }

    /// A line produced by the assistant (AI reply, keyword match, or fallback).
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: false,
        }
    }
}

/// A canned reply triggered when any of its keywords occurs in the user text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordResponse {
    pub keywords: Vec<String>,
    pub response: String,
}

impl KeywordResponse {
    pub fn new(keywords: &[&str], response: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            response: response.to_string(),
        }
    }
}

/// Where a bot reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    /// Text returned by the relay.
    Relay,
    /// First matching entry of the persona's keyword table.
    Keyword,
    /// Random pick from the static fallback list.
    Fallback,
}

impl fmt::Display for ReplySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplySource::Relay => write!(f, "relay"),
            ReplySource::Keyword => write!(f, "keyword"),
            ReplySource::Fallback => write!(f, "fallback"),
        }
    }
}

/// Kind of transient, user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// The user tried to send an empty or whitespace-only line.
    EmptyInput,
    /// The relay failed and a canned line was used instead.
    FallbackUsed,
}

/// A short-lived message shown next to the conversation, never appended to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Which built-in persona drives the prompt and canned lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersonaKind {
    #[default]
    DrSarcasm,
    Mindcare,
}

impl fmt::Display for PersonaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersonaKind::DrSarcasm => write!(f, "dr-sarcasm"),
            PersonaKind::Mindcare => write!(f, "mindcare"),
        }
    }
}

impl FromStr for PersonaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dr-sarcasm" | "sarcasm" => Ok(PersonaKind::DrSarcasm),
            "mindcare" | "mindcare-ai" => Ok(PersonaKind::Mindcare),
            other => Err(format!("invalid persona: '{other}'")),
        }
    }
}

/// Identity of an in-memory chat session (no persistence).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    /// UUIDv7 session ID, used only for log correlation.
    pub id: Uuid,
    pub persona: PersonaKind,
    pub started_at: DateTime<Utc>,
}

impl SessionInfo {
    pub fn new(persona: PersonaKind) -> Self {
        Self {
            id: Uuid::now_v7(),
            persona,
            started_at: Utc::now(),
        }
    }
}
