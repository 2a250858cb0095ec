// src/chat/message.rs
//! Conversation log entries and the log itself

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// Transient entries signalling work in progress. Their ids are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Typing,
    Upload,
}

impl Placeholder {
    pub fn id(self) -> &'static str {
        match self {
            Placeholder::Typing => "typing",
            Placeholder::Upload => "upload",
        }
    }

    fn matches(id: &str) -> bool {
        id == Placeholder::Typing.id() || id == Placeholder::Upload.id()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_typing: bool,
}

impl Message {
    pub fn user(id: String, content: impl Into<String>) -> Self {
        Self::new(id, content, Sender::User)
    }

    pub fn assistant(id: String, content: impl Into<String>) -> Self {
        Self::new(id, content, Sender::Assistant)
    }

    fn new(id: String, content: impl Into<String>, sender: Sender) -> Self {
        Self {
            id,
            content: content.into(),
            sender,
            timestamp: Utc::now(),
            is_typing: false,
        }
    }

    pub fn placeholder(kind: Placeholder, content: impl Into<String>) -> Self {
        Self {
            id: kind.id().to_string(),
            content: content.into(),
            sender: Sender::Assistant,
            timestamp: Utc::now(),
            is_typing: true,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.is_typing && Placeholder::matches(&self.id)
    }
}

/// Generates message ids of the form `{unix_millis}-{seq}`.
///
/// The sequence keeps ids unique and ordered even when several messages
/// land within the same millisecond.
#[derive(Debug, Default)]
pub struct MessageIds {
    seq: AtomicU64,
}

impl MessageIds {
    pub fn next(&self) -> String {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", Utc::now().timestamp_millis(), seq)
    }
}

/// Ordered, append-only conversation log.
///
/// The only removals are placeholders, and at most one placeholder is ever
/// present: pushing a new one replaces the old.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn push_placeholder(&mut self, kind: Placeholder, content: impl Into<String>) {
        self.messages.retain(|m| !m.is_placeholder());
        self.messages.push(Message::placeholder(kind, content));
    }

    pub fn remove_placeholder(&mut self, kind: Placeholder) {
        self.messages.retain(|m| m.id != kind.id());
    }

    /// Replace the whole log with a single message
    pub fn reset_with(&mut self, message: Message) {
        self.messages.clear();
        self.messages.push(message);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn placeholder_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_placeholder()).count()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }
}
