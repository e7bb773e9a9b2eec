use serde::{Deserialize, Serialize};

/// Who authored a message within a thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    User,
    Ai,
}

/// A document reference attached to an AI reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocRef {
    pub id: String,
    pub name: String,
}

/// One entry in a thread's ordered message list.
///
/// Messages belong to exactly one thread and keep insertion order; nothing
/// reorders them after append.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub content: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub docs: Vec<DocRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub follow_ups: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Message {
    /// Create a user message. Content is trimmed at this boundary.
    pub fn user(id: impl Into<String>, content: &str, created_at: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: MessageKind::User,
            content: content.trim().to_string(),
            created_at: created_at.into(),
            docs: Vec::new(),
            follow_ups: Vec::new(),
            title: None,
        }
    }

    /// Create an AI message. Content is trimmed at this boundary.
    pub fn ai(id: impl Into<String>, content: &str, created_at: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: MessageKind::Ai,
            content: content.trim().to_string(),
            created_at: created_at.into(),
            docs: Vec::new(),
            follow_ups: Vec::new(),
            title: None,
        }
    }

    pub fn with_follow_ups(mut self, follow_ups: Vec<String>) -> Self {
        self.follow_ups = follow_ups;
        self
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn with_docs(mut self, docs: Vec<DocRef>) -> Self {
        self.docs = docs;
        self
    }
}
