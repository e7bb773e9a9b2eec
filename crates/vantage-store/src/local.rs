//! Offline storage backend: the whole store is one JSON document on disk,
//! rewritten after every mutation and reloaded at startup.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::warn;

use vantage_types::{ids, time, Chat, ChatType, Insight, Message, NewChat};

use crate::backend::Backend;
use crate::error::{Result, StoreError};
use crate::seed;
use crate::snapshot::Snapshot;

pub struct LocalBackend {
    path: PathBuf,
    state: Mutex<Snapshot>,
}

impl LocalBackend {
    /// Open the snapshot at `path`. A missing or unparseable file falls back
    /// to the seed corpus.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(snapshot) => snapshot,
                Err(err) => {
                    warn!(%err, path = %path.display(), "snapshot unreadable, reseeding");
                    seed::seed_snapshot()
                }
            },
            Err(_) => seed::seed_snapshot(),
        };

        Self {
            path,
            state: Mutex::new(state),
        }
    }

    /// Open with an explicit starting snapshot instead of reading the file.
    pub fn with_snapshot(path: impl Into<PathBuf>, snapshot: Snapshot) -> Self {
        Self {
            path: path.into(),
            state: Mutex::new(snapshot),
        }
    }

    async fn persist(&self, snapshot: &Snapshot) -> Result<()> {
        let json = serde_json::to_string_pretty(snapshot)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Offline analog of the server's suggested chat title: the question,
    /// clipped to a list-friendly length.
    fn suggested_title(question: &str) -> String {
        let question = question.trim();
        if question.chars().count() <= 40 {
            question.to_string()
        } else {
            let clipped: String = question.chars().take(40).collect();
            format!("{}…", clipped.trim_end())
        }
    }
}

fn sort_by_recency(chats: &mut [Chat]) {
    chats.sort_by(|a, b| {
        let a = time::parse_when(&a.updated_at);
        let b = time::parse_when(&b.updated_at);
        // Descending; unparseable timestamps sort last.
        b.cmp(&a)
    });
}

#[async_trait]
impl Backend for LocalBackend {
    async fn list_insights(&self) -> Result<Vec<Insight>> {
        Ok(self.state.lock().await.insights.clone())
    }

    async fn list_chats(&self) -> Result<Vec<Chat>> {
        let mut chats = self.state.lock().await.chats.clone();
        sort_by_recency(&mut chats);
        Ok(chats)
    }

    async fn create_chat(&self, req: NewChat) -> Result<Chat> {
        let now = time::now_iso();
        let chat = Chat {
            id: ids::new_chat_id(),
            title: req.title,
            last_message: req.starter_message.clone(),
            updated_at: now.clone(),
            message_count: Some(u32::from(!req.starter_message.is_empty())),
        };

        let mut state = self.state.lock().await;
        state.chats.insert(0, chat.clone());
        let thread = if req.starter_message.is_empty() {
            Vec::new()
        } else {
            vec![Message::user(
                ids::question_id(&chat.id, &now),
                &req.starter_message,
                now,
            )]
        };
        state.messages_by_id.insert(chat.id.clone(), thread);
        self.persist(&state).await?;
        Ok(chat)
    }

    async fn rename_chat(&self, chat_id: &str, title: &str) -> Result<Chat> {
        let mut state = self.state.lock().await;
        let chat = state
            .chats
            .iter_mut()
            .find(|c| c.id == chat_id)
            .ok_or_else(|| StoreError::ChatNotFound(chat_id.to_string()))?;
        chat.title = title.to_string();
        let updated = chat.clone();
        self.persist(&state).await?;
        Ok(updated)
    }

    async fn delete_chat(&self, chat_id: &str) -> Result<()> {
        let mut state = self.state.lock().await;
        state.chats.retain(|c| c.id != chat_id);
        state.messages_by_id.remove(chat_id);
        self.persist(&state).await?;
        Ok(())
    }

    async fn list_messages(&self, thread_id: &str, _chat_type: ChatType) -> Result<Vec<Message>> {
        Ok(self
            .state
            .lock()
            .await
            .messages_by_id
            .get(thread_id)
            .cloned()
            .unwrap_or_default())
    }

    /// Records the question/answer pair in the snapshot (the offline
    /// counterpart of the server's history) and returns only the reply.
    async fn send_message(
        &self,
        thread_id: &str,
        question: &str,
        chat_type: ChatType,
    ) -> Result<Message> {
        let now = time::now_iso();
        let answer = format!(
            "Here's a quick take on \"{}\". Ask a follow-up to go deeper.",
            question.trim()
        );

        let mut state = self.state.lock().await;

        // Keep a renamed title; only suggest one while the chat still has
        // the default title, the way the live server does.
        let title = state
            .chats
            .iter()
            .find(|c| c.id == thread_id)
            .filter(|c| !c.title.is_empty() && c.title != vantage_types::DEFAULT_CHAT_TITLE)
            .map(|c| c.title.clone())
            .unwrap_or_else(|| Self::suggested_title(question));

        let reply = Message::ai(ids::answer_id(thread_id, &now), &answer, now.clone())
            .with_follow_ups(seed::CHAT_SUGGESTIONS.iter().map(|s| s.to_string()).collect())
            .with_title(Some(title));
        let thread = state.messages_by_id.entry(thread_id.to_string()).or_default();
        thread.push(Message::user(
            ids::question_id(thread_id, &now),
            question,
            now.clone(),
        ));
        thread.push(reply.clone());

        if chat_type == ChatType::Question {
            if let Some(chat) = state.chats.iter_mut().find(|c| c.id == thread_id) {
                if let Some(title) = &reply.title {
                    chat.title = title.clone();
                }
                chat.last_message = reply.content.clone();
                chat.updated_at = now;
                chat.message_count = Some(chat.message_count.unwrap_or(0) + 2);
            }
            sort_by_recency(&mut state.chats);
        }

        self.persist(&state).await?;
        Ok(reply)
    }
}
