//! `DataService`: the single source of truth for chats, insights, message
//! lists, and boot/error meta-state.
//!
//! Explicitly constructed and passed by reference: one instance per
//! application session, fresh instances per test. Every mutation goes
//! through the injected [`Backend`]; every cache write is immediately
//! followed by a synchronous emit on that key's observable. There is no
//! transaction spanning keys: a send's message append and chat update are
//! two separate emits, and subscribers re-render idempotently from whichever
//! snapshot they observe.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex as StdMutex};

use futures::future;
use tracing::error;

use vantage_types::{
    ids, time, Chat, ChatType, Insight, Message, ThreadHandle, DEFAULT_CHAT_TITLE,
};

use crate::backend::Backend;
use crate::error::{Result, StoreError};
use crate::observable::{Observable, Subscription};

pub type MessageMap = HashMap<String, Vec<Message>>;

/// Boot/error meta-state, subscribable like any other key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Meta {
    pub is_booting: bool,
    pub last_error: Option<String>,
}

/// Shown when an error renders to an empty display string.
const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

pub struct DataService {
    backend: Arc<dyn Backend>,
    chats: Observable<Vec<Chat>>,
    insights: Observable<Vec<Insight>>,
    messages: Observable<MessageMap>,
    meta: Observable<Meta>,
    /// Threads whose history has been fetched this session.
    fetched: StdMutex<HashSet<String>>,
    /// Per-thread send serialization, so AI replies append in issue order.
    send_locks: StdMutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl DataService {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            chats: Observable::new(Vec::new()),
            insights: Observable::new(Vec::new()),
            messages: Observable::new(MessageMap::new()),
            meta: Observable::new(Meta::default()),
            fetched: StdMutex::new(HashSet::new()),
            send_locks: StdMutex::new(HashMap::new()),
        }
    }

    // ------------------------------------------------------------------
    // Subscriptions. Each replays the current value on registration.
    // ------------------------------------------------------------------

    pub fn subscribe_chats(
        &self,
        callback: impl Fn(&Vec<Chat>) + Send + Sync + 'static,
    ) -> Subscription {
        self.chats.subscribe(callback)
    }

    pub fn subscribe_insights(
        &self,
        callback: impl Fn(&Vec<Insight>) + Send + Sync + 'static,
    ) -> Subscription {
        self.insights.subscribe(callback)
    }

    pub fn subscribe_messages(
        &self,
        callback: impl Fn(&MessageMap) + Send + Sync + 'static,
    ) -> Subscription {
        self.messages.subscribe(callback)
    }

    pub fn subscribe_meta(
        &self,
        callback: impl Fn(&Meta) + Send + Sync + 'static,
    ) -> Subscription {
        self.meta.subscribe(callback)
    }

    // ------------------------------------------------------------------
    // Synchronous snapshot reads
    // ------------------------------------------------------------------

    pub fn chats(&self) -> Vec<Chat> {
        self.chats.get()
    }

    pub fn insights(&self) -> Vec<Insight> {
        self.insights.get()
    }

    pub fn meta(&self) -> Meta {
        self.meta.get()
    }

    /// Cached message list for a thread, empty if never loaded.
    pub fn get_messages(&self, thread_id: &str) -> Vec<Message> {
        self.messages
            .get()
            .get(thread_id)
            .cloned()
            .unwrap_or_default()
    }

    /// The insight with the most recent parseable timestamp.
    pub fn latest_insight(&self) -> Option<Insight> {
        self.insights
            .get()
            .into_iter()
            .max_by_key(|i| time::parse_when(&i.updated_at))
    }

    /// Resolve an id from the shared thread id space. Chats win over
    /// insights when both carry the same id.
    pub fn resolve_thread(&self, thread_id: &str) -> Option<ThreadHandle> {
        if let Some(chat) = self.chats.get().into_iter().find(|c| c.id == thread_id) {
            return Some(ThreadHandle::Chat(chat));
        }
        self.insights
            .get()
            .into_iter()
            .find(|i| i.id == thread_id)
            .map(ThreadHandle::Insight)
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Initial concurrent fetch of insights and chats.
    ///
    /// `is_booting` clears (and meta emits) whether the fetches succeed or
    /// not; a boot failure records the error and propagates it.
    pub async fn fetch_boot(&self) -> Result<()> {
        self.set_booting(true);

        let outcome =
            future::try_join(self.backend.list_insights(), self.backend.list_chats()).await;

        let outcome = match outcome {
            Ok((insights, chats)) => {
                self.insights.set(insights);
                self.chats.set(chats);
                Ok(())
            }
            Err(err) => {
                self.set_error(&err);
                Err(err)
            }
        };

        self.set_booting(false);
        outcome
    }

    /// Purely local creation: the server learns about the chat on the first
    /// send, which also replaces the placeholder title.
    pub fn create_chat(&self) -> Chat {
        let chat = Chat {
            id: ids::new_chat_id(),
            title: DEFAULT_CHAT_TITLE.to_string(),
            last_message: String::new(),
            updated_at: time::now_iso(),
            message_count: None,
        };
        self.chats.update(|chats| chats.insert(0, chat.clone()));
        chat
    }

    /// Rename a chat and replace the cached record with the server's.
    ///
    /// A blank title is a no-op that never reaches the backend; the guard
    /// lives here because this is the outermost boundary the library owns.
    pub async fn rename_chat(&self, chat_id: &str, new_title: &str) -> Result<Option<Chat>> {
        let title = new_title.trim();
        if title.is_empty() {
            return Ok(None);
        }

        match self.backend.rename_chat(chat_id, title).await {
            Ok(updated) => {
                self.chats.update(|chats| {
                    if let Some(slot) = chats.iter_mut().find(|c| c.id == chat_id) {
                        *slot = updated.clone();
                    }
                });
                Ok(Some(updated))
            }
            Err(err) => {
                self.set_error(&err);
                Err(err)
            }
        }
    }

    /// Delete a chat. Nothing is removed optimistically: on failure both
    /// the chat and its messages stay cached.
    pub async fn delete_chat(&self, chat_id: &str) -> Result<()> {
        match self.backend.delete_chat(chat_id).await {
            Ok(()) => {
                self.messages.update(|map| {
                    map.remove(chat_id);
                });
                self.chats.update(|chats| chats.retain(|c| c.id != chat_id));
                Ok(())
            }
            Err(err) => {
                self.set_error(&err);
                Err(err)
            }
        }
    }

    /// Fetch a thread's history and overwrite the cached list.
    pub async fn load_messages(
        &self,
        thread_id: &str,
        chat_type: ChatType,
    ) -> Result<Vec<Message>> {
        match self.backend.list_messages(thread_id, chat_type).await {
            Ok(messages) => {
                self.messages.update(|map| {
                    map.insert(thread_id.to_string(), messages.clone());
                });
                self.mark_fetched(thread_id);
                Ok(messages)
            }
            Err(err) => {
                self.set_error(&err);
                Err(err)
            }
        }
    }

    /// Load a thread's history at most once per session. Re-fetching is
    /// wasteful, not incorrect, so a failed load stays retryable.
    pub async fn ensure_messages(
        &self,
        thread_id: &str,
        chat_type: ChatType,
    ) -> Result<Vec<Message>> {
        if self.is_fetched(thread_id) {
            return Ok(self.get_messages(thread_id));
        }
        self.load_messages(thread_id, chat_type).await
    }

    /// Purely local append of the user's own message, so it renders before
    /// the network round trip for the AI reply completes.
    pub fn set_message(&self, thread_id: &str, text: &str) -> Message {
        let iso = time::now_iso();
        let message = Message::user(ids::question_id(thread_id, &iso), text, iso);
        self.messages.update(|map| {
            map.entry(thread_id.to_string())
                .or_default()
                .push(message.clone());
        });
        message
    }

    /// Post a question and append the AI reply to the thread.
    ///
    /// Sends on one thread are serialized through a per-thread lock so
    /// replies append in issue order; sends on different threads interleave
    /// freely. For question chats the cached chat record also picks up the
    /// server title (or the placeholder), the reply text, and a fresh
    /// timestamp. The chat list is NOT re-sorted by recency here; recency
    /// order is only established at boot and on creation.
    pub async fn send_message(
        &self,
        thread_id: &str,
        text: &str,
        chat_type: ChatType,
    ) -> Result<Message> {
        let lock = self.send_lock(thread_id);
        let _guard = lock.lock().await;

        match self.backend.send_message(thread_id, text, chat_type).await {
            Ok(reply) => {
                if chat_type == ChatType::Question {
                    let title = reply
                        .title
                        .clone()
                        .unwrap_or_else(|| DEFAULT_CHAT_TITLE.to_string());
                    let last_message = reply.content.clone();
                    self.chats.update(move |chats| {
                        if let Some(chat) = chats.iter_mut().find(|c| c.id == thread_id) {
                            chat.title = title;
                            chat.last_message = last_message;
                            chat.updated_at = time::now_iso();
                        }
                    });
                }

                self.messages.update(|map| {
                    map.entry(thread_id.to_string())
                        .or_default()
                        .push(reply.clone());
                });
                Ok(reply)
            }
            Err(err) => {
                self.set_error(&err);
                Err(err)
            }
        }
    }

    // ------------------------------------------------------------------
    // Meta state
    // ------------------------------------------------------------------

    pub fn clear_error(&self) {
        self.meta.update(|meta| meta.last_error = None);
    }

    fn set_booting(&self, booting: bool) {
        self.meta.update(|meta| meta.is_booting = booting);
    }

    /// Normalize any failure into a display string and record it.
    fn set_error(&self, err: &StoreError) {
        let mut message = err.to_string();
        if message.trim().is_empty() {
            message = GENERIC_ERROR.to_string();
        }
        error!(%message, "operation failed");
        self.meta.update(move |meta| meta.last_error = Some(message));
    }

    fn send_lock(&self, thread_id: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self
            .send_locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        locks.entry(thread_id.to_string()).or_default().clone()
    }

    fn mark_fetched(&self, thread_id: &str) {
        self.fetched
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(thread_id.to_string());
    }

    fn is_fetched(&self, thread_id: &str) -> bool {
        self.fetched
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains(thread_id)
    }
}
