use async_trait::async_trait;

use vantage_types::{Chat, ChatType, Insight, Message, NewChat};

use crate::error::Result;

/// Storage seam behind [`crate::DataService`].
///
/// The live REST client and the offline snapshot store implement the same
/// contract, so the cache layer never knows which one it is talking to.
#[async_trait]
pub trait Backend: Send + Sync {
    /// List server-curated insights.
    async fn list_insights(&self) -> Result<Vec<Insight>>;

    /// List chat summaries in recency order.
    async fn list_chats(&self) -> Result<Vec<Chat>>;

    /// Create a chat.
    async fn create_chat(&self, req: NewChat) -> Result<Chat>;

    /// Rename a chat; returns the updated record.
    async fn rename_chat(&self, chat_id: &str, title: &str) -> Result<Chat>;

    /// Delete a chat by id. Only question-type chats are ever deleted.
    async fn delete_chat(&self, chat_id: &str) -> Result<()>;

    /// Full ordered message list for a thread.
    async fn list_messages(&self, thread_id: &str, chat_type: ChatType) -> Result<Vec<Message>>;

    /// Post a question; returns only the AI reply. The caller appends the
    /// user's own message locally before invoking this.
    async fn send_message(
        &self,
        thread_id: &str,
        question: &str,
        chat_type: ChatType,
    ) -> Result<Message>;
}
