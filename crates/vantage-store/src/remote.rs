use async_trait::async_trait;

use vantage_client::{ApiClient, ApiConfig};
use vantage_types::{Chat, ChatType, Insight, Message, NewChat};

use crate::backend::Backend;
use crate::error::Result;

/// The canonical live-API backend: thin delegation to [`ApiClient`].
pub struct RemoteBackend {
    api: ApiClient,
}

impl RemoteBackend {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn from_config(config: ApiConfig) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(config)?,
        })
    }
}

#[async_trait]
impl Backend for RemoteBackend {
    async fn list_insights(&self) -> Result<Vec<Insight>> {
        Ok(self.api.get_insights().await?)
    }

    async fn list_chats(&self) -> Result<Vec<Chat>> {
        Ok(self.api.list_chats().await?)
    }

    async fn create_chat(&self, req: NewChat) -> Result<Chat> {
        Ok(self.api.create_chat(&req).await?)
    }

    async fn rename_chat(&self, chat_id: &str, title: &str) -> Result<Chat> {
        Ok(self.api.rename_chat(chat_id, title).await?)
    }

    async fn delete_chat(&self, chat_id: &str) -> Result<()> {
        Ok(self.api.delete_chat(chat_id).await?)
    }

    async fn list_messages(&self, thread_id: &str, chat_type: ChatType) -> Result<Vec<Message>> {
        Ok(self.api.list_messages(thread_id, chat_type).await?)
    }

    async fn send_message(
        &self,
        thread_id: &str,
        question: &str,
        chat_type: ChatType,
    ) -> Result<Message> {
        Ok(self.api.send_message(thread_id, question, chat_type).await?)
    }
}
