// HTTP client for the Vantage REST backend.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, CONTENT_TYPE};
use reqwest::Method;
use serde_json::{json, Value};
use tracing::debug;

use vantage_types::{Chat, ChatType, Insight, Message, NewChat};

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::wire;

/// Typed client over the chat/insights REST endpoints.
///
/// One reqwest client, one method per endpoint. Each call issues exactly one
/// request with a bounded timeout and decodes JSON when a body is present.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ApiError::Init)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
        })
    }

    /// List server-curated insights.
    pub async fn get_insights(&self) -> Result<Vec<Insight>> {
        let body = self.request(Method::GET, "/insights", &[], None).await?;
        Ok(wire::insights_from(body))
    }

    /// List chat summaries, excluding insight threads.
    pub async fn list_chats(&self) -> Result<Vec<Chat>> {
        let body = self
            .request(Method::GET, "/chats", &[("include_insight", "false")], None)
            .await?;
        Ok(wire::chats_from(body))
    }

    /// Create a chat on the server.
    pub async fn create_chat(&self, req: &NewChat) -> Result<Chat> {
        let body = self
            .request(Method::POST, "/chats", &[], Some(serde_json::to_value(req).unwrap_or(Value::Null)))
            .await?;
        Ok(wire::chat_record(body))
    }

    /// Rename a question-type chat; returns the updated record.
    pub async fn rename_chat(&self, chat_id: &str, title: &str) -> Result<Chat> {
        let path = format!("/chats/{chat_id}");
        let body = self
            .request(
                Method::PATCH,
                &path,
                &[("chat_type", ChatType::Question.as_str())],
                Some(json!({ "title": title })),
            )
            .await?;
        Ok(wire::chat_record(body))
    }

    /// Delete a question-type chat. Insights are never deleted from here.
    pub async fn delete_chat(&self, chat_id: &str) -> Result<()> {
        let path = format!("/chats/{chat_id}");
        self.request(
            Method::DELETE,
            &path,
            &[("chat_type", ChatType::Question.as_str())],
            None,
        )
        .await?;
        Ok(())
    }

    /// Fetch a thread's history, expanded into alternating user/ai messages.
    pub async fn list_messages(&self, thread_id: &str, chat_type: ChatType) -> Result<Vec<Message>> {
        let path = format!("/chats/{thread_id}");
        let body = self
            .request(Method::GET, &path, &[("chat_type", chat_type.as_str())], None)
            .await?;
        Ok(wire::history_messages(body))
    }

    /// Post a question; returns only the AI reply. The caller appends the
    /// user's own message locally before invoking this.
    pub async fn send_message(
        &self,
        thread_id: &str,
        question: &str,
        chat_type: ChatType,
    ) -> Result<Message> {
        let body = self
            .request(
                Method::POST,
                "/search",
                &[],
                Some(json!({
                    "question": question,
                    "chat_type": chat_type.as_str(),
                    "chat_id": thread_id,
                })),
            )
            .await?;
        Ok(wire::answer_message(thread_id, body))
    }

    /// Issue one request. Non-success statuses and timeouts map to the
    /// uniform failure shape; an empty or malformed body maps to `None`.
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<Option<Value>> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.http.request(method, &url).timeout(self.timeout);
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(body) = &body {
            req = req.json(body);
        }

        debug!(path, "issuing request");
        let response = req.send().await.map_err(|e| transport(path, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let text = response.text().await.map_err(|e| transport(path, e))?;
        if text.is_empty() {
            return Ok(None);
        }
        Ok(serde_json::from_str(&text).ok())
    }
}

fn transport(path: &str, err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout {
            path: path.to_string(),
        }
    } else {
        ApiError::Transport {
            path: path.to_string(),
            source: err,
        }
    }
}
