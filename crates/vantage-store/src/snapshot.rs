use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use vantage_types::{Chat, Insight, Message};

/// The entire offline store, persisted as one JSON document.
///
/// Field names stay camelCase so the document matches the shape the original
/// web client kept in local storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub chats: Vec<Chat>,
    #[serde(default)]
    pub insights: Vec<Insight>,
    #[serde(default)]
    pub messages_by_id: HashMap<String, Vec<Message>>,
}
