use serde::{Deserialize, Serialize};

/// A server-curated conversation seeded from a source document, meeting or
/// recording. Read-only from the client's perspective: never created,
/// renamed, or deleted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub id: String,
    pub title: String,
    /// Source kind, e.g. "Meeting", "Document", "Recording".
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub summary: String,
    pub updated_at: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
