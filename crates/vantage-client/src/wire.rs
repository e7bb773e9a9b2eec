// Wire schemas for the REST backend.
//
// Every endpoint response has an explicit serde shape with defaults, so a
// missing array becomes empty and a missing string becomes empty at this
// boundary instead of leaking option-checks into call sites.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use vantage_types::{ids, time, Chat, Insight, Message};

/// `GET /insights` element. The insights endpoint speaks camelCase.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawInsight {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    updated_at: String,
    #[serde(default)]
    tags: Option<Vec<String>>,
}

impl From<RawInsight> for Insight {
    fn from(raw: RawInsight) -> Self {
        Insight {
            id: raw.id,
            title: raw.title,
            kind: raw.kind,
            date: raw.date,
            summary: raw.summary,
            updated_at: raw.updated_at,
            tags: raw.tags.unwrap_or_default(),
        }
    }
}

/// Chat record as the server emits it (`GET /chats`, and the shape the
/// mutation endpoints echo back). Server field names differ from the
/// client's.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawChat {
    #[serde(default)]
    chat_id: String,
    #[serde(default)]
    title: String,
    #[serde(default, deserialize_with = "string_or_number")]
    timestamp: String,
    #[serde(default)]
    last_answer: String,
}

impl From<RawChat> for Chat {
    fn from(raw: RawChat) -> Self {
        Chat {
            id: raw.chat_id,
            title: raw.title,
            last_message: raw.last_answer,
            updated_at: raw.timestamp,
            message_count: None,
        }
    }
}

/// `GET /chats/{id}`: ordered question/answer pairs.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ThreadHistory {
    #[serde(default)]
    chat_id: String,
    #[serde(default)]
    history: Vec<HistoryTurn>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct HistoryTurn {
    #[serde(default, deserialize_with = "string_or_number")]
    ts: String,
    #[serde(default)]
    question: String,
    #[serde(default)]
    answer: String,
}

/// `POST /search`: the AI reply. The user's own message is never echoed.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchReply {
    #[serde(default)]
    answer: String,
    #[serde(default)]
    follow_up_questions: Vec<String>,
    #[serde(default)]
    title: String,
}

/// Timestamps arrive as either strings or numbers depending on the endpoint.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Ok(other.to_string()),
    }
}

pub(crate) fn insights_from(body: Option<Value>) -> Vec<Insight> {
    match body {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value::<RawInsight>(item).ok())
            .map(Insight::from)
            .collect(),
        _ => Vec::new(),
    }
}

pub(crate) fn chats_from(body: Option<Value>) -> Vec<Chat> {
    match body {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value::<RawChat>(item).ok())
            .map(Chat::from)
            .collect(),
        _ => Vec::new(),
    }
}

pub(crate) fn chat_record(body: Option<Value>) -> Chat {
    body.and_then(|v| serde_json::from_value::<RawChat>(v).ok())
        .unwrap_or_default()
        .into()
}

/// Expand a thread history into two messages per turn, user then ai, with
/// ids synthesized from the server's chat id and turn timestamp.
pub(crate) fn history_messages(body: Option<Value>) -> Vec<Message> {
    let hist: ThreadHistory = body
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default();

    let mut out = Vec::with_capacity(hist.history.len() * 2);
    for turn in &hist.history {
        out.push(Message::user(
            ids::question_id(&hist.chat_id, &turn.ts),
            &turn.question,
            turn.ts.clone(),
        ));
        out.push(Message::ai(
            ids::answer_id(&hist.chat_id, &turn.ts),
            &turn.answer,
            turn.ts.clone(),
        ));
    }
    out
}

pub(crate) fn answer_message(thread_id: &str, body: Option<Value>) -> Message {
    let reply: SearchReply = body
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default();

    let iso = time::now_iso();
    let title = (!reply.title.is_empty()).then_some(reply.title);
    Message::ai(ids::answer_id(thread_id, &iso), &reply.answer, iso)
        .with_follow_ups(reply.follow_up_questions)
        .with_title(title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vantage_types::MessageKind;

    #[test]
    fn insights_map_and_default_tags() {
        let body = json!([
            {"id": "i1", "title": "Board Meeting – Q4", "updatedAt": "2025-01-02",
             "summary": "Quarterly performance & strategy.", "type": "Meeting"},
            {"id": "i2", "title": "Budget Report Q4", "updatedAt": "2025-01-01",
             "tags": ["finance"]},
        ]);

        let insights = insights_from(Some(body));
        assert_eq!(insights.len(), 2);
        assert!(insights[0].tags.is_empty());
        assert_eq!(insights[1].tags, vec!["finance".to_string()]);
    }

    #[test]
    fn non_array_insights_body_maps_to_empty() {
        assert!(insights_from(None).is_empty());
        assert!(insights_from(Some(json!({"error": "nope"}))).is_empty());
    }

    #[test]
    fn chat_summary_field_renames() {
        let chats = chats_from(Some(json!([
            {"chat_id": "c1", "title": "Q4 Strategy", "timestamp": "2025-01-02T10:00:00Z",
             "last_answer": "Docs summarized."}
        ])));

        assert_eq!(chats[0].id, "c1");
        assert_eq!(chats[0].updated_at, "2025-01-02T10:00:00Z");
        assert_eq!(chats[0].last_message, "Docs summarized.");
    }

    #[test]
    fn history_expands_to_alternating_pairs() {
        let body = json!({
            "chat_id": "c1",
            "history": [
                {"ts": "2025-01-01T09:00:00Z", "question": " first? ", "answer": "one"},
                {"ts": "2025-01-01T09:05:00Z", "question": "second?", "answer": "two"},
            ],
        });

        let msgs = history_messages(Some(body));
        assert_eq!(msgs.len(), 4);
        assert_eq!(msgs[0].id, "c1-2025-01-01T09:00:00Z-q");
        assert_eq!(msgs[0].kind, MessageKind::User);
        assert_eq!(msgs[0].content, "first?");
        assert_eq!(msgs[1].id, "c1-2025-01-01T09:00:00Z-a");
        assert_eq!(msgs[1].kind, MessageKind::Ai);
        assert_eq!(msgs[3].content, "two");
    }

    #[test]
    fn history_tolerates_numeric_timestamps() {
        let msgs = history_messages(Some(json!({
            "chat_id": "c1",
            "history": [{"ts": 1735800000, "question": "q", "answer": "a"}],
        })));
        assert_eq!(msgs[0].id, "c1-1735800000-q");
    }

    #[test]
    fn answer_carries_follow_ups_and_title() {
        let msg = answer_message(
            "c1",
            Some(json!({
                "answer": " Projected FY: base 14.8M. ",
                "follow_up_questions": ["Break down by region"],
                "title": "Revenue forecast",
            })),
        );

        assert_eq!(msg.kind, MessageKind::Ai);
        assert_eq!(msg.content, "Projected FY: base 14.8M.");
        assert_eq!(msg.follow_ups, vec!["Break down by region".to_string()]);
        assert_eq!(msg.title.as_deref(), Some("Revenue forecast"));
        assert!(msg.id.starts_with("c1-"));
        assert!(msg.id.ends_with("-a"));
    }

    #[test]
    fn empty_title_normalizes_to_none() {
        let msg = answer_message("c1", Some(json!({"answer": "ok", "title": ""})));
        assert!(msg.title.is_none());
        assert!(msg.follow_ups.is_empty());
    }

    #[test]
    fn absent_search_body_yields_empty_reply() {
        let msg = answer_message("c1", None);
        assert_eq!(msg.kind, MessageKind::Ai);
        assert!(msg.content.is_empty());
    }
}
