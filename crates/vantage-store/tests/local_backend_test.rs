use std::path::PathBuf;

use vantage_store::{Backend, LocalBackend, Snapshot};
use vantage_types::{ChatType, MessageKind, NewChat};

fn snapshot_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("vantage-store.json")
}

#[tokio::test]
async fn missing_file_falls_back_to_seed() {
    let dir = tempfile::tempdir().unwrap();
    let backend = LocalBackend::open(snapshot_path(&dir));

    let chats = backend.list_chats().await.unwrap();
    let insights = backend.list_insights().await.unwrap();

    assert_eq!(chats.len(), 3);
    assert_eq!(insights.len(), 3);
    // Seeded threads exist for every conversation.
    for chat in &chats {
        assert!(!backend
            .list_messages(&chat.id, ChatType::Question)
            .await
            .unwrap()
            .is_empty());
    }
}

#[tokio::test]
async fn corrupt_file_falls_back_to_seed() {
    let dir = tempfile::tempdir().unwrap();
    let path = snapshot_path(&dir);
    std::fs::write(&path, "{ not json").unwrap();

    let backend = LocalBackend::open(&path);

    assert_eq!(backend.list_chats().await.unwrap().len(), 3);
}

#[tokio::test]
async fn mutations_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = snapshot_path(&dir);

    {
        let backend = LocalBackend::open(&path);
        backend
            .create_chat(NewChat::new("Hiring plan").with_starter("Who are we hiring in Q1?"))
            .await
            .unwrap();
    }

    let reopened = LocalBackend::open(&path);
    let chats = reopened.list_chats().await.unwrap();

    assert_eq!(chats.len(), 4);
    let created = chats.iter().find(|c| c.title == "Hiring plan").unwrap();
    assert_eq!(created.last_message, "Who are we hiring in Q1?");
    let thread = reopened
        .list_messages(&created.id, ChatType::Question)
        .await
        .unwrap();
    assert_eq!(thread.len(), 1);
    assert_eq!(thread[0].kind, MessageKind::User);
}

#[tokio::test]
async fn send_records_question_and_reply_and_bumps_recency() {
    let dir = tempfile::tempdir().unwrap();
    let backend = LocalBackend::open(snapshot_path(&dir));

    // Oldest seeded chat.
    let target = "chat-revenue-forecast";
    let before = backend
        .list_messages(target, ChatType::Question)
        .await
        .unwrap()
        .len();

    let reply = backend
        .send_message(target, "Project FY26 numbers", ChatType::Question)
        .await
        .unwrap();

    assert_eq!(reply.kind, MessageKind::Ai);
    assert!(reply.title.is_some());
    assert!(!reply.follow_ups.is_empty());

    let thread = backend
        .list_messages(target, ChatType::Question)
        .await
        .unwrap();
    assert_eq!(thread.len(), before + 2);
    assert_eq!(thread[thread.len() - 2].kind, MessageKind::User);
    assert_eq!(thread[thread.len() - 2].content, "Project FY26 numbers");
    assert_eq!(thread.last().unwrap().kind, MessageKind::Ai);

    // The offline store re-sorts on write, so the chat moves to the front.
    let chats = backend.list_chats().await.unwrap();
    assert_eq!(chats[0].id, target);
}

#[tokio::test]
async fn send_on_insight_thread_does_not_touch_chats() {
    let dir = tempfile::tempdir().unwrap();
    let backend = LocalBackend::open(snapshot_path(&dir));
    let chats_before = backend.list_chats().await.unwrap();

    backend
        .send_message("insight-board-q4", "Show decisions", ChatType::Insight)
        .await
        .unwrap();

    assert_eq!(backend.list_chats().await.unwrap(), chats_before);
    let thread = backend
        .list_messages("insight-board-q4", ChatType::Insight)
        .await
        .unwrap();
    assert_eq!(thread.last().unwrap().kind, MessageKind::Ai);
}

#[tokio::test]
async fn rename_keeps_title_across_later_sends() {
    let dir = tempfile::tempdir().unwrap();
    let backend = LocalBackend::open(snapshot_path(&dir));

    backend
        .rename_chat("chat-q4-strategy", "Strategy review")
        .await
        .unwrap();
    let reply = backend
        .send_message("chat-q4-strategy", "Anything new?", ChatType::Question)
        .await
        .unwrap();

    assert_eq!(reply.title.as_deref(), Some("Strategy review"));
    let chats = backend.list_chats().await.unwrap();
    let renamed = chats.iter().find(|c| c.id == "chat-q4-strategy").unwrap();
    assert_eq!(renamed.title, "Strategy review");
}

#[tokio::test]
async fn rename_unknown_chat_errors() {
    let dir = tempfile::tempdir().unwrap();
    let backend = LocalBackend::open(snapshot_path(&dir));

    let outcome = backend.rename_chat("no-such-chat", "Title").await;
    assert!(outcome.is_err());
}

#[tokio::test]
async fn delete_removes_chat_and_thread() {
    let dir = tempfile::tempdir().unwrap();
    let backend = LocalBackend::open(snapshot_path(&dir));

    backend.delete_chat("chat-vendor-followup").await.unwrap();

    let chats = backend.list_chats().await.unwrap();
    assert!(chats.iter().all(|c| c.id != "chat-vendor-followup"));
    assert!(backend
        .list_messages("chat-vendor-followup", ChatType::Question)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn explicit_snapshot_round_trips_through_serde() {
    let dir = tempfile::tempdir().unwrap();
    let path = snapshot_path(&dir);

    let backend = LocalBackend::with_snapshot(&path, Snapshot::default());
    backend.create_chat(NewChat::default()).await.unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let parsed: Snapshot = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed.chats.len(), 1);
    // The persisted document keeps the original client's field names.
    assert!(raw.contains("messagesById"));
    assert!(raw.contains("updatedAt"));
}
