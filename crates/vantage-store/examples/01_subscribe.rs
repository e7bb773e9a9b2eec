// Boot an offline store and watch the chat list react to mutations.

use std::sync::Arc;

use vantage_store::{DataService, LocalBackend};
use vantage_types::ChatType;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join("vantage-subscribe-demo.json");
    let backend = Arc::new(LocalBackend::open(&path));
    let service = DataService::new(backend);

    // Replays the current (empty) list immediately, then fires on every change.
    let _chats = service.subscribe_chats(|chats| {
        println!("chat list -> {} entries", chats.len());
    });
    let _meta = service.subscribe_meta(|meta| {
        if let Some(err) = &meta.last_error {
            println!("error -> {err}");
        }
    });

    service.fetch_boot().await?;

    let chat = service.create_chat();
    service.set_message(&chat.id, "Summarize latest docs");
    let reply = service
        .send_message(&chat.id, "Summarize latest docs", ChatType::Question)
        .await?;

    println!("reply: {}", reply.content);
    for follow_up in &reply.follow_ups {
        println!("  follow-up: {follow_up}");
    }

    Ok(())
}
