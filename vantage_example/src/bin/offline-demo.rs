use std::sync::Arc;

use anyhow::Result;

use vantage_store::{DataService, LocalBackend};
use vantage_types::ChatType;

#[tokio::main]
async fn main() -> Result<()> {
    println!("Vantage Offline Store - Demo");
    println!("============================\n");

    // 1. Open (or seed) the snapshot file
    let path = std::env::temp_dir().join("vantage-offline-demo.json");
    println!("1. Opening snapshot at {} ...", path.display());
    let backend = Arc::new(LocalBackend::open(&path));
    let service = DataService::new(backend);
    println!("   ✓ Store ready\n");

    // 2. Subscribe before booting: callbacks replay the current value
    let _chats_sub = service.subscribe_chats(|chats| {
        println!("   [chats] {} entries", chats.len());
    });
    let _meta_sub = service.subscribe_meta(|meta| {
        if let Some(err) = &meta.last_error {
            println!("   [meta] error: {err}");
        }
    });

    // 3. Boot: concurrent load of insights and chats
    println!("2. Booting...");
    service.fetch_boot().await?;
    println!("   ✓ {} insights, {} chats\n", service.insights().len(), service.chats().len());

    // 4. Latest insight
    if let Some(insight) = service.latest_insight() {
        println!("3. Latest insight: {} ({})", insight.title, insight.kind);
        let thread = service
            .ensure_messages(&insight.id, ChatType::Insight)
            .await?;
        for msg in &thread {
            println!("   - {}", msg.content);
        }
        println!();
    }

    // 5. Create a chat and hold a short conversation
    println!("4. Creating a chat...");
    let chat = service.create_chat();
    println!("   ✓ {} ({})\n", chat.title, chat.id);

    let question = "Summarize latest docs";
    println!("5. Sending: {question:?}");
    service.set_message(&chat.id, question);
    let reply = service
        .send_message(&chat.id, question, ChatType::Question)
        .await?;
    println!("   ✓ {}", reply.content);
    for follow_up in &reply.follow_ups {
        println!("     follow-up: {follow_up}");
    }
    println!();

    // 6. The send refreshed the cached chat record
    let refreshed = service
        .chats()
        .into_iter()
        .find(|c| c.id == chat.id)
        .expect("chat still cached");
    println!("6. Chat is now titled {:?}", refreshed.title);
    println!("   Last message: {}", refreshed.last_message);

    println!("\n============================");
    println!("Demo completed. Snapshot kept at {}", path.display());
    Ok(())
}
