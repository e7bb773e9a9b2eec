use std::sync::Arc;

use anyhow::Result;

use vantage_client::{ApiConfig, DEFAULT_API_BASE};
use vantage_store::{DataService, RemoteBackend};
use vantage_types::ChatType;

#[tokio::main]
async fn main() -> Result<()> {
    println!("Vantage Live API - Demo");
    println!("=======================\n");

    // Point VANTAGE_API_BASE at a different host to test against staging.
    let base_url =
        std::env::var("VANTAGE_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
    println!("1. Connecting to {base_url} ...");

    let backend = Arc::new(RemoteBackend::from_config(ApiConfig::new(base_url))?);
    let service = DataService::new(backend);

    let _meta_sub = service.subscribe_meta(|meta| {
        if meta.is_booting {
            println!("   [meta] booting...");
        }
        if let Some(err) = &meta.last_error {
            println!("   [meta] error: {err}");
        }
    });

    // 2. Boot
    service.fetch_boot().await?;
    println!("   ✓ {} insights, {} chats\n", service.insights().len(), service.chats().len());

    // 3. Show the chat list the way the left pane would render it
    println!("2. Chats:");
    for chat in service.chats().iter().take(10) {
        println!("   - {} ({})", chat.title, chat.updated_at);
    }
    println!();

    // 4. Open the most recent insight, loading its history once
    if let Some(insight) = service.latest_insight() {
        println!("3. Latest insight: {}", insight.title);
        let thread = service
            .ensure_messages(&insight.id, ChatType::Insight)
            .await?;
        println!("   {} messages in thread", thread.len());
    }

    println!("\n=======================");
    println!("Demo completed.");
    Ok(())
}
