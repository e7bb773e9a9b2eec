//! # Vantage - chat/insights client data layer
//!
//! Vantage is the data layer of a chat/insights client:
//! - **Typed REST client** (one method per endpoint, bounded timeouts)
//! - **Subscribable cache** (per-key pub/sub with replay-on-subscribe)
//! - **Swappable storage** (live API or an offline JSON snapshot)
//! - **Async/await** (built on Tokio)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vantage::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Live backend against the default host
//!     let backend = Arc::new(RemoteBackend::from_config(ApiConfig::default())?);
//!     let service = DataService::new(backend);
//!
//!     // Subscribers get the current value immediately, then every change.
//!     let _sub = service.subscribe_chats(|chats| {
//!         println!("{} chats", chats.len());
//!     });
//!
//!     service.fetch_boot().await?;
//!
//!     let chat = service.create_chat();
//!     service.set_message(&chat.id, "Summarize latest docs");
//!     let reply = service
//!         .send_message(&chat.id, "Summarize latest docs", ChatType::Question)
//!         .await?;
//!     println!("{}", reply.content);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! Vantage consists of three composable crates:
//!
//! - **vantage-types**: domain model (Chat, Insight, Message) plus id and
//!   timestamp utilities
//! - **vantage-client**: the HTTP client over the REST backend
//! - **vantage-store**: the cache/subscription core (`DataService`, the
//!   `Backend` seam, the offline `LocalBackend`)
//!
//! ## Offline mode
//!
//! ```rust,no_run
//! use vantage::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = Arc::new(LocalBackend::open("vantage-store.json"));
//!     let service = DataService::new(backend);
//!     service.fetch_boot().await?;
//!     Ok(())
//! }
//! ```

// Re-export all public APIs
pub use vantage_client as client;
pub use vantage_store as store;
pub use vantage_types as types;

// Re-export commonly used types
pub use vantage_client::{ApiClient, ApiConfig, ApiError};
pub use vantage_store::{Backend, DataService, LocalBackend, Meta, RemoteBackend, StoreError};
pub use vantage_types::{Chat, ChatType, Insight, Message, MessageKind, NewChat};

/// Convenient prelude with commonly used types
pub mod prelude {
    pub use crate::client::{ApiConfig, DEFAULT_API_BASE};
    pub use crate::store::{Backend, DataService, LocalBackend, Meta, RemoteBackend};
    pub use crate::types::{Chat, ChatType, Insight, Message, MessageKind, NewChat};
    pub use anyhow::Result;
}
