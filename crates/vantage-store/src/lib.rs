//! Cache and subscription core for the Vantage client.
//!
//! [`DataService`] is the single source of truth for chats, insights,
//! per-thread message lists, and boot/error meta-state. It mediates every
//! mutation through a [`Backend`] (the live REST client or the offline
//! snapshot store) and notifies per-key subscribers synchronously after each
//! cache update.

pub mod backend;
pub mod error;
pub mod local;
pub mod observable;
pub mod remote;
pub mod seed;
pub mod service;
pub mod snapshot;

pub use backend::Backend;
pub use error::{Result, StoreError};
pub use local::LocalBackend;
pub use observable::{Observable, Subscription};
pub use remote::RemoteBackend;
pub use seed::CHAT_SUGGESTIONS;
pub use service::{DataService, MessageMap, Meta};
pub use snapshot::Snapshot;
