pub mod ids;
pub mod models;
pub mod time;

pub use models::{
    Chat, ChatType, DocRef, Insight, Message, MessageKind, NewChat, ThreadHandle,
    DEFAULT_CHAT_TITLE,
};
