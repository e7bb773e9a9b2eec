mod chat;
mod insight;
mod message;

pub use chat::{Chat, ChatType, NewChat, DEFAULT_CHAT_TITLE};
pub use insight::Insight;
pub use message::{DocRef, Message, MessageKind};

/// A thread resolved from the shared id space.
///
/// Chats and insights are routed by the same identifier; lookups check the
/// chat collection first, then insights.
#[derive(Debug, Clone)]
pub enum ThreadHandle {
    Chat(Chat),
    Insight(Insight),
}

impl ThreadHandle {
    pub fn id(&self) -> &str {
        match self {
            ThreadHandle::Chat(c) => &c.id,
            ThreadHandle::Insight(i) => &i.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ThreadHandle::Chat(c) => &c.title,
            ThreadHandle::Insight(i) => &i.title,
        }
    }

    pub fn chat_type(&self) -> ChatType {
        match self {
            ThreadHandle::Chat(_) => ChatType::Question,
            ThreadHandle::Insight(_) => ChatType::Insight,
        }
    }
}
