// Identifier synthesis for chats and messages.
//
// The server never assigns message ids; they are derived from the thread id
// plus a timestamp plus a role suffix, which keeps them unique per thread.

use uuid::Uuid;

/// Fresh id for a locally created chat.
pub fn new_chat_id() -> String {
    Uuid::new_v4().to_string()
}

/// Id for a user (question) message: `{thread}-{ts}-q`.
pub fn question_id(thread_id: &str, ts: &str) -> String {
    format!("{thread_id}-{ts}-q")
}

/// Id for an AI (answer) message: `{thread}-{ts}-a`.
pub fn answer_id(thread_id: &str, ts: &str) -> String {
    format!("{thread_id}-{ts}-a")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_id_shapes() {
        assert_eq!(question_id("c1", "2025-01-02"), "c1-2025-01-02-q");
        assert_eq!(answer_id("c1", "2025-01-02"), "c1-2025-01-02-a");
    }

    #[test]
    fn chat_ids_are_unique() {
        assert_ne!(new_chat_id(), new_chat_id());
    }
}
