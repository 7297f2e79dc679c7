use crate::types::ConversationId;

pub const LOGIN: &str = "/auth/login";
pub const REGISTER: &str = "/auth/register";
pub const CONVERSATIONS: &str = "/api/chat/conversations";
pub const CREATE_CONVERSATION: &str = "/api/chat/create";

/// `POST` target for sending a prompt to a conversation
pub fn conversation(id: ConversationId) -> String {
    format!("/api/chat/{}", id)
}

pub fn messages(id: ConversationId) -> String {
    format!("/api/chat/{}/messages", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_paths() {
        assert_eq!(conversation(ConversationId(12)), "/api/chat/12");
        assert_eq!(messages(ConversationId(12)), "/api/chat/12/messages");
    }
}
