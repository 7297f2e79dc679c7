//! Mock implementations for testing.
//!
//! This module provides a scripted `ChatApi` that can be used across
//! different test files without a running server.

#![allow(dead_code)]

use async_trait::async_trait;
use chatbot::api::ChatApi;
use chatbot::types::{
    ClientError, Conversation, ConversationId, LoginRequest, Message, RegisterRequest, Result,
};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Mock API with configurable responses.
///
/// Login succeeds only for the configured credentials; every call is
/// recorded so tests can assert on what was sent.
///
/// # Examples
///
/// ```ignore
/// let api = MockChatApi::new()
///     .with_user("a@b.com", "secret", "tok")
///     .with_conversations(vec![conversation(1, "First", 1)]);
/// ```
#[derive(Default)]
pub struct MockChatApi {
    users: HashMap<String, (String, String)>,
    conversations: Mutex<Vec<Conversation>>,
    messages: HashMap<ConversationId, Vec<Message>>,
    reply: Option<String>,
    offline: bool,
    next_id: Mutex<i64>,
    calls: Mutex<Vec<String>>,
}

impl MockChatApi {
    pub fn new() -> Self {
        Self {
            reply: Some("Hello from the assistant".to_string()),
            next_id: Mutex::new(100),
            ..Self::default()
        }
    }

    /// Accept `email`/`password` and answer with `token`
    pub fn with_user(mut self, email: &str, password: &str, token: &str) -> Self {
        self.users
            .insert(email.to_string(), (password.to_string(), token.to_string()));
        self
    }

    pub fn with_conversations(self, conversations: Vec<Conversation>) -> Self {
        *self.conversations.lock() = conversations;
        self
    }

    pub fn with_messages(mut self, id: ConversationId, messages: Vec<Message>) -> Self {
        self.messages.insert(id, messages);
        self
    }

    /// Make `send_message` fail with a server message
    pub fn rejecting_sends(mut self) -> Self {
        self.reply = None;
        self
    }

    /// Every call fails at the transport level
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, call: String) -> Result<()> {
        self.calls.lock().push(call);
        if self.offline {
            return Err(ClientError::Network("connection refused".to_string()));
        }
        Ok(())
    }

    fn check_token(&self, token: &str) -> Result<()> {
        if self.users.values().any(|(_, t)| t == token) {
            Ok(())
        } else {
            Err(ClientError::Rejected {
                status: 401,
                message: Some("Invalid token".to_string()),
            })
        }
    }
}

#[async_trait(?Send)]
impl ChatApi for MockChatApi {
    async fn login(&self, request: &LoginRequest) -> Result<String> {
        self.record(format!("login {}", request.email))?;
        match self.users.get(&request.email) {
            Some((password, token)) if *password == request.password => Ok(token.clone()),
            _ => Err(ClientError::Rejected {
                status: 401,
                message: Some("Invalid credentials".to_string()),
            }),
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<()> {
        self.record(format!("register {}", request.email))?;
        if self.users.contains_key(&request.email) {
            return Err(ClientError::Rejected {
                status: 400,
                message: Some("Email already in use".to_string()),
            });
        }
        Ok(())
    }

    async fn list_conversations(&self, token: &str) -> Result<Vec<Conversation>> {
        self.record("list_conversations".to_string())?;
        self.check_token(token)?;
        Ok(self.conversations.lock().clone())
    }

    async fn create_conversation(&self, token: &str, name: &str) -> Result<ConversationId> {
        self.record(format!("create {}", name))?;
        self.check_token(token)?;
        let mut next = self.next_id.lock();
        *next += 1;
        Ok(ConversationId(*next))
    }

    async fn list_messages(&self, token: &str, id: ConversationId) -> Result<Vec<Message>> {
        self.record(format!("list_messages {}", id))?;
        self.check_token(token)?;
        Ok(self.messages.get(&id).cloned().unwrap_or_default())
    }

    async fn send_message(&self, token: &str, id: ConversationId, prompt: &str) -> Result<String> {
        self.record(format!("send {} {}", id, prompt))?;
        self.check_token(token)?;
        self.reply.clone().ok_or(ClientError::Rejected {
            status: 500,
            message: None,
        })
    }
}

/// Conversation created `age_days` days before now
pub fn conversation(id: i64, name: &str, age_days: i64) -> Conversation {
    Conversation {
        id: ConversationId(id),
        name: name.to_string(),
        created_at: chrono::Utc::now() - chrono::Duration::days(age_days),
    }
}
