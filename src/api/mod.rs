//! Chatbot API client
//!
//! This module provides the typed client layer for the remote chatbot API.
//!
//! # Module Structure
//!
//! - [`api::client`](crate::api::client) - `reqwest`-backed [`HttpChatApi`]
//! - [`api::routes`](crate::api::routes) - Endpoint paths
//!
//! # API Endpoints
//!
//! ## Authentication (`/auth`)
//! - `POST /auth/login` - Login and receive a token
//! - `POST /auth/register` - Register a new user
//!
//! ## Chat (`/api/chat`)
//! - `GET /api/chat/conversations` - List the user's conversations
//! - `POST /api/chat/create?name=...` - Create a conversation
//! - `GET /api/chat/{id}/messages` - Messages of a conversation
//! - `POST /api/chat/{id}` - Send a prompt, receive the reply
//!
//! # Authentication
//!
//! Chat endpoints require the session token in the `Authorization` header:
//! ```text
//! Authorization: Bearer <token>
//! ```
//!
//! Every response body is an [`ApiEnvelope`](crate::types::ApiEnvelope); a call
//! only succeeds when the envelope reports status 200.

pub mod client;
pub mod routes;

pub use client::HttpChatApi;

use crate::types::{Conversation, ConversationId, LoginRequest, Message, RegisterRequest, Result};
use async_trait::async_trait;

/// Operations the client needs from the remote API
///
/// Futures are not required to be `Send`: in the browser every call runs on
/// the single UI thread.
#[async_trait(?Send)]
pub trait ChatApi {
    /// Exchange credentials for a session token
    async fn login(&self, request: &LoginRequest) -> Result<String>;

    /// Create a new account; does not log in
    async fn register(&self, request: &RegisterRequest) -> Result<()>;

    /// Conversations owned by the token's user, in server order
    async fn list_conversations(&self, token: &str) -> Result<Vec<Conversation>>;

    /// Create an empty conversation and return its id
    async fn create_conversation(&self, token: &str, name: &str) -> Result<ConversationId>;

    /// Messages of one conversation, oldest first
    async fn list_messages(&self, token: &str, id: ConversationId) -> Result<Vec<Message>>;

    /// Send a prompt and return the assistant's reply
    async fn send_message(&self, token: &str, id: ConversationId, prompt: &str) -> Result<String>;
}
