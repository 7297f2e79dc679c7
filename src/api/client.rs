//! HTTP implementation of [`ChatApi`]
//!
//! Uses `reqwest`, which runs on top of `fetch` when compiled for `wasm32`, so
//! the same client serves the browser UI and the native test-suite.

use super::{routes, ChatApi};
use crate::types::{
    ApiEnvelope, ClientError, Conversation, ConversationId, LoginRequest, Message,
    RegisterRequest, Result, TokenData,
};
use crate::utils::config::ApiConfig;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

/// `ChatApi` over HTTP
#[derive(Debug, Clone)]
pub struct HttpChatApi {
    client: Client,
    base_url: String,
}

impl HttpChatApi {
    /// Create a client for the API rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Create a client from the `[api]` config section
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and unwrap the response envelope
    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<ApiEnvelope<T>> {
        let resp = req
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let http_status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let envelope: ApiEnvelope<T> = match serde_json::from_str(&body) {
            Ok(env) => env,
            Err(e) if http_status.is_success() => {
                return Err(ClientError::MalformedResponse(e.to_string()));
            }
            Err(_) => {
                // Error bodies may not carry the full envelope; salvage the message.
                let message = serde_json::from_str::<serde_json::Value>(&body)
                    .ok()
                    .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from));
                return Err(ClientError::Rejected {
                    status: http_status.as_u16(),
                    message,
                });
            }
        };

        if !http_status.is_success() || envelope.status != 200 {
            let status = if http_status.is_success() {
                envelope.status
            } else {
                http_status.as_u16()
            };
            tracing::debug!("API rejected request with status {}", status);
            return Err(ClientError::Rejected {
                status,
                message: envelope.message,
            });
        }

        Ok(envelope)
    }

    async fn execute_data<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T> {
        self.execute::<T>(req)
            .await?
            .data
            .ok_or_else(|| ClientError::MalformedResponse("response is missing `data`".to_string()))
    }
}

#[async_trait(?Send)]
impl ChatApi for HttpChatApi {
    async fn login(&self, request: &LoginRequest) -> Result<String> {
        tracing::debug!("Logging in as {}", request.email);
        let req = self.client.post(self.url(routes::LOGIN)).json(request);
        let data: TokenData = self.execute_data(req).await?;
        Ok(data.token)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<()> {
        tracing::debug!("Registering {}", request.email);
        let req = self.client.post(self.url(routes::REGISTER)).json(request);
        self.execute::<serde_json::Value>(req).await?;
        Ok(())
    }

    async fn list_conversations(&self, token: &str) -> Result<Vec<Conversation>> {
        let req = self
            .client
            .get(self.url(routes::CONVERSATIONS))
            .bearer_auth(token);
        self.execute_data(req).await
    }

    async fn create_conversation(&self, token: &str, name: &str) -> Result<ConversationId> {
        let req = self
            .client
            .post(self.url(routes::CREATE_CONVERSATION))
            .query(&[("name", name)])
            .bearer_auth(token);
        self.execute_data(req).await
    }

    async fn list_messages(&self, token: &str, id: ConversationId) -> Result<Vec<Message>> {
        let req = self
            .client
            .get(self.url(&routes::messages(id)))
            .bearer_auth(token);
        self.execute_data(req).await
    }

    async fn send_message(&self, token: &str, id: ConversationId, prompt: &str) -> Result<String> {
        let req = self
            .client
            .post(self.url(&routes::conversation(id)))
            .bearer_auth(token)
            .header(CONTENT_TYPE, "text/plain")
            .body(prompt.to_string());
        self.execute_data(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = HttpChatApi::new("http://localhost:8080/");
        assert_eq!(api.base_url(), "http://localhost:8080");
        assert_eq!(api.url(routes::LOGIN), "http://localhost:8080/auth/login");
    }

    #[test]
    fn test_from_config() {
        let config = ApiConfig {
            base_url: "https://chat.example.com".to_string(),
        };
        let api = HttpChatApi::from_config(&config);
        assert_eq!(api.base_url(), "https://chat.example.com");
    }
}
