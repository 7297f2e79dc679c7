//! Chat shell state
//!
//! Holds the conversation list, the current selection and the messages of
//! the active conversation. Like the auth form, every network-backed
//! operation is split into a synchronous `begin_*` / `apply_*` pair around
//! the API call so the state can sit inside a reactive signal; the `async`
//! helpers chain them for callers that own the shell.

use super::sidebar::{sidebar_view, SidebarEvent, SidebarView};
use crate::api::ChatApi;
use crate::types::{ClientError, Conversation, ConversationId, Message, Result};
use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

pub const LOAD_CONVERSATIONS_FAILED: &str = "Failed to load conversations";
pub const LOAD_MESSAGES_FAILED: &str = "Failed to load messages";
pub const SEND_FAILED: &str = "Failed to send message";

/// Longest conversation title derived from a first prompt, in characters
const TITLE_MAX_CHARS: usize = 30;

/// What the main pane shows
#[derive(Debug, Clone, PartialEq)]
pub enum ConversationView {
    /// Nothing selected and nothing typed yet
    Welcome,
    Thread {
        title: String,
        messages: Vec<Message>,
        sending: bool,
    },
}

/// Where a pending prompt goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendTarget {
    Existing(ConversationId),
    /// No conversation selected; create one with this title first
    New { title: String },
}

/// A prompt accepted by [`ChatShell::begin_send`]
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSend {
    /// Text exactly as typed
    pub prompt: String,
    pub target: SendTarget,
    /// [`ChatShell`] view generation the prompt was typed in
    pub epoch: u64,
}

/// Result of running a [`PendingSend`]
#[derive(Debug, Clone, PartialEq)]
pub struct SendReport {
    pub target: SendTarget,
    pub epoch: u64,
    /// Conversation created for a [`SendTarget::New`] prompt
    pub created: Option<Conversation>,
    pub reply: Result<String>,
}

impl PendingSend {
    pub async fn execute<A: ChatApi + ?Sized>(self, api: &A, token: &str) -> SendReport {
        let resolved = match &self.target {
            SendTarget::Existing(id) => Ok((*id, None)),
            SendTarget::New { title } => api.create_conversation(token, title).await.map(|id| {
                tracing::debug!("Created conversation {} ({})", id, title);
                let conv = Conversation {
                    id,
                    name: title.clone(),
                    created_at: Utc::now(),
                };
                (id, Some(conv))
            }),
        };

        let (id, created) = match resolved {
            Ok(resolved) => resolved,
            Err(e) => {
                return SendReport {
                    target: self.target,
                    epoch: self.epoch,
                    created: None,
                    reply: Err(e),
                };
            }
        };

        let reply = api.send_message(token, id, &self.prompt).await;
        SendReport {
            target: self.target,
            epoch: self.epoch,
            created,
            reply,
        }
    }
}

/// Title for a conversation started by `prompt`
pub fn conversation_title(prompt: &str) -> String {
    let prompt = prompt.trim();
    if prompt.chars().count() > TITLE_MAX_CHARS {
        let head: String = prompt.chars().take(TITLE_MAX_CHARS).collect();
        format!("{}...", head.trim_end())
    } else {
        prompt.to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatShell {
    conversations: Vec<Conversation>,
    current: Option<ConversationId>,
    messages: Vec<Message>,
    loading_messages: bool,
    sending: bool,
    error: Option<String>,
    /// Bumped whenever the pane switches to another conversation or to a
    /// blank chat, so replies meant for the old pane can be recognised
    epoch: u64,
}

impl ChatShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn current(&self) -> Option<ConversationId> {
        self.current
    }

    pub fn current_conversation(&self) -> Option<&Conversation> {
        let id = self.current?;
        self.conversations.iter().find(|c| c.id == id)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn is_loading_messages(&self) -> bool {
        self.loading_messages
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Drop everything, e.g. on logout
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // ============= Conversation list =============

    /// Replace the list with a fresh fetch
    ///
    /// Keeps the selection only if it still refers to a loaded conversation.
    pub fn apply_conversations(&mut self, result: Result<Vec<Conversation>>) {
        match result {
            Ok(conversations) => {
                self.conversations = conversations;
                if let Some(id) = self.current {
                    if !self.contains(id) {
                        tracing::debug!("Conversation {} no longer listed, clearing selection", id);
                        self.current = None;
                        self.messages.clear();
                        self.epoch += 1;
                    }
                }
            }
            Err(e) => self.record_error(&e, LOAD_CONVERSATIONS_FAILED),
        }
    }

    pub async fn refresh<A: ChatApi + ?Sized>(&mut self, api: &A, token: &str) {
        let result = api.list_conversations(token).await;
        self.apply_conversations(result);
    }

    fn contains(&self, id: ConversationId) -> bool {
        self.conversations.iter().any(|c| c.id == id)
    }

    // ============= Selection =============

    /// Make `id` current
    ///
    /// Returns `false` and changes nothing when `id` is not in the list. On
    /// success the message pane is cleared and the caller should fetch the
    /// conversation's messages.
    pub fn select(&mut self, id: ConversationId) -> bool {
        if !self.contains(id) {
            tracing::warn!("Ignoring selection of unknown conversation {}", id);
            return false;
        }
        self.current = Some(id);
        self.messages.clear();
        self.loading_messages = true;
        self.error = None;
        self.epoch += 1;
        true
    }

    /// Apply fetched messages; responses for a conversation that is no
    /// longer current are dropped
    pub fn apply_messages(&mut self, id: ConversationId, result: Result<Vec<Message>>) {
        if self.current != Some(id) {
            return;
        }
        self.loading_messages = false;
        match result {
            Ok(mut messages) => {
                messages.sort_by_key(|m| m.timestamp);
                self.messages = messages;
            }
            Err(e) => self.record_error(&e, LOAD_MESSAGES_FAILED),
        }
    }

    /// Select `id` and load its messages
    pub async fn open<A: ChatApi + ?Sized>(&mut self, api: &A, token: &str, id: ConversationId) {
        if self.select(id) {
            let result = api.list_messages(token, id).await;
            self.apply_messages(id, result);
        }
    }

    /// Start over with no conversation selected
    pub fn new_chat(&mut self) {
        self.current = None;
        self.messages.clear();
        self.loading_messages = false;
        self.error = None;
        self.epoch += 1;
    }

    // ============= Sending =============

    /// Accept a prompt for sending
    ///
    /// Blank prompts are ignored, as are prompts typed while another send
    /// is outstanding or while the selected conversation's history is still
    /// loading. The user's message is shown immediately and sent as typed.
    pub fn begin_send(&mut self, prompt: &str) -> Option<PendingSend> {
        if prompt.trim().is_empty() || self.sending || self.loading_messages {
            return None;
        }

        let target = match self.current {
            Some(id) => SendTarget::Existing(id),
            None => SendTarget::New {
                title: conversation_title(prompt),
            },
        };

        self.sending = true;
        self.error = None;
        self.messages.push(Message::user(prompt));

        Some(PendingSend {
            prompt: prompt.to_string(),
            target,
            epoch: self.epoch,
        })
    }

    pub fn apply_send(&mut self, report: SendReport) {
        self.sending = false;

        // Is the user still looking at the pane this prompt was typed in?
        let mut on_target = report.epoch == self.epoch
            && match report.target {
                SendTarget::Existing(id) => self.current == Some(id),
                SendTarget::New { .. } => self.current.is_none(),
            };

        if let Some(conv) = report.created {
            let id = conv.id;
            if !self.contains(id) {
                self.conversations.push(conv);
            }
            if on_target {
                self.current = Some(id);
            }
        }

        match report.reply {
            Ok(reply) => {
                if on_target {
                    self.messages.push(Message::assistant(reply));
                }
            }
            Err(e) => {
                on_target &= e != ClientError::Cancelled;
                if on_target {
                    self.record_error(&e, SEND_FAILED);
                }
            }
        }
    }

    /// Send `prompt`, creating a conversation first if none is selected
    pub async fn send<A: ChatApi + ?Sized>(&mut self, api: &A, token: &str, prompt: &str) {
        if let Some(pending) = self.begin_send(prompt) {
            let report = pending.execute(api, token).await;
            self.apply_send(report);
        }
    }

    // ============= Sidebar =============

    /// Apply a sidebar event that only touches shell state
    ///
    /// Returns the conversation whose messages now need fetching, if any.
    /// `Logout` is left to the owner of the session.
    pub fn handle_sidebar(&mut self, event: SidebarEvent) -> Option<ConversationId> {
        match event {
            SidebarEvent::NewChat => {
                self.new_chat();
                None
            }
            SidebarEvent::Select(id) => self.select(id).then_some(id),
            SidebarEvent::Logout => None,
        }
    }

    pub fn sidebar<Tz>(&self, now: &DateTime<Tz>) -> SidebarView
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        sidebar_view(&self.conversations, self.current, now)
    }

    pub fn view(&self) -> ConversationView {
        if self.current.is_none() && self.messages.is_empty() {
            return ConversationView::Welcome;
        }
        let title = self
            .current_conversation()
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "New chat".to_string());
        ConversationView::Thread {
            title,
            messages: self.messages.clone(),
            sending: self.sending,
        }
    }

    fn record_error(&mut self, error: &ClientError, fallback: &str) {
        if *error == ClientError::Cancelled {
            return;
        }
        tracing::warn!("{}: {}", fallback, error);
        self.error = Some(error.user_message(fallback));
    }
}
