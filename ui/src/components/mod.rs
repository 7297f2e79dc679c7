//! Reusable UI components

pub mod chat_input;
pub mod chat_message;
pub mod header;
pub mod loading;
pub mod sidebar;

pub use chat_input::ChatInput;
pub use chat_message::ChatMessage;
pub use header::Header;
pub use loading::{LoadingDots, LoadingSpinner, TypingIndicator};
pub use sidebar::Sidebar;
