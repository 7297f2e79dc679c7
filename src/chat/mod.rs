//! Chat screen state: the conversation sidebar and the shell around it.

/// Chat shell: conversation list, selection and message thread.
pub mod shell;
/// Sidebar projection and date labels.
pub mod sidebar;

pub use shell::{ChatShell, ConversationView, PendingSend, SendReport, SendTarget};
pub use sidebar::{format_created_at, sidebar_view, SidebarEvent, SidebarItem, SidebarView};
