//! Chat page - sidebar plus conversation pane

use chatbot::api::ChatApi;
use chatbot::chat::shell::{ChatShell, ConversationView};
use chatbot::chat::sidebar::SidebarEvent;
use chatbot::types::{ClientError, ConversationId};
use chatbot::utils::task::TaskScope;
use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::components::{ChatInput, ChatMessage, LoadingSpinner, Sidebar, TypingIndicator};
use crate::state::AppState;

/// Main chat page
#[component]
pub fn ChatPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let shell = RwSignal::new(ChatShell::new());
    let input = RwSignal::new(String::new());
    let sidebar_open = RwSignal::new(false);
    let messages_end_ref = NodeRef::<leptos::html::Div>::new();

    // Everything this page starts is cancelled when it unmounts
    let scope = TaskScope::new();
    on_cleanup({
        let scope = scope.clone();
        move || scope.cancel_all()
    });

    let scroll_to_bottom = move || {
        if let Some(el) = messages_end_ref.get_untracked() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    };

    // Load the conversation list once on mount
    if let Some(token) = state.token() {
        let api = state.api();
        let request = scope.wrap(async move { api.list_conversations(&token).await });
        spawn_local(async move {
            match request.await {
                Err(ClientError::Cancelled) => {}
                result => shell.update(|s| s.apply_conversations(result)),
            }
        });
    }

    let load_messages = {
        let scope = scope.clone();
        move |id: ConversationId| {
            let Some(token) = state.token() else {
                return;
            };
            let api = state.api();
            let request = scope.wrap(async move { api.list_messages(&token, id).await });
            spawn_local(async move {
                match request.await {
                    Err(ClientError::Cancelled) => {}
                    result => {
                        shell.update(|s| s.apply_messages(id, result));
                        scroll_to_bottom();
                    }
                }
            });
        }
    };

    let on_sidebar_event = {
        let scope = scope.clone();
        move |event: SidebarEvent| match event {
            SidebarEvent::Logout => {
                tracing::info!("Signing out");
                scope.cancel_all();
                shell.update(|s| s.reset());
                state.logout();
                navigate("/auth", Default::default());
            }
            other => {
                if let Some(id) = shell.try_update(|s| s.handle_sidebar(other)).flatten() {
                    load_messages(id);
                }
            }
        }
    };

    let send_message = {
        let scope = scope.clone();
        move || {
            let Some(token) = state.token() else {
                return;
            };
            let prompt = input.get_untracked();
            let Some(pending) = shell.try_update(|s| s.begin_send(&prompt)).flatten() else {
                return;
            };
            input.set(String::new());
            scroll_to_bottom();

            let api = state.api();
            let request =
                scope.wrap(async move { Ok::<_, ClientError>(pending.execute(&api, &token).await) });
            spawn_local(async move {
                if let Ok(report) = request.await {
                    shell.update(|s| s.apply_send(report));
                    scroll_to_bottom();
                }
            });
        }
    };

    let sidebar_listing = Signal::derive(move || shell.with(|s| s.sidebar(&Local::now())));
    let is_sending = Signal::derive(move || shell.with(|s| s.is_sending()));
    let composer_locked =
        Signal::derive(move || shell.with(|s| s.is_sending() || s.is_loading_messages()));
    let toggle_sidebar = move |_| sidebar_open.update(|v| *v = !*v);

    view! {
        <Title text="Chat" />
        <div class="h-screen flex flex-col bg-[var(--bg-primary)]">
            <div class="flex-1 flex overflow-hidden">
                <Sidebar listing=sidebar_listing is_open=sidebar_open on_event=on_sidebar_event />

                <main class="flex-1 flex flex-col min-w-0">
                    <div class="h-14 px-4 flex items-center justify-between border-b border-[var(--border-default)] glass">
                        // Mobile menu button
                        <button on:click=toggle_sidebar class="lg:hidden btn btn-ghost p-2">
                            <svg xmlns="http://www.w3.org/2000/svg" class="w-6 h-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                            </svg>
                        </button>

                        <div class="font-medium text-sm text-[var(--text-primary)] truncate">
                            {move || match shell.with(|s| s.view()) {
                                ConversationView::Welcome => "New chat".to_string(),
                                ConversationView::Thread { title, .. } => title,
                            }}
                        </div>

                        <div class="flex items-center gap-2">
                            <div class=move || format!(
                                "w-2 h-2 rounded-full {}",
                                if is_sending.get() { "bg-[var(--accent-warning)] animate-pulse" } else { "bg-[var(--accent-success)]" }
                            )></div>
                            <span class="text-xs text-[var(--text-muted)]">
                                {move || if is_sending.get() { "Thinking..." } else { "Ready" }}
                            </span>
                        </div>
                    </div>

                    <Show when=move || shell.with(|s| s.error().is_some())>
                        <div class="mx-4 mt-4 p-3 flex items-center justify-between bg-[var(--accent-error)]/10
                                    border border-[var(--accent-error)]/50 rounded-[var(--radius-md)]
                                    text-[var(--accent-error)] text-sm animate-fade-in">
                            <span>{move || shell.with(|s| s.error().unwrap_or_default().to_string())}</span>
                            <button on:click=move |_| shell.update(|s| s.dismiss_error()) class="ml-4">"✕"</button>
                        </div>
                    </Show>

                    <div class="flex-1 overflow-y-auto px-4 py-6 space-y-6">
                        {move || match shell.with(|s| s.view()) {
                            ConversationView::Welcome => view! { <EmptyState /> }.into_any(),
                            ConversationView::Thread { messages, sending, .. } => view! {
                                <Show when=move || shell.with(|s| s.is_loading_messages())>
                                    <div class="flex justify-center py-8">
                                        <LoadingSpinner size="w-8 h-8" label="Loading messages" />
                                    </div>
                                </Show>
                                {messages.into_iter().map(|msg| view! {
                                    <ChatMessage message=msg />
                                }).collect::<Vec<_>>()}
                                {sending.then(|| view! { <TypingIndicator /> })}
                            }.into_any(),
                        }}

                        // Scroll anchor
                        <div node_ref=messages_end_ref></div>
                    </div>

                    <ChatInput
                        value=input
                        on_submit=send_message
                        disabled=composer_locked
                        placeholder="Type your message... (Shift+Enter for new line)"
                    />
                </main>
            </div>
        </div>
    }
}

/// Welcome pane shown before any conversation is picked
#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state h-full">
            <span class="empty-state-icon text-5xl">"💬"</span>
            <h2 class="empty-state-title text-gradient">"How can I help you today?"</h2>
            <p class="empty-state-description">
                "Type a message below to start a new conversation, or pick one from the sidebar."
            </p>
        </div>
    }
}
