//! Conversation sidebar

use chatbot::chat::sidebar::{SidebarEvent, SidebarItem, SidebarView, EMPTY_HINT, EMPTY_TITLE};
use leptos::prelude::*;

/// Conversation list with New Chat and Sign Out controls
///
/// Renders whatever `listing` holds and reports clicks through `on_event`.
#[component]
pub fn Sidebar<F>(
    /// Rows to show, already labelled and highlighted
    listing: Signal<SidebarView>,
    /// Whether sidebar is open (mobile)
    is_open: RwSignal<bool>,
    on_event: F,
) -> impl IntoView
where
    F: Fn(SidebarEvent) + Clone + Send + Sync + 'static,
{
    let new_chat = {
        let on_event = on_event.clone();
        move |_| {
            is_open.set(false);
            on_event(SidebarEvent::NewChat);
        }
    };
    let logout = {
        let on_event = on_event.clone();
        move |_| on_event(SidebarEvent::Logout)
    };

    view! {
        // Overlay for mobile
        <Show when=move || is_open.get()>
            <div
                class="fixed inset-0 bg-black/60 backdrop-blur-sm z-30 lg:hidden animate-fade-in"
                on:click=move |_| is_open.set(false)
            ></div>
        </Show>

        <aside class=move || format!(
            "sidebar fixed lg:relative inset-y-0 left-0 z-40 w-72
             flex flex-col transform transition-transform duration-300 lg:translate-x-0 {}",
            if is_open.get() { "translate-x-0" } else { "-translate-x-full" }
        )>
            <div class="p-4 border-b border-[var(--border-default)]">
                <button on:click=new_chat class="btn btn-primary w-full">
                    <svg xmlns="http://www.w3.org/2000/svg" class="w-5 h-5" viewBox="0 0 20 20" fill="currentColor">
                        <path fill-rule="evenodd" d="M10 3a1 1 0 011 1v5h5a1 1 0 110 2h-5v5a1 1 0 11-2 0v-5H4a1 1 0 110-2h5V4a1 1 0 011-1z" clip-rule="evenodd" />
                    </svg>
                    "New Chat"
                </button>
            </div>

            <div class="flex-1 overflow-y-auto p-4">
                {move || match listing.get() {
                    SidebarView::Empty => view! {
                        <div class="text-center px-2 py-8">
                            <p class="text-sm text-[var(--text-secondary)]">{EMPTY_TITLE}</p>
                            <p class="text-xs text-[var(--text-muted)] mt-1">{EMPTY_HINT}</p>
                        </div>
                    }.into_any(),
                    SidebarView::Items(items) => {
                        let on_event = on_event.clone();
                        view! {
                            <div class="space-y-1">
                                {items.into_iter().map(|item| {
                                    let on_event = on_event.clone();
                                    view! {
                                        <ConversationButton
                                            item=item
                                            on_click=move |id| {
                                                is_open.set(false);
                                                on_event(SidebarEvent::Select(id));
                                            }
                                        />
                                    }
                                }).collect::<Vec<_>>()}
                            </div>
                        }.into_any()
                    }
                }}
            </div>

            <div class="p-4 border-t border-[var(--border-default)]">
                <button on:click=logout class="btn btn-ghost w-full">
                    "Sign Out"
                </button>
            </div>
        </aside>
    }
}

/// One conversation row
#[component]
fn ConversationButton(
    item: SidebarItem,
    on_click: impl Fn(chatbot::types::ConversationId) + 'static,
) -> impl IntoView {
    let id = item.id;

    view! {
        <button
            on:click=move |_| on_click(id)
            class=format!(
                "sidebar-item relative w-full text-left transition-all duration-150 {}",
                if item.selected { "sidebar-item-active" } else { "" }
            )
        >
            <span class="text-lg">"💬"</span>
            <div class="flex-1 min-w-0">
                <div class="text-sm font-medium truncate">{item.name}</div>
                <div class="text-xs text-[var(--text-muted)]">{item.date_label}</div>
            </div>
        </button>
    }
}
