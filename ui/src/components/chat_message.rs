//! Chat message component

use chatbot::types::Message;
use chrono::Local;
use leptos::prelude::*;

/// Render a single chat message
#[component]
pub fn ChatMessage(message: Message) -> impl IntoView {
    let is_user = message.is_user;
    let time = message
        .timestamp
        .with_timezone(&Local)
        .format("%H:%M")
        .to_string();

    view! {
        <div class=format!(
            "flex items-start gap-3 message-appear {}",
            if is_user { "flex-row-reverse" } else { "" }
        )>
            <div class=format!(
                "w-8 h-8 rounded-full flex items-center justify-center text-white text-sm font-medium shrink-0 {}",
                if is_user {
                    "bg-gradient-to-br from-blue-500 to-cyan-500"
                } else {
                    "bg-gradient-to-br from-violet-500 to-purple-600"
                }
            )>
                {if is_user { "👤" } else { "🤖" }}
            </div>

            <div class=format!(
                "flex flex-col gap-1 max-w-[80%] {}",
                if is_user { "items-end" } else { "items-start" }
            )>
                <div class=format!(
                    "px-4 py-3 rounded-2xl {}",
                    if is_user {
                        "bg-blue-600 text-white rounded-tr-sm"
                    } else {
                        "bg-slate-800 text-slate-100 rounded-tl-sm"
                    }
                )>
                    <div class="whitespace-pre-wrap break-words">
                        <MessageContent content=message.content />
                    </div>
                </div>

                <span class="text-xs text-slate-600 mt-1">{time}</span>
            </div>
        </div>
    }
}

/// Message text with fenced code blocks pulled out
#[component]
fn MessageContent(content: String) -> impl IntoView {
    let parts: Vec<String> = content.split("```").map(String::from).collect();

    if parts.len() < 2 {
        return view! { <span>{content}</span> }.into_any();
    }

    view! {
        <div>
            {parts.into_iter().enumerate().map(|(i, part)| {
                if i % 2 == 0 {
                    return view! { <span>{part}</span> }.into_any();
                }
                // First line of a fence is the language tag
                let (lang, code) = match part.split_once('\n') {
                    Some((lang, code)) => (lang.trim().to_string(), code.to_string()),
                    None => (String::new(), part),
                };
                view! {
                    <div class="my-2">
                        {(!lang.is_empty()).then(|| view! {
                            <div class="text-xs text-slate-500 bg-slate-900 px-3 py-1 rounded-t-lg font-mono">
                                {lang}
                            </div>
                        })}
                        <pre class="bg-slate-900 p-3 rounded-lg overflow-x-auto font-mono text-sm">
                            <code class="text-green-400">{code}</code>
                        </pre>
                    </div>
                }.into_any()
            }).collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
