use super::speech::SpeakButton;
use crate::shared::icons::icon;
use contracts::domain::a001_chat_message::{ChatMessage, ChatRole};
use leptos::prelude::*;

/// Assistant text line by line, with the leading bullet highlighted.
fn formatted_lines(text: &str) -> AnyView {
    text.lines()
        .map(|line| match line.strip_prefix('•') {
            Some(rest) => view! {
                <div class="line">
                    <span class="bullet">"•"</span>
                    {rest.trim_start().to_string()}
                </div>
            }
            .into_any(),
            None => view! { <div class="line">{line.to_string()}</div> }.into_any(),
        })
        .collect_view()
        .into_any()
}

#[component]
fn SourcesList(sources: Vec<String>) -> impl IntoView {
    view! {
        <details class="sources">
            <summary>"Sources"</summary>
            <ul>
                {sources
                    .into_iter()
                    .enumerate()
                    .map(|(i, url)| {
                        let label = format!("[{}] {}", i + 1, url);
                        view! {
                            <li>
                                <a href=url target="_blank" rel="noopener noreferrer">{label}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </details>
    }
}

/// One transcript entry; layout depends on who wrote it.
#[component]
pub fn MessageBubble(msg: ChatMessage) -> impl IntoView {
    let sources = msg.has_sources().then(|| msg.sources.clone());

    match msg.role {
        ChatRole::User => view! {
            <div class="msg user">
                <div class="avatar">{icon("user")}</div>
                <div class="bubble">
                    <div class="content">{msg.text}</div>
                    {sources.map(|sources| view! { <SourcesList sources /> })}
                </div>
            </div>
        }
        .into_any(),
        ChatRole::Assistant => view! {
            <div class="msg ai">
                <div class="avatar">{icon("bot")}</div>
                <div class="bubble">
                    <div class="content">{formatted_lines(&msg.text)}</div>
                    <div class="controls">
                        <SpeakButton text=msg.text.clone() />
                    </div>
                    {sources.map(|sources| view! { <SourcesList sources /> })}
                </div>
            </div>
        }
        .into_any(),
    }
}

/// Placeholder shown while an answer is on its way.
#[component]
pub fn TypingBubble() -> impl IntoView {
    view! {
        <div class="msg ai typing">
            <div class="avatar">{icon("bot")}</div>
            <div class="bubble">
                <div class="content">
                    <div class="dots" aria-label="AI is typing" role="status">
                        <span></span>
                        <span></span>
                        <span></span>
                    </div>
                </div>
            </div>
        </div>
    }
}
