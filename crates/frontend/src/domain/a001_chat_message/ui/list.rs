use super::bubble::{MessageBubble, TypingBubble};
use crate::layout::global_context::use_app_context;
use crate::shared::dom::is_near_bottom;
use leptos::prelude::*;

/// Scrolling transcript.
///
/// New messages pull the view down only if the reader was already near the
/// bottom; the typing placeholder always does.
#[component]
pub fn MessageList() -> impl IntoView {
    let ctx = use_app_context();
    let container = NodeRef::<leptos::html::Div>::new();
    let follow = StoredValue::new(true);

    let scroll_to_bottom = move || {
        if let Some(el) = container.get_untracked() {
            request_animation_frame(move || {
                el.set_scroll_top(el.scroll_height());
            });
        }
    };

    Effect::new(move |_| {
        ctx.messages.with(|m| m.len());
        if follow.get_value() {
            scroll_to_bottom();
        }
    });

    Effect::new(move |_| {
        if ctx.typing.get() > 0 {
            scroll_to_bottom();
        }
    });

    let on_scroll = move |_| {
        if let Some(el) = container.get_untracked() {
            follow.set_value(is_near_bottom(
                el.scroll_height(),
                el.scroll_top(),
                el.client_height(),
            ));
        }
    };

    view! {
        <div class="messages" node_ref=container on:scroll=on_scroll aria-live="polite">
            <For
                each=move || ctx.messages.get()
                key=|msg| msg.id
                let:msg
            >
                <MessageBubble msg />
            </For>
            <Show when=move || { ctx.typing.get() > 0 }>
                <TypingBubble />
            </Show>
        </div>
    }
}
