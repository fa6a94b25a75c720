use super::flow::submit_question;
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::usecases::u504_speech_to_text::VoiceButton;
use leptos::prelude::*;
use thaw::*;

/// Question input with voice and send buttons. Disabled until a topic is set.
#[component]
#[allow(non_snake_case)]
pub fn Composer() -> impl IntoView {
    let ctx = use_app_context();

    let locked = Signal::derive(move || !ctx.session.with(|s| s.composer_enabled()));
    let send_disabled = Signal::derive(move || locked.get() || ctx.asking.get());

    let send = move || submit_question(ctx, &ctx.draft.get_untracked());

    view! {
        <div class="composer" class:disabled=move || locked.get()>
            <div class="composer__input">
                <Textarea
                    value=ctx.draft
                    placeholder="Ask about the product… (Enter to send, Shift+Enter for a new line)"
                    disabled=locked
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            if !send_disabled.get_untracked() {
                                send();
                            }
                        }
                    }
                />
            </div>
            <VoiceButton />
            <Button
                appearance=ButtonAppearance::Primary
                disabled=send_disabled
                on_click=move |_| send()
            >
                {icon("send")}
                {move || if ctx.asking.get() { " Sending…" } else { " Send" }}
            </Button>
        </div>
    }
}
