//! Read-aloud toggle for assistant bubbles.

use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance};

fn synthesis() -> Option<SpeechSynthesis> {
    web_sys::window().and_then(|w| w.speech_synthesis().ok())
}

/// Utterance whose lifecycle events drive the `playing` flag.
fn create_utterance(
    text: &str,
    playing: RwSignal<bool>,
) -> Result<SpeechSynthesisUtterance, JsValue> {
    let utterance = SpeechSynthesisUtterance::new_with_text(text)?;

    let stopped = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        playing.try_set(false);
    }) as Box<dyn FnMut(_)>);
    utterance.set_onend(Some(stopped.as_ref().unchecked_ref()));
    utterance.set_onerror(Some(stopped.as_ref().unchecked_ref()));
    utterance.set_onpause(Some(stopped.as_ref().unchecked_ref()));
    stopped.forget();

    let resumed = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        playing.try_set(true);
    }) as Box<dyn FnMut(_)>);
    utterance.set_onresume(Some(resumed.as_ref().unchecked_ref()));
    resumed.forget();

    Ok(utterance)
}

/// Play, pause and resume the bubble's text.
///
/// Starting fresh speech cancels whatever the page was saying before.
#[component]
pub fn SpeakButton(text: String) -> impl IntoView {
    let playing = RwSignal::new(false);
    let utterance = StoredValue::new_local(None::<SpeechSynthesisUtterance>);

    let toggle = move |_| {
        let Some(synth) = synthesis() else {
            log::warn!("speechSynthesis is not available");
            return;
        };

        if playing.get_untracked() {
            if synth.speaking() && !synth.paused() {
                synth.pause();
            }
            return;
        }

        if synth.paused() && utterance.with_value(|u| u.is_some()) {
            synth.resume();
            playing.set(true);
            return;
        }

        synth.cancel();
        match create_utterance(&text, playing) {
            Ok(u) => {
                synth.speak(&u);
                utterance.set_value(Some(u));
                playing.set(true);
            }
            Err(e) => log::warn!("could not create utterance: {:?}", e),
        }
    };

    let title = move || if playing.get() { "Pause speech" } else { "Play speech" };

    view! {
        <button
            class="tts-toggle"
            title=title
            aria-label=title
            on:click=toggle
        >
            {move || if playing.get() { icon("pause") } else { icon("play") }}
        </button>
    }
}
