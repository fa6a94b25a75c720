//! Transient success banner.

use super::constants::TOAST_MS;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Shows one message at a time; a newer toast replaces the current one.
#[derive(Clone, Copy)]
pub struct ToastService {
    message: RwSignal<Option<String>>,
    generation: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    pub fn show(&self, text: impl Into<String>) {
        let svc = *self;
        svc.generation.update(|g| *g += 1);
        let generation = svc.generation.get_untracked();
        svc.message.set(Some(text.into()));

        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            if svc.generation.get_untracked() == generation {
                svc.message.set(None);
            }
        });
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = use_toast();

    view! {
        {move || {
            toast
                .message
                .get()
                .map(|text| view! { <div class="success-message" role="status">{text}</div> })
        }}
    }
}
