use super::api;
use crate::layout::global_context::use_app_context;
use contracts::domain::a002_topic_session::OcrMode;
use contracts::usecases::u501_init_topic::{
    pair_failure_line, topic_failure_line, CompareInitRequest, InitTopicRequest, PAIR_PENDING,
    PAIR_READY, TOPIC_PENDING,
};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlInputElement};

/// First file of a file picker's change event.
fn picked_file(ev: &leptos::ev::Event) -> Option<File> {
    ev.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

/// Primary topic: PDF, URL or product name.
#[component]
#[allow(non_snake_case)]
pub fn TopicForm() -> impl IntoView {
    let ctx = use_app_context();
    let busy = RwSignal::new(false);

    let on_file = move |ev: leptos::ev::Event| ctx.primary_file.set(picked_file(&ev));

    let submit = move || {
        let raw = ctx.topic_input.get_untracked();
        let pdf = ctx.primary_file.get_untracked();
        let mode = OcrMode::from_str(&ctx.ocr_mode.get_untracked());

        let request = match InitTopicRequest::new(&raw, pdf.is_some(), mode) {
            Ok(request) => request,
            Err(message) => {
                ctx.topic_status.set(message.to_string());
                return;
            }
        };

        let candidate = if raw.trim().is_empty() {
            pdf.as_ref().map(|f| f.name()).unwrap_or_default()
        } else {
            raw
        };
        ctx.session.update(|s| s.remember_reference(&candidate));

        ctx.topic_status.set(TOPIC_PENDING.to_string());
        busy.set(true);
        let token = ctx.session_token();

        spawn_local(async move {
            let result = api::init_topic(&request, pdf).await;
            busy.set(false);
            if !ctx.is_same_session(token) {
                log::debug!("dropping init-topic answer after clear");
                return;
            }
            match result {
                Ok(data) => {
                    log::info!("topic selected: {}", data.label());
                    ctx.session
                        .update(|s| s.confirm_topic(data.primary.as_deref(), data.history_line()));
                    ctx.topic_status.set(data.status_line());
                }
                Err(e) => {
                    log::error!("init-topic failed: {}", e);
                    ctx.topic_status.set(topic_failure_line(&e));
                }
            }
        });
    };

    view! {
        <section class="sidebar-card">
            <h3>"Topic"</h3>
            <Space vertical=true>
                {move || {
                    ctx.form_epoch.track();
                    view! { <input type="file" accept="application/pdf,.pdf" on:change=on_file /> }
                }}
                <span class="file-name">
                    {move || {
                        ctx.primary_file
                            .with(|f| f.as_ref().map(|f| format!("Selected: {}", f.name())))
                    }}
                </span>
                <Input value=ctx.topic_input placeholder="Product URL or name" />
                <Select value=ctx.ocr_mode>
                    {OcrMode::all()
                        .into_iter()
                        .map(|mode| {
                            view! { <option value=mode.as_str()>{mode.display_name()}</option> }
                        })
                        .collect_view()}
                </Select>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=busy
                    on_click=move |_| submit()
                >
                    "Set Topic"
                </Button>
                <div class="status">{move || ctx.topic_status.get()}</div>
            </Space>
        </section>
    }
}

/// Second product for side-by-side answers. Side A is the primary topic.
#[component]
#[allow(non_snake_case)]
pub fn CompareForm() -> impl IntoView {
    let ctx = use_app_context();
    let busy = RwSignal::new(false);

    let on_file = move |ev: leptos::ev::Event| ctx.compare_file.set(picked_file(&ev));

    let submit = move || {
        let can_pair = ctx.session.with_untracked(|s| s.can_pair());
        let raw_a = ctx.topic_input.get_untracked();
        let raw_b = ctx.compare_input.get_untracked();
        let pdf_a = ctx.primary_file.get_untracked();
        let pdf_b = ctx.compare_file.get_untracked();

        let request = match CompareInitRequest::new(can_pair, &raw_a, &raw_b, pdf_b.is_some()) {
            Ok(request) => request,
            Err(message) => {
                ctx.compare_status.set(message.to_string());
                return;
            }
        };

        ctx.compare_status.set(PAIR_PENDING.to_string());
        busy.set(true);
        let token = ctx.session_token();

        spawn_local(async move {
            let result = api::init_compare(&request, pdf_a, pdf_b).await;
            busy.set(false);
            if !ctx.is_same_session(token) {
                return;
            }
            match result {
                Ok(()) => {
                    ctx.session.update(|s| s.confirm_compare_pair());
                    ctx.compare_status.set(PAIR_READY.to_string());
                }
                Err(e) => {
                    log::warn!("compare init failed: {}", e);
                    ctx.compare_status.set(pair_failure_line(&e));
                }
            }
        });
    };

    view! {
        <Show when=move || ctx.compare_on.get()>
            <section class="sidebar-card">
                <h3>"Compare with"</h3>
                <Space vertical=true>
                    {move || {
                        ctx.form_epoch.track();
                        view! { <input type="file" accept="application/pdf,.pdf" on:change=on_file /> }
                    }}
                    <Input value=ctx.compare_input placeholder="Second product URL or name" />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=busy
                        on_click=move |_| submit()
                    >
                        "Set Pair"
                    </Button>
                    <div class="status">{move || ctx.compare_status.get()}</div>
                </Space>
            </section>
        </Show>
    }
}

/// Document-answer and comparison-mode switches.
#[component]
#[allow(non_snake_case)]
pub fn ModeToggles() -> impl IntoView {
    let ctx = use_app_context();

    Effect::new(move |prev: Option<bool>| {
        let enabled = ctx.rag_on.get();
        if prev.is_some() {
            ctx.session.update(|s| s.rag_enabled = enabled);
            spawn_local(async move {
                match api::set_rag(enabled).await {
                    Ok(state) => {
                        if let Some(server) = state.rag_enabled {
                            ctx.session.update(|s| s.rag_enabled = server);
                        }
                    }
                    Err(e) => log::warn!("RAG toggle failed: {}", e),
                }
            });
        }
        enabled
    });

    Effect::new(move |_| {
        let on = ctx.compare_on.get();
        ctx.session.update(|s| s.compare_mode = on);
    });

    let rag_indicator = move || ctx.session.with(|s| s.rag_enabled);
    let compare_indicator = move || ctx.session.with(|s| s.compare_mode);

    view! {
        <section class="sidebar-card toggles">
            <div class="toggle-row">
                <Switch checked=ctx.rag_on label="Answer from document" />
                <span class="dot" class:on=rag_indicator></span>
                <span>{move || if rag_indicator() { "RAG: ON" } else { "RAG: OFF" }}</span>
            </div>
            <div class="toggle-row">
                <Switch checked=ctx.compare_on label="Comparison mode" />
                <span class="dot" class:on=compare_indicator></span>
                <span>{move || if compare_indicator() { "ON" } else { "OFF" }}</span>
            </div>
        </section>
    }
}
