//! Topic setup controls and the session history.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::usecases::u501_init_topic::{CompareForm, ModeToggles, TopicForm};
use leptos::prelude::*;

/// Topic selections and new-chat markers, newest first.
#[component]
fn HistoryList() -> impl IntoView {
    let ctx = use_app_context();
    let expanded = RwSignal::new(true);

    view! {
        <section class="sidebar-card history">
            <div
                class="app-sidebar__item"
                on:click=move |_| expanded.update(|open| *open = !*open)
            >
                <div class="app-sidebar__item-content">
                    {icon("document")}
                    <span>"History"</span>
                </div>
                <span class="app-sidebar__count">
                    {move || ctx.session.with(|s| s.history.len())}
                </span>
            </div>
            <Show when=move || expanded.get()>
                <ul class="history-list">
                    {move || {
                        ctx.session
                            .with(|s| s.history.clone())
                            .into_iter()
                            .map(|line| view! { <li class="history-item">{line}</li> })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </section>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <div class="app-sidebar__content">
            <TopicForm />
            <ModeToggles />
            <CompareForm />
            <HistoryList />
        </div>
    }
}
