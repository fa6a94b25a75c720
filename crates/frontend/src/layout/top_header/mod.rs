//! Top bar: title, theme switch and the conversation actions.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use crate::usecases::u502_ask::{clear_history, start_new_chat};
use crate::usecases::u503_sales_connect::use_sales_connect;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let sales = use_sales_connect();

    let connect = move |_| {
        let (product_ref, quoted_price, context_summary) = ctx.session.with_untracked(|s| {
            (
                s.product_ref.clone(),
                s.quoted_price.clone(),
                s.context_summary.clone(),
            )
        });
        sales.open(&product_ref, &quoted_price, &context_summary);
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                {icon("sparkles")}
                <span class="top-header__title">"Product Assistant"</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    title="New chat"
                    on:click=move |_| start_new_chat(ctx)
                >
                    {icon("plus")}
                </button>
                <button
                    class="top-header__icon-btn"
                    title="Clear history"
                    on:click=move |_| clear_history(ctx)
                >
                    {icon("trash")}
                </button>
                <button class="top-header__connect" title="Connect to a store manager" on:click=connect>
                    {icon("headset")}
                    <span>"Talk to a manager"</span>
                </button>
                <ThemeToggle />
            </div>
        </div>
    }
}
