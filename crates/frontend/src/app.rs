use crate::domain::a001_chat_message::ui::MessageList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::theme::ThemeProvider;
use crate::shared::toast::{ToastHost, ToastService};
use crate::usecases::u502_ask::Composer;
use crate::usecases::u503_sales_connect::{SalesConnectModal, SalesConnectVm};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Chat state shared by every panel.
    provide_context(AppGlobalContext::new());
    provide_context(ToastService::new());
    provide_context(SalesConnectVm::new());

    view! {
        <ThemeProvider>
            <Shell
                left=|| view! { <Sidebar /> }.into_any()
                center=|| view! {
                    <MessageList />
                    <Composer />
                }.into_any()
            />
            <SalesConnectModal />
            <ToastHost />
        </ThemeProvider>
    }
}
