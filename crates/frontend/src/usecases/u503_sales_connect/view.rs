use super::view_model::{use_sales_connect, SalesConnectVm};
use crate::layout::global_context::use_app_context;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
fn Field(label: &'static str, #[prop(optional)] required: bool, children: Children) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">
                {label}
                {required.then(|| view! { <span class="required">" *"</span> })}
            </span>
            {children()}
        </label>
    }
}

#[component]
#[allow(non_snake_case)]
fn LeadForm(vm: SalesConnectVm) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Space vertical=true>
            <Field label="Product / Variant" required=true>
                <Input value=vm.product_ref placeholder="e.g. ACME Laptop 14 (16GB/512GB)" />
            </Field>
            <Field label="Quoted price">
                <Input value=vm.quoted_price placeholder="Price mentioned in the chat" />
            </Field>
            <Field label="Full name" required=true>
                <Input value=vm.user_name />
            </Field>
            <Field label="Email" required=true>
                <Input value=vm.user_email placeholder="you@example.com" />
            </Field>
            <Field label="Phone" required=true>
                <Input value=vm.user_phone placeholder="+1 555 123 4567" />
            </Field>
            <Field label="Best time to reach you">
                <Input value=vm.best_time placeholder="e.g. weekdays after 5pm" />
            </Field>
            <Field label="Summary" required=true>
                <Textarea value=vm.summary placeholder="What would you like the manager to know?" />
            </Field>
            <div class="summary-tools">
                <Button
                    appearance=ButtonAppearance::Subtle
                    disabled=vm.summarizing
                    on_click=move |_| vm.generate_summary(ctx)
                >
                    "✨ Generate Chat Summary"
                </Button>
                <span class="status">{move || vm.summary_status.get()}</span>
            </div>
            <Checkbox checked=vm.consent label="I agree to be contacted about this inquiry." />
        </Space>
    }
}

/// Lead capture dialog: validate, preview the drafted email, then send it.
#[component]
#[allow(non_snake_case)]
pub fn SalesConnectModal() -> impl IntoView {
    let vm = use_sales_connect();
    let toast = use_toast();

    let on_close = Callback::new(move |_| vm.close());
    let send_disabled = Signal::derive(move || !vm.send_enabled.get() || vm.sending.get());
    let preview_disabled = Signal::derive(move || vm.previewing.get() || vm.sending.get());

    view! {
        <Show when=move || vm.visible.get()>
            <Modal title="Connect with a store manager".to_string() on_close=on_close>
                <LeadForm vm=vm />
                <div class="email-preview">
                    <h3>"Email preview"</h3>
                    <Textarea
                        value=vm.preview
                        placeholder="Click “Preview Email” to draft the message."
                    />
                </div>
                <div class="modal-actions">
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=preview_disabled
                        on_click=move |_| vm.preview_email()
                    >
                        {move || if vm.previewing.get() { "Preparing…" } else { "Preview Email" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=send_disabled
                        on_click=move |_| vm.send_email(toast)
                    >
                        {move || if vm.sending.get() { "Sending…" } else { "Send" }}
                    </Button>
                </div>
            </Modal>
        </Show>
    }
}
