//! Lead capture form state and its server round-trips.

use super::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::constants::TOAST_MS;
use crate::shared::dom::alert;
use crate::shared::toast::ToastService;
use crate::usecases::u502_ask::api::ask_raw;
use contracts::domain::a001_chat_message::build_transcript;
use contracts::domain::a003_lead_draft::{validation_alert, LeadDraft};
use contracts::usecases::u503_sales_connect::{
    manual_summary, parse_preview, render_preview, summary_from_answer, summary_question,
    LeadCall, LeadSequencer, LeadTicket, SendOutcome, FALLBACK_STATUS, GENERATED_STATUS, NO_HISTORY_STATUS, PREVIEW_REQUIRED,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub const SUMMARIZING_STATUS: &str = "AI is analyzing your chat history...";

/// ViewModel for the "connect to a manager" modal
#[derive(Clone, Copy)]
pub struct SalesConnectVm {
    pub visible: RwSignal<bool>,

    pub product_ref: RwSignal<String>,
    pub quoted_price: RwSignal<String>,
    pub user_name: RwSignal<String>,
    pub user_email: RwSignal<String>,
    pub user_phone: RwSignal<String>,
    pub best_time: RwSignal<String>,
    pub summary: RwSignal<String>,
    pub consent: RwSignal<bool>,

    /// Editable email preview; the source of truth for Send.
    pub preview: RwSignal<String>,
    pub send_enabled: RwSignal<bool>,
    pub previewing: RwSignal<bool>,
    pub sending: RwSignal<bool>,
    pub summarizing: RwSignal<bool>,
    pub summary_status: RwSignal<String>,

    requests: StoredValue<LeadSequencer>,
}

impl SalesConnectVm {
    pub fn new() -> Self {
        Self {
            visible: RwSignal::new(false),
            product_ref: RwSignal::new(String::new()),
            quoted_price: RwSignal::new(String::new()),
            user_name: RwSignal::new(String::new()),
            user_email: RwSignal::new(String::new()),
            user_phone: RwSignal::new(String::new()),
            best_time: RwSignal::new(String::new()),
            summary: RwSignal::new(String::new()),
            consent: RwSignal::new(false),
            preview: RwSignal::new(String::new()),
            send_enabled: RwSignal::new(false),
            previewing: RwSignal::new(false),
            sending: RwSignal::new(false),
            summarizing: RwSignal::new(false),
            summary_status: RwSignal::new(String::new()),
            requests: StoredValue::new(LeadSequencer::new()),
        }
    }

    /// Snapshot of the form.
    pub fn draft(&self) -> LeadDraft {
        LeadDraft {
            product_ref: self.product_ref.get_untracked(),
            quoted_price: self.quoted_price.get_untracked(),
            user_name: self.user_name.get_untracked(),
            user_email: self.user_email.get_untracked(),
            user_phone: self.user_phone.get_untracked(),
            best_time: self.best_time.get_untracked(),
            summary: self.summary.get_untracked(),
            consent: self.consent.get_untracked(),
        }
    }

    pub fn open(&self, product_ref: &str, quoted_price: &str, context_summary: &str) {
        self.product_ref.set(product_ref.to_string());
        self.quoted_price.set(quoted_price.to_string());
        self.summary.set(context_summary.to_string());
        self.visible.set(true);
        log::debug!("sales connect opened for {:?}", product_ref);
    }

    /// Hide the modal and discard the draft. Pending answers are dropped.
    pub fn close(&self) {
        self.visible.set(false);
        self.requests.update_value(|r| r.close());
        for field in [
            self.product_ref,
            self.quoted_price,
            self.user_name,
            self.user_email,
            self.user_phone,
            self.best_time,
            self.summary,
            self.preview,
            self.summary_status,
        ] {
            field.set(String::new());
        }
        self.consent.set(false);
        self.send_enabled.set(false);
        self.previewing.set(false);
        self.sending.set(false);
        self.summarizing.set(false);
    }

    fn begin(&self, call: LeadCall) -> Option<LeadTicket> {
        self.requests.try_update_value(|r| r.begin(call))
    }

    fn is_current(&self, ticket: LeadTicket) -> bool {
        self.requests.with_value(|r| r.is_current(ticket))
    }

    /// Trimmed-field validation; alerts and yields `None` on failure.
    fn check_draft(&self) -> Option<LeadDraft> {
        let draft = self.draft();
        let errors = draft.validate();
        if errors.is_empty() {
            Some(draft)
        } else {
            alert(&validation_alert(&errors));
            None
        }
    }

    pub fn preview_email(&self) {
        let Some(draft) = self.check_draft() else {
            return;
        };
        let vm = *self;
        let Some(ticket) = vm.begin(LeadCall::Preview) else {
            return;
        };
        vm.send_enabled.set(false);
        vm.previewing.set(true);

        spawn_local(async move {
            let result = api::prepare_email(&draft).await;
            if !vm.is_current(ticket) {
                log::debug!("dropping stale email preview");
                return;
            }
            vm.previewing.set(false);
            match result {
                Ok(email) => {
                    vm.preview.set(render_preview(&email));
                    vm.send_enabled.set(true);
                }
                Err(e) => {
                    log::error!("email preview failed: {}", e);
                    vm.send_enabled.set(false);
                    alert(&format!("Preview failed: {e}"));
                }
            }
        });
    }

    pub fn send_email(&self, toast: ToastService) {
        if self.check_draft().is_none() {
            return;
        }
        let request = match parse_preview(&self.preview.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                alert(message);
                return;
            }
        };
        let vm = *self;
        let Some(ticket) = vm.begin(LeadCall::Send) else {
            return;
        };
        vm.sending.set(true);

        spawn_local(async move {
            let result = api::send_email(&request).await;
            vm.sending.set(false);
            if !vm.is_current(ticket) {
                log::debug!("dropping send result for a closed form");
                return;
            }
            match result {
                Ok(outcome) => {
                    if let SendOutcome::DryRun { info } = &outcome {
                        log::info!("email dry run");
                        vm.preview.set(info.clone());
                    }
                    toast.show(outcome.toast());
                    TimeoutFuture::new(TOAST_MS).await;
                    if vm.is_current(ticket) {
                        vm.close();
                    }
                }
                Err(e) => {
                    log::error!("email send failed: {}", e);
                    alert(&format!("Send failed: {e}"));
                }
            }
        });
    }

    /// Fill the summary field from the conversation so far.
    pub fn generate_summary(&self, ctx: AppGlobalContext) {
        let transcript = ctx.messages.with_untracked(|m| build_transcript(m));
        if transcript.trim().is_empty() {
            self.summary_status.set(NO_HISTORY_STATUS.to_string());
            return;
        }

        let vm = *self;
        let Some(ticket) = vm.begin(LeadCall::Summary) else {
            return;
        };
        vm.summarizing.set(true);
        vm.summary_status.set(SUMMARIZING_STATUS.to_string());

        spawn_local(async move {
            let result = ask_raw(&summary_question(&transcript)).await;
            vm.summarizing.set(false);
            if !vm.is_current(ticket) {
                return;
            }

            let generated = match result {
                Ok(data) => summary_from_answer(&data),
                Err(e) => {
                    log::warn!("summary request failed: {}", e);
                    None
                }
            };
            match generated {
                Some(summary) => {
                    vm.summary.set(summary);
                    vm.summary_status.set(GENERATED_STATUS.to_string());
                }
                None => {
                    vm.summary.set(manual_summary(&transcript));
                    vm.summary_status.set(FALLBACK_STATUS.to_string());
                }
            }
        });
    }
}

pub fn use_sales_connect() -> SalesConnectVm {
    use_context::<SalesConnectVm>().expect("SalesConnectVm not provided in context")
}
