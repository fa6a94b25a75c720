//! Conversation turns: asking, starting over and wiping the session.

use super::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::dom::time_label;
use contracts::usecases::u502_ask::{ask_failure_line, AskRequest};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Submit `raw` as a question about the current topic.
///
/// Blank input, or no topic yet, is ignored without a request or a message.
pub fn submit_question(ctx: AppGlobalContext, raw: &str) {
    let Some(question) = ctx.session.with_untracked(|s| s.accept_question(raw)) else {
        return;
    };

    ctx.session.update(|s| s.begin_turn(&question));
    ctx.push_user(&question);
    ctx.draft.set(String::new());
    ctx.show_typing();
    ctx.asking.set(true);

    let compare = ctx.session.with_untracked(|s| s.uses_compare_endpoint());
    let request = AskRequest::new(question, compare);
    let token = ctx.turn_token();

    spawn_local(async move {
        let result = api::ask(&request).await;
        ctx.asking.set(false);

        if !ctx.is_current(token) {
            log::debug!("dropping stale answer to {}", request.path());
            return;
        }
        ctx.hide_typing();

        match result {
            Ok(outcome) => {
                for reply in outcome.replies() {
                    ctx.push_assistant(reply.text, reply.sources);
                }
            }
            Err(e) => {
                log::error!("ask failed: {}", e);
                ctx.push_assistant(ask_failure_line(&e), Vec::new());
            }
        }
    });
}

pub fn start_new_chat(ctx: AppGlobalContext) {
    ctx.start_new_chat(&time_label());
}

/// Wipe the conversation here and on the server.
pub fn clear_history(ctx: AppGlobalContext) {
    spawn_local(api::clear_session());
    ctx.clear_all();
}
