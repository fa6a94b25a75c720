use crate::shared::http::post_form;
use contracts::shared::api::ApiError;
use contracts::shared::form::FormFields;
use contracts::usecases::u502_ask::{AskOutcome, AskRequest, ASK_PATH, CLEAR_PATH};
use serde_json::Value;

/// Задать вопрос по текущей теме
pub async fn ask(request: &AskRequest) -> Result<AskOutcome, ApiError> {
    let response = post_form(request.path(), &request.fields(), Vec::new()).await?;
    let data: Value = response.envelope()?;
    let outcome = AskOutcome::classify(&data);
    log::debug!("{} answer from {}", outcome.shape_name(), request.path());
    Ok(outcome)
}

/// Ask the single-topic endpoint and return the raw `data` object.
pub async fn ask_raw(question: &str) -> Result<Value, ApiError> {
    let request = AskRequest::new(question, false);
    let response = post_form(ASK_PATH, &request.fields(), Vec::new()).await?;
    response.envelope()
}

/// Reset the server-side conversation. Failures are only logged.
pub async fn clear_session() {
    if let Err(e) = post_form(CLEAR_PATH, &FormFields::new(), Vec::new()).await {
        log::warn!("clear failed: {}", e);
    }
}
