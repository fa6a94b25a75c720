use crate::shared::http::post_form;
use contracts::domain::a003_lead_draft::LeadDraft;
use contracts::shared::api::ApiError;
use contracts::usecases::u503_sales_connect::{
    PreparedEmail, SendEmailRequest, SendOutcome, SendResult, PREPARE_PATH, SEND_PATH,
};

/// Ask the server to draft the lead email.
pub async fn prepare_email(draft: &LeadDraft) -> Result<PreparedEmail, ApiError> {
    let response = post_form(PREPARE_PATH, &draft.prepare_fields(), Vec::new()).await?;
    response.envelope()
}

/// Send the (possibly edited) email to the store manager.
pub async fn send_email(request: &SendEmailRequest) -> Result<SendOutcome, ApiError> {
    let response = post_form(SEND_PATH, &request.fields(), Vec::new()).await?;
    let result: SendResult = response.envelope()?;
    Ok(result.into())
}
