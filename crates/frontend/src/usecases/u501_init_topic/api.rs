use crate::shared::http::{post_form, FormPart};
use contracts::domain::a002_topic_session::TopicSlot;
use contracts::shared::api::ApiError;
use contracts::usecases::u501_init_topic::{
    CompareInitRequest, InitTopicData, InitTopicRequest, RagState, RagToggleRequest,
    COMPARE_INIT_PATH, INIT_TOPIC_PATH, RAG_PATH,
};
use web_sys::File;

fn file_part(slot: TopicSlot, file: Option<File>) -> Option<FormPart> {
    file.map(|file| FormPart::File {
        field: slot.file_field(),
        file,
    })
}

/// Инициализировать тему по PDF, URL или названию товара
pub async fn init_topic(
    request: &InitTopicRequest,
    pdf: Option<File>,
) -> Result<InitTopicData, ApiError> {
    let parts = file_part(TopicSlot::Primary, pdf).into_iter().collect();
    let response = post_form(INIT_TOPIC_PATH, &request.fields(), parts).await?;
    response.checked_envelope()
}

/// Pair the primary topic (side A) with a second product (side B).
pub async fn init_compare(
    request: &CompareInitRequest,
    pdf_a: Option<File>,
    pdf_b: Option<File>,
) -> Result<(), ApiError> {
    let parts = file_part(TopicSlot::CompareA, pdf_a)
        .into_iter()
        .chain(file_part(TopicSlot::CompareB, pdf_b))
        .collect();
    let response = post_form(COMPARE_INIT_PATH, &request.fields(), parts).await?;
    response.envelope::<serde_json::Value>().map(|_| ())
}

pub async fn set_rag(enabled: bool) -> Result<RagState, ApiError> {
    let request = RagToggleRequest { enabled };
    let response = post_form(RAG_PATH, &request.fields(), Vec::new()).await?;
    response.checked_envelope()
}
