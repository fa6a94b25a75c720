use crate::shared::http::{post_form, FormPart};
use contracts::shared::api::ApiError;
use contracts::shared::form::FormFields;
use contracts::usecases::u504_speech_to_text::{SttResponse, AUDIO_FIELD, AUDIO_FILENAME, STT_PATH};
use web_sys::Blob;

/// Upload a recording for server-side transcription.
pub async fn transcribe(audio: Blob) -> Result<SttResponse, ApiError> {
    let parts = vec![FormPart::Blob {
        field: AUDIO_FIELD,
        blob: audio,
        filename: AUDIO_FILENAME,
    }];
    let response = post_form(STT_PATH, &FormFields::new(), parts).await?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}
