//! Multipart POST transport shared by every endpoint.

use super::api_utils::api_url;
use contracts::shared::api::{ApiError, ApiResponse};
use contracts::shared::form::FormFields;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{Blob, File, FormData};

/// Binary part of a form body.
pub enum FormPart {
    /// Posted with the file's own name.
    File { field: &'static str, file: File },
    Blob {
        field: &'static str,
        blob: Blob,
        filename: &'static str,
    },
}

fn js_error(e: JsValue) -> ApiError {
    ApiError::Network(format!("{e:?}"))
}

fn build_form(fields: &FormFields, parts: Vec<FormPart>) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(js_error)?;
    for (name, value) in fields.iter() {
        form.append_with_str(name, value).map_err(js_error)?;
    }
    for part in parts {
        match part {
            FormPart::File { field, file } => form.append_with_blob(field, &file),
            FormPart::Blob {
                field,
                blob,
                filename,
            } => form.append_with_blob_and_filename(field, &blob, filename),
        }
        .map_err(js_error)?;
    }
    Ok(form)
}

/// POST `fields` and `parts` as `multipart/form-data` to `path`.
///
/// Any completed exchange is `Ok`, whatever its status; the caller decides
/// how to read the envelope.
pub async fn post_form(
    path: &str,
    fields: &FormFields,
    parts: Vec<FormPart>,
) -> Result<ApiResponse, ApiError> {
    let form = build_form(fields, parts)?;
    let url = api_url(path);

    let response = Request::post(&url)
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| {
            log::warn!("POST {} failed: {}", path, e);
            ApiError::Network(e.to_string())
        })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !(200..300).contains(&status) {
        log::warn!("POST {} answered HTTP {}", path, status);
    }
    Ok(ApiResponse::new(status, body))
}
