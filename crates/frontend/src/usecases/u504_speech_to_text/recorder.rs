//! Microphone capture for server-side transcription.

use crate::shared::constants::RECORDER_SLICE_MS;
use contracts::usecases::u504_speech_to_text::AUDIO_MIME;
use js_sys::Array;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, BlobEvent, BlobPropertyBag, MediaRecorder, MediaRecorderOptions, MediaStream,
    MediaStreamConstraints, MediaStreamTrack, RecordingState,
};

/// Ask for an audio stream. Fails when the user denies the permission.
pub async fn request_microphone() -> Result<MediaStream, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let devices = window.navigator().media_devices()?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::TRUE);
    let stream = JsFuture::from(devices.get_user_media_with_constraints(&constraints)?).await?;
    stream.dyn_into::<MediaStream>()
}

/// Turn the microphone off.
pub fn release(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

fn join_chunks(chunks: &[Blob]) -> Result<Blob, JsValue> {
    let parts = Array::new();
    for chunk in chunks {
        parts.push(chunk);
    }
    let options = BlobPropertyBag::new();
    options.set_type(AUDIO_MIME);
    Blob::new_with_blob_sequence_and_options(&parts, &options)
}

/// A running `MediaRecorder` collecting time-sliced chunks.
pub struct Recording {
    recorder: MediaRecorder,
}

impl Recording {
    /// Start recording. `on_stop` gets the whole clip, or `None` when nothing
    /// was captured.
    pub fn start(
        stream: MediaStream,
        on_stop: impl FnOnce(Option<Blob>) + 'static,
    ) -> Result<Self, JsValue> {
        let options = MediaRecorderOptions::new();
        options.set_mime_type(AUDIO_MIME);
        let recorder =
            match MediaRecorder::new_with_media_stream_and_media_recorder_options(&stream, &options) {
                Ok(recorder) => recorder,
                Err(e) => {
                    release(&stream);
                    return Err(e);
                }
            };

        let chunks: Rc<RefCell<Vec<Blob>>> = Rc::default();

        let on_data = {
            let chunks = chunks.clone();
            Closure::wrap(Box::new(move |event: BlobEvent| {
                if let Some(blob) = event.data() {
                    if blob.size() > 0.0 {
                        chunks.borrow_mut().push(blob);
                    }
                }
            }) as Box<dyn FnMut(_)>)
        };
        recorder.set_ondataavailable(Some(on_data.as_ref().unchecked_ref()));
        on_data.forget();

        let mut on_stop = Some(on_stop);
        let on_stopped = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            release(&stream);
            let parts: Vec<Blob> = chunks.borrow_mut().drain(..).collect();
            let clip = if parts.is_empty() {
                None
            } else {
                join_chunks(&parts)
                    .map_err(|e| log::warn!("could not assemble recording: {:?}", e))
                    .ok()
            };
            if let Some(callback) = on_stop.take() {
                callback(clip);
            }
        }) as Box<dyn FnMut(_)>);
        recorder.set_onstop(Some(on_stopped.as_ref().unchecked_ref()));
        on_stopped.forget();

        recorder.start_with_time_slice(RECORDER_SLICE_MS)?;
        Ok(Self { recorder })
    }

    pub fn stop(&self) {
        if self.recorder.state() != RecordingState::Inactive {
            if let Err(e) = self.recorder.stop() {
                log::warn!("recorder stop: {:?}", e);
            }
        }
    }
}
