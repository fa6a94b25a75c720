use super::api;
use super::recognizer::Recognizer;
use super::recorder::{release, request_microphone, Recording};
use crate::layout::global_context::{use_app_context, AppGlobalContext};
use crate::shared::icons::icon;
use crate::usecases::u502_ask::submit_question;
use contracts::shared::turn::TurnToken;
use contracts::usecases::u504_speech_to_text::{
    recognizer_error, stt_error, MicAction, SpeechTranscript, SttResponse, VoiceEvent,
    VoiceSessions, VoiceState, PERMISSION_DENIED, TOPIC_REQUIRED,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Blob;

/// At most one voice session at a time; `sessions` is the source of truth.
#[derive(Clone, Copy)]
struct VoiceSession {
    ctx: AppGlobalContext,
    sessions: RwSignal<VoiceSessions>,
    recognizer: StoredValue<Option<Recognizer>, LocalStorage>,
    recording: StoredValue<Option<Recording>, LocalStorage>,
}

impl VoiceSession {
    fn new(ctx: AppGlobalContext) -> Self {
        Self {
            ctx,
            sessions: RwSignal::new(VoiceSessions::new()),
            recognizer: StoredValue::new_local(None),
            recording: StoredValue::new_local(None),
        }
    }

    fn current(&self) -> VoiceState {
        self.sessions.with_untracked(|s| s.state())
    }

    fn transition(&self, event: VoiceEvent) {
        self.sessions.update(|s| s.apply(event));
    }

    fn press(&self) {
        let topic_selected = self.ctx.session.with_untracked(|s| s.topic_selected);
        match self.current().press(topic_selected) {
            MicAction::RequireTopic => self.ctx.push_assistant(TOPIC_REQUIRED, Vec::new()),
            MicAction::Start => {
                if !self.start_listening() {
                    log::info!("no speech recognition, recording for upload");
                    if let Some(token) = self.sessions.try_update(|s| s.begin_recording()) {
                        spawn_local(self.start_recording(token));
                    }
                }
            }
            MicAction::Stop => self.stop(),
            MicAction::Ignore => {}
        }
    }

    /// `false` when the browser has no usable recognizer.
    fn start_listening(&self) -> bool {
        let Some(recognizer) = Recognizer::create() else {
            return false;
        };
        let this = *self;

        let mut transcript = SpeechTranscript::new();
        recognizer.on_result(move |results| {
            let text = transcript.apply(results.iter().map(|(fin, t)| (*fin, t.as_str())));
            this.ctx.draft.set(text);
        });

        recognizer.on_error(move |code| {
            log::warn!("speech recognition error: {:?}", code);
            // go idle first so the following `end` does not submit
            if this.current().is_active() {
                this.transition(VoiceEvent::Failed);
                this.ctx
                    .push_assistant(recognizer_error(code.as_deref()), Vec::new());
            }
            this.recognizer.with_value(|r| {
                if let Some(r) = r {
                    r.stop();
                }
            });
        });

        recognizer.on_end(move || {
            this.recognizer.set_value(None);
            if this.current() != VoiceState::Listening {
                return;
            }
            this.transition(VoiceEvent::Finished);
            let text = this.ctx.draft.get_untracked();
            if !text.trim().is_empty() {
                submit_question(this.ctx, &text);
            }
        });

        match recognizer.start() {
            Ok(()) => {
                self.recognizer.set_value(Some(recognizer));
                self.transition(VoiceEvent::RecognizerStarted);
                true
            }
            Err(e) => {
                log::warn!("speech recognition did not start: {:?}", e);
                false
            }
        }
    }

    async fn start_recording(self, token: TurnToken) {
        let stream = match request_microphone().await {
            Ok(stream) => stream,
            Err(e) => {
                log::warn!("microphone unavailable: {:?}", e);
                self.transition(VoiceEvent::Failed);
                self.ctx.push_assistant(PERMISSION_DENIED, Vec::new());
                return;
            }
        };

        // stopped, or stopped and restarted, while the prompt was open
        if !self.sessions.with_untracked(|s| s.owns(token)) {
            release(&stream);
            return;
        }

        let this = self;
        let on_stop = move |clip: Option<Blob>| {
            this.recording.set_value(None);
            match clip {
                Some(audio) => {
                    this.transition(VoiceEvent::RecorderStopped);
                    spawn_local(this.transcribe(audio));
                }
                None => this.transition(VoiceEvent::Finished),
            }
        };

        match Recording::start(stream, on_stop) {
            Ok(recording) => self.recording.set_value(Some(recording)),
            Err(e) => {
                log::error!("recorder failed to start: {:?}", e);
                self.transition(VoiceEvent::Failed);
                self.ctx
                    .push_assistant(stt_error(&format!("{e:?}")), Vec::new());
            }
        }
    }

    async fn transcribe(self, audio: Blob) {
        let result = api::transcribe(audio).await;
        self.transition(VoiceEvent::Finished);

        match result.map(|response| response.text()) {
            Ok(Some(text)) => {
                self.ctx.draft.set(text.clone());
                submit_question(self.ctx, &text);
            }
            Ok(None) => self
                .ctx
                .push_assistant(SttResponse::NOT_TRANSCRIBED, Vec::new()),
            Err(e) => {
                log::error!("transcription failed: {}", e);
                self.ctx.push_assistant(stt_error(&e.to_string()), Vec::new());
            }
        }
    }

    fn stop(&self) {
        match self.current() {
            // the recognizer's `end` submits what was heard
            VoiceState::Listening => self.recognizer.with_value(|r| {
                if let Some(r) = r {
                    r.stop();
                }
            }),
            VoiceState::Recording => {
                let stopped = self.recording.with_value(|r| match r {
                    Some(r) => {
                        r.stop();
                        true
                    }
                    None => false,
                });
                if !stopped {
                    self.sessions.update(|s| s.cancel_pending());
                }
            }
            VoiceState::Idle | VoiceState::Transcribing => {}
        }
    }
}

/// Microphone toggle next to the composer.
#[component]
#[allow(non_snake_case)]
pub fn VoiceButton() -> impl IntoView {
    let ctx = use_app_context();
    let voice = VoiceSession::new(ctx);
    let state = Signal::derive(move || voice.sessions.with(|s| s.state()));

    view! {
        <button
            class="mic-btn"
            class:active=move || state.get().is_active()
            aria-pressed=move || state.get().is_active().to_string()
            title=move || state.get().button_title()
            on:click=move |_| voice.press()
        >
            {move || if state.get().is_active() { icon("stop") } else { icon("mic") }}
        </button>
    }
}
