//! Voice input state machine.
//!
//! `Idle -> Listening -> Idle` with the on-device recognizer, or
//! `Idle -> Recording -> Transcribing -> Idle` with the recorder and the
//! server-side transcription.

use crate::shared::turn::{TurnCounter, TurnToken};

pub const TOPIC_REQUIRED: &str = "Please confirm a topic first.";
pub const PERMISSION_DENIED: &str = "Microphone permission denied.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VoiceState {
    #[default]
    Idle,
    Listening,
    Recording,
    Transcribing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceEvent {
    RecognizerStarted,
    RecorderStarted,
    /// Recording stopped with audio to upload.
    RecorderStopped,
    /// Session ended, with or without a result.
    Finished,
    Failed,
}

/// What a mic button press should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MicAction {
    RequireTopic,
    Start,
    Stop,
    /// Upload in flight; nothing to stop.
    Ignore,
}

impl VoiceState {
    pub fn is_active(self) -> bool {
        self != VoiceState::Idle
    }

    pub fn press(self, topic_selected: bool) -> MicAction {
        if !topic_selected {
            return MicAction::RequireTopic;
        }
        match self {
            VoiceState::Idle => MicAction::Start,
            VoiceState::Listening | VoiceState::Recording => MicAction::Stop,
            VoiceState::Transcribing => MicAction::Ignore,
        }
    }

    /// Next state. Events that do not apply leave the state unchanged.
    pub fn on(self, event: VoiceEvent) -> VoiceState {
        match (self, event) {
            (VoiceState::Idle, VoiceEvent::RecognizerStarted) => VoiceState::Listening,
            (VoiceState::Idle, VoiceEvent::RecorderStarted) => VoiceState::Recording,
            (VoiceState::Recording, VoiceEvent::RecorderStopped) => VoiceState::Transcribing,
            (_, VoiceEvent::Finished) | (_, VoiceEvent::Failed) => VoiceState::Idle,
            (state, _) => state,
        }
    }

    pub fn button_title(self) -> &'static str {
        if self.is_active() {
            "Stop voice input"
        } else {
            "Start voice input"
        }
    }
}

/// Voice state plus the identity of the current recorder start.
///
/// A recorder start waits on the permission prompt; the user may stop and
/// start again meanwhile, so only the latest start may go on to record.
#[derive(Debug, Clone, Default)]
pub struct VoiceSessions {
    state: VoiceState,
    starts: TurnCounter,
}

impl VoiceSessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }

    pub fn apply(&mut self, event: VoiceEvent) {
        self.state = self.state.on(event);
    }

    /// Enter `Recording` while the microphone is requested.
    pub fn begin_recording(&mut self) -> TurnToken {
        self.apply(VoiceEvent::RecorderStarted);
        self.starts.advance()
    }

    /// Stop pressed before the recorder existed.
    pub fn cancel_pending(&mut self) {
        self.starts.advance();
        self.apply(VoiceEvent::Finished);
    }

    /// Whether the start holding `token` may attach its recorder.
    pub fn owns(&self, token: TurnToken) -> bool {
        self.state == VoiceState::Recording && self.starts.is_current(token)
    }
}

pub fn recognizer_error(code: Option<&str>) -> String {
    format!(
        "Speech recognition error: {}",
        code.filter(|c| !c.is_empty()).unwrap_or("unknown")
    )
}

pub fn stt_error(reason: &str) -> String {
    let reason = if reason.is_empty() { "unknown" } else { reason };
    format!("STT error: {reason}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_without_topic() {
        assert_eq!(VoiceState::Idle.press(false), MicAction::RequireTopic);
        assert_eq!(VoiceState::Listening.press(false), MicAction::RequireTopic);
    }

    #[test]
    fn test_press_toggles() {
        assert_eq!(VoiceState::Idle.press(true), MicAction::Start);
        assert_eq!(VoiceState::Listening.press(true), MicAction::Stop);
        assert_eq!(VoiceState::Recording.press(true), MicAction::Stop);
        assert_eq!(VoiceState::Transcribing.press(true), MicAction::Ignore);
    }

    #[test]
    fn test_recorder_path() {
        let s = VoiceState::Idle.on(VoiceEvent::RecorderStarted);
        assert_eq!(s, VoiceState::Recording);
        let s = s.on(VoiceEvent::RecorderStopped);
        assert_eq!(s, VoiceState::Transcribing);
        assert!(s.is_active());
        assert_eq!(s.on(VoiceEvent::Finished), VoiceState::Idle);
    }

    #[test]
    fn test_failure_always_returns_to_idle() {
        for s in [
            VoiceState::Idle,
            VoiceState::Listening,
            VoiceState::Recording,
            VoiceState::Transcribing,
        ] {
            assert_eq!(s.on(VoiceEvent::Failed), VoiceState::Idle);
        }
    }

    #[test]
    fn test_one_session_at_a_time() {
        assert_eq!(
            VoiceState::Listening.on(VoiceEvent::RecorderStarted),
            VoiceState::Listening
        );
    }

    #[test]
    fn test_restart_during_permission_prompt_orphans_first_start() {
        let mut sessions = VoiceSessions::new();
        let first = sessions.begin_recording();
        assert!(sessions.owns(first));

        sessions.cancel_pending();
        assert_eq!(sessions.state(), VoiceState::Idle);
        assert!(!sessions.owns(first));

        let second = sessions.begin_recording();
        assert!(!sessions.owns(first));
        assert!(sessions.owns(second));
    }

    #[test]
    fn test_start_released_after_failure() {
        let mut sessions = VoiceSessions::new();
        let token = sessions.begin_recording();
        sessions.apply(VoiceEvent::Failed);
        assert!(!sessions.owns(token));
    }

    #[test]
    fn test_messages() {
        assert_eq!(recognizer_error(Some("no-speech")), "Speech recognition error: no-speech");
        assert_eq!(recognizer_error(None), "Speech recognition error: unknown");
        assert_eq!(stt_error(""), "STT error: unknown");
        assert_eq!(VoiceState::Recording.button_title(), "Stop voice input");
    }
}
