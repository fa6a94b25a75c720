pub mod request;
pub mod response;
pub mod transcript;
pub mod voice;

pub use request::{AUDIO_FIELD, AUDIO_FILENAME, AUDIO_MIME, STT_PATH};
pub use response::SttResponse;
pub use transcript::SpeechTranscript;
pub use voice::{
    recognizer_error, stt_error, MicAction, VoiceEvent, VoiceSessions, VoiceState,
    PERMISSION_DENIED, TOPIC_REQUIRED,
};
