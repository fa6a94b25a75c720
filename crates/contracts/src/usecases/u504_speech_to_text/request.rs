pub const STT_PATH: &str = "/api/stt";

/// Multipart field, file name and MIME type of the uploaded recording.
pub const AUDIO_FIELD: &str = "audio";
pub const AUDIO_FILENAME: &str = "speech.webm";
pub const AUDIO_MIME: &str = "audio/webm";
