/// Auto-scroll only when the list is at most this far from the bottom.
pub const SCROLL_THRESHOLD_PX: i32 = 80;

/// `MediaRecorder` time slice.
pub const RECORDER_SLICE_MS: i32 = 250;

/// Toast lifetime and the delay before the lead modal closes itself.
pub const TOAST_MS: u32 = 3000;

pub const RECOGNIZER_LANG: &str = "en-US";
