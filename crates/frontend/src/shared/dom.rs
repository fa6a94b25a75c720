//! Small wrappers around browser globals.

use super::constants::SCROLL_THRESHOLD_PX;

/// Blocking browser alert. Silently does nothing without a window.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Whether a scroll container is close enough to its bottom to follow new
/// content.
pub fn is_near_bottom(scroll_height: i32, scroll_top: i32, client_height: i32) -> bool {
    scroll_height - scroll_top - client_height < SCROLL_THRESHOLD_PX
}

/// Local wall-clock time, e.g. `14:05:09`.
pub fn time_label() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_bottom() {
        assert!(is_near_bottom(1000, 500, 450));
        assert!(is_near_bottom(1000, 421, 500));
        assert!(!is_near_bottom(1000, 420, 500));
        assert!(!is_near_bottom(2000, 0, 600));
    }
}
