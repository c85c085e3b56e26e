//! Blocking browser dialogs used for failures and destructive actions.

pub fn alert(message: &str) {
    log::debug!("Alerting user: {}", message);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// `true` only when the user explicitly accepts.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
