/// Blocking confirmation/notification capability. The browser supplies the
/// real dialogs; tests supply scripted ones.
pub trait Dialogs {
    /// Yes/no prompt. `false` means the user declined.
    fn confirm(&self, message: &str) -> bool;
    /// One-shot blocking notification.
    fn alert(&self, message: &str);
}

/// `window.confirm` / `window.alert`.
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
