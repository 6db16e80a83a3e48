//! System clipboard.
use super::{args, Termux, TermuxError};

impl Termux {
    /// Text currently in the clipboard.
    pub fn clipboard_get(&self) -> Result<String, TermuxError> {
        self.invoke_text("termux-clipboard-get", args![])
    }

    /// Replace the clipboard content. Empty text is refused.
    pub fn clipboard_set(&self, text: &str) -> Result<(), TermuxError> {
        if text.is_empty() {
            return Err(TermuxError::usage(
                "termux-clipboard-set",
                "clipboard text is empty",
            ));
        }
        self.invoke("termux-clipboard-set", args![text]).map(|_| ())
    }
}
