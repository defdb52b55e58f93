//! Desktop services behind traits, so actions can run headless in tests.

use crate::error::{ToolError, ToolResult};

/// Somewhere to put text for the user to paste.
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard contents with `text`.
    fn set_text(&self, text: &str) -> ToolResult<()>;
}

/// Something that can show a URL to the user.
pub trait Browser: Send + Sync {
    /// Open `url` in the user's browser.
    fn open(&self, url: &str) -> ToolResult<()>;
}

/// The operating system clipboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&self, text: &str) -> ToolResult<()> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ToolError::unavailable(format!("clipboard: {e}")))?;
        clipboard
            .set_text(text)
            .map_err(|e| ToolError::unavailable(format!("clipboard: {e}")))
    }
}

/// The default system browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> ToolResult<()> {
        open::that(url).map_err(|e| ToolError::unavailable(format!("browser: {e}")))
    }
}
