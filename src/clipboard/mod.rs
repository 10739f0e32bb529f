//! Clipboard support for copying page URLs out of the timeline and palette

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Maximum URL length accepted for copying. Site URLs are short; anything
/// beyond this means a corrupted index entry.
const MAX_URL_LENGTH: usize = 2048;

/// Trait for clipboard operations (allows mocking in tests)
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Real clipboard implementation using arboard
struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

/// Validates a URL without accessing the system clipboard
fn validate_url_text(url: &str) -> Result<()> {
    if url.is_empty() {
        anyhow::bail!("Cannot copy an empty URL to clipboard");
    }

    if url.len() > MAX_URL_LENGTH {
        anyhow::bail!(
            "URL too long for clipboard ({} bytes, max {})",
            url.len(),
            MAX_URL_LENGTH
        );
    }

    Ok(())
}

/// Internal function for clipboard operations with dependency injection (test use)
#[cfg(test)]
fn copy_with_provider(url: &str, provider: &mut dyn ClipboardProvider) -> Result<()> {
    validate_url_text(url)?;
    provider.set_text(url)?;
    Ok(())
}

/// Copy a page URL to the system clipboard.
///
/// # Errors
/// Returns error if:
/// - URL is empty or longer than 2048 bytes
/// - Clipboard is locked by another process
/// - Clipboard access is denied (permissions)
/// - System clipboard is unavailable (headless environment)
///
/// # Platform Support
/// - macOS: pasteboard API
/// - Linux: X11 (xclip/xsel) or Wayland (wl-clipboard)
pub fn copy_url(url: &str) -> Result<()> {
    // Validate first, before initializing clipboard (for better error messages in CI)
    validate_url_text(url)?;

    let mut clipboard = SystemClipboard::new()?;
    clipboard.set_text(url)?;
    Ok(())
}
