//! Clipboard helper for copying region markup
//!
//! Uses `arboard` crate for cross-platform support (Windows, macOS, Linux).
//! The clipboard is opened per copy rather than held for the session.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Put an HTML fragment on the system clipboard as plain text
///
/// Fails when there is no display server (headless Linux) or access is denied.
pub fn copy_markup(html: &str) -> Result<()> {
    Clipboard::new()
        .context("Failed to access clipboard")?
        .set_text(html)
        .context("Failed to set clipboard text")
}
