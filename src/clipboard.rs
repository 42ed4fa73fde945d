//! Clipboard integration.

use crate::error::Result;
use crate::plot::RenderedArtifact;
use arboard::Clipboard;

/// Copy text to clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Copy a rendered plot's summary to clipboard.
pub fn copy_artifact_summary(artifact: &RenderedArtifact) -> Result<()> {
    copy_to_clipboard(&artifact.summary())
}
