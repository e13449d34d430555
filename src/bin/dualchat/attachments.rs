use std::fs;
use std::path::Path;

use anyhow::Context;
use dualchat::chat::Attachment;

/// Reads a file and base64-encodes it, guessing the MIME type from the extension.
pub fn load_attachment(path: &Path) -> anyhow::Result<Attachment> {
    let bytes =
        fs::read(path).with_context(|| format!("cannot read attachment {}", path.display()))?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    log::debug!(
        "attaching {} ({}, {} bytes)",
        path.display(),
        mime.essence_str(),
        bytes.len()
    );
    Ok(Attachment::from_bytes(&bytes, mime.essence_str()))
}
