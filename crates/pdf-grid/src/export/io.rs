//! Document I/O for export

use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// Serialize a document to PDF bytes
pub fn document_to_bytes(mut doc: Document) -> Result<Vec<u8>> {
    let mut writer = Vec::new();
    doc.save_to(&mut writer)?;
    Ok(writer)
}

/// Save the document.
///
/// The whole file is serialized in memory and written next to the target
/// before being renamed into place, so a failed save never leaves a
/// truncated PDF at `path`.
pub async fn save_pdf(doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || document_to_bytes(doc)).await??;

    let mut partial = path.clone().into_os_string();
    partial.push(".part");

    if let Err(e) = tokio::fs::write(&partial, &bytes).await {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e.into());
    }
    if let Err(e) = tokio::fs::rename(&partial, &path).await {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e.into());
    }
    Ok(())
}
