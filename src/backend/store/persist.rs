//! Snapshot Persistence
//!
//! The document is stored as one pretty-printed JSON file. Saves write a
//! sibling temp file and rename it over the target, so a crash mid-write
//! leaves the previous snapshot intact.

use std::path::{Path, PathBuf};

use crate::backend::error::BackendError;
use crate::backend::store::model::Document;

/// Load a snapshot, returning an empty document when the file does not exist
pub async fn load(path: &Path) -> Result<Document, BackendError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => {
            let document: Document = serde_json::from_slice(&bytes)?;
            tracing::info!(
                "Loaded store from {} ({} users, {} channels, {} dms, {} messages)",
                path.display(),
                document.users.len(),
                document.channels.len(),
                document.dms.len(),
                document.messages.len()
            );
            Ok(document)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("No store at {}, starting empty", path.display());
            Ok(Document::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Write a snapshot atomically
pub async fn save(path: &Path, document: &Document) -> Result<(), BackendError> {
    let bytes = serde_json::to_vec_pretty(document)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let temp = temp_path(path);
    tokio::fs::write(&temp, bytes).await?;
    tokio::fs::rename(&temp, path).await?;
    tracing::trace!("Store snapshot written to {}", path.display());
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
