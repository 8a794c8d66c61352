//! Store Module
//!
//! One process-wide [`Document`] holding every user, channel, DM, message
//! and notification, behind an async `RwLock`.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs      - DataStore handle
//! ├── model.rs    - Document records and shared lookups
//! └── persist.rs  - JSON snapshot load/save
//! ```
//!
//! # Consistency
//!
//! [`DataStore::mutate`] holds the write lock for the whole closure and the
//! snapshot write that follows it. Requests and timer deliveries are
//! therefore serialized, and every operation validates before it mutates, so
//! an `Err` from the closure leaves the document untouched and skips the
//! save. A persisted store only publishes a change once its snapshot has
//! been written.

/// Document records and lookups
pub mod model;

/// Snapshot persistence
pub mod persist;

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::backend::error::BackendError;

pub use model::{Document, Target};

/// Shared handle to the Dreams document
///
/// Cloning is cheap; all clones see the same document.
#[derive(Clone)]
pub struct DataStore {
    document: Arc<RwLock<Document>>,
    path: Option<Arc<PathBuf>>,
}

impl DataStore {
    /// A store that is never written to disk
    pub fn in_memory() -> Self {
        Self {
            document: Arc::new(RwLock::new(Document::default())),
            path: None,
        }
    }

    /// Open the store at `path`, starting empty if the file does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, BackendError> {
        let path = path.into();
        let document = persist::load(&path).await?;
        Ok(Self {
            document: Arc::new(RwLock::new(document)),
            path: Some(Arc::new(path)),
        })
    }

    /// Run a read-only closure against the document
    pub async fn read<R>(&self, f: impl FnOnce(&Document) -> R) -> R {
        let document = self.document.read().await;
        f(&document)
    }

    /// Run a mutating closure and persist the result
    ///
    /// The snapshot is only written when the closure returns `Ok`. A
    /// persisted store applies the closure to a copy and swaps it in after
    /// the snapshot is on disk, so a failed save leaves memory unchanged.
    pub async fn mutate<R>(
        &self,
        f: impl FnOnce(&mut Document) -> Result<R, BackendError>,
    ) -> Result<R, BackendError> {
        let mut document = self.document.write().await;
        let Some(path) = &self.path else {
            return f(&mut document);
        };

        let mut next = document.clone();
        let result = f(&mut next)?;
        persist::save(path, &next).await.map_err(|e| {
            tracing::error!("Failed to persist store to {}: {}", path.display(), e);
            e
        })?;
        *document = next;
        Ok(result)
    }

    /// Replace the document with an empty one
    pub async fn reset(&self) -> Result<(), BackendError> {
        self.mutate(|document| {
            *document = Document::default();
            Ok(())
        })
        .await
    }
}
