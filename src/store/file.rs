//! Single-document JSON store for all user/account/character state.
//!
//! Every mutation elsewhere in the crate is a full `load` -> mutate -> `save`
//! cycle over this store. Saves go through a temp file in the target
//! directory followed by an atomic rename, so a crash mid-write leaves either
//! the old document or the new one, never a torn file.
//!
//! Known hazard: there is no locking. Two overlapping load-mutate-save
//! cycles race and the later save wins over the whole document.

use crate::errors::{Error, Result};
use crate::store::document::Document;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Handle to the user-data file. Cheap to clone; holds only the path.
#[derive(Debug, Clone)]
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the store, logging how many users the current document holds.
    /// A missing file is a valid initial state, not an error.
    #[instrument(skip(path))]
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self::new(path);
        let doc = store.load().await?;
        info!(
            "User data store at {:?} holds {} user record(s)",
            store.path,
            doc.len()
        );
        Ok(store)
    }

    /// Reads and parses the whole document. Returns an empty document when
    /// the file does not exist yet.
    pub async fn load(&self) -> Result<Document> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(Into::into),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("{:?} not found, starting from an empty document", self.path);
                Ok(Document::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Serializes the full document (pretty-printed, UTF-8) and atomically
    /// replaces the prior file content.
    ///
    /// # Errors
    /// Propagates I/O failures; callers must report the triggering operation
    /// as failed rather than silently dropping the mutation.
    pub async fn save(&self, doc: &Document) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(doc)?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomic(&path, &bytes))
            .await
            .map_err(|e| Error::Config {
                message: format!("save task failed: {e}"),
            })?
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = match dir {
        Some(dir) => tempfile::NamedTempFile::new_in(dir),
        None => tempfile::NamedTempFile::new_in("."),
    }?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| {
        warn!("Failed to persist user data to {:?}: {}", path, e.error);
        Error::Io(e.error)
    })?;
    Ok(())
}
