//! Document storage.
//!
//! The viewer consumes storage through the [`DocumentStore`] contract:
//! upload bytes for an owner, list an owner's files, fetch full text by id,
//! delete by id. Ids are opaque to callers. [`DirStore`] implements the
//! contract with plain files in a directory plus a JSON index sidecar; the
//! store never inspects document content.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, ViewerError};

/// Name of the index sidecar inside a store directory.
const INDEX_FILE: &str = "index.json";

/// Record describing one stored document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    /// Opaque identifier.
    pub id: String,

    /// Owner the upload was attributed to.
    pub owner: String,

    /// Original file name.
    pub name: String,

    /// Size in bytes.
    pub size: u64,

    /// MIME type guessed from the file name extension.
    pub content_type: String,

    /// Upload timestamp.
    pub uploaded_at: DateTime<Utc>,
}

/// Storage contract consumed by the viewer.
pub trait DocumentStore {
    /// Store `bytes` under `name` for `owner`; returns the new record.
    fn upload(&mut self, owner: &str, name: &str, bytes: &[u8]) -> Result<StoredFile>;

    /// All files belonging to `owner`, newest first.
    fn list(&self, owner: &str) -> Result<Vec<StoredFile>>;

    /// Full text of a stored file.
    fn fetch(&self, id: &str) -> Result<String>;

    /// Remove a stored file and its record.
    fn delete(&mut self, id: &str) -> Result<()>;
}

/// Directory-backed document store.
pub struct DirStore {
    root: PathBuf,
    index: Vec<StoredFile>,
}

impl DirStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    /// Fails when the directory cannot be created or the index sidecar
    /// exists but is not valid JSON.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;

        let index_path = root.join(INDEX_FILE);
        let index = if index_path.exists() {
            serde_json::from_str(&fs::read_to_string(&index_path)?)?
        } else {
            Vec::new()
        };

        Ok(Self { root, index })
    }

    fn document_path(&self, id: &str) -> PathBuf {
        self.root.join(id)
    }

    fn save_index(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.index)?;
        fs::write(self.root.join(INDEX_FILE), raw)?;
        Ok(())
    }

    fn record(&self, id: &str) -> Result<&StoredFile> {
        self.index
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| ViewerError::FileNotFound(id.to_string()))
    }
}

/// Guess a MIME type from the file name extension.
fn content_type_for(name: &str) -> &'static str {
    let ext = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    match ext.to_ascii_lowercase().as_str() {
        "xml" | "tei" => "application/xml",
        _ => "text/plain",
    }
}

impl DocumentStore for DirStore {
    fn upload(&mut self, owner: &str, name: &str, bytes: &[u8]) -> Result<StoredFile> {
        let id = Uuid::new_v4().to_string();
        fs::write(self.document_path(&id), bytes)?;

        let file = StoredFile {
            id,
            owner: owner.to_string(),
            name: name.to_string(),
            size: bytes.len() as u64,
            content_type: content_type_for(name).to_string(),
            uploaded_at: Utc::now(),
        };
        self.index.push(file.clone());
        self.save_index()?;

        tracing::info!(id = %file.id, name = %file.name, "stored document");
        Ok(file)
    }

    fn list(&self, owner: &str) -> Result<Vec<StoredFile>> {
        let mut files: Vec<StoredFile> = self
            .index
            .iter()
            .filter(|f| f.owner == owner)
            .cloned()
            .collect();
        files.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(files)
    }

    fn fetch(&self, id: &str) -> Result<String> {
        let record = self.record(id)?;
        Ok(fs::read_to_string(self.document_path(&record.id))?)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let position = self
            .index
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| ViewerError::FileNotFound(id.to_string()))?;
        let record = self.index.remove(position);
        fs::remove_file(self.document_path(&record.id))?;
        self.save_index()?;

        tracing::info!(id = %record.id, "deleted document");
        Ok(())
    }
}
