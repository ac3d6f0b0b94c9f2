//! Durable word table persisted as a JSON document.
//!
//! The document has the shape
//!
//! ```json
//! { "version": 1, "next_id": 3, "words": [
//!     { "id": 1, "label": "I", "built_in": true },
//!     { "id": 2, "label": "want", "built_in": true }
//! ] }
//! ```
//!
//! `next_id` is stored alongside the rows so ids are never reused, even
//! after rows are removed by hand.  Every operation re-reads the file, so
//! rows written by another process are visible.  Writes go to a uniquely
//! named temp file in the same directory, which is then renamed over the
//! table.
//!
//! Every handle opened on the same file in one process shares one lock, so
//! their read-modify-write cycles never interleave.  Separate processes are
//! not coordinated: when two of them insert at the same moment, the later
//! write wins and the earlier batch is lost.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tokio::sync::Mutex;

use super::table::{append_entries, ids_exhausted, NewEntry, VocabularyEntry, WordTable};
use super::VocabularyError;

/// Highest document version this build understands.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct WordsDocument {
    version: u32,
    next_id: u64,
    #[serde(default)]
    words: Vec<VocabularyEntry>,
}

impl WordsDocument {
    fn empty() -> Self {
        Self {
            version: SCHEMA_VERSION,
            next_id: 1,
            words: Vec::new(),
        }
    }

    /// Keep `next_id` ahead of every stored id (hand-edited files).
    fn repair_next_id(&mut self) -> Result<(), VocabularyError> {
        if let Some(max) = self.words.iter().map(|w| w.id).max() {
            if self.next_id <= max {
                log::warn!(
                    "word table next_id {} is behind max id {max}; advancing",
                    self.next_id
                );
                self.next_id = max.checked_add(1).ok_or_else(ids_exhausted)?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// JsonFileTable
// ---------------------------------------------------------------------------

/// [`WordTable`] backed by a JSON file on disk.
#[derive(Debug)]
pub struct JsonFileTable {
    path: PathBuf,
    // Shared with every other handle on the same file in this process.
    lock: Arc<Mutex<()>>,
}

impl JsonFileTable {
    /// Open the table at `path`, upgrading it to [`SCHEMA_VERSION`].
    ///
    /// A missing file is treated as version 0 and upgraded by creating the
    /// empty table (and its parent directories).  A newer version or an
    /// unreadable document fails the open.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, VocabularyError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| VocabularyError::unavailable("cannot create data directory", e))?;
        }
        let lock = lock_for(&path).await;
        let guard = lock.lock().await;
        let existing = read_document(&path).await?;

        match existing {
            None => {
                log::info!("creating word table at {}", path.display());
                write_document(&path, &WordsDocument::empty()).await?;
            }
            Some(doc) if doc.version > SCHEMA_VERSION => {
                return Err(VocabularyError::StorageUnavailable(format!(
                    "{} has schema version {}, newer than supported version {SCHEMA_VERSION}",
                    path.display(),
                    doc.version
                )));
            }
            Some(mut doc) => {
                let needs_write = doc.version < SCHEMA_VERSION;
                doc.version = SCHEMA_VERSION;
                doc.repair_next_id()?;
                if needs_write {
                    log::info!("upgrading word table at {} to v{SCHEMA_VERSION}", path.display());
                    write_document(&path, &doc).await?;
                }
                log::debug!(
                    "opened word table at {} ({} entries)",
                    path.display(),
                    doc.words.len()
                );
            }
        }

        drop(guard);
        Ok(Self { path, lock })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<WordsDocument, VocabularyError> {
        let mut doc = read_document(&self.path).await?.ok_or_else(|| {
            VocabularyError::StorageUnavailable(format!(
                "word table {} disappeared",
                self.path.display()
            ))
        })?;
        doc.repair_next_id()?;
        Ok(doc)
    }
}

#[async_trait]
impl WordTable for JsonFileTable {
    async fn count(&self) -> Result<usize, VocabularyError> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.words.len())
    }

    async fn get_all(&self) -> Result<Vec<VocabularyEntry>, VocabularyError> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.words)
    }

    async fn insert(
        &self,
        entries: Vec<NewEntry>,
    ) -> Result<Vec<VocabularyEntry>, VocabularyError> {
        let _guard = self.lock.lock().await;
        let mut doc = self.load().await?;
        let WordsDocument { next_id, words, .. } = &mut doc;
        let inserted = append_entries(words, next_id, entries)?;
        write_document(&self.path, &doc).await?;
        Ok(inserted)
    }
}

// ---------------------------------------------------------------------------
// Disk I/O
// ---------------------------------------------------------------------------

async fn read_document(path: &Path) -> Result<Option<WordsDocument>, VocabularyError> {
    let data = match tokio::fs::read_to_string(path).await {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(VocabularyError::unavailable("cannot read word table", e)),
    };
    serde_json::from_str(&data)
        .map(Some)
        .map_err(|e| VocabularyError::unavailable("corrupt word table", e))
}

async fn write_document(path: &Path, doc: &WordsDocument) -> Result<(), VocabularyError> {
    let data = serde_json::to_vec_pretty(doc)
        .map_err(|e| VocabularyError::unavailable("cannot encode word table", e))?;
    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || replace_file(&path, &data))
        .await
        .map_err(|e| VocabularyError::unavailable("word table writer failed", e))?
}

fn replace_file(path: &Path, data: &[u8]) -> Result<(), VocabularyError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .map_err(|e| VocabularyError::unavailable("cannot create data directory", e))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .map_err(|e| VocabularyError::unavailable("cannot create temp file", e))?;
    tmp.write_all(data)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| VocabularyError::unavailable("cannot write word table", e))?;
    tmp.persist(path)
        .map_err(|e| VocabularyError::unavailable("cannot replace word table", e.error))?;
    Ok(())
}

/// The process-wide lock for the table at `path`.
async fn lock_for(path: &Path) -> Arc<Mutex<()>> {
    static LOCKS: OnceLock<std::sync::Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> = OnceLock::new();

    // Keyed on the resolved directory; the file itself may not exist yet.
    let key = match (path.parent(), path.file_name()) {
        (Some(dir), Some(name)) if !dir.as_os_str().is_empty() => {
            match tokio::fs::canonicalize(dir).await {
                Ok(dir) => dir.join(name),
                Err(_) => path.to_path_buf(),
            }
        }
        _ => path.to_path_buf(),
    };
    let mut locks = LOCKS
        .get_or_init(Default::default)
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    Arc::clone(locks.entry(key).or_default())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
