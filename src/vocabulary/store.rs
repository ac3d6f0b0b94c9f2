//! Seeding and retrieval on top of a [`WordTable`].
//!
//! The store is built once per process.  If its table failed to open the
//! store is still constructed, but every operation reports
//! [`VocabularyError::StorageUnavailable`] so callers can show a degraded
//! board instead of silently offering an empty vocabulary.

use std::path::PathBuf;
use std::sync::Arc;

use super::file::JsonFileTable;
use super::table::{MemoryTable, NewEntry, VocabularyEntry, WordTable};
use super::VocabularyError;

/// Durable vocabulary with first-run seeding.
///
/// Cheap to clone; clones share the same table.
#[derive(Clone)]
pub struct VocabularyStore {
    table: Result<Arc<dyn WordTable>, String>,
}

impl std::fmt::Debug for VocabularyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VocabularyStore")
            .field("available", &self.is_available())
            .finish_non_exhaustive()
    }
}

impl VocabularyStore {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Wrap an already opened table.
    pub fn new(table: impl WordTable + 'static) -> Self {
        let table: Arc<dyn WordTable> = Arc::new(table);
        Self::from_shared(table)
    }

    /// Wrap a table that is shared with other owners.
    pub fn from_shared(table: Arc<dyn WordTable>) -> Self {
        Self { table: Ok(table) }
    }

    /// Ephemeral store backed by a [`MemoryTable`].
    pub fn in_memory() -> Self {
        Self::new(MemoryTable::new())
    }

    /// A store whose storage failed to open.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            table: Err(reason.into()),
        }
    }

    /// Open the durable JSON table at `path`.
    ///
    /// Never fails: an open error is logged and yields an unavailable store.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match JsonFileTable::open(&path).await {
            Ok(table) => Self::new(table),
            Err(e) => {
                log::warn!("word table at {} unavailable: {e}", path.display());
                Self::unavailable(e.to_string())
            }
        }
    }

    /// Returns `true` when the backing table opened successfully.
    pub fn is_available(&self) -> bool {
        self.table.is_ok()
    }

    fn table(&self) -> Result<&dyn WordTable, VocabularyError> {
        match &self.table {
            Ok(table) => Ok(table.as_ref()),
            Err(reason) => Err(VocabularyError::StorageUnavailable(reason.clone())),
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Number of stored entries.
    pub async fn count(&self) -> Result<usize, VocabularyError> {
        self.table()?.count().await
    }

    /// All entries in insertion order.
    pub async fn get_all(&self) -> Result<Vec<VocabularyEntry>, VocabularyError> {
        self.table()?.get_all().await
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Insert `default_words` as built-in entries when the table is empty.
    ///
    /// Returns how many entries were inserted; `0` when the table already
    /// held entries.  The emptiness check and the insert are separate table
    /// calls, so two concurrent passes over the same empty table can both
    /// insert.  The result is duplicate rows, which are tolerated.
    ///
    /// Blank words are skipped.  A failed seed leaves the table empty, so the
    /// next call tries again.
    pub async fn seed_if_empty<S: AsRef<str>>(
        &self,
        default_words: &[S],
    ) -> Result<usize, VocabularyError> {
        let table = self.table()?;

        let existing = table.count().await?;
        if existing > 0 {
            log::debug!("word table holds {existing} entries; seeding skipped");
            return Ok(0);
        }

        let rows: Vec<NewEntry> = default_words
            .iter()
            .filter_map(|word| {
                let label = word.as_ref().trim();
                if label.is_empty() {
                    log::warn!("skipping blank seed word");
                    None
                } else {
                    Some(NewEntry::built_in(label))
                }
            })
            .collect();
        if rows.is_empty() {
            return Ok(0);
        }

        let inserted = table.insert(rows).await?;
        log::info!("seeded word table with {} built-in words", inserted.len());
        Ok(inserted.len())
    }

    /// Insert one entry and return it with its assigned id.
    pub async fn add(&self, label: &str, built_in: bool) -> Result<VocabularyEntry, VocabularyError> {
        let table = self.table()?;
        let label = label.trim();
        if label.is_empty() {
            return Err(VocabularyError::InvalidLabel);
        }

        let entry = NewEntry {
            label: label.to_string(),
            built_in,
        };
        table
            .insert(vec![entry])
            .await?
            .pop()
            .ok_or_else(|| VocabularyError::StorageUnavailable("insert returned no row".into()))
    }

    /// Insert a user-added (not built-in) word.
    pub async fn add_word(&self, label: &str) -> Result<VocabularyEntry, VocabularyError> {
        self.add(label, false).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::DEFAULT_WORDS;
    use async_trait::async_trait;
    use tempfile::tempdir;

    // -----------------------------------------------------------------------
    // Test doubles
    // -----------------------------------------------------------------------

    /// Yields to the scheduler after counting, widening the check-then-act
    /// window so two seeding passes interleave.
    struct YieldingTable(MemoryTable);

    #[async_trait]
    impl WordTable for YieldingTable {
        async fn count(&self) -> Result<usize, VocabularyError> {
            let n = self.0.count().await?;
            tokio::task::yield_now().await;
            Ok(n)
        }

        async fn get_all(&self) -> Result<Vec<VocabularyEntry>, VocabularyError> {
            self.0.get_all().await
        }

        async fn insert(
            &self,
            entries: Vec<NewEntry>,
        ) -> Result<Vec<VocabularyEntry>, VocabularyError> {
            self.0.insert(entries).await
        }
    }

    /// Counts fine but every insert fails.
    struct BrokenInsert;

    #[async_trait]
    impl WordTable for BrokenInsert {
        async fn count(&self) -> Result<usize, VocabularyError> {
            Ok(0)
        }

        async fn get_all(&self) -> Result<Vec<VocabularyEntry>, VocabularyError> {
            Ok(Vec::new())
        }

        async fn insert(
            &self,
            _entries: Vec<NewEntry>,
        ) -> Result<Vec<VocabularyEntry>, VocabularyError> {
            Err(VocabularyError::StorageUnavailable("disk full".into()))
        }
    }

    // -----------------------------------------------------------------------
    // Seeding
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn seeds_empty_store_in_order() {
        let store = VocabularyStore::in_memory();
        let inserted = store.seed_if_empty(&["I", "want", "eat"]).await.unwrap();
        assert_eq!(inserted, 3);

        let all = store.get_all().await.unwrap();
        let labels: Vec<_> = all.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["I", "want", "eat"]);
        assert!(all.iter().all(|e| e.built_in));
    }

    #[tokio::test]
    async fn repeated_seeding_is_idempotent() {
        let store = VocabularyStore::in_memory();
        for _ in 0..3 {
            store.seed_if_empty(DEFAULT_WORDS).await.unwrap();
            assert_eq!(store.count().await.unwrap(), DEFAULT_WORDS.len());
        }
    }

    #[tokio::test]
    async fn seeding_non_empty_store_changes_nothing() {
        let store = VocabularyStore::in_memory();
        store.add_word("juice").await.unwrap();

        let inserted = store.seed_if_empty(DEFAULT_WORDS).await.unwrap();
        assert_eq!(inserted, 0);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn blank_seed_words_are_skipped() {
        let store = VocabularyStore::in_memory();
        let inserted = store.seed_if_empty(&["go", "  ", ""]).await.unwrap();
        assert_eq!(inserted, 1);
    }

    #[tokio::test]
    async fn concurrent_seeding_duplicates_without_failing() {
        let store = VocabularyStore::new(YieldingTable(MemoryTable::new()));
        let other = store.clone();
        let words = ["I", "want", "eat"];

        let (a, b) = tokio::join!(store.seed_if_empty(&words), other.seed_if_empty(&words));
        assert_eq!(a.unwrap(), 3);
        assert_eq!(b.unwrap(), 3);

        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 6);
        let mut ids: Vec<_> = all.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6, "ids must stay unique");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn two_handles_on_one_file_seed_without_errors() {
        for _ in 0..20 {
            let dir = tempdir().expect("temp dir");
            let path = dir.path().join("words.json");
            let first = VocabularyStore::open(&path).await;
            let second = VocabularyStore::open(&path).await;

            let a = tokio::spawn(async move { first.seed_if_empty(&["I", "want", "eat"]).await });
            let b = tokio::spawn(async move { second.seed_if_empty(&["I", "want", "eat"]).await });
            let a = a.await.unwrap().expect("first seed");
            let b = b.await.unwrap().expect("second seed");

            let all = VocabularyStore::open(&path).await.get_all().await.unwrap();
            assert_eq!(all.len(), a + b);
            assert!(all.len() == 3 || all.len() == 6);

            let mut ids: Vec<_> = all.iter().map(|e| e.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), all.len(), "ids must stay unique");
        }
    }

    #[tokio::test]
    async fn failed_seed_leaves_error_and_retries_later() {
        let store = VocabularyStore::new(BrokenInsert);
        let err = store.seed_if_empty(&["go"]).await.unwrap_err();
        assert!(matches!(err, VocabularyError::StorageUnavailable(_)));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn seed_survives_reopen() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("words.json");

        let store = VocabularyStore::open(&path).await;
        assert!(store.is_available());
        store.seed_if_empty(DEFAULT_WORDS).await.unwrap();

        let reopened = VocabularyStore::open(&path).await;
        assert_eq!(reopened.seed_if_empty(DEFAULT_WORDS).await.unwrap(), 0);
        let all = reopened.get_all().await.unwrap();
        assert_eq!(all.len(), DEFAULT_WORDS.len());
        assert_eq!(all.last().map(|e| e.label.as_str()), Some("swimming"));
    }

    // -----------------------------------------------------------------------
    // add
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn add_assigns_fresh_ids() {
        let store = VocabularyStore::in_memory();
        store.seed_if_empty(&["I", "want"]).await.unwrap();

        let added = store.add_word("  juice ").await.unwrap();
        assert_eq!(added.label, "juice");
        assert_eq!(added.id, 3);
        assert!(!added.built_in);

        let builtin = store.add("more", true).await.unwrap();
        assert!(builtin.built_in);
    }

    #[tokio::test]
    async fn add_rejects_blank_label() {
        let store = VocabularyStore::in_memory();
        assert_eq!(
            store.add_word("   ").await.unwrap_err(),
            VocabularyError::InvalidLabel
        );
        assert_eq!(store.count().await.unwrap(), 0);
    }

    // -----------------------------------------------------------------------
    // Unavailable storage
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn unavailable_store_fails_every_operation() {
        let store = VocabularyStore::unavailable("cannot open");
        assert!(!store.is_available());

        let unavailable = VocabularyError::StorageUnavailable("cannot open".into());
        assert_eq!(store.count().await.unwrap_err(), unavailable);
        assert_eq!(store.get_all().await.unwrap_err(), unavailable);
        assert_eq!(store.seed_if_empty(DEFAULT_WORDS).await.unwrap_err(), unavailable);
        assert_eq!(store.add_word("go").await.unwrap_err(), unavailable);
    }

    #[tokio::test]
    async fn open_on_corrupt_file_is_unavailable() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("words.json");
        std::fs::write(&path, "garbage").unwrap();

        let store = VocabularyStore::open(&path).await;
        assert!(!store.is_available());
        assert!(matches!(
            store.count().await,
            Err(VocabularyError::StorageUnavailable(_))
        ));
    }
}
