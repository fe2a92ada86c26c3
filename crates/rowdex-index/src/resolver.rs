//! Cache-hit resolution for dataset indexes.
//!
//! The resolver is the sole authority for the reuse-or-rebuild decision; callers never
//! inspect the cache layout themselves. A directory counts as a valid entry only when a
//! committed build recorded the dataset's content identity in its marker file; an
//! aborted or half-finished build is indistinguishable from garbage and is cleared and
//! rebuilt.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tantivy::Index;

use crate::{
    cache_key::CacheKey,
    dataset::Dataset,
    error::CacheError,
    ingest::{IngestStats, ProgressReporter, ingest},
    location::{index_directory, source_id_path},
    schema::DatasetSchema,
    search::Searcher,
};

/// State of a cache entry for a given key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheEntry {
    /// A committed index exists for this key.
    Valid,
    /// A directory exists but holds no committed index (e.g. an aborted build).
    Incomplete,
    /// Nothing cached for this key.
    Missing,
}

impl CacheEntry {
    /// Returns a human-readable description for display.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Incomplete => "incomplete (will be rebuilt)",
            Self::Missing => "missing",
        }
    }
}

/// A dataset index ready for searching.
#[derive(Debug)]
pub struct ResolvedIndex {
    /// Schema recovered from the dataset header.
    pub schema: DatasetSchema,
    /// The opened index.
    pub index: Index,
    /// Directory the index lives in.
    pub dir: PathBuf,
    /// Whether the index was reused rather than rebuilt.
    pub cache_hit: bool,
    /// Ingestion statistics; present only after a rebuild.
    pub stats: Option<IngestStats>,
}

impl ResolvedIndex {
    /// Returns a searcher over the resolved index.
    pub fn searcher(&self) -> Searcher {
        Searcher::new(self.index.clone(), self.schema.clone())
    }
}

/// Inspects the cache entry for a key without touching the dataset.
pub fn entry_status(cache_root: &Path, key: &CacheKey) -> CacheEntry {
    let dir = index_directory(cache_root, key);
    if !dir.exists() {
        return CacheEntry::Missing;
    }

    // meta.json is the index store's own marker; source_id is ours, written after
    // commit and required to name this exact content.
    if !dir.join("meta.json").exists() {
        return CacheEntry::Incomplete;
    }
    match fs::read_to_string(source_id_path(&dir)) {
        Ok(stored) if stored.trim() == key.content_id() => CacheEntry::Valid,
        _ => CacheEntry::Incomplete,
    }
}

/// Opens the cached index for `dataset`, building it first on a cache miss.
///
/// On a hit the schema is recovered by re-reading just the dataset's header row, so
/// projection order always matches the file as it stands. On a miss (or a leftover
/// partial build) the directory is cleared and rebuilt; the content-identity marker is
/// written only after the commit succeeds, and a failed build removes its directory so
/// it can never masquerade as a hit later.
pub fn resolve<R: ProgressReporter>(
    cache_root: &Path,
    dataset: &Dataset,
    reporter: &mut R,
) -> Result<ResolvedIndex, CacheError> {
    let key = CacheKey::compute(dataset.path())?;
    let dir = index_directory(cache_root, &key);

    if entry_status(cache_root, &key) == CacheEntry::Valid {
        let headers = dataset.headers().map_err(CacheError::Ingest)?;
        let schema = DatasetSchema::derive(&headers)
            .map_err(|e| CacheError::Ingest(e.into()))?;
        let index = open_index(&dir)?;
        return Ok(ResolvedIndex {
            schema,
            index,
            dir,
            cache_hit: true,
            stats: None,
        });
    }

    // Clear any partial build before reindexing.
    if dir.exists() {
        fs::remove_dir_all(&dir).map_err(|source| CacheError::Directory {
            path: dir.clone(),
            source,
        })?;
    }

    let (schema, stats) = match ingest(dataset, &dir, reporter) {
        Ok(built) => built,
        Err(e) => {
            // A failed build must not look like a cache entry on the next run.
            fs::remove_dir_all(&dir).ok();
            return Err(CacheError::Ingest(e));
        }
    };

    fs::write(source_id_path(&dir), key.content_id()).map_err(|source| {
        CacheError::Directory {
            path: dir.clone(),
            source,
        }
    })?;

    let index = open_index(&dir)?;
    Ok(ResolvedIndex {
        schema,
        index,
        dir,
        cache_hit: false,
        stats: Some(stats),
    })
}

/// Returns the committed document count of a cache entry.
///
/// Fails if the entry's index cannot be opened; callers should check
/// [`entry_status`] first.
pub fn cached_doc_count(cache_root: &Path, key: &CacheKey) -> Result<u64, CacheError> {
    let dir = index_directory(cache_root, key);
    let index = open_index(&dir)?;
    let reader = index.reader().map_err(|e| CacheError::OpenIndex {
        path: dir,
        message: e.to_string(),
    })?;
    Ok(reader.searcher().num_docs())
}

/// Opens a committed index directory.
fn open_index(dir: &Path) -> Result<Index, CacheError> {
    Index::open_in_dir(dir).map_err(|e| CacheError::OpenIndex {
        path: dir.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod test {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::ingest::SilentReporter;

    /// Writes a dataset file and returns a `Dataset` over it.
    fn write_dataset(temp: &TempDir, name: &str, contents: &str) -> Dataset {
        let path = temp.path().join(name);
        fs::write(&path, contents).unwrap();
        Dataset::new(path)
    }

    /// Number of committed documents in a resolved index.
    fn doc_count(resolved: &ResolvedIndex) -> u64 {
        resolved.index.reader().unwrap().searcher().num_docs()
    }

    #[test]
    fn first_resolution_builds_the_index() {
        let temp = TempDir::new().unwrap();
        let cache_root = temp.path().join("cache");
        let dataset = write_dataset(&temp, "data.csv", "id,name\n1,Alice\n2,Bob\n");

        let resolved = resolve(&cache_root, &dataset, &mut SilentReporter).unwrap();

        assert!(!resolved.cache_hit);
        assert_eq!(resolved.stats.as_ref().unwrap().docs_indexed, 2);
        assert_eq!(doc_count(&resolved), 2);
        assert_eq!(resolved.schema.field_names(), ["id", "name"]);
    }

    #[test]
    fn second_resolution_is_a_cache_hit() {
        let temp = TempDir::new().unwrap();
        let cache_root = temp.path().join("cache");
        let dataset = write_dataset(&temp, "data.csv", "id,name\n1,Alice\n2,Bob\n");

        let first = resolve(&cache_root, &dataset, &mut SilentReporter).unwrap();
        let second = resolve(&cache_root, &dataset, &mut SilentReporter).unwrap();

        assert!(!first.cache_hit);
        assert!(second.cache_hit);
        assert!(second.stats.is_none());
        assert_eq!(second.dir, first.dir);
        assert_eq!(doc_count(&second), doc_count(&first));
        assert_eq!(second.schema.field_names(), first.schema.field_names());
    }

    #[test]
    fn content_change_rebuilds_in_a_new_directory() {
        let temp = TempDir::new().unwrap();
        let cache_root = temp.path().join("cache");

        let dataset = write_dataset(&temp, "data.csv", "id,name\n1,Alice\n");
        let first = resolve(&cache_root, &dataset, &mut SilentReporter).unwrap();

        fs::write(dataset.path(), "id,name\n1,Alice\n2,Bob\n").unwrap();
        let second = resolve(&cache_root, &dataset, &mut SilentReporter).unwrap();

        assert!(!second.cache_hit);
        assert_ne!(second.dir, first.dir);
        assert_eq!(doc_count(&second), 2);
    }

    #[test]
    fn directory_without_marker_is_incomplete_and_rebuilt() {
        let temp = TempDir::new().unwrap();
        let cache_root = temp.path().join("cache");
        let dataset = write_dataset(&temp, "data.csv", "id,name\n1,Alice\n");

        let key = CacheKey::compute(dataset.path()).unwrap();
        let dir = index_directory(&cache_root, &key);

        // Simulate a build that died before commit: directory with junk, no marker.
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("leftover"), "partial").unwrap();
        assert_eq!(entry_status(&cache_root, &key), CacheEntry::Incomplete);

        let resolved = resolve(&cache_root, &dataset, &mut SilentReporter).unwrap();
        assert!(!resolved.cache_hit);
        assert_eq!(doc_count(&resolved), 1);
        assert_eq!(entry_status(&cache_root, &key), CacheEntry::Valid);
    }

    #[test]
    fn stale_marker_is_incomplete() {
        let temp = TempDir::new().unwrap();
        let cache_root = temp.path().join("cache");
        let dataset = write_dataset(&temp, "data.csv", "id,name\n1,Alice\n");

        let resolved = resolve(&cache_root, &dataset, &mut SilentReporter).unwrap();
        let key = CacheKey::compute(dataset.path()).unwrap();

        // Corrupt the marker; the entry must stop counting as valid.
        fs::write(source_id_path(&resolved.dir), "0000").unwrap();
        assert_eq!(entry_status(&cache_root, &key), CacheEntry::Incomplete);
    }

    #[test]
    fn failed_build_leaves_no_cache_entry() {
        let temp = TempDir::new().unwrap();
        let cache_root = temp.path().join("cache");
        let dataset = write_dataset(&temp, "data.csv", "id,name\n1,Alice\n2\n");

        let err = resolve(&cache_root, &dataset, &mut SilentReporter).unwrap_err();
        assert!(matches!(err, CacheError::Ingest(_)));

        let key = CacheKey::compute(dataset.path()).unwrap();
        assert_eq!(entry_status(&cache_root, &key), CacheEntry::Missing);

        // Fixing the dataset produces a clean build (different content, new key).
        fs::write(dataset.path(), "id,name\n1,Alice\n2,Bob\n").unwrap();
        let resolved = resolve(&cache_root, &dataset, &mut SilentReporter).unwrap();
        assert_eq!(doc_count(&resolved), 2);
    }

    #[test]
    fn entry_status_for_unknown_key_is_missing() {
        let temp = TempDir::new().unwrap();
        let cache_root = temp.path().join("cache");
        let dataset = write_dataset(&temp, "data.csv", "id\n1\n");

        let key = CacheKey::compute(dataset.path()).unwrap();
        assert_eq!(entry_status(&cache_root, &key), CacheEntry::Missing);
    }
}
