//! Cache directory layout.
//!
//! Cached indexes live under a cache root in a two-level layout: one directory per path
//! identity, one subdirectory per content identity. Keeping the levels separate lets
//! identical content indexed under two paths coexist, and groups a path's stale builds
//! next to its current one.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::cache_key::CacheKey;

/// Directory name for rowdex data under the home directory.
const ROWDEX_DIR: &str = ".rowdex";
/// Subdirectory of the rowdex directory holding cached indexes.
const CACHE_SUBDIR: &str = "cache";
/// Marker file recording the content identity of a committed index.
const SOURCE_ID_FILE: &str = "source_id";

/// Returns the default cache root (`~/.rowdex/cache`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn default_cache_root() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(ROWDEX_DIR).join(CACHE_SUBDIR))
}

/// Returns the index directory for a cache key under the given root.
pub fn index_directory(cache_root: &Path, key: &CacheKey) -> PathBuf {
    cache_root.join(key.path_id()).join(key.content_id())
}

/// Returns the path of the commit marker inside an index directory.
///
/// The marker is written only after the writer transaction commits; a directory
/// without it is never a valid cache entry.
pub fn source_id_path(index_dir: &Path) -> PathBuf {
    index_dir.join(SOURCE_ID_FILE)
}
