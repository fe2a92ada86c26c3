//! Content-addressed cache keys.
//!
//! A dataset is identified by a two-part key: a digest of its canonical absolute path
//! and a digest of its full byte contents. Contents are hashed in fixed-size chunks, so
//! memory use is independent of file size. The key is pure with respect to the file at
//! read time: any change to the bytes yields a different content identity, which is the
//! cache's entire invalidation mechanism.

use std::{fs::File, hash::Hasher, io::Read, path::Path};

use siphasher::sip128::{Hasher128, SipHasher24};

use crate::error::CacheError;

/// Chunk size for streaming content hashing (64 KiB).
const HASH_CHUNK_SIZE: usize = 64 * 1024;

/// Deterministic identity of a dataset file: where it lives and what it contains.
///
/// Both parts are 128-bit SipHash digests rendered as 32 hex characters, computed with
/// a fixed key so they are stable across runs and machines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKey {
    /// Digest of the canonical absolute path string.
    path_id: String,
    /// Digest of the file's byte contents.
    content_id: String,
}

impl CacheKey {
    /// Computes the key for a dataset file.
    ///
    /// The path is canonicalized first, so the same file reached through different
    /// relative spellings maps to the same key.
    pub fn compute(path: &Path) -> Result<Self, CacheError> {
        let canonical = path
            .canonicalize()
            .map_err(|source| CacheError::ResolvePath {
                path: path.to_path_buf(),
                source,
            })?;

        let path_id = digest_str(&canonical.to_string_lossy());
        let content_id = digest_file(&canonical)?;

        Ok(Self {
            path_id,
            content_id,
        })
    }

    /// Digest of the canonical absolute path string.
    pub fn path_id(&self) -> &str {
        &self.path_id
    }

    /// Digest of the file's byte contents.
    pub fn content_id(&self) -> &str {
        &self.content_id
    }
}

/// Hashes a string to a 128-bit hex digest.
fn digest_str(input: &str) -> String {
    let mut hasher = SipHasher24::new();
    hasher.write(input.as_bytes());
    format!("{:032x}", hasher.finish128().as_u128())
}

/// Hashes a file's contents in bounded-size chunks.
fn digest_file(path: &Path) -> Result<String, CacheError> {
    let read_err = |source| CacheError::ReadDataset {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(read_err)?;
    let mut hasher = SipHasher24::new();
    let mut buffer = vec![0u8; HASH_CHUNK_SIZE];

    loop {
        let read = file.read(&mut buffer).map_err(read_err)?;
        if read == 0 {
            break;
        }
        hasher.write(&buffer[..read]);
    }

    Ok(format!("{:032x}", hasher.finish128().as_u128()))
}
