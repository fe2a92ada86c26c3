//! Error types for the rowdex-index crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors produced while validating a dataset header row.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A field name still contains whitespace after trimming; the index store's
    /// field syntax cannot represent it.
    #[error("field name contains whitespace: {0:?}")]
    WhitespaceInName(String),

    /// Two header cells resolve to the same field name, which would make downstream
    /// lookups ambiguous.
    #[error("duplicate field name: {0:?}")]
    DuplicateName(String),

    /// A header cell is empty after trimming.
    #[error("empty field name in column {0}")]
    EmptyName(usize),

    /// The header row has no cells at all.
    #[error("header row has no fields")]
    EmptyHeader,
}

/// Errors produced while building an index from a dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The header row failed validation.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A data row does not line up with the schema. Fatal: silently truncating or
    /// misaligning columns is never acceptable.
    #[error("row {row}: expected {expected} cells, found {found}")]
    RowWidth {
        /// 1-based data row number (the header is row 0).
        row: u64,
        /// Number of fields in the schema.
        expected: usize,
        /// Number of cells in the offending row.
        found: usize,
    },

    /// The dataset could not be read or tokenized.
    #[error("failed to read dataset: {0}")]
    Dataset(#[from] csv::Error),

    /// Failed to create, write, or commit the index.
    #[error("failed to write index: {0}")]
    Index(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl IngestError {
    /// Creates an `Index` error from a Tantivy error.
    pub(crate) fn index(source: &tantivy::TantivyError) -> Self {
        Self::Index(source.to_string())
    }
}

/// Errors produced while resolving or preparing a cache directory.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The dataset path could not be resolved to a canonical absolute path.
    #[error("failed to resolve dataset path {path}: {source}")]
    ResolvePath {
        /// The path that could not be resolved.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The dataset file could not be read while hashing its contents.
    #[error("failed to read dataset {path}: {source}")]
    ReadDataset {
        /// The file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to create or clear a cache directory.
    #[error("failed to prepare cache directory {path}: {source}")]
    Directory {
        /// The directory that could not be prepared.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Building the index on a cache miss failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// An existing cached index could not be opened.
    #[error("failed to open cached index at {path}: {message}")]
    OpenIndex {
        /// Directory of the index that could not be opened.
        path: PathBuf,
        /// Error message.
        message: String,
    },
}

/// Errors produced while searching or listing terms.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The requested field is not part of the schema.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The query string is not valid under the index store's grammar. Reported and
    /// recovered; never terminates a query session.
    #[error("invalid query: {0}")]
    QueryParse(String),

    /// The index could not be read.
    #[error("failed to read index: {0}")]
    Index(String),
}

impl SearchError {
    /// Creates an `Index` error from a Tantivy error.
    pub(crate) fn index(source: &tantivy::TantivyError) -> Self {
        Self::Index(source.to_string())
    }
}
