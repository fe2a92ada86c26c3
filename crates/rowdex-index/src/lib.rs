//! Tantivy-based dataset indexing and search for rowdex.
//!
//! This crate turns delimited datasets into persisted full-text indexes and answers
//! queries against them. It handles:
//! - Schema derivation from a dataset's header row
//! - Row-to-document conversion under schema cardinality rules
//! - Index creation and transactional, all-or-nothing ingestion
//! - Content-addressed cache resolution (reuse an index whenever the file is unchanged)
//! - Field-scoped search with projection onto requested output fields
//!
//! # Example
//!
//! ```no_run
//! use rowdex_index::{Dataset, SilentReporter, resolve};
//!
//! let dataset = Dataset::new("people.csv");
//! let resolved = resolve("cache".as_ref(), &dataset, &mut SilentReporter).unwrap();
//!
//! let searcher = resolved.searcher();
//! let output = vec!["id".to_string(), "name".to_string()];
//! let (hits, total) = searcher.search("name", "Alice", &output, 10).unwrap();
//! println!("Total results: {total}");
//! for hit in &hits {
//!     println!("{}", hit.joined(","));
//! }
//! ```

#![warn(missing_docs)]

mod cache_key;
mod dataset;
mod document;
mod error;
mod ingest;
mod location;
mod resolver;
mod schema;
mod search;
mod writer;

pub use cache_key::CacheKey;
pub use dataset::{Dataset, Rows};
pub use document::RowDocument;
pub use error::{CacheError, IngestError, SchemaError, SearchError};
pub use ingest::{IngestStats, ProgressReporter, SilentReporter, ingest};
pub use location::{default_cache_root, index_directory, source_id_path};
pub use resolver::{CacheEntry, ResolvedIndex, cached_doc_count, entry_status, resolve};
pub use schema::DatasetSchema;
pub use search::{MISSING_FIELD, SearchHit, Searcher};
pub use writer::IndexWriter;
