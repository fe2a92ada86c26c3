//! rowdex: indexed full-text search over delimited datasets.
//!
//! rowdex ingests a CSV file, derives a schema from its header row, and builds a
//! persisted inverted index from the rows. Indexes are cached content-addressed: the
//! same file contents are never indexed twice, and any change to the file triggers a
//! rebuild. Queries run either interactively (`rowdex shell`) or one-shot
//! (`rowdex search`), with results projected onto the dataset's fields.

#![warn(missing_docs)]

pub mod cli;
