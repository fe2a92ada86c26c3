//! Index writer for staging row documents into a new index.

use std::{fs, path::Path};

use tantivy::{Index, IndexWriter as TantivyIndexWriter};

use crate::{document::RowDocument, error::IngestError, schema::DatasetSchema};

/// Default heap size for the index writer (50 MB).
const DEFAULT_HEAP_SIZE: usize = 50_000_000;

/// Writes row documents into a freshly created index.
///
/// The writer is the write transaction of an ingestion run: documents staged through
/// [`add_row`](Self::add_row) become visible only at [`commit`](Self::commit), and a
/// dropped or rolled-back writer leaves nothing visible.
pub struct IndexWriter {
    /// The Tantivy index.
    index: Index,
    /// The underlying Tantivy writer.
    writer: TantivyIndexWriter,
}

impl IndexWriter {
    /// Creates a new index at the given path with the dataset's schema.
    ///
    /// The directory is created if missing. Fails if an index already lives there; the
    /// cache resolver guarantees a fresh directory, so double-creation is a bug worth
    /// surfacing rather than absorbing.
    pub fn create(path: &Path, schema: &DatasetSchema) -> Result<Self, IngestError> {
        fs::create_dir_all(path)?;

        let index = Index::create_in_dir(path, schema.schema().clone())
            .map_err(|e| IngestError::index(&e))?;

        let writer = index
            .writer(DEFAULT_HEAP_SIZE)
            .map_err(|e| IngestError::index(&e))?;

        Ok(Self { index, writer })
    }

    /// Stages one row document. Nothing is visible until [`commit`](Self::commit).
    pub fn add_row(
        &mut self,
        schema: &DatasetSchema,
        row: &RowDocument,
    ) -> Result<(), IngestError> {
        self.writer
            .add_document(row.to_tantivy(schema))
            .map_err(|e| IngestError::index(&e))?;
        Ok(())
    }

    /// Commits all staged documents, making them visible to readers.
    pub fn commit(&mut self) -> Result<(), IngestError> {
        self.writer.commit().map_err(|e| IngestError::index(&e))?;
        Ok(())
    }

    /// Discards all staged documents.
    pub fn rollback(&mut self) -> Result<(), IngestError> {
        self.writer.rollback().map_err(|e| IngestError::index(&e))?;
        Ok(())
    }

    /// Returns the number of committed documents.
    pub fn num_docs(&self) -> Result<u64, IngestError> {
        let reader = self
            .index
            .reader()
            .map_err(|e| IngestError::Index(e.to_string()))?;
        Ok(reader.searcher().num_docs())
    }
}
