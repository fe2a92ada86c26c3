//! Row documents.
//!
//! A [`RowDocument`] is one dataset row shaped for indexing: cells are matched
//! positionally against the schema, and cells that are empty after trimming are dropped
//! rather than stored. Cardinality is validated up front; a row that does not line up
//! with the schema is an error, never a truncation.

use tantivy::TantivyDocument;

use crate::{error::IngestError, schema::DatasetSchema};

/// One row's non-empty cells, keyed by schema column position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowDocument {
    /// (column, stored text) pairs for cells that were non-empty after trimming.
    values: Vec<(usize, String)>,
}

impl RowDocument {
    /// Builds a document from one data row.
    ///
    /// The row must have exactly as many cells as the schema has fields. Cell text is
    /// stored verbatim; only the emptiness check trims.
    pub fn from_row<S: AsRef<str>>(
        schema: &DatasetSchema,
        cells: &[S],
        row: u64,
    ) -> Result<Self, IngestError> {
        if cells.len() != schema.len() {
            return Err(IngestError::RowWidth {
                row,
                expected: schema.len(),
                found: cells.len(),
            });
        }

        let values = cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.as_ref().trim().is_empty())
            .map(|(column, cell)| (column, cell.as_ref().to_string()))
            .collect();

        Ok(Self { values })
    }

    /// True when every cell in the source row was empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of populated fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Converts to a Tantivy document using the schema's field handles.
    pub(crate) fn to_tantivy(&self, schema: &DatasetSchema) -> TantivyDocument {
        let mut doc = TantivyDocument::new();
        for (column, value) in &self.values {
            doc.add_text(schema.field_at(*column), value);
        }
        doc
    }
}
