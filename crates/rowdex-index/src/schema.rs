//! Dataset schema derivation.
//!
//! The first row of a dataset names its fields. [`DatasetSchema`] validates those names
//! and maps them onto a Tantivy schema where every column is a stored, tokenized text
//! field. Header order is preserved exactly: it drives both column alignment during
//! ingestion and projection order at query time.

use tantivy::schema::{Field, STORED, Schema, TEXT};

use crate::error::SchemaError;

/// Ordered field list derived from a dataset header row, with index field handles.
///
/// Immutable once derived; the index built from it never changes shape.
#[derive(Debug, Clone)]
pub struct DatasetSchema {
    /// Field names in header order.
    names: Vec<String>,
    /// The Tantivy schema built from the names.
    schema: Schema,
    /// Field handles, aligned with `names`.
    fields: Vec<Field>,
}

impl DatasetSchema {
    /// Derives a schema from a header row.
    ///
    /// Cells are trimmed before validation. Fails if a trimmed name is empty, still
    /// contains whitespace, or collides with an earlier name.
    pub fn derive<S: AsRef<str>>(headers: &[S]) -> Result<Self, SchemaError> {
        if headers.is_empty() {
            return Err(SchemaError::EmptyHeader);
        }

        let mut names: Vec<String> = Vec::with_capacity(headers.len());
        for (column, header) in headers.iter().enumerate() {
            let name = header.as_ref().trim();
            if name.is_empty() {
                return Err(SchemaError::EmptyName(column));
            }
            if name.chars().any(char::is_whitespace) {
                return Err(SchemaError::WhitespaceInName(name.to_string()));
            }
            if names.iter().any(|existing| existing == name) {
                return Err(SchemaError::DuplicateName(name.to_string()));
            }
            names.push(name.to_string());
        }

        let mut builder = Schema::builder();
        let fields = names
            .iter()
            .map(|name| builder.add_text_field(name, TEXT | STORED))
            .collect();

        Ok(Self {
            names,
            schema: builder.build(),
            fields,
        })
    }

    /// Field names in header order.
    pub fn field_names(&self) -> &[String] {
        &self.names
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the schema has no fields. Derivation rejects this, so an instance
    /// obtained through [`derive`](Self::derive) is never empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns a reference to the underlying Tantivy schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Looks up a field handle by name.
    pub fn field(&self, name: &str) -> Option<Field> {
        self.names
            .iter()
            .position(|candidate| candidate == name)
            .map(|position| self.fields[position])
    }

    /// Returns the field handle for a column position.
    ///
    /// Positions come from the same header that built this schema, so they are always
    /// in range for rows the document builder accepted.
    pub(crate) fn field_at(&self, column: usize) -> Field {
        self.fields[column]
    }
}
