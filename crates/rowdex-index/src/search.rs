//! Search execution and term listing.
//!
//! [`Searcher`] wraps an opened index and executes field-scoped queries: the requested
//! field becomes the default field for bare terms, and the rest of the index store's
//! query grammar (phrases, booleans, wildcards, explicit `field:term` scoping) passes
//! through uninterpreted. Matches are projected onto caller-requested output fields,
//! with [`MISSING_FIELD`] standing in for fields a document never stored.

use std::collections::BTreeSet;

use tantivy::{
    Index, TantivyDocument,
    collector::{Count, TopDocs},
    query::QueryParser,
    schema::Value,
};

use crate::{error::SearchError, schema::DatasetSchema};

/// Sentinel printed for a requested field absent from a matching document.
pub const MISSING_FIELD: &str = "NA";

/// One matching document projected onto the requested output fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Field name/value pairs in the order requested.
    pub fields: Vec<(String, String)>,
}

impl SearchHit {
    /// Values joined with the given separator, in requested order.
    pub fn joined(&self, separator: &str) -> String {
        self.fields
            .iter()
            .map(|(_, value)| value.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// Executes queries and term listings against one dataset index.
///
/// Read access is scoped per call: each query or listing acquires a fresh reader and
/// releases it on return.
pub struct Searcher {
    /// The opened index.
    index: Index,
    /// Schema recovered for the dataset.
    schema: DatasetSchema,
}

impl Searcher {
    /// Wraps an opened index with its dataset schema.
    pub fn new(index: Index, schema: DatasetSchema) -> Self {
        Self { index, schema }
    }

    /// The dataset schema this searcher projects against.
    pub fn schema(&self) -> &DatasetSchema {
        &self.schema
    }

    /// Runs a field-scoped query and projects each match onto `output_fields`.
    ///
    /// `field` is the default field for bare terms in `value`; explicit scoping inside
    /// `value` (e.g. `other_field:term`) still works. Returns up to `limit` projected
    /// hits in the store's ranking order, plus the total match count.
    pub fn search(
        &self,
        field: &str,
        value: &str,
        output_fields: &[String],
        limit: usize,
    ) -> Result<(Vec<SearchHit>, usize), SearchError> {
        let default_field = self
            .schema
            .field(field)
            .ok_or_else(|| SearchError::UnknownField(field.to_string()))?;

        for requested in output_fields {
            if self.schema.field(requested).is_none() {
                return Err(SearchError::UnknownField(requested.clone()));
            }
        }

        let mut parser = QueryParser::for_index(&self.index, vec![default_field]);
        // Bare multi-term values must all match.
        parser.set_conjunction_by_default();
        let query = parser
            .parse_query(value)
            .map_err(|e| SearchError::QueryParse(e.to_string()))?;

        let reader = self.index.reader().map_err(|e| SearchError::index(&e))?;
        let searcher = reader.searcher();

        let (top_docs, total) = searcher
            .search(&query, &(TopDocs::with_limit(limit.max(1)), Count))
            .map_err(|e| SearchError::index(&e))?;

        let mut hits = Vec::with_capacity(top_docs.len());
        for (_score, address) in top_docs {
            let doc: TantivyDocument = searcher.doc(address).map_err(|e| SearchError::index(&e))?;
            hits.push(self.project(&doc, output_fields));
        }

        Ok((hits, total))
    }

    /// Projects one stored document onto the requested fields, in requested order.
    fn project(&self, doc: &TantivyDocument, output_fields: &[String]) -> SearchHit {
        let fields = output_fields
            .iter()
            .map(|name| {
                let value = self
                    .schema
                    .field(name)
                    .and_then(|field| doc.get_first(field))
                    .and_then(|stored| stored.as_str())
                    .unwrap_or(MISSING_FIELD)
                    .to_string();
                (name.clone(), value)
            })
            .collect();
        SearchHit { fields }
    }

    /// Lists the distinct indexed terms for one field.
    ///
    /// This walks the index's term dictionaries, so terms appear in their indexed
    /// (tokenized) form.
    pub fn lexicon(&self, field: &str) -> Result<BTreeSet<String>, SearchError> {
        let handle = self
            .schema
            .field(field)
            .ok_or_else(|| SearchError::UnknownField(field.to_string()))?;

        let reader = self.index.reader().map_err(|e| SearchError::index(&e))?;
        let searcher = reader.searcher();

        let mut terms = BTreeSet::new();
        for segment in searcher.segment_readers() {
            let inverted = segment.inverted_index(handle).map_err(|e| SearchError::index(&e))?;
            let mut stream = inverted
                .terms()
                .stream()
                .map_err(|e| SearchError::Index(e.to_string()))?;
            while stream.advance() {
                terms.insert(String::from_utf8_lossy(stream.key()).into_owned());
            }
        }

        Ok(terms)
    }

    /// Lists every field's lexicon, in schema order.
    pub fn all_lexicons(&self) -> Result<Vec<(String, BTreeSet<String>)>, SearchError> {
        self.schema
            .field_names()
            .iter()
            .map(|name| Ok((name.clone(), self.lexicon(name)?)))
            .collect()
    }

    /// Number of committed documents.
    pub fn num_docs(&self) -> Result<u64, SearchError> {
        let reader = self.index.reader().map_err(|e| SearchError::index(&e))?;
        Ok(reader.searcher().num_docs())
    }
}
