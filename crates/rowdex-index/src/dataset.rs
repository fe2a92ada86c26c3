//! CSV dataset access.
//!
//! A [`Dataset`] wraps a CSV file path and hands out the header row and a lazy data-row
//! iterator on demand. Rows stream from disk, so ingestion memory use is independent of
//! file size. Tokenization is the `csv` crate's job; the reader is opened in flexible
//! mode so row/schema cardinality is checked by the document builder instead of being
//! rejected (or worse, papered over) at the tokenizer layer.

use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
};

use csv::{Reader, ReaderBuilder, StringRecord, StringRecordsIntoIter};

use crate::error::IngestError;

/// A delimited dataset file: header row first, one record per data row after it.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Path to the dataset file as given by the caller.
    path: PathBuf,
}

impl Dataset {
    /// Wraps a dataset file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the dataset path as given.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolves the dataset path to a canonical absolute path.
    pub fn canonical_path(&self) -> io::Result<PathBuf> {
        self.path.canonicalize()
    }

    /// Reads just the header row.
    ///
    /// Cheap relative to a full scan; the cache resolver uses this to recover the
    /// schema on a hit without re-reading the whole file.
    pub fn headers(&self) -> Result<Vec<String>, IngestError> {
        let mut reader = self.open()?;
        let headers = reader.headers()?;
        Ok(headers.iter().map(str::to_string).collect())
    }

    /// Returns a lazy iterator over the data rows (everything after the header).
    pub fn rows(&self) -> Result<Rows, IngestError> {
        let reader = self.open()?;
        Ok(Rows {
            inner: reader.into_records(),
        })
    }

    /// Opens a CSV reader over the file.
    fn open(&self) -> Result<Reader<File>, IngestError> {
        let reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;
        Ok(reader)
    }
}

/// Lazy iterator over a dataset's data rows.
pub struct Rows {
    /// Underlying CSV record iterator.
    inner: StringRecordsIntoIter<File>,
}

impl Iterator for Rows {
    type Item = Result<StringRecord, IngestError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|record| record.map_err(IngestError::from))
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    /// Writes a dataset file and returns a `Dataset` over it.
    fn write_dataset(temp: &TempDir, contents: &str) -> Dataset {
        let path = temp.path().join("data.csv");
        fs::write(&path, contents).unwrap();
        Dataset::new(path)
    }

    #[test]
    fn headers_reads_first_row() {
        let temp = TempDir::new().unwrap();
        let dataset = write_dataset(&temp, "id,name\n1,Alice\n");

        assert_eq!(dataset.headers().unwrap(), vec!["id", "name"]);
    }

    #[test]
    fn rows_skip_the_header() {
        let temp = TempDir::new().unwrap();
        let dataset = write_dataset(&temp, "id,name\n1,Alice\n2,Bob\n");

        let rows: Vec<StringRecord> = dataset.rows().unwrap().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[0][1], "Alice");
        assert_eq!(&rows[1][1], "Bob");
    }

    #[test]
    fn ragged_rows_are_yielded_not_rejected() {
        // Cardinality enforcement belongs to the document builder, not the tokenizer.
        let temp = TempDir::new().unwrap();
        let dataset = write_dataset(&temp, "id,name\n1\n");

        let rows: Vec<StringRecord> = dataset.rows().unwrap().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 1);
    }

    #[test]
    fn quoted_cells_keep_embedded_commas() {
        let temp = TempDir::new().unwrap();
        let dataset = write_dataset(&temp, "id,name\n1,\"Smith, John\"\n");

        let rows: Vec<StringRecord> = dataset.rows().unwrap().map(Result::unwrap).collect();
        assert_eq!(&rows[0][1], "Smith, John");
    }

    #[test]
    fn missing_file_is_a_dataset_error() {
        let temp = TempDir::new().unwrap();
        let dataset = Dataset::new(temp.path().join("absent.csv"));

        assert!(matches!(
            dataset.headers().unwrap_err(),
            IngestError::Dataset(_)
        ));
    }
}
