//! Dataset ingestion.
//!
//! [`ingest`] drives the full pipeline: derive the schema from the header row, create a
//! fresh index at the target, stream data rows through one write transaction, then
//! commit. Any row error rolls the transaction back and aborts the run with nothing
//! committed; a misaligned row never produces a half-indexed dataset.

use std::path::Path;

use crate::{
    dataset::Dataset, document::RowDocument, error::IngestError, schema::DatasetSchema,
    writer::IndexWriter,
};

/// Progress notification cadence, in rows.
const PROGRESS_INTERVAL: u64 = 500;

/// Statistics from an ingestion run.
#[derive(Debug, Clone, Default)]
pub struct IngestStats {
    /// Data rows read from the dataset (the header is not counted).
    pub rows_read: u64,
    /// Documents written to the index.
    pub docs_indexed: u64,
    /// Rows skipped because every cell was empty after trimming.
    pub rows_empty: u64,
}

/// Callback for observing ingestion progress.
pub trait ProgressReporter {
    /// Called once after schema derivation, before the first row.
    fn on_start(&mut self, schema: &DatasetSchema);

    /// Called at a fixed cadence (every 500th row).
    fn on_progress(&mut self, rows: u64);

    /// Called after the commit succeeds.
    fn on_complete(&mut self, stats: &IngestStats);
}

/// A no-op reporter for silent ingestion.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn on_start(&mut self, _schema: &DatasetSchema) {}
    fn on_progress(&mut self, _rows: u64) {}
    fn on_complete(&mut self, _stats: &IngestStats) {}
}

/// Builds a new index for `dataset` at `target`.
///
/// Returns the derived schema and run statistics. All documents become visible
/// atomically at commit; on any error the transaction is rolled back and the target is
/// left without a committed index (the resolver then clears it).
pub fn ingest<R: ProgressReporter>(
    dataset: &Dataset,
    target: &Path,
    reporter: &mut R,
) -> Result<(DatasetSchema, IngestStats), IngestError> {
    let headers = dataset.headers()?;
    let schema = DatasetSchema::derive(&headers)?;
    reporter.on_start(&schema);

    let mut writer = IndexWriter::create(target, &schema)?;
    let mut stats = IngestStats::default();

    for record in dataset.rows()? {
        let record = match record {
            Ok(record) => record,
            Err(e) => return abort(&mut writer, e),
        };
        stats.rows_read += 1;

        let cells: Vec<&str> = record.iter().collect();
        let row = match RowDocument::from_row(&schema, &cells, stats.rows_read) {
            Ok(row) => row,
            Err(e) => return abort(&mut writer, e),
        };

        if row.is_empty() {
            stats.rows_empty += 1;
        } else {
            if let Err(e) = writer.add_row(&schema, &row) {
                return abort(&mut writer, e);
            }
            stats.docs_indexed += 1;
        }

        if stats.rows_read % PROGRESS_INTERVAL == 0 {
            reporter.on_progress(stats.rows_read);
        }
    }

    writer.commit()?;
    reporter.on_complete(&stats);
    Ok((schema, stats))
}

/// Rolls back a failed run and propagates the original error.
///
/// A rollback failure is ignored: staged documents were never committed, so they are
/// invisible either way, and the first error is the one the caller needs.
fn abort<T>(writer: &mut IndexWriter, error: IngestError) -> Result<T, IngestError> {
    writer.rollback().ok();
    Err(error)
}

#[cfg(test)]
mod test {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    /// Reporter that records every callback.
    #[derive(Default)]
    struct TestReporter {
        started: bool,
        progress_calls: Vec<u64>,
        completed: bool,
    }

    impl ProgressReporter for TestReporter {
        fn on_start(&mut self, _schema: &DatasetSchema) {
            self.started = true;
        }

        fn on_progress(&mut self, rows: u64) {
            self.progress_calls.push(rows);
        }

        fn on_complete(&mut self, _stats: &IngestStats) {
            self.completed = true;
        }
    }

    /// Writes a dataset file and returns a `Dataset` over it.
    fn write_dataset(temp: &TempDir, contents: &str) -> Dataset {
        let path = temp.path().join("data.csv");
        fs::write(&path, contents).unwrap();
        Dataset::new(path)
    }

    #[test]
    fn ingests_all_rows() {
        let temp = TempDir::new().unwrap();
        let dataset = write_dataset(&temp, "id,name\n1,Alice\n2,Bob\n");
        let target = temp.path().join("index");

        let (schema, stats) = ingest(&dataset, &target, &mut SilentReporter).unwrap();

        assert_eq!(schema.field_names(), ["id", "name"]);
        assert_eq!(stats.rows_read, 2);
        assert_eq!(stats.docs_indexed, 2);
        assert_eq!(stats.rows_empty, 0);
    }

    #[test]
    fn empty_cells_are_not_stored_and_empty_rows_not_indexed() {
        let temp = TempDir::new().unwrap();
        let dataset = write_dataset(&temp, "name,value\na,1\nb,\n,\n");
        let target = temp.path().join("index");

        let (_, stats) = ingest(&dataset, &target, &mut SilentReporter).unwrap();

        assert_eq!(stats.rows_read, 3);
        assert_eq!(stats.docs_indexed, 2);
        assert_eq!(stats.rows_empty, 1);
    }

    #[test]
    fn invalid_header_aborts_before_any_write() {
        let temp = TempDir::new().unwrap();
        let dataset = write_dataset(&temp, "id,first name\n1,Alice\n");
        let target = temp.path().join("index");

        let err = ingest(&dataset, &target, &mut SilentReporter).unwrap_err();
        assert!(matches!(err, IngestError::Schema(_)));
        // Nothing was created at the target.
        assert!(!target.exists());
    }

    #[test]
    fn short_row_aborts_with_nothing_committed() {
        let temp = TempDir::new().unwrap();
        let dataset = write_dataset(&temp, "id,name\n1,Alice\n2\n3,Carol\n");
        let target = temp.path().join("index");

        let err = ingest(&dataset, &target, &mut SilentReporter).unwrap_err();
        assert!(matches!(err, IngestError::RowWidth { row: 2, .. }));

        // The index skeleton exists but holds no committed documents.
        let index = tantivy::Index::open_in_dir(&target).unwrap();
        let reader = index.reader().unwrap();
        assert_eq!(reader.searcher().num_docs(), 0);
    }

    #[test]
    fn reporter_sees_start_progress_and_completion() {
        let temp = TempDir::new().unwrap();

        let mut contents = String::from("id,name\n");
        for i in 0..1200 {
            contents.push_str(&format!("{i},row-{i}\n"));
        }
        let dataset = write_dataset(&temp, &contents);
        let target = temp.path().join("index");

        let mut reporter = TestReporter::default();
        let (_, stats) = ingest(&dataset, &target, &mut reporter).unwrap();

        assert!(reporter.started);
        assert!(reporter.completed);
        assert_eq!(reporter.progress_calls, vec![500, 1000]);
        assert_eq!(stats.docs_indexed, 1200);
    }
}
