//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use rowdex_config::Config;
use rowdex_index::{
    Dataset, DatasetSchema, IngestStats, ProgressReporter, Searcher, default_cache_root, resolve,
};

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (defaults if no config file exists).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = env::current_dir().map_err(|e| {
            eprintln!("error: could not determine current directory: {e}");
            ExitCode::FAILURE
        })?;

        let config = Config::load(&cwd).map_err(|e| {
            eprintln!("error: failed to load configuration: {e}");
            ExitCode::FAILURE
        })?;

        Ok(Self { cwd, config })
    }

    /// Resolves the cache root: config override first, then the home-directory default.
    pub fn cache_root(&self) -> Result<PathBuf, ExitCode> {
        if let Some(root) = &self.config.cache_root {
            return Ok(root.clone());
        }
        default_cache_root().ok_or_else(|| {
            eprintln!("error: could not determine home directory for the cache root");
            eprintln!("set cache_root in .rowdex.toml to choose one explicitly");
            ExitCode::FAILURE
        })
    }

    /// Opens the cached index for a dataset, building it first if needed.
    ///
    /// Progress during a build is printed to stderr; a cache hit is silent.
    pub fn open_dataset(&self, file: &Path) -> Result<Searcher, ExitCode> {
        let cache_root = self.cache_root()?;
        let dataset = Dataset::new(file);

        let mut reporter = ConsoleReporter;
        match resolve(&cache_root, &dataset, &mut reporter) {
            Ok(resolved) => Ok(resolved.searcher()),
            Err(e) => {
                eprintln!("error: {e}");
                Err(ExitCode::FAILURE)
            }
        }
    }
}

/// Progress reporter that narrates index builds on stderr.
struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn on_start(&mut self, schema: &DatasetSchema) {
        eprintln!("Indexing dataset ({} fields)...", schema.len());
    }

    fn on_progress(&mut self, rows: u64) {
        eprintln!("  {rows} rows...");
    }

    fn on_complete(&mut self, stats: &IngestStats) {
        eprintln!(
            "Indexed {} documents from {} rows.",
            stats.docs_indexed, stats.rows_read
        );
    }
}
