//! Implementation of `rowdex status`.

use std::process::ExitCode;

use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use rowdex_index::{CacheEntry, CacheKey, cached_doc_count, entry_status, index_directory};

use crate::cli::{args::StatusCommand, context::CommandContext};

/// Shows the cache state for a dataset without building anything.
pub fn run(ctx: &CommandContext, cmd: &StatusCommand) -> ExitCode {
    let cache_root = match ctx.cache_root() {
        Ok(root) => root,
        Err(code) => return code,
    };

    let key = match CacheKey::compute(&cmd.file) {
        Ok(key) => key,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let dir = index_directory(&cache_root, &key);
    let entry = entry_status(&cache_root, &key);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.add_row(vec!["Dataset".to_string(), cmd.file.display().to_string()]);
    table.add_row(vec!["Path identity".to_string(), key.path_id().to_string()]);
    table.add_row(vec![
        "Content identity".to_string(),
        key.content_id().to_string(),
    ]);
    table.add_row(vec![
        "Cache directory".to_string(),
        dir.display().to_string(),
    ]);
    table.add_row(vec!["Entry".to_string(), entry.description().to_string()]);

    if entry == CacheEntry::Valid {
        let documents = match cached_doc_count(&cache_root, &key) {
            Ok(count) => count.to_string(),
            Err(e) => format!("unreadable: {e}"),
        };
        table.add_row(vec!["Documents".to_string(), documents]);
    }

    println!("{table}");
    ExitCode::SUCCESS
}
