//! Placeholder substitution across a directory tree.
//! Walks the target root and rewrites every allow-listed text file with the
//! ordered replacement table. Replacements are literal substring swaps, not
//! patterns, and applying the same table twice is a byte-level no-op for
//! the canonical placeholder vocabulary.

use crate::constants::TEXT_EXTENSIONS;
use crate::filter::PathFilter;
use crate::naming::ReplacementTable;
use log::{debug, warn};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Whether a file name carries one of the suffixes eligible for rewriting.
/// Suffixes are matched against the whole name, so multi-part suffixes like
/// `.env.example` qualify where a plain extension check would not.
pub fn has_allowed_extension(name: &str) -> bool {
    TEXT_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Applies every table entry to `text` in order as a literal substring
/// replacement. Pure; the walk below feeds it file contents.
pub fn apply_replacements(text: &str, table: &ReplacementTable) -> String {
    let mut result = text.to_string();
    for (token, value) in table {
        result = result.replace(token.as_str(), value);
    }
    result
}

/// Walks `root` depth-first and rewrites every eligible file in place.
/// Read and write failures are logged and skipped, never fatal. Returns the
/// number of files processed.
pub fn process_tree(root: &Path, table: &ReplacementTable, filter: &PathFilter) -> usize {
    let mut processed = 0;
    let walker =
        WalkDir::new(root).into_iter().filter_entry(|entry| filter.keep_entry(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !has_allowed_extension(&name) {
            continue;
        }
        processed += 1;
        rewrite_file(entry.path(), table);
    }

    processed
}

/// Read-entire, replace, write-whole. Binary content fails the UTF-8 read
/// and leaves the file untouched.
fn rewrite_file(path: &Path, table: &ReplacementTable) {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!("Read failed: {}: {}", path.display(), e);
            return;
        }
    };
    let rewritten = apply_replacements(&text, table);
    match fs::write(path, rewritten) {
        Ok(()) => debug!("Rewrote: {}", path.display()),
        Err(e) => warn!("Write failed: {}: {}", path.display(), e),
    }
}
