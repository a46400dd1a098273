//! Recursive copy of the template tree into a destination root.

use crate::error::Result;
use crate::filter::PathFilter;
use filetime::FileTime;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Aggregate outcome of a bulk copy. Individual failures never abort the
/// walk; they are collected here so the orchestrator can surface one
/// warning listing every entry that was lost.
#[derive(Debug, Default)]
pub struct CopyReport {
    pub files_copied: usize,
    pub failures: Vec<CopyFailure>,
}

#[derive(Debug)]
pub struct CopyFailure {
    pub path: PathBuf,
    pub reason: String,
}

impl CopyReport {
    fn record_failure(&mut self, path: PathBuf, reason: String) {
        self.failures.push(CopyFailure { path, reason });
    }
}

/// Copies `src` into `dst`, creating `dst` if absent, applying the path
/// filter to skip excluded directories and files, and preserving file
/// modification times. Returns a report of copied files and failed entries;
/// only a destination root that cannot be created at all is fatal.
///
/// The destination subtree is pruned from the walk when `dst` lies inside
/// `src`, so a nested destination never copies into itself. In-place runs
/// never reach this function; the orchestrator skips the copy stage.
pub fn copy_tree(src: &Path, dst: &Path, filter: &PathFilter) -> Result<CopyReport> {
    fs::create_dir_all(dst)?;
    let src = src.canonicalize()?;
    let dst = dst.canonicalize()?;

    let mut report = CopyReport::default();
    let walker = WalkDir::new(&src)
        .into_iter()
        .filter_entry(|entry| entry.path() != dst && filter.keep_entry(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path =
                    e.path().map(Path::to_path_buf).unwrap_or_else(|| src.to_path_buf());
                report.record_failure(path, e.to_string());
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }

        let relative = match entry.path().strip_prefix(&src) {
            Ok(relative) => relative,
            Err(e) => {
                report.record_failure(entry.path().to_path_buf(), e.to_string());
                continue;
            }
        };
        let target = dst.join(relative);

        let file_type = entry.file_type();
        if file_type.is_dir() {
            if let Err(e) = fs::create_dir_all(&target) {
                report.record_failure(target, e.to_string());
            }
        } else if file_type.is_file() {
            copy_entry(entry.path(), &target, &mut report);
        } else if file_type.is_symlink() && entry.path().is_file() {
            // Symlinked files are materialized as regular copies of their
            // target content; symlinks to directories are dropped.
            copy_entry(entry.path(), &target, &mut report);
        } else {
            debug!("Skipping special entry: {}", entry.path().display());
        }
    }

    Ok(report)
}

fn copy_entry(source: &Path, target: &Path, report: &mut CopyReport) {
    match copy_file_with_times(source, target) {
        Ok(()) => {
            debug!("Copied: {}", target.display());
            report.files_copied += 1;
        }
        Err(e) => report.record_failure(source.to_path_buf(), e.to_string()),
    }
}

/// Copies one file and carries over its access and modification times.
fn copy_file_with_times(source: &Path, target: &Path) -> std::io::Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(source, target)?;

    let metadata = fs::metadata(source)?;
    let accessed = FileTime::from_last_access_time(&metadata);
    let modified = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_times(target, accessed, modified)?;
    Ok(())
}
