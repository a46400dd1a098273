//! Path exclusion policy for template trees.
//! Compiles the static sets of excluded directory and file names into glob
//! sets and exposes the predicates used by both the tree copier and the
//! substitution engine, so excluded paths are never copied and never
//! rewritten.

use crate::constants::{EXCLUDE_DIRS, EXCLUDE_FILES};
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;
use walkdir::DirEntry;

/// Hidden-directory convention: any directory whose name begins with a dot
/// is skipped unless it is the walk root itself. Hidden files (for example
/// `.env.example`) are not affected.
const HIDDEN_DIR_PATTERN: &str = ".*";

/// Decides whether a path participates in copying and substitution.
///
/// The same filter instance is handed to both walks; this dual use is what
/// keeps the tool's own entry points and build artifacts untouched when the
/// template operates on itself.
pub struct PathFilter {
    dirs: GlobSet,
    files: GlobSet,
}

impl PathFilter {
    /// Builds the filter from the static exclusion policy.
    pub fn new() -> Result<Self> {
        Self::with_policy(&EXCLUDE_DIRS, &EXCLUDE_FILES)
    }

    /// Builds a filter from explicit directory and file name sets.
    ///
    /// # Errors
    /// * `Error::PatternError` if a name does not compile as a glob
    pub fn with_policy(dirs: &[&str], files: &[&str]) -> Result<Self> {
        let mut dir_builder = GlobSetBuilder::new();
        for name in dirs {
            dir_builder.add(compile_pattern(name)?);
        }
        dir_builder.add(compile_pattern(HIDDEN_DIR_PATTERN)?);

        let mut file_builder = GlobSetBuilder::new();
        for name in files {
            file_builder.add(compile_pattern(name)?);
        }

        Ok(Self {
            dirs: build_set(dir_builder)?,
            files: build_set(file_builder)?,
        })
    }

    /// Whether a directory with this name is pruned from traversal.
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.dirs.is_match(name)
    }

    /// Whether a file with this name is skipped by copy and substitution.
    pub fn is_excluded_file(&self, name: &str) -> bool {
        self.files.is_match(name)
    }

    /// Whether `path` is excluded relative to `root`: true when any ancestor
    /// component is an excluded directory, or the final component is an
    /// excluded file name.
    pub fn is_excluded(&self, path: &Path, root: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        let mut components = relative.components().peekable();
        while let Some(component) = components.next() {
            let name = component.as_os_str().to_string_lossy();
            if components.peek().is_some() {
                if self.is_excluded_dir(&name) {
                    return true;
                }
            } else if self.is_excluded_file(&name) {
                return true;
            }
        }
        false
    }

    /// Predicate for `walkdir`'s `filter_entry`: evaluated before descending
    /// into each directory, so traversal itself stays free of side effects.
    /// The walk root (depth 0) is always kept.
    pub fn keep_entry(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        if entry.file_type().is_dir() {
            !self.is_excluded_dir(&name)
        } else {
            !self.is_excluded_file(&name)
        }
    }
}

fn compile_pattern(name: &str) -> Result<Glob> {
    Glob::new(name)
        .map_err(|e| Error::PatternError(format!("exclusion policy loading failed: {}", e)))
}

fn build_set(builder: GlobSetBuilder) -> Result<GlobSet> {
    builder
        .build()
        .map_err(|e| Error::PatternError(format!("exclusion policy loading failed: {}", e)))
}
