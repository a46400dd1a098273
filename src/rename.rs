//! Rename of the template's legacy backend package directory.

use crate::constants::{BACKEND_DIR, LEGACY_PROJECT_DIR};
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of the backend directory rename. The two no-op variants are
/// expected steady states, not failures.
#[derive(Debug, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The legacy directory was moved to the new name.
    Renamed { from: PathBuf, to: PathBuf },
    /// No legacy directory under the target root.
    LegacyMissing,
    /// A directory with the new name already exists, either from a prior
    /// run or because the chosen name equals the placeholder.
    TargetExists,
}

/// Renames `<root>/backend/myproject` to `<root>/backend/<new_name>`.
/// Repeated invocations settle on a no-op rather than an error.
pub fn rename_project_dir(root: &Path, new_name: &str) -> Result<RenameOutcome> {
    let legacy = root.join(BACKEND_DIR).join(LEGACY_PROJECT_DIR);
    let target = root.join(BACKEND_DIR).join(new_name);

    if !legacy.exists() {
        return Ok(RenameOutcome::LegacyMissing);
    }
    if target.exists() {
        return Ok(RenameOutcome::TargetExists);
    }

    fs::rename(&legacy, &target)?;
    Ok(RenameOutcome::Renamed {
        from: legacy,
        to: target,
    })
}
