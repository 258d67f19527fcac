//! Resetting the package output directory.

use anyhow::{bail, Context, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

use super::layout::PackageLayout;

/// Remove `dir` recursively.
///
/// Returns `Ok(false)` when it did not exist. Every other failure (permissions,
/// a file in the way, ...) is an error.
pub fn remove_dir_if_present(dir: &Path) -> Result<bool> {
    match fs::remove_dir_all(dir) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("Removing {}", dir.display())),
    }
}

/// Refuse output directories that would take the project down with them.
pub fn ensure_disposable(layout: &PackageLayout) -> Result<()> {
    if layout.out_dir_contains_project() {
        bail!(
            "Refusing to use {} as the output directory: it contains the project root {}",
            layout.out_dir().display(),
            layout.project_root().display()
        );
    }
    Ok(())
}

/// Recreate an empty output directory with its resource subdirectory.
pub fn reset(layout: &PackageLayout) -> Result<()> {
    ensure_disposable(layout)?;

    let out = layout.out_dir();
    if remove_dir_if_present(out)? {
        debug!(path = %out.display(), "removed previous output");
    }

    fs::create_dir_all(out).with_context(|| format!("Creating {}", out.display()))?;
    let res = layout.out_resource_dir();
    fs::create_dir(&res).with_context(|| format!("Creating {}", res.display()))?;
    Ok(())
}
