use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// The plugin project this xtask ships with.
pub fn repo_root() -> Result<PathBuf> {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask is expected at <project>/xtask")
}

/// Pick the explicit `--project-root` if given, otherwise the xtask's own project.
///
/// The result is absolute so every later step can run without relying on the
/// process working directory.
pub fn resolve_project_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let root = match explicit {
        Some(root) => root,
        None => repo_root()?,
    };

    let root = root
        .canonicalize()
        .with_context(|| format!("Resolving project root {}", root.display()))?;
    if !root.is_dir() {
        bail!("Project root is not a directory: {}", root.display());
    }
    Ok(root)
}
