use anyhow::{Context, Result};
use std::fs;
use tracing::debug;

use super::layout::{is_packaged_file, PackageLayout};

/// Names of the project-root files that go into the package, sorted.
///
/// Only regular files directly under the root are considered; directories
/// and symlinks are skipped, as are names that are not valid UTF-8 (they can
/// never match the suffix or the allow-list).
pub fn packaged_files(layout: &PackageLayout) -> Result<Vec<String>> {
    let root = layout.project_root();
    let mut names = Vec::new();

    for entry in fs::read_dir(root).with_context(|| format!("Reading {}", root.display()))? {
        let entry = entry.with_context(|| format!("Reading {}", root.display()))?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("Inspecting {}", entry.path().display()))?;
        if !file_type.is_file() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if is_packaged_file(&name) {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}

/// Copy the packaged root files and the example image into the output.
///
/// Expects the output directory to have been reset already. Returns the
/// root files that were copied.
pub fn collect(layout: &PackageLayout) -> Result<Vec<String>> {
    let names = packaged_files(layout)?;
    for name in &names {
        let src = layout.project_root().join(name);
        let dst = layout.out_dir().join(name);
        fs::copy(&src, &dst)
            .with_context(|| format!("Copying {} to {}", src.display(), dst.display()))?;
        debug!(file = %name, "copied");
    }

    let src = layout.example_image_source();
    let dst = layout.example_image_dest();
    fs::copy(&src, &dst).with_context(|| {
        format!(
            "Copying example resource {} to {}",
            src.display(),
            dst.display()
        )
    })?;

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::staging;
    use crate::test::helpers::Project;

    #[test]
    fn test_filters_root_entries() {
        let project = Project::new();
        project.file("lib.typ", "#let x = 1");
        project.file("docs.typ", "");
        project.file("typst.toml", "[package]");
        project.file("README.md", "# icu");
        project.file("Cargo.toml", "[package]");
        project.file("build.ts", "");
        project.dir("examples.typ");
        project.file("src/nested.typ", "");

        let names = packaged_files(&project.layout()).unwrap();
        assert_eq!(names, vec!["README.md", "docs.typ", "lib.typ", "typst.toml"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_skipped() {
        let project = Project::new();
        project.file("real.typ", "");
        std::os::unix::fs::symlink(project.root().join("real.typ"), project.root().join("link.typ"))
            .unwrap();

        assert_eq!(packaged_files(&project.layout()).unwrap(), vec!["real.typ"]);
    }

    #[test]
    fn test_collect_copies_files_and_example() {
        let project = Project::new();
        project.file("lib.typ", "#import \"x\"");
        project.file("LICENSE", "MIT");
        project.file("res/example.png", "png");
        let layout = project.layout();
        staging::reset(&layout).unwrap();

        let copied = collect(&layout).unwrap();

        assert_eq!(copied, vec!["LICENSE", "lib.typ"]);
        assert_eq!(fs::read_to_string(layout.out_dir().join("lib.typ")).unwrap(), "#import \"x\"");
        assert_eq!(fs::read_to_string(layout.out_dir().join("LICENSE")).unwrap(), "MIT");
        assert_eq!(fs::read_to_string(layout.example_image_dest()).unwrap(), "png");
    }

    #[test]
    fn test_missing_example_fails() {
        let project = Project::new();
        project.file("lib.typ", "");
        let layout = project.layout();
        staging::reset(&layout).unwrap();

        let err = collect(&layout).unwrap_err();
        assert!(err.to_string().contains("example resource"));
        assert!(!layout.example_image_dest().exists());
    }
}
