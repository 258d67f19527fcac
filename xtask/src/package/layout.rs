//! Every fixed name and path of the plugin package.
//!
//! ```text
//! <out>/
//!   icu-datetime.wasm
//!   res/example.png
//!   *.typ
//!   typst.toml, README.md, LICENSE   (when present)
//! ```

use std::path::{Component, Path, PathBuf};

/// Portable target the plugin is compiled for.
pub const TARGET_TRIPLE: &str = "wasm32-unknown-unknown";
/// File cargo writes for the `icu_typ` cdylib.
pub const COMPILED_ARTIFACT: &str = "icu_typ.wasm";
/// Name of the optimized binary inside the package.
pub const PACKAGED_BINARY: &str = "icu-datetime.wasm";
pub const RESOURCE_DIR: &str = "res";
pub const EXAMPLE_IMAGE: &str = "example.png";
pub const DEFAULT_OUT_DIR: &str = "build";

/// Project-root files ending with this are shipped.
pub const SOURCE_SUFFIX: &str = ".typ";
/// Project-root files shipped by exact name.
pub const INCLUDED_FILES: [&str; 3] = ["typst.toml", "README.md", "LICENSE"];

/// Whether a project-root file with this name belongs in the package.
pub fn is_packaged_file(name: &str) -> bool {
    name.ends_with(SOURCE_SUFFIX) || INCLUDED_FILES.contains(&name)
}

/// Paths derived from a project root and an output directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageLayout {
    project_root: PathBuf,
    out_dir: PathBuf,
}

impl PackageLayout {
    /// A relative `out_dir` is taken relative to `project_root`. `.` and `..`
    /// components of `out_dir` are folded away lexically.
    pub fn new(project_root: impl Into<PathBuf>, out_dir: &Path) -> Self {
        let project_root = project_root.into();
        let out_dir = if out_dir.is_absolute() {
            normalize(out_dir)
        } else {
            normalize(&project_root.join(out_dir))
        };
        Self {
            project_root,
            out_dir,
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Where cargo leaves the release wasm for [`TARGET_TRIPLE`].
    pub fn compiled_artifact(&self) -> PathBuf {
        self.project_root
            .join("target")
            .join(TARGET_TRIPLE)
            .join("release")
            .join(COMPILED_ARTIFACT)
    }

    pub fn packaged_binary(&self) -> PathBuf {
        self.out_dir.join(PACKAGED_BINARY)
    }

    pub fn out_resource_dir(&self) -> PathBuf {
        self.out_dir.join(RESOURCE_DIR)
    }

    pub fn example_image_source(&self) -> PathBuf {
        self.project_root.join(RESOURCE_DIR).join(EXAMPLE_IMAGE)
    }

    pub fn example_image_dest(&self) -> PathBuf {
        self.out_resource_dir().join(EXAMPLE_IMAGE)
    }

    /// True when wiping the output directory would also wipe the project.
    pub fn out_dir_contains_project(&self) -> bool {
        self.project_root.starts_with(&self.out_dir)
    }
}

/// Drop `.` and resolve `..` against the preceding component, without
/// touching the filesystem. `..` at the root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() && !out.has_root() {
                    out.push(component);
                }
            }
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                out.push(component);
            }
        }
    }
    out
}
