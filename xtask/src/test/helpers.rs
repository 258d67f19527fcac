use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tempfile::TempDir;

use crate::package::layout::PackageLayout;
use crate::package::Toolchain;

static EXCLUSIVE: Mutex<()> = Mutex::new(());

/// Serialize tests that spawn processes or write executables.
///
/// A script being written while another thread forks can fail to exec with
/// ETXTBSY, so the two never overlap.
pub fn exclusive() -> MutexGuard<'static, ()> {
    EXCLUSIVE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A throwaway plugin project plus a `bin/` directory for fake tools.
pub struct Project {
    tmp: TempDir,
    _guard: MutexGuard<'static, ()>,
}

impl Project {
    /// An empty project.
    pub fn new() -> Self {
        let guard = exclusive();
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("project")).unwrap();
        fs::create_dir(tmp.path().join("bin")).unwrap();
        Self { tmp, _guard: guard }
    }

    /// A project shaped like icu-typ: sources, metadata, and the example image.
    pub fn plugin() -> Self {
        let project = Self::new();
        project.file("Cargo.toml", "[package]\nname = \"icu-typ\"\n");
        project.file("lib.typ", "#let plugin = plugin(\"icu-datetime.wasm\")\n");
        project.file("typst.toml", "[package]\nname = \"icu-datetime\"\n");
        project.file("README.md", "# icu-datetime\n");
        project.file("LICENSE", "MIT\n");
        project.file("res/example.png", "\u{89}PNG");
        project
    }

    pub fn root(&self) -> PathBuf {
        self.tmp.path().join("project")
    }

    pub fn layout(&self) -> PackageLayout {
        PackageLayout::new(self.root(), Path::new("build"))
    }

    pub fn file(&self, rel: &str, contents: &str) {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    pub fn dir(&self, rel: &str) {
        fs::create_dir_all(self.root().join(rel)).unwrap();
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.root().join(rel)).unwrap()
    }

    /// Write an executable `sh` script into `bin/`.
    #[cfg(unix)]
    pub fn script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.tmp.path().join("bin").join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// Fake cargo and wasm-opt that behave like the real ones on success.
    ///
    /// Both record their arguments in the project root.
    #[cfg(unix)]
    pub fn toolchain(&self) -> Toolchain {
        let compiler = self.script(
            "cargo",
            "echo \"$@\" > compiler.args\n\
             mkdir -p target/wasm32-unknown-unknown/release\n\
             printf 'wasm plugin' > target/wasm32-unknown-unknown/release/icu_typ.wasm",
        );
        let optimizer = self.script(
            "wasm-opt",
            "echo \"$@\" > optimizer.args\n\
             { printf 'optimized:'; cat \"$2\"; } > \"$4\"",
        );
        Toolchain {
            compiler,
            optimizer,
        }
    }
}
