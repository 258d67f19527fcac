use anyhow::{bail, Result};

use crate::package::layout::PackageLayout;
use crate::package::Toolchain;

/// One preflight check and whether it passed.
#[derive(Debug)]
pub struct Finding {
    pub ok: bool,
    pub what: String,
}

impl Finding {
    fn new(ok: bool, what: impl Into<String>) -> Self {
        Self {
            ok,
            what: what.into(),
        }
    }
}

/// Everything `dist` needs before it can succeed. Reads only.
pub fn findings(layout: &PackageLayout, tools: &Toolchain) -> Vec<Finding> {
    let mut out = Vec::new();

    for (role, program) in [("compiler", &tools.compiler), ("optimizer", &tools.optimizer)] {
        match which::which(program) {
            Ok(path) => out.push(Finding::new(true, format!("{role}: {}", path.display()))),
            Err(_) => out.push(Finding::new(
                false,
                format!("missing {role} `{}` in PATH", program.display()),
            )),
        }
    }

    let manifest = layout.project_root().join("Cargo.toml");
    if manifest.is_file() {
        out.push(Finding::new(true, manifest.display().to_string()));
    } else {
        out.push(Finding::new(
            false,
            format!("missing manifest: {}", manifest.display()),
        ));
    }

    let example = layout.example_image_source();
    if example.is_file() {
        out.push(Finding::new(true, example.display().to_string()));
    } else {
        out.push(Finding::new(
            false,
            format!("missing example resource: {}", example.display()),
        ));
    }

    if layout.out_dir_contains_project() {
        out.push(Finding::new(
            false,
            format!(
                "output directory {} contains the project root",
                layout.out_dir().display()
            ),
        ));
    }

    out
}

pub fn run(layout: &PackageLayout, tools: &Toolchain) -> Result<()> {
    let mut ok = true;
    for finding in findings(layout, tools) {
        if finding.ok {
            eprintln!("[OK] {}", finding.what);
        } else {
            eprintln!("[FAIL] {}", finding.what);
            ok = false;
        }
    }

    if !ok {
        bail!("doctor checks failed");
    }
    Ok(())
}
