//! Building the distributable plugin package.
//!
//! Structure:
//! - `layout` - fixed names and derived paths
//! - `staging` - output directory reset
//! - `resources` - `.typ` sources, metadata files, and the example image
//!
//! [`build`] runs the steps strictly in order and stops at the first failure.
//! Nothing already done is rolled back.

pub mod layout;
pub mod resources;
pub mod staging;

use anyhow::Result;
use std::path::PathBuf;
use std::process::Command;
use tracing::info;

use crate::util::process::run_cmd;
use layout::{PackageLayout, COMPILED_ARTIFACT, TARGET_TRIPLE};

/// The two external tools the package build drives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toolchain {
    pub compiler: PathBuf,
    pub optimizer: PathBuf,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            compiler: PathBuf::from("cargo"),
            optimizer: PathBuf::from("wasm-opt"),
        }
    }
}

impl Toolchain {
    /// `cargo b -r --target wasm32-unknown-unknown`, run from the project root.
    pub fn compile_command(&self, layout: &PackageLayout) -> Command {
        let mut cmd = Command::new(&self.compiler);
        cmd.current_dir(layout.project_root())
            .args(["b", "-r", "--target", TARGET_TRIPLE]);
        cmd
    }

    /// `wasm-opt -Oz <compiled> -o <out>/icu-datetime.wasm`.
    pub fn optimize_command(&self, layout: &PackageLayout) -> Command {
        let mut cmd = Command::new(&self.optimizer);
        cmd.current_dir(layout.project_root())
            .arg("-Oz")
            .arg(layout.compiled_artifact())
            .arg("-o")
            .arg(layout.packaged_binary());
        cmd
    }
}

/// Compile, reset the output directory, optimize, then copy resources.
pub fn build(layout: &PackageLayout, tools: &Toolchain) -> Result<()> {
    info!("Building {COMPILED_ARTIFACT} for {TARGET_TRIPLE}...");
    run_cmd(&mut tools.compile_command(layout))?;

    staging::reset(layout)?;

    info!("Optimizing into {}...", layout.packaged_binary().display());
    run_cmd(&mut tools.optimize_command(layout))?;

    let copied = resources::collect(layout)?;
    info!(
        "✅ Package assembled at {} ({} project files + example image)",
        layout.out_dir().display(),
        copied.len()
    );
    Ok(())
}
