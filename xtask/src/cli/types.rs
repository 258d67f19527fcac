use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::package::layout::DEFAULT_OUT_DIR;
use crate::package::Toolchain;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "icu-typ developer tasks (build and package the Typst plugin)")]
pub struct Cli {
    /// Log every spawned command and copied file.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(
        long = "project-root",
        global = true,
        help = "Plugin project to package. Defaults to the directory containing the xtask crate."
    )]
    pub project_root: Option<PathBuf>,

    #[arg(
        long = "out-dir",
        global = true,
        default_value = DEFAULT_OUT_DIR,
        help = "Package output directory. Relative paths resolve against the project root. Wiped on every build."
    )]
    pub out_dir: PathBuf,

    /// Defaults to `dist` when omitted.
    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Compile the plugin to wasm, shrink it with wasm-opt, and assemble the package directory.
    Dist {
        #[command(flatten)]
        tools: ToolArgs,
    },

    /// Check that the compiler, optimizer, and package inputs are available.
    Doctor {
        #[command(flatten)]
        tools: ToolArgs,
    },

    /// Remove the package output directory.
    Clean,
}

impl Default for Cmd {
    fn default() -> Self {
        Self::Dist {
            tools: ToolArgs::default(),
        }
    }
}

#[derive(Args, Clone, Debug)]
pub struct ToolArgs {
    /// Compiler invoked as `<cargo> b -r --target wasm32-unknown-unknown`.
    #[arg(long = "cargo", default_value_os_t = Toolchain::default().compiler)]
    pub cargo: PathBuf,

    /// Optimizer invoked as `<wasm-opt> -Oz <input> -o <output>`.
    #[arg(long = "wasm-opt", default_value_os_t = Toolchain::default().optimizer)]
    pub wasm_opt: PathBuf,
}

impl Default for ToolArgs {
    fn default() -> Self {
        let tools = Toolchain::default();
        Self {
            cargo: tools.compiler,
            wasm_opt: tools.optimizer,
        }
    }
}

impl From<ToolArgs> for Toolchain {
    fn from(args: ToolArgs) -> Self {
        Self {
            compiler: args.cargo,
            optimizer: args.wasm_opt,
        }
    }
}
