use anyhow::Result;

use crate::cli::{Cli, Cmd};
use crate::package::layout::PackageLayout;

pub fn run(cli: Cli) -> Result<()> {
    let project_root = crate::util::repo::resolve_project_root(cli.project_root)?;
    let layout = PackageLayout::new(project_root, &cli.out_dir);

    match cli.cmd.unwrap_or_default() {
        Cmd::Dist { tools } => crate::package::build(&layout, &tools.into()),
        Cmd::Doctor { tools } => crate::tasks::doctor::run(&layout, &tools.into()),
        Cmd::Clean => crate::tasks::clean::run(&layout),
    }
}
