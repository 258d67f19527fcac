use anyhow::Result;
use clap::Parser;

mod app;
mod cli;
mod logging;
mod package;
mod tasks;
#[cfg(test)]
mod test;
mod util;

fn main() -> Result<()> {
    let cli = crate::cli::Cli::parse();
    crate::logging::init(cli.verbose);
    crate::app::run(cli)
}
