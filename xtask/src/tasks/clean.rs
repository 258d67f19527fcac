use anyhow::Result;
use tracing::info;

use crate::package::layout::PackageLayout;
use crate::package::staging;

pub fn run(layout: &PackageLayout) -> Result<()> {
    staging::ensure_disposable(layout)?;

    let out = layout.out_dir();
    if staging::remove_dir_if_present(out)? {
        info!("🧹 Removed {}", out.display());
    } else {
        info!("Nothing to clean at {}", out.display());
    }
    Ok(())
}
