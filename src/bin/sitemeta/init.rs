use std::path;

use anyhow::Context as _;

/// Write a starter `_site.yml`
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct InitArgs {
    /// Target directory
    #[arg(default_value = "./")]
    pub(crate) directory: path::PathBuf,
}

impl InitArgs {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let file = sitemeta::create_new_project(&self.directory)
            .context("Could not create a new site config")?;
        log::info!("Created new site config at {}", file.display());

        Ok(())
    }
}
