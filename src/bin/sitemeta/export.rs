use std::path;

use sitemeta::config::Format;

use crate::args;
use crate::error::Result;

/// Write the metadata into a site generator's data directory
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ExportArgs {
    /// Data directory to write into
    #[arg(short, long, value_name = "DIR", default_value = "_data")]
    pub(crate) destination: path::PathBuf,

    /// Output format: yaml, json or toml
    #[arg(short, long, default_value = "json")]
    pub(crate) format: Format,

    #[command(flatten, next_help_heading = "CONFIG")]
    pub(crate) config: args::ConfigArgs,
}

impl ExportArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let metadata = self.config.load_metadata()?;
        let written = sitemeta::export(&metadata, &self.destination, self.format)?;
        log::info!("Exported metadata to `{}`", written.display());
        Ok(())
    }
}
