use crate::args;
use crate::error::Result;

/// Check that the metadata links and contact details are well-formed
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct CheckArgs {
    #[command(flatten, next_help_heading = "CONFIG")]
    pub(crate) config: args::ConfigArgs,
}

impl CheckArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let metadata = self.config.load_metadata()?;
        metadata.validate()?;
        log::info!("Metadata for `{}` is valid", metadata.title());
        Ok(())
    }
}
