use sitemeta::config::Format;

use crate::args;
use crate::error::Result;

/// Print metadata debug information
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints the loaded metadata
    Config {
        /// Output format: yaml, json or toml
        #[arg(short, long, default_value = "yaml")]
        format: Format,

        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },

    /// Prints one `platform: url` line per social profile
    Social {
        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },
}

impl DebugCommands {
    pub(crate) fn run(&self) -> Result<()> {
        match self {
            Self::Config { format, config } => {
                let metadata = config.load_metadata()?;
                print!("{}", metadata.to_string_as(*format)?);
            }
            Self::Social { config } => {
                let metadata = config.load_metadata()?;
                for (platform, url) in metadata.social().iter() {
                    println!("{platform}: {url}");
                }
            }
        }

        Ok(())
    }
}
