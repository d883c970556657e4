use std::env;
use std::io::Write as _;
use std::path;

use anyhow::Context as _;
use sitemeta::SiteMetadata;

use crate::error::Result;

/// Site metadata for static site generators
#[derive(Debug, clap::Parser)]
#[command(name = "sitemeta", version, about)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,

    #[command(flatten)]
    pub(crate) verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,

    #[command(flatten)]
    pub(crate) color: colorchoice_clap::Color,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum Command {
    Export(crate::export::ExportArgs),
    Check(crate::check::CheckArgs),
    #[command(subcommand)]
    Debug(crate::debug::DebugCommands),
}

impl Command {
    pub(crate) fn run(&self) -> Result<()> {
        match self {
            Self::Export(cmd) => cmd.run(),
            Self::Check(cmd) => cmd.run(),
            Self::Debug(cmd) => cmd.run(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Metadata file to use [default: nearest _data/metadata.*]
    #[arg(short, long, value_name = "FILE")]
    pub(crate) config: Option<path::PathBuf>,

    /// Ignore metadata files and use the built-in record
    #[arg(long, conflicts_with = "config")]
    pub(crate) builtin: bool,
}

impl ConfigArgs {
    pub(crate) fn load_metadata(&self) -> Result<SiteMetadata> {
        let metadata = if self.builtin {
            log::debug!("Using built-in metadata");
            sitemeta::config::builtin()
        } else if let Some(config_path) = self.config.as_deref() {
            SiteMetadata::from_file(config_path).with_context(|| {
                format!("Error reading metadata file {}", config_path.display())
            })?
        } else {
            let cwd = env::current_dir().unwrap_or_else(|_| path::PathBuf::from("."));
            SiteMetadata::from_cwd(cwd)?
        };
        log::trace!("Loaded metadata:\n{metadata}");
        Ok(metadata)
    }
}

pub(crate) fn init_logging(
    verbose: &clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(verbose.log_level_filter());
    builder.format(|buf, record| {
        let level = format!("[{}]", record.level()).to_lowercase();
        writeln!(buf, "{:8} {}", level, record.args())
    });
    builder.init();
}

#[cfg(test)]
mod test {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn verify_app() {
        Cli::command().debug_assert();
    }
}
