//! Load the site metadata and hand it to a static site generator.

mod export;

pub use export::*;
pub use sitemeta_config as config;
pub use sitemeta_config::SiteMetadata;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
