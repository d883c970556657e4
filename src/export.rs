use std::fs;
use std::io::Write as _;
use std::path;

use sitemeta_config::Format;
use sitemeta_config::METADATA_STEM;
use sitemeta_config::SiteMetadata;

use crate::Result;
use crate::Status;

/// Write `metadata` as `<dest_dir>/metadata.<ext>` for a site generator to pick up.
///
/// Returns the path of the written file.
pub fn export<P: AsRef<path::Path>>(
    metadata: &SiteMetadata,
    dest_dir: P,
    format: Format,
) -> Result<path::PathBuf> {
    let dest_file = dest_dir
        .as_ref()
        .join(METADATA_STEM)
        .with_extension(format.extension());
    let content = metadata.to_string_as(format)?;
    write_file(&content, &dest_file)?;
    Ok(dest_file)
}

fn write_file(content: &str, dest_file: &path::Path) -> Result<()> {
    // create target directories if any exist
    if let Some(parent) = dest_file.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            Status::new("Could not create directory")
                .with_source(e)
                .context_with(|c| c.insert("Path", parent.display().to_string()))
        })?;
    }

    let mut file = fs::File::create(dest_file).map_err(|e| {
        Status::new("Could not create file")
            .with_source(e)
            .context_with(|c| c.insert("Path", dest_file.display().to_string()))
    })?;
    file.write_all(content.as_bytes()).map_err(|e| {
        Status::new("Could not write file")
            .with_source(e)
            .context_with(|c| c.insert("Path", dest_file.display().to_string()))
    })?;
    log::trace!("Wrote {}", dest_file.display());
    Ok(())
}
