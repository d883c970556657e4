use std::path;

use crate::Format;
use crate::Result;
use crate::SiteMetadata;
use crate::Status;

/// Directory, relative to the project root, holding the metadata file.
pub const DATA_DIR: &str = "_data";

/// Name of the metadata file inside [`DATA_DIR`], without extension.
pub const METADATA_STEM: &str = "metadata";

const EXTENSIONS: [&str; 4] = ["yml", "yaml", "json", "toml"];

impl SiteMetadata {
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<SiteMetadata> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<SiteMetadata> {
        let format = Format::from_path(&path)?;
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read metadata")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        if content.trim().is_empty() {
            return Err(Status::new("Metadata file is empty")
                .context_with(|c| c.insert("Path", path.display().to_string())));
        }

        let metadata = Self::from_str_as(&content, format)
            .map_err(|e| e.context_with(|c| c.insert("Path", path.display().to_string())))?;
        Ok(metadata)
    }

    /// Look for `_data/metadata.*` in `cwd` or its ancestors, falling back to
    /// [`crate::builtin`].
    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<SiteMetadata> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<SiteMetadata> {
        let file_path = find_metadata_file(cwd);
        let metadata = file_path
            .map(|p| {
                log::debug!("Using metadata file `{}`", p.display());
                Self::from_file(&p)
            })
            .unwrap_or_else(|| {
                log::warn!("No {DATA_DIR}/{METADATA_STEM} file found, using built-in metadata.");
                Ok(crate::builtin())
            })?;
        Ok(metadata)
    }
}

/// Find the nearest metadata file, trying each supported extension per directory.
pub fn find_metadata_file<P: Into<path::PathBuf>>(dir: P) -> Option<path::PathBuf> {
    find_metadata_file_internal(dir.into())
}

fn find_metadata_file_internal(dir: path::PathBuf) -> Option<path::PathBuf> {
    let mut dir = dir;
    loop {
        let data_dir = dir.join(DATA_DIR);
        for ext in EXTENSIONS {
            let candidate = data_dir.join(METADATA_STEM).with_extension(ext);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        let hit_bottom = !dir.pop();
        if hit_bottom {
            return None;
        }
    }
}
