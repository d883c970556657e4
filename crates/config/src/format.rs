use std::ffi::OsStr;
use std::fmt;
use std::path;
use std::str::FromStr;

use crate::Result;
use crate::SiteMetadata;
use crate::Status;

/// Serialization formats a site generator may read its data files in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Format {
    Yaml,
    Json,
    Toml,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Yaml, Format::Json, Format::Toml];

    /// Pick the format from a file's extension.
    pub fn from_path(path: &path::Path) -> Result<Self> {
        let ext = path.extension().unwrap_or_else(|| OsStr::new(""));
        if ext == OsStr::new("yml") || ext == OsStr::new("yaml") {
            Ok(Format::Yaml)
        } else if ext == OsStr::new("json") {
            Ok(Format::Json)
        } else if ext == OsStr::new("toml") {
            Ok(Format::Toml)
        } else {
            Err(Status::new(
                "Unknown metadata file type, supported extensions are: yml, yaml, json and toml",
            )
            .context_with(|c| c.insert("Path", path.display().to_string())))
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Format::Yaml => "yml",
            Format::Json => "json",
            Format::Toml => "toml",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Format::Yaml => "yaml",
            Format::Json => "json",
            Format::Toml => "toml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Status;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "yaml" | "yml" => Ok(Format::Yaml),
            "json" => Ok(Format::Json),
            "toml" => Ok(Format::Toml),
            _ => Err(Status::new("Unknown metadata format")
                .context_with(|c| c.insert("Format", s.to_owned()))),
        }
    }
}

impl SiteMetadata {
    pub fn to_string_as(&self, format: Format) -> Result<String> {
        let text = match format {
            Format::Yaml => serde_yaml::to_string(self)
                .map_err(|e| Status::new("Failed to serialize metadata").with_source(e))?,
            Format::Json => {
                let mut text = serde_json::to_string_pretty(self)
                    .map_err(|e| Status::new("Failed to serialize metadata").with_source(e))?;
                text.push('\n');
                text
            }
            Format::Toml => toml::to_string(self)
                .map_err(|e| Status::new("Failed to serialize metadata").with_source(e))?,
        };
        log::trace!("Serialized metadata as {format}");
        Ok(text)
    }

    pub fn from_str_as(text: &str, format: Format) -> Result<Self> {
        let metadata = match format {
            Format::Yaml => serde_yaml::from_str(text)
                .map_err(|e| Status::new("Failed to parse metadata").with_source(e))?,
            Format::Json => serde_json::from_str(text)
                .map_err(|e| Status::new("Failed to parse metadata").with_source(e))?,
            Format::Toml => toml::from_str(text)
                .map_err(|e| Status::new("Failed to parse metadata").with_source(e))?,
        };
        Ok(metadata)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn keys(value: &serde_json::Value) -> Vec<String> {
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    #[test]
    fn from_path_by_extension() {
        assert_eq!(
            Format::from_path(path::Path::new("_data/metadata.yaml")).unwrap(),
            Format::Yaml
        );
        assert_eq!(
            Format::from_path(path::Path::new("metadata.json")).unwrap(),
            Format::Json
        );
        assert_eq!(
            Format::from_path(path::Path::new("metadata.toml")).unwrap(),
            Format::Toml
        );
        assert!(Format::from_path(path::Path::new("metadata.js")).is_err());
        assert!(Format::from_path(path::Path::new("metadata")).is_err());
    }

    #[test]
    fn parse_format_name() {
        assert_eq!("yml".parse::<Format>().unwrap(), Format::Yaml);
        assert_eq!(Format::Toml.to_string(), "toml");
        assert!("ini".parse::<Format>().is_err());
    }

    #[test]
    fn round_trip_every_format() {
        let metadata = crate::builtin();
        for format in Format::ALL {
            let text = metadata.to_string_as(format).unwrap();
            let actual = SiteMetadata::from_str_as(&text, format).unwrap();
            assert_eq!(actual, metadata, "{format}");
        }
    }

    #[test]
    fn json_keeps_nesting_and_keys() {
        let text = crate::builtin().to_string_as(Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            keys(&value),
            ["author", "description", "language", "social", "title", "url"]
        );
        assert_eq!(keys(&value["author"]), ["email", "name", "url"]);
        assert_eq!(
            keys(&value["social"]),
            ["bluesky", "github", "linkedin", "x"]
        );
        assert_eq!(value["title"], "slinkydeveloper");
        assert_eq!(
            value["social"]["github"],
            "https://github.com/slinkydeveloper"
        );
    }

    #[test]
    fn toml_keeps_tables() {
        let text = crate::builtin().to_string_as(Format::Toml).unwrap();
        assert!(text.contains("[author]"));
        assert!(text.contains("[social]"));
    }

    #[test]
    fn invalid_text_is_error() {
        let result = SiteMetadata::from_str_as("{ not json", Format::Json);
        assert!(result.is_err());
    }
}
