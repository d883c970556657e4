use std::collections::BTreeMap;
use std::fmt;

/// Everything a template needs to know about the site and who writes it.
///
/// Loaded once at startup and read-only afterwards: fields are private and
/// only exposed through accessors.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteMetadata {
    title: String,
    url: String,
    language: String,
    description: String,
    author: Author,
    #[serde(default)]
    social: Social,
}

impl SiteMetadata {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        language: impl Into<String>,
        description: impl Into<String>,
        author: Author,
        social: Social,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            language: language.into(),
            description: description.into(),
            author,
            social,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Canonical, absolute URL of the site.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn social(&self) -> &Social {
        &self.social
    }
}

impl fmt::Display for SiteMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", converted.trim_end())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Author {
    name: String,
    email: String,
    url: String,
}

impl Author {
    pub fn new(name: impl Into<String>, email: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            url: url.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Profile page of the author.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Profile links keyed by platform name (`github`, `x`, ...).
///
/// The set of platforms is open-ended. Entries are kept sorted by platform so
/// serialized output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Social(BTreeMap<String, String>);

impl Social {
    pub fn get(&self, platform: &str) -> Option<&str> {
        self.0.get(platform).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Social {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
