use crate::Result;
use crate::SiteMetadata;
use crate::Status;

impl SiteMetadata {
    /// Check that links are absolute `http(s)` URLs and required text is present.
    ///
    /// Loading never calls this; a record that fails here still loads.
    pub fn validate(&self) -> Result<()> {
        check_not_empty("title", self.title())?;
        check_not_empty("language", self.language())?;
        check_url("url", self.url())?;
        check_not_empty("author.name", self.author().name())?;
        check_email("author.email", self.author().email())?;
        check_url("author.url", self.author().url())?;
        for (platform, url) in self.social().iter() {
            check_url(&format!("social.{platform}"), url)?;
        }
        Ok(())
    }
}

fn check_not_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Status::new("Field must not be empty")
            .context_with(|c| c.insert("Field", field.to_owned())));
    }
    Ok(())
}

fn check_url(field: &str, value: &str) -> Result<()> {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    let host = rest
        .map(|rest| rest.split(['/', '?', '#']).next().unwrap_or(""))
        .unwrap_or("");
    if host.is_empty() || host.contains(char::is_whitespace) {
        return Err(Status::new("Expected an absolute http(s) URL").context_with(|c| {
            c.insert("Field", field.to_owned())
                .insert("Value", value.to_owned())
        }));
    }
    Ok(())
}

fn check_email(field: &str, value: &str) -> Result<()> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    };
    if !valid {
        return Err(Status::new("Expected an email address").context_with(|c| {
            c.insert("Field", field.to_owned())
                .insert("Value", value.to_owned())
        }));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builtin_is_valid() {
        crate::builtin().validate().unwrap();
    }

    #[test]
    fn invalid_urls_still_load() {
        let metadata = SiteMetadata::from_file("tests/fixtures/invalid_urls.yml").unwrap();
        assert!(metadata.validate().is_err());
    }

    #[test]
    fn url_checks() {
        assert!(check_url("url", "https://example.com/").is_ok());
        assert!(check_url("url", "http://example.com").is_ok());
        assert!(check_url("url", "example.com").is_err());
        assert!(check_url("url", "https:///path").is_err());
        assert!(check_url("url", "ftp://example.com/").is_err());
    }

    #[test]
    fn email_checks() {
        assert!(check_email("email", "me@example.com").is_ok());
        assert!(check_email("email", "me.example.com").is_err());
        assert!(check_email("email", "@example.com").is_err());
        assert!(check_email("email", "a@b@c").is_err());
    }

    #[test]
    fn social_url_is_checked() {
        let metadata = SiteMetadata::new(
            "t",
            "https://example.com/",
            "en",
            "d",
            crate::Author::new("n", "n@example.com", "https://example.com/me/"),
            [("github", "github.com/me")].into_iter().collect(),
        );
        assert!(metadata.validate().is_err());
    }
}
