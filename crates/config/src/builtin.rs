use crate::Author;
use crate::SiteMetadata;
use crate::Social;

/// The metadata of slinkydeveloper.com.
pub fn builtin() -> SiteMetadata {
    SiteMetadata::new(
        "slinkydeveloper",
        "https://slinkydeveloper.com/",
        "en",
        "Developer experience, distributed systems, and other fairy tales.",
        Author::new(
            "Francesco Guardiani",
            "me@slinkydeveloper.com",
            "https://slinkydeveloper.com/about-me/",
        ),
        [
            ("github", "https://github.com/slinkydeveloper"),
            (
                "bluesky",
                "https://bsky.app/profile/slinkydeveloper.bsky.social",
            ),
            ("x", "https://x.com/slinkydeveloper"),
            (
                "linkedin",
                "https://www.linkedin.com/in/francesco-guardiani/",
            ),
        ]
        .into_iter()
        .collect::<Social>(),
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builtin_values() {
        let metadata = builtin();
        assert_eq!(metadata.title(), "slinkydeveloper");
        assert_eq!(metadata.url(), "https://slinkydeveloper.com/");
        assert_eq!(metadata.language(), "en");
        assert_eq!(metadata.author().name(), "Francesco Guardiani");
        assert_eq!(metadata.author().email(), "me@slinkydeveloper.com");
        assert_eq!(
            metadata.social().get("github"),
            Some("https://github.com/slinkydeveloper")
        );
        assert_eq!(metadata.social().len(), 4);
    }

    #[test]
    fn builtin_matches_fixture() {
        let fixture = SiteMetadata::from_file("tests/fixtures/metadata.yml").unwrap();
        assert_eq!(fixture, builtin());
    }
}
