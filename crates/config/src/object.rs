use liquid_core::model::Object;
use liquid_core::model::Value;

use crate::SiteMetadata;

impl SiteMetadata {
    /// Expose the metadata to templates, e.g. `{{ metadata.author.name }}`.
    pub fn to_object(&self) -> Object {
        let mut author = Object::new();
        author.insert("name".into(), Value::scalar(self.author().name().to_owned()));
        author.insert(
            "email".into(),
            Value::scalar(self.author().email().to_owned()),
        );
        author.insert("url".into(), Value::scalar(self.author().url().to_owned()));

        let mut social = Object::new();
        for (platform, url) in self.social().iter() {
            social.insert(platform.to_owned().into(), Value::scalar(url.to_owned()));
        }

        let mut attributes = Object::new();
        attributes.insert("title".into(), Value::scalar(self.title().to_owned()));
        attributes.insert("url".into(), Value::scalar(self.url().to_owned()));
        attributes.insert("language".into(), Value::scalar(self.language().to_owned()));
        attributes.insert(
            "description".into(),
            Value::scalar(self.description().to_owned()),
        );
        attributes.insert("author".into(), Value::Object(author));
        attributes.insert("social".into(), Value::Object(social));
        attributes
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn object_mirrors_serialized_record() {
        let metadata = crate::builtin();
        let object = metadata.to_object();
        assert_eq!(object.len(), 6);

        let actual = serde_json::to_value(&object).unwrap();
        let expected = serde_json::to_value(&metadata).unwrap();
        assert_eq!(actual, expected);
        assert_eq!(
            actual["social"]["github"],
            "https://github.com/slinkydeveloper"
        );
    }
}
