use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ProjectModel {
    id: i64,
    #[serde(default)]
    image: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    website_url: String,
    #[serde(default)]
    github_url: String,
    #[serde(default)]
    description: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl ProjectModel {
    pub fn new(
        id: &i64,
        image: &str,
        title: &str,
        website_url: &str,
        github_url: &str,
        description: &str,
    ) -> Self {
        Self {
            id: *id,
            image: image.to_owned(),
            title: title.to_owned(),
            website_url: website_url.to_owned(),
            github_url: github_url.to_owned(),
            description: description.to_owned(),
            extra: Map::new(),
        }
    }

    pub fn id(&self) -> &i64 {
        &self.id
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn website_url(&self) -> &str {
        &self.website_url
    }

    pub fn github_url(&self) -> &str {
        &self.github_url
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub(crate) fn set_id(&mut self, id: &i64) {
        self.id = *id;
    }

    /// Overwrites the editable fields, keeping id and unknown keys.
    pub(crate) fn replace_fields(&mut self, other: &Self) {
        self.image = other.image.clone();
        self.title = other.title.clone();
        self.website_url = other.website_url.clone();
        self.github_url = other.github_url.clone();
        self.description = other.description.clone();
    }
}
