use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Site-wide settings. Fields missing from the file take their default value.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ConfigModel {
    name: String,
    course_number: String,
    course_description: String,
    profile_info: String,
    linkedin: String,
    theme: String,
    profile_image: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Default for ConfigModel {
    fn default() -> Self {
        Self {
            name: "Student Name".to_owned(),
            course_number: "CIS Python Programming".to_owned(),
            course_description: "Describe the Course".to_owned(),
            profile_info: "Tell us something about yourself.".to_owned(),
            linkedin: "https://www.linkedin.com/in/britt-rios-ellis-58597119/".to_owned(),
            theme: "quartz".to_owned(),
            profile_image: String::new(),
            extra: Map::new(),
        }
    }
}

impl ConfigModel {
    pub fn new(
        name: &str,
        course_number: &str,
        course_description: &str,
        profile_info: &str,
        linkedin: &str,
        theme: &str,
        profile_image: &str,
    ) -> Self {
        Self {
            name: name.to_owned(),
            course_number: course_number.to_owned(),
            course_description: course_description.to_owned(),
            profile_info: profile_info.to_owned(),
            linkedin: linkedin.to_owned(),
            theme: theme.to_owned(),
            profile_image: profile_image.to_owned(),
            extra: Map::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn course_number(&self) -> &str {
        &self.course_number
    }

    pub fn course_description(&self) -> &str {
        &self.course_description
    }

    pub fn profile_info(&self) -> &str {
        &self.profile_info
    }

    pub fn linkedin(&self) -> &str {
        &self.linkedin
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn profile_image(&self) -> &str {
        &self.profile_image
    }

    /// Keys written by newer or older versions that this one does not know.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Carries unknown keys over from `other` so an update does not drop them.
    pub fn with_extra_from(mut self, other: &Self) -> Self {
        self.extra = other.extra.clone();
        self
    }
}
