use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use pf_dao::config::ConfigSubmission;

use super::{image_submission, text};

#[derive(MultipartForm)]
pub struct ConfigReqForm {
    name: Option<Text<String>>,
    course_number: Option<Text<String>>,
    course_description: Option<Text<String>>,
    profile_info: Option<Text<String>>,
    linkedin: Option<Text<String>>,
    theme: Option<Text<String>>,
    profile_image_url: Option<Text<String>>,
    image_file: Option<TempFile>,
}

impl ConfigReqForm {
    pub fn to_submission(&self) -> ConfigSubmission {
        ConfigSubmission::new(
            text(&self.name),
            text(&self.course_number),
            text(&self.course_description),
            text(&self.profile_info),
            text(&self.linkedin),
            text(&self.theme),
            image_submission(&self.image_file, &self.profile_image_url),
        )
    }
}
