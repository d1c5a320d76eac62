use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use pf_dao::project::ProjectSubmission;
use serde::Deserialize;

use super::{image_submission, text};

#[derive(Deserialize)]
pub struct ProjectReqPath {
    project_id: i64,
}

impl ProjectReqPath {
    pub fn project_id(&self) -> &i64 {
        &self.project_id
    }
}

#[derive(MultipartForm)]
pub struct ProjectReqForm {
    title: Option<Text<String>>,
    website_url: Option<Text<String>>,
    github_url: Option<Text<String>>,
    description: Option<Text<String>>,
    image_url: Option<Text<String>>,
    image_file: Option<TempFile>,
}

impl ProjectReqForm {
    pub fn to_submission(&self) -> ProjectSubmission {
        ProjectSubmission::new(
            text(&self.title),
            text(&self.website_url),
            text(&self.github_url),
            text(&self.description),
            image_submission(&self.image_file, &self.image_url),
        )
    }
}
