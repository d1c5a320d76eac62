use actix_multipart::form::{tempfile::TempFile, text::Text};
use pf_dao::image::{ImageSubmission, ImageUpload};

pub mod auth;
pub mod config;
pub mod project;

fn text(field: &Option<Text<String>>) -> &str {
    field.as_ref().map_or("", |text| text.as_str())
}

/// A file input left empty arrives as a part with no file name.
fn image_submission(file: &Option<TempFile>, url: &Option<Text<String>>) -> ImageSubmission {
    let upload = file.as_ref().and_then(|file| {
        file.file_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(|name| ImageUpload::new(file.file.path(), name))
    });
    ImageSubmission::new(upload, url.as_ref().map(|url| url.as_str()))
}
