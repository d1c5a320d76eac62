use serde::Deserialize;

#[derive(Deserialize)]
pub struct UploadConfig {
    path: String,
    #[serde(default = "default_url_path")]
    url_path: String,
}

fn default_url_path() -> String {
    "/static/project_images".to_owned()
}

impl UploadConfig {
    /// Directory uploaded images are written to.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Public path prefix the images are served under.
    pub fn url_path(&self) -> &str {
        &self.url_path
    }
}
