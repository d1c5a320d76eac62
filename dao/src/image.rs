use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;
use uuid::Uuid;

pub const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Directory uploaded images are copied into, and the public path they are
/// served under.
pub struct ImageStore {
    dir: PathBuf,
    url_path: String,
}

impl ImageStore {
    pub async fn new(dir: impl AsRef<Path>, url_path: &str) -> Result<Self> {
        pf_log::info(Some("⚡"), "[ImageStore] Initializing component");

        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create upload directory {}", dir.display()))?;

        Ok(Self {
            dir,
            url_path: url_path.trim_end_matches('/').to_owned(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn url_path(&self) -> &str {
        &self.url_path
    }

    /// Copies the upload under a fresh unique name and returns its served path.
    pub async fn save(&self, upload: &ImageUpload) -> Result<String> {
        let extension = upload.extension().unwrap_or_default();
        let file_name = format!("{}.{extension}", Uuid::now_v7());

        fs::copy(upload.path(), self.dir.join(&file_name))
            .await
            .with_context(|| format!("Failed to store uploaded image {}", upload.file_name()))?;

        pf_log::info(Some("🖼️"), format!("[ImageStore] Stored {file_name}"));

        Ok(format!("{}/{file_name}", self.url_path))
    }

    /// Removes a file written by `save`. Paths outside the upload directory
    /// are left alone.
    pub async fn discard(&self, served_path: &str) {
        let Some(file_name) = served_path
            .strip_prefix(&self.url_path)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|name| !name.is_empty() && !name.contains(['/', '\\']))
        else {
            return;
        };

        match fs::remove_file(self.dir.join(file_name)).await {
            Ok(()) => pf_log::info(Some("🧹"), format!("[ImageStore] Removed {file_name}")),
            Err(err) => pf_log::warn(
                None,
                format!("[ImageStore] Failed to remove {file_name}: {err}"),
            ),
        }
    }
}

/// A received file, still in its temporary location.
pub struct ImageUpload {
    path: PathBuf,
    file_name: String,
}

impl ImageUpload {
    pub fn new(path: impl AsRef<Path>, file_name: &str) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            file_name: file_name.to_owned(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Extension of the original file name, case preserved.
    pub fn extension(&self) -> Option<&str> {
        Path::new(&self.file_name)
            .extension()
            .and_then(|extension| extension.to_str())
    }

    pub fn is_allowed(&self) -> bool {
        self.extension().is_some_and(|extension| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(extension))
        })
    }
}

/// Image fields of a submitted form.
#[derive(Default)]
pub struct ImageSubmission {
    upload: Option<ImageUpload>,
    url: Option<String>,
}

pub(crate) enum ImageChoice<'a> {
    Upload(&'a ImageUpload),
    Url(&'a str),
    Keep,
}

impl ImageSubmission {
    pub fn new(upload: Option<ImageUpload>, url: Option<&str>) -> Self {
        Self {
            upload,
            url: url.map(str::to_owned),
        }
    }

    /// An allowed upload wins over a URL; anything else keeps the current image.
    pub(crate) fn choose(&self) -> ImageChoice<'_> {
        if let Some(upload) = self.upload.as_ref().filter(|upload| upload.is_allowed()) {
            return ImageChoice::Upload(upload);
        }
        match self.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => ImageChoice::Url(url),
            _ => ImageChoice::Keep,
        }
    }
}

impl ImageChoice<'_> {
    pub(crate) fn is_present(&self, current: &str) -> bool {
        match self {
            Self::Upload(_) | Self::Url(_) => true,
            Self::Keep => !current.is_empty(),
        }
    }

    /// Only writes to disk for uploads, so call it after validation.
    pub(crate) async fn resolve(&self, images: &ImageStore, current: &str) -> Result<String> {
        match self {
            Self::Upload(upload) => images.save(upload).await,
            Self::Url(url) => Ok((*url).to_owned()),
            Self::Keep => Ok(current.to_owned()),
        }
    }

    /// Undoes `resolve` when the write that should reference the image failed.
    pub(crate) async fn discard(&self, images: &ImageStore, resolved: &str) {
        if let Self::Upload(_) = self {
            images.discard(resolved).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn allows_known_extensions_in_any_case() {
        assert!(ImageUpload::new("/tmp/x", "photo.PNG").is_allowed());
        assert!(ImageUpload::new("/tmp/x", "a.b.webp").is_allowed());
        assert!(ImageUpload::new("/tmp/x", "pic.JpEg").is_allowed());
        assert!(!ImageUpload::new("/tmp/x", "script.svg").is_allowed());
        assert!(!ImageUpload::new("/tmp/x", "png").is_allowed());
        assert!(!ImageUpload::new("/tmp/x", "").is_allowed());
    }

    #[test]
    fn upload_beats_url_and_url_beats_keep() {
        let both = ImageSubmission::new(
            Some(ImageUpload::new("/tmp/x", "a.png")),
            Some("https://img/x.png"),
        );
        assert!(matches!(both.choose(), ImageChoice::Upload(_)));

        let rejected_upload = ImageSubmission::new(
            Some(ImageUpload::new("/tmp/x", "a.exe")),
            Some("  https://img/x.png "),
        );
        assert!(matches!(
            rejected_upload.choose(),
            ImageChoice::Url("https://img/x.png")
        ));

        let blank = ImageSubmission::new(None, Some("   "));
        assert!(matches!(blank.choose(), ImageChoice::Keep));
        assert!(!blank.choose().is_present(""));
        assert!(blank.choose().is_present("/static/old.png"));
    }

    #[tokio::test]
    async fn discard_only_touches_stored_uploads() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("upload.tmp");
        std::fs::write(&source, b"\x89PNG").unwrap();
        let images = ImageStore::new(dir.path().join("uploads"), "/static/project_images")
            .await
            .unwrap();
        let upload = ImageUpload::new(&source, "a.png");
        let kept = images.save(&upload).await.unwrap();
        let removed = images.save(&upload).await.unwrap();

        images.discard(&removed).await;
        images.discard("https://img/x.png").await;
        images.discard("/static/project_images/../upload.tmp").await;
        ImageChoice::Url("https://img/x.png")
            .discard(&images, &kept)
            .await;

        assert_eq!(std::fs::read_dir(images.dir()).unwrap().count(), 1);
        assert!(source.exists());
        let kept_name = kept.rsplit('/').next().unwrap();
        assert!(images.dir().join(kept_name).exists());
    }

    #[tokio::test]
    async fn save_uses_unique_names() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("upload.tmp");
        std::fs::write(&source, b"\x89PNG").unwrap();
        let images = ImageStore::new(dir.path().join("uploads"), "/static/project_images/")
            .await
            .unwrap();
        let upload = ImageUpload::new(&source, "Photo.PNG");

        let first = images.save(&upload).await.unwrap();
        let second = images.save(&upload).await.unwrap();

        assert_ne!(first, second);
        assert!(first.starts_with("/static/project_images/"));
        assert!(first.ends_with(".PNG"));
        let stored = first.rsplit('/').next().unwrap();
        assert_eq!(std::fs::read(images.dir().join(stored)).unwrap(), b"\x89PNG");
    }
}
