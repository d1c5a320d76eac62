use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer};
use tokio::{
    fs,
    sync::{Mutex, MutexGuard},
};

use crate::model::document::DocumentModel;

/// Whole-document JSON store. Every mutation reads the full file, changes it
/// in memory and writes the full file back.
pub struct JsonStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonStore {
    pub async fn new(path: impl AsRef<Path>) -> Result<Self> {
        pf_log::info(Some("⚡"), "[JsonStore] Initializing component");

        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        let store = Self {
            path,
            write_lock: Mutex::new(()),
        };
        store.load().await?;

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored document. A missing, empty or unparsable file is
    /// replaced with defaults, but only after re-reading it under the write
    /// lock.
    pub async fn load(&self) -> Result<DocumentModel> {
        match self.read().await? {
            Ok(document) => Ok(document),
            Err(_) => {
                let guard = self.lock().await;
                self.load_locked(&guard).await
            }
        }
    }

    /// `load` for callers already holding the write lock.
    pub(crate) async fn load_locked(&self, _guard: &MutexGuard<'_, ()>) -> Result<DocumentModel> {
        match self.read().await? {
            Ok(document) => Ok(document),
            Err(Recovery::Missing) => {
                pf_log::info(
                    Some("🌱"),
                    format!(
                        "[JsonStore] {} does not exist, writing defaults",
                        self.path.display()
                    ),
                );
                self.reset().await
            }
            Err(Recovery::Empty) => {
                pf_log::warn(
                    None,
                    format!("[JsonStore] {} is empty. Resetting...", self.path.display()),
                );
                self.reset().await
            }
            Err(Recovery::Corrupted(err)) => {
                pf_log::warn(
                    None,
                    format!(
                        "[JsonStore] {} corrupted ({err}). Resetting...",
                        self.path.display()
                    ),
                );
                self.reset().await
            }
        }
    }

    /// Writes to a sibling file first and renames it over the data file, so
    /// readers see either the previous or the new document.
    pub async fn save(&self, document: &DocumentModel) -> Result<()> {
        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        document.serialize(&mut serializer)?;

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, buf)
            .await
            .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
        if let Err(err) = fs::rename(&tmp_path, &self.path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(err).with_context(|| format!("Failed to replace {}", self.path.display()));
        }

        Ok(())
    }

    /// Held across a read-modify-write cycle so two requests of this process
    /// never interleave their cycles.
    pub(crate) async fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    async fn read(&self) -> Result<Result<DocumentModel, Recovery>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Err(Recovery::Missing)),
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to read {}", self.path.display()))
            }
        };

        if content.trim().is_empty() {
            return Ok(Err(Recovery::Empty));
        }

        Ok(serde_json::from_str::<DocumentModel>(&content)
            .map_err(|err| Recovery::Corrupted(err.to_string())))
    }

    async fn reset(&self) -> Result<DocumentModel> {
        let document = DocumentModel::default();
        self.save(&document).await?;
        Ok(document)
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map_or_else(|| "data.json".into(), |name| name.to_string_lossy());
        self.path.with_file_name(format!(".{name}.tmp"))
    }
}

enum Recovery {
    Missing,
    Empty,
    Corrupted(String),
}
