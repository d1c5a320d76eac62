use image::ImageStore;
use pf_sanitizer::Sanitizer;
use pf_store_json::db::JsonStore;

pub mod config;
pub mod image;
pub mod project;

/// Everything the entry manager needs to run an operation.
pub struct DaoCtx {
    store: JsonStore,
    sanitizer: Sanitizer,
    images: ImageStore,
}

impl DaoCtx {
    pub fn new(store: JsonStore, sanitizer: Sanitizer, images: ImageStore) -> Self {
        Self {
            store,
            sanitizer,
            images,
        }
    }

    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    pub fn sanitizer(&self) -> &Sanitizer {
        &self.sanitizer
    }

    pub fn images(&self) -> &ImageStore {
        &self.images
    }
}
