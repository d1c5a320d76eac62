use serde::Deserialize;

#[derive(Deserialize)]
pub struct StoreConfig {
    path: String,
}

impl StoreConfig {
    pub fn path(&self) -> &str {
        &self.path
    }
}
