use anyhow::Result;

use crate::{db::JsonStore, model::config::ConfigModel};

impl JsonStore {
    pub async fn select_config(&self) -> Result<ConfigModel> {
        Ok(self.load().await?.config().clone())
    }

    pub async fn update_config(&self, value: &ConfigModel) -> Result<()> {
        let guard = self.lock().await;
        let mut document = self.load_locked(&guard).await?;
        document.set_config(value);
        self.save(&document).await
    }
}
