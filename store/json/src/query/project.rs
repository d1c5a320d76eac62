use anyhow::Result;

use crate::{db::JsonStore, model::project::ProjectModel};

impl JsonStore {
    /// Appends `value` and returns the id it was stored under. The id of
    /// `value` is kept unless an existing project already uses it or a
    /// greater one, in which case the next free id above the maximum is used.
    pub async fn insert_project(&self, value: &ProjectModel) -> Result<i64> {
        let guard = self.lock().await;
        let mut document = self.load_locked(&guard).await?;

        let mut project = value.clone();
        if let Some(max_id) = document.projects().iter().map(|p| *p.id()).max() {
            if *project.id() <= max_id {
                project.set_id(&(max_id + 1));
            }
        }
        let id = *project.id();

        document.projects_mut().push(project);
        self.save(&document).await?;

        Ok(id)
    }

    pub async fn select_project(&self, id: &i64) -> Result<Option<ProjectModel>> {
        Ok(self
            .load()
            .await?
            .projects()
            .iter()
            .find(|project| project.id() == id)
            .cloned())
    }

    pub async fn select_many_projects(&self) -> Result<Vec<ProjectModel>> {
        Ok(self.load().await?.projects().to_vec())
    }

    /// Returns `false` without writing when no project has the id of `value`.
    pub async fn update_project(&self, value: &ProjectModel) -> Result<bool> {
        let guard = self.lock().await;
        let mut document = self.load_locked(&guard).await?;

        let Some(project) = document
            .projects_mut()
            .iter_mut()
            .find(|project| project.id() == value.id())
        else {
            return Ok(false);
        };
        project.replace_fields(value);

        self.save(&document).await?;
        Ok(true)
    }

    /// Removes every project with `id` and writes the document back even
    /// when nothing matched. Returns whether anything was removed.
    pub async fn delete_project(&self, id: &i64) -> Result<bool> {
        let guard = self.lock().await;
        let mut document = self.load_locked(&guard).await?;

        let before = document.projects().len();
        document.projects_mut().retain(|project| project.id() != id);
        let removed = document.projects().len() != before;

        self.save(&document).await?;
        Ok(removed)
    }
}
