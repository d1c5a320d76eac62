use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{config::ConfigModel, project::ProjectModel};

/// Root object of the data file.
#[derive(Deserialize, Serialize, Default, Clone, Debug, PartialEq)]
pub struct DocumentModel {
    #[serde(default)]
    config: ConfigModel,
    #[serde(default)]
    projects: Vec<ProjectModel>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl DocumentModel {
    pub fn new(config: &ConfigModel, projects: &[ProjectModel]) -> Self {
        Self {
            config: config.clone(),
            projects: projects.to_vec(),
            extra: Map::new(),
        }
    }

    pub fn config(&self) -> &ConfigModel {
        &self.config
    }

    pub fn projects(&self) -> &[ProjectModel] {
        &self.projects
    }

    pub(crate) fn set_config(&mut self, config: &ConfigModel) {
        self.config = config.clone();
    }

    pub(crate) fn projects_mut(&mut self) -> &mut Vec<ProjectModel> {
        &mut self.projects
    }
}
