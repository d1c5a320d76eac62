use actix_web::{http::StatusCode, HttpRequest};
use askama::Template;
use pf_dao::{config::ConfigDao, project::ProjectDao};
use pf_error::Result;

use crate::{context::ApiWebCtx, flash::Flash, session};

/// Bootswatch themes offered on the config page.
pub const THEMES: [&str; 25] = [
    "cerulean", "cosmo", "cyborg", "darkly", "flatly", "journal", "litera", "lumen", "lux",
    "materia", "minty", "morph", "pulse", "quartz", "sandstone", "simplex", "sketchy", "slate",
    "solar", "spacelab", "superhero", "united", "vapor", "yeti", "zephyr",
];

/// State shared by every page: site config, login state and the pending flash.
pub struct Layout {
    config: ConfigDao,
    authenticated: bool,
    flash: Option<Flash>,
}

impl Layout {
    pub async fn load(ctx: &ApiWebCtx, req: &HttpRequest) -> Result<Self> {
        Ok(Self {
            config: ConfigDao::db_select(ctx.dao()).await?,
            authenticated: session::is_authenticated(ctx, req),
            flash: Flash::from_request(req),
        })
    }

    pub fn config(&self) -> &ConfigDao {
        &self.config
    }
}

pub struct ThemeOption {
    name: String,
    selected: bool,
}

impl ThemeOption {
    /// A stored theme missing from the list is kept as the first option.
    pub fn list(current: &str) -> Vec<Self> {
        let mut options = Vec::with_capacity(THEMES.len() + 1);
        if !current.is_empty() && !THEMES.contains(&current) {
            options.push(Self {
                name: current.to_owned(),
                selected: true,
            });
        }
        options.extend(THEMES.iter().map(|name| Self {
            name: (*name).to_owned(),
            selected: *name == current,
        }));
        options
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    layout: Layout,
    projects: Vec<ProjectDao>,
}

impl IndexTemplate {
    pub fn new(layout: Layout, projects: Vec<ProjectDao>) -> Self {
        Self { layout, projects }
    }
}

#[derive(Template)]
#[template(path = "project_detail.html")]
pub struct ProjectDetailTemplate {
    layout: Layout,
    project: ProjectDao,
}

impl ProjectDetailTemplate {
    pub fn new(layout: Layout, project: ProjectDao) -> Self {
        Self { layout, project }
    }
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    layout: Layout,
}

impl LoginTemplate {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }
}

#[derive(Template)]
#[template(path = "config.html")]
pub struct ConfigTemplate {
    layout: Layout,
    themes: Vec<ThemeOption>,
}

impl ConfigTemplate {
    pub fn new(layout: Layout) -> Self {
        let themes = ThemeOption::list(layout.config().theme());
        Self { layout, themes }
    }
}

#[derive(Template)]
#[template(path = "add_project.html")]
pub struct AddProjectTemplate {
    layout: Layout,
}

impl AddProjectTemplate {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }
}

#[derive(Template)]
#[template(path = "edit_project.html")]
pub struct EditProjectTemplate {
    layout: Layout,
    project: ProjectDao,
    plain_description: String,
}

impl EditProjectTemplate {
    pub fn new(layout: Layout, project: ProjectDao, plain_description: String) -> Self {
        Self {
            layout,
            project,
            plain_description,
        }
    }
}

/// Standalone page so it renders even when the store is unavailable.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    status: u16,
    reason: String,
    message: String,
}

impl ErrorTemplate {
    pub fn new(status_code: &StatusCode, message: &str) -> Self {
        Self {
            status: status_code.as_u16(),
            reason: status_code
                .canonical_reason()
                .unwrap_or("Error")
                .to_owned(),
            message: message.trim().to_owned(),
        }
    }
}
