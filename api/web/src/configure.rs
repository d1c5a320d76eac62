use actix_web::web;

use crate::service::{
    auth::auth_api, config::config_api, project::project_api, root::root_api,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(root_api)
        .configure(auth_api)
        .configure(config_api)
        .configure(project_api);
}
