use actix_web::{web, HttpRequest, HttpResponse};
use pf_dao::project::ProjectDao;

use crate::{
    context::ApiWebCtx,
    flash::Flash,
    model::project::ProjectReqPath,
    page,
    template::{IndexTemplate, Layout, ProjectDetailTemplate},
};

pub fn root_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route(r"/project/{project_id:\d+}", web::get().to(find_one));
}

async fn index(ctx: web::Data<ApiWebCtx>, req: HttpRequest) -> HttpResponse {
    let layout = match Layout::load(&ctx, &req).await {
        Ok(layout) => layout,
        Err(err) => return page::internal_error(&err.to_string()),
    };

    let projects = match ProjectDao::db_select_many(ctx.dao()).await {
        Ok(projects) => projects,
        Err(err) => return page::internal_error(&err.to_string()),
    };

    page::render(&req, &IndexTemplate::new(layout, projects))
}

async fn find_one(
    ctx: web::Data<ApiWebCtx>,
    req: HttpRequest,
    path: web::Path<ProjectReqPath>,
) -> HttpResponse {
    let project = match ProjectDao::db_select(ctx.dao(), path.project_id()).await {
        Ok(project) => project,
        Err(err) if err.is_not_found() => {
            return page::redirect_with("/", Flash::ProjectNotFound)
        }
        Err(err) => return page::internal_error(&err.to_string()),
    };

    let layout = match Layout::load(&ctx, &req).await {
        Ok(layout) => layout,
        Err(err) => return page::internal_error(&err.to_string()),
    };

    page::render(&req, &ProjectDetailTemplate::new(layout, project))
}
