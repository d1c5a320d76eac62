use actix_multipart::form::MultipartForm;
use actix_web::{web, HttpRequest, HttpResponse};
use pf_dao::project::ProjectDao;
use pf_error::Error;

use crate::{
    context::ApiWebCtx,
    flash::Flash,
    model::project::{ProjectReqForm, ProjectReqPath},
    page,
    session::AdminSession,
    template::{AddProjectTemplate, EditProjectTemplate, Layout},
};

pub fn project_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/project/add", web::get().to(insert_form))
        .route("/project/add", web::post().to(insert_one))
        .route("/project/edit/{project_id}", web::get().to(update_form))
        .route("/project/edit/{project_id}", web::post().to(update_one))
        .route("/project/delete/{project_id}", web::post().to(delete_one));
}

async fn insert_form(
    _: AdminSession,
    ctx: web::Data<ApiWebCtx>,
    req: HttpRequest,
) -> HttpResponse {
    let layout = match Layout::load(&ctx, &req).await {
        Ok(layout) => layout,
        Err(err) => return page::internal_error(&err.to_string()),
    };

    page::render(&req, &AddProjectTemplate::new(layout))
}

async fn insert_one(
    _: AdminSession,
    ctx: web::Data<ApiWebCtx>,
    data: MultipartForm<ProjectReqForm>,
) -> HttpResponse {
    match ProjectDao::db_insert(ctx.dao(), &data.to_submission()).await {
        Ok(_) => page::redirect_with("/", Flash::ProjectAdded),
        Err(Error::Validation(invalid)) => {
            page::redirect_with("/project/add", Flash::from(invalid))
        }
        Err(err) => page::internal_error(&format!("Failed to add project: {err}")),
    }
}

async fn update_form(
    _: AdminSession,
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

    let plain_description = project.editable_description(ctx.dao().sanitizer());
    page::render(
        &req,
        &EditProjectTemplate::new(layout, project, plain_description),
    )
}

async fn update_one(
    _: AdminSession,
    ctx: web::Data<ApiWebCtx>,
    path: web::Path<ProjectReqPath>,
    data: MultipartForm<ProjectReqForm>,
) -> HttpResponse {
    let id = path.project_id();
    match ProjectDao::db_update(ctx.dao(), id, &data.to_submission()).await {
        Ok(_) => page::redirect_with("/", Flash::ProjectUpdated),
        Err(Error::Validation(invalid)) => {
            page::redirect_with(&format!("/project/edit/{id}"), Flash::from(invalid))
        }
        Err(Error::NotFound(_)) => page::redirect_with("/", Flash::ProjectNotFound),
        Err(err) => page::internal_error(&format!("Failed to update project {id}: {err}")),
    }
}

async fn delete_one(
    _: AdminSession,
    ctx: web::Data<ApiWebCtx>,
    path: web::Path<ProjectReqPath>,
) -> HttpResponse {
    match ProjectDao::db_delete(ctx.dao(), path.project_id()).await {
        Ok(()) => page::redirect_with("/", Flash::ProjectDeleted),
        Err(err) => page::internal_error(&format!(
            "Failed to delete project {}: {err}",
            path.project_id()
        )),
    }
}
