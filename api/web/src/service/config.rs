use actix_multipart::form::MultipartForm;
use actix_web::{web, HttpRequest, HttpResponse};
use pf_dao::config::ConfigDao;
use pf_error::Error;

use crate::{
    context::ApiWebCtx,
    flash::Flash,
    model::config::ConfigReqForm,
    page,
    session::AdminSession,
    template::{ConfigTemplate, Layout},
};

pub fn config_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/config", web::get().to(find_one))
        .route("/config", web::post().to(update_one));
}

async fn find_one(
    _: AdminSession,
    ctx: web::Data<ApiWebCtx>,
    req: HttpRequest,
) -> HttpResponse {
    let layout = match Layout::load(&ctx, &req).await {
        Ok(layout) => layout,
        Err(err) => return page::internal_error(&err.to_string()),
    };

    page::render(&req, &ConfigTemplate::new(layout))
}

async fn update_one(
    _: AdminSession,
    ctx: web::Data<ApiWebCtx>,
    data: MultipartForm<ConfigReqForm>,
) -> HttpResponse {
    match ConfigDao::db_update(ctx.dao(), &data.to_submission()).await {
        Ok(_) => page::redirect_with("/", Flash::ConfigUpdated),
        Err(Error::Validation(invalid)) => page::redirect_with("/config", Flash::from(invalid)),
        Err(err) => page::internal_error(&format!("Failed to update config: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{
        http::StatusCode,
        test::{self, TestRequest},
        App,
    };
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use crate::{
        configure::configure,
        test_util::{self, flash, location, multipart},
    };

    use super::*;

    const FIELDS: [(&str, &str); 6] = [
        ("name", " Ada Lovelace "),
        ("course_number", "CIS 101"),
        ("course_description", "Intro"),
        ("profile_info", "Hi"),
        ("linkedin", "https://www.linkedin.com/in/ada"),
        ("theme", "darkly"),
    ];

    #[actix_web::test]
    async fn config_page_requires_login() {
        let dir = TempDir::new().unwrap();
        let ctx = test_util::ctx(&dir).await;

        let app = test::init_service(App::new().app_data(ctx.clone()).configure(configure)).await;
        let res = test::call_service(&app, TestRequest::get().uri("/config").to_request()).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), "/login?next=%2Fconfig");
    }

    #[actix_web::test]
    async fn config_page_marks_current_theme() {
        let dir = TempDir::new().unwrap();
        let ctx = test_util::ctx(&dir).await;

        let app = test::init_service(App::new().app_data(ctx.clone()).configure(configure)).await;
        let req = TestRequest::get()
            .uri("/config")
            .cookie(test_util::session_cookie(&ctx))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body = String::from_utf8(test::read_body(res).await.to_vec()).unwrap();
        assert!(body.contains(r#"<option value="quartz" selected>"#));
    }

    #[actix_web::test]
    async fn update_without_profile_image_is_rejected() {
        let dir = TempDir::new().unwrap();
        let ctx = test_util::ctx(&dir).await;

        let app = test::init_service(App::new().app_data(ctx.clone()).configure(configure)).await;
        let (content_type, body) = multipart(&FIELDS, None);
        let req = TestRequest::post()
            .uri("/config")
            .cookie(test_util::session_cookie(&ctx))
            .insert_header(content_type)
            .set_payload(body)
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), "/config");
        assert_eq!(flash(&res).as_deref(), Some("profile_image_required"));
        assert_eq!(
            ConfigDao::db_select(ctx.dao()).await.unwrap().name(),
            "Student Name"
        );
    }

    #[actix_web::test]
    async fn update_with_profile_image_url_is_saved() {
        let dir = TempDir::new().unwrap();
        let ctx = test_util::ctx(&dir).await;

        let app = test::init_service(App::new().app_data(ctx.clone()).configure(configure)).await;
        let mut fields = FIELDS.to_vec();
        fields.push(("profile_image_url", "https://example.com/me.png"));
        let (content_type, body) = multipart(&fields, None);
        let req = TestRequest::post()
            .uri("/config")
            .cookie(test_util::session_cookie(&ctx))
            .insert_header(content_type)
            .set_payload(body)
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), "/");
        assert_eq!(flash(&res).as_deref(), Some("config_updated"));

        let config = ConfigDao::db_select(ctx.dao()).await.unwrap();
        assert_eq!(config.name(), "Ada Lovelace");
        assert_eq!(config.theme(), "darkly");
        assert_eq!(config.profile_image(), "https://example.com/me.png");
    }
}
