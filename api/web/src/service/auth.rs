use actix_web::{http::header, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    context::ApiWebCtx,
    flash::Flash,
    model::auth::{LoginReqForm, LoginReqQuery},
    page,
    session::{self, safe_next},
    template::{Layout, LoginTemplate},
};

pub fn auth_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/login", web::get().to(login_form))
        .route("/login", web::post().to(login))
        .route("/logout", web::get().to(logout));
}

async fn login_form(ctx: web::Data<ApiWebCtx>, req: HttpRequest) -> HttpResponse {
    if session::is_authenticated(&ctx, &req) {
        return page::redirect("/");
    }

    let layout = match Layout::load(&ctx, &req).await {
        Ok(layout) => layout,
        Err(err) => return page::internal_error(&err.to_string()),
    };

    page::render(&req, &LoginTemplate::new(layout))
}

async fn login(
    ctx: web::Data<ApiWebCtx>,
    query: web::Query<LoginReqQuery>,
    data: web::Form<LoginReqForm>,
) -> HttpResponse {
    let retry = match query.next() {
        Some(next) => format!("/login?next={}", urlencoding::encode(next)),
        None => "/login".to_owned(),
    };

    if data.validate().is_err() {
        return page::redirect_with(&retry, Flash::IncorrectPassword);
    }

    let password_hash = ctx.auth().password_hash();
    if password_hash.is_empty() {
        pf_log::warn(
            None,
            "[ApiWebServer] Login attempted but no admin password hash is configured",
        );
        return page::redirect_with(&retry, Flash::IncorrectPassword);
    }

    if ctx
        .hash()
        .argon2()
        .verify_password(data.password(), password_hash)
        .is_err()
    {
        pf_log::warn(None, "[ApiWebServer] Login rejected: incorrect password");
        return page::redirect_with(&retry, Flash::IncorrectPassword);
    }

    let token = match ctx.token().jwt().encode() {
        Ok(token) => token,
        Err(err) => return page::internal_error(&format!("Failed to issue session: {err}")),
    };

    pf_log::info(None, "[ApiWebServer] Admin logged in");

    HttpResponse::Found()
        .insert_header((header::LOCATION, safe_next(query.next())))
        .cookie(session::session_cookie(&ctx, token))
        .cookie(Flash::LoginSuccessful.cookie())
        .finish()
}

async fn logout(ctx: web::Data<ApiWebCtx>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .cookie(session::removal_cookie(&ctx))
        .cookie(Flash::LoggedOut.cookie())
        .finish()
}

#[cfg(test)]
mod tests {
    use actix_web::{
        http::StatusCode,
        test::{self, TestRequest},
        App,
    };
    use tempfile::TempDir;

    use crate::{
        configure::configure,
        test_util::{self, flash, location, PASSWORD, SESSION_COOKIE},
    };

    #[actix_web::test]
    async fn login_with_correct_password_sets_session() {
        let dir = TempDir::new().unwrap();
        let ctx = test_util::ctx(&dir).await;

        let app = test::init_service(App::new().app_data(ctx.clone()).configure(configure)).await;
        let req = TestRequest::post()
            .uri("/login?next=%2Fconfig")
            .set_form([("password", PASSWORD)])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), "/config");
        assert_eq!(flash(&res).as_deref(), Some("login_successful"));

        let session = res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE)
            .unwrap();
        assert!(ctx.token().jwt().decode(session.value()).is_ok());
        assert_eq!(session.http_only(), Some(true));
    }

    #[actix_web::test]
    async fn login_with_wrong_password_is_rejected() {
        let dir = TempDir::new().unwrap();
        let ctx = test_util::ctx(&dir).await;

        let app = test::init_service(App::new().app_data(ctx.clone()).configure(configure)).await;
        let req = TestRequest::post()
            .uri("/login")
            .set_form([("password", "wrong")])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), "/login");
        assert_eq!(flash(&res).as_deref(), Some("incorrect_password"));
        assert!(res
            .response()
            .cookies()
            .all(|cookie| cookie.name() != SESSION_COOKIE));
    }

    #[actix_web::test]
    async fn login_ignores_offsite_next() {
        let dir = TempDir::new().unwrap();
        let ctx = test_util::ctx(&dir).await;

        let app = test::init_service(App::new().app_data(ctx.clone()).configure(configure)).await;
        let req = TestRequest::post()
            .uri("/login?next=https%3A%2F%2Fevil.example")
            .set_form([("password", PASSWORD)])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), "/");
    }

    #[actix_web::test]
    async fn login_page_redirects_when_authenticated() {
        let dir = TempDir::new().unwrap();
        let ctx = test_util::ctx(&dir).await;

        let app = test::init_service(App::new().app_data(ctx.clone()).configure(configure)).await;
        let req = TestRequest::get()
            .uri("/login")
            .cookie(test_util::session_cookie(&ctx))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), "/");
    }

    #[actix_web::test]
    async fn logout_clears_session() {
        let dir = TempDir::new().unwrap();
        let ctx = test_util::ctx(&dir).await;

        let app = test::init_service(App::new().app_data(ctx.clone()).configure(configure)).await;
        let req = TestRequest::get()
            .uri("/logout")
            .cookie(test_util::session_cookie(&ctx))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res), "/");
        assert_eq!(flash(&res).as_deref(), Some("logged_out"));

        let session = res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE)
            .unwrap();
        assert_eq!(session.value(), "");
    }
}
