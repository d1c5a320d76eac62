use std::fmt;

use actix_web::{
    cookie::{time::Duration, Cookie, SameSite},
    dev::Payload,
    http::{header, StatusCode},
    web, FromRequest, HttpRequest, HttpResponse, ResponseError,
};
use futures::future::{ready, Ready};

use crate::context::ApiWebCtx;

pub fn is_authenticated(ctx: &ApiWebCtx, req: &HttpRequest) -> bool {
    req.cookie(ctx.auth().session_cookie())
        .is_some_and(|cookie| ctx.token().jwt().decode(cookie.value()).is_ok())
}

pub fn session_cookie(ctx: &ApiWebCtx, token: String) -> Cookie<'static> {
    let max_age = i64::try_from(*ctx.token().jwt().expiry_duration()).unwrap_or(i64::MAX);
    Cookie::build(ctx.auth().session_cookie().to_owned(), token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(*ctx.auth().secure_cookie())
        .max_age(Duration::seconds(max_age))
        .finish()
}

pub fn removal_cookie(ctx: &ApiWebCtx) -> Cookie<'static> {
    Cookie::build(ctx.auth().session_cookie().to_owned(), "")
        .path("/")
        .http_only(true)
        .max_age(Duration::ZERO)
        .finish()
}

/// Accepts only same-site paths, never `//host` or absolute URLs.
pub fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(next) if next.starts_with('/') && !next.starts_with("//") && !next.contains('\\') => {
            next
        }
        _ => "/",
    }
}

/// Extractor guarding admin-only handlers.
pub struct AdminSession;

impl FromRequest for AdminSession {
    type Error = LoginRequired;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let authenticated = req
            .app_data::<web::Data<ApiWebCtx>>()
            .is_some_and(|ctx| is_authenticated(ctx, req));

        ready(if authenticated {
            Ok(Self)
        } else {
            let next = req
                .uri()
                .path_and_query()
                .map(|path| path.as_str())
                .unwrap_or("/")
                .to_owned();
            Err(LoginRequired { next })
        })
    }
}

#[derive(Debug)]
pub struct LoginRequired {
    next: String,
}

impl fmt::Display for LoginRequired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Login required to access {}", self.next)
    }
}

impl ResponseError for LoginRequired {
    fn status_code(&self) -> StatusCode {
        StatusCode::FOUND
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::Found()
            .insert_header((
                header::LOCATION,
                format!("/login?next={}", urlencoding::encode(&self.next)),
            ))
            .finish()
    }
}
