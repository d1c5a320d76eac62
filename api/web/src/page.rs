use actix_web::{http::header, HttpRequest, HttpResponse};
use askama::Template;

use crate::flash::{Flash, FLASH_COOKIE};

/// Renders a page and consumes any pending flash message.
pub fn render<T: Template>(req: &HttpRequest, template: &T) -> HttpResponse {
    let body = match template.render() {
        Ok(body) => body,
        Err(err) => return internal_error(&format!("Failed to render page: {err}")),
    };

    let mut res = HttpResponse::Ok();
    res.content_type(mime::TEXT_HTML_UTF_8);
    if req.cookie(FLASH_COOKIE).is_some() {
        res.cookie(Flash::removal_cookie());
    }
    res.body(body)
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn redirect_with(location: &str, flash: Flash) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .cookie(flash.cookie())
        .finish()
}

pub fn internal_error(msg: &str) -> HttpResponse {
    pf_log::error(Some("🔥"), format!("[ApiWebServer] {msg}"));
    HttpResponse::InternalServerError()
        .content_type(mime::TEXT_PLAIN_UTF_8)
        .body("Internal Server Error")
}
