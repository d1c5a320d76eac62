use actix_web::{
    body::{to_bytes, MessageBody},
    dev::ServiceResponse,
    http::header,
    middleware::ErrorHandlerResponse,
    HttpResponse, Result,
};
use askama::Template;
use futures::executor;

use crate::template::ErrorTemplate;

pub fn default_error_handler<B: MessageBody>(
    svc_res: ServiceResponse<B>,
) -> Result<ErrorHandlerResponse<B>> {
    if let Some(content_type) = svc_res.response().headers().get(header::CONTENT_TYPE) {
        if let Ok(content_type) = content_type.to_str() {
            if content_type.to_lowercase().starts_with("text/html") {
                return Ok(ErrorHandlerResponse::Response(svc_res.map_into_left_body()));
            }
        }
    }

    let (req, res) = svc_res.into_parts();

    let status_code = res.status();
    let body = executor::block_on(async {
        match to_bytes(res.into_body()).await {
            Ok(bytes) => match String::from_utf8(bytes.to_vec()) {
                Ok(str) => str,
                Err(err) => err.to_string(),
            },
            Err(err) => {
                let err: Box<dyn std::error::Error> = err.into();
                err.to_string()
            }
        }
    });

    let res = match ErrorTemplate::new(&status_code, &body).render() {
        Ok(html) => HttpResponse::build(status_code)
            .content_type(mime::TEXT_HTML_UTF_8)
            .body(html),
        Err(err) => HttpResponse::build(status_code)
            .content_type(mime::TEXT_PLAIN_UTF_8)
            .body(err.to_string()),
    };

    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, res).map_into_right_body(),
    ))
}
