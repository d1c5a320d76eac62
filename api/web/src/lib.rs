use actix_files::Files;
use actix_web::{
    middleware::{ErrorHandlers, Logger},
    web, App, HttpServer,
};
use anyhow::Result;
use configure::configure;
use context::ApiWebCtx;
use error_handler::default_error_handler;
use tokio_util::sync::CancellationToken;

mod configure;
pub mod context;
mod error_handler;
mod flash;
mod model;
mod page;
mod service;
mod session;
mod template;

pub struct ApiWebServer {
    address: String,
    static_dir: String,
    context: web::Data<ApiWebCtx>,
}

impl ApiWebServer {
    pub fn new(host: &str, port: &u16, static_dir: &str, ctx: ApiWebCtx) -> Self {
        pf_log::info(Some("⚡"), "[ApiWebServer] Initializing component");

        Self {
            address: format!("{host}:{port}"),
            static_dir: static_dir.to_owned(),
            context: web::Data::new(ctx),
        }
    }

    pub async fn run(self, cancel_token: CancellationToken) -> Result<()> {
        pf_log::info(
            Some("💫"),
            format!("[ApiWebServer] Running component on http://{}", self.address),
        );

        let context = self.context;
        let static_dir = self.static_dir;
        let server = HttpServer::new(move || {
            let images = context.dao().images();
            App::new()
                .wrap(ErrorHandlers::new().default_handler(default_error_handler))
                .wrap(Logger::default())
                .app_data(context.clone())
                .service(Files::new(images.url_path(), images.dir()))
                .service(Files::new("/static", &static_dir))
                .configure(configure)
        })
        .disable_signals()
        .bind(&self.address)?
        .run();

        let handle = server.handle();
        tokio::select! {
            res = server => res?,
            _ = cancel_token.cancelled() => handle.stop(true).await,
        }

        pf_log::info(None, "[ApiWebServer] Shutting down component");

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use actix_web::{cookie::Cookie, dev::ServiceResponse, http::header, web};
    use pf_dao::{image::ImageStore, DaoCtx};
    use pf_hash_argon2::Argon2Hash;
    use pf_sanitizer::Sanitizer;
    use pf_store_json::db::JsonStore;
    use pf_token_jwt::token::JwtToken;
    use tempfile::TempDir;

    use crate::context::{ApiWebAuthCtx, ApiWebCtx};

    pub const PASSWORD: &str = "correct horse";
    pub const SESSION_COOKIE: &str = "pf_session";

    pub async fn ctx(dir: &TempDir) -> web::Data<ApiWebCtx> {
        let argon2 = Argon2Hash::new("Argon2id", "V0x13", "cG9ydGZvbGlvLXNhbHQ").unwrap();
        let password_hash = argon2.hash_password(PASSWORD).unwrap();
        web::Data::new(ApiWebCtx::new(
            argon2,
            JwtToken::new("test-secret", &3600),
            DaoCtx::new(
                JsonStore::new(dir.path().join("data.json")).await.unwrap(),
                Sanitizer::new().unwrap(),
                ImageStore::new(dir.path().join("uploads"), "/static/project_images")
                    .await
                    .unwrap(),
            ),
            ApiWebAuthCtx::new(&password_hash, SESSION_COOKIE, &false),
        ))
    }

    pub fn session_cookie(ctx: &ApiWebCtx) -> Cookie<'static> {
        Cookie::new(SESSION_COOKIE, ctx.token().jwt().encode().unwrap())
    }

    pub fn location<B>(res: &ServiceResponse<B>) -> String {
        res.headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned()
    }

    pub fn flash<B>(res: &ServiceResponse<B>) -> Option<String> {
        res.response()
            .cookies()
            .find(|cookie| cookie.name() == crate::flash::FLASH_COOKIE)
            .map(|cookie| cookie.value().to_owned())
    }

    const BOUNDARY: &str = "pf-test-boundary";

    /// Encodes text fields plus an optional `image_file` part.
    pub fn multipart(
        fields: &[(&str, &str)],
        file: Option<(&str, &[u8])>,
    ) -> ((header::HeaderName, String), Vec<u8>) {
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some((file_name, bytes)) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image_file\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        (
            (
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ),
            body,
        )
    }
}
