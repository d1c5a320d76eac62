use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pf_api_web::{
    context::{ApiWebAuthCtx, ApiWebCtx},
    ApiWebServer,
};
use pf_config::Config;
use pf_dao::{image::ImageStore, DaoCtx};
use pf_hash_argon2::Argon2Hash;
use pf_sanitizer::Sanitizer;
use pf_store_json::db::JsonStore;
use pf_token_jwt::token::JwtToken;
use tokio_util::sync::CancellationToken;

mod config_path;

#[derive(Parser)]
#[command(version, about = "Single-owner portfolio site")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve,
    /// Print the argon2 hash to put in auth.password_hash
    HashPassword { password: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config_path = config_path::get()?;
    let config = pf_config::from_path(&config_path)?;

    pf_log::init(config.log().display_level(), config.log().level_filter())
        .map_err(anyhow::Error::msg)?;

    let argon2_hash = Argon2Hash::new(
        config.hash().argon2().algorithm(),
        config.hash().argon2().version(),
        config.hash().argon2().salt(),
    )?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&config, argon2_hash).await,
        Command::HashPassword { password } => {
            println!("{}", argon2_hash.hash_password(&password)?);
            Ok(())
        }
    }
}

async fn serve(config: &Config, argon2_hash: Argon2Hash) -> Result<()> {
    pf_log::info(Some("🚀"), "[Portfolio] Starting");

    if config.auth().password_hash().is_empty() {
        pf_log::warn(
            None,
            "[Portfolio] No admin password hash is configured, login is disabled",
        );
    }

    let jwt_token = JwtToken::new(
        config.token().jwt().secret(),
        config.token().jwt().expiry_duration(),
    );

    let dao = DaoCtx::new(
        JsonStore::new(config.store().path())
            .await
            .context("Failed to open data file")?,
        Sanitizer::new()?,
        ImageStore::new(config.upload().path(), config.upload().url_path()).await?,
    );

    let api_web_server = ApiWebServer::new(
        config.api().web().host(),
        config.api().web().port(),
        config.api().web().static_dir(),
        ApiWebCtx::new(
            argon2_hash,
            jwt_token,
            dao,
            ApiWebAuthCtx::new(
                config.auth().password_hash(),
                config.auth().session_cookie(),
                &config.app().mode().is_production(),
            ),
        ),
    );

    let cancel_token = CancellationToken::new();

    tokio::spawn({
        let cancel_token = cancel_token.clone();
        async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    pf_log::info(None, "[Portfolio] Shutting down");
                    cancel_token.cancel();
                }
                Err(err) => pf_log::error(
                    None,
                    format!("[Portfolio] Failed to listen for shutdown signal: {err}"),
                ),
            }
        }
    });

    match api_web_server.run(cancel_token).await {
        Ok(_) => pf_log::info(Some("👋"), "[Portfolio] Turned off"),
        Err(err) => {
            pf_log::error(None, format!("[Portfolio] Server error: {err}"));
            return Err(err);
        }
    }

    Ok(())
}
