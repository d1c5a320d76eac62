use std::{env, fs::File};

use anyhow::{Context, Result};
use api::ApiConfig;
use app::AppConfig;
use auth::AuthConfig;
use hash::HashConfig;
use log::LogConfig;
use serde::Deserialize;
use store::StoreConfig;
use token::TokenConfig;
use upload::UploadConfig;

pub mod api;
pub mod app;
pub mod auth;
pub mod hash;
pub mod log;
pub mod store;
pub mod token;
pub mod upload;

pub const ENV_PASSWORD_HASH: &str = "PF_PASSWORD_HASH";
pub const ENV_TOKEN_SECRET: &str = "PF_TOKEN_SECRET";

#[derive(Deserialize)]
pub struct Config {
    app: AppConfig,
    log: LogConfig,
    hash: HashConfig,
    token: TokenConfig,
    auth: AuthConfig,
    store: StoreConfig,
    upload: UploadConfig,
    api: ApiConfig,
}

impl Config {
    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    pub fn hash(&self) -> &HashConfig {
        &self.hash
    }

    pub fn token(&self) -> &TokenConfig {
        &self.token
    }

    pub fn auth(&self) -> &AuthConfig {
        &self.auth
    }

    pub fn store(&self) -> &StoreConfig {
        &self.store
    }

    pub fn upload(&self) -> &UploadConfig {
        &self.upload
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    /// Blank values are ignored.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(password_hash) = var(ENV_PASSWORD_HASH) {
            if !password_hash.trim().is_empty() {
                self.auth.set_password_hash(password_hash.trim());
            }
        }
        if let Some(secret) = var(ENV_TOKEN_SECRET) {
            if !secret.trim().is_empty() {
                self.token.jwt_mut().set_secret(&secret);
            }
        }
    }
}

pub fn from_path(path: &str) -> Result<Config> {
    let file = File::open(path).with_context(|| format!("Failed to open config file {path}"))?;
    let mut config = serde_yaml::from_reader::<_, Config>(file)
        .with_context(|| format!("Failed to parse config file {path}"))?;
    config.apply_overrides(|key| env::var(key).ok());
    Ok(config)
}
