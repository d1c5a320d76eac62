use std::{env, fs};

use anyhow::{bail, Result};

pub const ENV_CONFIG_PATH: &str = "PF_CONFIG_PATH";

pub fn get() -> Result<String> {
    let config_path = match env::var(ENV_CONFIG_PATH) {
        Ok(path) => path,
        Err(_) => "config.yml".to_owned(),
    };

    if fs::metadata(&config_path).is_err() {
        bail!("Config file {config_path} specified in {ENV_CONFIG_PATH} environment variable or current directory must exist")
    }

    Ok(config_path)
}
