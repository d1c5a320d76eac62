use serde::Deserialize;

#[derive(Deserialize)]
pub struct ApiConfig {
    web: ApiWebConfig,
}

impl ApiConfig {
    pub fn web(&self) -> &ApiWebConfig {
        &self.web
    }
}

#[derive(Deserialize)]
pub struct ApiWebConfig {
    host: String,
    port: u16,
    #[serde(default = "default_static_dir")]
    static_dir: String,
}

fn default_static_dir() -> String {
    "static".to_owned()
}

impl ApiWebConfig {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &u16 {
        &self.port
    }

    /// Directory served under `/static`.
    pub fn static_dir(&self) -> &str {
        &self.static_dir
    }
}
