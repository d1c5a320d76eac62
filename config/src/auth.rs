use serde::Deserialize;

#[derive(Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    password_hash: String,
    #[serde(default = "default_session_cookie")]
    session_cookie: String,
}

fn default_session_cookie() -> String {
    "pf_session".to_owned()
}

impl AuthConfig {
    /// Argon2 PHC string of the admin password. Empty means nobody can log in.
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn session_cookie(&self) -> &str {
        &self.session_cookie
    }

    pub(crate) fn set_password_hash(&mut self, password_hash: &str) {
        self.password_hash = password_hash.to_owned();
    }
}
