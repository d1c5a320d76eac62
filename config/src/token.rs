use serde::Deserialize;

#[derive(Deserialize)]
pub struct TokenConfig {
    jwt: JwtTokenConfig,
}

impl TokenConfig {
    pub fn jwt(&self) -> &JwtTokenConfig {
        &self.jwt
    }

    pub(crate) fn jwt_mut(&mut self) -> &mut JwtTokenConfig {
        &mut self.jwt
    }
}

#[derive(Deserialize)]
pub struct JwtTokenConfig {
    secret: String,
    expiry_duration: u64,
}

impl JwtTokenConfig {
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Session lifetime in seconds.
    pub fn expiry_duration(&self) -> &u64 {
        &self.expiry_duration
    }

    pub(crate) fn set_secret(&mut self, secret: &str) {
        self.secret = secret.to_owned();
    }
}
