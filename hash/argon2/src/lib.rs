use anyhow::{anyhow, bail, Result};
use argon2::{
    password_hash::SaltString, Algorithm, Argon2, Params, PasswordHash, PasswordHasher,
    PasswordVerifier, Version,
};

pub struct Argon2Hash {
    argon2: Argon2<'static>,
    salt: SaltString,
}

impl Argon2Hash {
    pub fn new(algorithm: &str, version: &str, salt: &str) -> Result<Self> {
        pf_log::info(Some("⚡"), "[Argon2Hash] Initializing component");

        let algorithm = match algorithm {
            "Argon2d" => Algorithm::Argon2d,
            "Argon2i" => Algorithm::Argon2i,
            "Argon2id" => Algorithm::Argon2id,
            _ => bail!("Unknown argon2 algorithm '{algorithm}'"),
        };

        let version = match version {
            "V0x10" => Version::V0x10,
            "V0x13" => Version::V0x13,
            _ => bail!("Unknown argon2 version '{version}'"),
        };

        let salt = SaltString::from_b64(salt).map_err(|err| anyhow!("Invalid argon2 salt: {err}"))?;

        Ok(Self {
            argon2: Argon2::new(algorithm, version, Params::DEFAULT),
            salt,
        })
    }

    /// Produces the PHC string stored as the admin password hash.
    pub fn hash_password(&self, password: &str) -> Result<String> {
        Ok(self
            .argon2
            .hash_password(password.as_bytes(), &self.salt)
            .map_err(|err| anyhow!("Failed to hash password: {err}"))?
            .to_string())
    }

    /// Parameters and salt are taken from `hash` itself, so hashes produced
    /// elsewhere with other settings still verify.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<()> {
        let hash = PasswordHash::new(hash).map_err(|err| anyhow!("Invalid password hash: {err}"))?;
        self.argon2
            .verify_password(password.as_bytes(), &hash)
            .map_err(|_| anyhow!("Incorrect password"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALT: &str = "cG9ydGZvbGlvLXNhbHQ";

    #[test]
    fn verifies_own_hash() {
        let argon2 = Argon2Hash::new("Argon2id", "V0x13", SALT).unwrap();
        let hash = argon2.hash_password("hunter2").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(argon2.verify_password("hunter2", &hash).is_ok());
        assert!(argon2.verify_password("hunter3", &hash).is_err());
    }

    #[test]
    fn rejects_garbage_hash() {
        let argon2 = Argon2Hash::new("Argon2id", "V0x13", SALT).unwrap();
        assert!(argon2.verify_password("hunter2", "not-a-hash").is_err());
        assert!(argon2.verify_password("hunter2", "").is_err());
    }

    #[test]
    fn rejects_unknown_settings() {
        assert!(Argon2Hash::new("Argon3", "V0x13", SALT).is_err());
        assert!(Argon2Hash::new("Argon2id", "V0x99", SALT).is_err());
        assert!(Argon2Hash::new("Argon2id", "V0x13", "!").is_err());
    }
}
