use pf_dao::DaoCtx;
use pf_hash_argon2::Argon2Hash;
use pf_token_jwt::token::JwtToken;

pub struct ApiWebCtx {
    hash: ApiWebHashCtx,
    token: ApiWebTokenCtx,
    dao: DaoCtx,
    auth: ApiWebAuthCtx,
}

impl ApiWebCtx {
    pub fn new(argon2: Argon2Hash, jwt: JwtToken, dao: DaoCtx, auth: ApiWebAuthCtx) -> Self {
        Self {
            hash: ApiWebHashCtx { argon2 },
            token: ApiWebTokenCtx { jwt },
            dao,
            auth,
        }
    }

    pub fn hash(&self) -> &ApiWebHashCtx {
        &self.hash
    }

    pub fn token(&self) -> &ApiWebTokenCtx {
        &self.token
    }

    pub fn dao(&self) -> &DaoCtx {
        &self.dao
    }

    pub fn auth(&self) -> &ApiWebAuthCtx {
        &self.auth
    }
}

pub struct ApiWebHashCtx {
    argon2: Argon2Hash,
}

impl ApiWebHashCtx {
    pub fn argon2(&self) -> &Argon2Hash {
        &self.argon2
    }
}

pub struct ApiWebTokenCtx {
    jwt: JwtToken,
}

impl ApiWebTokenCtx {
    pub fn jwt(&self) -> &JwtToken {
        &self.jwt
    }
}

pub struct ApiWebAuthCtx {
    password_hash: String,
    session_cookie: String,
    secure_cookie: bool,
}

impl ApiWebAuthCtx {
    pub fn new(password_hash: &str, session_cookie: &str, secure_cookie: &bool) -> Self {
        Self {
            password_hash: password_hash.to_owned(),
            session_cookie: session_cookie.to_owned(),
            secure_cookie: *secure_cookie,
        }
    }

    /// Empty when no admin password is configured.
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn session_cookie(&self) -> &str {
        &self.session_cookie
    }

    pub fn secure_cookie(&self) -> &bool {
        &self.secure_cookie
    }
}
