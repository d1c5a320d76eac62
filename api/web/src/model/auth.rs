use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct LoginReqForm {
    #[serde(default)]
    #[validate(length(min = 1))]
    password: String,
}

impl LoginReqForm {
    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Deserialize)]
pub struct LoginReqQuery {
    next: Option<String>,
}

impl LoginReqQuery {
    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }
}
