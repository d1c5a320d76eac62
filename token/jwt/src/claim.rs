use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims of an admin session cookie.
#[derive(Deserialize, Serialize)]
pub struct Claim {
    id: Uuid,
    exp: usize,
}

impl Claim {
    pub fn new(id: &Uuid, exp: &usize) -> Self {
        Self { id: *id, exp: *exp }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn exp(&self) -> &usize {
        &self.exp
    }
}
