use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::users::repo::{Role, User};

/// Create-or-replace command for a user. `id` is present when an existing
/// user resubmits its own record.
#[derive(Debug, Clone, Deserialize)]
pub struct UserCommand {
    pub id: Option<Uuid>,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub password: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

/// Partial update of an existing user's profile. Password changes go through
/// a separate flow; a missing field keeps the stored value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserCommand {
    pub id: Option<Uuid>,
    pub login: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Public projection of a user, safe to return from handlers.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub login: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            login: user.login,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}
