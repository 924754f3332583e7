use serde::Deserialize;

/// Login credentials. Transient, never persisted.
#[derive(Debug, Deserialize)]
pub struct AuthCommand {
    pub login: String,
    pub password: String,
}
