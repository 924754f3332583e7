use std::sync::Arc;

use tracing::{info, warn};

use crate::auth::dto::AuthCommand;
use crate::auth::password::verify_password;
use crate::auth::token::TokenIssuer;
use crate::result::ServiceResult;
use crate::users::repo::UserStore;

/// Unknown login and wrong password return this same message on purpose, so a
/// caller cannot probe which logins exist.
pub const BAD_CREDENTIALS: &str = "Username or Password is incorrect!";

/// Orchestrates login: store lookup, password check, token issuance. Each
/// call is one atomic decision; the store round-trip is the only await point.
pub struct AuthenticationService {
    users: Arc<dyn UserStore>,
    tokens: TokenIssuer,
}

impl AuthenticationService {
    pub fn new(users: Arc<dyn UserStore>, tokens: TokenIssuer) -> Self {
        Self { users, tokens }
    }

    /// Business failures (bad credentials) come back inside the envelope;
    /// store or signing failures propagate as `Err` for the handler to map
    /// to a 5xx.
    pub async fn authenticate(&self, command: &AuthCommand) -> anyhow::Result<ServiceResult> {
        let user = match self.users.find_by_login(&command.login).await? {
            Some(user) => user,
            None => {
                warn!(login = %command.login, "authentication failed: unknown login");
                return Ok(ServiceResult::bad_request(BAD_CREDENTIALS));
            }
        };

        if !verify_password(&command.password, &user.password)? {
            warn!(login = %command.login, user_id = %user.id, "authentication failed: wrong password");
            return Ok(ServiceResult::bad_request(BAD_CREDENTIALS));
        }

        let token = self.tokens.generate_token(&user)?;
        info!(user_id = %user.id, login = %user.login, "user authenticated");
        Ok(ServiceResult::ok(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::hash_password;
    use crate::config::JwtConfig;
    use crate::users::repo::testing::{fake_user, MemoryUserStore};
    use crate::users::repo::Role;
    use axum::http::StatusCode;

    const PASSWORD_ROBERT: &str = "RobertsPassword1";

    fn make_service(store: MemoryUserStore) -> AuthenticationService {
        let tokens = TokenIssuer::new(&JwtConfig {
            secret: "SuperSecretKeyForTokenGenerationThatIsLongEnough".into(),
        })
        .unwrap();
        AuthenticationService::new(Arc::new(store), tokens)
    }

    fn store_with_robert() -> MemoryUserStore {
        let hash = hash_password(PASSWORD_ROBERT).unwrap();
        MemoryUserStore::new().with_user(fake_user("Robert", &hash, Role::Admin))
    }

    #[tokio::test]
    async fn authenticates_a_valid_user() {
        let service = make_service(store_with_robert());

        let result = service
            .authenticate(&AuthCommand {
                login: "Robert".into(),
                password: PASSWORD_ROBERT.into(),
            })
            .await
            .unwrap();

        assert!(!result.error);
        assert_eq!(result.status_code, StatusCode::OK);
        let token = result.value.as_str().expect("token string");
        assert!(!token.is_empty());
    }

    #[tokio::test]
    async fn rejects_an_unknown_login() {
        let service = make_service(store_with_robert());

        let result = service
            .authenticate(&AuthCommand {
                login: "InvalidLogin".into(),
                password: PASSWORD_ROBERT.into(),
            })
            .await
            .unwrap();

        assert!(result.error);
        assert_eq!(result.value, BAD_CREDENTIALS);
    }

    #[tokio::test]
    async fn rejects_a_wrong_password() {
        let service = make_service(store_with_robert());

        let result = service
            .authenticate(&AuthCommand {
                login: "Robert".into(),
                password: "InvalidPassword".into(),
            })
            .await
            .unwrap();

        assert!(result.error);
        assert_eq!(result.value, BAD_CREDENTIALS);
    }

    #[tokio::test]
    async fn unknown_login_and_wrong_password_are_indistinguishable() {
        let service = make_service(store_with_robert());

        let unknown = service
            .authenticate(&AuthCommand {
                login: "InvalidLogin".into(),
                password: "InvalidPassword".into(),
            })
            .await
            .unwrap();
        let wrong = service
            .authenticate(&AuthCommand {
                login: "Robert".into(),
                password: "InvalidPassword".into(),
            })
            .await
            .unwrap();

        assert_eq!(unknown.value, wrong.value);
        assert_eq!(unknown.status_code, wrong.status_code);
    }
}
