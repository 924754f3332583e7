use tracing::info;
use uuid::Uuid;

use crate::auth::password::hash_password;
use crate::result::ServiceResult;
use crate::users::dto::{UpdateUserCommand, UserCommand, UserResponse};
use crate::users::repo::{PgUserStore, UserStore};
use crate::users::validators::{UpdateUserCommandValidator, UserCommandValidator};

pub const USER_INVALID: &str = "User Invalid";

/// CRUD over users: validate, hash, persist. Validation failures come back in
/// the envelope; the store's own errors propagate.
pub struct UserService {
    users: PgUserStore,
}

impl UserService {
    pub fn new(users: PgUserStore) -> Self {
        Self { users }
    }

    pub async fn create_user(&self, command: UserCommand) -> anyhow::Result<ServiceResult> {
        let validation = UserCommandValidator::new(&self.users)
            .validate(&command)
            .await?;
        if !validation.is_valid() {
            return Ok(ServiceResult::bad_request_all(validation.into_errors()));
        }

        let hash = hash_password(&command.password)?;
        let user = self
            .users
            .insert(
                &command.login,
                &hash,
                &command.name,
                &command.email,
                command.role,
            )
            .await?;

        info!(user_id = %user.id, login = %user.login, "user created");
        Ok(ServiceResult::created(UserResponse::from(user)))
    }

    pub async fn update_user(&self, command: UpdateUserCommand) -> anyhow::Result<ServiceResult> {
        let id = match command.id {
            Some(id) => id,
            None => return Ok(ServiceResult::bad_request(USER_INVALID)),
        };

        let validation = UpdateUserCommandValidator::new(&self.users)
            .validate(&command)
            .await?;
        if !validation.is_valid() {
            return Ok(ServiceResult::bad_request_all(validation.into_errors()));
        }

        let updated = self
            .users
            .update(
                id,
                command.login.as_deref(),
                command.name.as_deref(),
                command.email.as_deref(),
            )
            .await?;

        match updated {
            Some(user) => {
                info!(user_id = %user.id, "user updated");
                Ok(ServiceResult::ok(UserResponse::from(user)))
            }
            None => Ok(ServiceResult::bad_request(USER_INVALID)),
        }
    }

    pub async fn get_all_users(&self) -> anyhow::Result<ServiceResult> {
        let users = self.users.list().await?;
        let responses: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
        Ok(ServiceResult::ok(responses))
    }

    pub async fn get_user_by_id(&self, id: Uuid) -> anyhow::Result<ServiceResult> {
        match self.users.find_by_id(id).await? {
            Some(user) => Ok(ServiceResult::ok(UserResponse::from(user))),
            None => Ok(ServiceResult::bad_request(USER_INVALID)),
        }
    }

    pub async fn delete_user(&self, id: Uuid) -> anyhow::Result<ServiceResult> {
        if self.users.delete(id).await? {
            info!(user_id = %id, "user deleted");
            Ok(ServiceResult::ok(id))
        } else {
            Ok(ServiceResult::bad_request(USER_INVALID))
        }
    }
}
