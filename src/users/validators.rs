use crate::users::dto::{UpdateUserCommand, UserCommand};
use crate::users::repo::UserStore;

pub const LOGIN_EMPTY: &str = "Login can't be empty!";
pub const LOGIN_TAKEN: &str = "Login already exist!";
pub const PASSWORD_TOO_SHORT: &str = "Password must be bigger than 5 characters!";

const MIN_PASSWORD_CHARS: usize = 6;

/// Outcome of validating a command: all violations collected in submission
/// order, never short-circuited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

/// Validates user creation. Business violations land in the returned
/// `ValidationResult`; only store I/O failures become an `Err`.
pub struct UserCommandValidator<'a> {
    users: &'a dyn UserStore,
}

impl<'a> UserCommandValidator<'a> {
    pub fn new(users: &'a dyn UserStore) -> Self {
        Self { users }
    }

    pub async fn validate(&self, command: &UserCommand) -> anyhow::Result<ValidationResult> {
        let mut errors = Vec::new();

        if command.login.is_empty() {
            errors.push(LOGIN_EMPTY.to_string());
        }

        if command.password.chars().count() < MIN_PASSWORD_CHARS {
            errors.push(PASSWORD_TOO_SHORT.to_string());
        }

        if !command.login.is_empty()
            && login_taken_by_other(self.users, &command.login, command.id).await?
        {
            errors.push(LOGIN_TAKEN.to_string());
        }

        Ok(ValidationResult::new(errors))
    }
}

/// Validates a profile update. The login rules apply only when a login is
/// actually submitted; the uniqueness check excludes the user's own record.
pub struct UpdateUserCommandValidator<'a> {
    users: &'a dyn UserStore,
}

impl<'a> UpdateUserCommandValidator<'a> {
    pub fn new(users: &'a dyn UserStore) -> Self {
        Self { users }
    }

    pub async fn validate(&self, command: &UpdateUserCommand) -> anyhow::Result<ValidationResult> {
        let mut errors = Vec::new();

        if let Some(login) = command.login.as_deref() {
            if login.is_empty() {
                errors.push(LOGIN_EMPTY.to_string());
            } else if login_taken_by_other(self.users, login, command.id).await? {
                errors.push(LOGIN_TAKEN.to_string());
            }
        }

        Ok(ValidationResult::new(errors))
    }
}

/// A login conflicts when some user already holds it and that user is not the
/// command's own record (the self-update exception).
async fn login_taken_by_other(
    users: &dyn UserStore,
    login: &str,
    own_id: Option<uuid::Uuid>,
) -> anyhow::Result<bool> {
    match users.find_by_login(login).await? {
        Some(existing) => Ok(own_id != Some(existing.id)),
        None => Ok(false),
    }
}
