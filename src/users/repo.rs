use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Access level of a salon user. Stored and tokenized as its integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[repr(i32)]
pub enum Role {
    Admin = 0,
    User = 1,
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

/// User record. `password` holds the argon2 PHC string, never exposed in JSON.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub login: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: OffsetDateTime,
}

/// Read contract over the user store, the seam shared by the command
/// validators and the authentication service. Postgres in production,
/// in-memory in tests.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_login(&self, login: &str) -> anyhow::Result<Option<User>>;
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;
}

#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn insert(
        &self,
        login: &str,
        password_hash: &str,
        name: &str,
        email: &str,
        role: Role,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (login, password, name, email, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, login, password, name, email, role, created_at
            "#,
        )
        .bind(login)
        .bind(password_hash)
        .bind(name)
        .bind(email)
        .bind(role)
        .fetch_one(&self.db)
        .await?;
        Ok(user)
    }

    /// Updates the mutable profile fields. A `None` field keeps the stored
    /// value.
    pub async fn update(
        &self,
        id: Uuid,
        login: Option<&str>,
        name: Option<&str>,
        email: Option<&str>,
    ) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET login = COALESCE($2, login),
                name = COALESCE($3, name),
                email = COALESCE($4, email)
            WHERE id = $1
            RETURNING id, login, password, name, email, role, created_at
            "#,
        )
        .bind(id)
        .bind(login)
        .bind(name)
        .bind(email)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    pub async fn list(&self) -> anyhow::Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, login, password, name, email, role, created_at
            FROM users
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(users)
    }

    pub async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_login(&self, login: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, login, password, name, email, role, created_at
            FROM users
            WHERE login = $1
            "#,
        )
        .bind(login)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, login, password, name, email, role, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::HashMap;

    /// In-memory stand-in for Postgres, mirroring the data-load fixtures the
    /// validator and authentication tests run against.
    pub struct MemoryUserStore {
        users: HashMap<Uuid, User>,
    }

    impl MemoryUserStore {
        pub fn new() -> Self {
            Self {
                users: HashMap::new(),
            }
        }

        pub fn with_user(mut self, user: User) -> Self {
            self.users.insert(user.id, user);
            self
        }
    }

    #[async_trait]
    impl UserStore for MemoryUserStore {
        async fn find_by_login(&self, login: &str) -> anyhow::Result<Option<User>> {
            Ok(self.users.values().find(|u| u.login == login).cloned())
        }

        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
            Ok(self.users.get(&id).cloned())
        }
    }

    pub fn fake_user(login: &str, password_hash: &str, role: Role) -> User {
        User {
            id: Uuid::new_v4(),
            login: login.to_string(),
            password: password_hash.to_string(),
            name: format!("{} name", login),
            email: format!("{}@example.com", login.to_lowercase()),
            role,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}
