use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub contact_numbers: Vec<String>,
    pub created_at: OffsetDateTime,
}

#[derive(Clone)]
pub struct PgClientStore {
    db: PgPool,
}

impl PgClientStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn insert(
        &self,
        name: &str,
        email: &str,
        contact_numbers: &[String],
    ) -> anyhow::Result<Client> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (name, email, contact_numbers)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, contact_numbers, created_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(contact_numbers)
        .fetch_one(&self.db)
        .await?;
        Ok(client)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        email: Option<&str>,
        contact_numbers: Option<&[String]>,
    ) -> anyhow::Result<Option<Client>> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                contact_numbers = COALESCE($4, contact_numbers)
            WHERE id = $1
            RETURNING id, name, email, contact_numbers, created_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(contact_numbers)
        .fetch_optional(&self.db)
        .await?;
        Ok(client)
    }

    /// Lists clients, newest last. `amount` caps the result when provided.
    pub async fn list(&self, amount: Option<i64>) -> anyhow::Result<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, name, email, contact_numbers, created_at
            FROM clients
            ORDER BY created_at
            LIMIT $1
            "#,
        )
        .bind(amount)
        .fetch_all(&self.db)
        .await?;
        Ok(clients)
    }

    pub async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Client>> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, name, email, contact_numbers, created_at
            FROM clients
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(client)
    }

    pub async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
