use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Catalog entry for a salon service or product.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub created_at: OffsetDateTime,
}

#[derive(Clone)]
pub struct PgItemStore {
    db: PgPool,
}

impl PgItemStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn insert(&self, name: &str, price: f64) -> anyhow::Result<Item> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (name, price)
            VALUES ($1, $2)
            RETURNING id, name, price, created_at
            "#,
        )
        .bind(name)
        .bind(price)
        .fetch_one(&self.db)
        .await?;
        Ok(item)
    }

    pub async fn list(&self) -> anyhow::Result<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, price, created_at
            FROM items
            ORDER BY name
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(items)
    }

    pub async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, price, created_at
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(item)
    }

    pub async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
