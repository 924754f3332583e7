use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[repr(i32)]
pub enum PaymentMethod {
    Credit = 0,
    Debit = 1,
    Cash = 2,
}

/// Snapshot of a catalog item at order time, embedded in the order document.
/// Later catalog price changes do not rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemOrder {
    pub item_id: Uuid,
    pub name: String,
    pub price: f64,
    pub amount: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServiceOrder {
    pub id: Uuid,
    pub client_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub payment_method: PaymentMethod,
    pub obs: Option<String>,
    pub items: Json<Vec<ItemOrder>>,
    pub created_at: OffsetDateTime,
}

impl ServiceOrder {
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.price * item.amount as f64)
            .sum()
    }
}

#[derive(Clone)]
pub struct PgOrderStore {
    db: PgPool,
}

impl PgOrderStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn insert(
        &self,
        client_id: Uuid,
        date: OffsetDateTime,
        payment_method: PaymentMethod,
        obs: Option<&str>,
        items: &[ItemOrder],
    ) -> anyhow::Result<ServiceOrder> {
        let order = sqlx::query_as::<_, ServiceOrder>(
            r#"
            INSERT INTO service_orders (client_id, date, payment_method, obs, items)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, client_id, date, payment_method, obs, items, created_at
            "#,
        )
        .bind(client_id)
        .bind(date)
        .bind(payment_method)
        .bind(obs)
        .bind(Json(items))
        .fetch_one(&self.db)
        .await?;
        Ok(order)
    }

    pub async fn list(&self) -> anyhow::Result<Vec<ServiceOrder>> {
        let orders = sqlx::query_as::<_, ServiceOrder>(
            r#"
            SELECT id, client_id, date, payment_method, obs, items, created_at
            FROM service_orders
            ORDER BY date DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(orders)
    }

    pub async fn list_by_client(&self, client_id: Uuid) -> anyhow::Result<Vec<ServiceOrder>> {
        let orders = sqlx::query_as::<_, ServiceOrder>(
            r#"
            SELECT id, client_id, date, payment_method, obs, items, created_at
            FROM service_orders
            WHERE client_id = $1
            ORDER BY date DESC
            "#,
        )
        .bind(client_id)
        .fetch_all(&self.db)
        .await?;
        Ok(orders)
    }

    pub async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<ServiceOrder>> {
        let order = sqlx::query_as::<_, ServiceOrder>(
            r#"
            SELECT id, client_id, date, payment_method, obs, items, created_at
            FROM service_orders
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(order)
    }

    pub async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM service_orders WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
