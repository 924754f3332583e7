use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::orders::repo::{ItemOrder, PaymentMethod, ServiceOrder};

#[derive(Debug, Clone, Deserialize)]
pub struct ItemOrderDto {
    pub id: Uuid,
    pub amount: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceOrderCommand {
    pub client_id: Option<Uuid>,
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub date: Option<OffsetDateTime>,
    pub payment_method: PaymentMethod,
    pub obs: Option<String>,
    #[serde(default)]
    pub items: Vec<ItemOrderDto>,
}

/// Order as returned to the HTTP layer, with the total priced from the item
/// snapshots.
#[derive(Debug, Serialize)]
pub struct ServiceOrderResponse {
    pub id: Uuid,
    pub client_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub payment_method: PaymentMethod,
    pub obs: Option<String>,
    pub items: Vec<ItemOrder>,
    pub total: f64,
}

impl From<ServiceOrder> for ServiceOrderResponse {
    fn from(order: ServiceOrder) -> Self {
        let total = order.total();
        Self {
            id: order.id,
            client_id: order.client_id,
            date: order.date,
            payment_method: order.payment_method,
            obs: order.obs,
            items: order.items.0,
            total,
        }
    }
}
