use tracing::info;
use uuid::Uuid;

use crate::items::repo::PgItemStore;
use crate::orders::dto::{ServiceOrderCommand, ServiceOrderResponse};
use crate::orders::repo::{ItemOrder, PgOrderStore};
use crate::result::ServiceResult;

pub const ORDER_INVALID: &str = "Order Invalid";
pub const CLIENT_EMPTY: &str = "Client can't be empty!";
pub const DATE_INVALID: &str = "Date is invalid!";
pub const ITEMS_EMPTY: &str = "Order must have at least one item!";
pub const UNKNOWN_ITEM: &str = "Item Invalid";

/// Collect-all validation of the order command shape. Catalog lookups happen
/// later, during item resolution.
pub(crate) fn validate(command: &ServiceOrderCommand) -> Vec<String> {
    let mut errors = Vec::new();
    if command.client_id.is_none() {
        errors.push(CLIENT_EMPTY.to_string());
    }
    if command.date.is_none() {
        errors.push(DATE_INVALID.to_string());
    }
    if command.items.is_empty() {
        errors.push(ITEMS_EMPTY.to_string());
    }
    errors
}

pub struct OrderService {
    orders: PgOrderStore,
    items: PgItemStore,
}

impl OrderService {
    pub fn new(orders: PgOrderStore, items: PgItemStore) -> Self {
        Self { orders, items }
    }

    pub async fn create_order(&self, command: ServiceOrderCommand) -> anyhow::Result<ServiceResult> {
        let errors = validate(&command);
        let (Some(client_id), Some(date)) = (command.client_id, command.date) else {
            return Ok(ServiceResult::bad_request_all(errors));
        };
        if !errors.is_empty() {
            return Ok(ServiceResult::bad_request_all(errors));
        }

        // Snapshot name and price from the catalog; an id that resolves to
        // nothing fails the whole order.
        let mut item_orders = Vec::with_capacity(command.items.len());
        for line in &command.items {
            match self.items.find_by_id(line.id).await? {
                Some(item) => item_orders.push(ItemOrder {
                    item_id: item.id,
                    name: item.name,
                    price: item.price,
                    amount: line.amount,
                }),
                None => return Ok(ServiceResult::bad_request(UNKNOWN_ITEM)),
            }
        }

        let order = self
            .orders
            .insert(
                client_id,
                date,
                command.payment_method,
                command.obs.as_deref(),
                &item_orders,
            )
            .await?;

        info!(order_id = %order.id, client_id = %order.client_id, "order created");
        Ok(ServiceResult::created(ServiceOrderResponse::from(order)))
    }

    pub async fn get_all_orders(&self) -> anyhow::Result<ServiceResult> {
        let orders = self.orders.list().await?;
        let responses: Vec<ServiceOrderResponse> =
            orders.into_iter().map(ServiceOrderResponse::from).collect();
        Ok(ServiceResult::ok(responses))
    }

    pub async fn get_order_by_id(&self, id: Uuid) -> anyhow::Result<ServiceResult> {
        match self.orders.find_by_id(id).await? {
            Some(order) => Ok(ServiceResult::ok(ServiceOrderResponse::from(order))),
            None => Ok(ServiceResult::bad_request(ORDER_INVALID)),
        }
    }

    pub async fn get_orders_by_client_id(&self, client_id: Uuid) -> anyhow::Result<ServiceResult> {
        let orders = self.orders.list_by_client(client_id).await?;
        let responses: Vec<ServiceOrderResponse> =
            orders.into_iter().map(ServiceOrderResponse::from).collect();
        Ok(ServiceResult::ok(responses))
    }

    pub async fn delete_order(&self, id: Uuid) -> anyhow::Result<ServiceResult> {
        if self.orders.delete(id).await? {
            info!(order_id = %id, "order deleted");
            Ok(ServiceResult::ok(id))
        } else {
            Ok(ServiceResult::bad_request(ORDER_INVALID))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::dto::ItemOrderDto;
    use crate::orders::repo::PaymentMethod;
    use time::OffsetDateTime;

    fn valid_command() -> ServiceOrderCommand {
        ServiceOrderCommand {
            client_id: Some(Uuid::new_v4()),
            date: Some(OffsetDateTime::now_utc()),
            payment_method: PaymentMethod::Credit,
            obs: Some("Test observation".to_string()),
            items: vec![ItemOrderDto {
                id: Uuid::new_v4(),
                amount: 1,
            }],
        }
    }

    #[test]
    fn accepts_a_valid_command() {
        assert!(validate(&valid_command()).is_empty());
    }

    #[test]
    fn rejects_a_command_missing_everything() {
        let command = ServiceOrderCommand {
            client_id: None,
            date: None,
            payment_method: PaymentMethod::Credit,
            obs: None,
            items: vec![],
        };
        let errors = validate(&command);
        assert_eq!(
            errors,
            vec![
                CLIENT_EMPTY.to_string(),
                DATE_INVALID.to_string(),
                ITEMS_EMPTY.to_string()
            ]
        );
    }

    #[test]
    fn rejects_an_order_without_items() {
        let mut command = valid_command();
        command.items.clear();
        assert!(validate(&command).contains(&ITEMS_EMPTY.to_string()));
    }

    #[test]
    fn order_response_totals_the_item_snapshots() {
        use crate::orders::dto::ServiceOrderResponse;
        use crate::orders::repo::{ItemOrder, ServiceOrder};
        use sqlx::types::Json;

        let order = ServiceOrder {
            id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            date: OffsetDateTime::now_utc(),
            payment_method: PaymentMethod::Debit,
            obs: None,
            items: Json(vec![
                ItemOrder {
                    item_id: Uuid::new_v4(),
                    name: "Brazilian Blowout".to_string(),
                    price: 150.0,
                    amount: 2,
                },
                ItemOrder {
                    item_id: Uuid::new_v4(),
                    name: "Haircut".to_string(),
                    price: 40.0,
                    amount: 1,
                },
            ]),
            created_at: OffsetDateTime::now_utc(),
        };

        let response = ServiceOrderResponse::from(order);
        assert_eq!(response.total, 340.0);
        assert_eq!(response.items.len(), 2);
    }
}
