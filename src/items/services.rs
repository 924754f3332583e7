use tracing::info;
use uuid::Uuid;

use crate::items::dto::ItemCommand;
use crate::items::repo::PgItemStore;
use crate::result::ServiceResult;

pub const ITEM_INVALID: &str = "Item Invalid";
pub const NAME_EMPTY: &str = "Name can't be empty!";
pub const PRICE_NEGATIVE: &str = "Price can't be negative!";

pub(crate) fn validate(command: &ItemCommand) -> Vec<String> {
    let mut errors = Vec::new();
    if command.name.trim().is_empty() {
        errors.push(NAME_EMPTY.to_string());
    }
    if command.price < 0.0 {
        errors.push(PRICE_NEGATIVE.to_string());
    }
    errors
}

pub struct ItemService {
    items: PgItemStore,
}

impl ItemService {
    pub fn new(items: PgItemStore) -> Self {
        Self { items }
    }

    pub async fn create_item(&self, command: ItemCommand) -> anyhow::Result<ServiceResult> {
        let errors = validate(&command);
        if !errors.is_empty() {
            return Ok(ServiceResult::bad_request_all(errors));
        }

        let item = self.items.insert(&command.name, command.price).await?;
        info!(item_id = %item.id, name = %item.name, "item created");
        Ok(ServiceResult::created(item))
    }

    pub async fn get_all_items(&self) -> anyhow::Result<ServiceResult> {
        let items = self.items.list().await?;
        Ok(ServiceResult::ok(items))
    }

    pub async fn get_item_by_id(&self, id: Uuid) -> anyhow::Result<ServiceResult> {
        match self.items.find_by_id(id).await? {
            Some(item) => Ok(ServiceResult::ok(item)),
            None => Ok(ServiceResult::bad_request(ITEM_INVALID)),
        }
    }

    pub async fn delete_item(&self, id: Uuid) -> anyhow::Result<ServiceResult> {
        if self.items.delete(id).await? {
            info!(item_id = %id, "item deleted");
            Ok(ServiceResult::ok(id))
        } else {
            Ok(ServiceResult::bad_request(ITEM_INVALID))
        }
    }
}
