use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;

pub struct PurchaseItemParams {
    pub wishlist_id: i64,
    pub id: i64,
}

#[async_trait]
pub trait PurchaseItemUseCase: Send + Sync {
    async fn execute(&self, params: PurchaseItemParams) -> Result<Item, ItemError>;
}
