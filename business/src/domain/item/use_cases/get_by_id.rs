use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;

pub struct GetItemParams {
    pub wishlist_id: i64,
    pub id: i64,
}

#[async_trait]
pub trait GetItemUseCase: Send + Sync {
    async fn execute(&self, params: GetItemParams) -> Result<Item, ItemError>;
}
