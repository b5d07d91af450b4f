use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;

pub struct GetWishlistItemsParams {
    pub wishlist_id: i64,
    pub name: Option<String>,
}

#[async_trait]
pub trait GetWishlistItemsUseCase: Send + Sync {
    async fn execute(&self, params: GetWishlistItemsParams) -> Result<Vec<Item>, ItemError>;
}
