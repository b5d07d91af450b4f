use async_trait::async_trait;
use serde_json::Value;

use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;

pub struct UpdateWishlistParams {
    pub id: i64,
    pub data: Value,
}

#[async_trait]
pub trait UpdateWishlistUseCase: Send + Sync {
    async fn execute(&self, params: UpdateWishlistParams) -> Result<Wishlist, WishlistError>;
}
