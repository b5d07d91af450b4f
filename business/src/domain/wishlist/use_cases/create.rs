use async_trait::async_trait;
use serde_json::Value;

use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;

pub struct CreateWishlistParams {
    /// Raw request body; validated by `Wishlist::deserialize`.
    pub data: Value,
}

#[async_trait]
pub trait CreateWishlistUseCase: Send + Sync {
    async fn execute(&self, params: CreateWishlistParams) -> Result<Wishlist, WishlistError>;
}
