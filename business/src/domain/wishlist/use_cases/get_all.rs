use async_trait::async_trait;

use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;

#[derive(Debug, Default)]
pub struct GetAllWishlistsParams {
    pub customer_id: Option<i64>,
    pub name: Option<String>,
}

#[async_trait]
pub trait GetAllWishlistsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllWishlistsParams) -> Result<Vec<Wishlist>, WishlistError>;
}
