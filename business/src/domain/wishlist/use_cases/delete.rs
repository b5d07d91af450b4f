use async_trait::async_trait;

use crate::domain::wishlist::errors::WishlistError;

pub struct DeleteWishlistParams {
    pub id: i64,
}

#[async_trait]
pub trait DeleteWishlistUseCase: Send + Sync {
    async fn execute(&self, params: DeleteWishlistParams) -> Result<(), WishlistError>;
}
