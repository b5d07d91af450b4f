use async_trait::async_trait;

use crate::domain::wishlist::errors::WishlistError;

#[async_trait]
pub trait DeleteAllWishlistsUseCase: Send + Sync {
    /// Returns `false` when the purge was refused because test mode is off.
    async fn execute(&self) -> Result<bool, WishlistError>;
}
