use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::delete_all::DeleteAllWishlistsUseCase;

/// Purges every item and wishlist. Only honoured when `testing` is set.
pub struct DeleteAllWishlistsUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
    pub testing: bool,
}

#[async_trait]
impl DeleteAllWishlistsUseCase for DeleteAllWishlistsUseCaseImpl {
    async fn execute(&self) -> Result<bool, WishlistError> {
        if !self.testing {
            self.logger
                .warn("Request to clear the database while not in test mode was ignored");
            return Ok(false);
        }

        let items = self.item_repository.delete_all().await?;
        let wishlists = self.repository.delete_all().await?;

        self.logger.info(&format!(
            "Cleared {} wishlists and {} items",
            wishlists, items
        ));
        Ok(true)
    }
}
