use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::delete::{DeleteWishlistParams, DeleteWishlistUseCase};

/// Deletes a wishlist together with its items. Deleting an absent id succeeds.
pub struct DeleteWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteWishlistUseCase for DeleteWishlistUseCaseImpl {
    async fn execute(&self, params: DeleteWishlistParams) -> Result<(), WishlistError> {
        self.logger
            .info(&format!("Deleting wishlist: {}", params.id));

        let Some(wishlist) = self.repository.find(params.id).await? else {
            self.logger
                .debug(&format!("Wishlist {} already absent", params.id));
            return Ok(());
        };

        let removed = self
            .item_repository
            .delete_by_wishlist_id(params.id)
            .await?;
        self.repository.delete(params.id).await?;

        self.logger.info(&format!(
            "Wishlist deleted: {} ({}), {} items removed",
            params.id, wishlist.name, removed
        ));
        Ok(())
    }
}
