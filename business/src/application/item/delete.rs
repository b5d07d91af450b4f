use std::sync::Arc;

use async_trait::async_trait;

use super::lookup::load_item;
use crate::domain::item::errors::ItemError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::wishlist::repository::WishlistRepository;

pub struct DeleteItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub wishlist_repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteItemUseCase for DeleteItemUseCaseImpl {
    async fn execute(&self, params: DeleteItemParams) -> Result<(), ItemError> {
        self.logger.info(&format!(
            "Deleting item {} of wishlist {}",
            params.id, params.wishlist_id
        ));

        load_item(
            self.wishlist_repository.as_ref(),
            self.repository.as_ref(),
            params.wishlist_id,
            params.id,
        )
        .await?;

        self.repository.delete(params.id).await?;

        self.logger.info(&format!("Item deleted: {}", params.id));
        Ok(())
    }
}
