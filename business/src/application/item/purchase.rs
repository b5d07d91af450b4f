use std::sync::Arc;

use async_trait::async_trait;

use super::lookup::load_item;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::purchase::{PurchaseItemParams, PurchaseItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::wishlist::repository::WishlistRepository;

pub struct PurchaseItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub wishlist_repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PurchaseItemUseCase for PurchaseItemUseCaseImpl {
    async fn execute(&self, params: PurchaseItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!(
            "Purchasing item {} of wishlist {}",
            params.id, params.wishlist_id
        ));

        let mut item = load_item(
            self.wishlist_repository.as_ref(),
            self.repository.as_ref(),
            params.wishlist_id,
            params.id,
        )
        .await?;

        item.purchase();

        self.repository
            .update(&item)
            .await
            .map_err(|e| ItemError::from_item_lookup(params.wishlist_id, params.id, e))?;

        self.logger.info(&format!("Item purchased: {}", params.id));
        Ok(item)
    }
}
