use std::sync::Arc;

use async_trait::async_trait;

use super::lookup::load_item;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::wishlist::repository::WishlistRepository;

pub struct UpdateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub wishlist_repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateItemUseCase for UpdateItemUseCaseImpl {
    async fn execute(&self, params: UpdateItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!(
            "Updating item {} of wishlist {}",
            params.id, params.wishlist_id
        ));

        let mut item = load_item(
            self.wishlist_repository.as_ref(),
            self.repository.as_ref(),
            params.wishlist_id,
            params.id,
        )
        .await?;

        item.deserialize(&params.data)?;
        item.id = Some(params.id);
        item.wishlist_id = params.wishlist_id;

        self.repository
            .update(&item)
            .await
            .map_err(|e| ItemError::from_item_lookup(params.wishlist_id, params.id, e))?;

        self.logger.info(&format!("Item updated: {}", params.id));
        Ok(item)
    }
}
