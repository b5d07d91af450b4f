use std::sync::Arc;

use async_trait::async_trait;

use super::lookup::ensure_wishlist;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::wishlist::repository::WishlistRepository;

pub struct CreateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub wishlist_repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateItemUseCase for CreateItemUseCaseImpl {
    async fn execute(&self, params: CreateItemParams) -> Result<Item, ItemError> {
        ensure_wishlist(self.wishlist_repository.as_ref(), params.wishlist_id).await?;

        let mut item = Item::default();
        item.deserialize(&params.data)?;
        // The path decides the parent, whatever the body claims.
        item.wishlist_id = params.wishlist_id;

        self.logger.info(&format!(
            "Creating item {} in wishlist {}",
            item.name, params.wishlist_id
        ));

        let created = self.repository.create(&item).await?;

        self.logger.info(&format!(
            "Item created with id: {}",
            created.id.unwrap_or_default()
        ));
        Ok(created)
    }
}
