use std::sync::Arc;

use async_trait::async_trait;

use super::lookup::load_item;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::get_by_id::{GetItemParams, GetItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::wishlist::repository::WishlistRepository;

pub struct GetItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub wishlist_repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetItemUseCase for GetItemUseCaseImpl {
    async fn execute(&self, params: GetItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!(
            "Fetching item {} of wishlist {}",
            params.id, params.wishlist_id
        ));

        load_item(
            self.wishlist_repository.as_ref(),
            self.repository.as_ref(),
            params.wishlist_id,
            params.id,
        )
        .await
    }
}
