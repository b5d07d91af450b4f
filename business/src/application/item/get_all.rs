use std::sync::Arc;

use async_trait::async_trait;

use super::lookup::ensure_wishlist;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::get_all::{GetWishlistItemsParams, GetWishlistItemsUseCase};
use crate::domain::logger::Logger;
use crate::domain::wishlist::repository::WishlistRepository;

pub struct GetWishlistItemsUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub wishlist_repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
    /// When set, an existing wishlist without matching items yields `NoItems`
    /// instead of an empty list.
    pub empty_list_not_found: bool,
}

#[async_trait]
impl GetWishlistItemsUseCase for GetWishlistItemsUseCaseImpl {
    async fn execute(&self, params: GetWishlistItemsParams) -> Result<Vec<Item>, ItemError> {
        self.logger
            .info(&format!("Fetching items of wishlist: {}", params.wishlist_id));

        ensure_wishlist(self.wishlist_repository.as_ref(), params.wishlist_id).await?;

        let items = match params.name {
            Some(name) => {
                let mut items = self.repository.find_by_name(&name).await?;
                items.retain(|i| i.wishlist_id == params.wishlist_id);
                items
            }
            None => {
                self.repository
                    .find_by_wishlist_id(params.wishlist_id)
                    .await?
            }
        };

        if items.is_empty() && self.empty_list_not_found {
            return Err(ItemError::NoItems(params.wishlist_id));
        }

        self.logger.info(&format!(
            "Found {} items in wishlist {}",
            items.len(),
            params.wishlist_id
        ));
        Ok(items)
    }
}
