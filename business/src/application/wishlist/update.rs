use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::update::{UpdateWishlistParams, UpdateWishlistUseCase};

pub struct UpdateWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateWishlistUseCase for UpdateWishlistUseCaseImpl {
    async fn execute(&self, params: UpdateWishlistParams) -> Result<Wishlist, WishlistError> {
        self.logger
            .info(&format!("Updating wishlist: {}", params.id));

        let mut wishlist = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| WishlistError::from_lookup(params.id, e))?;

        wishlist.deserialize(&params.data)?;
        wishlist.id = Some(params.id);

        self.repository
            .update(&wishlist)
            .await
            .map_err(|e| WishlistError::from_lookup(params.id, e))?;

        self.logger
            .info(&format!("Wishlist updated: {}", params.id));
        Ok(wishlist)
    }
}
