use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::get_by_id::{GetWishlistByIdParams, GetWishlistByIdUseCase};

pub struct GetWishlistByIdUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetWishlistByIdUseCase for GetWishlistByIdUseCaseImpl {
    async fn execute(&self, params: GetWishlistByIdParams) -> Result<Wishlist, WishlistError> {
        self.logger
            .info(&format!("Fetching wishlist by id: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| WishlistError::from_lookup(params.id, e))
    }
}
