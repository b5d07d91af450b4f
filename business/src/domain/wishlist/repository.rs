use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Wishlist;

#[async_trait]
pub trait WishlistRepository: Send + Sync {
    /// Inserts a new row, ignoring any id on `wishlist`, and returns it with the assigned id.
    async fn create(&self, wishlist: &Wishlist) -> Result<Wishlist, RepositoryError>;
    /// Fails with `DataValidationError::EmptyId` when `wishlist` has no id.
    async fn update(&self, wishlist: &Wishlist) -> Result<(), RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    async fn delete_all(&self) -> Result<u64, RepositoryError>;
    async fn get_all(&self) -> Result<Vec<Wishlist>, RepositoryError>;
    async fn find(&self, id: i64) -> Result<Option<Wishlist>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Wishlist, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Vec<Wishlist>, RepositoryError>;
    async fn find_by_customer_id(&self, customer_id: i64)
    -> Result<Vec<Wishlist>, RepositoryError>;
}
