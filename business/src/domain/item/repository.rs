use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Item;

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Inserts a new row, ignoring any id on `item`, and returns it with the assigned id.
    async fn create(&self, item: &Item) -> Result<Item, RepositoryError>;
    /// Fails with `DataValidationError::EmptyId` when `item` has no id.
    async fn update(&self, item: &Item) -> Result<(), RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    async fn delete_all(&self) -> Result<u64, RepositoryError>;
    async fn delete_by_wishlist_id(&self, wishlist_id: i64) -> Result<u64, RepositoryError>;
    async fn get_all(&self) -> Result<Vec<Item>, RepositoryError>;
    async fn find(&self, id: i64) -> Result<Option<Item>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Item, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Vec<Item>, RepositoryError>;
    async fn find_by_wishlist_id(&self, wishlist_id: i64) -> Result<Vec<Item>, RepositoryError>;
    async fn get_by_wishlist_and_id(
        &self,
        wishlist_id: i64,
        id: i64,
    ) -> Result<Option<Item>, RepositoryError>;
}
