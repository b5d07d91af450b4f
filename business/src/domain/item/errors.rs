use crate::domain::errors::{DataValidationError, RepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error(transparent)]
    Validation(#[from] DataValidationError),
    #[error("Wishlist with id '{0}' was not found.")]
    WishlistNotFound(i64),
    #[error("Item with id '{item_id}' was not found in wishlist '{wishlist_id}'.")]
    NotFound { wishlist_id: i64, item_id: i64 },
    #[error("Wishlist with id '{0}' has no items.")]
    NoItems(i64),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl ItemError {
    /// Maps a repository failure while loading the parent wishlist.
    pub fn from_wishlist_lookup(wishlist_id: i64, error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => ItemError::WishlistNotFound(wishlist_id),
            RepositoryError::Validation(e) => ItemError::Validation(e),
            other => ItemError::Repository(other),
        }
    }

    /// Maps a repository failure while loading or writing an item of a wishlist.
    pub fn from_item_lookup(wishlist_id: i64, item_id: i64, error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => ItemError::NotFound {
                wishlist_id,
                item_id,
            },
            RepositoryError::Validation(e) => ItemError::Validation(e),
            other => ItemError::Repository(other),
        }
    }
}
