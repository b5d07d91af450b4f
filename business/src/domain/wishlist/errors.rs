use crate::domain::errors::{DataValidationError, RepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum WishlistError {
    #[error(transparent)]
    Validation(#[from] DataValidationError),
    #[error("Wishlist with id '{0}' was not found.")]
    NotFound(i64),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl WishlistError {
    /// Maps a repository failure for `id`, turning a missing row into `NotFound`.
    pub fn from_lookup(id: i64, error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => WishlistError::NotFound(id),
            RepositoryError::Validation(e) => WishlistError::Validation(e),
            other => WishlistError::Repository(other),
        }
    }
}
