use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::create::{CreateWishlistParams, CreateWishlistUseCase};

pub struct CreateWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateWishlistUseCase for CreateWishlistUseCaseImpl {
    async fn execute(&self, params: CreateWishlistParams) -> Result<Wishlist, WishlistError> {
        let mut wishlist = Wishlist::default();
        wishlist.deserialize(&params.data)?;

        self.logger
            .info(&format!("Creating wishlist: {}", wishlist.name));

        let created = self.repository.create(&wishlist).await?;

        self.logger.info(&format!(
            "Wishlist created with id: {}",
            created.id.unwrap_or_default()
        ));
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockWishlistRepo, mock_logger, wishlist};
    use crate::domain::errors::{DataValidationError, RepositoryError};
    use serde_json::json;

    #[tokio::test]
    async fn should_create_wishlist_when_payload_valid() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_create()
            .withf(|w| w.id.is_none() && w.name == "Bday" && w.customer_id == 7)
            .times(1)
            .returning(|w| Ok(wishlist(1, &w.name, w.customer_id)));

        let use_case = CreateWishlistUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateWishlistParams {
                data: json!({ "name": "Bday", "customer_id": 7 }),
            })
            .await;

        let created = result.unwrap();
        assert_eq!(created.id, Some(1));
        assert_eq!(created.name, "Bday");
    }

    #[tokio::test]
    async fn should_discard_client_supplied_id() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_create()
            .withf(|w| w.id.is_none())
            .returning(|w| Ok(wishlist(12, &w.name, w.customer_id)));

        let use_case = CreateWishlistUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let created = use_case
            .execute(CreateWishlistParams {
                data: json!({ "id": 999, "name": "Bday", "customer_id": 7 }),
            })
            .await
            .unwrap();

        assert_eq!(created.id, Some(12));
    }

    #[tokio::test]
    async fn should_reject_missing_field_without_touching_repository() {
        let mock_repo = MockWishlistRepo::new();

        let use_case = CreateWishlistUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateWishlistParams {
                data: json!({ "name": "Bday" }),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            WishlistError::Validation(DataValidationError::MissingField { .. })
        ));
    }

    #[tokio::test]
    async fn should_surface_unavailable_store() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(RepositoryError::Unavailable));

        let use_case = CreateWishlistUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateWishlistParams {
                data: json!({ "name": "Bday", "customer_id": 7 }),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            WishlistError::Repository(RepositoryError::Unavailable)
        ));
    }
}
