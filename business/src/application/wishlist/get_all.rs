use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::get_all::{GetAllWishlistsParams, GetAllWishlistsUseCase};

pub struct GetAllWishlistsUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllWishlistsUseCase for GetAllWishlistsUseCaseImpl {
    async fn execute(&self, params: GetAllWishlistsParams) -> Result<Vec<Wishlist>, WishlistError> {
        let wishlists = match (params.customer_id, params.name) {
            (Some(customer_id), name) => {
                self.logger
                    .info(&format!("Fetching wishlists for customer: {}", customer_id));
                let mut wishlists = self.repository.find_by_customer_id(customer_id).await?;
                if let Some(name) = name {
                    wishlists.retain(|w| w.name == name);
                }
                wishlists
            }
            (None, Some(name)) => {
                self.logger
                    .info(&format!("Fetching wishlists named: {}", name));
                self.repository.find_by_name(&name).await?
            }
            (None, None) => {
                self.logger.info("Fetching all wishlists");
                self.repository.get_all().await?
            }
        };

        self.logger
            .info(&format!("Found {} wishlists", wishlists.len()));
        Ok(wishlists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockWishlistRepo, mock_logger, wishlist};

    fn seeded() -> Vec<Wishlist> {
        vec![
            wishlist(1, "Bday", 7),
            wishlist(2, "Xmas", 7),
            wishlist(3, "Bday", 8),
        ]
    }

    #[tokio::test]
    async fn should_return_all_wishlists_without_filters() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(seeded()));

        let use_case = GetAllWishlistsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetAllWishlistsParams::default()).await;

        assert_eq!(result.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn should_query_by_customer_id() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_find_by_customer_id()
            .withf(|customer_id| *customer_id == 8)
            .returning(|customer_id| {
                Ok(seeded()
                    .into_iter()
                    .filter(|w| w.customer_id == customer_id)
                    .collect())
            });

        let use_case = GetAllWishlistsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllWishlistsParams {
                customer_id: Some(8),
                name: None,
            })
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert!(result.iter().all(|w| w.customer_id == 8));
    }

    #[tokio::test]
    async fn should_narrow_customer_query_by_name() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo.expect_find_by_customer_id().returning(|customer_id| {
            Ok(seeded()
                .into_iter()
                .filter(|w| w.customer_id == customer_id)
                .collect())
        });

        let use_case = GetAllWishlistsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllWishlistsParams {
                customer_id: Some(7),
                name: Some("Xmas".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(result, vec![wishlist(2, "Xmas", 7)]);
    }

    #[tokio::test]
    async fn should_query_by_name() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_find_by_name()
            .withf(|name| name.to_string() == "Bday")
            .returning(|_| Ok(vec![wishlist(1, "Bday", 7), wishlist(3, "Bday", 8)]));

        let use_case = GetAllWishlistsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllWishlistsParams {
                customer_id: None,
                name: Some("Bday".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
    }
}
