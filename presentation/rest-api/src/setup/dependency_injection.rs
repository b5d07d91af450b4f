use std::sync::Arc;

use logger::TracingLogger;
use persistence::item::repository::ItemRepositoryPostgres;
use persistence::retry::RetryPolicy;
use persistence::wishlist::repository::WishlistRepositoryPostgres;

use business::application::item::create::CreateItemUseCaseImpl;
use business::application::item::delete::DeleteItemUseCaseImpl;
use business::application::item::get_all::GetWishlistItemsUseCaseImpl;
use business::application::item::get_by_id::GetItemUseCaseImpl;
use business::application::item::purchase::PurchaseItemUseCaseImpl;
use business::application::item::update::UpdateItemUseCaseImpl;
use business::application::wishlist::create::CreateWishlistUseCaseImpl;
use business::application::wishlist::delete::DeleteWishlistUseCaseImpl;
use business::application::wishlist::delete_all::DeleteAllWishlistsUseCaseImpl;
use business::application::wishlist::get_all::GetAllWishlistsUseCaseImpl;
use business::application::wishlist::get_by_id::GetWishlistByIdUseCaseImpl;
use business::application::wishlist::update::UpdateWishlistUseCaseImpl;
use business::domain::item::repository::ItemRepository;
use business::domain::logger::Logger;
use business::domain::wishlist::repository::WishlistRepository;

use crate::api::health::routes::HealthApi;
use crate::api::index::routes::IndexApi;
use crate::api::item::routes::ItemApi;
use crate::api::wishlist::routes::WishlistApi;
use crate::config::api_key_config::ApiKeyConfig;
use crate::config::app_config::FeatureFlags;

pub struct DependencyContainer {
    pub index_api: IndexApi,
    pub health_api: HealthApi,
    pub wishlist_api: WishlistApi,
    pub item_api: ItemApi,
    pub api_key: ApiKeyConfig,
}

impl DependencyContainer {
    /// Wires the PostgreSQL repositories into the use cases.
    pub fn new(
        pool: sqlx::PgPool,
        retry: RetryPolicy,
        api_key: ApiKeyConfig,
        features: FeatureFlags,
    ) -> Self {
        let wishlist_repository = Arc::new(WishlistRepositoryPostgres::new(
            pool.clone(),
            retry.clone(),
        ));
        let item_repository = Arc::new(ItemRepositoryPostgres::new(pool, retry));

        Self::with_repositories(wishlist_repository, item_repository, api_key, features)
    }

    pub fn with_repositories(
        wishlist_repository: Arc<dyn WishlistRepository>,
        item_repository: Arc<dyn ItemRepository>,
        api_key: ApiKeyConfig,
        features: FeatureFlags,
    ) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Wishlist use cases
        let get_wishlist_use_case = Arc::new(GetWishlistByIdUseCaseImpl {
            repository: wishlist_repository.clone(),
            logger: logger.clone(),
        });
        let wishlist_api = WishlistApi::new(
            Arc::new(CreateWishlistUseCaseImpl {
                repository: wishlist_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllWishlistsUseCaseImpl {
                repository: wishlist_repository.clone(),
                logger: logger.clone(),
            }),
            get_wishlist_use_case.clone(),
            Arc::new(UpdateWishlistUseCaseImpl {
                repository: wishlist_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteWishlistUseCaseImpl {
                repository: wishlist_repository.clone(),
                item_repository: item_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteAllWishlistsUseCaseImpl {
                repository: wishlist_repository.clone(),
                item_repository: item_repository.clone(),
                logger: logger.clone(),
                testing: features.testing,
            }),
        );

        // Item use cases
        let item_api = ItemApi::new(
            get_wishlist_use_case,
            Arc::new(CreateItemUseCaseImpl {
                repository: item_repository.clone(),
                wishlist_repository: wishlist_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetWishlistItemsUseCaseImpl {
                repository: item_repository.clone(),
                wishlist_repository: wishlist_repository.clone(),
                logger: logger.clone(),
                empty_list_not_found: features.empty_item_list_not_found,
            }),
            Arc::new(GetItemUseCaseImpl {
                repository: item_repository.clone(),
                wishlist_repository: wishlist_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateItemUseCaseImpl {
                repository: item_repository.clone(),
                wishlist_repository: wishlist_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteItemUseCaseImpl {
                repository: item_repository.clone(),
                wishlist_repository: wishlist_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(PurchaseItemUseCaseImpl {
                repository: item_repository,
                wishlist_repository,
                logger,
            }),
        );

        Self {
            index_api: IndexApi,
            health_api: HealthApi,
            wishlist_api,
            item_api,
            api_key,
        }
    }
}
