use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use poem::Endpoint;
use poem::test::{TestClient, TestResponse};
use serde_json::Value;

use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;
use business::domain::item::repository::ItemRepository;
use business::domain::wishlist::model::Wishlist;
use business::domain::wishlist::repository::WishlistRepository;

use crate::config::api_key_config::ApiKeyConfig;
use crate::config::app_config::FeatureFlags;
use crate::setup::dependency_injection::DependencyContainer;
use crate::setup::server::Server;

pub const API_KEY: &str = "test-api-key";

#[derive(Default)]
pub struct InMemoryWishlistRepository {
    rows: Mutex<Vec<Wishlist>>,
    next_id: AtomicI64,
}

impl InMemoryWishlistRepository {
    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl WishlistRepository for InMemoryWishlistRepository {
    async fn create(&self, wishlist: &Wishlist) -> Result<Wishlist, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let created = Wishlist::from_repository(id, wishlist.name.clone(), wishlist.customer_id);
        self.rows.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, wishlist: &Wishlist) -> Result<(), RepositoryError> {
        let id = wishlist.require_id()?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|w| w.id == Some(id))
            .ok_or(RepositoryError::NotFound)?;
        *row = wishlist.clone();
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.rows.lock().unwrap().retain(|w| w.id != Some(id));
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let count = rows.len() as u64;
        rows.clear();
        Ok(count)
    }

    async fn get_all(&self) -> Result<Vec<Wishlist>, RepositoryError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find(&self, id: i64) -> Result<Option<Wishlist>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.id == Some(id))
            .cloned())
    }

    async fn get_by_id(&self, id: i64) -> Result<Wishlist, RepositoryError> {
        self.find(id).await?.ok_or(RepositoryError::NotFound)
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Wishlist>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.name == name)
            .cloned()
            .collect())
    }

    async fn find_by_customer_id(
        &self,
        customer_id: i64,
    ) -> Result<Vec<Wishlist>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.customer_id == customer_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryItemRepository {
    rows: Mutex<Vec<Item>>,
    next_id: AtomicI64,
}

impl InMemoryItemRepository {
    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, item: &Item) -> Result<Item, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let created =
            Item::from_repository(id, item.name.clone(), item.wishlist_id, item.purchased);
        self.rows.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, item: &Item) -> Result<(), RepositoryError> {
        let id = item.require_id()?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|i| i.id == Some(id))
            .ok_or(RepositoryError::NotFound)?;
        *row = item.clone();
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.rows.lock().unwrap().retain(|i| i.id != Some(id));
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let count = rows.len() as u64;
        rows.clear();
        Ok(count)
    }

    async fn delete_by_wishlist_id(&self, wishlist_id: i64) -> Result<u64, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|i| i.wishlist_id != wishlist_id);
        Ok((before - rows.len()) as u64)
    }

    async fn get_all(&self) -> Result<Vec<Item>, RepositoryError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find(&self, id: i64) -> Result<Option<Item>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == Some(id))
            .cloned())
    }

    async fn get_by_id(&self, id: i64) -> Result<Item, RepositoryError> {
        self.find(id).await?.ok_or(RepositoryError::NotFound)
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Item>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.name == name)
            .cloned()
            .collect())
    }

    async fn find_by_wishlist_id(&self, wishlist_id: i64) -> Result<Vec<Item>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.wishlist_id == wishlist_id)
            .cloned()
            .collect())
    }

    async fn get_by_wishlist_and_id(
        &self,
        wishlist_id: i64,
        id: i64,
    ) -> Result<Option<Item>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.wishlist_id == wishlist_id && i.id == Some(id))
            .cloned())
    }
}

/// Wishlist store whose backend never answers, as after exhausted retries.
pub struct UnavailableWishlistRepository;

#[async_trait]
impl WishlistRepository for UnavailableWishlistRepository {
    async fn create(&self, _: &Wishlist) -> Result<Wishlist, RepositoryError> {
        Err(RepositoryError::unavailable())
    }
    async fn update(&self, _: &Wishlist) -> Result<(), RepositoryError> {
        Err(RepositoryError::unavailable())
    }
    async fn delete(&self, _: i64) -> Result<(), RepositoryError> {
        Err(RepositoryError::unavailable())
    }
    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        Err(RepositoryError::unavailable())
    }
    async fn get_all(&self) -> Result<Vec<Wishlist>, RepositoryError> {
        Err(RepositoryError::unavailable())
    }
    async fn find(&self, _: i64) -> Result<Option<Wishlist>, RepositoryError> {
        Err(RepositoryError::unavailable())
    }
    async fn get_by_id(&self, _: i64) -> Result<Wishlist, RepositoryError> {
        Err(RepositoryError::unavailable())
    }
    async fn find_by_name(&self, _: &str) -> Result<Vec<Wishlist>, RepositoryError> {
        Err(RepositoryError::unavailable())
    }
    async fn find_by_customer_id(&self, _: i64) -> Result<Vec<Wishlist>, RepositoryError> {
        Err(RepositoryError::unavailable())
    }
}

pub struct TestApp<E> {
    pub client: TestClient<E>,
    pub wishlists: Arc<InMemoryWishlistRepository>,
    pub items: Arc<InMemoryItemRepository>,
}

pub fn test_app(features: FeatureFlags) -> TestApp<impl Endpoint> {
    let wishlists = Arc::new(InMemoryWishlistRepository::default());
    let items = Arc::new(InMemoryItemRepository::default());

    let container = DependencyContainer::with_repositories(
        wishlists.clone(),
        items.clone(),
        ApiKeyConfig::new(API_KEY),
        features,
    );

    TestApp {
        client: TestClient::new(Server::build_app(
            container,
            "http://localhost".to_string(),
        )),
        wishlists,
        items,
    }
}

pub fn unavailable_app() -> TestClient<impl Endpoint> {
    let container = DependencyContainer::with_repositories(
        Arc::new(UnavailableWishlistRepository),
        Arc::new(InMemoryItemRepository::default()),
        ApiKeyConfig::new(API_KEY),
        FeatureFlags::default(),
    );

    TestClient::new(Server::build_app(container, "http://localhost".to_string()))
}

pub async fn body_json(response: TestResponse) -> Value {
    response.0.into_body().into_json().await.unwrap()
}
