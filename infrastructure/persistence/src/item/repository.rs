use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;
use business::domain::item::repository::ItemRepository;

use crate::retry::{RetryPolicy, with_retry};

use super::entity::ItemEntity;

const SELECT_COLUMNS: &str = "SELECT id, name, wishlist_id, purchased FROM items";

pub struct ItemRepositoryPostgres {
    pool: PgPool,
    retry: RetryPolicy,
}

impl ItemRepositoryPostgres {
    pub fn new(pool: PgPool, retry: RetryPolicy) -> Self {
        Self { pool, retry }
    }

    async fn fetch_many(&self, sql: &str, key: Option<Key>) -> Result<Vec<Item>, RepositoryError> {
        let pool = &self.pool;

        let entities = with_retry(&self.retry, || {
            let query = sqlx::query_as::<_, ItemEntity>(sql);
            let query = match &key {
                Some(Key::Id(value)) => query.bind(*value),
                Some(Key::Name(value)) => query.bind(value.clone()),
                None => query,
            };
            query.fetch_all(pool)
        })
        .await?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}

/// Single filter value for the list queries.
enum Key {
    Id(i64),
    Name(String),
}

#[async_trait]
impl ItemRepository for ItemRepositoryPostgres {
    async fn create(&self, item: &Item) -> Result<Item, RepositoryError> {
        let pool = &self.pool;
        let name = item.name.clone();
        let (wishlist_id, purchased) = (item.wishlist_id, item.purchased);

        let entity = with_retry(&self.retry, move || {
            sqlx::query_as::<_, ItemEntity>(
                r#"INSERT INTO items (name, wishlist_id, purchased)
                VALUES ($1, $2, $3)
                RETURNING id, name, wishlist_id, purchased"#,
            )
            .bind(name.clone())
            .bind(wishlist_id)
            .bind(purchased)
            .fetch_one(pool)
        })
        .await?;

        tracing::debug!(id = entity.id, wishlist_id, "Item row inserted");
        Ok(entity.into_domain())
    }

    async fn update(&self, item: &Item) -> Result<(), RepositoryError> {
        let id = item.require_id()?;
        let pool = &self.pool;
        let name = item.name.clone();
        let (wishlist_id, purchased) = (item.wishlist_id, item.purchased);

        let result = with_retry(&self.retry, move || {
            sqlx::query(
                "UPDATE items SET name = $1, wishlist_id = $2, purchased = $3 WHERE id = $4",
            )
            .bind(name.clone())
            .bind(wishlist_id)
            .bind(purchased)
            .bind(id)
            .execute(pool)
        })
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found());
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let pool = &self.pool;

        with_retry(&self.retry, move || {
            sqlx::query("DELETE FROM items WHERE id = $1")
                .bind(id)
                .execute(pool)
        })
        .await?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let pool = &self.pool;

        let result = with_retry(&self.retry, move || {
            sqlx::query("DELETE FROM items").execute(pool)
        })
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_by_wishlist_id(&self, wishlist_id: i64) -> Result<u64, RepositoryError> {
        let pool = &self.pool;

        let result = with_retry(&self.retry, move || {
            sqlx::query("DELETE FROM items WHERE wishlist_id = $1")
                .bind(wishlist_id)
                .execute(pool)
        })
        .await?;

        Ok(result.rows_affected())
    }

    async fn get_all(&self) -> Result<Vec<Item>, RepositoryError> {
        self.fetch_many(&format!("{SELECT_COLUMNS} ORDER BY id"), None)
            .await
    }

    async fn find(&self, id: i64) -> Result<Option<Item>, RepositoryError> {
        let pool = &self.pool;
        let sql = format!("{SELECT_COLUMNS} WHERE id = $1");

        let entity = with_retry(&self.retry, || {
            sqlx::query_as::<_, ItemEntity>(&sql)
                .bind(id)
                .fetch_optional(pool)
        })
        .await?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn get_by_id(&self, id: i64) -> Result<Item, RepositoryError> {
        self.find(id).await?.ok_or(RepositoryError::NotFound)
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Item>, RepositoryError> {
        self.fetch_many(
            &format!("{SELECT_COLUMNS} WHERE name = $1 ORDER BY id"),
            Some(Key::Name(name.to_string())),
        )
        .await
    }

    async fn find_by_wishlist_id(&self, wishlist_id: i64) -> Result<Vec<Item>, RepositoryError> {
        self.fetch_many(
            &format!("{SELECT_COLUMNS} WHERE wishlist_id = $1 ORDER BY id"),
            Some(Key::Id(wishlist_id)),
        )
        .await
    }

    async fn get_by_wishlist_and_id(
        &self,
        wishlist_id: i64,
        id: i64,
    ) -> Result<Option<Item>, RepositoryError> {
        let pool = &self.pool;
        let sql = format!("{SELECT_COLUMNS} WHERE wishlist_id = $1 AND id = $2");

        let entity = with_retry(&self.retry, || {
            sqlx::query_as::<_, ItemEntity>(&sql)
                .bind(wishlist_id)
                .bind(id)
                .fetch_optional(pool)
        })
        .await?;

        Ok(entity.map(|e| e.into_domain()))
    }
}
