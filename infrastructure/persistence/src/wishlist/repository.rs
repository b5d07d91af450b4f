use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::wishlist::model::Wishlist;
use business::domain::wishlist::repository::WishlistRepository;

use crate::retry::{RetryPolicy, with_retry};

use super::entity::WishlistEntity;

const SELECT_COLUMNS: &str = "SELECT id, name, customer_id FROM wishlists";

pub struct WishlistRepositoryPostgres {
    pool: PgPool,
    retry: RetryPolicy,
}

impl WishlistRepositoryPostgres {
    pub fn new(pool: PgPool, retry: RetryPolicy) -> Self {
        Self { pool, retry }
    }
}

#[async_trait]
impl WishlistRepository for WishlistRepositoryPostgres {
    async fn create(&self, wishlist: &Wishlist) -> Result<Wishlist, RepositoryError> {
        let pool = &self.pool;
        let name = wishlist.name.clone();
        let customer_id = wishlist.customer_id;

        let entity = with_retry(&self.retry, move || {
            sqlx::query_as::<_, WishlistEntity>(
                "INSERT INTO wishlists (name, customer_id) VALUES ($1, $2) RETURNING id, name, customer_id",
            )
            .bind(name.clone())
            .bind(customer_id)
            .fetch_one(pool)
        })
        .await?;

        tracing::debug!(id = entity.id, "Wishlist row inserted");
        Ok(entity.into_domain())
    }

    async fn update(&self, wishlist: &Wishlist) -> Result<(), RepositoryError> {
        let id = wishlist.require_id()?;
        let pool = &self.pool;
        let name = wishlist.name.clone();
        let customer_id = wishlist.customer_id;

        let result = with_retry(&self.retry, move || {
            sqlx::query("UPDATE wishlists SET name = $1, customer_id = $2 WHERE id = $3")
                .bind(name.clone())
                .bind(customer_id)
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
            sqlx::query("DELETE FROM wishlists WHERE id = $1")
                .bind(id)
                .execute(pool)
        })
        .await?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let pool = &self.pool;

        let result = with_retry(&self.retry, move || {
            sqlx::query("DELETE FROM wishlists").execute(pool)
        })
        .await?;

        Ok(result.rows_affected())
    }

    async fn get_all(&self) -> Result<Vec<Wishlist>, RepositoryError> {
        let pool = &self.pool;
        let sql = format!("{SELECT_COLUMNS} ORDER BY id");

        let entities = with_retry(&self.retry, || {
            sqlx::query_as::<_, WishlistEntity>(&sql).fetch_all(pool)
        })
        .await?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find(&self, id: i64) -> Result<Option<Wishlist>, RepositoryError> {
        let pool = &self.pool;
        let sql = format!("{SELECT_COLUMNS} WHERE id = $1");

        let entity = with_retry(&self.retry, || {
            sqlx::query_as::<_, WishlistEntity>(&sql)
                .bind(id)
                .fetch_optional(pool)
        })
        .await?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn get_by_id(&self, id: i64) -> Result<Wishlist, RepositoryError> {
        self.find(id).await?.ok_or(RepositoryError::NotFound)
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Wishlist>, RepositoryError> {
        let pool = &self.pool;
        let sql = format!("{SELECT_COLUMNS} WHERE name = $1 ORDER BY id");
        let name = name.to_string();

        let entities = with_retry(&self.retry, || {
            sqlx::query_as::<_, WishlistEntity>(&sql)
                .bind(name.clone())
                .fetch_all(pool)
        })
        .await?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_customer_id(
        &self,
        customer_id: i64,
    ) -> Result<Vec<Wishlist>, RepositoryError> {
        let pool = &self.pool;
        let sql = format!("{SELECT_COLUMNS} WHERE customer_id = $1 ORDER BY id");

        let entities = with_retry(&self.retry, || {
            sqlx::query_as::<_, WishlistEntity>(&sql)
                .bind(customer_id)
                .fetch_all(pool)
        })
        .await?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
