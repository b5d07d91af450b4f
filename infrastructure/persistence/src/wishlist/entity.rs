use sqlx::FromRow;

use business::domain::wishlist::model::Wishlist;

#[derive(Debug, FromRow)]
pub struct WishlistEntity {
    pub id: i64,
    pub name: String,
    pub customer_id: i64,
}

impl WishlistEntity {
    pub fn into_domain(self) -> Wishlist {
        Wishlist::from_repository(self.id, self.name, self.customer_id)
    }
}
