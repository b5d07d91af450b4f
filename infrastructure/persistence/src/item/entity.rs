use sqlx::FromRow;

use business::domain::item::model::Item;

#[derive(Debug, FromRow)]
pub struct ItemEntity {
    pub id: i64,
    pub name: String,
    pub wishlist_id: i64,
    pub purchased: bool,
}

impl ItemEntity {
    pub fn into_domain(self) -> Item {
        Item::from_repository(self.id, self.name, self.wishlist_id, self.purchased)
    }
}
