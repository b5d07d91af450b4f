use poem_openapi::Object;

use business::domain::wishlist::model::Wishlist;

#[derive(Debug, Clone, PartialEq, Eq, Object)]
pub struct WishlistResponse {
    /// Wishlist identifier, assigned on creation
    pub id: Option<i64>,
    pub name: String,
    /// Owning customer
    pub customer_id: i64,
}

impl From<Wishlist> for WishlistResponse {
    fn from(wishlist: Wishlist) -> Self {
        Self {
            id: wishlist.id,
            name: wishlist.name,
            customer_id: wishlist.customer_id,
        }
    }
}
