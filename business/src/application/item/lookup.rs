use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::wishlist::repository::WishlistRepository;

/// Fails with `WishlistNotFound` unless the wishlist exists.
pub async fn ensure_wishlist(
    wishlists: &dyn WishlistRepository,
    wishlist_id: i64,
) -> Result<(), ItemError> {
    wishlists
        .get_by_id(wishlist_id)
        .await
        .map(|_| ())
        .map_err(|e| ItemError::from_wishlist_lookup(wishlist_id, e))
}

/// Loads an item scoped to its parent wishlist, checking the parent first.
pub async fn load_item(
    wishlists: &dyn WishlistRepository,
    items: &dyn ItemRepository,
    wishlist_id: i64,
    item_id: i64,
) -> Result<Item, ItemError> {
    ensure_wishlist(wishlists, wishlist_id).await?;

    items
        .get_by_wishlist_and_id(wishlist_id, item_id)
        .await?
        .ok_or(ItemError::NotFound {
            wishlist_id,
            item_id,
        })
}
