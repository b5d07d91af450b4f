use poem_openapi::Object;

use business::domain::item::model::Item;

#[derive(Debug, Clone, PartialEq, Eq, Object)]
pub struct ItemResponse {
    /// Item identifier, assigned on creation
    pub id: Option<i64>,
    pub name: String,
    /// Wishlist the item belongs to
    pub wishlist_id: i64,
    pub purchased: bool,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            wishlist_id: item.wishlist_id,
            purchased: item.purchased,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem_openapi::types::ToJSON;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn should_serialize_exactly_the_public_fields() {
        let response: ItemResponse = Item::from_repository(9, "Book".into(), 3, true).into();

        assert_eq!(
            response.to_json(),
            Some(json!({"id": 9, "name": "Book", "wishlist_id": 3, "purchased": true}))
        );
    }

    proptest! {
        #[test]
        fn serialized_item_deserializes_to_same_fields(
            id in 1i64..i64::MAX,
            name in "[A-Za-z][A-Za-z0-9 ]{0,40}",
            wishlist_id in any::<i64>(),
            purchased in any::<bool>(),
        ) {
            let original = Item::from_repository(id, name, wishlist_id, purchased);
            let wire = ItemResponse::from(original.clone()).to_json().unwrap_or_default();

            let mut restored = Item::default();
            restored.deserialize(&wire).unwrap();

            prop_assert_eq!(restored.id, None);
            prop_assert_eq!(restored.name, original.name);
            prop_assert_eq!(restored.wishlist_id, original.wishlist_id);
            prop_assert_eq!(restored.purchased, original.purchased);
        }
    }
}
