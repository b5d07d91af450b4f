use serde_json::Value;

use crate::domain::errors::DataValidationError;
use crate::domain::shared::payload;

const ENTITY: &str = "item";

/// A named entry belonging to exactly one wishlist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    pub id: Option<i64>,
    pub name: String,
    pub wishlist_id: i64,
    pub purchased: bool,
}

impl Item {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: i64, name: String, wishlist_id: i64, purchased: bool) -> Self {
        Self {
            id: Some(id),
            name,
            wishlist_id,
            purchased,
        }
    }

    /// Overwrites `name`, `wishlist_id` and `purchased` from a JSON body.
    ///
    /// `purchased` defaults to `false` when absent. Any `id` in the body is
    /// ignored. On error the item is left untouched.
    pub fn deserialize(&mut self, data: &Value) -> Result<&mut Self, DataValidationError> {
        let object = payload::as_object(data, ENTITY)?;
        let name = payload::required_name(object, ENTITY, "name")?;
        let wishlist_id = payload::required_i64(object, ENTITY, "wishlist_id")?;
        let purchased = payload::optional_bool(object, ENTITY, "purchased", false)?;

        self.name = name;
        self.wishlist_id = wishlist_id;
        self.purchased = purchased;
        Ok(self)
    }

    pub fn require_id(&self) -> Result<i64, DataValidationError> {
        match self.id {
            Some(id) if id != 0 => Ok(id),
            _ => Err(DataValidationError::EmptyId),
        }
    }

    pub fn purchase(&mut self) {
        self.purchased = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_reject_when_name_empty() {
        let mut item = Item::default();

        let err = item
            .deserialize(&json!({ "name": "", "wishlist_id": 3 }))
            .unwrap_err();

        assert!(matches!(err, DataValidationError::EmptyField { .. }));
    }

    #[test]
    fn should_reject_name_over_column_width() {
        let mut item = Item::default();

        let err = item
            .deserialize(&json!({ "name": "b".repeat(64), "wishlist_id": 3 }))
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid item: name must be at most 63 characters");
        assert_eq!(item, Item::default());
    }

    #[test]
    fn should_deserialize_without_purchased() {
        let mut item = Item::default();

        item.deserialize(&json!({ "id": 4, "name": "Book", "wishlist_id": 2 }))
            .unwrap();

        assert_eq!(item.id, None);
        assert_eq!(item.name, "Book");
        assert_eq!(item.wishlist_id, 2);
        assert!(!item.purchased);
    }

    #[test]
    fn should_deserialize_purchased_flag() {
        let mut item = Item::default();

        item.deserialize(&json!({ "name": "Lamp", "wishlist_id": 2, "purchased": true }))
            .unwrap();

        assert!(item.purchased);
    }

    #[test]
    fn should_name_missing_wishlist_id() {
        let mut item = Item::default();

        let err = item.deserialize(&json!({ "name": "Book" })).unwrap_err();

        assert_eq!(err.to_string(), "Invalid item: missing wishlist_id");
    }

    #[test]
    fn should_reject_array_body() {
        let mut item = Item::default();

        let err = item.deserialize(&json!([1, 2, 3])).unwrap_err();

        assert_eq!(err, DataValidationError::BadData { entity: "item" });
    }

    #[test]
    fn should_only_flip_purchased_flag() {
        let mut item = Item::from_repository(1, "Book".to_string(), 7, false);

        item.purchase();

        assert_eq!(item, Item::from_repository(1, "Book".to_string(), 7, true));
    }
}
