use serde_json::Value;

use crate::domain::errors::DataValidationError;
use crate::domain::shared::payload;

const ENTITY: &str = "wishlist";

/// A named collection of items owned by a customer.
///
/// `id` is `None` until the repository has persisted the wishlist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wishlist {
    pub id: Option<i64>,
    pub name: String,
    pub customer_id: i64,
}

impl Wishlist {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: i64, name: String, customer_id: i64) -> Self {
        Self {
            id: Some(id),
            name,
            customer_id,
        }
    }

    /// Overwrites `name` and `customer_id` from a JSON body.
    ///
    /// Any `id` in the body is ignored. On error the wishlist is left untouched.
    pub fn deserialize(&mut self, data: &Value) -> Result<&mut Self, DataValidationError> {
        let object = payload::as_object(data, ENTITY)?;
        let name = payload::required_name(object, ENTITY, "name")?;
        let customer_id = payload::required_i64(object, ENTITY, "customer_id")?;

        self.name = name;
        self.customer_id = customer_id;
        Ok(self)
    }

    /// Returns the persisted id, or `EmptyId` if the wishlist was never created.
    pub fn require_id(&self) -> Result<i64, DataValidationError> {
        match self.id {
            Some(id) if id != 0 => Ok(id),
            _ => Err(DataValidationError::EmptyId),
        }
    }
}
