/// Raised when a request payload cannot be turned into a domain entity,
/// or when an entity is used in a way that needs a persisted identity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataValidationError {
    #[error("Invalid {entity}: missing {field}")]
    MissingField { entity: &'static str, field: String },
    #[error("Invalid {entity}: bad value for {field}")]
    InvalidField { entity: &'static str, field: String },
    #[error("Invalid {entity}: {field} must not be empty")]
    EmptyField { entity: &'static str, field: String },
    #[error("Invalid {entity}: {field} must be at most {max} characters")]
    TooLong {
        entity: &'static str,
        field: String,
        max: usize,
    },
    #[error("Invalid {entity}: body of request contained bad or no data")]
    BadData { entity: &'static str },
    #[error("Update called with empty ID field")]
    EmptyId,
}

/// Repository errors for domain layer.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.database_error")]
    DatabaseError,
    /// The store stayed unreachable after every retry attempt.
    #[error("repository.unavailable")]
    Unavailable,
    #[error(transparent)]
    Validation(#[from] DataValidationError),
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn database_error() -> Self {
        RepositoryError::DatabaseError
    }
    pub fn unavailable() -> Self {
        RepositoryError::Unavailable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_missing_field_in_message() {
        let err = DataValidationError::MissingField {
            entity: "wishlist",
            field: "name".to_string(),
        };

        assert_eq!(err.to_string(), "Invalid wishlist: missing name");
    }

    #[test]
    fn should_state_limit_in_too_long_message() {
        let err = DataValidationError::TooLong {
            entity: "wishlist",
            field: "name".to_string(),
            max: 63,
        };

        assert_eq!(
            err.to_string(),
            "Invalid wishlist: name must be at most 63 characters"
        );
    }

    #[test]
    fn should_describe_non_object_payload() {
        let err = DataValidationError::BadData { entity: "item" };

        assert_eq!(
            err.to_string(),
            "Invalid item: body of request contained bad or no data"
        );
    }

    #[test]
    fn should_pass_validation_message_through_repository_error() {
        let err: RepositoryError = DataValidationError::EmptyId.into();

        assert_eq!(err.to_string(), "Update called with empty ID field");
    }
}
