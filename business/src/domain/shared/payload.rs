//! Helpers for reading entity fields out of a loosely-typed JSON body.

use serde_json::{Map, Value};

use crate::domain::errors::DataValidationError;

/// Width of the `name` columns in the database.
pub const MAX_NAME_LENGTH: usize = 63;

/// Returns the body as a JSON object, or `BadData` if it is any other shape.
pub fn as_object<'a>(
    data: &'a Value,
    entity: &'static str,
) -> Result<&'a Map<String, Value>, DataValidationError> {
    data.as_object()
        .ok_or(DataValidationError::BadData { entity })
}

fn lookup<'a>(
    object: &'a Map<String, Value>,
    entity: &'static str,
    field: &str,
) -> Result<&'a Value, DataValidationError> {
    match object.get(field) {
        Some(Value::Null) | None => Err(DataValidationError::MissingField {
            entity,
            field: field.to_string(),
        }),
        Some(value) => Ok(value),
    }
}

fn invalid(entity: &'static str, field: &str) -> DataValidationError {
    DataValidationError::InvalidField {
        entity,
        field: field.to_string(),
    }
}

/// Reads a required, non-blank string field of at most `MAX_NAME_LENGTH` characters.
pub fn required_name(
    object: &Map<String, Value>,
    entity: &'static str,
    field: &str,
) -> Result<String, DataValidationError> {
    let name = lookup(object, entity, field)?
        .as_str()
        .ok_or_else(|| invalid(entity, field))?;

    if name.trim().is_empty() {
        return Err(DataValidationError::EmptyField {
            entity,
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(DataValidationError::TooLong {
            entity,
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(name.to_string())
}

/// Reads a required integer field. Integral strings such as `"7"` are
/// accepted since HTML forms submit every value as text.
pub fn required_i64(
    object: &Map<String, Value>,
    entity: &'static str,
    field: &str,
) -> Result<i64, DataValidationError> {
    let value = lookup(object, entity, field)?;

    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .ok_or_else(|| invalid(entity, field))
}

/// Reads an optional boolean field, falling back to `default` when absent.
pub fn optional_bool(
    object: &Map<String, Value>,
    entity: &'static str,
    field: &str,
    default: bool,
) -> Result<bool, DataValidationError> {
    match object.get(field) {
        Some(Value::Null) | None => Ok(default),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(invalid(entity, field)),
    }
}
