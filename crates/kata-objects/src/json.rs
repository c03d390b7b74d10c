use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ObjectsError;

/// Serialize `value` as compact JSON.
///
/// ```
/// assert_eq!(kata_objects::to_json(&[1, 2, 3]).unwrap(), "[1,2,3]");
/// ```
///
/// # Errors
///
/// Returns [`ObjectsError::Json`] if `value` cannot be represented as JSON,
/// e.g. a map with non-string keys.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ObjectsError> {
    Ok(serde_json::to_string(value)?)
}

/// Deserialize a value of type `T` from JSON text.
///
/// # Errors
///
/// Returns [`ObjectsError::Json`] if `json` is malformed or does not match `T`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, ObjectsError> {
    Ok(serde_json::from_str(json)?)
}
