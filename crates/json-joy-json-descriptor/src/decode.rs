//! Typed decoding: validate, then deserialize the normalized value.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::descriptor::Descriptor;
use crate::error::DecodeError;

/// Validate `value` against `descriptor` and deserialize the normalized
/// result into `T`.
///
/// Absent fields are left out before deserializing, so they land in
/// `Option` fields as `None`. An absent root is deserialized from `null`.
///
/// # Example
///
/// ```
/// use json_joy_json_descriptor::{decode, number, object, string, Meta};
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Deserialize)]
/// struct User {
///     id: u32,
///     name: Option<String>,
/// }
///
/// let d = object([("id", number(None)), ("name", string(Some(Meta::OPTIONAL)))], None).unwrap();
/// let user: User = decode(&d, &json!({"id": 5})).unwrap();
/// assert_eq!(user.id, 5);
/// assert!(user.name.is_none());
/// ```
pub fn decode<T: DeserializeOwned>(
    descriptor: &Descriptor,
    value: &Value,
) -> Result<T, DecodeError> {
    let normalized = descriptor.validate(value)?;
    let json = normalized.into_json().unwrap_or(Value::Null);
    Ok(serde_json::from_value(json)?)
}

impl Descriptor {
    pub fn decode<T: DeserializeOwned>(&self, value: &Value) -> Result<T, DecodeError> {
        decode(self, value)
    }
}
