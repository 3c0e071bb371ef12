//! Descriptor builders.
//!
//! All builders are pure. Only [`object`] can fail, because field names are
//! checked when the descriptor is built rather than when it is used.

use indexmap::map::Entry;
use indexmap::IndexMap;

use super::classes::*;
use super::meta::Meta;
use super::Descriptor;
use crate::error::DescriptorError;

pub fn boolean(meta: Option<Meta>) -> Descriptor {
    Descriptor::Boolean(BoolDescriptor {
        meta: meta.unwrap_or_default(),
    })
}

pub fn number(meta: Option<Meta>) -> Descriptor {
    Descriptor::Number(NumDescriptor {
        meta: meta.unwrap_or_default(),
    })
}

pub fn string(meta: Option<Meta>) -> Descriptor {
    Descriptor::String(StrDescriptor {
        meta: meta.unwrap_or_default(),
    })
}

/// A descriptor accepting only `null`.
pub fn null_() -> Descriptor {
    Descriptor::Null(NullDescriptor::new())
}

/// Build an object descriptor from `(name, descriptor)` pairs.
///
/// Fields keep the order they are given in. An empty list describes an
/// object with no required fields.
///
/// # Errors
///
/// - [`DescriptorError::InvalidFieldName`] if a name is not identifier-like
/// - [`DescriptorError::DuplicateField`] if a name appears twice
///
/// # Example
///
/// ```
/// use json_joy_json_descriptor::{number, object, string, Meta};
///
/// let user = object(
///     [("id", number(None)), ("name", string(Some(Meta::OPTIONAL)))],
///     None,
/// )
/// .unwrap();
/// assert_eq!(user.as_object().unwrap().len(), 2);
/// assert!(object([("not a name", number(None))], None).is_err());
/// ```
pub fn object<I, K>(fields: I, meta: Option<Meta>) -> Result<Descriptor, DescriptorError>
where
    I: IntoIterator<Item = (K, Descriptor)>,
    K: Into<String>,
{
    let mut map = IndexMap::new();
    for (name, descriptor) in fields {
        let name = name.into();
        if !is_identifier(&name) {
            return Err(DescriptorError::InvalidFieldName(name));
        }
        match map.entry(name) {
            Entry::Occupied(e) => return Err(DescriptorError::DuplicateField(e.key().clone())),
            Entry::Vacant(e) => {
                e.insert(descriptor);
            }
        }
    }
    Ok(Descriptor::Object(ObjDescriptor {
        fields: map,
        meta: meta.unwrap_or_default(),
    }))
}

pub fn array(item: Descriptor, meta: Option<Meta>) -> Descriptor {
    let mut arr = ArrDescriptor::new(item);
    arr.meta = meta.unwrap_or_default();
    Descriptor::Array(arr)
}

/// Identifier-like field names: a letter, `_` or `$`, followed by letters,
/// digits, `_` or `$`.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
