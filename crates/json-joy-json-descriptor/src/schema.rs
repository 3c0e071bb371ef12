//! Descriptor document format.
//!
//! A descriptor serializes to plain JSON in the literal shape it is usually
//! written in by hand:
//!
//! ```json
//! {
//!   "type": "object",
//!   "properties": {
//!     "id": { "type": "number" },
//!     "tags": { "type": "array", "items": { "type": "string" }, "optional": true }
//!   }
//! }
//! ```
//!
//! Modifiers are written only when set. Parsing applies the same field-name
//! checks as [`crate::object`].

use serde_json::{Map, Value};

use crate::constants::Kind;
use crate::descriptor::{array, boolean, null_, number, object, string, Descriptor, Meta};
use crate::error::DescriptorError;
use crate::validator::escape_component;

impl Descriptor {
    /// Serialize to a descriptor document.
    pub fn to_schema(&self) -> Value {
        let mut out = Map::new();
        out.insert("type".into(), Value::String(self.kind().name().into()));
        match self {
            Self::Object(d) => {
                let properties: Map<String, Value> = d
                    .fields()
                    .map(|(name, field)| (name.to_string(), field.to_schema()))
                    .collect();
                out.insert("properties".into(), Value::Object(properties));
            }
            Self::Array(d) => {
                out.insert("items".into(), d.item.to_schema());
            }
            Self::Null(_) | Self::Boolean(_) | Self::Number(_) | Self::String(_) => {}
        }
        let meta = self.meta();
        if meta.optional {
            out.insert("optional".into(), Value::Bool(true));
        }
        if meta.nullable {
            out.insert("nullable".into(), Value::Bool(true));
        }
        Value::Object(out)
    }

    /// Parse a descriptor document.
    ///
    /// # Errors
    ///
    /// Returns a [`DescriptorError`]; problems below the root are wrapped in
    /// [`DescriptorError::At`] with a pointer into the document.
    ///
    /// [`DescriptorError::DuplicateField`] cannot come from a document: a
    /// `"properties"` map parsed by `serde_json` has already collapsed
    /// repeated keys, keeping the last value.
    ///
    /// # Example
    ///
    /// ```
    /// use json_joy_json_descriptor::{Descriptor, Kind};
    /// use serde_json::json;
    ///
    /// let d = Descriptor::from_schema(&json!({
    ///     "type": "array",
    ///     "items": {"type": "string", "nullable": true}
    /// }))
    /// .unwrap();
    /// assert_eq!(d.kind(), Kind::Array);
    /// assert!(d.as_array().unwrap().item.is_nullable());
    /// ```
    pub fn from_schema(schema: &Value) -> Result<Descriptor, DescriptorError> {
        let map = schema.as_object().ok_or(DescriptorError::NotAnObject)?;
        let kind = match map.get("type") {
            None => return Err(DescriptorError::MissingType),
            Some(Value::String(name)) => Kind::from_name(name).ok_or_else(|| {
                DescriptorError::UnknownType(Value::String(name.clone()).to_string())
            })?,
            Some(other) => return Err(DescriptorError::UnknownType(other.to_string())),
        };
        let meta = Meta::new(modifier(map, "optional")?, modifier(map, "nullable")?);
        tracing::trace!(%kind, ?meta, "parsing descriptor");

        let descriptor = match kind {
            Kind::Null => null_(),
            Kind::Boolean => boolean(None),
            Kind::Number => number(None),
            Kind::String => string(None),
            Kind::Array => {
                let items = map.get("items").ok_or(DescriptorError::MissingProperty {
                    kind,
                    property: "items",
                })?;
                let item = Descriptor::from_schema(items).map_err(|e| e.at("/items".into()))?;
                array(item, None)
            }
            Kind::Object => {
                let properties = map
                    .get("properties")
                    .ok_or(DescriptorError::MissingProperty {
                        kind,
                        property: "properties",
                    })?
                    .as_object()
                    .ok_or_else(|| DescriptorError::NotAnObject.at("/properties".into()))?;
                let mut fields = Vec::with_capacity(properties.len());
                for (name, field) in properties {
                    let field = Descriptor::from_schema(field)
                        .map_err(|e| e.at(format!("/properties/{}", escape_component(name))))?;
                    fields.push((name.clone(), field));
                }
                object(fields, None)?
            }
        };
        Ok(descriptor.with_meta(meta))
    }
}

fn modifier(map: &Map<String, Value>, name: &'static str) -> Result<bool, DescriptorError> {
    match map.get(name) {
        None => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(DescriptorError::InvalidModifier(name)),
    }
}

impl TryFrom<Value> for Descriptor {
    type Error = DescriptorError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Descriptor::from_schema(&value)
    }
}

impl From<Descriptor> for Value {
    fn from(descriptor: Descriptor) -> Self {
        descriptor.to_schema()
    }
}
