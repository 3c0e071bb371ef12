//! Normalized value tree produced by successful validation.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::{Number, Value};

use crate::constants::ValueKind;

/// A validated value, rebuilt to mirror the descriptor it was checked
/// against.
///
/// Unlike [`serde_json::Value`] it can represent absence, so an optional
/// field that was missing still shows up as `Absent` under its name.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Normalized {
    #[default]
    Absent,
    Null,
    Boolean(bool),
    Number(Number),
    String(String),
    Array(Vec<Normalized>),
    Object(IndexMap<String, Normalized>),
}

impl Normalized {
    /// Copy a JSON value as-is, without any descriptor.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Boolean(*b),
            Value::Number(n) => Self::Number(n.clone()),
            Value::String(s) => Self::String(s.clone()),
            Value::Array(items) => Self::Array(items.iter().map(Self::from_json).collect()),
            Value::Object(map) => Self::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Self::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Convert back to JSON. Absent object fields are dropped; an absent
    /// root yields `None`.
    pub fn to_json(&self) -> Option<Value> {
        Some(match self {
            Self::Absent => return None,
            Self::Null => Value::Null,
            Self::Boolean(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
            Self::String(s) => Value::String(s.clone()),
            Self::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|v| v.to_json().unwrap_or(Value::Null))
                    .collect(),
            ),
            Self::Object(map) => Value::Object(
                map.iter()
                    .filter_map(|(k, v)| v.to_json().map(|v| (k.clone(), v)))
                    .collect(),
            ),
        })
    }

    pub fn into_json(self) -> Option<Value> {
        Some(match self {
            Self::Absent => return None,
            Self::Null => Value::Null,
            Self::Boolean(b) => Value::Bool(b),
            Self::Number(n) => Value::Number(n),
            Self::String(s) => Value::String(s),
            Self::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(|v| v.into_json().unwrap_or(Value::Null))
                    .collect(),
            ),
            Self::Object(map) => Value::Object(
                map.into_iter()
                    .filter_map(|(k, v)| v.into_json().map(|v| (k, v)))
                    .collect(),
            ),
        })
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Absent => ValueKind::Absent,
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Field lookup on an object; `None` for other kinds or unknown names.
    pub fn get(&self, key: &str) -> Option<&Normalized> {
        match self {
            Self::Object(map) => map.get(key),
            _ => None,
        }
    }

    pub fn index(&self, i: usize) -> Option<&Normalized> {
        match self {
            Self::Array(items) => items.get(i),
            _ => None,
        }
    }
}

impl Serialize for Normalized {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Absent | Self::Null => serializer.serialize_unit(),
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::Number(n) => n.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(map) => {
                let present = map.iter().filter(|(_, v)| !v.is_absent());
                let mut out = serializer.serialize_map(Some(present.clone().count()))?;
                for (k, v) in present {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}
