//! Descriptor model.
//!
//! - `Descriptor` enum: the sum type of all descriptor kinds
//! - Individual structs: `NullDescriptor`, `ObjDescriptor`, etc.
//! - `builder`: free functions constructing checked descriptors

pub mod builder;
pub mod classes;
pub mod meta;

pub use builder::{array, boolean, null_, number, object, string};
pub use classes::*;
pub use meta::Meta;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::Kind;
use crate::validator::{self, ValidationResult, ValidatorOptions};

/// Immutable description of an expected value shape.
///
/// Serializes to (and parses from) the descriptor document form, for example
/// `{"type": "array", "items": {"type": "string"}, "optional": true}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum Descriptor {
    Null(NullDescriptor),
    Boolean(BoolDescriptor),
    Number(NumDescriptor),
    String(StrDescriptor),
    Object(ObjDescriptor),
    Array(ArrDescriptor),
}

impl Descriptor {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Null(d) => d.kind(),
            Self::Boolean(d) => d.kind(),
            Self::Number(d) => d.kind(),
            Self::String(d) => d.kind(),
            Self::Object(d) => d.kind(),
            Self::Array(d) => d.kind(),
        }
    }

    pub fn meta(&self) -> &Meta {
        match self {
            Self::Null(d) => &d.meta,
            Self::Boolean(d) => &d.meta,
            Self::Number(d) => &d.meta,
            Self::String(d) => &d.meta,
            Self::Object(d) => &d.meta,
            Self::Array(d) => &d.meta,
        }
    }

    fn meta_mut(&mut self) -> &mut Meta {
        match self {
            Self::Null(d) => &mut d.meta,
            Self::Boolean(d) => &mut d.meta,
            Self::Number(d) => &mut d.meta,
            Self::String(d) => &mut d.meta,
            Self::Object(d) => &mut d.meta,
            Self::Array(d) => &mut d.meta,
        }
    }

    pub fn is_optional(&self) -> bool {
        self.meta().optional
    }

    pub fn is_nullable(&self) -> bool {
        self.meta().nullable
    }

    /// Returns this descriptor with `meta` replacing its modifiers.
    pub fn with_meta(mut self, meta: Meta) -> Self {
        *self.meta_mut() = meta;
        self
    }

    /// Returns this descriptor with the optional modifier set.
    pub fn optional(mut self) -> Self {
        self.meta_mut().optional = true;
        self
    }

    /// Returns this descriptor with the nullable modifier set.
    pub fn nullable(mut self) -> Self {
        self.meta_mut().nullable = true;
        self
    }

    pub fn as_object(&self) -> Option<&ObjDescriptor> {
        match self {
            Self::Object(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrDescriptor> {
        match self {
            Self::Array(d) => Some(d),
            _ => None,
        }
    }

    /// Validate a present value with default options.
    pub fn validate(&self, value: &Value) -> ValidationResult {
        validator::validate(Some(value), self, &ValidatorOptions::default(), &[])
    }

    /// Validate a value that may be absent, such as a looked-up object field.
    pub fn validate_field(&self, value: Option<&Value>) -> ValidationResult {
        validator::validate(value, self, &ValidatorOptions::default(), &[])
    }

    pub fn validate_with(&self, value: &Value, opts: &ValidatorOptions) -> ValidationResult {
        validator::validate(Some(value), self, opts, &[])
    }

    /// Fast conformance check; stops at the first mismatch.
    pub fn is_valid(&self, value: &Value) -> bool {
        let opts = ValidatorOptions {
            max_errors: Some(1),
            ..Default::default()
        };
        validator::validate(Some(value), self, &opts, &[]).is_ok()
    }

    /// The TypeScript type this descriptor describes, as source text.
    pub fn inferred_type(&self) -> String {
        crate::typescript::to_text(&crate::typescript::to_typescript_ast(self))
    }
}

impl std::fmt::Display for Descriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}
