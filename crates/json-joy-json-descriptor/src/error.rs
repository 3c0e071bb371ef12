//! Construction and decoding errors.
//!
//! Value mismatches are not errors of this kind: they are reported through
//! [`crate::ValidationErrors`].

use thiserror::Error;

use crate::constants::Kind;
use crate::validator::ValidationErrors;

/// A malformed descriptor, caught when it is built or parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("invalid field name {0:?}")]
    InvalidFieldName(String),
    #[error("duplicate field {0:?}")]
    DuplicateField(String),
    #[error("descriptor must be a JSON object")]
    NotAnObject,
    #[error("descriptor has no \"type\"")]
    MissingType,
    #[error("unknown descriptor type {0}")]
    UnknownType(String),
    #[error("{kind} descriptor has no {property:?}")]
    MissingProperty { kind: Kind, property: &'static str },
    #[error("modifier {0:?} must be a boolean")]
    InvalidModifier(&'static str),
    /// An error inside a nested descriptor, located by a JSON pointer into
    /// the descriptor document.
    #[error("{pointer}: {error}")]
    At {
        pointer: String,
        error: Box<DescriptorError>,
    },
}

impl DescriptorError {
    /// Prefix this error's location with `pointer`.
    pub(crate) fn at(self, pointer: String) -> Self {
        match self {
            Self::At { pointer: inner, error } => Self::At {
                pointer: pointer + &inner,
                error,
            },
            other => Self::At {
                pointer,
                error: Box::new(other),
            },
        }
    }

    /// The innermost error, with any location stripped.
    pub fn root_cause(&self) -> &DescriptorError {
        match self {
            Self::At { error, .. } => error.root_cause(),
            other => other,
        }
    }
}

/// Failure of [`crate::decode`].
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
    #[error("deserialize: {0}")]
    Deserialize(#[from] serde_json::Error),
}
