use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use thiserror::Error;

use crate::constants::ValueKind;
use crate::value::Normalized;

/// One step from the root of a value: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathStep {
    Key(String),
    Index(usize),
}

impl From<&str> for PathStep {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for PathStep {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathStep {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(k) => f.write_str(k),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

/// Escape one reference token: `~` becomes `~0`, `/` becomes `~1`.
pub fn escape_component(component: &str) -> String {
    component.replace('~', "~0").replace('/', "~1")
}

/// Render a path as an RFC 6901 JSON pointer. The root is `""`.
pub fn format_pointer(path: &[PathStep]) -> String {
    let mut out = String::new();
    for step in path {
        out.push('/');
        match step {
            PathStep::Key(k) => out.push_str(&escape_component(k)),
            PathStep::Index(i) => out.push_str(&i.to_string()),
        }
    }
    out
}

/// A single path-qualified mismatch between a descriptor and a value.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[error("{}: expected {expected}, found {found}", format_pointer(.path))]
pub struct ValidationError {
    pub path: Vec<PathStep>,
    pub expected: ValueKind,
    pub found: ValueKind,
}

impl ValidationError {
    pub fn new(path: Vec<PathStep>, expected: impl Into<ValueKind>, found: ValueKind) -> Self {
        Self {
            path,
            expected: expected.into(),
            found,
        }
    }

    pub fn pointer(&self) -> String {
        format_pointer(&self.path)
    }
}

/// Every mismatch found in one validation pass, in depth-first order.
///
/// Never empty.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
#[error("{}", join_errors(.0))]
pub struct ValidationErrors(Vec<ValidationError>);

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    /// Returns `None` when `errors` is empty.
    pub fn new(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }
}

impl Deref for ValidationErrors {
    type Target = [ValidationError];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

pub type ValidationResult = Result<Normalized, ValidationErrors>;

/// Policy for object keys the descriptor does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownKeys {
    /// Ignore them. Extra keys are dropped from the normalized copy, so it
    /// equals the input only when the input has no undeclared keys.
    #[default]
    Strip,
    /// Copy them into the normalized value without validation.
    Keep,
    /// Report each one as a mismatch.
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidatorOptions {
    pub unknown_keys: UnknownKeys,
    /// Stop collecting after this many errors. `None` collects all of them.
    pub max_errors: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_formatting() {
        assert_eq!(format_pointer(&[]), "");
        assert_eq!(
            format_pointer(&["roles".into(), PathStep::Index(1), "id".into()]),
            "/roles/1/id"
        );
        assert_eq!(format_pointer(&["a/b".into(), "c~d".into()]), "/a~1b/c~0d");
    }

    #[test]
    fn component_escaping_order() {
        assert_eq!(escape_component("plain"), "plain");
        assert_eq!(escape_component("~1"), "~01");
        assert_eq!(escape_component("/~"), "~1~0");
    }

    #[test]
    fn error_display() {
        let err = ValidationError::new(
            vec![PathStep::Index(1), "id".into()],
            crate::Kind::Number,
            ValueKind::String,
        );
        assert_eq!(err.to_string(), "/1/id: expected number, found string");
        let root = ValidationError::new(vec![], crate::Kind::String, ValueKind::Absent);
        assert_eq!(root.to_string(), ": expected string, found absent");
    }

    #[test]
    fn errors_never_empty() {
        assert!(ValidationErrors::new(vec![]).is_none());
        let errors = ValidationErrors::new(vec![
            ValidationError::new(vec!["a".into()], crate::Kind::Number, ValueKind::Null),
            ValidationError::new(vec!["b".into()], crate::Kind::Number, ValueKind::Absent),
        ])
        .unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.to_string(),
            "/a: expected number, found null; /b: expected number, found absent"
        );
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let opts: ValidatorOptions = serde_json::from_str(r#"{"unknownKeys": "reject"}"#).unwrap();
        assert_eq!(opts.unknown_keys, UnknownKeys::Reject);
        assert_eq!(opts.max_errors, None);
        let opts: ValidatorOptions = serde_json::from_str(r#"{"maxErrors": 3}"#).unwrap();
        assert_eq!(opts.unknown_keys, UnknownKeys::Strip);
        assert_eq!(opts.max_errors, Some(3));
    }
}
