//! Runtime validator: checks JSON values against descriptors and rebuilds
//! the accepted ones as [`Normalized`] trees.
//!
//! Mismatches never abort the walk. Every field and element is visited and
//! all errors are reported together, unless `max_errors` caps the report.

use indexmap::IndexMap;
use serde_json::Value;

use crate::constants::{Kind, ValueKind};
use crate::descriptor::{ArrDescriptor, Descriptor, ObjDescriptor};
use crate::value::Normalized;

use super::types::{
    format_pointer, PathStep, UnknownKeys, ValidationError, ValidationErrors, ValidationResult,
    ValidatorOptions,
};

/// Validate `value` against `descriptor`.
///
/// `None` stands for an absent value. `path` is the location of `value`
/// inside some larger document and prefixes every reported error path.
///
/// # Example
///
/// ```
/// use json_joy_json_descriptor::{array, number, validate, PathStep, ValidatorOptions};
/// use serde_json::json;
///
/// let d = array(number(None), None);
/// let errors = validate(Some(&json!([1, "x", 3])), &d, &ValidatorOptions::default(), &[])
///     .unwrap_err();
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].path, vec![PathStep::Index(1)]);
/// ```
pub fn validate(
    value: Option<&Value>,
    descriptor: &Descriptor,
    opts: &ValidatorOptions,
    path: &[PathStep],
) -> ValidationResult {
    let _span = tracing::trace_span!("validate", kind = %descriptor.kind()).entered();
    let mut validator = Validator {
        unknown_keys: opts.unknown_keys,
        limit: opts.max_errors.map(|n| n.max(1)),
        errors: Vec::new(),
    };
    let mut path = path.to_vec();
    let normalized = validator.check(value, descriptor, &mut path);
    if let Some(errors) = ValidationErrors::new(validator.errors) {
        tracing::debug!(errors = errors.len(), "value rejected");
        return Err(errors);
    }
    // A branch yields nothing only after recording an error.
    Ok(normalized.unwrap_or_default())
}

struct Validator {
    unknown_keys: UnknownKeys,
    limit: Option<usize>,
    errors: Vec<ValidationError>,
}

impl Validator {
    fn is_full(&self) -> bool {
        self.limit.is_some_and(|n| self.errors.len() >= n)
    }

    fn fail(
        &mut self,
        path: &[PathStep],
        expected: impl Into<ValueKind>,
        found: ValueKind,
    ) -> Option<Normalized> {
        let expected = expected.into();
        tracing::trace!(pointer = %format_pointer(path), %expected, %found, "mismatch");
        if !self.is_full() {
            self.errors
                .push(ValidationError::new(path.to_vec(), expected, found));
        }
        None
    }

    fn check(
        &mut self,
        value: Option<&Value>,
        descriptor: &Descriptor,
        path: &mut Vec<PathStep>,
    ) -> Option<Normalized> {
        let meta = descriptor.meta();
        let value = match value {
            None if meta.optional => return Some(Normalized::Absent),
            None => return self.fail(path, descriptor.kind(), ValueKind::Absent),
            Some(Value::Null) if meta.nullable || descriptor.kind() == Kind::Null => {
                return Some(Normalized::Null)
            }
            Some(v) => v,
        };

        match (descriptor, value) {
            (Descriptor::Boolean(_), Value::Bool(b)) => Some(Normalized::Boolean(*b)),
            (Descriptor::Number(_), Value::Number(n)) => Some(Normalized::Number(n.clone())),
            (Descriptor::String(_), Value::String(s)) => Some(Normalized::String(s.clone())),
            (Descriptor::Object(d), Value::Object(map)) => self.check_obj(map, d, path),
            (Descriptor::Array(d), Value::Array(items)) => self.check_arr(items, d, path),
            _ => self.fail(path, descriptor.kind(), ValueKind::of(Some(value))),
        }
    }

    fn check_obj(
        &mut self,
        map: &serde_json::Map<String, Value>,
        d: &ObjDescriptor,
        path: &mut Vec<PathStep>,
    ) -> Option<Normalized> {
        let mut out = IndexMap::with_capacity(d.len());
        let mut ok = true;

        for (name, field) in d.fields() {
            if self.is_full() {
                return None;
            }
            path.push(PathStep::Key(name.to_string()));
            let result = self.check(map.get(name), field, path);
            path.pop();
            match result {
                Some(n) => {
                    out.insert(name.to_string(), n);
                }
                None => ok = false,
            }
        }

        match self.unknown_keys {
            UnknownKeys::Strip => {}
            UnknownKeys::Keep => {
                for (key, v) in map.iter().filter(|(k, _)| !d.has_field(k.as_str())) {
                    out.insert(key.clone(), Normalized::from_json(v));
                }
            }
            UnknownKeys::Reject => {
                for (key, v) in map.iter().filter(|(k, _)| !d.has_field(k.as_str())) {
                    if self.is_full() {
                        return None;
                    }
                    path.push(PathStep::Key(key.clone()));
                    self.fail(path, ValueKind::Absent, ValueKind::of(Some(v)));
                    path.pop();
                    ok = false;
                }
            }
        }

        ok.then_some(Normalized::Object(out))
    }

    fn check_arr(
        &mut self,
        items: &[Value],
        d: &ArrDescriptor,
        path: &mut Vec<PathStep>,
    ) -> Option<Normalized> {
        let mut out = Vec::with_capacity(items.len());
        let mut ok = true;

        for (i, item) in items.iter().enumerate() {
            if self.is_full() {
                return None;
            }
            path.push(PathStep::Index(i));
            let result = self.check(Some(item), &d.item, path);
            path.pop();
            match result {
                Some(n) => out.push(n),
                None => ok = false,
            }
        }

        ok.then_some(Normalized::Array(out))
    }
}
