//! `json-joy-json-descriptor`: declarative descriptors for JSON values.
//!
//! A [`Descriptor`] declares a nested shape (null, boolean, number, string,
//! object with named fields, array of items), each level optionally marked
//! `optional` or `nullable`. Validating a value against it yields either a
//! [`Normalized`] copy or every mismatch found, each located by its path.
//!
//! # Example
//!
//! ```
//! use json_joy_json_descriptor::{array, number, object, string, Meta, PathStep, ValueKind};
//! use serde_json::json;
//!
//! let role = object([("id", number(None)), ("name", string(Some(Meta::OPTIONAL)))], None)?;
//! let roles = array(role, None);
//!
//! assert!(roles.validate(&json!([{"id": 1}, {"id": 2, "name": "admin"}])).is_ok());
//!
//! let errors = roles.validate(&json!([{"id": 1}, {"id": "x"}])).unwrap_err();
//! assert_eq!(errors[0].path, vec![PathStep::Index(1), PathStep::from("id")]);
//! assert_eq!(errors[0].found, ValueKind::String);
//!
//! assert_eq!(roles.inferred_type(), "Array<{\n  id: number;\n  name: string | undefined;\n}>");
//! # Ok::<(), json_joy_json_descriptor::DescriptorError>(())
//! ```

pub mod cli;
pub mod constants;
pub mod decode;
pub mod descriptor;
pub mod error;
pub mod schema;
pub mod typescript;
pub mod validator;
pub mod value;

pub use constants::{Kind, ValueKind};
pub use decode::decode;
pub use descriptor::{array, boolean, null_, number, object, string, Descriptor, Meta};
pub use error::{DecodeError, DescriptorError};
pub use validator::{
    validate, PathStep, UnknownKeys, ValidationError, ValidationErrors, ValidationResult,
    ValidatorOptions,
};
pub use value::Normalized;
