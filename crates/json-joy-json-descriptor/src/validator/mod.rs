pub mod types;
#[allow(clippy::module_inception)]
pub mod validator;

pub use types::{
    escape_component, format_pointer, PathStep, UnknownKeys, ValidationError, ValidationErrors,
    ValidationResult, ValidatorOptions,
};
pub use validator::validate;
