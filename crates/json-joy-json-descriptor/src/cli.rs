//! Shared logic for the `json-validate` binary.

use thiserror::Error;

use crate::descriptor::Descriptor;
use crate::validator::{ValidationErrors, ValidatorOptions};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid descriptor: {0}")]
    Descriptor(serde_json::Error),
    #[error("invalid input: {0}")]
    Input(serde_json::Error),
    #[error(transparent)]
    Invalid(ValidationErrors),
    #[error("output: {0}")]
    Output(serde_json::Error),
}

/// Validate the JSON document `input` against the descriptor document
/// `descriptor`, returning the normalized value as JSON text.
pub fn validate_document(
    descriptor: &str,
    input: &str,
    opts: &ValidatorOptions,
) -> Result<String, CliError> {
    let descriptor: Descriptor = serde_json::from_str(descriptor).map_err(CliError::Descriptor)?;
    let value: serde_json::Value = serde_json::from_str(input).map_err(CliError::Input)?;
    let normalized = descriptor
        .validate_with(&value, opts)
        .map_err(CliError::Invalid)?;
    serde_json::to_string(&normalized).map_err(CliError::Output)
}
