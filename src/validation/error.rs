//! # Validation Errors
//!
//! Every failed check is reported as a [`ValidationError`] value. Nothing here is fatal
//! and nothing is retried: the user corrects the input and the check runs again.
//!
//! The serialized form is keyed by failure kind, so a UI can render the specific cause:
//!
//! ```text
//! "required"
//! {"minlength":{"requiredLength":2,"actualLength":1}}
//! {"minIngredients":{"min":3,"actual":2}}
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationError {
    /// The field has no value (empty text, no selection, or an empty list).
    #[error("This field is required")]
    Required,

    #[error("Minimum length is {required_length} characters")]
    #[serde(rename = "minlength", rename_all = "camelCase")]
    MinLength {
        required_length: usize,
        actual_length: usize,
    },

    #[error("Maximum length is {required_length} characters")]
    #[serde(rename = "maxlength", rename_all = "camelCase")]
    MaxLength {
        required_length: usize,
        actual_length: usize,
    },

    /// The ready date is not strictly after the order date.
    #[error("Ready date must be in the future")]
    PastDate,

    #[error("At least {min} ingredients required")]
    MinIngredients { min: usize, actual: usize },

    /// At least one ingredient is missing a name, unit, quantity or price.
    #[error("All ingredients must be properly filled")]
    InvalidIngredient,
}

impl ValidationError {
    /// Rank used when a field has several errors; lower is reported first.
    pub fn priority(&self) -> u8 {
        match self {
            ValidationError::Required => 0,
            ValidationError::MinLength { .. } => 1,
            ValidationError::MaxLength { .. } => 2,
            ValidationError::PastDate => 3,
            ValidationError::MinIngredients { .. } => 4,
            ValidationError::InvalidIngredient => 5,
        }
    }
}

/// Picks the error a field should display.
pub fn most_relevant(errors: &[ValidationError]) -> Option<&ValidationError> {
    errors.iter().min_by_key(|e| e.priority())
}
