//! Field-level rules.
//!
//! Each rule checks one constraint and is independent of the others, so a field can
//! carry several errors at once. Length rules skip empty input; emptiness is the
//! business of [`required_text`].

use chrono::{DateTime, Utc};

use super::ValidationError;

pub fn required_text(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::Required)
    } else {
        Ok(())
    }
}

pub fn required<T>(value: Option<&T>) -> Result<(), ValidationError> {
    value.map(|_| ()).ok_or(ValidationError::Required)
}

pub fn min_length(value: &str, min: usize) -> Result<(), ValidationError> {
    let actual_length = value.chars().count();
    if actual_length == 0 || actual_length >= min {
        Ok(())
    } else {
        Err(ValidationError::MinLength {
            required_length: min,
            actual_length,
        })
    }
}

pub fn max_length(value: &str, max: usize) -> Result<(), ValidationError> {
    let actual_length = value.chars().count();
    if actual_length <= max {
        Ok(())
    } else {
        Err(ValidationError::MaxLength {
            required_length: max,
            actual_length,
        })
    }
}

/// The ready date must fall strictly after the order date. Both dates are passed in
/// so the check depends on nothing but its arguments.
pub fn future_date(ready: DateTime<Utc>, ordered: DateTime<Utc>) -> Result<(), ValidationError> {
    if ready <= ordered {
        Err(ValidationError::PastDate)
    } else {
        Ok(())
    }
}

/// Runs the required, minimum-length and maximum-length rules on a text field.
pub fn text_field(value: &str, min: usize, max: usize) -> Vec<ValidationError> {
    [required_text(value), min_length(value, min), max_length(value, max)]
        .into_iter()
        .filter_map(Result::err)
        .collect()
}
