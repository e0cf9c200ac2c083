//! Form validation primitives.
//!
//! Validators stop at the first violated rule and report it as a single
//! [`ValidationError`]; forms show one alert at a time.

use crate::domain::common::Coordinates;
use thiserror::Error;

/// First failing rule of a form: which field and what to tell the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// A form input: field key, user-facing label and the raw text.
#[derive(Debug, Clone, Copy)]
pub struct FieldInput<'a> {
    pub field: &'static str,
    pub label: &'static str,
    pub value: &'a str,
}

impl<'a> FieldInput<'a> {
    pub fn new(field: &'static str, label: &'static str, value: &'a str) -> Self {
        Self {
            field,
            label,
            value,
        }
    }
}

/// Checks that every input is non-blank, in the given order.
pub fn require_all(inputs: &[FieldInput<'_>]) -> Result<(), ValidationError> {
    for input in inputs {
        if input.value.trim().is_empty() {
            return Err(ValidationError::new(
                input.field,
                format!("{} is required", input.label),
            ));
        }
    }
    Ok(())
}

pub fn parse_number(input: FieldInput<'_>) -> Result<f64, ValidationError> {
    input
        .value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::new(input.field, format!("{} must be a number", input.label)))
}

/// Parses both coordinate fields first, then range-checks both.
pub fn parse_coordinates(
    lat: FieldInput<'_>,
    lng: FieldInput<'_>,
) -> Result<Coordinates, ValidationError> {
    let lat_value = parse_number(lat)?;
    let lng_value = parse_number(lng)?;

    if !(-90.0..=90.0).contains(&lat_value) {
        return Err(ValidationError::new(
            lat.field,
            format!("{} must be between -90 and 90", lat.label),
        ));
    }
    if !(-180.0..=180.0).contains(&lng_value) {
        return Err(ValidationError::new(
            lng.field,
            format!("{} must be between -180 and 180", lng.label),
        ));
    }

    Ok(Coordinates::new(lat_value, lng_value))
}

/// Whole number within `[min, max]`.
pub fn parse_int_in_range(input: FieldInput<'_>, min: i64, max: i64) -> Result<i64, ValidationError> {
    let out_of_range = || {
        ValidationError::new(
            input.field,
            format!("{} must be a whole number between {} and {}", input.label, min, max),
        )
    };
    let value = input.value.trim().parse::<i64>().map_err(|_| out_of_range())?;
    if value < min || value > max {
        return Err(out_of_range());
    }
    Ok(value)
}

pub fn parse_positive_int(input: FieldInput<'_>) -> Result<u32, ValidationError> {
    input
        .value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| {
            ValidationError::new(
                input.field,
                format!("{} must be a positive whole number", input.label),
            )
        })
}

/// Minimal shape check: something before `@`, a dot somewhere after it.
pub fn check_email(input: FieldInput<'_>) -> Result<(), ValidationError> {
    let value = input.value.trim();
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
                && !domain.contains('@')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new(
            input.field,
            format!("{} is not a valid email address", input.label),
        ))
    }
}
