use crate::domain::weight::YarnWeight;
use crate::utils::error::{CalcError, Result, YarnError};
use regex::Regex;
use std::sync::LazyLock;

// Same mask the input fields apply while typing: digits with at most one dot.
static DECIMAL_MASK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d*\.?\d*$").expect("decimal mask is a valid regex"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses a required non-negative decimal typed by the user.
///
/// Signs, exponents, thousands separators and units are rejected so that the
/// core only ever receives plain non-negative numbers.
pub fn parse_decimal(field_name: &str, text: &str) -> Result<f64> {
    parse_optional_decimal(field_name, text)?.ok_or_else(|| YarnError::MissingField {
        field: field_name.to_string(),
    })
}

/// Like [`parse_decimal`], but blank input means "not provided".
pub fn parse_optional_decimal(field_name: &str, text: &str) -> Result<Option<f64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if !DECIMAL_MASK.is_match(trimmed) || !trimmed.bytes().any(|b| b.is_ascii_digit()) {
        return Err(YarnError::invalid_field(
            field_name,
            trimmed,
            "Value must be a plain decimal number",
        ));
    }

    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|e| YarnError::invalid_field(field_name, trimmed, e.to_string()))
}

pub fn parse_skein_count(field_name: &str, text: &str) -> Result<u64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(YarnError::MissingField {
            field: field_name.to_string(),
        });
    }
    if trimmed.starts_with('-') {
        return Err(CalcError::invalid("Skein count cannot be negative").into());
    }
    trimmed.parse::<u64>().map_err(|_| {
        YarnError::invalid_field(field_name, trimmed, "Skein count must be a whole number")
    })
}

pub fn parse_weight_code(field_name: &str, text: &str) -> Result<YarnWeight> {
    let trimmed = text.trim();
    let code = trimmed.parse::<u8>().map_err(|_| {
        YarnError::invalid_field(field_name, trimmed, "Weight must be a CYC category 0-7")
    })?;
    weight_from_code(field_name, code)
}

pub fn weight_from_code(field_name: &str, code: u8) -> Result<YarnWeight> {
    YarnWeight::from_code(code).map_err(|_| {
        YarnError::invalid_field(field_name, code, "Weight must be a CYC category 0-7")
    })
}

pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(YarnError::invalid_field(
            field_name,
            value,
            "Value must be greater than 0",
        ));
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(YarnError::invalid_field(
            field_name,
            value,
            "Value cannot be negative",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(YarnError::invalid_field(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}
