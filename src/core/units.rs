use crate::core::calculator::is_non_negative;
use crate::domain::model::Unit;
use crate::utils::error::CalcError;

pub const YARDS_TO_METERS: f64 = 0.9144;
pub const INCHES_TO_CM: f64 = 2.54;

/// Converts `value` between two unit names, compared case-insensitively.
///
/// Identical names return the value untouched, even for names this module
/// does not otherwise know. Only yards/meters and inches/cm are convertible.
pub fn convert_units(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, CalcError> {
    if !is_non_negative(value) {
        return Err(CalcError::invalid("Value cannot be negative"));
    }

    let from = from_unit.to_lowercase();
    let to = to_unit.to_lowercase();
    if from == to {
        return Ok(value);
    }

    let unsupported = || CalcError::UnsupportedConversion {
        from: from_unit.to_string(),
        to: to_unit.to_string(),
    };
    let from = from.parse::<Unit>().map_err(|_| unsupported())?;
    let to = to.parse::<Unit>().map_err(|_| unsupported())?;

    convert(value, from, to)
}

pub fn convert(value: f64, from: Unit, to: Unit) -> Result<f64, CalcError> {
    if !is_non_negative(value) {
        return Err(CalcError::invalid("Value cannot be negative"));
    }

    match (from, to) {
        (a, b) if a == b => Ok(value),
        (Unit::Yards, Unit::Meters) => Ok(value * YARDS_TO_METERS),
        (Unit::Meters, Unit::Yards) => Ok(value / YARDS_TO_METERS),
        (Unit::Inches, Unit::Centimeters) => Ok(value * INCHES_TO_CM),
        (Unit::Centimeters, Unit::Inches) => Ok(value / INCHES_TO_CM),
        _ => Err(CalcError::UnsupportedConversion {
            from: from.to_string(),
            to: to.to_string(),
        }),
    }
}
