//! Skein, gauge, cost and cross-weight calculations.
//!
//! Every function is pure: no I/O, no shared state, and the same inputs always
//! give the same result. Lengths are in yards and gauges in stitches per
//! 4 inches.

use crate::domain::model::SkeinResult;
use crate::utils::error::CalcError;

/// Number of whole skeins needed to cover `pattern_yardage`.
///
/// The count is rounded up so the knitter never runs short; the extra length
/// is reported as `surplus`.
pub fn calculate_skeins(
    pattern_yardage: f64,
    skein_yardage: f64,
) -> Result<SkeinResult, CalcError> {
    if !is_non_negative(pattern_yardage) || !is_non_negative(skein_yardage) {
        tracing::trace!(pattern_yardage, skein_yardage, "rejected skein calculation");
        return Err(CalcError::invalid("Yardage values cannot be negative"));
    }
    if skein_yardage == 0.0 {
        return Err(CalcError::DivisionByZero);
    }

    let ratio = pattern_yardage / skein_yardage;
    if !ratio.is_finite() || ratio >= u64::MAX as f64 {
        tracing::trace!(pattern_yardage, skein_yardage, "skein count out of range");
        return Err(CalcError::invalid("Too many skeins to count"));
    }

    let skeins = whole_skeins(ratio);
    let total_yardage = skeins as f64 * skein_yardage;
    let surplus = (total_yardage - pattern_yardage).max(0.0);

    Ok(SkeinResult {
        skeins,
        total_yardage,
        surplus,
    })
}

// Lengths typed in meters reach here divided by 0.9144, so an exact multiple
// can come out a few ulps above a whole number. Those count as that number.
fn whole_skeins(ratio: f64) -> u64 {
    let nearest = ratio.round();
    if (ratio - nearest).abs() <= RATIO_TOLERANCE * nearest.max(1.0) {
        nearest as u64
    } else {
        ratio.ceil() as u64
    }
}

const RATIO_TOLERANCE: f64 = 1e-12;

/// Scales pattern yardage by the ratio of substitute gauge to pattern gauge.
///
/// A denser substitute (more stitches per 4 inches) needs more yarn for the
/// same finished size.
pub fn adjust_yardage_for_gauge(
    pattern_yardage: f64,
    pattern_gauge: f64,
    substitute_gauge: f64,
) -> Result<f64, CalcError> {
    if !is_non_negative(pattern_yardage)
        || !is_positive(pattern_gauge)
        || !is_positive(substitute_gauge)
    {
        tracing::trace!(
            pattern_yardage,
            pattern_gauge,
            substitute_gauge,
            "rejected gauge adjustment"
        );
        return Err(CalcError::invalid("Invalid gauge or yardage values"));
    }

    Ok(pattern_yardage * substitute_gauge / pattern_gauge)
}

pub fn calculate_cost(skeins: u64, price_per_skein: f64) -> Result<f64, CalcError> {
    if !is_non_negative(price_per_skein) {
        return Err(CalcError::invalid("Invalid cost parameters"));
    }
    Ok(skeins as f64 * price_per_skein)
}

/// True when the two CYC categories are more than one step apart.
pub fn should_show_cross_weight_warning(pattern_weight: u8, substitute_weight: u8) -> bool {
    pattern_weight.abs_diff(substitute_weight) > 1
}

pub(crate) fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_skeins_rounds_up() {
        let result = calculate_skeins(1200.0, 220.0).unwrap();
        assert_eq!(result.skeins, 6);
        assert_eq!(result.total_yardage, 1320.0);
        assert_eq!(result.surplus, 120.0);
    }

    #[test]
    fn test_calculate_skeins_exact_multiple_has_no_surplus() {
        let result = calculate_skeins(880.0, 220.0).unwrap();
        assert_eq!(result.skeins, 4);
        assert_eq!(result.surplus, 0.0);
    }

    #[test]
    fn test_calculate_skeins_zero_pattern() {
        let result = calculate_skeins(0.0, 220.0).unwrap();
        assert_eq!(result.skeins, 0);
        assert_eq!(result.total_yardage, 0.0);
        assert_eq!(result.surplus, 0.0);
    }

    #[test]
    fn test_calculate_skeins_errors() {
        assert_eq!(calculate_skeins(1200.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(calculate_skeins(0.0, 0.0), Err(CalcError::DivisionByZero));
        assert!(matches!(
            calculate_skeins(-1.0, 220.0),
            Err(CalcError::InvalidInput { .. })
        ));
        assert!(matches!(
            calculate_skeins(1200.0, -220.0),
            Err(CalcError::InvalidInput { .. })
        ));
        assert!(matches!(
            calculate_skeins(f64::NAN, 220.0),
            Err(CalcError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_calculate_skeins_rejects_uncountable_ratio() {
        for (pattern, skein) in [(1e20, 1.0), (f64::MAX, 1e-300), (1e300, 1e-300)] {
            assert!(matches!(
                calculate_skeins(pattern, skein),
                Err(CalcError::InvalidInput { .. })
            ));
        }

        let large = calculate_skeins(1e15, 1.0).unwrap();
        assert_eq!(large.skeins, 1_000_000_000_000_000);
        assert!(large.total_yardage >= 1e15);
    }

    #[test]
    fn test_metric_exact_multiples_are_not_rounded_up() {
        for (pattern_m, skein_m, expected) in
            [(450.0, 150.0, 3), (900.0, 150.0, 6), (1650.0, 150.0, 11)]
        {
            let pattern = pattern_m / 0.9144;
            let skein = skein_m / 0.9144;
            let result = calculate_skeins(pattern, skein).unwrap();
            assert_eq!(result.skeins, expected, "{} m / {} m", pattern_m, skein_m);
            assert!(result.surplus < 1e-9);
        }

        assert_eq!(calculate_skeins(450.001 / 0.9144, 150.0 / 0.9144).unwrap().skeins, 4);
    }

    #[test]
    fn test_adjust_yardage_for_gauge() {
        let tighter = adjust_yardage_for_gauge(1000.0, 18.0, 20.0).unwrap();
        assert!((tighter - 1111.1).abs() < 0.05);

        assert_eq!(adjust_yardage_for_gauge(1000.0, 20.0, 16.0).unwrap(), 800.0);
        assert_eq!(adjust_yardage_for_gauge(1000.0, 18.0, 18.0).unwrap(), 1000.0);

        let decimal = adjust_yardage_for_gauge(500.0, 16.5, 18.5).unwrap();
        assert!((decimal - 560.6).abs() < 0.05);
    }

    #[test]
    fn test_adjust_yardage_rejects_bad_gauges() {
        for (yardage, pattern, substitute) in [
            (1000.0, 0.0, 18.0),
            (1000.0, 18.0, 0.0),
            (-100.0, 18.0, 20.0),
            (1000.0, -18.0, 20.0),
        ] {
            assert!(matches!(
                adjust_yardage_for_gauge(yardage, pattern, substitute),
                Err(CalcError::InvalidInput { .. })
            ));
        }
    }

    #[test]
    fn test_looser_substitute_needs_fewer_skeins() {
        let adjusted = adjust_yardage_for_gauge(1000.0, 18.0, 16.0).unwrap();
        assert!((adjusted - 888.9).abs() < 0.05);
        assert_eq!(calculate_skeins(adjusted, 220.0).unwrap().skeins, 5);
    }

    #[test]
    fn test_calculate_cost() {
        assert_eq!(calculate_cost(6, 9.50).unwrap(), 57.00);
        assert_eq!(calculate_cost(0, 10.0).unwrap(), 0.0);
        assert_eq!(calculate_cost(5, 0.0).unwrap(), 0.0);
        assert!(matches!(
            calculate_cost(5, -10.0),
            Err(CalcError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_cross_weight_warning() {
        assert!(should_show_cross_weight_warning(3, 5));
        assert!(!should_show_cross_weight_warning(3, 4));
        assert!(should_show_cross_weight_warning(3, 0));
        assert!(!should_show_cross_weight_warning(4, 4));
        assert!(should_show_cross_weight_warning(5, 3));
        assert!(!should_show_cross_weight_warning(0, 1));
        assert!(!should_show_cross_weight_warning(6, 7));
        assert!(should_show_cross_weight_warning(0, 2));
    }
}
