use crate::core::calculator;
use crate::domain::model::{DisplayUnits, SubstitutionReport, SubstitutionRequest, YardageRequest};
use crate::domain::ports::PlanSource;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_negative, validate_positive, Validate};

impl Validate for SubstitutionRequest {
    fn validate(&self) -> Result<()> {
        validate_positive("pattern_yardage", self.pattern_yardage)?;
        validate_positive("skein_yardage", self.skein_yardage)?;
        if let Some(gauge) = self.pattern_gauge {
            validate_positive("pattern_gauge", gauge)?;
        }
        if let Some(gauge) = self.substitute_gauge {
            validate_positive("substitute_gauge", gauge)?;
        }
        if let Some(price) = self.price_per_skein {
            validate_non_negative("price_per_skein", price)?;
        }
        Ok(())
    }
}

/// Runs the full substitution: gauge adjustment, skein count, cost and the
/// cross-weight check.
///
/// Returns either a complete report or an error, never a partial report.
pub fn plan(request: &SubstitutionRequest) -> Result<SubstitutionReport> {
    request.validate()?;

    let adjusted_yardage = match request.gauge_adjustment() {
        Some(adjustment) => {
            let adjusted = adjustment.apply(request.pattern_yardage)?;
            tracing::debug!(
                "Gauge {} -> {} adjusts {:.1} yds to {:.1} yds",
                adjustment.pattern_gauge,
                adjustment.substitute_gauge,
                request.pattern_yardage,
                adjusted
            );
            adjusted
        }
        None => request.pattern_yardage,
    };

    let skeins = YardageRequest {
        pattern_yardage: adjusted_yardage,
        skein_yardage: request.skein_yardage,
    }
    .skeins()?;

    let cost = request
        .price_per_skein
        .map(|price| calculator::calculate_cost(skeins.skeins, price))
        .transpose()?;

    let cross_weight_warning = request.weights().should_warn();
    if cross_weight_warning {
        tracing::warn!(
            "Yarn weights {} and {} differ by more than one category",
            request.pattern_weight,
            request.substitute_weight
        );
    }

    Ok(SubstitutionReport {
        skeins: skeins.skeins,
        total_yardage: skeins.total_yardage,
        surplus: skeins.surplus,
        adjusted_yardage,
        gauge_adjusted: request.gauge_adjustment().is_some(),
        cost,
        cross_weight_warning,
        pattern_weight: request.pattern_weight,
        substitute_weight: request.substitute_weight,
    })
}

pub struct SubstitutionPlanner<S: PlanSource> {
    source: S,
}

impl<S: PlanSource> SubstitutionPlanner<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn display_units(&self) -> DisplayUnits {
        self.source.display_units()
    }

    pub fn run(&self) -> Result<SubstitutionReport> {
        let request = self.source.substitution_request()?;
        tracing::debug!("Planning substitution: {:?}", request);

        let report = plan(&request)?;
        tracing::info!(
            "Plan complete: {} skeins, {:.1} yds surplus",
            report.skeins,
            report.surplus
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::weight::YarnWeight;
    use crate::utils::error::YarnError;

    fn request() -> SubstitutionRequest {
        SubstitutionRequest {
            pattern_yardage: 1200.0,
            pattern_weight: YarnWeight::Dk,
            pattern_gauge: None,
            substitute_weight: YarnWeight::Dk,
            skein_yardage: 220.0,
            substitute_gauge: None,
            price_per_skein: None,
        }
    }

    struct FixedSource(SubstitutionRequest);

    impl PlanSource for FixedSource {
        fn display_units(&self) -> DisplayUnits {
            DisplayUnits::Imperial
        }

        fn substitution_request(&self) -> Result<SubstitutionRequest> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_plan_without_gauge_or_price() {
        let report = plan(&request()).unwrap();
        assert_eq!(report.skeins, 6);
        assert_eq!(report.total_yardage, 1320.0);
        assert_eq!(report.surplus, 120.0);
        assert_eq!(report.adjusted_yardage, 1200.0);
        assert!(!report.gauge_adjusted);
        assert_eq!(report.cost, None);
        assert!(!report.cross_weight_warning);
    }

    #[test]
    fn test_plan_applies_gauge_only_when_both_present() {
        let mut req = request();
        req.pattern_yardage = 1000.0;
        req.pattern_gauge = Some(18.0);
        let report = plan(&req).unwrap();
        assert!(!report.gauge_adjusted);
        assert_eq!(report.skeins, 5);

        req.substitute_gauge = Some(16.0);
        let report = plan(&req).unwrap();
        assert!(report.gauge_adjusted);
        assert!((report.adjusted_yardage - 888.9).abs() < 0.05);
        assert_eq!(report.skeins, 5);
    }

    #[test]
    fn test_plan_with_price_and_warning() {
        let mut req = request();
        req.price_per_skein = Some(9.5);
        req.substitute_weight = YarnWeight::Bulky;
        let report = plan(&req).unwrap();
        assert_eq!(report.cost, Some(57.0));
        assert!(report.cross_weight_warning);
    }

    #[test]
    fn test_plan_rejects_each_invalid_field() {
        let cases: [(&str, fn(&mut SubstitutionRequest)); 5] = [
            ("pattern_yardage", |r| r.pattern_yardage = 0.0),
            ("skein_yardage", |r| r.skein_yardage = 0.0),
            ("pattern_gauge", |r| r.pattern_gauge = Some(0.0)),
            ("substitute_gauge", |r| r.substitute_gauge = Some(-4.0)),
            ("price_per_skein", |r| r.price_per_skein = Some(-1.0)),
        ];

        for (expected, mutate) in cases {
            let mut req = request();
            mutate(&mut req);
            match plan(&req) {
                Err(YarnError::InvalidFieldValue { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected {} to be rejected, got {:?}", expected, other),
            }
        }
    }

    #[test]
    fn test_planner_runs_source() {
        let planner = SubstitutionPlanner::new(FixedSource(request()));
        assert_eq!(planner.display_units(), DisplayUnits::Imperial);
        assert_eq!(planner.run().unwrap().skeins, 6);
    }
}
