use crate::core::{calculator, units};
use crate::domain::weight::YarnWeight;
use crate::utils::error::CalcError;
use serde::{Deserialize, Serialize};

/// Pattern requirement and substitute put-up, both in yards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YardageRequest {
    pub pattern_yardage: f64,
    pub skein_yardage: f64,
}

impl YardageRequest {
    pub fn skeins(&self) -> Result<SkeinResult, CalcError> {
        calculator::calculate_skeins(self.pattern_yardage, self.skein_yardage)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkeinResult {
    pub skeins: u64,
    pub total_yardage: f64,
    pub surplus: f64,
}

/// Stitches per 4 inches for the pattern yarn and the substitute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeAdjustment {
    pub pattern_gauge: f64,
    pub substitute_gauge: f64,
}

impl GaugeAdjustment {
    pub fn apply(&self, pattern_yardage: f64) -> Result<f64, CalcError> {
        calculator::adjust_yardage_for_gauge(
            pattern_yardage,
            self.pattern_gauge,
            self.substitute_gauge,
        )
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Unit {
    Yards,
    Meters,
    Inches,
    #[serde(rename = "cm")]
    #[strum(serialize = "cm")]
    Centimeters,
}

impl Unit {
    pub fn convert(self, value: f64, to: Unit) -> Result<f64, CalcError> {
        units::convert(value, self, to)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitConversion {
    pub value: f64,
    pub from: Unit,
    pub to: Unit,
}

impl UnitConversion {
    pub fn run(&self) -> Result<f64, CalcError> {
        self.from.convert(self.value, self.to)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub skeins: u64,
    pub price_per_skein: f64,
}

impl CostEstimate {
    pub fn total(&self) -> Result<f64, CalcError> {
        calculator::calculate_cost(self.skeins, self.price_per_skein)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YarnWeightPair {
    pub pattern: YarnWeight,
    pub substitute: YarnWeight,
}

impl YarnWeightPair {
    pub fn should_warn(&self) -> bool {
        calculator::should_show_cross_weight_warning(self.pattern.code(), self.substitute.code())
    }
}

/// Unit system the user types lengths in and reads results in.
///
/// Calculations always run in yards; metric lengths are converted at the edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnits {
    #[default]
    Imperial,
    Metric,
}

impl DisplayUnits {
    pub fn from_metric_flag(metric: bool) -> Self {
        if metric {
            DisplayUnits::Metric
        } else {
            DisplayUnits::Imperial
        }
    }

    pub fn length_unit(self) -> Unit {
        match self {
            DisplayUnits::Imperial => Unit::Yards,
            DisplayUnits::Metric => Unit::Meters,
        }
    }

    pub fn gauge_label(self) -> &'static str {
        match self {
            DisplayUnits::Imperial => "per 4 inches",
            DisplayUnits::Metric => "per 10 cm",
        }
    }

    /// Converts a length typed in this unit system into canonical yards.
    pub fn to_yards(self, length: f64) -> Result<f64, CalcError> {
        self.length_unit().convert(length, Unit::Yards)
    }

    /// Converts canonical yards into this unit system for display.
    pub fn display_length(self, yards: f64) -> Result<f64, CalcError> {
        Unit::Yards.convert(yards, self.length_unit())
    }
}

/// Everything the knitter fills in for one substitution, lengths in yards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionRequest {
    pub pattern_yardage: f64,
    pub pattern_weight: YarnWeight,
    pub pattern_gauge: Option<f64>,
    pub substitute_weight: YarnWeight,
    pub skein_yardage: f64,
    pub substitute_gauge: Option<f64>,
    pub price_per_skein: Option<f64>,
}

impl SubstitutionRequest {
    /// Both gauges are needed before the yardage can be scaled.
    pub fn gauge_adjustment(&self) -> Option<GaugeAdjustment> {
        match (self.pattern_gauge, self.substitute_gauge) {
            (Some(pattern_gauge), Some(substitute_gauge)) => Some(GaugeAdjustment {
                pattern_gauge,
                substitute_gauge,
            }),
            _ => None,
        }
    }

    pub fn weights(&self) -> YarnWeightPair {
        YarnWeightPair {
            pattern: self.pattern_weight,
            substitute: self.substitute_weight,
        }
    }
}

/// Outcome of a substitution plan, lengths in yards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionReport {
    pub skeins: u64,
    pub total_yardage: f64,
    pub surplus: f64,
    pub adjusted_yardage: f64,
    pub gauge_adjusted: bool,
    pub cost: Option<f64>,
    pub cross_weight_warning: bool,
    pub pattern_weight: YarnWeight,
    pub substitute_weight: YarnWeight,
}
