use crate::domain::model::{DisplayUnits, SubstitutionReport, Unit};
use crate::domain::weight::YarnWeight;
use crate::utils::error::Result;
use serde::Serialize;
use strum::IntoEnumIterator;

pub const CROSS_WEIGHT_WARNING: &str = "These yarn weights differ by more than 1 category. \
The fabric may have a different drape or thickness.";

/// A [`SubstitutionReport`] with lengths converted to the user's display unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayReport {
    pub units: Unit,
    pub skeins: u64,
    pub total_length: f64,
    pub surplus: f64,
    pub adjusted_length: f64,
    pub gauge_adjusted: bool,
    pub cost: Option<f64>,
    pub cross_weight_warning: bool,
    pub pattern_weight: YarnWeight,
    pub substitute_weight: YarnWeight,
}

impl DisplayReport {
    pub fn new(report: &SubstitutionReport, units: DisplayUnits) -> Result<Self> {
        Ok(Self {
            units: units.length_unit(),
            skeins: report.skeins,
            total_length: units.display_length(report.total_yardage)?,
            surplus: units.display_length(report.surplus)?,
            adjusted_length: units.display_length(report.adjusted_yardage)?,
            gauge_adjusted: report.gauge_adjusted,
            cost: report.cost,
            cross_weight_warning: report.cross_weight_warning,
            pattern_weight: report.pattern_weight,
            substitute_weight: report.substitute_weight,
        })
    }
}

pub fn render_text(report: &SubstitutionReport, units: DisplayUnits) -> Result<String> {
    let display = DisplayReport::new(report, units)?;
    let unit = display.units;

    let mut lines = vec![format!(
        "Pattern yarn: {}  Substitute yarn: {}",
        display.pattern_weight, display.substitute_weight
    )];
    if display.gauge_adjusted {
        lines.push(format!(
            "Gauge-adjusted pattern {}: {:.1}",
            unit, display.adjusted_length
        ));
    }
    lines.push(format!("Skeins needed: {}", display.skeins));
    lines.push(format!("Total {}: {:.1}", unit, display.total_length));
    lines.push(format!("Surplus {}: {:.1}", unit, display.surplus));
    if let Some(cost) = display.cost {
        lines.push(format!("Estimated cost: ${:.2}", cost));
    }
    if display.cross_weight_warning {
        lines.push(format!("Warning: {}", CROSS_WEIGHT_WARNING));
    }

    Ok(lines.join("\n") + "\n")
}

pub fn render_json(report: &SubstitutionReport, units: DisplayUnits) -> Result<String> {
    let display = DisplayReport::new(report, units)?;
    Ok(serde_json::to_string_pretty(&display)?)
}

pub fn render_weight_table(units: DisplayUnits) -> String {
    let header = format!("CYC yarn weights (gauge in stitches {})", units.gauge_label());
    let rows = YarnWeight::iter().map(|weight| {
        let row = weight.reference();
        format!(
            "{}  {:<22} {:<34} {:<24} {}",
            weight.code(),
            row.name,
            row.gauge_range,
            row.needle_range,
            row.description
        )
    });

    std::iter::once(header)
        .chain(rows)
        .map(|line| line + "\n")
        .collect()
}
