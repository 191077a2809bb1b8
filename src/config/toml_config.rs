use crate::domain::model::{DisplayUnits, SubstitutionRequest};
use crate::domain::ports::PlanSource;
use crate::utils::error::{Result, YarnError};
use crate::utils::validation::{
    validate_non_negative, validate_range, weight_from_code, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

/// A substitution plan stored as TOML.
///
/// ```toml
/// [display]
/// units = "metric"
///
/// [pattern]
/// yardage = 1097
/// weight = 3
/// gauge = 18
///
/// [substitute]
/// skein_yardage = 201
/// weight = 4
/// gauge = 20
/// price_per_skein = 9.50
/// ```
///
/// Lengths are written in the display unit; weights are CYC codes and default
/// to DK (3) when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub pattern: PatternConfig,
    #[serde(default)]
    pub substitute: SubstituteConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub units: DisplayUnits,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatternConfig {
    pub yardage: Option<f64>,
    pub weight: Option<u8>,
    pub gauge: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubstituteConfig {
    pub skein_yardage: Option<f64>,
    pub weight: Option<u8>,
    pub gauge: Option<f64>,
    pub price_per_skein: Option<f64>,
}

impl PlanConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Loading plan from {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| YarnError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(code) = self.pattern.weight {
            validate_range("pattern.weight", code, 0, 7)?;
        }
        if let Some(code) = self.substitute.weight {
            validate_range("substitute.weight", code, 0, 7)?;
        }

        let lengths = [
            ("pattern.yardage", self.pattern.yardage),
            ("pattern.gauge", self.pattern.gauge),
            ("substitute.skein_yardage", self.substitute.skein_yardage),
            ("substitute.gauge", self.substitute.gauge),
            ("substitute.price_per_skein", self.substitute.price_per_skein),
        ];
        for (field, value) in lengths {
            if let Some(value) = value {
                validate_non_negative(field, value)?;
            }
        }

        Ok(())
    }
}

impl Validate for PlanConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

impl PlanSource for PlanConfig {
    fn display_units(&self) -> DisplayUnits {
        self.display.units
    }

    fn substitution_request(&self) -> Result<SubstitutionRequest> {
        self.validate()?;
        let units = self.display.units;

        let pattern_length = self.pattern.yardage.ok_or_else(|| YarnError::MissingField {
            field: "pattern.yardage".to_string(),
        })?;
        let skein_length = self
            .substitute
            .skein_yardage
            .ok_or_else(|| YarnError::MissingField {
                field: "substitute.skein_yardage".to_string(),
            })?;

        Ok(SubstitutionRequest {
            pattern_yardage: units.to_yards(pattern_length)?,
            pattern_weight: weight_from_code("pattern.weight", self.pattern.weight.unwrap_or(3))?,
            pattern_gauge: self.pattern.gauge,
            substitute_weight: weight_from_code(
                "substitute.weight",
                self.substitute.weight.unwrap_or(3),
            )?,
            skein_yardage: units.to_yards(skein_length)?,
            substitute_gauge: self.substitute.gauge,
            price_per_skein: self.substitute.price_per_skein,
        })
    }
}
