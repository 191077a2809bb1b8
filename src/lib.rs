//! Yarn substitution calculator.
//!
//! [`core`] holds the pure calculations (skeins, gauge, units, cost and the
//! cross-weight check). [`app`] and [`config`] form the calling surface that
//! turns user input into core calls and renders the results.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::planner::{plan, SubstitutionPlanner};
pub use config::PlanConfig;
pub use crate::core::{
    adjust_yardage_for_gauge, calculate_cost, calculate_skeins, convert_units,
    should_show_cross_weight_warning,
};
pub use domain::model::{
    DisplayUnits, SkeinResult, SubstitutionReport, SubstitutionRequest, Unit,
};
pub use domain::weight::YarnWeight;
pub use utils::error::{CalcError, Result, YarnError};
