pub mod calculator;
pub mod units;

pub use crate::domain::model::{SkeinResult, Unit};
pub use crate::domain::ports::PlanSource;
pub use crate::utils::error::CalcError;
pub use calculator::{
    adjust_yardage_for_gauge, calculate_cost, calculate_skeins, should_show_cross_weight_warning,
};
pub use units::{convert, convert_units};
