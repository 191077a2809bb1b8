use crate::domain::model::{DisplayUnits, SubstitutionRequest};
use crate::utils::error::Result;

/// Supplies the inputs of one substitution plan, wherever they came from.
pub trait PlanSource {
    fn display_units(&self) -> DisplayUnits;

    /// Builds the request with every length already converted to yards.
    fn substitution_request(&self) -> Result<SubstitutionRequest>;
}
