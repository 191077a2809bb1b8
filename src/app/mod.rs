pub mod planner;
pub mod report;
