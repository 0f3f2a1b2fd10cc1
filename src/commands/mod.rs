//! Command implementations

pub mod simple;
pub mod survey;

pub use simple::run_simple;
pub use survey::{SurveyResult, run_survey};
