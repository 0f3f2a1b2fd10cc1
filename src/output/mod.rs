//! Terminal output formatting
//!
//! Display utilities for the line-based game and the survey command.

pub mod display;
pub mod formatters;

pub use display::{
    print_completion, print_definitions, print_round_view, print_survey_result,
};
