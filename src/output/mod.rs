//! Terminal output formatting
//!
//! Display utilities for CLI results, pretty-printing and the stderr logger.

pub mod display;
pub mod formatters;
pub mod logger;

pub use display::{
    print_analysis_result, print_average_result, print_openers, print_solve_result, progress_bar,
};
