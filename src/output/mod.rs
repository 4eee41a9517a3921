//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_check_result, print_openers, print_schedule,
    print_segmentation, print_set_word, print_stored_words, print_today, print_validation,
};
