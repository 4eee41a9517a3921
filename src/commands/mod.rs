//! Command implementations

pub mod admin;
pub mod analyze;
pub mod check;
pub mod simple;
pub mod today;

pub use admin::run_schedule;
pub use analyze::{analyze_word, best_openers};
pub use check::{CheckResult, Segmentation, check_guess, segment_text};
pub use simple::run_simple;
pub use today::{Target, TargetChoice, TodayReport, pick_target, resolve_day};
