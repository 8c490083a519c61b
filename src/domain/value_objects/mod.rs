//! Value Objects
//!
//! Immutable types compared by value: confidence levels, comparison
//! matchers, evaluation results and run tallies.

mod check_result;
mod comparison;
mod confidence;
mod config_warning;
mod tally;

pub use check_result::{CheckResult, Verdict};
pub use comparison::{ComparisonMode, Matcher};
pub use confidence::Confidence;
pub use config_warning::{suggest_key, ConfigWarning};
pub use tally::{Outcome, Tally, TallyRow};
