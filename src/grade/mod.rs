#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// The fifteen check units and their shape contracts.
pub mod checks;
/// Rendering collected outcomes into user-facing feedback.
pub mod report;
/// Shared grade result types.
pub mod results;
/// The fixed-weight style-compliance check.
pub mod style;
/// Suite-level orchestration and failure isolation.
pub mod suite;

pub use checks::{Check, Contract, hands_on_1};
pub use report::Report;
pub use results::{Grade, GradeResult, Outcome};
pub use style::StyleCheck;
pub use suite::Assignment;
