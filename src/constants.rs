#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Constant values used throughout the harness.

/// The synthetic dataset every check runs against, embedded at compile time
/// so grading never depends on files next to the binary.
pub const SYNTHETIC_DATA_CSV: &str = include_str!("../data/synthetic_covid_data.csv");

/// Name of the unique-identifier column in the synthetic dataset.
pub const ID_COLUMN: &str = "id";

/// Display name of the assignment being practice-graded.
pub const ASSIGNMENT_NAME: &str = "Practice Grading for Hands-On 1";

/// Longest line the style check tolerates in a submission.
pub const STYLE_MAX_LINE_LENGTH: usize = 100;
