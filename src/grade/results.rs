#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tabled::Tabled;
use typed_builder::TypedBuilder;

/// The classified result of one check unit.
///
/// A scoring routine returns one of these instead of mutating shared grading
/// state; the suite folds the sequence of outcomes into the report.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The answer satisfied its shape contract.
    FullCredit,
    /// The target function is absent, or raised when invoked.
    NotImplemented,
    /// The answer exists but has the wrong type or shape.
    ContractViolation(String),
    /// Something other than the designed paths failed during the check.
    UnexpectedFailure(String),
}

impl Outcome {
    /// Points earned by this outcome against a check worth `out_of`.
    pub fn points(&self, out_of: f64) -> f64 {
        match self {
            Outcome::FullCredit => out_of,
            _ => 0.0,
        }
    }

    /// Human-readable reason to show in the report.
    pub fn reason(&self) -> String {
        match self {
            Outcome::FullCredit => String::new(),
            Outcome::NotImplemented => "Not implemented.".to_string(),
            Outcome::ContractViolation(message) => message.clone(),
            Outcome::UnexpectedFailure(message) => format!("Unexpected failure: {message}"),
        }
    }
}

#[derive(Clone, Default, Serialize, Deserialize)]
/// A struct representing a grade
pub struct Grade {
    /// The actual grade received
    pub grade:  f64,
    /// The maximum grade possible
    pub out_of: f64,
}

impl Grade {
    /// Creates a new grade -
    /// * `grade` - The actual grade received
    /// * `out_of` - The maximum grade possible
    pub fn new(grade: f64, out_of: f64) -> Self {
        Self { grade, out_of }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}/{:.2}", self.grade, self.out_of)
    }
}

#[derive(Tabled, Clone, Default, Serialize, Deserialize, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
/// A struct to store grading results and display them
pub struct GradeResult {
    #[tabled(rename = "Requirement")]
    /// * `requirement`: refers to Requirement ID
    requirement: String,
    #[tabled(rename = "Grade")]
    /// * `grade`: grade received for above Requirement
    grade:       Grade,
    #[tabled(rename = "Reason")]
    /// * `reason`: the reason for penalties applied, if any
    reason:      String,
}

impl GradeResult {
    /// Builds a result for a check from its classified outcome.
    pub fn from_outcome(requirement: &str, out_of: f64, outcome: &Outcome) -> Self {
        Self::builder()
            .requirement(requirement)
            .grade(Grade::new(outcome.points(out_of), out_of))
            .reason(outcome.reason())
            .build()
    }

    /// a getter for Requirement
    pub fn requirement(&self) -> &str {
        &self.requirement
    }

    /// a getter for Reason
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Returns the underlying grade struct.
    pub fn grade_struct(&self) -> &Grade {
        &self.grade
    }

    /// Returns the numeric grade value.
    pub fn grade_value(&self) -> f64 {
        self.grade.grade
    }

    /// Returns the numeric out-of value.
    pub fn out_of_value(&self) -> f64 {
        self.grade.out_of
    }
}
