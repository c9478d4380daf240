#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The fifteen check units, one per required submission function.
//!
//! Each unit differs only in its target function name, the literal arguments
//! it passes, and the shape contract applied to the return value. No unit
//! ever inspects the numeric content of an answer: this harness is a sanity
//! check, not the real autograder, and must not leak expected values.

use rhai::{Array, Dynamic};
use typed_builder::TypedBuilder;

use super::results::{GradeResult, Outcome};
use crate::{
    frame::{DataFrame, Series},
    submission::{Submission, SubmissionError},
};

/// The shape contract a check unit applies to a returned value.
#[derive(Debug, Clone, PartialEq)]
pub enum Contract {
    /// Must be a tabular result.
    Table,
    /// Must be a 1-dimensional labeled column.
    Column,
    /// Must be an integer-valued scalar.
    Integer,
    /// Must be a floating-point scalar.
    Real,
    /// Must be a tabular result containing a specifically named column.
    HasColumn {
        /// The column that must be present.
        column:  &'static str,
        /// Diagnostic used when the column is absent.
        missing: &'static str,
    },
}

impl Contract {
    /// Classifies a returned value against this contract.
    pub fn classify(&self, value: &Dynamic) -> Outcome {
        match self {
            Contract::Table => {
                if value.clone().try_cast::<DataFrame>().is_some() {
                    Outcome::FullCredit
                } else {
                    Outcome::ContractViolation("Answer must be a DataFrame.".to_string())
                }
            }
            Contract::Column => {
                if value.clone().try_cast::<Series>().is_some() {
                    Outcome::FullCredit
                } else {
                    Outcome::ContractViolation("Answer must be a column.".to_string())
                }
            }
            Contract::Integer => {
                if value.is::<rhai::INT>() {
                    Outcome::FullCredit
                } else {
                    Outcome::ContractViolation("Answer must be an integer.".to_string())
                }
            }
            Contract::Real => {
                if value.is::<rhai::FLOAT>() {
                    Outcome::FullCredit
                } else {
                    Outcome::ContractViolation("Answer must be a float.".to_string())
                }
            }
            Contract::HasColumn { column, missing } => {
                match value.clone().try_cast::<DataFrame>() {
                    Some(frame) if frame.contains_column(column) => Outcome::FullCredit,
                    Some(_) => Outcome::ContractViolation((*missing).to_string()),
                    None => Outcome::ContractViolation("Answer must be a DataFrame.".to_string()),
                }
            }
        }
    }
}

/// One bound verification routine targeting exactly one submission function.
#[derive(Clone, TypedBuilder)]
pub struct Check {
    /// Requirement name shown in the report.
    #[builder(setter(into))]
    req_name: String,
    /// Name of the submission function this unit invokes.
    #[builder(setter(into))]
    target:   String,
    /// Point weight.
    out_of:   f64,
    /// Builds the literal, scenario-specific arguments from the fixture.
    args:     fn(&DataFrame) -> Vec<Dynamic>,
    /// Shape contract applied to the return value.
    contract: Contract,
}

impl Check {
    /// Requirement name shown in the report.
    pub fn req_name(&self) -> &str {
        &self.req_name
    }

    /// Point weight.
    pub fn out_of(&self) -> f64 {
        self.out_of
    }

    /// Runs this unit's scenario against the submission and fixture data,
    /// folding the outcome into a grade result.
    pub fn run(&self, submission: &Submission, data: &DataFrame) -> GradeResult {
        let outcome = self.score(submission, data);
        GradeResult::from_outcome(&self.req_name, self.out_of, &outcome)
    }

    /// The scenario itself: resolve, invoke, classify.
    fn score(&self, submission: &Submission, data: &DataFrame) -> Outcome {
        if !submission.defines(&self.target) {
            return Outcome::NotImplemented;
        }

        let args = (self.args)(data);
        match submission.call(&self.target, args) {
            Ok(value) => self.contract.classify(&value),
            // Absence and raising-when-called are both "not implemented".
            Err(SubmissionError::Undefined { .. }) | Err(SubmissionError::Raised { .. }) => {
                Outcome::NotImplemented
            }
        }
    }
}

/// Shorthand for a one-point check unit.
fn check(
    req_name: &str,
    target: &str,
    args: fn(&DataFrame) -> Vec<Dynamic>,
    contract: Contract,
) -> Check {
    Check::builder()
        .req_name(req_name)
        .target(target)
        .out_of(1.0)
        .args(args)
        .contract(contract)
        .build()
}

/// The check units for Hands-On 1, in declaration order.
///
/// Every unit invokes its target with the dataset (or a value derived from
/// it) plus literal arguments fixed by the assignment.
pub fn hands_on_1() -> Vec<Check> {
    vec![
        check(
            "Task 0.A (select_column)",
            "select_column",
            |data| vec![Dynamic::from(data.clone()), "titer".into()],
            Contract::Column,
        ),
        check(
            "Task 0.B (filter_rows)",
            "filter_rows",
            |data| vec![Dynamic::from(data.clone()), "titer".into(), Dynamic::from(32_i64)],
            Contract::Table,
        ),
        check(
            "Task 0.C (add_column)",
            "add_column",
            |_| vec![Dynamic::from(DataFrame::new()), "test".into(), Dynamic::from(Array::new())],
            Contract::Table,
        ),
        check(
            "Task 0.D (drop_column)",
            "drop_column",
            // Mutating checks operate on a private copy, never the shared
            // fixture.
            |data| vec![Dynamic::from(data.clone()), "titer".into()],
            Contract::Table,
        ),
        check(
            "Task 0.E (concat_frames)",
            "concat_frames",
            |_| vec![Dynamic::from(DataFrame::new()), Dynamic::from(DataFrame::new())],
            Contract::Table,
        ),
        check(
            "Task 1.A (count_infected)",
            "count_infected",
            |data| vec![Dynamic::from(data.clone())],
            Contract::Integer,
        ),
        check(
            "Task 1.B (count_symptomatic)",
            "count_symptomatic",
            |data| vec![Dynamic::from(data.clone())],
            Contract::Integer,
        ),
        check(
            "Task 1.C (mean_days)",
            "mean_days",
            |data| vec![Dynamic::from(data.clone())],
            Contract::Real,
        ),
        check(
            "Task 2.A (fraction_infected)",
            "fraction_infected",
            |data| vec![Dynamic::from(data.clone())],
            Contract::Real,
        ),
        check(
            "Task 2.B (fraction_symptomatic)",
            "fraction_symptomatic",
            |data| vec![Dynamic::from(data.clone())],
            Contract::Real,
        ),
        check(
            "Task 2.C (count_special_uninfected)",
            "count_special_uninfected",
            |data| vec![Dynamic::from(data.clone())],
            Contract::Integer,
        ),
        check(
            "Task 2.D (fraction_isoantigenic)",
            "fraction_isoantigenic",
            |data| vec![Dynamic::from(data.clone())],
            Contract::Real,
        ),
        check(
            "Task 3.A (add_isoantigenic_column)",
            "add_isoantigenic_column",
            |data| vec![Dynamic::from(data.clone())],
            Contract::HasColumn {
                column:  "isoantigenic",
                missing: "Isoantigenic column is missing.",
            },
        ),
        check(
            "Task 4.A (prep_scatter)",
            "prep_scatter",
            |data| {
                vec![
                    Dynamic::from(data.clone()),
                    "days_before_symptoms".into(),
                    "titer".into(),
                    "X".into(),
                    "Y".into(),
                ]
            },
            Contract::Table,
        ),
        check(
            "Task 5.A (rmse)",
            "rmse",
            |_| {
                let predictions: Array = [1, 1, 0, 0].iter().map(|n| Dynamic::from(*n as i64)).collect();
                let labels: Array = [1, 0, 1, 0].iter().map(|n| Dynamic::from(*n as i64)).collect();
                vec![Dynamic::from(predictions), Dynamic::from(labels)]
            },
            Contract::Real,
        ),
    ]
}
