#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Suite-level orchestration: runs every check unit in declaration order,
//! each in a failure-isolated context, and folds the outcomes into a report.

use std::panic::{self, AssertUnwindSafe};

use tracing::debug;

use super::{
    checks::{Check, hands_on_1},
    report::Report,
    results::{GradeResult, Outcome},
    style::StyleCheck,
};
use crate::{
    constants::ASSIGNMENT_NAME,
    frame::DataFrame,
    submission::Submission,
};

/// An ordered collection of check units plus the style check, bound to the
/// fixture dataset.
pub struct Assignment {
    /// Display name shown at the top of the report.
    name:   String,
    /// The fixture dataset, shared read-only across all checks.
    data:   DataFrame,
    /// Check units in declaration order.
    checks: Vec<Check>,
    /// The fixed-weight style unit, always graded last.
    style:  StyleCheck,
}

impl Assignment {
    /// Builds the practice suite for Hands-On 1: fifteen one-point checks
    /// plus a one-point style check.
    pub fn hands_on_1(data: DataFrame) -> Self {
        Self {
            name: ASSIGNMENT_NAME.to_string(),
            data,
            checks: hands_on_1(),
            style: StyleCheck::builder().req_name("Style").out_of(1.0).build(),
        }
    }

    /// Grades a submission.
    ///
    /// Every check executes independently: a failure in one unit, including
    /// a panic inside its scoring routine, is recorded as an outcome and
    /// never prevents subsequent units from executing.
    pub fn grade(&self, submission: &Submission) -> Report {
        let mut results = Vec::with_capacity(self.checks.len() + 1);

        for check in &self.checks {
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                check.run(submission, &self.data)
            }))
            .unwrap_or_else(|payload| {
                GradeResult::from_outcome(
                    check.req_name(),
                    check.out_of(),
                    &Outcome::UnexpectedFailure(panic_message(payload)),
                )
            });

            debug!(
                requirement = result.requirement(),
                grade = result.grade_value(),
                "scored check unit"
            );
            results.push(result);
        }

        results.push(self.style.run(submission.source()));

        Report::new(self.name.clone(), results)
    }
}

/// Extracts a printable message from a panic payload.
fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_string();
    }
    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }
    "check unit panicked".to_string()
}
