#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! A fixed-weight style-compliance check over the submission source.

use itertools::Itertools;
use typed_builder::TypedBuilder;

use super::results::{Grade, GradeResult};
use crate::constants::STYLE_MAX_LINE_LENGTH;

/// How many individual violations the reason string spells out before
/// collapsing the rest into a count.
const REPORTED_VIOLATIONS: usize = 5;

/// A style check worth a constant weight, graded pass/fail on the raw
/// submission text.
#[derive(Clone, Debug, TypedBuilder)]
pub struct StyleCheck {
    /// Requirement name shown in the report.
    #[builder(setter(into))]
    req_name:        String,
    /// Point weight.
    out_of:          f64,
    /// Longest tolerated line.
    #[builder(default = STYLE_MAX_LINE_LENGTH)]
    max_line_length: usize,
}

impl StyleCheck {
    /// Grades the submission source, awarding full weight only when no
    /// violation is found.
    pub fn run(&self, source: &str) -> GradeResult {
        let mut violations = Vec::new();

        for (idx, line) in source.lines().enumerate() {
            let line_number = idx + 1;
            if line.chars().count() > self.max_line_length {
                violations.push(format!(
                    "line {line_number}: longer than {} characters",
                    self.max_line_length
                ));
            }
            if line != line.trim_end() {
                violations.push(format!("line {line_number}: trailing whitespace"));
            }
            if line.starts_with('\t') {
                violations.push(format!("line {line_number}: tab indentation"));
            }
        }

        let (points, reason) = if violations.is_empty() {
            (self.out_of, String::new())
        } else {
            let shown = violations.iter().take(REPORTED_VIOLATIONS).join("; ");
            let reason = if violations.len() > REPORTED_VIOLATIONS {
                format!("{shown}; and {} more", violations.len() - REPORTED_VIOLATIONS)
            } else {
                shown
            };
            (0.0, reason)
        };

        GradeResult::builder()
            .requirement(self.req_name.clone())
            .grade(Grade::new(points, self.out_of))
            .reason(reason)
            .build()
    }
}
