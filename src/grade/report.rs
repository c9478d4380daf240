#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Rendering collected outcomes into user-facing feedback.

use std::fmt::Display;

use anyhow::Result;
use serde::Serialize;
use tabled::{
    Table,
    settings::{Alignment, Modify, Panel, Style, Width, object::Rows},
};

use super::results::GradeResult;

/// An aggregation of every check unit's result, rendered as a stable,
/// human-readable table.
#[derive(Clone, Serialize)]
pub struct Report {
    /// Assignment title shown in the header panel.
    title:   String,
    /// Per-check results, in declaration order.
    results: Vec<GradeResult>,
}

impl Report {
    /// Creates a report from results in declaration order.
    pub fn new(title: impl Into<String>, results: Vec<GradeResult>) -> Self {
        Self {
            title: title.into(),
            results,
        }
    }

    /// Per-check results, in declaration order.
    pub fn results(&self) -> &[GradeResult] {
        &self.results
    }

    /// Total score: the sum of earned points.
    pub fn total(&self) -> f64 {
        self.results.iter().fold(0f64, |acc, r| acc + r.grade_value())
    }

    /// Maximum score: the sum of weights.
    pub fn out_of(&self) -> f64 {
        self.results.iter().fold(0f64, |acc, r| acc + r.out_of_value())
    }

    /// Renders the report as a table with a title header and a total footer.
    pub fn render(&self) -> String {
        Table::new(&self.results)
            .with(Panel::header(self.title.clone()))
            .with(Panel::footer(format!("Total: {:.2}/{:.2}", self.total(), self.out_of())))
            .with(Modify::new(Rows::new(1..)).with(Width::wrap(36).keep_words(true)))
            .with(
                Modify::new(Rows::first())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(
                Modify::new(Rows::last())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(Style::modern())
            .to_string()
    }

    /// Serializes the report for machine consumption.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&serde_json::json!({
            "title": self.title,
            "total": self.total(),
            "out_of": self.out_of(),
            "results": self.results,
        }))?)
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
