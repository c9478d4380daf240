//! # pregrade
//!
//! A local practice grader for the Hands-On 1 data-analysis assignment.
//!
//! The score produced here is not an actual score, but gives a learner an
//! idea of how prepared they are to submit to the real autograder. Checks
//! verify the shape and presence of each answer, never its numeric value.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// In-memory tabular data for the fixture dataset
pub mod frame;
/// For all things related to grading
pub mod grade;
/// The uniform calling interface over a learner's submission
pub mod submission;

use rhai::{Array, Dynamic, Engine, EvalAltResult};

use crate::frame::{DataFrame, FrameError, Series, Value};

/// Maps a frame error into a script runtime error.
fn into_script_error(err: FrameError) -> Box<EvalAltResult> {
    err.to_string().into()
}

/// Converts a script value into a frame cell.
fn value_from_dynamic(value: Dynamic) -> Value {
    if value.is::<()>() {
        return Value::Null;
    }
    if let Some(n) = value.clone().try_cast::<i64>() {
        return Value::Int(n);
    }
    if let Some(x) = value.clone().try_cast::<f64>() {
        return Value::Float(x);
    }
    if let Some(b) = value.clone().try_cast::<bool>() {
        return Value::Int(b as i64);
    }
    Value::Str(value.to_string())
}

/// Converts a frame cell into a script value.
fn dynamic_from_value(value: &Value) -> Dynamic {
    match value {
        Value::Int(n) => Dynamic::from(*n),
        Value::Float(x) => Dynamic::from(*x),
        Value::Str(s) => Dynamic::from(s.clone()),
        Value::Null => Dynamic::UNIT,
    }
}

/// Creates and returns a new `Engine` with the tabular types and functions
/// a submission needs registered.
pub fn create_engine() -> Engine {
    let mut engine = Engine::new();
    engine
        .register_type_with_name::<DataFrame>("DataFrame")
        .register_type_with_name::<Series>("Series")
        .register_fn("new_frame", DataFrame::new)
        .register_fn("rows", |frame: &mut DataFrame| frame.rows() as i64)
        .register_fn("contains", |frame: &mut DataFrame, name: &str| {
            frame.contains_column(name)
        })
        .register_fn(
            "column",
            |frame: &mut DataFrame, name: &str| -> Result<Series, Box<EvalAltResult>> {
                frame.column(name).map(Clone::clone).map_err(into_script_error)
            },
        )
        .register_fn(
            "with_column",
            |frame: &mut DataFrame,
             name: &str,
             values: Array|
             -> Result<DataFrame, Box<EvalAltResult>> {
                let values = values.into_iter().map(value_from_dynamic).collect();
                frame.with_column(name, values).map_err(into_script_error)
            },
        )
        .register_fn(
            "without_column",
            |frame: &mut DataFrame, name: &str| -> Result<DataFrame, Box<EvalAltResult>> {
                frame.without_column(name).map_err(into_script_error)
            },
        )
        .register_fn(
            "append",
            |frame: &mut DataFrame, other: DataFrame| -> Result<DataFrame, Box<EvalAltResult>> {
                frame.append(&other).map_err(into_script_error)
            },
        )
        .register_fn(
            "filter_min",
            |frame: &mut DataFrame, name: &str, min: i64| -> Result<DataFrame, Box<EvalAltResult>> {
                frame.filter_at_least(name, min as f64).map_err(into_script_error)
            },
        )
        .register_fn(
            "filter_min",
            |frame: &mut DataFrame, name: &str, min: f64| -> Result<DataFrame, Box<EvalAltResult>> {
                frame.filter_at_least(name, min).map_err(into_script_error)
            },
        )
        .register_fn("values", |series: &mut Series| -> Array {
            series.values().iter().map(dynamic_from_value).collect()
        })
        .register_fn("len", |series: &mut Series| series.len() as i64)
        .register_fn("sum", |series: &mut Series| series.sum())
        .register_fn(
            "mean",
            |series: &mut Series| -> Result<f64, Box<EvalAltResult>> {
                series.mean().map_err(into_script_error)
            },
        )
        .register_fn("count_eq", |series: &mut Series, needle: i64| {
            series.count_eq(&Value::Int(needle)) as i64
        })
        .register_fn("name", |series: &mut Series| series.name().to_string());
    engine
}
