use std::path::PathBuf;

use pregrade::{
    frame::{DataFrame, Series},
    submission::{Submission, SubmissionError},
};
use rhai::Dynamic;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("submissions")
        .join(name)
}

fn small_frame() -> DataFrame {
    DataFrame::from_csv_str("id,titer,infected\n1,32,1\n2,8,0\n3,64,1\n", "id").expect("frame")
}

#[test]
fn capability_table_tracks_defined_functions() {
    let submission = Submission::load(fixture("complete.rhai")).expect("load");

    assert!(submission.defines("select_column"));
    assert!(submission.defines("rmse"));
    assert!(!submission.defines("extra_credit"));
}

#[test]
fn calling_an_undefined_function_is_reported_as_such() {
    let submission = Submission::load(fixture("empty.rhai")).expect("load");

    let err = submission
        .call("select_column", vec![Dynamic::from(small_frame()), "titer".into()])
        .expect_err("undefined");
    assert!(matches!(err, SubmissionError::Undefined { .. }));
}

#[test]
fn a_throwing_function_is_reported_as_raised() {
    let submission = Submission::load(fixture("raises.rhai")).expect("load");

    let err = submission
        .call("select_column", vec![Dynamic::from(small_frame()), "titer".into()])
        .expect_err("raised");
    assert!(matches!(err, SubmissionError::Raised { .. }));
}

#[test]
fn a_missing_helper_inside_the_body_is_a_raise_not_an_absence() {
    let submission = Submission::load(fixture("raises.rhai")).expect("load");

    let err = submission
        .call("count_infected", vec![Dynamic::from(small_frame())])
        .expect_err("raised");
    assert!(matches!(err, SubmissionError::Raised { .. }));
}

#[test]
fn successful_calls_return_script_values() {
    let submission = Submission::load(fixture("complete.rhai")).expect("load");

    let value = submission
        .call("select_column", vec![Dynamic::from(small_frame()), "titer".into()])
        .expect("call");
    let series = value.try_cast::<Series>().expect("a column");
    assert_eq!(series.name(), "titer");
    assert_eq!(series.len(), 3);

    let count = submission
        .call("count_infected", vec![Dynamic::from(small_frame())])
        .expect("call");
    assert_eq!(count.try_cast::<i64>(), Some(2));
}

#[test]
fn an_unreadable_submission_is_fatal() {
    assert!(Submission::load(fixture("does_not_exist.rhai")).is_err());
}

#[test]
fn a_submission_with_a_syntax_error_is_fatal() {
    let dir = std::env::temp_dir().join("pregrade-syntax-error-test");
    std::fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("broken.rhai");
    std::fs::write(&path, "fn select_column(data {").expect("write");

    assert!(Submission::load(&path).is_err());
}
