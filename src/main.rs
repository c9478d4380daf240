#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # pregrade
//!
//! Do a local practice grading.
//!
//! The score you receive here is not an actual score, but gives you an idea
//! of how prepared you are to submit to the autograder.

use std::{path::PathBuf, process};

use anyhow::{Context, Result};
use bpaf::{Args, Parser, ParseFailure, construct, positional};
use pregrade::{
    constants::{ID_COLUMN, SYNTHETIC_DATA_CSV},
    frame::DataFrame,
    grade::Assignment,
    submission::Submission,
};
use tracing::{Level, info, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Parsed command-line options.
#[derive(Debug, Clone)]
struct Opts {
    /// Path to the submission script.
    submission: PathBuf,
    /// Emit the report as JSON instead of a table.
    json:       bool,
}

/// Parses the command line.
///
/// Anything other than exactly one submission path (plus optional flags) is
/// a usage error: the message goes to stderr and the process exits non-zero,
/// including for help requests, so no partial report is ever printed.
fn options() -> Opts {
    let submission = positional::<PathBuf>("SUBMISSION")
        .help("Path to the submission script (.rhai)");
    let json = bpaf::long("json")
        .help("Print the report as JSON instead of a table")
        .switch();

    let parser = construct!(Opts { json, submission })
        .to_options()
        .descr("Do a local practice grading. The score here is not an actual score.");

    match parser.run_inner(Args::current_args()) {
        Ok(opts) => opts,
        Err(ParseFailure::Completion(msg)) => {
            print!("{msg}");
            process::exit(0);
        }
        // Help requests land on stderr too: the only thing this tool ever
        // prints to stdout is a report.
        Err(ParseFailure::Stdout(doc, full)) => {
            eprintln!("{}", doc.monochrome(full));
            process::exit(1);
        }
        Err(ParseFailure::Stderr(doc)) => {
            eprintln!("{}", doc.monochrome(true));
            process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let opts = options();

    let data = DataFrame::from_csv_str(SYNTHETIC_DATA_CSV, ID_COLUMN)
        .context("Could not load the synthetic dataset")?;
    info!(rows = data.rows(), "loaded fixture dataset");

    let submission = Submission::load(&opts.submission)?;
    info!(path = %submission.path().display(), "loaded submission");

    let report = Assignment::hands_on_1(data).grade(&submission);

    if opts.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }

    Ok(())
}
