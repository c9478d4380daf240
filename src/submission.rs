#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The uniform calling interface over a learner's loaded submission script.

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rhai::{AST, Dynamic, Engine, EvalAltResult, Scope};
use thiserror::Error;

use crate::create_engine;

/// Errors reported when invoking a submission function.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// The submission never defines the required function.
    #[error("function `{name}` is not defined")]
    Undefined {
        /// Name of the missing function.
        name: String,
    },

    /// The function exists but raised while being evaluated.
    #[error("function `{name}` raised: {message}")]
    Raised {
        /// Name of the function that raised.
        name:    String,
        /// Error text from the script engine.
        message: String,
    },
}

/// A learner's submission, compiled once and invoked function-by-function.
///
/// Required functions are resolved through an explicit capability table built
/// from the compiled script, so an absent definition is detectable without
/// ever evaluating anything.
pub struct Submission {
    /// Where the script was loaded from.
    path:      PathBuf,
    /// Raw script text, kept for the style check.
    source:    String,
    /// Engine the script is evaluated with.
    engine:    Engine,
    /// Compiled script.
    ast:       AST,
    /// Names of every function the script defines.
    functions: BTreeSet<String>,
}

impl Submission {
    /// Reads and compiles the submission at `path`.
    ///
    /// A file that cannot be read or parsed is fatal here; per-function
    /// failures are not, and surface later through [`Submission::call`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let source = fs::read_to_string(&path)
            .with_context(|| format!("Could not read submission at {}", path.display()))?;

        let engine = create_engine();
        let ast = engine
            .compile(&source)
            .map_err(|e| anyhow::anyhow!("Syntax error in {}: {e}", path.display()))?;

        let functions = ast.iter_functions().map(|f| f.name.to_string()).collect();

        Ok(Self {
            path,
            source,
            engine,
            ast,
            functions,
        })
    }

    /// Whether the submission defines a function with the given name.
    pub fn defines(&self, name: &str) -> bool {
        self.functions.contains(name)
    }

    /// Invokes a submission function with the given arguments.
    ///
    /// Each call evaluates in a fresh scope, so no state leaks between
    /// checks.
    pub fn call(&self, name: &str, args: Vec<Dynamic>) -> Result<Dynamic, SubmissionError> {
        let mut scope = Scope::new();
        self.engine
            .call_fn::<Dynamic>(&mut scope, &self.ast, name, args)
            .map_err(|err| match *err {
                // Only a lookup failure for the target itself means the
                // function is absent; a missing helper inside its body is a
                // raise like any other.
                EvalAltResult::ErrorFunctionNotFound(ref signature, _)
                    if signature.starts_with(name) =>
                {
                    SubmissionError::Undefined {
                        name: name.to_string(),
                    }
                }
                other => SubmissionError::Raised {
                    name:    name.to_string(),
                    message: other.to_string(),
                },
            })
    }

    /// Raw script text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Where the script was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
