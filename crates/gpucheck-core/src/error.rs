//! Probe error types.
//!
//! None of these reach the binary's exit code: the probe boundary converts
//! every `ProbeError` into a [`ProbeResult`](crate::ProbeResult).

use thiserror::Error;

use crate::ports::InterpreterError;

/// Failures that can occur while running a single probe stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// The library's module could not be imported.
    #[error("{library} not installed")]
    NotInstalled { library: String },

    /// The probe script raised; carries the exception summary line.
    #[error("{0}")]
    ScriptFailed(String),

    /// The script exited cleanly but printed nothing usable.
    #[error("unreadable probe output: {0}")]
    MalformedOutput(String),

    /// The interpreter itself could not be started.
    #[error(transparent)]
    Interpreter(#[from] InterpreterError),
}
