//! Core domain types and ports for gpucheck.
//!
//! This crate is pure: it defines what a probe produces ([`ProbeResult`]),
//! how results are collected ([`ProbeReport`]), how a two-stage
//! accelerator/fallback attempt is classified ([`AttemptPolicy`]) and the
//! [`InterpreterPort`] through which probes reach the Python environment.
//!
//! # Architecture Note
//!
//! Core defines types + the `InterpreterPort` trait (in `ports::interpreter`).
//! Runtime implements `PythonInterpreter`, which spawns the actual child
//! processes, and owns the per-library probe scripts.

#![deny(unsafe_code)]

pub mod domain;
pub mod error;
pub mod ports;

pub use domain::{
    AttemptPolicy, DETAIL_ERROR_LIMIT, Evidence, ProbeReport, ProbeResult, Summary,
    truncate_error,
};
pub use error::ProbeError;
pub use ports::{InterpreterError, InterpreterPort, Script, ScriptOutput};
