//! Active probing for gpucheck.
//!
//! This crate provides [`PythonInterpreter`], which implements
//! `InterpreterPort` from gpucheck-core by spawning the interpreter as a
//! child process, and the [`Library`] registry with the per-library probe
//! scripts.

#![deny(unsafe_code)]

pub mod probes;
pub mod python;

// Re-export the probe registry and entry point
pub use probes::{Library, probe};

// Re-export the interpreter adapter
pub use python::PythonInterpreter;
