//! Command-line front end for gpucheck.
//!
//! `main.rs` is the composition root: it parses arguments, installs
//! logging, picks the interpreter and hands everything to
//! [`handlers::check::execute`].

#![deny(unsafe_code)]

pub mod handlers;
pub mod logging;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use parser::Cli;
pub use presentation::Style;
