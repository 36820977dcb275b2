//! Port definitions.
//!
//! Ports are the seams between the pure core and the adapters that touch
//! the outside world. Implementations live in `gpucheck-runtime`.

mod interpreter;

pub use interpreter::{InterpreterError, InterpreterPort, Script, ScriptOutput};
