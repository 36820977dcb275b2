//! Python interpreter adapter.
//!
//! This module provides [`PythonInterpreter`], the runtime side of the
//! `InterpreterPort` contract. Every probe script runs as
//! `<interpreter> -c <source>` in its own child process, waited for before
//! the next one starts.

mod resolve;

use std::path::PathBuf;
use std::process::{Command, Stdio};

use gpucheck_core::ports::{InterpreterError, InterpreterPort, Script, ScriptOutput};
use tracing::debug;

pub use resolve::{CANDIDATES, find_python};

/// Interpreter used when nothing is found on `PATH`. Launching it will fail,
/// and the probes report that failure.
pub const DEFAULT_PROGRAM: &str = "python3";

const VERSION_SCRIPT: &str = "import sys\nprint(sys.version.replace('\\n', ' '))\n";

/// Child-process implementation of `InterpreterPort`.
///
/// # Example
///
/// ```ignore
/// use gpucheck_runtime::PythonInterpreter;
/// use gpucheck_core::ports::InterpreterPort;
///
/// let python = PythonInterpreter::discover();
/// println!("{}", python.version()?);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonInterpreter {
    program: PathBuf,
    display: String,
}

impl PythonInterpreter {
    /// Use an explicit interpreter path or command name.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        let program = program.into();
        let display = program.display().to_string();
        Self { program, display }
    }

    /// Use the first of [`CANDIDATES`] found on `PATH`.
    pub fn discover() -> Self {
        match find_python() {
            Some(path) => {
                debug!(path = %path.display(), "Found Python interpreter");
                Self::new(path)
            }
            None => {
                debug!("No Python interpreter on PATH, falling back to {DEFAULT_PROGRAM}");
                Self::new(DEFAULT_PROGRAM)
            }
        }
    }

    fn launch_error(&self, err: &std::io::Error) -> InterpreterError {
        InterpreterError::Launch {
            program: self.display.clone(),
            reason: err.to_string(),
        }
    }
}

impl Default for PythonInterpreter {
    fn default() -> Self {
        Self::discover()
    }
}

impl InterpreterPort for PythonInterpreter {
    fn program(&self) -> &str {
        &self.display
    }

    fn version(&self) -> Result<String, InterpreterError> {
        let script = Script::new("sys", "version", VERSION_SCRIPT);
        let output = self.run(&script)?;

        if !output.success() {
            return Err(InterpreterError::NoVersion {
                program: self.display.clone(),
            });
        }

        output
            .last_stdout_line()
            .map(str::to_string)
            .ok_or_else(|| InterpreterError::NoVersion {
                program: self.display.clone(),
            })
    }

    fn run(&self, script: &Script) -> Result<ScriptOutput, InterpreterError> {
        debug!(
            program = %self.display,
            module = script.module(),
            stage = script.stage(),
            "Running probe script"
        );

        let output = Command::new(&self.program)
            .arg("-c")
            .arg(script.source())
            .envs(script.env().iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.launch_error(&e))?;

        let output = ScriptOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        debug!(
            module = script.module(),
            stage = script.stage(),
            status = ?output.status,
            "Probe script finished"
        );

        Ok(output)
    }
}
