//! Interpreter port for running probe scripts.
//!
//! This port abstracts the Python interpreter the probes talk to. The core
//! only describes *what* to run ([`Script`]) and *what came back*
//! ([`ScriptOutput`]); spawning processes is the adapter's job.
//!
//! # Design Notes
//!
//! - Core owns the trait and types (pure)
//! - Runtime owns the implementation (`PythonInterpreter`, via `Command::new`)
//! - CLI injects the interpreter via main.rs

use thiserror::Error;

/// Errors raised by the interpreter adapter itself, as opposed to errors
/// raised inside a script.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpreterError {
    /// The interpreter executable could not be started.
    #[error("failed to launch {program}: {reason}")]
    Launch { program: String, reason: String },

    /// The interpreter ran but did not report a version.
    #[error("{program} did not report a version")]
    NoVersion { program: String },
}

/// A probe script plus the environment it must run with.
///
/// Every script starts with a `# gpucheck: <module> <stage>` marker line so
/// logs and test doubles can tell stages apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    module: String,
    stage: String,
    source: String,
    env: Vec<(String, String)>,
}

impl Script {
    /// Build a script for `module` at `stage` from its Python body.
    pub fn new(module: impl Into<String>, stage: impl Into<String>, body: &str) -> Self {
        let module = module.into();
        let stage = stage.into();
        let source = format!("# gpucheck: {module} {stage}\n{}", body.trim_start());
        Self {
            module,
            stage,
            source,
            env: Vec::new(),
        }
    }

    /// Add an environment variable scoped to this script's process.
    #[must_use]
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn stage(&self) -> &str {
        &self.stage
    }

    /// Full Python source, marker line included.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn env(&self) -> &[(String, String)] {
        &self.env
    }

    /// The marker line this script starts with.
    pub fn marker(&self) -> String {
        format!("# gpucheck: {} {}", self.module, self.stage)
    }
}

/// Captured result of running a [`Script`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptOutput {
    /// Exit code; `None` when the process was killed by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ScriptOutput {
    /// Convenience constructor for a clean exit.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            status: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Convenience constructor for a failed exit.
    pub fn failed(status: i32, stderr: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Last non-empty line of stdout, trimmed.
    pub fn last_stdout_line(&self) -> Option<&str> {
        last_non_empty_line(&self.stdout)
    }

    /// One-line description of why the script failed.
    ///
    /// Python prints the exception as the last line of its traceback, so the
    /// last non-empty stderr line is the most useful summary.
    pub fn error_summary(&self) -> String {
        if let Some(line) = last_non_empty_line(&self.stderr) {
            return line.to_string();
        }
        if let Some(line) = last_non_empty_line(&self.stdout) {
            return line.to_string();
        }
        match self.status {
            Some(code) => format!("exited with status {code}"),
            None => "terminated by signal".to_string(),
        }
    }
}

fn last_non_empty_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).rev().find(|line| !line.is_empty())
}

/// Port for running probe scripts in a Python interpreter.
///
/// # Example
///
/// ```ignore
/// use gpucheck_core::ports::{InterpreterPort, Script};
///
/// fn torch_version(python: &dyn InterpreterPort) -> Option<String> {
///     let script = Script::new("torch", "import", "import torch\nprint(torch.__version__)");
///     let output = python.run(&script).ok()?;
///     output.success().then(|| output.last_stdout_line().map(str::to_string)).flatten()
/// }
/// ```
pub trait InterpreterPort: Send + Sync {
    /// Display name of the interpreter (path or command name).
    fn program(&self) -> &str;

    /// The interpreter's own version banner (`sys.version`).
    fn version(&self) -> Result<String, InterpreterError>;

    /// Run a script to completion and capture its output.
    ///
    /// A script that raises is *not* an error here; it is a successful run
    /// with a non-zero [`ScriptOutput::status`].
    fn run(&self, script: &Script) -> Result<ScriptOutput, InterpreterError>;
}
