//! Library probes.
//!
//! Each supported library is a [`Library`] variant backed by a
//! [`ProbeScripts`] table in its own module. [`probe`] runs the same three
//! stages for every library:
//!
//! 1. import: prints the module version, or exits with
//!    [`NOT_INSTALLED_STATUS`] when the import raises `ImportError`
//! 2. accelerator: runs the minimal workload on the GPU and prints
//!    `Evidence` as JSON
//! 3. fallback: runs the same workload on the CPU, only if stage 2 failed

mod catboost;
mod pytorch;
mod tensorflow;
mod xgboost;

use std::fmt;

use gpucheck_core::ports::{InterpreterPort, Script, ScriptOutput};
use gpucheck_core::{AttemptPolicy, Evidence, ProbeError, ProbeResult};
use tracing::{debug, info};

/// Exit status the import script uses for "module not importable".
pub const NOT_INSTALLED_STATUS: i32 = 3;

/// Python sources and scoped environment for one library.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProbeScripts {
    pub module: &'static str,
    pub accelerator: &'static str,
    pub fallback: &'static str,
    pub env: &'static [(&'static str, &'static str)],
}

impl ProbeScripts {
    fn script(&self, stage: &str, body: &str) -> Script {
        self.env
            .iter()
            .fold(Script::new(self.module, stage, body), |script, (k, v)| {
                script.with_env(*k, *v)
            })
    }

    fn import_body(&self) -> String {
        let module = self.module;
        format!(
            "import sys\ntry:\n    import {module}\n\
             except ImportError:\n    sys.exit({NOT_INSTALLED_STATUS})\n\
             print({module}.__version__)\n"
        )
    }
}

/// The libraries gpucheck knows how to probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Library {
    PyTorch,
    TensorFlow,
    CatBoost,
    XGBoost,
}

impl Library {
    /// Probe registry, in report order.
    pub const ALL: [Self; 4] = [Self::PyTorch, Self::TensorFlow, Self::CatBoost, Self::XGBoost];

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::PyTorch => "PyTorch",
            Self::TensorFlow => "TensorFlow",
            Self::CatBoost => "CatBoost",
            Self::XGBoost => "XGBoost",
        }
    }

    const fn scripts(self) -> &'static ProbeScripts {
        match self {
            Self::PyTorch => &pytorch::SCRIPTS,
            Self::TensorFlow => &tensorflow::SCRIPTS,
            Self::CatBoost => &catboost::SCRIPTS,
            Self::XGBoost => &xgboost::SCRIPTS,
        }
    }

    pub fn import_script(self) -> Script {
        let scripts = self.scripts();
        scripts.script("import", &scripts.import_body())
    }

    pub fn accelerator_script(self) -> Script {
        let scripts = self.scripts();
        scripts.script("accelerator", scripts.accelerator)
    }

    pub fn fallback_script(self) -> Script {
        let scripts = self.scripts();
        scripts.script("fallback", scripts.fallback)
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Probe one library. Never fails: every error becomes part of the result.
pub fn probe(
    library: Library,
    python: &dyn InterpreterPort,
    policy: &AttemptPolicy,
) -> ProbeResult {
    let name = library.display_name();

    let version = match import_version(library, python) {
        Ok(version) => version,
        Err(ProbeError::NotInstalled { .. }) => {
            info!(library = name, "Library not installed");
            return ProbeResult::not_installed(name);
        }
        Err(err) => {
            info!(library = name, error = %err, "Import failed unexpectedly");
            return ProbeResult::unexpected(name, err);
        }
    };
    debug!(library = name, version = %version, "Library imported");

    let accelerator = run_stage(python, &library.accelerator_script())
        .and_then(|output| Evidence::parse(&output.stdout));
    if let Err(err) = &accelerator {
        debug!(library = name, error = %err, "Accelerator stage failed, trying CPU");
    }

    let result = policy.classify(name, &version, accelerator, || {
        run_stage(python, &library.fallback_script()).map(|_| ())
    });

    info!(
        library = name,
        accelerator_available = result.accelerator_available(),
        "Probe finished"
    );
    result
}

fn import_version(library: Library, python: &dyn InterpreterPort) -> Result<String, ProbeError> {
    let output = python.run(&library.import_script())?;

    if output.status == Some(NOT_INSTALLED_STATUS) {
        return Err(ProbeError::NotInstalled {
            library: library.display_name().to_string(),
        });
    }
    if !output.success() {
        return Err(ProbeError::ScriptFailed(output.error_summary()));
    }

    output
        .last_stdout_line()
        .map(str::to_string)
        .ok_or_else(|| ProbeError::MalformedOutput("no version printed".to_string()))
}

fn run_stage(python: &dyn InterpreterPort, script: &Script) -> Result<ScriptOutput, ProbeError> {
    let output = python.run(script)?;
    if output.success() {
        Ok(output)
    } else {
        Err(ProbeError::ScriptFailed(output.error_summary()))
    }
}
