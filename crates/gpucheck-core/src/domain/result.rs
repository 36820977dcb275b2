//! The per-library probe result record.

use std::fmt::Display;

/// Outcome of probing one library.
///
/// Fields are private so the only way to build a result is through the
/// constructors below, which keep the invariant that a library without a
/// version (not installed, or failed before its version was known) is never
/// reported as accelerator-capable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    library_name: String,
    accelerator_available: bool,
    details: String,
    library_version: Option<String>,
}

impl ProbeResult {
    /// The library's module could not be imported.
    pub fn not_installed(library: impl Into<String>) -> Self {
        let library_name = library.into();
        Self {
            details: format!("{library_name} not installed"),
            library_name,
            accelerator_available: false,
            library_version: None,
        }
    }

    /// Something outside the accelerator/fallback pair went wrong.
    pub fn unexpected(library: impl Into<String>, error: impl Display) -> Self {
        Self {
            library_name: library.into(),
            accelerator_available: false,
            details: format!("Error: {error}"),
            library_version: None,
        }
    }

    /// The accelerator workload ran; `details` describes the evidence.
    pub fn accelerated(
        library: impl Into<String>,
        version: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            library_name: library.into(),
            accelerator_available: true,
            details: details.into(),
            library_version: Some(version.into()),
        }
    }

    /// The accelerator path failed but the CPU path works.
    pub fn fallback_works(
        library: impl Into<String>,
        version: impl Into<String>,
        accelerator_error: &str,
    ) -> Self {
        Self {
            library_name: library.into(),
            accelerator_available: false,
            details: format!("GPU failed: {accelerator_error}, but CPU works"),
            library_version: Some(version.into()),
        }
    }

    /// Both the accelerator path and the CPU path failed.
    pub fn unavailable(
        library: impl Into<String>,
        version: impl Into<String>,
        accelerator_error: &str,
    ) -> Self {
        Self {
            library_name: library.into(),
            accelerator_available: false,
            details: format!("GPU not available: {accelerator_error} (CPU path also failed)"),
            library_version: Some(version.into()),
        }
    }

    pub fn library_name(&self) -> &str {
        &self.library_name
    }

    pub fn accelerator_available(&self) -> bool {
        self.accelerator_available
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn library_version(&self) -> Option<&str> {
        self.library_version.as_deref()
    }

    /// Whether the library imported successfully.
    pub fn is_installed(&self) -> bool {
        self.library_version.is_some()
    }
}
