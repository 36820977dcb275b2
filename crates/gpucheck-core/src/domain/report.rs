//! Results collection and summary counts.

use super::ProbeResult;

/// Ordered mapping from library name to its [`ProbeResult`].
///
/// Iteration order is insertion order, which the orchestrator keeps equal to
/// probe registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeReport {
    results: Vec<ProbeResult>,
}

impl ProbeReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a result, replacing any earlier result for the same library in
    /// place.
    pub fn insert(&mut self, result: ProbeResult) {
        match self
            .results
            .iter_mut()
            .find(|existing| existing.library_name() == result.library_name())
        {
            Some(existing) => *existing = result,
            None => self.results.push(result),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProbeResult> {
        self.results.iter()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Results whose library imported successfully.
    pub fn installed(&self) -> impl Iterator<Item = &ProbeResult> {
        self.results.iter().filter(|r| r.is_installed())
    }

    pub fn installed_count(&self) -> usize {
        self.installed().count()
    }

    pub fn accelerator_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.accelerator_available())
            .count()
    }

    /// Summary counts against `registered` probes.
    pub fn summary(&self, registered: usize) -> Summary {
        Summary {
            registered,
            installed: self.installed_count(),
            accelerated: self.accelerator_count(),
        }
    }
}

/// Counts shown in the final summary section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub registered: usize,
    pub installed: usize,
    pub accelerated: usize,
}

impl Summary {
    pub fn installed_line(&self) -> String {
        format!("Libraries installed: {}/{}", self.installed, self.registered)
    }

    /// Ratio line. Printed as two counts, never divided, so zero installed
    /// libraries renders as `0/0`.
    pub fn accelerator_line(&self) -> String {
        format!(
            "Accelerator-enabled libraries: {}/{}",
            self.accelerated, self.installed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_report() -> ProbeReport {
        let mut report = ProbeReport::new();
        report.insert(ProbeResult::accelerated("PyTorch", "2.3.0", "Devices: 1"));
        report.insert(ProbeResult::not_installed("TensorFlow"));
        report.insert(ProbeResult::fallback_works("CatBoost", "1.2.5", "no GPU"));
        report.insert(ProbeResult::unexpected("XGBoost", "segfault"));
        report
    }

    #[test]
    fn test_counts() {
        let report = mixed_report();
        assert_eq!(report.len(), 4);
        assert_eq!(report.installed_count(), 2);
        assert_eq!(report.accelerator_count(), 1);
        assert!(report.accelerator_count() <= report.installed_count());
    }

    #[test]
    fn test_preserves_registration_order() {
        let report = mixed_report();
        let names: Vec<&str> = report.iter().map(ProbeResult::library_name).collect();
        assert_eq!(names, ["PyTorch", "TensorFlow", "CatBoost", "XGBoost"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut report = mixed_report();
        report.insert(ProbeResult::not_installed("PyTorch"));

        assert_eq!(report.len(), 4);
        assert_eq!(report.iter().next().map(ProbeResult::library_name), Some("PyTorch"));
        assert!(!report.iter().next().unwrap().is_installed());
    }

    #[test]
    fn test_summary_lines() {
        let summary = mixed_report().summary(4);
        assert_eq!(summary.installed_line(), "Libraries installed: 2/4");
        assert_eq!(summary.accelerator_line(), "Accelerator-enabled libraries: 1/2");
    }

    #[test]
    fn test_summary_with_nothing_installed() {
        let mut report = ProbeReport::new();
        for name in ["PyTorch", "TensorFlow", "CatBoost", "XGBoost"] {
            report.insert(ProbeResult::not_installed(name));
        }

        let summary = report.summary(4);
        assert_eq!(summary.installed_line(), "Libraries installed: 0/4");
        assert_eq!(summary.accelerator_line(), "Accelerator-enabled libraries: 0/0");
    }
}
