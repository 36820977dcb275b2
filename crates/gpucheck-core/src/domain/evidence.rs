//! Evidence printed by a successful accelerator stage.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ProbeError;

/// What an accelerator script reports about the device it ran on.
///
/// Scripts print this as a JSON object on the last line of stdout. Every
/// field is optional, but at least one concrete fact (a device count, a
/// device name or the workload result) must be present for the evidence to
/// count.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Evidence {
    pub backend: Option<String>,
    pub device_count: Option<u32>,
    pub current_device: Option<u32>,
    pub device_names: Vec<String>,
    pub result: Option<Value>,
    pub note: Option<String>,
}

impl Evidence {
    /// Parse the evidence object out of a script's stdout.
    ///
    /// Libraries occasionally print their own chatter to stdout, so the last
    /// line that looks like a JSON object wins.
    pub fn parse(stdout: &str) -> Result<Self, ProbeError> {
        let line = stdout
            .lines()
            .map(str::trim)
            .rev()
            .find(|line| line.starts_with('{'))
            .ok_or_else(|| ProbeError::MalformedOutput("no evidence printed".to_string()))?;

        let evidence: Self = serde_json::from_str(line)
            .map_err(|e| ProbeError::MalformedOutput(e.to_string()))?;

        if evidence.has_concrete_fact() {
            Ok(evidence)
        } else {
            Err(ProbeError::MalformedOutput(
                "evidence carries no device or result".to_string(),
            ))
        }
    }

    pub fn has_concrete_fact(&self) -> bool {
        self.device_count.is_some() || !self.device_names.is_empty() || self.result.is_some()
    }

    /// Render as the human-readable details line.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();

        if let Some(backend) = &self.backend {
            parts.push(format!("Backend: {backend}"));
        }
        if let Some(count) = self.device_count {
            parts.push(format!("Devices: {count}"));
        }
        if let Some(index) = self.current_device {
            parts.push(format!("Current: {index}"));
        }
        match self.device_names.as_slice() {
            [] => {}
            [name] => parts.push(format!("Name: {name}")),
            names => {
                for (i, name) in names.iter().enumerate() {
                    parts.push(format!("GPU{i}: {name}"));
                }
            }
        }
        if let Some(result) = &self.result {
            parts.push(format!("Test: {}", render_value(result)));
        }
        if let Some(note) = &self.note {
            parts.push(note.clone());
        }

        parts.join(", ")
    }
}

/// Render a JSON value with a space after each list comma, as Python prints
/// lists. Anything that is not an array keeps its JSON form.
fn render_value(value: &Value) -> String {
    match value {
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(render_value).collect();
            format!("[{}]", items.join(", "))
        }
        other => other.to_string(),
    }
}
