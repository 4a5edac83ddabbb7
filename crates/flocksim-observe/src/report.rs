//! Simulation reports.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use flocksim_core::Transcript;

/// Unique identifier for a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimulationId(Uuid);

impl SimulationId {
    /// Create a new random simulation ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SimulationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SimulationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything a driver wants to show after a simulation.
///
/// Built from the transcript, then enriched with whatever the driver has:
/// the shared counter's total when a counting product line ran, and the
/// quackologist's sightings when an observer was registered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Unique run ID.
    pub simulation_id: SimulationId,
    /// Every call produced, in order.
    pub calls: Vec<String>,
    /// Total counted quacks, when a counting factory was in play.
    pub quack_total: Option<u64>,
    /// Observer sightings, in notification order.
    pub sightings: Vec<String>,
}

impl SimulationReport {
    /// Build a report from a transcript.
    pub fn new(transcript: &Transcript) -> Self {
        Self {
            simulation_id: SimulationId::new(),
            calls: transcript.calls(),
            quack_total: None,
            sightings: Vec::new(),
        }
    }

    /// Attach the counted quack total.
    pub fn with_quack_total(mut self, total: u64) -> Self {
        self.quack_total = Some(total);
        self
    }

    /// Attach observer sightings.
    pub fn with_sightings(mut self, sightings: Vec<String>) -> Self {
        self.sightings = sightings;
        self
    }

    /// Number of calls produced.
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Format as human-readable text.
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str("Duck Simulator\n");
        for call in &self.calls {
            output.push_str(call);
            output.push('\n');
        }

        if let Some(total) = self.quack_total {
            output.push_str(&format!("The ducks quacked {} times\n", total));
        }

        if !self.sightings.is_empty() {
            output.push_str("\nSightings:\n");
            for sighting in &self.sightings {
                output.push_str(&format!("  Quackologist: {} just quacked\n", sighting));
            }
        }

        output
    }

    /// Format as JSON.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// Format as pretty JSON string.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
