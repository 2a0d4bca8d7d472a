#![forbid(unsafe_code)]

//! The two fixed demo datasets.
//!
//! Both lists are `static` literals: built once, ordered by start time, never
//! mutated. Ids are unique within each list.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::slot::{Phase, SlotMode, SlotRecord, SlotStatus};

/// Which of the two schemes a slot list represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    /// Reserved, deterministic execution windows.
    Deterministic,
    /// Public-mempool competition with probabilistic inclusion.
    Traditional,
}

/// Headline numbers shown under a dataset's timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    /// Percentage of transactions that land.
    pub success_pct: u8,
    /// Display string for average latency.
    pub avg_latency: String,
    /// Total retries across the workflow.
    pub retries: u32,
}

impl Dataset {
    pub const ALL: [Dataset; 2] = [Dataset::Deterministic, Dataset::Traditional];

    pub fn slots(self) -> &'static [SlotRecord] {
        match self {
            Dataset::Deterministic => DETERMINISTIC_SLOTS,
            Dataset::Traditional => TRADITIONAL_SLOTS,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Dataset::Deterministic => "Deterministic Reservation",
            Dataset::Traditional => "Traditional Mempool",
        }
    }

    pub const fn short_label(self) -> &'static str {
        match self {
            Dataset::Deterministic => "Deterministic",
            Dataset::Traditional => "Traditional",
        }
    }

    /// Badge text next to the panel title.
    pub const fn badge(self) -> &'static str {
        match self {
            Dataset::Deterministic => "100% Guaranteed",
            Dataset::Traditional => "58% Success",
        }
    }

    /// Headline numbers derived from the slot list.
    ///
    /// Average latency falls back to the quoted network figure when no slot
    /// reports a measured latency.
    pub fn summary(self) -> DatasetSummary {
        let (success_pct, quoted_latency) = match self {
            Dataset::Deterministic => (100, "33ms"),
            Dataset::Traditional => (58, "1.25s"),
        };
        DatasetSummary {
            success_pct,
            avg_latency: self
                .mean_latency_ms()
                .map_or_else(|| quoted_latency.to_string(), |ms| format!("{ms}ms")),
            retries: self.total_retries(),
        }
    }

    /// Sum of the per-slot retry counts.
    pub fn total_retries(self) -> u32 {
        self.slots().iter().filter_map(|s| s.retry_count).sum()
    }

    /// Mean of the known per-slot latencies, rounded down.
    ///
    /// Returns `None` when no slot in the dataset reports a latency.
    pub fn mean_latency_ms(self) -> Option<u32> {
        let latencies: Vec<u32> = self.slots().iter().filter_map(|s| s.latency_ms).collect();
        if latencies.is_empty() {
            return None;
        }
        Some(latencies.iter().sum::<u32>() / latencies.len() as u32)
    }
}

/// Both datasets serialized as a JSON object keyed by dataset name.
pub fn to_json() -> Result<String> {
    let value = serde_json::json!({
        "deterministic": {
            "title": Dataset::Deterministic.title(),
            "summary": Dataset::Deterministic.summary(),
            "slots": Dataset::Deterministic.slots(),
        },
        "traditional": {
            "title": Dataset::Traditional.title(),
            "summary": Dataset::Traditional.summary(),
            "slots": Dataset::Traditional.slots(),
        },
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

static DETERMINISTIC_SLOTS: &[SlotRecord] = &[
    SlotRecord {
        id: "slot-a1",
        label: "Mint prep",
        start: 0.0,
        duration: 12.0,
        mode: SlotMode::Aot,
        phase: Phase::Mint,
        status: SlotStatus::Reserved,
        description: Some(
            "Reserve an AOT window 45s ahead for allowlist verification and metadata pinning.",
        ),
        insight: Some("Batch metadata writes 45s before mint to avoid public mempool contention."),
        infra_note: Some("Coordination nodes observe prep status and queue retries if pinning fails."),
        node_region: Some("NYC"),
        latency_ms: Some(35),
        failure_rate: Some(0),
        retry_count: Some(0),
    },
    SlotRecord {
        id: "slot-a2",
        label: "Mint live",
        start: 12.0,
        duration: 12.0,
        mode: SlotMode::Aot,
        phase: Phase::Mint,
        status: SlotStatus::Executing,
        description: Some("Deterministic mint window with pre-confirmations under 30 ms."),
        insight: Some("Public mint batches land in the same order users signed."),
        infra_note: Some(
            "If a wallet spikes latency, the slot manager reorders within the reserved window.",
        ),
        node_region: Some("Frankfurt"),
        latency_ms: Some(32),
        failure_rate: Some(0),
        retry_count: Some(0),
    },
    SlotRecord {
        id: "slot-a3",
        label: "Settlement batch",
        start: 24.0,
        duration: 12.0,
        mode: SlotMode::Aot,
        phase: Phase::Settlement,
        status: SlotStatus::Reserved,
        description: Some("Royalty accounting and payout netting scheduled ahead of time."),
        insight: Some("Treasury and marketplace royalties settle before reporting cutoff."),
        infra_note: Some(
            "Nodes stream partial batches to keep compute hot, then finalize atomically.",
        ),
        node_region: Some("Tokyo"),
        latency_ms: Some(41),
        failure_rate: Some(0),
        retry_count: Some(0),
    },
    SlotRecord {
        id: "slot-a4",
        label: "Treasury hedge",
        start: 36.0,
        duration: 12.0,
        mode: SlotMode::Jit,
        phase: Phase::Treasury,
        status: SlotStatus::Reserved,
        description: Some(
            "JIT swap slot triggered once settlement completes; coordination nodes absorb retries.",
        ),
        insight: Some("Treasury hedges maintain NAV despite volatility."),
        infra_note: Some(
            "Nodes monitor the oracle feed and trigger a backup slot if pricing deviates >5 bps.",
        ),
        node_region: Some("Chicago"),
        latency_ms: Some(28),
        failure_rate: Some(0),
        retry_count: Some(0),
    },
    SlotRecord {
        id: "slot-a5",
        label: "Post-mint buffer",
        start: 48.0,
        duration: 12.0,
        mode: SlotMode::Jit,
        phase: Phase::Mint,
        status: SlotStatus::Confirmed,
        description: Some(
            "Safety buffer guarantees rollbacks or refunds execute without congestion risk.",
        ),
        insight: Some("Any failed mint or compliance adjustment executes immediately."),
        infra_note: Some("If no action is needed, the slot returns to the marketplace for other builders."),
        node_region: Some("São Paulo"),
        latency_ms: Some(30),
        failure_rate: Some(0),
        retry_count: Some(0),
    },
];

static TRADITIONAL_SLOTS: &[SlotRecord] = &[
    SlotRecord {
        id: "slot-t1",
        label: "Mint hopeful",
        start: 0.0,
        duration: 10.0,
        mode: SlotMode::Aot,
        phase: Phase::Mint,
        status: SlotStatus::Uncertain,
        description: Some("Competes in the public mempool; ordering can be front-run."),
        insight: None,
        infra_note: None,
        node_region: None,
        latency_ms: None,
        failure_rate: Some(42),
        retry_count: Some(3),
    },
    SlotRecord {
        id: "slot-t2",
        label: "Retry storm",
        start: 15.0,
        duration: 14.0,
        mode: SlotMode::Jit,
        phase: Phase::Mint,
        status: SlotStatus::Failed,
        description: Some("Failed transactions spam retries, inflating fees and delaying delivery."),
        insight: None,
        infra_note: None,
        node_region: None,
        latency_ms: None,
        failure_rate: Some(67),
        retry_count: Some(8),
    },
    SlotRecord {
        id: "slot-t3",
        label: "Settlement (maybe)",
        start: 34.0,
        duration: 12.0,
        mode: SlotMode::Aot,
        phase: Phase::Settlement,
        status: SlotStatus::Uncertain,
        description: Some("Sequencing depends on auction outcomes; no guarantees."),
        insight: None,
        infra_note: None,
        node_region: None,
        latency_ms: None,
        failure_rate: Some(38),
        retry_count: Some(2),
    },
    SlotRecord {
        id: "slot-t4",
        label: "Treasury swap",
        start: 50.0,
        duration: 10.0,
        mode: SlotMode::Jit,
        phase: Phase::Treasury,
        status: SlotStatus::Uncertain,
        description: Some("Swap may miss the hedging window due to congestion spikes."),
        insight: None,
        infra_note: None,
        node_region: None,
        latency_ms: None,
        failure_rate: Some(45),
        retry_count: Some(4),
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::timeline::AXIS_LENGTH;

    #[test]
    fn dataset_sizes() {
        assert_eq!(Dataset::Deterministic.slots().len(), 5);
        assert_eq!(Dataset::Traditional.slots().len(), 4);
    }

    #[test]
    fn ids_unique_within_each_dataset() {
        for dataset in Dataset::ALL {
            let mut seen = HashSet::new();
            for slot in dataset.slots() {
                assert!(seen.insert(slot.id), "duplicate id {} in {dataset:?}", slot.id);
            }
        }
    }

    #[test]
    fn ids_unique_across_datasets() {
        let det: HashSet<_> = Dataset::Deterministic.slots().iter().map(|s| s.id).collect();
        for slot in Dataset::Traditional.slots() {
            assert!(!det.contains(slot.id));
        }
    }

    #[test]
    fn slots_fit_the_axis() {
        for dataset in Dataset::ALL {
            for slot in dataset.slots() {
                assert!(slot.start >= 0.0, "{} starts before zero", slot.id);
                assert!(slot.duration > 0.0);
                assert!(slot.end() <= AXIS_LENGTH, "{} overruns the axis", slot.id);
            }
        }
    }

    #[test]
    fn slots_are_ordered_by_start() {
        for dataset in Dataset::ALL {
            let starts: Vec<f64> = dataset.slots().iter().map(|s| s.start).collect();
            assert!(starts.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn summaries_agree_with_slot_data() {
        let det = Dataset::Deterministic.summary();
        assert_eq!(det.retries, 0);
        assert_eq!(Dataset::Deterministic.mean_latency_ms(), Some(33));
        assert_eq!(det.avg_latency, "33ms");

        let trad = Dataset::Traditional.summary();
        assert_eq!(trad.retries, Dataset::Traditional.total_retries());
        assert_eq!(trad.retries, 17);
        assert_eq!(Dataset::Traditional.mean_latency_ms(), None);
        assert_eq!(trad.avg_latency, "1.25s");
    }

    #[test]
    fn json_export_contains_both_datasets() {
        let json = to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["deterministic"]["slots"].as_array().unwrap().len(), 5);
        assert_eq!(value["traditional"]["slots"].as_array().unwrap().len(), 4);
        assert_eq!(value["traditional"]["slots"][1]["status"], "Failed");
        assert_eq!(value["deterministic"]["slots"][3]["mode"], "JIT");
        assert_eq!(value["traditional"]["summary"]["retries"], 17);
    }
}
