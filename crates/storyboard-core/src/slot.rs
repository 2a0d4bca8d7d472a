#![forbid(unsafe_code)]

//! Slot records and their categorical tags.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;

/// How a slot was scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotMode {
    /// Ahead-of-time: booked before the window opens.
    #[serde(rename = "AOT")]
    Aot,
    /// Just-in-time: requested when the work is needed.
    #[serde(rename = "JIT")]
    Jit,
}

impl SlotMode {
    pub const ALL: [SlotMode; 2] = [SlotMode::Aot, SlotMode::Jit];

    pub const fn label(self) -> &'static str {
        match self {
            SlotMode::Aot => "AOT",
            SlotMode::Jit => "JIT",
        }
    }

    pub const fn long_label(self) -> &'static str {
        match self {
            SlotMode::Aot => "Ahead-of-Time",
            SlotMode::Jit => "Just-in-Time",
        }
    }
}

/// Workflow phase a slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Mint,
    Settlement,
    Treasury,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Mint, Phase::Settlement, Phase::Treasury];

    pub const fn label(self) -> &'static str {
        match self {
            Phase::Mint => "Mint",
            Phase::Settlement => "Settlement",
            Phase::Treasury => "Treasury",
        }
    }
}

/// Outcome tag shown on a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotStatus {
    Reserved,
    Executing,
    Confirmed,
    Uncertain,
    Failed,
}

impl SlotStatus {
    pub const ALL: [SlotStatus; 5] = [
        SlotStatus::Reserved,
        SlotStatus::Executing,
        SlotStatus::Confirmed,
        SlotStatus::Uncertain,
        SlotStatus::Failed,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            SlotStatus::Reserved => "Reserved",
            SlotStatus::Executing => "Executing",
            SlotStatus::Confirmed => "Confirmed",
            SlotStatus::Uncertain => "Uncertain",
            SlotStatus::Failed => "Failed",
        }
    }

    /// Uncertain and failed slots get the "at risk" treatment on the timeline.
    pub const fn is_at_risk(self) -> bool {
        matches!(self, SlotStatus::Uncertain | SlotStatus::Failed)
    }
}

/// One scheduled or attempted unit of work on the timeline.
///
/// Records are `'static` demo data and are never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotRecord {
    pub id: &'static str,
    pub label: &'static str,
    /// Offset from the start of the axis, in seconds.
    pub start: f64,
    /// Length of the window, in seconds.
    pub duration: f64,
    pub mode: SlotMode,
    pub phase: Phase,
    pub status: SlotStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insight: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infra_note: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_region: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_rate: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_count: Option<u32>,
}

impl SlotRecord {
    /// End of the slot window in seconds.
    #[inline]
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Short secondary line shown under the label on a timeline block.
    ///
    /// Mirrors what the block can afford to show: the mode, then latency
    /// and failure rate when they are known and non-zero.
    pub fn caption(&self) -> String {
        let mut caption = self.mode.label().to_string();
        if let Some(ms) = self.latency_ms.filter(|ms| *ms > 0) {
            caption.push_str(&format!(" · {ms}ms"));
        }
        if let Some(rate) = self.failure_rate.filter(|rate| *rate > 0) {
            caption.push_str(&format!(" · {rate}% fail"));
        }
        caption
    }
}

/// Stable reference to a slot inside one of the fixed datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotRef {
    pub dataset: Dataset,
    pub index: usize,
}

impl SlotRef {
    pub const fn new(dataset: Dataset, index: usize) -> Self {
        Self { dataset, index }
    }

    /// Resolve to the referenced record, if the index is in range.
    pub fn slot(self) -> Option<&'static SlotRecord> {
        self.dataset.slots().get(self.index)
    }

    /// Find the reference for a slot id across both datasets.
    pub fn find(id: &str) -> Option<SlotRef> {
        Dataset::ALL.iter().find_map(|&dataset| {
            dataset
                .slots()
                .iter()
                .position(|slot| slot.id == id)
                .map(|index| SlotRef::new(dataset, index))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_labels() {
        assert_eq!(SlotMode::Aot.label(), "AOT");
        assert_eq!(SlotMode::Jit.label(), "JIT");
        assert_eq!(SlotMode::Aot.long_label(), "Ahead-of-Time");
    }

    #[test]
    fn phase_labels() {
        for phase in Phase::ALL {
            assert!(!phase.label().is_empty());
        }
        assert_eq!(Phase::Settlement.label(), "Settlement");
    }

    #[test]
    fn status_at_risk() {
        let at_risk: Vec<_> = SlotStatus::ALL
            .into_iter()
            .filter(|s| s.is_at_risk())
            .collect();
        assert_eq!(at_risk, vec![SlotStatus::Uncertain, SlotStatus::Failed]);
    }

    #[test]
    fn mode_serializes_upper_case() {
        let json = serde_json::to_string(&SlotMode::Jit).unwrap();
        assert_eq!(json, "\"JIT\"");
        let back: SlotMode = serde_json::from_str("\"AOT\"").unwrap();
        assert_eq!(back, SlotMode::Aot);
    }

    #[test]
    fn caption_includes_known_metrics() {
        let slot = SlotRef::find("slot-a2").and_then(SlotRef::slot).unwrap();
        assert_eq!(slot.caption(), "AOT · 32ms");

        let slot = SlotRef::find("slot-t2").and_then(SlotRef::slot).unwrap();
        assert_eq!(slot.caption(), "JIT · 67% fail");
    }

    #[test]
    fn find_resolves_both_datasets() {
        let r = SlotRef::find("slot-a1").unwrap();
        assert_eq!(r, SlotRef::new(Dataset::Deterministic, 0));
        let r = SlotRef::find("slot-t4").unwrap();
        assert_eq!(r, SlotRef::new(Dataset::Traditional, 3));
        assert!(SlotRef::find("slot-z9").is_none());
    }

    #[test]
    fn out_of_range_ref_resolves_to_none() {
        assert!(SlotRef::new(Dataset::Traditional, 99).slot().is_none());
    }

    #[test]
    fn empty_optionals_are_not_serialized() {
        let slot = SlotRef::find("slot-t1").and_then(SlotRef::slot).unwrap();
        let value = serde_json::to_value(slot).unwrap();
        assert!(value.get("latency_ms").is_none());
        assert!(value.get("insight").is_none());
        assert_eq!(value["failure_rate"], 42);
    }
}
