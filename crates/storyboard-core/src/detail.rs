#![forbid(unsafe_code)]

//! Content of the slot detail overlay.
//!
//! Only populated fields produce entries; absent optionals are dropped with no
//! placeholder text.

use crate::slot::SlotRecord;

/// One `label: value` row in the overlay's attribute grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

impl DetailField {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Free-text block under the attribute grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailNote {
    pub heading: &'static str,
    pub text: &'static str,
}

/// Everything the overlay shows for one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotDetail {
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub fields: Vec<DetailField>,
    pub notes: Vec<DetailNote>,
}

impl SlotDetail {
    pub fn for_slot(slot: &SlotRecord) -> Self {
        let notes = [("Insight", slot.insight), ("Infrastructure", slot.infra_note)]
            .into_iter()
            .filter_map(|(heading, text)| text.map(|text| DetailNote { heading, text }))
            .collect();
        Self {
            title: slot.label,
            description: slot.description,
            fields: detail_fields(slot),
            notes,
        }
    }
}

/// Attribute rows: phase, mode, and status always; the rest only when set.
pub fn detail_fields(slot: &SlotRecord) -> Vec<DetailField> {
    let mut fields = vec![
        DetailField::new("Phase", slot.phase.label()),
        DetailField::new("Mode", slot.mode.label()),
        DetailField::new("Status", slot.status.label()),
    ];
    if let Some(region) = slot.node_region {
        fields.push(DetailField::new("Node", region));
    }
    if let Some(ms) = slot.latency_ms {
        fields.push(DetailField::new("Latency", format!("{ms}ms")));
    }
    if let Some(rate) = slot.failure_rate {
        fields.push(DetailField::new("Failure Rate", format!("{rate}%")));
    }
    if let Some(retries) = slot.retry_count {
        fields.push(DetailField::new("Retries", retries.to_string()));
    }
    fields
}
