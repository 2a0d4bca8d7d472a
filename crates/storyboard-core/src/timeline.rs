#![forbid(unsafe_code)]

//! Timeline geometry.
//!
//! Slots are laid out on a 100-unit grid that spans a fixed 60-second axis.
//! Grid columns are 1-based; a span covers `[start, end)` in grid units, so
//! the widest possible span is `[1, 101)`.
//!
//! All functions clamp instead of failing: any input, including negative or
//! non-finite values, yields a span at least one unit wide that stays inside
//! the grid.

use serde::{Deserialize, Serialize};

use crate::slot::SlotRecord;

/// Length of the timeline axis in seconds.
pub const AXIS_LENGTH: f64 = 60.0;
/// Number of grid units the axis is divided into.
pub const GRID_UNITS: u16 = 100;
/// Largest valid exclusive end column.
pub const GRID_END_MAX: u16 = GRID_UNITS + 1;
/// Axis labels, in seconds.
pub const AXIS_TICKS: [u16; 3] = [0, 30, 60];

/// A slot's horizontal extent on the grid, `[start, end)` in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSpan {
    pub start: u16,
    pub end: u16,
}

impl GridSpan {
    /// Width in grid units; always at least 1.
    pub const fn width(self) -> u16 {
        self.end - self.start
    }

    /// Map this span onto `columns` terminal cells.
    ///
    /// Returns `(offset, width)` relative to the left edge of the track. The
    /// width is at least one cell and the span never runs past `columns`.
    pub fn project(self, columns: u16) -> (u16, u16) {
        if columns == 0 {
            return (0, 0);
        }
        let scale = |unit: u16| -> u16 {
            let cells = u32::from(unit.saturating_sub(1)) * u32::from(columns) / u32::from(GRID_UNITS);
            cells.min(u32::from(columns)) as u16
        };
        let offset = scale(self.start).min(columns - 1);
        let end = scale(self.end).max(offset + 1).min(columns);
        (offset, end - offset)
    }
}

fn sanitize(seconds: f64) -> f64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    }
}

fn to_units(seconds: f64) -> f64 {
    (sanitize(seconds) * f64::from(GRID_UNITS) / AXIS_LENGTH).floor()
}

/// First grid column for a time offset: `max(1, floor(t / 60 * 100))`,
/// capped at the last column.
pub fn grid_column(seconds: f64) -> u16 {
    to_units(seconds).clamp(1.0, f64::from(GRID_UNITS)) as u16
}

/// Exclusive end column for a window:
/// `min(101, max(start_col + 1, floor((start + duration) / 60 * 100)))`.
pub fn grid_end(start: f64, duration: f64) -> u16 {
    let start_col = grid_column(start);
    let end = to_units(sanitize(start) + sanitize(duration)).min(f64::from(GRID_END_MAX)) as u16;
    end.max(start_col + 1).min(GRID_END_MAX)
}

pub fn span(start: f64, duration: f64) -> GridSpan {
    GridSpan {
        start: grid_column(start),
        end: grid_end(start, duration),
    }
}

pub fn span_for(slot: &SlotRecord) -> GridSpan {
    span(slot.start, slot.duration)
}

/// Fraction of the axis covered by `elapsed`, in `[0, 1]`.
pub fn progress(elapsed: f64) -> f64 {
    (sanitize(elapsed) / AXIS_LENGTH).min(1.0)
}

/// Playback label shown next to the progress bar, e.g. `"12s / 60s"`.
pub fn progress_label(elapsed: f64) -> String {
    format!(
        "{}s / {}s",
        sanitize(elapsed).floor() as u32,
        AXIS_LENGTH as u32
    )
}

/// Presentation state of a slot relative to the playhead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotPhase {
    /// Playback is stopped; no highlighting.
    Idle,
    /// The playhead is inside the slot window.
    Active,
    /// The playhead has passed the end of the window.
    Completed,
    /// Playback is running but the window has not been reached yet.
    Dimmed,
}

/// Derive the visual phase of `slot` for the given playback state.
pub fn classify(slot: &SlotRecord, playing: bool, elapsed: f64) -> SlotPhase {
    if !playing {
        return SlotPhase::Idle;
    }
    if elapsed >= slot.start && elapsed <= slot.end() {
        SlotPhase::Active
    } else if elapsed > slot.end() {
        SlotPhase::Completed
    } else {
        SlotPhase::Dimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::slot::SlotRef;

    #[test]
    fn worked_examples() {
        assert_eq!(grid_column(12.0), 20);
        assert_eq!(grid_end(12.0, 12.0), 40);
        assert_eq!(grid_end(48.0, 12.0), 100);
        assert!(grid_end(48.0, 12.0) <= GRID_END_MAX);
    }

    #[test]
    fn zero_start_uses_first_column() {
        assert_eq!(grid_column(0.0), 1);
        assert_eq!(grid_end(0.0, 12.0), 20);
    }

    #[test]
    fn zero_duration_still_occupies_one_unit() {
        let s = span(30.0, 0.0);
        assert_eq!(s.start, 50);
        assert_eq!(s.end, 51);
        assert_eq!(s.width(), 1);
    }

    #[test]
    fn overrun_clamps_to_grid_end() {
        assert_eq!(grid_end(50.0, 100.0), GRID_END_MAX);
        assert_eq!(grid_column(500.0), GRID_UNITS);
        assert_eq!(grid_end(500.0, 5.0), GRID_END_MAX);
    }

    #[test]
    fn garbage_inputs_render_plausibly() {
        assert_eq!(grid_column(-5.0), 1);
        assert_eq!(grid_column(f64::NAN), 1);
        assert_eq!(grid_end(f64::INFINITY, f64::NAN), 2);
    }

    #[test]
    fn dataset_spans_stay_on_grid() {
        for dataset in Dataset::ALL {
            for slot in dataset.slots() {
                let s = span_for(slot);
                assert!((1..=GRID_UNITS).contains(&s.start), "{}", slot.id);
                assert!(s.end > s.start && s.end <= GRID_END_MAX, "{}", slot.id);
            }
        }
    }

    #[test]
    fn project_full_span() {
        let full = GridSpan { start: 1, end: 101 };
        assert_eq!(full.project(50), (0, 50));
    }

    #[test]
    fn project_keeps_one_cell_minimum() {
        let thin = GridSpan { start: 50, end: 51 };
        let (x, w) = thin.project(10);
        assert_eq!(w, 1);
        assert!(x < 10);
    }

    #[test]
    fn project_zero_columns() {
        assert_eq!(GridSpan { start: 1, end: 20 }.project(0), (0, 0));
    }

    #[test]
    fn project_last_column_stays_inside() {
        let tail = GridSpan { start: 100, end: 101 };
        let (x, w) = tail.project(40);
        assert_eq!(x + w, 40);
        assert_eq!(w, 1);
    }

    #[test]
    fn progress_and_label() {
        assert_eq!(progress(0.0), 0.0);
        assert_eq!(progress(30.0), 0.5);
        assert_eq!(progress(90.0), 1.0);
        assert_eq!(progress_label(12.7), "12s / 60s");
    }

    #[test]
    fn classify_follows_playhead() {
        let slot = SlotRef::find("slot-a2").and_then(SlotRef::slot).unwrap();
        assert_eq!(classify(slot, false, 15.0), SlotPhase::Idle);
        assert_eq!(classify(slot, true, 5.0), SlotPhase::Dimmed);
        assert_eq!(classify(slot, true, 12.0), SlotPhase::Active);
        assert_eq!(classify(slot, true, 24.0), SlotPhase::Active);
        assert_eq!(classify(slot, true, 24.1), SlotPhase::Completed);
    }
}
