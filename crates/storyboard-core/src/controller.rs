#![forbid(unsafe_code)]

//! View controller: display mode, selection, and playback.
//!
//! [`ViewState::update`] is the only place state changes. It returns an
//! [`Effect`] describing what the host must do with the playback timer; the
//! reducer itself never schedules anything. At most one timer is ever
//! requested, and every transition to "not playing" both cancels it and
//! rewinds the playhead to zero (there is no resume).
//!
//! Elapsed time is stored as a whole number of ticks so that the end of the
//! axis is reached after exactly `AXIS_LENGTH * TICKS_PER_SECOND` ticks.
//!
//! # Diagnostic Logging
//!
//! - `controller::update` span around every transition
//! - `debug!` on mode, selection, and playback changes
//! - `trace!` on each playback tick
//!
//! Enable with: `STORYBOARD_LOG=storyboard_core::controller=debug`

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};

use crate::dataset::Dataset;
use crate::slot::{SlotRecord, SlotRef};
use crate::timeline::{self, AXIS_LENGTH, SlotPhase};
use crate::{Error, Result};

/// Wall-clock cadence of the playback timer.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
/// Simulated seconds per tick is `1 / TICKS_PER_SECOND` (0.1 s).
pub const TICKS_PER_SECOND: u32 = 10;
/// Tick count at which playback auto-stops.
pub const TICKS_PER_RUN: u32 = AXIS_LENGTH as u32 * TICKS_PER_SECOND;

/// Which dataset(s) the comparison view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Deterministic dataset only.
    Deterministic,
    /// Traditional dataset only.
    Traditional,
    /// Both datasets side by side.
    #[default]
    Split,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 3] = [
        DisplayMode::Split,
        DisplayMode::Deterministic,
        DisplayMode::Traditional,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            DisplayMode::Deterministic => "Deterministic Only",
            DisplayMode::Traditional => "Traditional Only",
            DisplayMode::Split => "Split View",
        }
    }

    /// Datasets visible in this mode, in display order.
    pub const fn datasets(self) -> &'static [Dataset] {
        match self {
            DisplayMode::Deterministic => &[Dataset::Deterministic],
            DisplayMode::Traditional => &[Dataset::Traditional],
            DisplayMode::Split => &[Dataset::Deterministic, Dataset::Traditional],
        }
    }

    pub fn shows(self, dataset: Dataset) -> bool {
        self.datasets().contains(&dataset)
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DisplayMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "split" | "both" => Ok(DisplayMode::Split),
            "deterministic" | "det" | "a" => Ok(DisplayMode::Deterministic),
            "traditional" | "trad" | "b" => Ok(DisplayMode::Traditional),
            _ => Err(Error::UnknownDisplayMode(s.to_string())),
        }
    }
}

/// Inputs to the view controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SetDisplayMode(DisplayMode),
    SelectSlot(SlotRef),
    CloseDetail,
    TogglePlayback,
    /// One period of the playback timer.
    Tick,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Effect {
    #[default]
    None,
    /// Start the periodic playback timer.
    StartTimer { interval: Duration },
    /// Cancel the playback timer.
    CancelTimer,
}

/// Transient UI state of the comparison view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    display_mode: DisplayMode,
    selected: Option<SlotRef>,
    playing: bool,
    ticks: u32,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_display_mode(display_mode: DisplayMode) -> Self {
        Self {
            display_mode,
            ..Self::default()
        }
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn selected(&self) -> Option<SlotRef> {
        self.selected
    }

    pub fn selected_slot(&self) -> Option<&'static SlotRecord> {
        self.selected.and_then(SlotRef::slot)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Simulated seconds since playback started.
    pub fn elapsed(&self) -> f64 {
        f64::from(self.ticks) / f64::from(TICKS_PER_SECOND)
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Visual phase of a slot under the current playhead.
    pub fn slot_phase(&self, slot: &SlotRecord) -> SlotPhase {
        timeline::classify(slot, self.playing, self.elapsed())
    }

    /// Apply one action and report the timer effect it requires.
    #[instrument(name = "controller::update", level = "trace", skip(self), fields(playing = self.playing))]
    pub fn update(&mut self, action: Action) -> Effect {
        match action {
            Action::SetDisplayMode(mode) => {
                if mode != self.display_mode {
                    debug!(prev = ?self.display_mode, new = ?mode, "Display mode changed");
                }
                self.display_mode = mode;
                Effect::None
            }
            Action::SelectSlot(slot_ref) => {
                if slot_ref.slot().is_none() {
                    warn!(?slot_ref, "Ignoring selection of unknown slot");
                    return Effect::None;
                }
                debug!(prev = ?self.selected, new = ?slot_ref, "Slot selected");
                self.selected = Some(slot_ref);
                Effect::None
            }
            Action::CloseDetail => {
                if self.selected.take().is_some() {
                    debug!("Detail overlay closed");
                }
                Effect::None
            }
            Action::TogglePlayback => {
                if self.playing {
                    debug!(ticks = self.ticks, "Playback paused");
                    self.stop()
                } else {
                    debug!("Playback started");
                    self.ticks = 0;
                    self.playing = true;
                    Effect::StartTimer {
                        interval: TICK_INTERVAL,
                    }
                }
            }
            Action::Tick => {
                if !self.playing {
                    trace!("Tick while stopped ignored");
                    return Effect::None;
                }
                let next = self.ticks + 1;
                if next >= TICKS_PER_RUN {
                    debug!(ticks = next, "Playback reached end of axis");
                    return self.stop();
                }
                self.ticks = next;
                trace!(ticks = self.ticks, elapsed = self.elapsed(), "Playback tick");
                Effect::None
            }
        }
    }

    fn stop(&mut self) -> Effect {
        self.playing = false;
        self.ticks = 0;
        Effect::CancelTimer
    }
}
