#![forbid(unsafe_code)]

//! Core model for the slot storyboard.
//!
//! Everything the storyboard shows is derived from two immutable demo
//! datasets (see [`dataset`]). The only interactive logic is the view
//! controller in [`controller`]: a reducer over [`controller::ViewState`]
//! that returns an [`controller::Effect`] for the host to fulfil (start or
//! cancel the playback timer). Timeline geometry lives in [`timeline`] and
//! is pure arithmetic.
//!
//! Nothing in this crate touches a terminal; the showcase crate renders it.

use std::fmt;

pub mod content;
pub mod controller;
pub mod dataset;
pub mod detail;
pub mod slot;
pub mod timeline;

pub use controller::{Action, DisplayMode, Effect, ViewState};
pub use dataset::Dataset;
pub use slot::{Phase, SlotMode, SlotRecord, SlotRef, SlotStatus};
pub use timeline::{GridSpan, SlotPhase};

// --- Errors ---------------------------------------------------------------

/// Errors surfaced by the storyboard core.
#[derive(Debug)]
pub enum Error {
    /// A display mode name that does not match any [`DisplayMode`].
    UnknownDisplayMode(String),
    /// JSON encoding failure while exporting datasets.
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDisplayMode(name) => write!(
                f,
                "unknown display mode '{name}' (expected split, deterministic, or traditional)"
            ),
            Self::Json(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::UnknownDisplayMode(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Standard result type for storyboard APIs.
pub type Result<T> = std::result::Result<T, Error>;
