#![forbid(unsafe_code)]

//! Palette and shared styles for the storyboard.
//!
//! A single dark palette: slate surfaces, a teal family for the
//! deterministic scheme and a red/amber family for the traditional one.
//!
//! # Spacing
//!
//! | Token | Value |
//! |-------|-------|
//! | `XS` | 1 |
//! | `SM` | 2 |

use ftui_render::cell::PackedRgba;
use ftui_style::{Style, StyleFlags};
use storyboard_core::{Dataset, SlotMode, SlotPhase, SlotStatus};

use crate::app::ScreenId;

/// Background layers, darkest first.
pub mod bg {
    use super::PackedRgba;

    pub const DEEP: PackedRgba = PackedRgba::rgb(2, 6, 23);
    pub const SURFACE: PackedRgba = PackedRgba::rgb(15, 23, 42);
    pub const RAISED: PackedRgba = PackedRgba::rgb(30, 41, 59);
    pub const OVERLAY: PackedRgba = PackedRgba::rgb(17, 24, 39);
}

/// Foreground text colors.
pub mod fg {
    use super::PackedRgba;

    pub const PRIMARY: PackedRgba = PackedRgba::rgb(241, 245, 249);
    pub const SECONDARY: PackedRgba = PackedRgba::rgb(203, 213, 225);
    pub const MUTED: PackedRgba = PackedRgba::rgb(100, 116, 139);
    pub const FAINT: PackedRgba = PackedRgba::rgb(51, 65, 85);
}

pub mod accent {
    use super::PackedRgba;

    pub const TEAL: PackedRgba = PackedRgba::rgb(45, 212, 191);
    pub const CYAN: PackedRgba = PackedRgba::rgb(34, 211, 238);
    pub const EMERALD: PackedRgba = PackedRgba::rgb(52, 211, 153);
    pub const SKY: PackedRgba = PackedRgba::rgb(56, 189, 248);
    pub const VIOLET: PackedRgba = PackedRgba::rgb(167, 139, 250);
    pub const AMBER: PackedRgba = PackedRgba::rgb(251, 191, 36);
    pub const ORANGE: PackedRgba = PackedRgba::rgb(251, 146, 60);
    pub const RED: PackedRgba = PackedRgba::rgb(248, 113, 113);
}

pub mod spacing {
    pub const XS: u16 = 1;
    pub const SM: u16 = 2;
}

// ---------------------------------------------------------------------------
// Domain colors
// ---------------------------------------------------------------------------

pub const fn screen_accent(id: ScreenId) -> PackedRgba {
    match id {
        ScreenId::Comparison => accent::TEAL,
        ScreenId::Impact => accent::EMERALD,
        ScreenId::Architecture => accent::SKY,
        ScreenId::Markets => accent::RED,
        ScreenId::UseCases => accent::ORANGE,
        ScreenId::Technical => accent::CYAN,
        ScreenId::Faq => accent::VIOLET,
        ScreenId::Roadmap => accent::AMBER,
    }
}

pub const fn dataset_accent(dataset: Dataset) -> PackedRgba {
    match dataset {
        Dataset::Deterministic => accent::TEAL,
        Dataset::Traditional => accent::RED,
    }
}

pub const fn status_color(status: SlotStatus) -> PackedRgba {
    match status {
        SlotStatus::Reserved => accent::CYAN,
        SlotStatus::Executing => accent::TEAL,
        SlotStatus::Confirmed => accent::EMERALD,
        SlotStatus::Uncertain => accent::AMBER,
        SlotStatus::Failed => accent::RED,
    }
}

pub const fn mode_color(mode: SlotMode) -> PackedRgba {
    match mode {
        SlotMode::Aot => accent::SKY,
        SlotMode::Jit => accent::VIOLET,
    }
}

/// Fill color for a slot block under the current playhead.
pub fn slot_block_bg(status: SlotStatus, phase: SlotPhase) -> PackedRgba {
    match phase {
        SlotPhase::Dimmed => bg::RAISED,
        SlotPhase::Completed => darken(status_color(status)),
        SlotPhase::Idle | SlotPhase::Active => status_color(status),
    }
}

pub fn slot_block_style(status: SlotStatus, phase: SlotPhase, selected: bool) -> Style {
    let fill = slot_block_bg(status, phase);
    let text = match phase {
        SlotPhase::Dimmed => fg::MUTED,
        _ => bg::DEEP,
    };
    let mut style = Style::new().bg(fill).fg(text);
    if phase == SlotPhase::Active || selected {
        style = style.attrs(StyleFlags::BOLD);
    }
    if selected {
        style = style.underline();
    }
    style
}

/// Halve each channel.
pub fn darken(color: PackedRgba) -> PackedRgba {
    PackedRgba::rgb(color.r() / 2, color.g() / 2, color.b() / 2)
}

// ---------------------------------------------------------------------------
// Semantic styles
// ---------------------------------------------------------------------------

pub fn title() -> Style {
    Style::new().fg(fg::PRIMARY).attrs(StyleFlags::BOLD)
}

pub fn eyebrow(accent: PackedRgba) -> Style {
    Style::new().fg(accent).attrs(StyleFlags::BOLD)
}

pub fn body() -> Style {
    Style::new().fg(fg::SECONDARY)
}

pub fn muted() -> Style {
    Style::new().fg(fg::MUTED)
}

pub fn key_hint() -> Style {
    Style::new().fg(accent::CYAN).attrs(StyleFlags::BOLD)
}

pub fn tab_bar() -> Style {
    Style::new().bg(bg::SURFACE).fg(fg::SECONDARY)
}

pub fn status_bar() -> Style {
    Style::new().bg(bg::SURFACE).fg(fg::MUTED)
}

pub fn content_border() -> Style {
    Style::new().fg(fg::MUTED)
}

pub fn help_overlay() -> Style {
    Style::new().bg(bg::OVERLAY).fg(fg::PRIMARY)
}
