#![forbid(unsafe_code)]

//! Shared UI chrome: tab bar, status bar, and help overlay.

use ftui_core::geometry::Rect;
use ftui_render::cell::Cell as RenderCell;
use ftui_render::frame::Frame;
use ftui_style::{Style, StyleFlags};
use ftui_text::{Line, Span, Text};
use ftui_widgets::Widget;
use ftui_widgets::block::{Alignment, Block};
use ftui_widgets::borders::{BorderType, Borders};
use ftui_widgets::paragraph::Paragraph;
use storyboard_core::DisplayMode;
use storyboard_core::timeline;

use crate::app::ScreenId;
use crate::screens::centered_rect;
use crate::theme;

/// Global bindings listed at the top of the help overlay.
const GLOBAL_BINDINGS: &[HelpEntry] = &[
    HelpEntry {
        key: "Tab / S-Tab",
        action: "Next / previous screen",
    },
    HelpEntry {
        key: "F1-F8",
        action: "Jump to screen",
    },
    HelpEntry {
        key: "?",
        action: "Toggle this help",
    },
    HelpEntry {
        key: "q / Ctrl+C",
        action: "Quit",
    },
];

/// Width of the key column in the help overlay.
const HELP_KEY_WIDTH: usize = 14;

// ---------------------------------------------------------------------------
// Tab bar
// ---------------------------------------------------------------------------

/// Render the tab bar and return the rectangle of each visible tab.
pub fn render_tab_bar(current: ScreenId, frame: &mut Frame, area: Rect) -> Vec<(Rect, ScreenId)> {
    let mut hits = Vec::with_capacity(ScreenId::ALL.len());

    Paragraph::new("").style(theme::tab_bar()).render(area, frame);

    let mut x = area.x;
    for (i, &id) in ScreenId::ALL.iter().enumerate() {
        let key_label = format!("F{}", i + 1);
        let label_text = id.tab_label();
        // " {key}: {label} "
        let label_width = (1 + key_label.len() + 2 + label_text.len() + 1) as u16;

        if x + label_width > area.right() {
            break; // No room for more tabs
        }

        let tab_area = Rect::new(x, area.y, label_width, 1);
        let is_active = id == current;
        let bg = if is_active {
            theme::darken(theme::screen_accent(id))
        } else {
            theme::bg::SURFACE
        };
        let label_style = if is_active {
            Style::new()
                .bg(bg)
                .fg(theme::fg::PRIMARY)
                .attrs(StyleFlags::BOLD)
        } else {
            Style::new().bg(bg).fg(theme::fg::MUTED)
        };
        let key_style = Style::new().bg(bg).fg(theme::fg::MUTED);
        let pad_style = Style::new().bg(bg);

        let line = Line::from_spans([
            Span::styled(" ", pad_style),
            Span::styled(key_label, key_style),
            Span::styled(": ", key_style),
            Span::styled(label_text, label_style),
            Span::styled(" ", pad_style),
        ]);
        Paragraph::new(Text::from_lines([line])).render(tab_area, frame);
        hits.push((tab_area, id));

        // Separator
        x += label_width + 1;
    }

    hits
}

// ---------------------------------------------------------------------------
// Status bar
// ---------------------------------------------------------------------------

/// Inputs for the status bar.
pub struct StatusBarState<'a> {
    pub current_screen: ScreenId,
    pub screen_title: &'a str,
    pub screen_index: usize,
    pub screen_count: usize,
    pub display_mode: DisplayMode,
    pub playing: bool,
    pub elapsed: f64,
    pub terminal_width: u16,
    pub terminal_height: u16,
}

impl StatusBarState<'_> {
    /// Playback segment, e.g. `"▶ 12s / 60s"` or `"■ stopped"`.
    pub fn playback_label(&self) -> String {
        if self.playing {
            format!("▶ {}", timeline::progress_label(self.elapsed))
        } else {
            "■ stopped".to_string()
        }
    }
}

/// Render the status bar at the bottom of the screen.
///
/// Left: screen title and position. Center: display mode and playback.
/// Right: terminal size and the help hint.
pub fn render_status_bar(state: &StatusBarState<'_>, frame: &mut Frame, area: Rect) {
    Paragraph::new("")
        .style(theme::status_bar())
        .render(area, frame);
    if area.is_empty() {
        return;
    }

    let bg = theme::bg::SURFACE;
    let accent = theme::screen_accent(state.current_screen);
    let sep = Span::styled(" │ ", Style::new().bg(bg).fg(theme::fg::FAINT));

    let left = Line::from_spans([
        Span::styled(
            format!(" {} ", state.screen_title),
            Style::new().bg(bg).fg(accent).attrs(StyleFlags::BOLD),
        ),
        Span::styled(
            format!("{}/{}", state.screen_index + 1, state.screen_count),
            Style::new().bg(bg).fg(theme::fg::MUTED),
        ),
        sep.clone(),
        Span::styled(
            state.display_mode.label(),
            Style::new().bg(bg).fg(theme::fg::SECONDARY),
        ),
        sep,
        Span::styled(
            state.playback_label(),
            Style::new().bg(bg).fg(if state.playing {
                theme::accent::AMBER
            } else {
                theme::fg::MUTED
            }),
        ),
    ]);
    Paragraph::new(Text::from_lines([left])).render(area, frame);

    let right = format!(
        "{}x{}  ? help ",
        state.terminal_width, state.terminal_height
    );
    let right_width = right.len() as u16;
    if area.width > right_width + 40 {
        let right_area = Rect::new(area.right() - right_width, area.y, right_width, 1);
        Paragraph::new(right)
            .style(Style::new().bg(bg).fg(theme::fg::MUTED))
            .render(right_area, frame);
    }
}

// ---------------------------------------------------------------------------
// Help overlay
// ---------------------------------------------------------------------------

/// Per-screen keybinding entry for the help overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpEntry {
    pub key: &'static str,
    pub action: &'static str,
}

fn help_line(entry: &HelpEntry) -> Line {
    Line::from_spans([
        Span::styled(format!("{:<HELP_KEY_WIDTH$}", entry.key), theme::key_hint()),
        Span::styled(entry.action, theme::body()),
    ])
}

/// Render a centered help overlay with global and screen-specific keybindings.
pub fn render_help_overlay(
    current: ScreenId,
    screen_bindings: &[HelpEntry],
    frame: &mut Frame,
    area: Rect,
) {
    let category_style = Style::new().bold().underline().fg(theme::fg::SECONDARY);

    let mut lines = vec![Line::from_spans([Span::styled("Global", category_style)])];
    lines.extend(GLOBAL_BINDINGS.iter().map(help_line));
    if !screen_bindings.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from_spans([Span::styled(
            format!("{} Controls", current.title()),
            category_style,
        )]));
        lines.extend(screen_bindings.iter().map(help_line));
    }

    // Border, side padding, footer.
    let wanted_height = lines.len() as u16 + 4;
    let overlay_width = ((area.width as u32 * 60) / 100).clamp(36, 64) as u16;
    let overlay_area = centered_rect(
        area,
        overlay_width.min(area.width.saturating_sub(2)),
        wanted_height.min(area.height.saturating_sub(2)),
    );
    if overlay_area.is_empty() {
        return;
    }

    frame.buffer.fill(
        overlay_area,
        RenderCell::default().with_bg(theme::bg::OVERLAY),
    );
    let block = Block::new()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .title(" Keyboard Shortcuts ")
        .title_alignment(Alignment::Center)
        .style(theme::help_overlay());
    let inner = block.inner(overlay_area);
    block.render(overlay_area, frame);

    if inner.width < 10 || inner.height < 3 {
        return;
    }

    let content_area = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(1), // leave room for footer
    );
    Paragraph::new(Text::from_lines(lines)).render(content_area, frame);

    let footer = "Press ? or Esc to close";
    let footer_y = inner.bottom().saturating_sub(1);
    let footer_x = inner.x + (inner.width.saturating_sub(footer.len() as u16)) / 2;
    Paragraph::new(footer)
        .style(theme::muted())
        .render(Rect::new(footer_x, footer_y, footer.len() as u16, 1), frame);
}
