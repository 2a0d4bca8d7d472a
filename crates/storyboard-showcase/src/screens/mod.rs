#![forbid(unsafe_code)]

//! Screen implementations for the storyboard.

pub mod architecture;
pub mod comparison;
pub mod faq;
pub mod impact;
pub mod markets;
pub mod roadmap;
pub mod technical;
pub mod use_cases;

use ftui_core::event::Event;
use ftui_core::geometry::Rect;
use ftui_layout::{Constraint, Flex};
use ftui_render::cell::PackedRgba;
use ftui_render::frame::Frame;
use ftui_runtime::Cmd;
use ftui_style::Style;
use ftui_text::{Line, Span, Text};
use ftui_widgets::Widget;
use ftui_widgets::paragraph::Paragraph;
use storyboard_core::content::SectionHeader;

pub use crate::chrome::HelpEntry;
use crate::theme;

/// Rows taken by [`render_section_header`]: eyebrow, title, lede.
pub const SECTION_HEADER_HEIGHT: u16 = 3;

/// Trait for storyboard screens.
///
/// Each screen manages its own state, handles its own events, and renders
/// into the content area provided by the main layout.
pub trait Screen {
    /// Message type for this screen (will be wrapped by the top-level Msg enum).
    type Message: Send + 'static;

    /// Handle a terminal event, returning a command.
    fn update(&mut self, event: &Event) -> Cmd<Self::Message>;

    /// Render the screen into the given area.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Return keybindings specific to this screen for the help overlay.
    fn keybindings(&self) -> Vec<HelpEntry> {
        vec![]
    }
}

/// Render an eyebrow / title / lede block into the top rows of `area`.
pub(crate) fn render_section_header(
    header: &SectionHeader,
    accent: PackedRgba,
    frame: &mut Frame,
    area: Rect,
) {
    if area.is_empty() {
        return;
    }
    let text = Text::from_lines([
        Line::from_spans([Span::styled(
            header.eyebrow.to_uppercase(),
            theme::eyebrow(accent),
        )]),
        Line::from_spans([Span::styled(header.title, theme::title())]),
        Line::from_spans([Span::styled(header.lede, theme::muted())]),
    ]);
    Paragraph::new(text).render(area, frame);
}

/// Split `area` into `count` cells laid out `columns` per row.
///
/// Rows share the height evenly; the last row may be partly empty.
pub(crate) fn grid_cells(area: Rect, count: usize, columns: usize) -> Vec<Rect> {
    if count == 0 || area.is_empty() {
        return Vec::new();
    }
    let columns = columns.clamp(1, count);
    let rows = count.div_ceil(columns);
    let row_areas = Flex::vertical()
        .constraints((0..rows).map(|_| Constraint::Ratio(1, rows as u32)))
        .split(area);
    let mut cells = Vec::with_capacity(rows * columns);
    for &row in row_areas.iter() {
        let cols = Flex::horizontal()
            .gap(theme::spacing::XS)
            .constraints((0..columns).map(|_| Constraint::Ratio(1, columns as u32)))
            .split(row);
        cells.extend(cols.iter().copied());
    }
    cells.truncate(count);
    cells
}

/// Optional lead paragraph, a blank line, then one marked line per item.
pub(crate) fn bullet_text(
    lead: Option<&'static str>,
    items: &[&'static str],
    marker: &'static str,
    marker_fg: PackedRgba,
) -> Text {
    let mut lines = Vec::with_capacity(items.len() + 2);
    if let Some(lead) = lead {
        lines.push(Line::from_spans([Span::styled(lead, theme::body())]));
        lines.push(Line::from(""));
    }
    lines.extend(items.iter().map(|&item| {
        Line::from_spans([
            Span::styled(marker, Style::new().fg(marker_fg)),
            Span::styled(item, theme::body()),
        ])
    }));
    Text::from_lines(lines)
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
