#![forbid(unsafe_code)]

//! Execution comparison screen: animated slot timelines for both schemes.
//!
//! The screen owns a [`ViewState`] and fulfils its effects by recording the
//! requested timer interval; the app turns that into an `Every`
//! subscription. Layout from the last frame is cached so mouse clicks can be
//! mapped back to slots and controls.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use ftui_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ftui_core::geometry::Rect;
use ftui_layout::{Constraint, Flex};
use ftui_render::cell::Cell as RenderCell;
use ftui_render::frame::Frame;
use ftui_runtime::Cmd;
use ftui_style::Style;
use ftui_text::{Line, Span, Text, WrapMode};
use ftui_widgets::Widget;
use ftui_widgets::block::Block;
use ftui_widgets::borders::{BorderType, Borders};
use ftui_widgets::paragraph::Paragraph;
use ftui_widgets::progress::ProgressBar;
use storyboard_core::content;
use storyboard_core::detail::SlotDetail;
use storyboard_core::timeline::{self, AXIS_LENGTH, AXIS_TICKS};
use storyboard_core::{Action, Dataset, DisplayMode, Effect, SlotRef, ViewState};
use tracing::{debug, instrument};

use super::{HelpEntry, SECTION_HEADER_HEIGHT, Screen, centered_rect, render_section_header};
use crate::theme;

/// Content height at which the hero block is shown above the comparison.
const HERO_MIN_HEIGHT: u16 = 40;
/// Content width at which two timelines sit side by side.
pub const SIDE_BY_SIDE_MIN_WIDTH: u16 = 120;
/// Rows per slot block: label, caption, status.
const TRACK_ROWS: u16 = 3;
const DETAIL_MAX_WIDTH: u16 = 64;
const DETAIL_KEY_WIDTH: usize = 14;
const CLOSE_LABEL: &str = "[x]";

/// Slots shown under `mode`, in panel order.
pub fn visible_slots(mode: DisplayMode) -> Vec<SlotRef> {
    mode.datasets()
        .iter()
        .flat_map(|&dataset| (0..dataset.slots().len()).map(move |i| SlotRef::new(dataset, i)))
        .collect()
}

/// The slot `step` places away from `slot` within its dataset, wrapping.
fn neighbour(slot: SlotRef, step: isize) -> SlotRef {
    let len = slot.dataset.slots().len();
    if len == 0 {
        return slot;
    }
    let index = (slot.index as isize + step).rem_euclid(len as isize) as usize;
    SlotRef::new(slot.dataset, index)
}

/// Axis row: a rule with `0s`, `30s`, `60s` at the left, middle, and right.
pub(crate) fn axis_line(width: u16) -> String {
    let w = usize::from(width);
    let mut row = vec!['─'; w];
    let axis = AXIS_LENGTH as usize;
    // First column not yet covered by a label.
    let mut free = 0;
    for tick in AXIS_TICKS {
        let tick = usize::from(tick);
        let label = format!("{tick}s");
        let len = label.len();
        if len > w {
            continue;
        }
        let pos = tick * (w - 1) / axis;
        let start = pos.saturating_sub((len - 1) * tick / axis).min(w - len);
        if start < free {
            continue;
        }
        for (i, ch) in label.chars().enumerate() {
            row[start + i] = ch;
        }
        free = start + len;
    }
    row.into_iter().collect()
}

pub struct ComparisonScreen {
    state: ViewState,
    /// Interval of the running playback timer, if any.
    timer: Option<Duration>,
    /// Keyboard focus, as an index into [`visible_slots`].
    focus: usize,
    slot_hits: RefCell<Vec<(Rect, SlotRef)>>,
    mode_hits: RefCell<Vec<(Rect, DisplayMode)>>,
    play_hit: Cell<Rect>,
    close_hit: Cell<Rect>,
    overlay_area: Cell<Rect>,
}

impl Default for ComparisonScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonScreen {
    pub fn new() -> Self {
        Self::with_display_mode(DisplayMode::default())
    }

    pub fn with_display_mode(mode: DisplayMode) -> Self {
        Self {
            state: ViewState::with_display_mode(mode),
            timer: None,
            focus: 0,
            slot_hits: RefCell::new(Vec::new()),
            mode_hits: RefCell::new(Vec::new()),
            play_hit: Cell::new(Rect::default()),
            close_hit: Cell::new(Rect::default()),
            overlay_area: Cell::new(Rect::default()),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Interval of the playback timer while playback runs.
    pub fn timer_interval(&self) -> Option<Duration> {
        self.timer
    }

    /// Slot under keyboard focus.
    pub fn focused(&self) -> Option<SlotRef> {
        visible_slots(self.state.display_mode())
            .get(self.focus)
            .copied()
    }

    /// Run `action` through the controller and fulfil the resulting effect.
    pub fn apply(&mut self, action: Action) -> Effect {
        let focused = self.focused();
        let effect = self.state.update(action);
        match effect {
            Effect::StartTimer { interval } => self.timer = Some(interval),
            Effect::CancelTimer => self.timer = None,
            Effect::None => {}
        }
        if let Action::SetDisplayMode(_) = action {
            self.refocus(focused);
        }
        effect
    }

    /// One period of the playback timer.
    pub fn tick(&mut self) -> Effect {
        self.apply(Action::Tick)
    }

    /// Rectangle of `slot` in the last rendered frame.
    pub fn slot_rect(&self, slot: SlotRef) -> Option<Rect> {
        self.slot_hits
            .borrow()
            .iter()
            .find(|(_, r)| *r == slot)
            .map(|&(rect, _)| rect)
    }

    /// Rectangle of the display-mode button for `mode` in the last frame.
    pub fn mode_button(&self, mode: DisplayMode) -> Option<Rect> {
        self.mode_hits
            .borrow()
            .iter()
            .find(|(_, m)| *m == mode)
            .map(|&(rect, _)| rect)
    }

    pub fn play_button(&self) -> Rect {
        self.play_hit.get()
    }

    /// Rectangle of the overlay's `[x]` in the last frame; empty when closed.
    pub fn close_button(&self) -> Rect {
        self.close_hit.get()
    }

    fn detail_open(&self) -> bool {
        self.state.selected().is_some()
    }

    /// Keep focus on `previous` if it is still visible, else clamp.
    fn refocus(&mut self, previous: Option<SlotRef>) {
        let visible = visible_slots(self.state.display_mode());
        self.focus = previous
            .and_then(|slot| visible.iter().position(|&s| s == slot))
            .unwrap_or_else(|| self.focus.min(visible.len().saturating_sub(1)));
    }

    fn move_focus(&mut self, step: isize) {
        let len = visible_slots(self.state.display_mode()).len();
        if len == 0 {
            return;
        }
        self.focus = (self.focus as isize + step).rem_euclid(len as isize) as usize;
    }

    fn select(&mut self, slot: SlotRef) {
        self.apply(Action::SelectSlot(slot));
        if let Some(pos) = visible_slots(self.state.display_mode())
            .iter()
            .position(|&s| s == slot)
        {
            self.focus = pos;
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('1' | 's') => {
                self.apply(Action::SetDisplayMode(DisplayMode::Split));
            }
            KeyCode::Char('2' | 'd') => {
                self.apply(Action::SetDisplayMode(DisplayMode::Deterministic));
            }
            KeyCode::Char('3' | 't') => {
                self.apply(Action::SetDisplayMode(DisplayMode::Traditional));
            }
            KeyCode::Char(' ' | 'p') => {
                self.apply(Action::TogglePlayback);
            }
            KeyCode::Left | KeyCode::Char('h') => match self.state.selected() {
                Some(selected) => self.select(neighbour(selected, -1)),
                None => self.move_focus(-1),
            },
            KeyCode::Right | KeyCode::Char('l') => match self.state.selected() {
                Some(selected) => self.select(neighbour(selected, 1)),
                None => self.move_focus(1),
            },
            KeyCode::Enter => {
                if let Some(slot) = self.focused() {
                    self.select(slot);
                }
            }
            KeyCode::Escape | KeyCode::Char('x') => {
                self.apply(Action::CloseDetail);
            }
            _ => {}
        }
    }

    fn handle_click(&mut self, x: u16, y: u16) {
        if self.detail_open() {
            if self.close_hit.get().contains(x, y) || !self.overlay_area.get().contains(x, y) {
                debug!(x, y, "Detail overlay dismissed by click");
                self.apply(Action::CloseDetail);
            }
            return;
        }

        let mode = self
            .mode_hits
            .borrow()
            .iter()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|&(_, mode)| mode);
        if let Some(mode) = mode {
            self.apply(Action::SetDisplayMode(mode));
            return;
        }

        if self.play_hit.get().contains(x, y) {
            self.apply(Action::TogglePlayback);
            return;
        }

        // Later blocks are drawn on top.
        let slot = self
            .slot_hits
            .borrow()
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|&(_, slot)| slot);
        if let Some(slot) = slot {
            debug!(?slot, x, y, "Slot clicked");
            self.select(slot);
        }
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    fn render_controls(&self, frame: &mut Frame, area: Rect) {
        let mut hits = self.mode_hits.borrow_mut();
        let mut x = area.x;
        for (i, &mode) in DisplayMode::ALL.iter().enumerate() {
            let label = format!(" {} {} ", i + 1, mode.label());
            let width = label.len() as u16;
            if x + width > area.right() {
                return;
            }
            let style = if mode == self.state.display_mode() {
                Style::new()
                    .bg(theme::accent::TEAL)
                    .fg(theme::bg::DEEP)
                    .bold()
            } else {
                Style::new()
                    .bg(theme::bg::RAISED)
                    .fg(theme::fg::SECONDARY)
            };
            let rect = Rect::new(x, area.y, width, 1);
            Paragraph::new(label).style(style).render(rect, frame);
            hits.push((rect, mode));
            x += width + 1;
        }

        let (label, style) = if self.state.is_playing() {
            (
                " Space Pause ",
                Style::new()
                    .bg(theme::accent::AMBER)
                    .fg(theme::bg::DEEP)
                    .bold(),
            )
        } else {
            (
                " Space Play ",
                Style::new()
                    .bg(theme::accent::EMERALD)
                    .fg(theme::bg::DEEP)
                    .bold(),
            )
        };
        let width = label.len() as u16;
        x += 1;
        if x + width > area.right() {
            return;
        }
        let rect = Rect::new(x, area.y, width, 1);
        Paragraph::new(label).style(style).render(rect, frame);
        self.play_hit.set(rect);
        x += width + 2;

        let hint = "←/→ focus  Enter details";
        let hint_width = hint.chars().count() as u16;
        if x + hint_width <= area.right() {
            Paragraph::new(hint)
                .style(theme::muted())
                .render(Rect::new(x, area.y, hint_width, 1), frame);
        }
    }

    fn render_progress(&self, frame: &mut Frame, area: Rect) {
        let elapsed = self.state.elapsed();
        let label = timeline::progress_label(elapsed);
        ProgressBar::new()
            .ratio(timeline::progress(elapsed))
            .label(&label)
            .style(Style::new().bg(theme::bg::RAISED).fg(theme::fg::SECONDARY))
            .gauge_style(Style::new().bg(theme::accent::TEAL).fg(theme::bg::DEEP))
            .render(area, frame);
    }

    fn render_panels(&self, frame: &mut Frame, area: Rect) {
        let datasets = self.state.display_mode().datasets();
        let areas = match datasets.len() {
            0 => return,
            1 => vec![area],
            _ if area.width >= SIDE_BY_SIDE_MIN_WIDTH => Flex::horizontal()
                .gap(theme::spacing::XS)
                .constraints([Constraint::Percentage(50.0), Constraint::Percentage(50.0)])
                .split(area),
            _ => Flex::vertical()
                .constraints([Constraint::Percentage(50.0), Constraint::Percentage(50.0)])
                .split(area),
        };
        for (&dataset, &panel) in datasets.iter().zip(areas.iter()) {
            self.render_panel(dataset, frame, panel);
        }
    }

    fn render_panel(&self, dataset: Dataset, frame: &mut Frame, area: Rect) {
        let accent = theme::dataset_accent(dataset);
        let title = format!(" {} · {} ", dataset.title(), dataset.badge());
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(&title)
            .style(Style::new().fg(accent));
        let inner = block.inner(area);
        block.render(area, frame);
        if inner.is_empty() {
            return;
        }

        let rows = Flex::vertical()
            .constraints([
                Constraint::Fixed(1),
                Constraint::Min(1),
                Constraint::Fixed(1),
            ])
            .split(inner);
        let axis = rows[0];
        let track = Rect::new(
            rows[1].x,
            rows[1].y,
            rows[1].width,
            rows[1].height.min(TRACK_ROWS),
        );

        Paragraph::new(axis_line(axis.width))
            .style(Style::new().fg(theme::fg::FAINT))
            .render(axis, frame);

        if !track.is_empty() {
            let mut hits = self.slot_hits.borrow_mut();
            let focused = self.focused();
            for (index, slot) in dataset.slots().iter().enumerate() {
                let slot_ref = SlotRef::new(dataset, index);
                let (offset, width) = timeline::span_for(slot).project(track.width);
                let rect = Rect::new(track.x + offset, track.y, width, track.height);
                let highlighted =
                    self.state.selected() == Some(slot_ref) || focused == Some(slot_ref);
                let style =
                    theme::slot_block_style(slot.status, self.state.slot_phase(slot), highlighted);
                let text = Text::from_lines([
                    Line::from(slot.label),
                    Line::from(slot.caption()),
                    Line::from(slot.status.label()),
                ]);
                Paragraph::new(text).style(style).render(rect, frame);
                hits.push((rect, slot_ref));
            }
        }

        if self.state.is_playing() {
            self.render_playhead(frame, axis, track.bottom());
        }

        self.render_summary(dataset, frame, rows[2]);
    }

    /// Draw the playhead cursor from the axis row down to `bottom`.
    fn render_playhead(&self, frame: &mut Frame, axis: Rect, bottom: u16) {
        if axis.is_empty() {
            return;
        }
        let (offset, _) = timeline::span(self.state.elapsed(), 0.0).project(axis.width);
        let x = axis.x + offset;
        for y in axis.y..bottom {
            let bg = frame
                .buffer
                .get(x, y)
                .map(|cell| cell.bg)
                .unwrap_or(theme::bg::DEEP);
            frame.buffer.set(
                x,
                y,
                RenderCell::from_char('│')
                    .with_fg(theme::accent::AMBER)
                    .with_bg(bg),
            );
        }
    }

    fn render_summary(&self, dataset: Dataset, frame: &mut Frame, area: Rect) {
        let summary = dataset.summary();
        let sep = Span::styled("  ·  ", theme::muted());
        let line = Line::from_spans([
            Span::styled(
                format!("{}% success", summary.success_pct),
                Style::new().fg(theme::dataset_accent(dataset)).bold(),
            ),
            sep.clone(),
            Span::styled(format!("avg {}", summary.avg_latency), theme::body()),
            sep,
            Span::styled(format!("{} retries", summary.retries), theme::body()),
        ]);
        Paragraph::new(Text::from_lines([line])).render(area, frame);
    }

    fn render_detail(&self, selected: SlotRef, frame: &mut Frame, area: Rect) {
        let Some(slot) = selected.slot() else {
            return;
        };
        let detail = SlotDetail::for_slot(slot);

        let width = area.width.saturating_sub(4).min(DETAIL_MAX_WIDTH);
        let text_width = usize::from(width.saturating_sub(4)).max(1);
        let wrapped_rows = |s: &str| s.chars().count().div_ceil(text_width).max(1);

        let mut lines = vec![Line::from_spans([
            Span::styled(
                selected.dataset.short_label(),
                Style::new()
                    .fg(theme::dataset_accent(selected.dataset))
                    .bold(),
            ),
            Span::styled(" · ", theme::muted()),
            Span::styled(
                slot.mode.long_label(),
                Style::new().fg(theme::mode_color(slot.mode)),
            ),
            Span::styled(" · ", theme::muted()),
            Span::styled(
                slot.status.label(),
                Style::new().fg(theme::status_color(slot.status)).bold(),
            ),
        ])];
        let mut rows = 1;
        if let Some(description) = detail.description {
            lines.push(Line::from(""));
            lines.push(Line::from_spans([Span::styled(description, theme::body())]));
            rows += 1 + wrapped_rows(description);
        }
        lines.push(Line::from(""));
        rows += 1;
        for field in &detail.fields {
            lines.push(Line::from_spans([
                Span::styled(format!("{:<DETAIL_KEY_WIDTH$}", field.label), theme::muted()),
                Span::styled(field.value.clone(), theme::title()),
            ]));
            rows += 1;
        }
        for note in &detail.notes {
            lines.push(Line::from(""));
            lines.push(Line::from_spans([Span::styled(
                note.heading,
                theme::eyebrow(theme::accent::CYAN),
            )]));
            lines.push(Line::from_spans([Span::styled(note.text, theme::body())]));
            rows += 2 + wrapped_rows(note.text);
        }

        // Border, footer, and a spare row for word-wrap slack.
        let height = (rows as u16).saturating_add(4);
        let overlay = centered_rect(area, width, height.min(area.height.saturating_sub(2)));
        self.overlay_area.set(overlay);
        if overlay.is_empty() {
            return;
        }

        frame
            .buffer
            .fill(overlay, RenderCell::default().with_bg(theme::bg::OVERLAY));
        let title = format!(" {} ", detail.title);
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(&title)
            .style(theme::help_overlay().fg(theme::dataset_accent(selected.dataset)));
        let inner = block.inner(overlay);
        block.render(overlay, frame);

        let close_width = CLOSE_LABEL.len() as u16;
        if overlay.width >= close_width + 4 {
            let close = Rect::new(overlay.right() - close_width - 1, overlay.y, close_width, 1);
            Paragraph::new(CLOSE_LABEL)
                .style(theme::key_hint().bg(theme::bg::OVERLAY))
                .render(close, frame);
            self.close_hit.set(close);
        }

        if inner.width < 3 || inner.height < 2 {
            return;
        }
        let body = Rect::new(
            inner.x + 1,
            inner.y,
            inner.width - 2,
            inner.height - 1, // footer
        );
        Paragraph::new(Text::from_lines(lines))
            .wrap(WrapMode::Word)
            .style(theme::help_overlay())
            .render(body, frame);

        let footer = "Esc close  ←/→ neighbours";
        Paragraph::new(footer)
            .style(theme::muted().bg(theme::bg::OVERLAY))
            .render(Rect::new(inner.x + 1, inner.bottom() - 1, inner.width - 2, 1), frame);
    }
}

impl Screen for ComparisonScreen {
    type Message = ();

    #[instrument(name = "comparison::update", skip_all)]
    fn update(&mut self, event: &Event) -> Cmd<Self::Message> {
        match event {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => self.handle_key(*code),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                x,
                y,
                ..
            }) => self.handle_click(*x, *y),
            _ => {}
        }
        Cmd::none()
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        self.slot_hits.borrow_mut().clear();
        self.mode_hits.borrow_mut().clear();
        self.play_hit.set(Rect::default());
        self.close_hit.set(Rect::default());
        self.overlay_area.set(Rect::default());
        if area.is_empty() {
            return;
        }

        let hero_height = if area.height >= HERO_MIN_HEIGHT {
            SECTION_HEADER_HEIGHT + 1
        } else {
            0
        };
        let rows = Flex::vertical()
            .constraints([
                Constraint::Fixed(hero_height),
                Constraint::Fixed(SECTION_HEADER_HEIGHT),
                Constraint::Fixed(1),
                Constraint::Fixed(1),
                Constraint::Min(1),
            ])
            .split(area);

        if hero_height > 0 {
            render_section_header(&content::HERO, theme::accent::CYAN, frame, rows[0]);
        }
        render_section_header(&content::COMPARISON, theme::accent::TEAL, frame, rows[1]);
        self.render_controls(frame, rows[2]);
        self.render_progress(frame, rows[3]);
        self.render_panels(frame, rows[4]);

        if let Some(selected) = self.state.selected() {
            self.render_detail(selected, frame, area);
        }
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        vec![
            HelpEntry {
                key: "1 / s",
                action: "Split view",
            },
            HelpEntry {
                key: "2 / d",
                action: "Deterministic only",
            },
            HelpEntry {
                key: "3 / t",
                action: "Traditional only",
            },
            HelpEntry {
                key: "Space / p",
                action: "Play / pause timeline",
            },
            HelpEntry {
                key: "←/→  h/l",
                action: "Move focus (neighbour when open)",
            },
            HelpEntry {
                key: "Enter",
                action: "Open slot details",
            },
            HelpEntry {
                key: "Esc / x",
                action: "Close details",
            },
            HelpEntry {
                key: "Click",
                action: "Select slot / close via [x]",
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ftui_render::grapheme_pool::GraphemePool;
    use storyboard_core::controller::TICK_INTERVAL;

    fn render(screen: &ComparisonScreen, width: u16, height: u16) {
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(width, height, &mut pool);
        screen.view(&mut frame, Rect::new(0, 0, width, height));
    }

    fn center(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    fn click(screen: &mut ComparisonScreen, (x, y): (u16, u16)) {
        screen.update(&Event::Mouse(MouseEvent::new(
            MouseEventKind::Down(MouseButton::Left),
            x,
            y,
        )));
    }

    fn key(screen: &mut ComparisonScreen, code: KeyCode) {
        screen.update(&Event::Key(KeyEvent::new(code)));
    }

    #[test]
    fn axis_line_places_tick_labels() {
        let line = axis_line(40);
        assert_eq!(line.chars().count(), 40);
        assert!(line.starts_with("0s"));
        assert!(line.ends_with("60s"));
        assert!(line.contains("30s"));
    }

    #[test]
    fn axis_line_survives_narrow_widths() {
        assert_eq!(axis_line(0), "");
        assert_eq!(axis_line(2).chars().count(), 2);
    }

    #[test]
    fn axis_end_label_touches_last_column() {
        for width in [10u16, 25, 40, 97, 200] {
            let line = axis_line(width);
            assert_eq!(line.chars().count(), usize::from(width));
            assert!(line.ends_with("60s"), "width {width}: {line:?}");
        }
        assert_eq!(axis_line(10), "0s─30s─60s");
    }

    #[test]
    fn colliding_axis_labels_are_dropped() {
        assert_eq!(axis_line(6), "0s─60s");
        assert_eq!(axis_line(3), "0s─");
    }

    #[test]
    fn visible_slots_follow_mode() {
        let det = Dataset::Deterministic.slots().len();
        let trad = Dataset::Traditional.slots().len();
        assert_eq!(visible_slots(DisplayMode::Split).len(), det + trad);
        assert_eq!(visible_slots(DisplayMode::Deterministic).len(), det);
        assert!(
            visible_slots(DisplayMode::Traditional)
                .iter()
                .all(|s| s.dataset == Dataset::Traditional)
        );
    }

    #[test]
    fn neighbour_wraps_within_dataset() {
        let last = SlotRef::new(
            Dataset::Deterministic,
            Dataset::Deterministic.slots().len() - 1,
        );
        assert_eq!(neighbour(last, 1), SlotRef::new(Dataset::Deterministic, 0));
        assert_eq!(neighbour(SlotRef::new(Dataset::Deterministic, 0), -1), last);
    }

    #[test]
    fn playback_effects_drive_timer() {
        let mut screen = ComparisonScreen::new();
        assert_eq!(screen.timer_interval(), None);
        key(&mut screen, KeyCode::Char(' '));
        assert_eq!(screen.timer_interval(), Some(TICK_INTERVAL));
        key(&mut screen, KeyCode::Char('p'));
        assert_eq!(screen.timer_interval(), None);
    }

    #[test]
    fn mode_keys_switch_display() {
        let mut screen = ComparisonScreen::new();
        key(&mut screen, KeyCode::Char('2'));
        assert_eq!(screen.state().display_mode(), DisplayMode::Deterministic);
        key(&mut screen, KeyCode::Char('t'));
        assert_eq!(screen.state().display_mode(), DisplayMode::Traditional);
        key(&mut screen, KeyCode::Char('s'));
        assert_eq!(screen.state().display_mode(), DisplayMode::Split);
    }

    #[test]
    fn focus_survives_mode_change_when_visible() {
        let mut screen = ComparisonScreen::new();
        key(&mut screen, KeyCode::Right);
        let focused = screen.focused();
        assert_eq!(focused, Some(SlotRef::new(Dataset::Deterministic, 1)));
        key(&mut screen, KeyCode::Char('d'));
        assert_eq!(screen.focused(), focused);
    }

    #[test]
    fn focus_clamps_when_hidden() {
        let mut screen = ComparisonScreen::new();
        key(&mut screen, KeyCode::Left);
        assert_eq!(
            screen.focused().map(|s| s.dataset),
            Some(Dataset::Traditional)
        );
        key(&mut screen, KeyCode::Char('d'));
        assert!(screen.focused().is_some());
        assert_eq!(
            screen.focused().map(|s| s.dataset),
            Some(Dataset::Deterministic)
        );
    }

    #[test]
    fn enter_opens_and_escape_closes() {
        let mut screen = ComparisonScreen::new();
        key(&mut screen, KeyCode::Enter);
        assert_eq!(
            screen.state().selected(),
            Some(SlotRef::new(Dataset::Deterministic, 0))
        );
        key(&mut screen, KeyCode::Right);
        assert_eq!(
            screen.state().selected(),
            Some(SlotRef::new(Dataset::Deterministic, 1))
        );
        key(&mut screen, KeyCode::Escape);
        assert_eq!(screen.state().selected(), None);
    }

    #[test]
    fn clicking_slot_selects_it() {
        let mut screen = ComparisonScreen::new();
        render(&screen, 100, 30);
        let target = SlotRef::new(Dataset::Traditional, 2);
        let rect = screen.slot_rect(target).expect("slot rendered");
        click(&mut screen, center(rect));
        assert_eq!(screen.state().selected(), Some(target));
        assert_eq!(screen.focused(), Some(target));
    }

    #[test]
    fn close_button_closes_overlay() {
        let mut screen = ComparisonScreen::new();
        screen.apply(Action::SelectSlot(SlotRef::new(Dataset::Deterministic, 0)));
        render(&screen, 100, 30);
        let close = screen.close_button();
        assert!(!close.is_empty());
        click(&mut screen, (close.x + 1, close.y));
        assert_eq!(screen.state().selected(), None);
    }

    #[test]
    fn click_inside_overlay_keeps_it_open() {
        let mut screen = ComparisonScreen::new();
        screen.apply(Action::SelectSlot(SlotRef::new(Dataset::Deterministic, 0)));
        render(&screen, 100, 30);
        let overlay = screen.overlay_area.get();
        click(&mut screen, (overlay.x + 2, overlay.y + 2));
        assert!(screen.state().selected().is_some());
        click(&mut screen, (0, 0));
        assert_eq!(screen.state().selected(), None);
    }

    #[test]
    fn mode_button_click_switches() {
        let mut screen = ComparisonScreen::new();
        render(&screen, 100, 30);
        let rect = screen
            .mode_button(DisplayMode::Traditional)
            .expect("mode button rendered");
        click(&mut screen, center(rect));
        assert_eq!(screen.state().display_mode(), DisplayMode::Traditional);

        render(&screen, 100, 30);
        let play = center(screen.play_button());
        click(&mut screen, play);
        assert!(screen.state().is_playing());
    }

    #[test]
    fn hidden_dataset_has_no_hits() {
        let screen = ComparisonScreen::with_display_mode(DisplayMode::Deterministic);
        render(&screen, 100, 30);
        assert!(
            screen
                .slot_rect(SlotRef::new(Dataset::Traditional, 0))
                .is_none()
        );
        assert!(
            screen
                .slot_rect(SlotRef::new(Dataset::Deterministic, 0))
                .is_some()
        );
    }

    #[test]
    fn view_handles_various_sizes() {
        let mut screen = ComparisonScreen::new();
        for (w, h) in [(160, 50), (120, 40), (80, 24), (40, 12), (10, 4), (1, 1)] {
            render(&screen, w, h);
        }
        screen.apply(Action::TogglePlayback);
        screen.apply(Action::SelectSlot(SlotRef::new(Dataset::Traditional, 0)));
        for (w, h) in [(160, 50), (80, 24), (20, 6), (3, 3)] {
            render(&screen, w, h);
        }
    }

    #[test]
    fn view_with_empty_area_clears_hits() {
        let screen = ComparisonScreen::new();
        render(&screen, 100, 30);
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(1, 1, &mut pool);
        screen.view(&mut frame, Rect::default());
        assert!(screen.slot_hits.borrow().is_empty());
    }
}
