#![forbid(unsafe_code)]

//! Architecture screen: the four-step transaction flow and slot allocation.

use ftui_core::event::Event;
use ftui_core::geometry::Rect;
use ftui_layout::{Constraint, Flex};
use ftui_render::frame::Frame;
use ftui_runtime::Cmd;
use ftui_style::Style;
use ftui_text::{Line, Span, Text, WrapMode};
use ftui_widgets::Widget;
use ftui_widgets::block::Block;
use ftui_widgets::borders::{BorderType, Borders};
use ftui_widgets::paragraph::Paragraph;
use storyboard_core::SlotMode;
use storyboard_core::content::{self, ALLOCATION, FLOW_STEPS, FlowStep};

use super::{SECTION_HEADER_HEIGHT, Screen, render_section_header};
use crate::theme;

/// Content width at which the flow steps sit in one row.
const ROW_MIN_WIDTH: u16 = 100;

/// Split `width` cells between AOT and JIT for an `aot_pct` share.
///
/// Each side keeps at least one cell when both shares are non-zero.
pub(crate) fn allocation_split(width: u16, aot_pct: u8) -> (u16, u16) {
    let pct = u32::from(aot_pct.min(100));
    let mut aot = (u32::from(width) * pct / 100) as u16;
    if width >= 2 && pct > 0 && pct < 100 {
        aot = aot.clamp(1, width - 1);
    }
    (aot, width - aot)
}

fn step_text(step: &FlowStep) -> Text {
    let mut lines = vec![
        Line::from_spans([Span::styled(step.summary, theme::body())]),
        Line::from(""),
    ];
    lines.extend(step.details.iter().map(|&(key, value)| {
        Line::from_spans([
            Span::styled(format!("{key}: "), theme::key_hint()),
            Span::styled(value, theme::muted()),
        ])
    }));
    Text::from_lines(lines)
}

#[derive(Debug, Default)]
pub struct ArchitectureScreen;

impl ArchitectureScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_step(&self, step: &FlowStep, frame: &mut Frame, area: Rect) {
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(step.title)
            .style(Style::new().fg(theme::accent::SKY));
        let inner = block.inner(area);
        block.render(area, frame);
        Paragraph::new(step_text(step))
            .wrap(WrapMode::Word)
            .render(inner, frame);
    }

    fn render_flow(&self, frame: &mut Frame, area: Rect) {
        let areas = if area.width >= ROW_MIN_WIDTH {
            Flex::horizontal()
                .gap(theme::spacing::XS)
                .constraints(FLOW_STEPS.iter().map(|_| Constraint::Percentage(25.0)))
                .split(area)
        } else {
            Flex::vertical()
                .constraints(FLOW_STEPS.iter().map(|_| Constraint::Percentage(25.0)))
                .split(area)
        };
        for (step, &step_area) in FLOW_STEPS.iter().zip(areas.iter()) {
            self.render_step(step, frame, step_area);
        }
    }

    fn render_allocation(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let rows = Flex::vertical()
            .constraints([
                Constraint::Fixed(1),
                Constraint::Fixed(1),
                Constraint::Min(0),
            ])
            .split(area);

        Paragraph::new("Slot Allocation")
            .style(theme::title())
            .render(rows[0], frame);

        let bar = rows[1];
        let (aot_width, jit_width) = allocation_split(bar.width, ALLOCATION.aot_pct);
        let segments = [
            (SlotMode::Aot, ALLOCATION.aot_pct, bar.x, aot_width),
            (SlotMode::Jit, ALLOCATION.jit_pct, bar.x + aot_width, jit_width),
        ];
        for (mode, pct, x, width) in segments {
            if width == 0 {
                continue;
            }
            Paragraph::new(format!(" {} {pct}%", mode.label()))
                .style(
                    Style::new()
                        .bg(theme::mode_color(mode))
                        .fg(theme::bg::DEEP)
                        .bold(),
                )
                .render(Rect::new(x, bar.y, width, 1), frame);
        }

        Paragraph::new(ALLOCATION.note)
            .wrap(WrapMode::Word)
            .style(theme::muted())
            .render(rows[2], frame);
    }
}

impl Screen for ArchitectureScreen {
    type Message = ();

    fn update(&mut self, _event: &Event) -> Cmd<Self::Message> {
        Cmd::none()
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let rows = Flex::vertical()
            .constraints([
                Constraint::Fixed(SECTION_HEADER_HEIGHT),
                Constraint::Fixed(1),
                Constraint::Min(6),
                Constraint::Fixed(1),
                Constraint::Fixed(4),
            ])
            .split(area);
        render_section_header(&content::ARCHITECTURE, theme::accent::SKY, frame, rows[0]);
        self.render_flow(frame, rows[2]);
        self.render_allocation(frame, rows[4]);
    }
}
