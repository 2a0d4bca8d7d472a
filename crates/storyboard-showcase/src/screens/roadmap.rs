#![forbid(unsafe_code)]

//! Roadmap screen.

use ftui_core::event::Event;
use ftui_core::geometry::Rect;
use ftui_layout::{Constraint, Flex};
use ftui_render::frame::Frame;
use ftui_runtime::Cmd;
use ftui_style::Style;
use ftui_text::{Text, WrapMode};
use ftui_widgets::Widget;
use ftui_widgets::block::Block;
use ftui_widgets::borders::{BorderType, Borders};
use ftui_widgets::paragraph::Paragraph;
use storyboard_core::content::{self, Milestone, ROADMAP_MILESTONES};

use super::{SECTION_HEADER_HEIGHT, Screen, bullet_text, render_section_header};
use crate::theme;

/// Content width at which milestones sit in columns.
const COLUMNS_MIN_WIDTH: u16 = 90;

fn milestone_text(milestone: &Milestone) -> Text {
    bullet_text(
        Some(milestone.summary),
        milestone.items,
        "• ",
        theme::accent::AMBER,
    )
}

#[derive(Debug, Default)]
pub struct RoadmapScreen;

impl RoadmapScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for RoadmapScreen {
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
                Constraint::Min(1),
            ])
            .split(area);
        render_section_header(&content::ROADMAP, theme::accent::AMBER, frame, rows[0]);

        let share = Constraint::Percentage(100.0 / ROADMAP_MILESTONES.len() as f32);
        let areas = if rows[2].width >= COLUMNS_MIN_WIDTH {
            Flex::horizontal()
                .gap(theme::spacing::XS)
                .constraints(ROADMAP_MILESTONES.iter().map(|_| share))
                .split(rows[2])
        } else {
            Flex::vertical()
                .constraints(ROADMAP_MILESTONES.iter().map(|_| share))
                .split(rows[2])
        };

        for (i, (milestone, &cell)) in ROADMAP_MILESTONES.iter().zip(areas.iter()).enumerate() {
            let border = if i == 0 {
                theme::accent::AMBER
            } else {
                theme::fg::MUTED
            };
            let block = Block::new()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(milestone.title)
                .style(Style::new().fg(border));
            let inner = block.inner(cell);
            block.render(cell, frame);
            Paragraph::new(milestone_text(milestone))
                .wrap(WrapMode::Word)
                .render(inner, frame);
        }
    }
}
