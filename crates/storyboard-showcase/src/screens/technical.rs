#![forbid(unsafe_code)]

//! Technical deep-dive screen: one card per infrastructure component, with
//! a focus ring moved by arrows or mouse.

use std::cell::RefCell;

use ftui_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ftui_core::geometry::Rect;
use ftui_layout::{Constraint, Flex};
use ftui_render::frame::Frame;
use ftui_runtime::Cmd;
use ftui_style::Style;
use ftui_text::WrapMode;
use ftui_widgets::Widget;
use ftui_widgets::block::Block;
use ftui_widgets::borders::{BorderType, Borders};
use ftui_widgets::paragraph::Paragraph;
use storyboard_core::content::{self, COMPONENTS, Component, TECHNICAL_CTA};
use tracing::debug;

use super::{
    HelpEntry, SECTION_HEADER_HEIGHT, Screen, bullet_text, grid_cells, render_section_header,
};
use crate::theme;

/// Component cards per row for a content width.
fn component_columns(width: u16) -> usize {
    match width {
        120.. => 4,
        80.. => 3,
        50.. => 2,
        _ => 1,
    }
}

#[derive(Debug, Default)]
pub struct TechnicalScreen {
    focused: usize,
    card_hits: RefCell<Vec<(Rect, usize)>>,
}

impl TechnicalScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index into [`COMPONENTS`] of the focused card.
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Rectangle of card `index` in the last frame.
    pub fn card_rect(&self, index: usize) -> Option<Rect> {
        self.card_hits
            .borrow()
            .iter()
            .find(|&&(_, i)| i == index)
            .map(|&(rect, _)| rect)
    }

    fn step(&mut self, delta: isize) {
        let len = COMPONENTS.len() as isize;
        self.focused = (self.focused as isize + delta).rem_euclid(len) as usize;
        debug!(component = COMPONENTS[self.focused].title, "Component focused");
    }

    fn render_card(&self, component: &Component, focused: bool, frame: &mut Frame, area: Rect) {
        let border = if focused {
            Style::new().fg(theme::accent::CYAN).bold()
        } else {
            Style::new().fg(theme::fg::MUTED)
        };
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(if focused {
                BorderType::Double
            } else {
                BorderType::Rounded
            })
            .title(component.title)
            .style(border);
        let inner = block.inner(area);
        block.render(area, frame);
        Paragraph::new(bullet_text(
            Some(component.summary),
            component.features,
            "• ",
            theme::accent::CYAN,
        ))
        .wrap(WrapMode::Word)
        .render(inner, frame);
    }
}

impl Screen for TechnicalScreen {
    type Message = ();

    fn update(&mut self, event: &Event) -> Cmd<Self::Message> {
        match event {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Left | KeyCode::Char('h') => self.step(-1),
                KeyCode::Right | KeyCode::Char('l') => self.step(1),
                _ => {}
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                x,
                y,
                ..
            }) => {
                let hit = self
                    .card_hits
                    .borrow()
                    .iter()
                    .find(|(rect, _)| rect.contains(*x, *y))
                    .map(|&(_, i)| i);
                if let Some(index) = hit {
                    self.focused = index;
                }
            }
            _ => {}
        }
        Cmd::none()
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        self.card_hits.borrow_mut().clear();
        if area.is_empty() {
            return;
        }
        let rows = Flex::vertical()
            .constraints([
                Constraint::Fixed(SECTION_HEADER_HEIGHT),
                Constraint::Fixed(1),
                Constraint::Min(1),
                Constraint::Fixed(2),
            ])
            .split(area);
        render_section_header(&content::TECHNICAL, theme::accent::CYAN, frame, rows[0]);

        let cells = grid_cells(rows[2], COMPONENTS.len(), component_columns(rows[2].width));
        let mut hits = self.card_hits.borrow_mut();
        for (i, (component, &cell)) in COMPONENTS.iter().zip(cells.iter()).enumerate() {
            if cell.is_empty() {
                continue;
            }
            self.render_card(component, i == self.focused, frame, cell);
            hits.push((cell, i));
        }

        Paragraph::new(TECHNICAL_CTA)
            .wrap(WrapMode::Word)
            .style(theme::muted())
            .render(rows[3], frame);
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        vec![
            HelpEntry {
                key: "←/→  h/l",
                action: "Previous / next component",
            },
            HelpEntry {
                key: "Click",
                action: "Focus component",
            },
        ]
    }
}
