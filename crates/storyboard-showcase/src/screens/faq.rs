#![forbid(unsafe_code)]

//! FAQ screen: one expanded answer at a time.

use std::cell::RefCell;

use ftui_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ftui_core::geometry::Rect;
use ftui_layout::{Constraint, Flex};
use ftui_render::frame::Frame;
use ftui_runtime::Cmd;
use ftui_style::Style;
use ftui_text::{Line, Span, Text, WrapMode};
use ftui_widgets::Widget;
use ftui_widgets::paragraph::Paragraph;
use storyboard_core::content::{self, FAQ_ENTRIES};

use super::{HelpEntry, SECTION_HEADER_HEIGHT, Screen, render_section_header};
use crate::theme;

/// Rows an answer needs when word-wrapped to `width` columns, plus slack.
fn answer_rows(answer: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    (answer.chars().count().div_ceil(width) + 1) as u16
}

#[derive(Debug, Default)]
pub struct FaqScreen {
    expanded: usize,
    question_hits: RefCell<Vec<(Rect, usize)>>,
}

impl FaqScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the expanded entry.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Rectangle of question `index` in the last frame.
    pub fn question_rect(&self, index: usize) -> Option<Rect> {
        self.question_hits
            .borrow()
            .iter()
            .find(|&&(_, i)| i == index)
            .map(|&(rect, _)| rect)
    }

    fn step(&mut self, delta: isize) {
        let len = FAQ_ENTRIES.len() as isize;
        self.expanded = (self.expanded as isize + delta).rem_euclid(len) as usize;
    }

    fn render_entries(&self, frame: &mut Frame, area: Rect) {
        let mut hits = self.question_hits.borrow_mut();
        let mut y = area.y;
        for (i, entry) in FAQ_ENTRIES.iter().enumerate() {
            if y >= area.bottom() {
                break;
            }
            let expanded = i == self.expanded;
            let (marker, style) = if expanded {
                ("▾ ", theme::eyebrow(theme::accent::VIOLET))
            } else {
                ("▸ ", Style::new().fg(theme::fg::SECONDARY))
            };
            let question = Rect::new(area.x, y, area.width, 1);
            let line = Line::from_spans([
                Span::styled(marker, style),
                Span::styled(entry.question, style),
            ]);
            Paragraph::new(Text::from_lines([line])).render(question, frame);
            hits.push((question, i));
            y += 1;

            if expanded {
                let indent = 2.min(area.width);
                let width = area.width - indent;
                let rows = answer_rows(entry.answer, width).min(area.bottom() - y);
                Paragraph::new(entry.answer)
                    .wrap(WrapMode::Word)
                    .style(theme::body())
                    .render(Rect::new(area.x + indent, y, width, rows), frame);
                y += rows;
            }
        }
    }
}

impl Screen for FaqScreen {
    type Message = ();

    fn update(&mut self, event: &Event) -> Cmd<Self::Message> {
        match event {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Up | KeyCode::Char('k') => self.step(-1),
                KeyCode::Down | KeyCode::Char('j') => self.step(1),
                _ => {}
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                x,
                y,
                ..
            }) => {
                let hit = self
                    .question_hits
                    .borrow()
                    .iter()
                    .find(|(rect, _)| rect.contains(*x, *y))
                    .map(|&(_, i)| i);
                if let Some(index) = hit {
                    self.expanded = index;
                }
            }
            _ => {}
        }
        Cmd::none()
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        self.question_hits.borrow_mut().clear();
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
        render_section_header(&content::FAQ, theme::accent::VIOLET, frame, rows[0]);
        self.render_entries(frame, rows[2]);
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        vec![
            HelpEntry {
                key: "↑ / k",
                action: "Previous question",
            },
            HelpEntry {
                key: "↓ / j",
                action: "Next question",
            },
            HelpEntry {
                key: "Click",
                action: "Expand question",
            },
        ]
    }
}
