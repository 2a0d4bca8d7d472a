#![forbid(unsafe_code)]

//! Use-case screen: industry scenarios and integration examples.

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
use storyboard_core::content::{self, INTEGRATIONS, Integration, SCENARIOS, Scenario};

use super::{SECTION_HEADER_HEIGHT, Screen, bullet_text, grid_cells, render_section_header};
use crate::theme;

/// Scenario cards per row for a content width.
fn scenario_columns(width: u16) -> usize {
    match width {
        120.. => 4,
        60.. => 2,
        _ => 1,
    }
}

/// Integration cards per row for a content width.
fn integration_columns(width: u16) -> usize {
    if width >= 100 { INTEGRATIONS.len() } else { 1 }
}

/// Rows an integration card needs inside its border.
fn integration_rows(example: &Integration) -> u16 {
    (example.snippet.len() + 1 + example.benefits.len()) as u16
}

fn integration_text(example: &Integration) -> Text {
    let code = Style::new().fg(theme::accent::CYAN).bg(theme::bg::RAISED);
    let comment = Style::new().fg(theme::fg::MUTED).bg(theme::bg::RAISED);
    let mut lines: Vec<Line> = example
        .snippet
        .iter()
        .map(|&src| {
            let style = if src.starts_with("//") { comment } else { code };
            Line::from_spans([Span::styled(src, style)])
        })
        .collect();
    lines.push(Line::from(""));
    lines.extend(example.benefits.iter().map(|&benefit| {
        Line::from_spans([
            Span::styled("✓ ", Style::new().fg(theme::accent::EMERALD)),
            Span::styled(benefit, theme::body()),
        ])
    }));
    Text::from_lines(lines)
}

#[derive(Debug, Default)]
pub struct UseCasesScreen;

impl UseCasesScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_scenario(&self, scenario: &Scenario, frame: &mut Frame, area: Rect) {
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(scenario.industry)
            .style(Style::new().fg(theme::accent::ORANGE));
        let inner = block.inner(area);
        block.render(area, frame);
        Paragraph::new(bullet_text(
            None,
            scenario.points,
            "• ",
            theme::accent::ORANGE,
        ))
        .wrap(WrapMode::Word)
        .render(inner, frame);
    }

    fn render_integration(&self, example: &Integration, frame: &mut Frame, area: Rect) {
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(example.title)
            .style(Style::new().fg(theme::fg::MUTED));
        let inner = block.inner(area);
        block.render(area, frame);
        Paragraph::new(integration_text(example)).render(inner, frame);
    }
}

impl Screen for UseCasesScreen {
    type Message = ();

    fn update(&mut self, _event: &Event) -> Cmd<Self::Message> {
        Cmd::none()
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let card_rows = INTEGRATIONS.iter().map(integration_rows).max().unwrap_or(0) + 2;
        let rows = Flex::vertical()
            .constraints([
                Constraint::Fixed(SECTION_HEADER_HEIGHT),
                Constraint::Fixed(1),
                Constraint::Min(5),
                Constraint::Fixed(1),
                Constraint::Fixed(1),
                Constraint::Fixed(card_rows),
            ])
            .split(area);
        render_section_header(&content::USE_CASES, theme::accent::ORANGE, frame, rows[0]);

        let cells = grid_cells(rows[2], SCENARIOS.len(), scenario_columns(rows[2].width));
        for (scenario, &cell) in SCENARIOS.iter().zip(cells.iter()) {
            self.render_scenario(scenario, frame, cell);
        }

        Paragraph::new("Integration Examples")
            .style(theme::title())
            .render(rows[4], frame);
        let cells = grid_cells(
            rows[5],
            INTEGRATIONS.len(),
            integration_columns(rows[5].width),
        );
        for (example, &cell) in INTEGRATIONS.iter().zip(cells.iter()) {
            self.render_integration(example, frame, cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ftui_render::grapheme_pool::GraphemePool;

    fn screen_text(width: u16, height: u16) -> String {
        let screen = UseCasesScreen::new();
        let mut pool = GraphemePool::new();
        let mut frame = Frame::new(width, height, &mut pool);
        screen.view(&mut frame, Rect::new(0, 0, width, height));
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| {
                        frame
                            .buffer
                            .get(x, y)
                            .and_then(|c| c.content.as_char())
                            .unwrap_or(' ')
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn columns_follow_width() {
        assert_eq!(scenario_columns(140), 4);
        assert_eq!(scenario_columns(80), 2);
        assert_eq!(scenario_columns(30), 1);
        assert_eq!(integration_columns(120), 3);
        assert_eq!(integration_columns(99), 1);
    }

    #[test]
    fn integration_text_has_snippet_gap_and_benefits() {
        for example in &INTEGRATIONS {
            assert_eq!(
                integration_text(example).height(),
                usize::from(integration_rows(example))
            );
        }
    }

    #[test]
    fn wide_view_shows_every_industry_and_example() {
        let text = screen_text(140, 36);
        for scenario in &SCENARIOS {
            assert!(text.contains(scenario.industry), "{}", scenario.industry);
        }
        for example in &INTEGRATIONS {
            assert!(text.contains(example.title), "{}", example.title);
        }
        assert!(text.contains("Integration Examples"));
    }

    #[test]
    fn view_handles_various_sizes() {
        for (w, h) in [(160, 50), (80, 24), (30, 8), (1, 1)] {
            screen_text(w, h);
        }
    }
}
