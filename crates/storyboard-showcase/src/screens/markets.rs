#![forbid(unsafe_code)]

//! Markets screen: how public mempools leak value, and the two auction flows
//! side by side.

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
use storyboard_core::content::{self, AUCTION_FLOWS, AuctionFlow, ContrastCard, MEV_CARDS};

use super::{SECTION_HEADER_HEIGHT, Screen, bullet_text, render_section_header};
use crate::theme;

/// Content width at which cards and flows sit side by side.
const COLUMNS_MIN_WIDTH: u16 = 90;

/// Rows of an auction flow: one per step plus an arrow between steps.
fn flow_height(flow: &AuctionFlow) -> u16 {
    (flow.steps.len() * 2).saturating_sub(1) as u16
}

fn flow_text(flow: &AuctionFlow) -> Text {
    let mut lines = Vec::with_capacity(usize::from(flow_height(flow)));
    for (i, &step) in flow.steps.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from_spans([Span::styled("   ↓", theme::muted())]));
        }
        let color = match flow.uncertain_from {
            None => theme::accent::EMERALD,
            Some(from) if i >= from => theme::accent::AMBER,
            Some(_) => theme::fg::SECONDARY,
        };
        lines.push(Line::from_spans([
            Span::styled(format!(" {} ", i + 1), Style::new().fg(color).bold()),
            Span::styled(step, Style::new().fg(color)),
        ]));
    }
    Text::from_lines(lines)
}

fn card_text(card: &ContrastCard) -> Text {
    let (marker, color) = if card.remedy {
        ("✓ ", theme::accent::EMERALD)
    } else {
        ("✗ ", theme::accent::RED)
    };
    bullet_text(Some(card.summary), card.points, marker, color)
}

fn split_pair(area: Rect) -> Vec<Rect> {
    let halves = [Constraint::Percentage(50.0), Constraint::Percentage(50.0)];
    let parts = if area.width >= COLUMNS_MIN_WIDTH {
        Flex::horizontal()
            .gap(theme::spacing::SM)
            .constraints(halves)
            .split(area)
    } else {
        Flex::vertical().constraints(halves).split(area)
    };
    parts.iter().copied().collect()
}

#[derive(Debug, Default)]
pub struct MarketsScreen;

impl MarketsScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_card(&self, card: &ContrastCard, frame: &mut Frame, area: Rect) {
        let border = if card.remedy {
            theme::accent::EMERALD
        } else {
            theme::accent::RED
        };
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(card.title)
            .style(Style::new().fg(border));
        let inner = block.inner(area);
        block.render(area, frame);
        Paragraph::new(card_text(card))
            .wrap(WrapMode::Word)
            .render(inner, frame);
    }

    fn render_flow(&self, flow: &AuctionFlow, frame: &mut Frame, area: Rect) {
        let border = match flow.uncertain_from {
            None => theme::accent::EMERALD,
            Some(_) => theme::fg::MUTED,
        };
        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(flow.title)
            .style(Style::new().fg(border));
        let inner = block.inner(area);
        block.render(area, frame);
        Paragraph::new(flow_text(flow)).render(inner, frame);
    }
}

impl Screen for MarketsScreen {
    type Message = ();

    fn update(&mut self, _event: &Event) -> Cmd<Self::Message> {
        Cmd::none()
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let flow_rows = AUCTION_FLOWS.iter().map(flow_height).max().unwrap_or(0) + 2;
        let rows = Flex::vertical()
            .constraints([
                Constraint::Fixed(SECTION_HEADER_HEIGHT),
                Constraint::Fixed(1),
                Constraint::Min(6),
                Constraint::Fixed(1),
                Constraint::Fixed(1),
                Constraint::Fixed(flow_rows),
            ])
            .split(area);
        render_section_header(&content::MARKETS, theme::accent::RED, frame, rows[0]);

        for (card, &cell) in MEV_CARDS.iter().zip(split_pair(rows[2]).iter()) {
            self.render_card(card, frame, cell);
        }

        Paragraph::new("Blockspace Auction Comparison")
            .style(theme::title())
            .render(rows[4], frame);
        for (flow, &cell) in AUCTION_FLOWS.iter().zip(split_pair(rows[5]).iter()) {
            self.render_flow(flow, frame, cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ftui_render::grapheme_pool::GraphemePool;

    fn screen_text(width: u16, height: u16) -> String {
        let screen = MarketsScreen::new();
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
    fn flow_text_interleaves_arrows() {
        for flow in &AUCTION_FLOWS {
            assert_eq!(flow_text(flow).height(), usize::from(flow_height(flow)));
        }
        assert_eq!(flow_height(&AUCTION_FLOWS[0]), 7);
    }

    #[test]
    fn card_text_lists_points_after_summary() {
        for card in &MEV_CARDS {
            assert_eq!(card_text(card).height(), 2 + card.points.len());
        }
    }

    #[test]
    fn wide_view_shows_both_auction_flows() {
        let text = screen_text(120, 36);
        assert!(text.contains("Blockspace Auction Comparison"));
        let row = text
            .lines()
            .find(|line| line.contains(AUCTION_FLOWS[0].title))
            .expect("auction flow title");
        assert!(row.contains(AUCTION_FLOWS[1].title));
        assert!(text.contains("MEV bots scan and front-run"));
        assert!(text.contains(MEV_CARDS[0].title));
        assert!(text.contains(MEV_CARDS[1].title));
    }

    #[test]
    fn view_handles_various_sizes() {
        for (w, h) in [(160, 50), (80, 24), (30, 8), (1, 1)] {
            screen_text(w, h);
        }
    }
}
