#![forbid(unsafe_code)]

//! Impact screen: headline metrics, comparison bars, and benchmarks.

use ftui_core::event::Event;
use ftui_core::geometry::Rect;
use ftui_layout::{Constraint, Flex};
use ftui_render::frame::Frame;
use ftui_runtime::Cmd;
use ftui_style::Style;
use ftui_text::{Line, Span, Text, WrapMode};
use ftui_widgets::Widget;
use ftui_widgets::block::Alignment;
use ftui_widgets::paragraph::Paragraph;
use ftui_widgets::progress::ProgressBar;
use storyboard_core::Dataset;
use storyboard_core::content::{
    self, BENCHMARKS, BarValue, Benchmark, HEADLINE_METRICS, IMPACT_CARDS, ImpactCard,
};

use super::{SECTION_HEADER_HEIGHT, Screen, render_section_header};
use crate::theme;

/// Content width at which the cards form a 2x2 grid.
const GRID_MIN_WIDTH: u16 = 90;
const BAR_LABEL_WIDTH: usize = 15;
const SCENARIO_WIDTH: usize = 18;
const CELL_WIDTH: usize = 12;

/// One benchmark row with fixed-width columns.
pub(crate) fn benchmark_row(b: &Benchmark) -> String {
    format!(
        "{:<SCENARIO_WIDTH$}{:<CELL_WIDTH$}{:<CELL_WIDTH$}{:<CELL_WIDTH$}{:<CELL_WIDTH$}",
        b.scenario,
        b.deterministic_success,
        b.traditional_success,
        b.deterministic_latency,
        b.traditional_latency,
    )
}

fn benchmark_header() -> String {
    format!(
        "{:<SCENARIO_WIDTH$}{:<CELL_WIDTH$}{:<CELL_WIDTH$}{:<CELL_WIDTH$}{:<CELL_WIDTH$}",
        "Scenario", "Det. ok", "Trad. ok", "Det. lat", "Trad. lat",
    )
}

#[derive(Debug, Default)]
pub struct ImpactScreen;

impl ImpactScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_metrics(&self, frame: &mut Frame, area: Rect) {
        let cols = Flex::horizontal()
            .constraints(HEADLINE_METRICS.iter().map(|_| Constraint::Percentage(25.0)))
            .split(area);
        for (metric, &col) in HEADLINE_METRICS.iter().zip(cols.iter()) {
            let text = Text::from_lines([
                Line::from_spans([Span::styled(
                    metric.value,
                    theme::eyebrow(theme::accent::EMERALD),
                )]),
                Line::from_spans([Span::styled(metric.label, theme::muted())]),
            ]);
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .render(col, frame);
        }
    }

    fn render_bar(&self, dataset: Dataset, value: &BarValue, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let label_width = (BAR_LABEL_WIDTH as u16).min(area.width);
        Paragraph::new(format!("{:<BAR_LABEL_WIDTH$}", dataset.short_label()))
            .style(theme::muted())
            .render(Rect::new(area.x, area.y, label_width, 1), frame);
        let bar = Rect::new(
            area.x + label_width,
            area.y,
            area.width - label_width,
            1,
        );
        ProgressBar::new()
            .ratio(f64::from(value.fill_pct) / 100.0)
            .label(value.label)
            .style(Style::new().bg(theme::bg::RAISED).fg(theme::fg::SECONDARY))
            .gauge_style(
                Style::new()
                    .bg(theme::darken(theme::dataset_accent(dataset)))
                    .fg(theme::fg::PRIMARY),
            )
            .render(bar, frame);
    }

    fn render_card(&self, card: &ImpactCard, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let rows = Flex::vertical()
            .constraints([
                Constraint::Fixed(1),
                Constraint::Fixed(1),
                Constraint::Fixed(1),
                Constraint::Min(0),
            ])
            .split(area);
        let heading = Line::from_spans([
            Span::styled(card.title, theme::title()),
            Span::raw("  "),
            Span::styled(card.improvement, theme::eyebrow(theme::accent::EMERALD)),
        ]);
        Paragraph::new(Text::from_lines([heading])).render(rows[0], frame);
        self.render_bar(Dataset::Traditional, &card.traditional, frame, rows[1]);
        self.render_bar(Dataset::Deterministic, &card.deterministic, frame, rows[2]);
        Paragraph::new(card.note)
            .wrap(WrapMode::Word)
            .style(theme::muted())
            .render(rows[3], frame);
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect) {
        if area.width >= GRID_MIN_WIDTH {
            let halves = Flex::vertical()
                .constraints([Constraint::Percentage(50.0), Constraint::Percentage(50.0)])
                .split(area);
            for (pair, &row) in IMPACT_CARDS.chunks(2).zip(halves.iter()) {
                let cols = Flex::horizontal()
                    .gap(theme::spacing::SM)
                    .constraints([Constraint::Percentage(50.0), Constraint::Percentage(50.0)])
                    .split(row);
                for (card, &col) in pair.iter().zip(cols.iter()) {
                    self.render_card(card, frame, col);
                }
            }
        } else {
            let rows = Flex::vertical()
                .constraints(IMPACT_CARDS.iter().map(|_| Constraint::Percentage(25.0)))
                .split(area);
            for (card, &row) in IMPACT_CARDS.iter().zip(rows.iter()) {
                self.render_card(card, frame, row);
            }
        }
    }

    fn render_benchmarks(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from_spans([Span::styled(
            benchmark_header(),
            Style::new().fg(theme::fg::SECONDARY).bold().underline(),
        )])];
        lines.extend(
            BENCHMARKS
                .iter()
                .map(|b| Line::from_spans([Span::styled(benchmark_row(b), theme::body())])),
        );
        Paragraph::new(Text::from_lines(lines)).render(area, frame);
    }
}

impl Screen for ImpactScreen {
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
                Constraint::Fixed(2),
                Constraint::Fixed(1),
                Constraint::Min(4),
                Constraint::Fixed(BENCHMARKS.len() as u16 + 1),
            ])
            .split(area);
        render_section_header(&content::IMPACT, theme::accent::EMERALD, frame, rows[0]);
        self.render_metrics(frame, rows[2]);
        self.render_cards(frame, rows[4]);
        self.render_benchmarks(frame, rows[5]);
    }
}
