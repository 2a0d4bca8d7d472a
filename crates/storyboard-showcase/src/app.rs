#![forbid(unsafe_code)]

//! Main application model, message routing, and screen navigation.
//!
//! This module contains the top-level [`AppModel`] that implements the Elm
//! architecture via [`Model`]. It manages the storyboard screens, routes
//! events, owns the playback and auto-exit subscriptions, and renders the
//! chrome (tab bar, status bar, help overlay).

use std::cell::RefCell;
use std::time::Duration;

use ftui_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ftui_core::geometry::Rect;
use ftui_layout::{Constraint, Flex};
use ftui_render::cell::Cell as RenderCell;
use ftui_render::frame::Frame;
use ftui_runtime::{Cmd, Every, Model, SubId, Subscription};
use ftui_widgets::Widget;
use ftui_widgets::block::{Alignment, Block};
use ftui_widgets::borders::{BorderType, Borders};
use storyboard_core::{Action, DisplayMode};
use tracing::{debug, info};

use crate::chrome::{self, HelpEntry, StatusBarState};
use crate::screens::{self, Screen};
use crate::theme;

/// Subscription id of the playback timer.
pub const PLAYBACK_TIMER_ID: SubId = 0x5b01;
/// Subscription id of the `--exit-after-ms` timer.
pub const EXIT_TIMER_ID: SubId = 0x5b02;

// ---------------------------------------------------------------------------
// ScreenId
// ---------------------------------------------------------------------------

/// Identifies which storyboard screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    /// Animated side-by-side timeline comparison.
    Comparison,
    /// Headline metrics, comparison bars, benchmarks.
    Impact,
    /// Transaction flow and slot allocation.
    Architecture,
    /// MEV mitigation and the auction comparison.
    Markets,
    /// Industry scenarios and integration examples.
    UseCases,
    /// Infrastructure component cards.
    Technical,
    /// Expandable questions and answers.
    Faq,
    /// Upcoming milestones.
    Roadmap,
}

impl ScreenId {
    /// All screens in display order.
    pub const ALL: &[ScreenId] = &[
        Self::Comparison,
        Self::Impact,
        Self::Architecture,
        Self::Markets,
        Self::UseCases,
        Self::Technical,
        Self::Faq,
        Self::Roadmap,
    ];

    /// 0-based index in the ALL array.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }

    /// Next screen (wraps around).
    pub fn next(self) -> Self {
        let i = (self.index() + 1) % Self::ALL.len();
        Self::ALL[i]
    }

    /// Previous screen (wraps around).
    pub fn prev(self) -> Self {
        let i = (self.index() + Self::ALL.len() - 1) % Self::ALL.len();
        Self::ALL[i]
    }

    /// Title for the content border and status bar.
    pub fn title(self) -> &'static str {
        match self {
            Self::Comparison => "Execution Comparison",
            Self::Impact => "Impact",
            Self::Architecture => "Architecture",
            Self::Markets => "MEV & Auctions",
            Self::UseCases => "Use Cases",
            Self::Technical => "Technical Deep Dive",
            Self::Faq => "FAQ",
            Self::Roadmap => "Roadmap",
        }
    }

    /// Short label for the tab bar.
    pub fn tab_label(self) -> &'static str {
        match self {
            Self::Comparison => "Compare",
            Self::Impact => "Impact",
            Self::Architecture => "Flow",
            Self::Markets => "MEV",
            Self::UseCases => "Cases",
            Self::Technical => "Tech",
            Self::Faq => "FAQ",
            Self::Roadmap => "Roadmap",
        }
    }

    /// Map `F1`..`F8` to a screen.
    pub fn from_function_key(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }
}

// ---------------------------------------------------------------------------
// ScreenStates
// ---------------------------------------------------------------------------

/// Holds the state for every screen.
#[derive(Default)]
pub struct ScreenStates {
    pub comparison: screens::comparison::ComparisonScreen,
    pub impact: screens::impact::ImpactScreen,
    pub architecture: screens::architecture::ArchitectureScreen,
    pub markets: screens::markets::MarketsScreen,
    pub use_cases: screens::use_cases::UseCasesScreen,
    pub technical: screens::technical::TechnicalScreen,
    pub faq: screens::faq::FaqScreen,
    pub roadmap: screens::roadmap::RoadmapScreen,
}

impl ScreenStates {
    /// Forward an event to the screen identified by `id`.
    fn update(&mut self, id: ScreenId, event: &Event) {
        match id {
            ScreenId::Comparison => {
                self.comparison.update(event);
            }
            ScreenId::Impact => {
                self.impact.update(event);
            }
            ScreenId::Architecture => {
                self.architecture.update(event);
            }
            ScreenId::Markets => {
                self.markets.update(event);
            }
            ScreenId::UseCases => {
                self.use_cases.update(event);
            }
            ScreenId::Technical => {
                self.technical.update(event);
            }
            ScreenId::Faq => {
                self.faq.update(event);
            }
            ScreenId::Roadmap => {
                self.roadmap.update(event);
            }
        }
    }

    /// Render the screen identified by `id` into `area`.
    fn view(&self, id: ScreenId, frame: &mut Frame, area: Rect) {
        match id {
            ScreenId::Comparison => self.comparison.view(frame, area),
            ScreenId::Impact => self.impact.view(frame, area),
            ScreenId::Architecture => self.architecture.view(frame, area),
            ScreenId::Markets => self.markets.view(frame, area),
            ScreenId::UseCases => self.use_cases.view(frame, area),
            ScreenId::Technical => self.technical.view(frame, area),
            ScreenId::Faq => self.faq.view(frame, area),
            ScreenId::Roadmap => self.roadmap.view(frame, area),
        }
    }

    /// Screen-specific keybindings for the help overlay.
    fn keybindings(&self, id: ScreenId) -> Vec<HelpEntry> {
        match id {
            ScreenId::Comparison => self.comparison.keybindings(),
            ScreenId::Impact => self.impact.keybindings(),
            ScreenId::Architecture => self.architecture.keybindings(),
            ScreenId::Markets => self.markets.keybindings(),
            ScreenId::UseCases => self.use_cases.keybindings(),
            ScreenId::Technical => self.technical.keybindings(),
            ScreenId::Faq => self.faq.keybindings(),
            ScreenId::Roadmap => self.roadmap.keybindings(),
        }
    }
}

// ---------------------------------------------------------------------------
// AppMsg
// ---------------------------------------------------------------------------

/// Top-level application message.
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// A raw terminal event forwarded to the current screen.
    ScreenEvent(Event),
    /// Switch to a specific screen.
    SwitchScreen(ScreenId),
    /// Advance to the next screen tab.
    NextScreen,
    /// Go back to the previous screen tab.
    PrevScreen,
    /// Toggle the help overlay.
    ToggleHelp,
    /// One period of the playback timer.
    PlaybackTick,
    /// Terminal resize.
    Resize {
        /// New terminal width.
        width: u16,
        /// New terminal height.
        height: u16,
    },
    /// Quit the application.
    Quit,
}

impl From<Event> for AppMsg {
    fn from(event: Event) -> Self {
        if let Event::Resize { width, height } = event {
            return Self::Resize { width, height };
        }

        Self::ScreenEvent(event)
    }
}

// ---------------------------------------------------------------------------
// AppModel
// ---------------------------------------------------------------------------

/// Top-level application state.
pub struct AppModel {
    /// Currently displayed screen.
    pub current_screen: ScreenId,
    /// Per-screen state.
    pub screens: ScreenStates,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Last known terminal width.
    pub terminal_width: u16,
    /// Last known terminal height.
    pub terminal_height: u16,
    /// Auto-exit after this many milliseconds (0 = disabled).
    pub exit_after_ms: u64,
    /// Start playback from `init`.
    pub autoplay: bool,
    /// Tab rectangles from the last frame, for mouse clicks.
    tab_hits: RefCell<Vec<(Rect, ScreenId)>>,
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}

impl AppModel {
    /// Create a new application model on the comparison screen.
    pub fn new() -> Self {
        Self {
            current_screen: ScreenId::Comparison,
            screens: ScreenStates::default(),
            help_visible: false,
            terminal_width: 0,
            terminal_height: 0,
            exit_after_ms: 0,
            autoplay: false,
            tab_hits: RefCell::new(Vec::new()),
        }
    }

    /// Set the comparison screen's display mode.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.screens
            .comparison
            .apply(Action::SetDisplayMode(mode));
    }

    /// Keybindings of the current screen.
    pub fn current_screen_keybindings(&self) -> Vec<HelpEntry> {
        self.screens.keybindings(self.current_screen)
    }

    fn switch_to(&mut self, id: ScreenId) {
        if id != self.current_screen {
            debug!(from = ?self.current_screen, to = ?id, "Screen switched");
        }
        self.current_screen = id;
    }

    fn tab_at(&self, x: u16, y: u16) -> Option<ScreenId> {
        self.tab_hits
            .borrow()
            .iter()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|&(_, id)| id)
    }

    fn handle_msg(&mut self, msg: AppMsg) -> Cmd<AppMsg> {
        match msg {
            AppMsg::Quit => Cmd::Quit,

            AppMsg::SwitchScreen(id) => {
                self.switch_to(id);
                Cmd::None
            }

            AppMsg::NextScreen => {
                self.switch_to(self.current_screen.next());
                Cmd::None
            }

            AppMsg::PrevScreen => {
                self.switch_to(self.current_screen.prev());
                Cmd::None
            }

            AppMsg::ToggleHelp => {
                self.help_visible = !self.help_visible;
                Cmd::None
            }

            AppMsg::PlaybackTick => {
                self.screens.comparison.tick();
                Cmd::None
            }

            AppMsg::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
                Cmd::None
            }

            AppMsg::ScreenEvent(event) => {
                if let Event::Key(KeyEvent {
                    code,
                    modifiers,
                    kind: KeyEventKind::Press,
                    ..
                }) = &event
                {
                    match (*code, *modifiers) {
                        // Quit
                        (KeyCode::Char('q'), Modifiers::NONE) => return Cmd::Quit,
                        (KeyCode::Char('c'), Modifiers::CTRL) => return Cmd::Quit,
                        // Help
                        (KeyCode::Char('?'), _) => return self.handle_msg(AppMsg::ToggleHelp),
                        _ => {}
                    }

                    // The help overlay is modal.
                    if self.help_visible {
                        if *code == KeyCode::Escape {
                            self.help_visible = false;
                        }
                        return Cmd::None;
                    }

                    match (*code, *modifiers) {
                        (KeyCode::Tab, Modifiers::NONE) => {
                            return self.handle_msg(AppMsg::NextScreen);
                        }
                        (KeyCode::BackTab, _) => return self.handle_msg(AppMsg::PrevScreen),
                        (KeyCode::F(n), _) => {
                            if let Some(id) = ScreenId::from_function_key(n) {
                                return self.handle_msg(AppMsg::SwitchScreen(id));
                            }
                        }
                        _ => {}
                    }
                }

                if let Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    x,
                    y,
                    ..
                }) = &event
                {
                    if self.help_visible {
                        self.help_visible = false;
                        return Cmd::None;
                    }
                    if let Some(id) = self.tab_at(*x, *y) {
                        return self.handle_msg(AppMsg::SwitchScreen(id));
                    }
                }

                if self.help_visible {
                    return Cmd::None;
                }
                self.screens.update(self.current_screen, &event);
                Cmd::None
            }
        }
    }
}

impl Model for AppModel {
    type Message = AppMsg;

    fn init(&mut self) -> Cmd<Self::Message> {
        if self.autoplay && !self.screens.comparison.state().is_playing() {
            info!("Autoplay enabled");
            self.screens.comparison.apply(Action::TogglePlayback);
        }
        Cmd::None
    }

    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message> {
        self.handle_msg(msg)
    }

    fn view(&self, frame: &mut Frame) {
        let area = Rect::from_size(frame.buffer.width(), frame.buffer.height());

        frame
            .buffer
            .fill(area, RenderCell::default().with_bg(theme::bg::DEEP));

        // Top-level layout: tab bar (1 row) + content + status bar (1 row)
        let chunks = Flex::vertical()
            .constraints([
                Constraint::Fixed(1),
                Constraint::Min(1),
                Constraint::Fixed(1),
            ])
            .split(area);

        let tabs = chrome::render_tab_bar(self.current_screen, frame, chunks[0]);
        *self.tab_hits.borrow_mut() = tabs;

        let content_block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(self.current_screen.title())
            .title_alignment(Alignment::Center)
            .style(theme::content_border());

        let inner = content_block.inner(chunks[1]);
        content_block.render(chunks[1], frame);

        self.screens.view(self.current_screen, frame, inner);

        if self.help_visible {
            let bindings = self.current_screen_keybindings();
            chrome::render_help_overlay(self.current_screen, &bindings, frame, area);
        }

        let view_state = self.screens.comparison.state();
        let status_state = StatusBarState {
            current_screen: self.current_screen,
            screen_title: self.current_screen.title(),
            screen_index: self.current_screen.index(),
            screen_count: ScreenId::ALL.len(),
            display_mode: view_state.display_mode(),
            playing: view_state.is_playing(),
            elapsed: view_state.elapsed(),
            terminal_width: self.terminal_width,
            terminal_height: self.terminal_height,
        };
        chrome::render_status_bar(&status_state, frame, chunks[2]);
    }

    fn subscriptions(&self) -> Vec<Box<dyn Subscription<Self::Message>>> {
        let mut subs: Vec<Box<dyn Subscription<Self::Message>>> = Vec::new();
        if let Some(interval) = self.screens.comparison.timer_interval() {
            subs.push(Box::new(Every::with_id(PLAYBACK_TIMER_ID, interval, || {
                AppMsg::PlaybackTick
            })));
        }
        if self.exit_after_ms > 0 {
            subs.push(Box::new(Every::with_id(
                EXIT_TIMER_ID,
                Duration::from_millis(self.exit_after_ms),
                || AppMsg::Quit,
            )));
        }
        subs
    }
}
