//! Property-based invariant tests for the interactive comparison screen.
//!
//! 1. Any interleaving of keys, clicks, ticks, and renders never panics.
//! 2. The playback timer is declared exactly while playback runs.
//! 3. Selection never points at a slot that does not exist.
//! 4. Keyboard focus always resolves to a visible slot.
//! 5. Every cached slot rectangle lies inside the rendered area.

use ftui_core::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ftui_core::geometry::Rect;
use ftui_render::frame::Frame;
use ftui_render::grapheme_pool::GraphemePool;
use proptest::prelude::*;
use storyboard_core::{Dataset, SlotRef};
use storyboard_showcase::screens::Screen;
use storyboard_showcase::screens::comparison::{ComparisonScreen, visible_slots};

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Step {
    Key(KeyCode),
    Click(u16, u16),
    Tick,
    Render(u16, u16),
}

fn key_strategy() -> impl Strategy<Value = KeyCode> {
    prop::sample::select(vec![
        KeyCode::Char('1'),
        KeyCode::Char('2'),
        KeyCode::Char('3'),
        KeyCode::Char('s'),
        KeyCode::Char('d'),
        KeyCode::Char('t'),
        KeyCode::Char(' '),
        KeyCode::Char('p'),
        KeyCode::Char('h'),
        KeyCode::Char('l'),
        KeyCode::Char('x'),
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::Enter,
        KeyCode::Escape,
    ])
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => key_strategy().prop_map(Step::Key),
        3 => (0u16..200, 0u16..60).prop_map(|(x, y)| Step::Click(x, y)),
        4 => Just(Step::Tick),
        2 => (1u16..200, 1u16..60).prop_map(|(w, h)| Step::Render(w, h)),
    ]
}

fn render(screen: &ComparisonScreen, width: u16, height: u16) {
    let mut pool = GraphemePool::new();
    let mut frame = Frame::new(width, height, &mut pool);
    screen.view(&mut frame, Rect::new(0, 0, width, height));
}

fn all_slots() -> Vec<SlotRef> {
    Dataset::ALL
        .iter()
        .flat_map(|&d| (0..d.slots().len()).map(move |i| SlotRef::new(d, i)))
        .collect()
}

// ═════════════════════════════════════════════════════════════════════════
// 1-4. Interaction sequences keep the screen consistent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn interaction_sequences_stay_consistent(steps in prop::collection::vec(step_strategy(), 0..120)) {
        let mut screen = ComparisonScreen::new();
        for step in steps {
            match step {
                Step::Key(code) => {
                    screen.update(&Event::Key(KeyEvent::new(code)));
                }
                Step::Click(x, y) => {
                    screen.update(&Event::Mouse(MouseEvent::new(
                        MouseEventKind::Down(MouseButton::Left),
                        x,
                        y,
                    )));
                }
                Step::Tick => {
                    screen.tick();
                }
                Step::Render(w, h) => render(&screen, w, h),
            }

            let state = screen.state();
            prop_assert_eq!(screen.timer_interval().is_some(), state.is_playing());
            if let Some(selected) = state.selected() {
                prop_assert!(selected.slot().is_some(), "dangling selection {:?}", selected);
            }
            let focused = screen.focused();
            prop_assert!(focused.is_some());
            prop_assert!(visible_slots(state.display_mode()).contains(&focused.unwrap()));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Hit rectangles stay inside the frame
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn slot_rects_fit_render_area(width in 1u16..220, height in 1u16..70) {
        let screen = ComparisonScreen::new();
        render(&screen, width, height);
        for slot in all_slots() {
            if let Some(rect) = screen.slot_rect(slot) {
                prop_assert!(rect.right() <= width, "{:?} overflows width {}", rect, width);
                prop_assert!(rect.bottom() <= height, "{:?} overflows height {}", rect, height);
                prop_assert!(!rect.is_empty());
            }
        }
    }
}
