#![forbid(unsafe_code)]

//! Integration tests for global shortcuts, tab navigation, and the help overlay.
//!
//! Run: `cargo test -p storyboard-showcase --test app_navigation_e2e`

use ftui_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ftui_render::frame::Frame;
use ftui_render::grapheme_pool::GraphemePool;
use ftui_runtime::{Cmd, Model};
use storyboard_showcase::app::{AppModel, AppMsg, ScreenId};

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers: Modifiers::NONE,
        kind: KeyEventKind::Press,
    })
}

fn press_mod(code: KeyCode, modifiers: Modifiers) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
    })
}

fn left_click(x: u16, y: u16) -> Event {
    Event::Mouse(MouseEvent::new(
        MouseEventKind::Down(MouseButton::Left),
        x,
        y,
    ))
}

fn render(app: &AppModel, width: u16, height: u16) -> Vec<String> {
    let mut pool = GraphemePool::new();
    let mut frame = Frame::new(width, height, &mut pool);
    app.view(&mut frame);
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
                .collect()
        })
        .collect()
}

#[test]
fn starts_on_comparison() {
    let app = AppModel::new();
    assert_eq!(app.current_screen, ScreenId::Comparison);
    assert!(!app.help_visible);
}

#[test]
fn tab_and_back_tab_cycle_screens() {
    let mut app = AppModel::new();
    app.update(AppMsg::from(press(KeyCode::Tab)));
    assert_eq!(app.current_screen, ScreenId::Impact);
    app.update(AppMsg::from(press(KeyCode::BackTab)));
    app.update(AppMsg::from(press(KeyCode::BackTab)));
    assert_eq!(app.current_screen, ScreenId::Roadmap);
}

#[test]
fn function_keys_jump_to_screens() {
    let mut app = AppModel::new();
    for (n, &id) in ScreenId::ALL.iter().enumerate() {
        app.update(AppMsg::from(press(KeyCode::F(n as u8 + 1))));
        assert_eq!(app.current_screen, id);
    }
    app.update(AppMsg::from(press(KeyCode::F(9))));
    assert_eq!(app.current_screen, ScreenId::Roadmap, "F9 is unbound");
}

#[test]
fn q_and_ctrl_c_quit() {
    let mut app = AppModel::new();
    assert!(matches!(
        app.update(AppMsg::from(press(KeyCode::Char('q')))),
        Cmd::Quit
    ));
    assert!(matches!(
        app.update(AppMsg::from(press_mod(KeyCode::Char('c'), Modifiers::CTRL))),
        Cmd::Quit
    ));
}

#[test]
fn question_mark_toggles_help() {
    let mut app = AppModel::new();
    app.update(AppMsg::from(press(KeyCode::Char('?'))));
    assert!(app.help_visible);
    app.update(AppMsg::from(press(KeyCode::Char('?'))));
    assert!(!app.help_visible);
}

#[test]
fn help_is_modal_and_esc_closes_it() {
    let mut app = AppModel::new();
    app.update(AppMsg::from(press(KeyCode::Char('?'))));

    app.update(AppMsg::from(press(KeyCode::Tab)));
    app.update(AppMsg::from(press(KeyCode::Char(' '))));
    assert_eq!(app.current_screen, ScreenId::Comparison);
    assert!(!app.screens.comparison.state().is_playing());

    app.update(AppMsg::from(press(KeyCode::Escape)));
    assert!(!app.help_visible);
}

#[test]
fn esc_with_help_open_does_not_reach_screen() {
    let mut app = AppModel::new();
    app.update(AppMsg::from(press(KeyCode::Enter)));
    assert!(app.screens.comparison.state().selected().is_some());

    app.update(AppMsg::from(press(KeyCode::Char('?'))));
    app.update(AppMsg::from(press(KeyCode::Escape)));
    assert!(!app.help_visible);
    assert!(
        app.screens.comparison.state().selected().is_some(),
        "first Esc only closes help"
    );

    app.update(AppMsg::from(press(KeyCode::Escape)));
    assert!(app.screens.comparison.state().selected().is_none());
}

#[test]
fn clicking_a_tab_switches_screen() {
    let mut app = AppModel::new();
    let rows = render(&app, 120, 40);
    let x = rows[0].find("F7: FAQ").expect("FAQ tab visible");
    app.update(AppMsg::from(left_click(x as u16 + 1, 0)));
    assert_eq!(app.current_screen, ScreenId::Faq);
}

#[test]
fn resize_is_recorded_and_shown() {
    let mut app = AppModel::new();
    app.update(AppMsg::from(Event::Resize {
        width: 132,
        height: 43,
    }));
    assert_eq!((app.terminal_width, app.terminal_height), (132, 43));
    let rows = render(&app, 132, 43);
    assert!(rows[42].contains("132x43"));
}

#[test]
fn chrome_renders_titles() {
    let mut app = AppModel::new();
    let rows = render(&app, 100, 30);
    assert!(rows[0].contains("F1: Compare"));
    assert!(rows[1].contains("Execution Comparison"));
    assert!(rows[29].contains("Split View"));

    app.update(AppMsg::SwitchScreen(ScreenId::Roadmap));
    let rows = render(&app, 100, 30);
    assert!(rows[1].contains("Roadmap"));
}

#[test]
fn help_overlay_shows_screen_bindings() {
    let mut app = AppModel::new();
    app.update(AppMsg::ToggleHelp);
    let text = render(&app, 100, 40).join("\n");
    assert!(text.contains("Keyboard Shortcuts"));
    assert!(text.contains("Play / pause timeline"));
}

#[test]
fn every_screen_renders_at_common_sizes() {
    let mut app = AppModel::new();
    for &id in ScreenId::ALL {
        app.update(AppMsg::SwitchScreen(id));
        for (w, h) in [(160, 50), (120, 40), (80, 24), (40, 12), (1, 1)] {
            render(&app, w, h);
        }
    }
}

#[test]
fn chrome_labels_come_from_screen_id() {
    let mut app = AppModel::new();
    for &id in ScreenId::ALL {
        app.update(AppMsg::SwitchScreen(id));
        let rows = render(&app, 140, 40);
        assert!(rows[0].contains(id.tab_label()), "{id:?} tab");
        assert!(rows[1].contains(id.title()), "{id:?} border title");
    }
}

#[test]
fn deep_dive_screens_are_reachable_by_function_key() {
    let mut app = AppModel::new();

    app.update(AppMsg::from(press(KeyCode::F(4))));
    assert_eq!(app.current_screen, ScreenId::Markets);
    let text = render(&app, 120, 40).join("\n");
    assert!(text.contains("Blockspace Auction Comparison"));
    assert!(text.contains("The MEV Problem"));

    app.update(AppMsg::from(press(KeyCode::F(5))));
    assert_eq!(app.current_screen, ScreenId::UseCases);
    let text = render(&app, 140, 40).join("\n");
    assert!(text.contains("Finance & DeFi"));
    assert!(text.contains("DeFi Liquidation Bot"));

    app.update(AppMsg::from(press(KeyCode::F(6))));
    assert_eq!(app.current_screen, ScreenId::Technical);
    let text = render(&app, 140, 40).join("\n");
    assert!(text.contains("Coordination Engine"));
    assert!(text.contains("Lite Mode"));
}

#[test]
fn technical_focus_moves_with_arrows() {
    let mut app = AppModel::new();
    app.update(AppMsg::SwitchScreen(ScreenId::Technical));
    app.update(AppMsg::from(press(KeyCode::Right)));
    app.update(AppMsg::from(press(KeyCode::Right)));
    assert_eq!(app.screens.technical.focused(), 2);
    assert!(!app.screens.comparison.state().is_playing());
}
