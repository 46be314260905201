//! Default key bindings
//!
//! A vi-like scheme: `h/j/k/l` and `w/a/s/d` bisect, Shift nudges, Ctrl
//! cut-bisects and Ctrl+Shift switches monitors. User override lines are
//! applied on top of this table.

use super::action::Action;
use super::binding::KeyBinding;
use super::types::{KeyCode, Keystroke, Modifiers};
use crate::model::Direction;
use crate::platform::MouseButton;

/// The two keys bound to each direction (wasd, hjkl)
const DIRECTION_KEYS: [(char, char, Direction); 4] = [
    ('w', 'k', Direction::Up),
    ('s', 'j', Direction::Down),
    ('a', 'h', Direction::Left),
    ('d', 'l', Direction::Right),
];

/// The built-in binding table, free of duplicate keystrokes
pub fn default_bindings() -> Vec<KeyBinding> {
    let none = Modifiers::NONE;
    let shift = Modifiers::SHIFT;
    let ctrl = Modifiers::CONTROL;
    let ctrl_shift = Modifiers::CONTROL | Modifiers::SHIFT;

    let mut bindings = Vec::new();

    // ====================================================================
    // Directional groups
    // ====================================================================
    let groups: [(Modifiers, fn(Direction) -> Action); 4] = [
        (none, Action::Bisect),
        (shift, Action::Move),
        (ctrl, Action::Cut),
        (ctrl_shift, Action::Monitor),
    ];
    for (mods, make) in groups {
        for (wasd, vi, direction) in DIRECTION_KEYS {
            bindings.push(bind(KeyCode::Char(wasd), mods, make(direction)));
            bindings.push(bind(KeyCode::Char(vi), mods, make(direction)));
        }
    }

    let click_and_end = vec![
        Action::Warp,
        Action::ClickPointer(MouseButton::Left),
        Action::End,
    ];

    bindings.extend([
        // ====================================================================
        // Clicking
        // ====================================================================
        bind_seq(KeyCode::Return, none, click_and_end.clone()),
        bind_seq(KeyCode::Enter, none, click_and_end.clone()),
        bind_seq(KeyCode::Space, none, click_and_end),
        bind(KeyCode::Char('1'), none, Action::ClickPointer(MouseButton::Left)),
        bind(KeyCode::Char('2'), none, Action::ClickPointer(MouseButton::Right)),
        bind(KeyCode::Char('3'), none, Action::ClickPointer(MouseButton::Middle)),
        bind(KeyCode::Char('m'), none, Action::Warp),

        // ====================================================================
        // Session
        // ====================================================================
        bind(KeyCode::Escape, none, Action::End),
        bind(KeyCode::Char('f'), none, Action::End),
        bind(KeyCode::Char('r'), none, Action::Reset),
        bind(KeyCode::Char('r'), ctrl_shift, Action::Reload),
        bind(KeyCode::Char('q'), none, Action::Quit),
        bind(KeyCode::Char(';'), ctrl, Action::Start),

        // ====================================================================
        // Scrolling
        // ====================================================================
        bind(KeyCode::Up, none, Action::ScrollUp),
        bind(KeyCode::Down, none, Action::ScrollDown),
        bind(KeyCode::Char('u'), none, Action::ScrollUp),
        bind(KeyCode::Char('u'), ctrl, Action::ScrollUp),

        // ====================================================================
        // Reserved
        // ====================================================================
        bind(KeyCode::Char('g'), none, Action::Grid),
        bind(KeyCode::Char('p'), none, Action::HistoryBack),
        bind(KeyCode::Char('e'), none, Action::Record),
        bind(KeyCode::Char(','), none, Action::WindowZoom),
        bind(KeyCode::Char('.'), none, Action::CursorZoom),
    ]);

    bindings
}

/// Helper to create a single-action binding
fn bind(key: KeyCode, mods: Modifiers, action: Action) -> KeyBinding {
    KeyBinding::single(Keystroke::new(key, mods), action)
}

/// Helper to create a multi-action binding
fn bind_seq(key: KeyCode, mods: Modifiers, actions: Vec<Action>) -> KeyBinding {
    KeyBinding::new(Keystroke::new(key, mods), actions)
}

/// Render the default table in binding-file syntax
pub fn default_bindings_text() -> String {
    let mut out = String::from("# quadnav default bindings\n");
    for binding in default_bindings() {
        out.push_str(&binding.to_config_line());
        out.push('\n');
    }
    out
}
