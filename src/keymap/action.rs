//! Action enum representing every semantic operation a key can trigger
//!
//! A binding maps to an ordered list of actions which the sequencer
//! executes left to right.

use std::fmt;
use std::str::FromStr;

use crate::model::Direction;
use crate::platform::MouseButton;

/// All actions that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // ========================================================================
    // Selection
    // ========================================================================
    /// Halve the selection, keeping the half toward the direction (`up`, ...)
    Bisect(Direction),
    /// Same effect as `Bisect`, bound separately (`cut-up`, ...)
    Cut(Direction),
    /// Translate the selection without resizing it (`move-up`, ...)
    Move(Direction),
    /// Select the full monitor again
    Reset,

    // ========================================================================
    // Pointer
    // ========================================================================
    /// Move the pointer to the selection center
    Warp,
    /// Warp, left-click at the selection center, then end the session
    Click,
    /// Click at the current pointer position (`click-1/2/3`)
    ClickPointer(MouseButton),
    ScrollUp,
    ScrollDown,

    // ========================================================================
    // Session
    // ========================================================================
    /// Toggle the navigation session
    Start,
    End,
    Quit,
    /// Rebuild the key binding table
    Reload,
    /// Move the session to the adjacent monitor (`monitor-left`, ...)
    Monitor(Direction),

    // ========================================================================
    // Reserved: accepted in bindings, no effect
    // ========================================================================
    Grid,
    GridNav,
    HistoryBack,
    Record,
    Playback,
    WindowZoom,
    CursorZoom,
    Ignore,
}

impl Action {
    /// Canonical name as written in binding files
    pub fn name(self) -> String {
        match self {
            Action::Bisect(dir) => dir.name().to_string(),
            Action::Cut(dir) => format!("cut-{}", dir),
            Action::Move(dir) => format!("move-{}", dir),
            Action::Reset => "reset".to_string(),
            Action::Warp => "warp".to_string(),
            Action::Click => "click".to_string(),
            Action::ClickPointer(button) => format!("click-{}", button.number()),
            Action::ScrollUp => "scroll-up".to_string(),
            Action::ScrollDown => "scroll-down".to_string(),
            Action::Start => "start".to_string(),
            Action::End => "end".to_string(),
            Action::Quit => "quit".to_string(),
            Action::Reload => "reload".to_string(),
            Action::Monitor(dir) => format!("monitor-{}", dir),
            Action::Grid => "grid".to_string(),
            Action::GridNav => "grid-nav".to_string(),
            Action::HistoryBack => "history-back".to_string(),
            Action::Record => "record".to_string(),
            Action::Playback => "playback".to_string(),
            Action::WindowZoom => "windowzoom".to_string(),
            Action::CursorZoom => "cursorzoom".to_string(),
            Action::Ignore => "ignore".to_string(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Parse an action name from a binding file
///
/// Names are case-insensitive. The older `click 1` spelling is accepted for
/// `click-1` (and likewise for 2 and 3).
impl FromStr for Action {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_lowercase();

        if let Ok(dir) = normalized.parse::<Direction>() {
            return Ok(Action::Bisect(dir));
        }
        if let Some(rest) = normalized.strip_prefix("cut-") {
            return rest.parse().map(Action::Cut);
        }
        if let Some(rest) = normalized.strip_prefix("move-") {
            return rest.parse().map(Action::Move);
        }
        if let Some(rest) = normalized.strip_prefix("monitor-") {
            return rest.parse().map(Action::Monitor);
        }

        match normalized.as_str() {
            "reset" => Ok(Action::Reset),
            "warp" => Ok(Action::Warp),
            "click" => Ok(Action::Click),
            "click-1" | "click 1" => Ok(Action::ClickPointer(MouseButton::Left)),
            "click-2" | "click 2" => Ok(Action::ClickPointer(MouseButton::Right)),
            "click-3" | "click 3" => Ok(Action::ClickPointer(MouseButton::Middle)),
            "scroll-up" => Ok(Action::ScrollUp),
            "scroll-down" => Ok(Action::ScrollDown),
            "start" => Ok(Action::Start),
            "end" => Ok(Action::End),
            "quit" => Ok(Action::Quit),
            "reload" => Ok(Action::Reload),
            "grid" => Ok(Action::Grid),
            "grid-nav" => Ok(Action::GridNav),
            "history-back" => Ok(Action::HistoryBack),
            "record" => Ok(Action::Record),
            "playback" => Ok(Action::Playback),
            "windowzoom" => Ok(Action::WindowZoom),
            "cursorzoom" => Ok(Action::CursorZoom),
            "ignore" => Ok(Action::Ignore),
            _ => Err(()),
        }
    }
}
