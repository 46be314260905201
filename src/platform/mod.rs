//! Platform collaborators
//!
//! The navigator never talks to the OS directly. Everything that touches the
//! real desktop goes through one of these traits:
//!
//! - [`GlobalShortcutListener`]: system-wide hotkeys that start a session
//! - [`KeyInterceptor`]: exclusive keyboard capture while a session is open
//! - [`InputInjector`]: synthetic pointer moves, clicks and scrolls
//! - [`DisplayTopology`]: monitor layout and coordinate conversion
//! - [`OverlayRenderer`]: the on-screen selection overlay
//!
//! [`HeadlessPlatform`] implements all of them in process and records every
//! effect, which is what the CLI simulator and the tests drive.

mod headless;

use std::fmt;

use thiserror::Error;

use crate::keymap::Keystroke;
use crate::model::{Point, Rect};
use crate::monitor::Monitor;

pub use headless::{Collaborator, HeadlessPlatform, PlatformEvent, RecordedEvent};

/// Mouse buttons the injector can press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// Button number as used in `click-N` action names
    pub const fn number(self) -> u8 {
        match self {
            MouseButton::Left => 1,
            MouseButton::Right => 2,
            MouseButton::Middle => 3,
        }
    }

    /// The primary button gets the longer settle delay
    pub const fn is_primary(self) -> bool {
        matches!(self, MouseButton::Left)
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MouseButton::Left => f.write_str("left"),
            MouseButton::Right => f.write_str("right"),
            MouseButton::Middle => f.write_str("middle"),
        }
    }
}

/// A collaborator could not perform the request
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The service is missing, denied or not yet ready
    #[error("{0} unavailable")]
    Unavailable(String),
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Synthesizes pointer input. Points are in the injector's screen space.
pub trait InputInjector {
    fn move_to(&mut self, point: Point) -> Result<(), PlatformError>;
    fn button_down(&mut self, button: MouseButton, at: Point) -> Result<(), PlatformError>;
    fn button_up(&mut self, button: MouseButton, at: Point) -> Result<(), PlatformError>;
    /// Positive `lines` scroll up
    fn scroll(&mut self, at: Point, lines: i32) -> Result<(), PlatformError>;
    fn pointer_position(&self) -> Result<Point, PlatformError>;
}

/// Monitor layout in desktop coordinates
pub trait DisplayTopology {
    fn monitors(&self) -> Result<Vec<Monitor>, PlatformError>;

    /// The monitor whose frame contains `point`
    fn monitor_at(&self, point: Point) -> Result<Option<Monitor>, PlatformError> {
        Ok(self
            .monitors()?
            .into_iter()
            .find(|m| m.frame.contains(point)))
    }

    /// Convert a desktop point into the injector's coordinate space
    fn to_screen(&self, point: Point) -> Point;
}

/// Draws the selection on top of everything else
pub trait OverlayRenderer {
    fn show(&mut self, monitor: &Monitor) -> Result<(), PlatformError>;
    fn redraw(&mut self, selection: Rect, bounds: Rect) -> Result<(), PlatformError>;
    fn hide(&mut self) -> Result<(), PlatformError>;
}

/// Captures every key press while a session is open
pub trait KeyInterceptor {
    fn install(&mut self, monitor: &Monitor) -> Result<(), PlatformError>;
    fn release(&mut self) -> Result<(), PlatformError>;
}

/// System-wide hotkeys, active while no session is open
pub trait GlobalShortcutListener {
    /// Replace the registered set with `keystrokes`
    fn register(&mut self, keystrokes: &[Keystroke]) -> Result<(), PlatformError>;
}

/// Everything the coordinator needs from the host
pub trait Platform:
    InputInjector + DisplayTopology + OverlayRenderer + KeyInterceptor + GlobalShortcutListener
{
}

impl<T> Platform for T where
    T: InputInjector + DisplayTopology + OverlayRenderer + KeyInterceptor + GlobalShortcutListener
{
}
