//! In-process platform that records every effect instead of touching the OS

use std::collections::HashSet;
use std::fmt;
use std::time::Instant;

use crate::keymap::Keystroke;
use crate::model::{Point, Rect};
use crate::monitor::{Monitor, MonitorId};

use super::{
    DisplayTopology, GlobalShortcutListener, InputInjector, KeyInterceptor, MouseButton,
    OverlayRenderer, PlatformError,
};

/// Individual collaborators that can be switched off to simulate failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collaborator {
    Injector,
    Topology,
    Overlay,
    Interceptor,
    Shortcuts,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Collaborator::Injector => "input injector",
            Collaborator::Topology => "display topology",
            Collaborator::Overlay => "overlay renderer",
            Collaborator::Interceptor => "key interceptor",
            Collaborator::Shortcuts => "global shortcut listener",
        };
        f.write_str(name)
    }
}

/// An observable side effect
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformEvent {
    MoveTo(Point),
    ButtonDown(MouseButton, Point),
    ButtonUp(MouseButton, Point),
    Scroll { at: Point, lines: i32 },
    OverlayShown(MonitorId),
    OverlayRedrawn { selection: Rect, bounds: Rect },
    OverlayHidden,
    InterceptInstalled(MonitorId),
    InterceptReleased,
    ShortcutsRegistered(Vec<Keystroke>),
}

impl fmt::Display for PlatformEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformEvent::MoveTo(p) => write!(f, "move {}", p),
            PlatformEvent::ButtonDown(b, p) => write!(f, "{} down {}", b, p),
            PlatformEvent::ButtonUp(b, p) => write!(f, "{} up {}", b, p),
            PlatformEvent::Scroll { at, lines } => write!(f, "scroll {:+} {}", lines, at),
            PlatformEvent::OverlayShown(id) => write!(f, "overlay shown on {}", id),
            PlatformEvent::OverlayRedrawn { selection, .. } => {
                write!(f, "overlay {}", selection)
            }
            PlatformEvent::OverlayHidden => f.write_str("overlay hidden"),
            PlatformEvent::InterceptInstalled(id) => write!(f, "intercepting keys on {}", id),
            PlatformEvent::InterceptReleased => f.write_str("key interception released"),
            PlatformEvent::ShortcutsRegistered(keys) => {
                let names: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
                write!(f, "shortcuts [{}]", names.join(", "))
            }
        }
    }
}

/// A platform effect with the instant it happened
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedEvent {
    pub at: Instant,
    pub event: PlatformEvent,
}

/// Recording implementation of every platform trait
#[derive(Debug)]
pub struct HeadlessPlatform {
    monitors: Vec<Monitor>,
    pointer: Point,
    unavailable: HashSet<Collaborator>,
    overlay: Option<MonitorId>,
    intercepting: Option<MonitorId>,
    shortcuts: Vec<Keystroke>,
    events: Vec<RecordedEvent>,
    created: Instant,
}

impl HeadlessPlatform {
    /// A platform with the given monitors; the pointer starts at the center of
    /// the first one
    pub fn new(monitors: Vec<Monitor>) -> Self {
        let pointer = monitors
            .first()
            .map(|m| m.frame.center())
            .unwrap_or_default();
        Self {
            monitors,
            pointer,
            unavailable: HashSet::new(),
            overlay: None,
            intercepting: None,
            shortcuts: Vec::new(),
            events: Vec::new(),
            created: Instant::now(),
        }
    }

    /// Monitors numbered from 1 in the given order
    pub fn from_frames(frames: &[Rect]) -> Self {
        let monitors = frames
            .iter()
            .enumerate()
            .map(|(idx, frame)| Monitor::new(MonitorId(idx as u32 + 1), *frame))
            .collect();
        Self::new(monitors)
    }

    /// Two 1920x1080 monitors side by side
    pub fn dual_hd() -> Self {
        Self::from_frames(&[
            Rect::new(0.0, 0.0, 1920.0, 1080.0),
            Rect::new(1920.0, 0.0, 1920.0, 1080.0),
        ])
    }

    /// Place the pointer without recording an event
    pub fn with_pointer(mut self, pointer: Point) -> Self {
        self.pointer = pointer;
        self
    }

    /// Make a collaborator fail every call until re-enabled
    pub fn set_unavailable(&mut self, collaborator: Collaborator, unavailable: bool) {
        if unavailable {
            self.unavailable.insert(collaborator);
        } else {
            self.unavailable.remove(&collaborator);
        }
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// When this platform was created; event offsets are measured from here
    pub fn created(&self) -> Instant {
        self.created
    }

    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Recorded effects without their timestamps
    pub fn effects(&self) -> Vec<PlatformEvent> {
        self.events.iter().map(|e| e.event.clone()).collect()
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Monitor the overlay is currently shown on
    pub fn overlay_monitor(&self) -> Option<MonitorId> {
        self.overlay
    }

    /// Monitor key interception is installed for
    pub fn intercepting(&self) -> Option<MonitorId> {
        self.intercepting
    }

    pub fn registered_shortcuts(&self) -> &[Keystroke] {
        &self.shortcuts
    }

    fn check(&self, collaborator: Collaborator) -> Result<(), PlatformError> {
        if self.unavailable.contains(&collaborator) {
            return Err(PlatformError::Unavailable(collaborator.to_string()));
        }
        Ok(())
    }

    fn record(&mut self, event: PlatformEvent) {
        tracing::trace!("headless: {}", event);
        self.events.push(RecordedEvent {
            at: Instant::now(),
            event,
        });
    }
}

impl InputInjector for HeadlessPlatform {
    fn move_to(&mut self, point: Point) -> Result<(), PlatformError> {
        self.check(Collaborator::Injector)?;
        self.pointer = point;
        self.record(PlatformEvent::MoveTo(point));
        Ok(())
    }

    fn button_down(&mut self, button: MouseButton, at: Point) -> Result<(), PlatformError> {
        self.check(Collaborator::Injector)?;
        self.record(PlatformEvent::ButtonDown(button, at));
        Ok(())
    }

    fn button_up(&mut self, button: MouseButton, at: Point) -> Result<(), PlatformError> {
        self.check(Collaborator::Injector)?;
        self.record(PlatformEvent::ButtonUp(button, at));
        Ok(())
    }

    fn scroll(&mut self, at: Point, lines: i32) -> Result<(), PlatformError> {
        self.check(Collaborator::Injector)?;
        self.record(PlatformEvent::Scroll { at, lines });
        Ok(())
    }

    fn pointer_position(&self) -> Result<Point, PlatformError> {
        self.check(Collaborator::Injector)?;
        Ok(self.pointer)
    }
}

impl DisplayTopology for HeadlessPlatform {
    fn monitors(&self) -> Result<Vec<Monitor>, PlatformError> {
        self.check(Collaborator::Topology)?;
        Ok(self.monitors.clone())
    }

    // Desktop and injector space coincide here
    fn to_screen(&self, point: Point) -> Point {
        point
    }
}

impl OverlayRenderer for HeadlessPlatform {
    fn show(&mut self, monitor: &Monitor) -> Result<(), PlatformError> {
        self.check(Collaborator::Overlay)?;
        self.overlay = Some(monitor.id);
        self.record(PlatformEvent::OverlayShown(monitor.id));
        Ok(())
    }

    fn redraw(&mut self, selection: Rect, bounds: Rect) -> Result<(), PlatformError> {
        self.check(Collaborator::Overlay)?;
        self.record(PlatformEvent::OverlayRedrawn { selection, bounds });
        Ok(())
    }

    fn hide(&mut self) -> Result<(), PlatformError> {
        self.check(Collaborator::Overlay)?;
        self.overlay = None;
        self.record(PlatformEvent::OverlayHidden);
        Ok(())
    }
}

impl KeyInterceptor for HeadlessPlatform {
    fn install(&mut self, monitor: &Monitor) -> Result<(), PlatformError> {
        self.check(Collaborator::Interceptor)?;
        self.intercepting = Some(monitor.id);
        self.record(PlatformEvent::InterceptInstalled(monitor.id));
        Ok(())
    }

    fn release(&mut self) -> Result<(), PlatformError> {
        self.check(Collaborator::Interceptor)?;
        self.intercepting = None;
        self.record(PlatformEvent::InterceptReleased);
        Ok(())
    }
}

impl GlobalShortcutListener for HeadlessPlatform {
    fn register(&mut self, keystrokes: &[Keystroke]) -> Result<(), PlatformError> {
        self.check(Collaborator::Shortcuts)?;
        self.shortcuts = keystrokes.to_vec();
        self.record(PlatformEvent::ShortcutsRegistered(keystrokes.to_vec()));
        Ok(())
    }
}
