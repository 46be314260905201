//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use quadnav::keymap::{parse_key_spec, KeyCode, Keystroke, Modifiers, StaticSource};
use quadnav::model::Rect;
use quadnav::platform::{HeadlessPlatform, PlatformEvent};
use quadnav::{Coordinator, Msg, Runtime, Settings};

/// M1 at x∈[0,1920], M2 at x∈[1920,3840]
pub fn dual_monitors() -> Vec<Rect> {
    vec![
        Rect::new(0.0, 0.0, 1920.0, 1080.0),
        Rect::new(1920.0, 0.0, 1920.0, 1080.0),
    ]
}

/// Coordinator over a headless desktop with the given override text
pub fn test_coordinator(frames: &[Rect], overrides: &str) -> Coordinator<HeadlessPlatform> {
    Coordinator::new(
        HeadlessPlatform::from_frames(frames),
        Box::new(StaticSource::new(overrides)),
        Settings::default(),
    )
}

/// Runtime over a headless dual-monitor desktop
pub fn test_runtime(overrides: &str) -> Runtime<HeadlessPlatform> {
    Runtime::new(test_coordinator(&dual_monitors(), overrides))
}

pub fn start_key() -> Keystroke {
    Keystroke::new(KeyCode::Char(';'), Modifiers::CONTROL)
}

/// Parse a key spec, panicking on typos in the test itself
pub fn key(spec: &str) -> Keystroke {
    parse_key_spec(spec).unwrap_or_else(|k| panic!("bad key '{}' in test", k))
}

/// Open a session, then press each key and wait for any settle delay
pub fn press_all(runtime: &mut Runtime<HeadlessPlatform>, keys: &[&str]) {
    runtime.dispatch(Msg::Shortcut(start_key()));
    for spec in keys {
        runtime.dispatch(Msg::Key(key(spec)));
        runtime.run_until_idle();
    }
}

/// Current selection, panicking if no session is open
pub fn selection(runtime: &Runtime<HeadlessPlatform>) -> Rect {
    runtime
        .coordinator()
        .session()
        .expect("session should be open")
        .selection
        .current()
}

/// Recorded effects without timestamps
pub fn effects(runtime: &Runtime<HeadlessPlatform>) -> Vec<PlatformEvent> {
    runtime.coordinator().platform().effects()
}
