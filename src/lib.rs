//! quadnav - keyboard-driven pointer navigation
//!
//! The screen is narrowed down by repeated bisection until the target is
//! covered, then the pointer is warped there and a click is synthesized.
//! State flows through an Elm-style loop: [`Msg`] in, [`Coordinator`]
//! update, [`Cmd`] out.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod coordinator;
pub mod fs_watcher;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod monitor;
pub mod platform;
pub mod runtime;
pub mod sequencer;
pub mod tracing;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::Settings;
pub use coordinator::Coordinator;
pub use messages::Msg;
pub use runtime::Runtime;
