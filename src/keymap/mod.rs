//! Configurable key binding system
//!
//! This module provides a data-driven binding table that:
//! - Maps an exact (key, modifiers) combination to an ordered action list
//! - Starts from a built-in vi-like table
//! - Applies user override lines on top, last write wins
//!
//! # Architecture
//!
//! ```text
//! key event → Keystroke → KeyBindingTable::resolve() → &[Action] → ActionSequencer
//! ```
//!
//! # Loading
//!
//! ```ignore
//! // Defaults only
//! let table = KeyBindingTable::with_defaults();
//!
//! // Defaults plus the user's bindings file
//! let (table, diagnostics) = KeyBindingTable::load(&FileSource::new(path));
//! ```

mod action;
mod binding;
mod config;
mod defaults;
mod source;
mod table;
mod types;

pub use action::Action;
pub use binding::KeyBinding;
pub use config::{
    load_bindings_file, parse_action_list, parse_binding_line, parse_bindings, parse_key_spec,
    ConfigParseError, ParsedBindings,
};
pub use defaults::{default_bindings, default_bindings_text};
pub use source::{BindingSource, FileSource, StaticSource};
pub use table::KeyBindingTable;
pub use types::{KeyCode, Keystroke, Modifiers};
