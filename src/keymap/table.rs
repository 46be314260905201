//! KeyBindingTable: the effective keystroke → action list mapping

use std::collections::HashMap;

use super::action::Action;
use super::binding::KeyBinding;
use super::config::{parse_bindings, ConfigParseError};
use super::defaults::default_bindings;
use super::source::BindingSource;
use super::types::Keystroke;

/// Ordered bindings plus a keystroke index
///
/// At most one binding exists per keystroke. Inserting a keystroke that is
/// already bound removes the old binding and appends the new one.
#[derive(Debug, Clone, Default)]
pub struct KeyBindingTable {
    bindings: Vec<KeyBinding>,
    lookup: HashMap<Keystroke, usize>,
}

impl KeyBindingTable {
    /// An empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// A table holding only the built-in defaults
    pub fn with_defaults() -> Self {
        Self::with_bindings(default_bindings())
    }

    /// A table built from the given bindings in order
    pub fn with_bindings(bindings: impl IntoIterator<Item = KeyBinding>) -> Self {
        let mut table = Self::new();
        for binding in bindings {
            table.insert(binding);
        }
        table
    }

    /// Defaults overlaid with override text, plus the diagnostics for every
    /// override line that was skipped
    pub fn build(override_text: Option<&str>) -> (Self, Vec<ConfigParseError>) {
        let mut table = Self::with_defaults();
        let Some(text) = override_text else {
            return (table, Vec::new());
        };

        let parsed = parse_bindings(text);
        for binding in parsed.bindings {
            table.insert(binding);
        }
        (table, parsed.diagnostics)
    }

    /// Build a table from a binding source
    ///
    /// A source that cannot be read is logged and treated as having no
    /// overrides; diagnostics have already been logged by the parser.
    pub fn load(source: &dyn BindingSource) -> (Self, Vec<ConfigParseError>) {
        let text = match source.read_overrides() {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to read bindings from {}: {}", source.describe(), e);
                None
            }
        };

        let (table, diagnostics) = Self::build(text.as_deref());
        tracing::info!(
            "Loaded {} bindings from {} ({} skipped lines)",
            table.len(),
            source.describe(),
            diagnostics.len()
        );
        (table, diagnostics)
    }

    /// Build a fresh table from the source and swap it in
    pub fn reload(&mut self, source: &dyn BindingSource) -> Vec<ConfigParseError> {
        let (table, diagnostics) = Self::load(source);
        *self = table;
        diagnostics
    }

    /// Install a binding, replacing any binding for the same keystroke
    pub fn insert(&mut self, binding: KeyBinding) {
        if let Some(idx) = self.lookup.remove(&binding.keystroke) {
            tracing::debug!(
                "Replacing binding {} with {}",
                self.bindings[idx].to_config_line(),
                binding.actions_string()
            );
            self.bindings.remove(idx);
            self.reindex();
        }
        self.lookup.insert(binding.keystroke, self.bindings.len());
        self.bindings.push(binding);
    }

    fn reindex(&mut self) {
        self.lookup = self
            .bindings
            .iter()
            .enumerate()
            .map(|(idx, b)| (b.keystroke, idx))
            .collect();
    }

    /// The actions bound to an exact (key, modifiers) combination
    ///
    /// `None` means the keystroke is not ours and should pass through.
    pub fn resolve(&self, keystroke: &Keystroke) -> Option<&[Action]> {
        self.lookup
            .get(keystroke)
            .map(|&idx| self.bindings[idx].actions.as_slice())
    }

    /// Bindings in table order
    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    /// Keystrokes whose action list contains `start`
    pub fn start_bindings(&self) -> Vec<Keystroke> {
        self.bindings
            .iter()
            .filter(|b| b.is_start())
            .map(|b| b.keystroke)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
