//! Binding file parsing
//!
//! Each non-empty line that does not start with `#` has the form
//!
//! ```text
//! <key-spec> <action>[,<action>...]
//! ```
//!
//! where `<key-spec>` is zero or more modifier prefixes (`ctrl+`, `shift+`,
//! `alt+`/`option+`, `cmd+`/`super+`) directly followed by a key name.
//! A bad line is reported and skipped; it never aborts the rest of the file.

use std::path::Path;

use thiserror::Error;

use super::action::Action;
use super::binding::KeyBinding;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Modifier prefixes accepted in a key spec
const MODIFIER_PREFIXES: &[(&str, Modifiers)] = &[
    ("ctrl+", Modifiers::CONTROL),
    ("control+", Modifiers::CONTROL),
    ("shift+", Modifiers::SHIFT),
    ("alt+", Modifiers::OPTION),
    ("option+", Modifiers::OPTION),
    ("cmd+", Modifiers::COMMAND),
    ("super+", Modifiers::COMMAND),
];

/// Why a single binding line was skipped
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigParseError {
    #[error("line {line}: unknown key '{key}'")]
    UnknownKey { line: usize, key: String },
    #[error("line {line}: unknown action '{action}'")]
    UnknownAction { line: usize, action: String },
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

impl ConfigParseError {
    /// 1-based line number of the offending line
    pub fn line(&self) -> usize {
        match self {
            ConfigParseError::UnknownKey { line, .. }
            | ConfigParseError::UnknownAction { line, .. }
            | ConfigParseError::Malformed { line, .. } => *line,
        }
    }
}

/// Result of parsing a binding file: the valid bindings in file order plus
/// a diagnostic for every skipped line
#[derive(Debug, Clone, Default)]
pub struct ParsedBindings {
    pub bindings: Vec<KeyBinding>,
    pub diagnostics: Vec<ConfigParseError>,
}

/// Parse override text into bindings, collecting diagnostics for skipped lines
pub fn parse_bindings(text: &str) -> ParsedBindings {
    let mut parsed = ParsedBindings::default();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match parse_binding_line(line, idx + 1) {
            Ok(binding) => parsed.bindings.push(binding),
            Err(e) => {
                tracing::warn!("Skipping binding: {}", e);
                parsed.diagnostics.push(e);
            }
        }
    }

    parsed
}

/// Read and parse a binding file
pub fn load_bindings_file(path: &Path) -> std::io::Result<ParsedBindings> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_bindings(&content))
}

/// Parse one trimmed, non-comment line
pub fn parse_binding_line(line: &str, line_no: usize) -> Result<KeyBinding, ConfigParseError> {
    let Some((key_spec, actions_str)) = line.split_once(char::is_whitespace) else {
        return Err(ConfigParseError::Malformed {
            line: line_no,
            reason: format!("expected '<key> <action>[,<action>...]', got '{}'", line),
        });
    };

    let keystroke = parse_key_spec(key_spec).map_err(|key| ConfigParseError::UnknownKey {
        line: line_no,
        key,
    })?;

    let actions = parse_action_list(actions_str).map_err(|action| {
        ConfigParseError::UnknownAction {
            line: line_no,
            action,
        }
    })?;

    if actions.is_empty() {
        return Err(ConfigParseError::Malformed {
            line: line_no,
            reason: format!("no actions for '{}'", key_spec),
        });
    }

    Ok(KeyBinding::new(keystroke, actions))
}

/// Parse a key spec like `ctrl+shift+semicolon`
///
/// On failure returns the part that is not a known key name.
pub fn parse_key_spec(spec: &str) -> Result<Keystroke, String> {
    let mut mods = Modifiers::NONE;
    let mut rest = spec;

    'prefixes: loop {
        for (prefix, modifier) in MODIFIER_PREFIXES {
            // Leave at least one character for the key name
            if rest.len() > prefix.len()
                && rest.is_char_boundary(prefix.len())
                && rest[..prefix.len()].eq_ignore_ascii_case(prefix)
            {
                mods = mods | *modifier;
                rest = &rest[prefix.len()..];
                continue 'prefixes;
            }
        }
        break;
    }

    KeyCode::from_name(rest)
        .map(|key| Keystroke::new(key, mods))
        .ok_or_else(|| rest.to_string())
}

/// Parse a comma-separated action list; empty entries are ignored
///
/// On failure returns the first unknown action name.
pub fn parse_action_list(list: &str) -> Result<Vec<Action>, String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|name| name.parse::<Action>().map_err(|_| name.to_string()))
        .collect()
}
