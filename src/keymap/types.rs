//! Core types for the keymap system: Keystroke, Modifiers, KeyCode

use std::fmt;

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CONTROL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const OPTION: Modifiers = Modifiers(0b0100); // Alt elsewhere
    pub const COMMAND: Modifiers = Modifiers(0b1000); // Super/Win elsewhere

    #[inline]
    pub const fn control(self) -> bool {
        self.0 & 0b0001 != 0
    }

    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b0010 != 0
    }

    #[inline]
    pub const fn option(self) -> bool {
        self.0 & 0b0100 != 0
    }

    #[inline]
    pub const fn command(self) -> bool {
        self.0 & 0b1000 != 0
    }

    /// Check if no modifiers are held
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Check if this contains all modifiers in other
    #[inline]
    pub const fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

/// Renders the config-file prefix form, e.g. `ctrl+shift+`
impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.control() {
            f.write_str("ctrl+")?;
        }
        if self.shift() {
            f.write_str("shift+")?;
        }
        if self.option() {
            f.write_str("alt+")?;
        }
        if self.command() {
            f.write_str("cmd+")?;
        }
        Ok(())
    }
}

/// A platform-independent symbolic key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyCode {
    /// A printable key (letters normalized to lowercase, digits, punctuation)
    Char(char),

    Return,
    /// The separate Enter key, distinct from Return
    Enter,
    Tab,
    Space,
    /// Backspace
    Delete,
    ForwardDelete,
    Escape,
    Help,

    Home,
    End,
    PageUp,
    PageDown,

    Up,
    Down,
    Left,
    Right,

    // Function keys
    F(u8), // F1-F20

    // Keypad
    Keypad(u8), // 0-9
    KeypadPeriod,
    KeypadMultiply,
    KeypadPlus,
    KeypadMinus,
    KeypadDivide,
    KeypadEnter,
    KeypadEquals,
    KeypadClear,
}

/// Named keys accepted in binding files, in canonical-name order
const NAMED_KEYS: &[(&str, KeyCode)] = &[
    ("equal", KeyCode::Char('=')),
    ("minus", KeyCode::Char('-')),
    ("leftbracket", KeyCode::Char('[')),
    ("rightbracket", KeyCode::Char(']')),
    ("quote", KeyCode::Char('\'')),
    ("semicolon", KeyCode::Char(';')),
    ("backslash", KeyCode::Char('\\')),
    ("comma", KeyCode::Char(',')),
    ("slash", KeyCode::Char('/')),
    ("period", KeyCode::Char('.')),
    ("grave", KeyCode::Char('`')),
    ("return", KeyCode::Return),
    ("enter", KeyCode::Enter),
    ("tab", KeyCode::Tab),
    ("space", KeyCode::Space),
    ("delete", KeyCode::Delete),
    ("forwarddelete", KeyCode::ForwardDelete),
    ("escape", KeyCode::Escape),
    ("help", KeyCode::Help),
    ("home", KeyCode::Home),
    ("end", KeyCode::End),
    ("pageup", KeyCode::PageUp),
    ("pagedown", KeyCode::PageDown),
    ("up", KeyCode::Up),
    ("down", KeyCode::Down),
    ("left", KeyCode::Left),
    ("right", KeyCode::Right),
    ("keypadperiod", KeyCode::KeypadPeriod),
    ("keypadmultiply", KeyCode::KeypadMultiply),
    ("keypadplus", KeyCode::KeypadPlus),
    ("keypadminus", KeyCode::KeypadMinus),
    ("keypaddivide", KeyCode::KeypadDivide),
    ("keypadenter", KeyCode::KeypadEnter),
    ("keypadequals", KeyCode::KeypadEquals),
    ("keypadclear", KeyCode::KeypadClear),
];

impl KeyCode {
    /// Look up a key by its symbolic name (case-insensitive)
    ///
    /// Single printable characters are accepted literally, so both `;` and
    /// `semicolon` name the same key.
    pub fn from_name(name: &str) -> Option<KeyCode> {
        let lower = name.to_ascii_lowercase();

        let mut chars = lower.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return c.is_ascii_graphic().then_some(KeyCode::Char(c));
        }

        if let Some((_, key)) = NAMED_KEYS.iter().find(|(n, _)| *n == lower) {
            return Some(*key);
        }

        if let Some(n) = lower.strip_prefix("keypad") {
            return match n.parse::<u8>() {
                Ok(d) if d <= 9 && n.len() == 1 => Some(KeyCode::Keypad(d)),
                _ => None,
            };
        }

        if let Some(n) = lower.strip_prefix('f') {
            return match n.parse::<u8>() {
                Ok(d) if (1..=20).contains(&d) && !n.starts_with('0') => Some(KeyCode::F(d)),
                _ => None,
            };
        }

        None
    }

    /// Canonical name as written in binding files
    pub fn name(self) -> String {
        if let Some((name, _)) = NAMED_KEYS.iter().find(|(_, k)| *k == self) {
            return (*name).to_string();
        }
        match self {
            KeyCode::Char(c) => c.to_string(),
            KeyCode::F(n) => format!("f{}", n),
            KeyCode::Keypad(n) => format!("keypad{}", n),
            // Every other variant is listed in NAMED_KEYS
            other => format!("{:?}", other).to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// A single keystroke: a key with modifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Keystroke {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Keystroke {
    /// Create a new keystroke
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    /// Create a keystroke with no modifiers
    pub const fn key(key: KeyCode) -> Self {
        Self {
            key,
            mods: Modifiers::NONE,
        }
    }

    /// Create a keystroke with a character key
    pub fn char(c: char) -> Self {
        Self {
            key: KeyCode::Char(c.to_ascii_lowercase()),
            mods: Modifiers::NONE,
        }
    }

    /// Create a keystroke with a character and modifiers
    pub fn char_with_mods(c: char, mods: Modifiers) -> Self {
        Self {
            key: KeyCode::Char(c.to_ascii_lowercase()),
            mods,
        }
    }
}

/// Renders the binding-file key spec, e.g. `ctrl+shift+semicolon`
impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.mods, self.key)
    }
}
