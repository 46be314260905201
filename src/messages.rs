//! Message types for the Elm-style architecture
//!
//! Everything that can change navigator state arrives as a [`Msg`].

use crate::keymap::Keystroke;

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A registered global shortcut fired (no session needed)
    Shortcut(Keystroke),
    /// A key press captured by the interceptor during a session
    Key(Keystroke),
    /// A settle delay scheduled under `generation` has elapsed
    Resume { generation: u64 },
    /// The bindings file changed on disk
    BindingsChanged,
    /// Shut down from outside the key bindings (signal, tray menu)
    Quit,
}
