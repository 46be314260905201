//! KeyBinding struct mapping a keystroke to an ordered action list

use super::action::Action;
use super::types::Keystroke;

/// A keystroke bound to one or more actions, executed in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub keystroke: Keystroke,
    pub actions: Vec<Action>,
}

impl KeyBinding {
    /// Bind a keystroke to an action sequence
    pub fn new(keystroke: Keystroke, actions: Vec<Action>) -> Self {
        Self { keystroke, actions }
    }

    /// Bind a keystroke to a single action
    pub fn single(keystroke: Keystroke, action: Action) -> Self {
        Self::new(keystroke, vec![action])
    }

    /// Whether the global shortcut listener should register this binding
    pub fn is_start(&self) -> bool {
        self.actions.contains(&Action::Start)
    }

    /// Comma-separated action names, e.g. `warp,click-1,end`
    pub fn actions_string(&self) -> String {
        self.actions
            .iter()
            .map(|a| a.name())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// The binding written back in binding-file syntax
    pub fn to_config_line(&self) -> String {
        format!("{} {}", self.keystroke, self.actions_string())
    }
}
