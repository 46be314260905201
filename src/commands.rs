//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the runtime performs after an update.

use std::time::Duration;

/// Side effect requested by the coordinator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Post `Msg::Resume { generation }` after `delay`
    ScheduleResume { delay: Duration, generation: u64 },
    /// Stop the message loop
    Quit,
}

impl Cmd {
    pub fn is_none(&self) -> bool {
        matches!(self, Cmd::None)
    }
}
