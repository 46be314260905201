//! The active navigation session

use crate::monitor::Monitor;

use super::selection::{SelectionError, SelectionState};

/// Runtime state that exists only while the overlay and key interception are active
#[derive(Debug, Clone)]
pub struct NavigationSession {
    /// Monitor the overlay is shown on
    pub monitor: Monitor,
    /// Whether the overlay is currently visible
    pub overlay_visible: bool,
    /// The quadrant selection, bounded by the monitor frame
    pub selection: SelectionState,
}

impl NavigationSession {
    /// Open a session covering the whole of `monitor`
    pub fn new(monitor: Monitor) -> Result<Self, SelectionError> {
        Ok(Self {
            monitor,
            overlay_visible: false,
            selection: SelectionState::new(monitor.frame)?,
        })
    }

    /// Move the session to another monitor, selecting its full frame
    pub fn switch_monitor(&mut self, monitor: Monitor) -> Result<(), SelectionError> {
        self.selection.rebase(monitor.frame)?;
        self.monitor = monitor;
        Ok(())
    }
}
