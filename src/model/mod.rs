//! Navigation model - geometry, the quadrant selection and the session that owns it

pub mod geometry;
pub mod selection;
pub mod session;

pub use geometry::{Direction, Point, Rect};
pub use selection::{SelectionError, SelectionState, DEFAULT_NUDGE_FRACTION};
pub use session::NavigationSession;
