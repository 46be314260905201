//! Recursive quadrant selection
//!
//! `SelectionState` owns the rectangle the user is narrowing down (`current`)
//! and the rectangle it must stay inside (`bounds`, normally a monitor frame).

use thiserror::Error;

use super::geometry::{Direction, Point, Rect};

/// Default nudge step as a fraction of the selection's own size
pub const DEFAULT_NUDGE_FRACTION: f64 = 0.1;

/// Contract violations raised by selection mutations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    /// Halving the selection would leave it with no area
    #[error("selection {0} cannot be bisected further")]
    Degenerate(Rect),
    /// A new bounding rectangle must have positive, finite extents
    #[error("invalid bounds {0}")]
    InvalidBounds(Rect),
}

/// The current selection nested inside its bounding rectangle
///
/// Invariant: `current` lies within `bounds` and has positive width and height.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    bounds: Rect,
    current: Rect,
}

impl SelectionState {
    /// Start a selection covering all of `bounds`
    pub fn new(bounds: Rect) -> Result<Self, SelectionError> {
        if !bounds.has_positive_area() {
            return Err(SelectionError::InvalidBounds(bounds));
        }
        Ok(Self {
            bounds,
            current: bounds,
        })
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn current(&self) -> Rect {
        self.current
    }

    /// Keep the half of the selection nearest `direction`
    ///
    /// Fails without changing state once halving would produce a zero extent.
    pub fn bisect(&mut self, direction: Direction) -> Result<(), SelectionError> {
        let Rect {
            x,
            y,
            width,
            height,
        } = self.current;

        let next = match direction {
            Direction::Up => Rect::new(x, y, width, height / 2.0),
            Direction::Down => Rect::new(x, y + height / 2.0, width, height / 2.0),
            Direction::Left => Rect::new(x, y, width / 2.0, height),
            Direction::Right => Rect::new(x + width / 2.0, y, width / 2.0, height),
        };

        if !next.has_positive_area() {
            return Err(SelectionError::Degenerate(self.current));
        }

        self.set_current(next);
        Ok(())
    }

    /// Translate the selection by `fraction` of its own size, stopping at the bounds edge
    pub fn nudge(&mut self, direction: Direction, fraction: f64) {
        let dx = self.current.width * fraction;
        let dy = self.current.height * fraction;

        let mut next = self.current;
        match direction {
            Direction::Up => next.y -= dy,
            Direction::Down => next.y += dy,
            Direction::Left => next.x -= dx,
            Direction::Right => next.x += dx,
        }

        self.set_current(next);
    }

    /// Select the whole bounding rectangle again
    pub fn reset(&mut self) {
        self.current = self.bounds;
    }

    /// Replace the bounds (monitor switch, zoom region) and select all of it
    pub fn rebase(&mut self, bounds: Rect) -> Result<(), SelectionError> {
        if !bounds.has_positive_area() {
            return Err(SelectionError::InvalidBounds(bounds));
        }
        self.bounds = bounds;
        self.current = bounds;
        Ok(())
    }

    /// Warp and click target
    pub fn center(&self) -> Point {
        self.current.center()
    }

    fn set_current(&mut self, rect: Rect) {
        self.current = rect.clamped_within(&self.bounds);
        debug_assert!(self.bounds.contains_rect(&self.current));
    }
}
