//! Monitor descriptions and directional monitor lookup

use std::fmt;

use crate::model::{Direction, Rect};

/// Opaque monitor identifier handed out by the display topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonitorId(pub u32);

impl fmt::Display for MonitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "monitor#{}", self.0)
    }
}

/// A physical display and the visible area the selection may cover
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Monitor {
    pub id: MonitorId,
    /// Visible frame in desktop coordinates
    pub frame: Rect,
}

impl Monitor {
    pub const fn new(id: MonitorId, frame: Rect) -> Self {
        Self { id, frame }
    }
}

/// Find the monitor frame nearest to `from` in `direction`
///
/// A candidate qualifies when its near edge lies at or beyond the far edge of
/// `from` (for `Right`: `candidate.min_x >= from.max_x`). The smallest gap wins;
/// equal gaps keep the first candidate in input order. Returns the index into
/// `candidates`.
pub fn find_in_direction(direction: Direction, from: &Rect, candidates: &[Rect]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (idx, candidate) in candidates.iter().enumerate() {
        let Some(gap) = gap_in_direction(direction, from, candidate) else {
            continue;
        };

        match best {
            Some((_, best_gap)) if gap >= best_gap => {}
            _ => best = Some((idx, gap)),
        }
    }

    best.map(|(idx, _)| idx)
}

/// Find the adjacent monitor in `direction` from `current`
pub fn monitor_in_direction<'a>(
    direction: Direction,
    current: &Monitor,
    monitors: &'a [Monitor],
) -> Option<&'a Monitor> {
    let frames: Vec<Rect> = monitors.iter().map(|m| m.frame).collect();
    find_in_direction(direction, &current.frame, &frames).map(|idx| &monitors[idx])
}

/// Distance between the facing edges, or None if `candidate` is not beyond `from`
fn gap_in_direction(direction: Direction, from: &Rect, candidate: &Rect) -> Option<f64> {
    let gap = match direction {
        Direction::Right => candidate.min_x() - from.max_x(),
        Direction::Left => from.min_x() - candidate.max_x(),
        Direction::Down => candidate.min_y() - from.max_y(),
        Direction::Up => from.min_y() - candidate.max_y(),
    };
    (gap >= 0.0).then_some(gap)
}
