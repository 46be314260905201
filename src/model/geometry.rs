//! Geometry primitives shared by the selection model and the monitor resolver
//!
//! All coordinates use a top-left origin with y growing downward, matching
//! the desktop space reported by the display topology.

use std::fmt;
use std::str::FromStr;

/// Compass direction used by bisection, nudging and monitor switching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions in a stable order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Lowercase name as used in action names (`up`, `cut-left`, ...)
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(()),
        }
    }
}

/// A point in desktop or screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Axis-aligned rectangle: origin is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn min_x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn min_y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Midpoint of the rectangle
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Both extents are strictly positive and finite
    pub fn has_positive_area(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Half-open containment test (right and bottom edges excluded)
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x() && p.x < self.max_x() && p.y >= self.min_y() && p.y < self.max_y()
    }

    /// Closed containment of another rectangle
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.min_x() >= self.min_x()
            && other.max_x() <= self.max_x()
            && other.min_y() >= self.min_y()
            && other.max_y() <= self.max_y()
    }

    /// Move this rectangle inside `bounds`, shrinking it if it is larger
    pub fn clamped_within(&self, bounds: &Rect) -> Rect {
        let width = self.width.min(bounds.width);
        let height = self.height.min(bounds.height);
        // min/max instead of clamp: rounding may leave the upper limit just below the lower one
        let max_x = (bounds.max_x() - width).max(bounds.min_x());
        let max_y = (bounds.max_y() - height).max(bounds.min_y());
        let x = self.x.max(bounds.min_x()).min(max_x);
        let y = self.y.max(bounds.min_y()).min(max_y);
        Rect::new(x, y, width, height)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}{:+}{:+}", self.width, self.height, self.x, self.y)
    }
}

/// Parse the `WxH+X+Y` geometry syntax used by the CLI (`1920x1080+0+0`)
impl FromStr for Rect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid geometry '{}', expected WxH+X+Y", s);

        let (size, origin) = match s.find(['+', '-']) {
            Some(idx) => s.split_at(idx),
            None => (s, "+0+0"),
        };
        let (w, h) = size.split_once('x').ok_or_else(invalid)?;
        let width: f64 = w.trim().parse().map_err(|_| invalid())?;
        let height: f64 = h.trim().parse().map_err(|_| invalid())?;

        // Origin is two signed numbers, e.g. "+1920+0" or "-1280+0"
        let second = origin[1..].find(['+', '-']).ok_or_else(invalid)? + 1;
        let (ox, oy) = origin.split_at(second);
        let x: f64 = ox.parse().map_err(|_| invalid())?;
        let y: f64 = oy.parse().map_err(|_| invalid())?;

        let rect = Rect::new(x, y, width, height);
        if !rect.has_positive_area() {
            return Err(invalid());
        }
        Ok(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges_and_center() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.max_x(), 110.0);
        assert_eq!(r.max_y(), 70.0);
        assert_eq!(r.center(), Point::new(60.0, 45.0));
    }

    #[test]
    fn test_contains_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(!r.contains(Point::new(10.0, 5.0)));
    }

    #[test]
    fn test_clamped_within_moves_back_inside() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let r = Rect::new(95.0, -5.0, 10.0, 10.0).clamped_within(&bounds);
        assert_eq!(r, Rect::new(90.0, 0.0, 10.0, 10.0));
        assert!(bounds.contains_rect(&r));
    }

    #[test]
    fn test_clamped_within_shrinks_oversized() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let r = Rect::new(-10.0, -10.0, 500.0, 50.0).clamped_within(&bounds);
        assert_eq!(r, Rect::new(0.0, 0.0, 100.0, 50.0));
    }

    #[test]
    fn test_parse_geometry() {
        let r: Rect = "1920x1080+1920+0".parse().unwrap();
        assert_eq!(r, Rect::new(1920.0, 0.0, 1920.0, 1080.0));

        let r: Rect = "1280x1024-1280+0".parse().unwrap();
        assert_eq!(r.x, -1280.0);

        let r: Rect = "800x600".parse().unwrap();
        assert_eq!(r, Rect::new(0.0, 0.0, 800.0, 600.0));

        assert!("0x600+0+0".parse::<Rect>().is_err());
        assert!("garbage".parse::<Rect>().is_err());
    }

    #[test]
    fn test_direction_round_trip_names() {
        for dir in Direction::ALL {
            assert_eq!(dir.name().parse::<Direction>(), Ok(dir));
        }
    }
}
