// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A point in real (schematic) coordinates.
///
/// Equality, hashing, and ordering go through the raw bit patterns
/// (`f64::to_bits` / `f64::total_cmp`) so the type is totally comparable and
/// usable as a map/set key. Geometry handed in by the editor is reproduced
/// bit-for-bit on redraws, so bitwise equality is exactly the memoization
/// equality the router needs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.x.total_cmp(&other.x).then_with(|| self.y.total_cmp(&other.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The compass side a port faces.
///
/// The grid uses screen orientation: y grows downward, so [`Direction::North`]
/// steps toward smaller y values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn is_vertical(self) -> bool {
        self == Self::North || self == Self::South
    }

    pub fn is_horizontal(self) -> bool {
        self == Self::East || self == Self::West
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Unit step along the x index axis.
    pub fn dx(self) -> i32 {
        match self {
            Self::East => 1,
            Self::West => -1,
            Self::North | Self::South => 0,
        }
    }

    /// Unit step along the y index axis (screen orientation).
    pub fn dy(self) -> i32 {
        match self {
            Self::South => 1,
            Self::North => -1,
            Self::East | Self::West => 0,
        }
    }
}

/// An axis-aligned obstacle box in real coordinates. Immutable and value-equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rectangle {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Bounding union of two rectangles.
    pub fn merge(&self, other: &Rectangle) -> Rectangle {
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = self.right().max(other.right());
        let y2 = self.bottom().max(other.bottom());
        Rectangle::new(x1, y1, x2 - x1, y2 - y1)
    }

    pub fn intersects(&self, other: &Rectangle) -> bool {
        let horizontally = self.x <= other.right() && other.x <= self.right();
        let vertically = self.y <= other.bottom() && other.y <= self.bottom();
        horizontally && vertically
    }

    /// The axis-aligned pin stub from an outside port location back to this
    /// rectangle's boundary.
    ///
    /// Returns `None` when the location is inside both axis spans (no stub)
    /// or diagonally outside a corner (no axis-aligned stub exists).
    pub fn port_stub(&self, location: Point) -> Option<Segment> {
        let mut dx = 0.0;
        let mut dy = 0.0;

        if location.x() < self.x {
            dx = self.x - location.x();
        }
        if location.x() > self.right() {
            dx = self.right() - location.x();
        }
        if location.y() < self.y {
            dy = self.y - location.y();
        }
        if location.y() > self.bottom() {
            dy = self.bottom() - location.y();
        }

        let end = Point::new(location.x() + dx, location.y() + dy);
        Segment::new(location, end).ok()
    }
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits()
            && self.y.to_bits() == other.y.to_bits()
            && self.width.to_bits() == other.width.to_bits()
            && self.height.to_bits() == other.height.to_bits()
    }
}

impl Eq for Rectangle {}

impl Hash for Rectangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
        self.width.to_bits().hash(state);
        self.height.to_bits().hash(state);
    }
}

/// A pin stub: a purely horizontal or vertical line from a port to the
/// boundary of its owning rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSegment")]
pub struct Segment {
    p1: Point,
    p2: Point,
}

impl Segment {
    pub fn new(p1: Point, p2: Point) -> Result<Self, SegmentError> {
        let moves_x = p1.x().to_bits() != p2.x().to_bits();
        let moves_y = p1.y().to_bits() != p2.y().to_bits();
        match (moves_x, moves_y) {
            (true, true) => Err(SegmentError::Diagonal),
            (false, false) => Err(SegmentError::Degenerate),
            _ => Ok(Self { p1, p2 }),
        }
    }

    pub fn p1(&self) -> Point {
        self.p1
    }

    pub fn p2(&self) -> Point {
        self.p2
    }

    pub fn is_vertical(&self) -> bool {
        self.p1.x().to_bits() == self.p2.x().to_bits()
    }

    pub fn is_horizontal(&self) -> bool {
        self.p1.y().to_bits() == self.p2.y().to_bits()
    }

    pub fn min_x(&self) -> f64 {
        self.p1.x().min(self.p2.x())
    }

    pub fn max_x(&self) -> f64 {
        self.p1.x().max(self.p2.x())
    }

    pub fn min_y(&self) -> f64 {
        self.p1.y().min(self.p2.y())
    }

    pub fn max_y(&self) -> f64 {
        self.p1.y().max(self.p2.y())
    }
}

#[derive(Deserialize)]
struct RawSegment {
    p1: Point,
    p2: Point,
}

impl TryFrom<RawSegment> for Segment {
    type Error = SegmentError;

    fn try_from(raw: RawSegment) -> Result<Self, Self::Error> {
        Segment::new(raw.p1, raw.p2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentError {
    Diagonal,
    Degenerate,
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Diagonal => f.write_str("segment must be purely horizontal or vertical"),
            Self::Degenerate => f.write_str("segment endpoints must differ"),
        }
    }
}

impl std::error::Error for SegmentError {}

#[cfg(test)]
mod tests {
    use super::{Direction, Point, Rectangle, Segment, SegmentError};

    #[test]
    fn point_equality_is_bitwise() {
        assert_eq!(Point::new(1.5, -2.0), Point::new(1.5, -2.0));
        assert_ne!(Point::new(0.0, 0.0), Point::new(-0.0, 0.0));
    }

    #[test]
    fn direction_steps_use_screen_orientation() {
        assert_eq!((Direction::North.dx(), Direction::North.dy()), (0, -1));
        assert_eq!((Direction::South.dx(), Direction::South.dy()), (0, 1));
        assert_eq!((Direction::East.dx(), Direction::East.dy()), (1, 0));
        assert_eq!((Direction::West.dx(), Direction::West.dy()), (-1, 0));
    }

    #[test]
    fn rectangle_merge_is_bounding_union() {
        let a = Rectangle::new(0.0, 0.0, 2.0, 2.0);
        let b = Rectangle::new(3.0, -1.0, 1.0, 1.0);
        assert_eq!(a.merge(&b), Rectangle::new(0.0, -1.0, 4.0, 3.0));
    }

    #[test]
    fn rectangle_intersection_includes_touching_edges() {
        let a = Rectangle::new(0.0, 0.0, 2.0, 2.0);
        assert!(a.intersects(&Rectangle::new(2.0, 0.0, 2.0, 2.0)));
        assert!(a.intersects(&Rectangle::new(1.0, 1.0, 0.5, 0.5)));
        assert!(!a.intersects(&Rectangle::new(2.1, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn port_stub_connects_outside_location_to_boundary() {
        let body = Rectangle::new(0.0, 0.0, 2.0, 2.0);

        let east = body.port_stub(Point::new(2.5, 1.0)).expect("stub");
        assert!(east.is_horizontal());
        assert_eq!(east.p2(), Point::new(2.0, 1.0));

        let north = body.port_stub(Point::new(1.0, -0.5)).expect("stub");
        assert!(north.is_vertical());
        assert_eq!(north.p2(), Point::new(1.0, 0.0));
    }

    #[test]
    fn port_stub_is_none_inside_and_at_corners() {
        let body = Rectangle::new(0.0, 0.0, 2.0, 2.0);
        assert_eq!(body.port_stub(Point::new(1.0, 1.0)), None);
        assert_eq!(body.port_stub(Point::new(2.0, 1.0)), None);
        assert_eq!(body.port_stub(Point::new(3.0, 3.0)), None);
    }

    #[test]
    fn segment_rejects_diagonal_and_degenerate() {
        let p = Point::new(0.0, 0.0);
        assert_eq!(Segment::new(p, Point::new(1.0, 1.0)), Err(SegmentError::Diagonal));
        assert_eq!(Segment::new(p, p), Err(SegmentError::Degenerate));
        assert!(Segment::new(p, Point::new(0.0, 2.0)).expect("vertical").is_vertical());
    }
}
