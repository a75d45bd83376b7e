// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Direction, Point, RouterPort, RoutingTask};
use crate::route::usage::UsageCounter;

use super::coords::{
    CoordinateAccumulator, IndexedCoordinates, IndexedPoint, Orientation,
};
use super::snap::{snap_to_higher, snap_to_lower};
use super::{MAJOR_SNAP, OBSTACLE_MARGIN};

/// Both axes' frozen coordinate lines: the mapping between real geometry and
/// the dense index grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CoordinatesRegistry {
    x_coords: IndexedCoordinates,
    y_coords: IndexedCoordinates,
}

impl CoordinatesRegistry {
    pub fn x_coordinates(&self) -> &IndexedCoordinates {
        &self.x_coords
    }

    pub fn y_coordinates(&self) -> &IndexedCoordinates {
        &self.y_coords
    }

    /// Grid width in cells (one per x coordinate line).
    pub fn width(&self) -> usize {
        self.x_coords.len()
    }

    /// Grid height in cells (one per y coordinate line).
    pub fn height(&self) -> usize {
        self.y_coords.len()
    }

    /// The real-coordinate point of a grid cell.
    pub fn point(&self, x: usize, y: usize) -> Point {
        Point::new(self.x_coords.value_at(x), self.y_coords.value_at(y))
    }

    /// The grid cell of a real-coordinate point, `None` when either axis
    /// value is not a registered coordinate line.
    pub fn indexed_point(&self, location: Point) -> Option<IndexedPoint> {
        let x = self.x_coords.index_of(location.x())?;
        let y = self.y_coords.index_of(location.y())?;
        Some(IndexedPoint::new(x, y))
    }
}

/// Build the phase-1 (full) coordinate registry for a task: snapped obstacle
/// clearance lanes (merged where bodies sit close), port lanes, and center
/// anchors for bodies that would otherwise span no coordinate line.
pub fn build_coordinates(task: &RoutingTask) -> CoordinatesRegistry {
    let mut x_acc = CoordinateAccumulator::new();
    let mut y_acc = CoordinateAccumulator::new();

    register_rectangles(&mut x_acc, &mut y_acc, task);
    register_ports(&mut x_acc, &mut y_acc, task);
    register_center_anchors(&mut x_acc, &mut y_acc, task);

    CoordinatesRegistry {
        x_coords: x_acc.into_indexed(),
        y_coords: y_acc.into_indexed(),
    }
}

/// Build the phase-2 (compacted) registry: only phase-1 lanes actually used
/// by routes survive, then ports and center anchors are re-registered
/// exactly as in phase 1. This registry drives grid rendering/diagnostics
/// and is decoupled from the phase-1 grid used for routing correctness.
pub fn build_from_usage(
    task: &RoutingTask,
    phase1: &CoordinatesRegistry,
    usage: &UsageCounter,
) -> CoordinatesRegistry {
    let mut x_acc = CoordinateAccumulator::new();
    let mut y_acc = CoordinateAccumulator::new();

    for x in 0..usage.width() {
        if usage.x_usage(x) > 0 {
            x_acc.add_coordinate(phase1.x_coordinates().coordinate_at(x));
        }
    }
    for y in 0..usage.height() {
        if usage.y_usage(y) > 0 {
            y_acc.add_coordinate(phase1.y_coordinates().coordinate_at(y));
        }
    }

    register_ports(&mut x_acc, &mut y_acc, task);
    register_center_anchors(&mut x_acc, &mut y_acc, task);

    CoordinatesRegistry {
        x_coords: x_acc.into_indexed(),
        y_coords: y_acc.into_indexed(),
    }
}

fn register_rectangles(
    x_acc: &mut CoordinateAccumulator,
    y_acc: &mut CoordinateAccumulator,
    task: &RoutingTask,
) {
    for rectangle in task.rectangles() {
        let min_x = snap_to_lower(rectangle.x() - OBSTACLE_MARGIN, MAJOR_SNAP);
        let max_x = snap_to_higher(rectangle.right() + OBSTACLE_MARGIN, MAJOR_SNAP);
        let min_y = snap_to_lower(rectangle.y() - OBSTACLE_MARGIN, MAJOR_SNAP);
        let max_y = snap_to_higher(rectangle.bottom() + OBSTACLE_MARGIN, MAJOR_SNAP);

        x_acc.add_public(Orientation::Lower, min_x);
        x_acc.add_public(Orientation::Higher, max_x);
        y_acc.add_public(Orientation::Lower, min_y);
        y_acc.add_public(Orientation::Higher, max_y);
    }

    x_acc.merge_boundaries();
    y_acc.merge_boundaries();
}

fn register_ports(
    x_acc: &mut CoordinateAccumulator,
    y_acc: &mut CoordinateAccumulator,
    task: &RoutingTask,
) {
    for connection in task.connections() {
        register_port(x_acc, y_acc, connection.source());
        register_port(x_acc, y_acc, connection.destination());
    }
}

fn register_port(
    x_acc: &mut CoordinateAccumulator,
    y_acc: &mut CoordinateAccumulator,
    port: RouterPort,
) {
    x_acc.add_private(horizontal_orientation(port.direction()), port.location().x());
    y_acc.add_private(vertical_orientation(port.direction()), port.location().y());
}

/// The x-axis orientation of a port lane: the facing side for horizontal
/// ports, both sides for vertical ones (their x lane runs parallel to the
/// pin).
fn horizontal_orientation(direction: Direction) -> Orientation {
    match direction {
        Direction::East => Orientation::Higher,
        Direction::West => Orientation::Lower,
        Direction::North | Direction::South => Orientation::Both,
    }
}

fn vertical_orientation(direction: Direction) -> Orientation {
    match direction {
        Direction::South => Orientation::Higher,
        Direction::North => Orientation::Lower,
        Direction::East | Direction::West => Orientation::Both,
    }
}

/// Give every body at least one coordinate line inside its own span, so an
/// isolated obstacle is still locatable in the index.
fn register_center_anchors(
    x_acc: &mut CoordinateAccumulator,
    y_acc: &mut CoordinateAccumulator,
    task: &RoutingTask,
) {
    for rectangle in task.rectangles() {
        if !x_acc.is_interval_occupied(rectangle.x(), rectangle.right()) {
            x_acc.add_private(Orientation::None, rectangle.center_x());
        }
        if !y_acc.is_interval_occupied(rectangle.y(), rectangle.bottom()) {
            y_acc.add_private(Orientation::None, rectangle.center_y());
        }
    }
}
