// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Coordinate-grid construction.
//!
//! Obstacle geometry is reduced to a small set of per-axis coordinate lines
//! ("lanes"): snapped clearance boundaries around each body (public lanes,
//! merged when bodies sit close together), the lines through each port
//! (private lanes), and center anchors for otherwise unindexed bodies. The
//! cross product of the two axes is the dense index grid the search runs on.

pub mod cells;
pub mod coords;
pub mod registry;
pub mod snap;

pub use cells::{build_cells, CellFlags, RouterCells};
pub use coords::{
    Coordinate, CoordinateAccumulator, IndexInterval, IndexedCoordinates, IndexedPoint,
    Orientation,
};
pub use registry::{build_coordinates, build_from_usage, CoordinatesRegistry};

/// Tolerance for coordinate comparisons in real units.
pub const EPSILON: f64 = 1e-7;

/// Clearance added around a component body when computing its occupied grid
/// region.
pub const OBSTACLE_MARGIN: f64 = 0.5;

/// Clearance added around an existing pin stub when marking directional
/// blocks.
pub const SEGMENT_MARGIN: f64 = 0.25;

/// Coarse grid pitch obstacle/lane boundaries are rounded to.
pub const MAJOR_SNAP: f64 = 0.5;

/// Fine grid pitch used when merging adjoining clearance lanes.
pub const MINOR_SNAP: f64 = 0.25;
