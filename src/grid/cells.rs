// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::RoutingTask;

use super::coords::IndexInterval;
use super::registry::CoordinatesRegistry;
use super::SEGMENT_MARGIN;

/// Per-cell routing state, packed into one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellFlags(u8);

impl CellFlags {
    pub const NONE: Self = Self(0);
    /// Inside (or within clearance of) an obstacle body.
    pub const BUSY: Self = Self(1 << 0);
    /// Vertical movement through this cell is barred by a pin stub.
    pub const VERTICAL_BLOCK: Self = Self(1 << 1);
    /// Horizontal movement through this cell is barred by a pin stub.
    pub const HORIZONTAL_BLOCK: Self = Self(1 << 2);
    /// The cell's column is a public lane.
    pub const VERTICAL_PUBLIC: Self = Self(1 << 3);
    /// The cell's row is a public lane.
    pub const HORIZONTAL_PUBLIC: Self = Self(1 << 4);

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when any of `other`'s flags are set.
    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
}

/// The dense `width x height` grid of per-cell flags, stored as a flat
/// arena addressed by cell index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouterCells {
    width: usize,
    height: usize,
    cells: Vec<CellFlags>,
}

impl RouterCells {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![CellFlags::NONE; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        x * self.height + y
    }

    pub fn flags(&self, x: usize, y: usize) -> CellFlags {
        self.cells[self.idx(x, y)]
    }

    pub fn is_marked(&self, x: usize, y: usize, flags: CellFlags) -> bool {
        self.flags(x, y).contains(flags)
    }

    /// Set `flags` over an inclusive index rectangle.
    pub fn mark(&mut self, x1: usize, y1: usize, x2: usize, y2: usize, flags: CellFlags) {
        for x in x1..=x2 {
            for y in y1..=y2 {
                let idx = self.idx(x, y);
                self.cells[idx] = self.cells[idx].union(flags);
            }
        }
    }

    /// Clear `flags` over an inclusive index rectangle.
    pub fn unmark(&mut self, x1: usize, y1: usize, x2: usize, y2: usize, flags: CellFlags) {
        for x in x1..=x2 {
            for y in y1..=y2 {
                let idx = self.idx(x, y);
                self.cells[idx] = self.cells[idx].difference(flags);
            }
        }
    }

    /// Interval form of [`mark`](Self::mark); a missing interval on either
    /// axis marks nothing.
    pub fn mark_intervals(
        &mut self,
        horizontal: Option<IndexInterval>,
        vertical: Option<IndexInterval>,
        flags: CellFlags,
    ) {
        if let (Some(h), Some(v)) = (horizontal, vertical) {
            self.mark(h.from(), v.from(), h.to(), v.to(), flags);
        }
    }

    /// Interval form of [`unmark`](Self::unmark).
    pub fn unmark_intervals(
        &mut self,
        horizontal: Option<IndexInterval>,
        vertical: Option<IndexInterval>,
        flags: CellFlags,
    ) {
        if let (Some(h), Some(v)) = (horizontal, vertical) {
            self.unmark(h.from(), v.from(), h.to(), v.to(), flags);
        }
    }
}

/// Mark the whole cell grid for a registry and task: public lanes first,
/// then busy obstacle spans and pin-stub blocks.
pub fn build_cells(registry: &CoordinatesRegistry, task: &RoutingTask) -> RouterCells {
    let mut cells = RouterCells::new(registry.width(), registry.height());

    mark_public_lanes(&mut cells, registry);
    mark_busy(&mut cells, registry, task);
    mark_segment_blocks(&mut cells, registry, task);

    cells
}

fn mark_public_lanes(cells: &mut RouterCells, registry: &CoordinatesRegistry) {
    if cells.width() == 0 || cells.height() == 0 {
        return;
    }

    let max_y = cells.height() - 1;
    for (x, coordinate) in registry.x_coordinates().coordinates().iter().enumerate() {
        if coordinate.is_public() {
            cells.mark(x, 0, x, max_y, CellFlags::VERTICAL_PUBLIC);
        }
    }

    let max_x = cells.width() - 1;
    for (y, coordinate) in registry.y_coordinates().coordinates().iter().enumerate() {
        if coordinate.is_public() {
            cells.mark(0, y, max_x, y, CellFlags::HORIZONTAL_PUBLIC);
        }
    }
}

fn mark_busy(cells: &mut RouterCells, registry: &CoordinatesRegistry, task: &RoutingTask) {
    for rectangle in task.rectangles() {
        let x_int = registry
            .x_coordinates()
            .indexed_interval(rectangle.x(), rectangle.right());
        let y_int = registry
            .y_coordinates()
            .indexed_interval(rectangle.y(), rectangle.bottom());
        cells.mark_intervals(x_int, y_int, CellFlags::BUSY);
    }
}

fn mark_segment_blocks(
    cells: &mut RouterCells,
    registry: &CoordinatesRegistry,
    task: &RoutingTask,
) {
    let x_coords = registry.x_coordinates();
    let y_coords = registry.y_coordinates();

    for segment in task.segments() {
        let x1 = segment.min_x();
        let x2 = segment.max_x();
        let y1 = segment.min_y();
        let y2 = segment.max_y();

        let x_int =
            x_coords.indexed_interval_exclusive(x1 - SEGMENT_MARGIN, x2 + SEGMENT_MARGIN);
        let y_int =
            y_coords.indexed_interval_exclusive(y1 - SEGMENT_MARGIN, y2 + SEGMENT_MARGIN);

        if segment.is_vertical() {
            cells.mark_intervals(x_int, y_int, CellFlags::VERTICAL_BLOCK);

            // Reopen the 1-cell strips at the stub's own endpoints so a
            // route can still terminate exactly there.
            let x_lane = x_coords.indexed_interval(x1, x1);
            let y_low = y_coords.indexed_interval(y1 - SEGMENT_MARGIN, y1);
            let y_high = y_coords.indexed_interval(y2, y2 + SEGMENT_MARGIN);
            cells.unmark_intervals(x_lane, y_low, CellFlags::VERTICAL_BLOCK);
            cells.unmark_intervals(x_lane, y_high, CellFlags::VERTICAL_BLOCK);
        } else {
            cells.mark_intervals(x_int, y_int, CellFlags::HORIZONTAL_BLOCK);

            let y_lane = y_coords.indexed_interval(y1, y1);
            let x_low = x_coords.indexed_interval(x1 - SEGMENT_MARGIN, x1);
            let x_high = x_coords.indexed_interval(x2, x2 + SEGMENT_MARGIN);
            cells.unmark_intervals(x_low, y_lane, CellFlags::HORIZONTAL_BLOCK);
            cells.unmark_intervals(x_high, y_lane, CellFlags::HORIZONTAL_BLOCK);
        }
    }
}
