// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text diagnostics over the index grid.
//!
//! One character per grid cell, deterministic output. [`render_cells`] shows
//! the raw cell state; [`render_routes`] overlays route polylines in box
//! glyphs (merged at crossings) plus `o` markers at their port endpoints.
//!
//! Cell legend: `#` busy, `*` blocked both ways, `v`/`h` vertically or
//! horizontally blocked, `+` public lane crossing, `|` public column,
//! `-` public row, `.` plain.

use crate::grid::{CellFlags, CoordinatesRegistry, RouterCells};
use crate::model::Route;

pub const BOX_HORIZONTAL: char = '─';
pub const BOX_VERTICAL: char = '│';
pub const BOX_TOP_LEFT: char = '┌';
pub const BOX_TOP_RIGHT: char = '┐';
pub const BOX_BOTTOM_LEFT: char = '└';
pub const BOX_BOTTOM_RIGHT: char = '┘';
pub const BOX_TEE_RIGHT: char = '├';
pub const BOX_TEE_LEFT: char = '┤';
pub const BOX_TEE_DOWN: char = '┬';
pub const BOX_TEE_UP: char = '┴';
pub const BOX_CROSS: char = '┼';

/// The wire directions entering one character cell; overlapping routes
/// merge into junction glyphs instead of overwriting each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct WireEdges(u8);

impl WireEdges {
    const LEFT: Self = Self(1 << 0);
    const RIGHT: Self = Self(1 << 1);
    const UP: Self = Self(1 << 2);
    const DOWN: Self = Self(1 << 3);

    fn is_empty(self) -> bool {
        self.0 == 0
    }

    fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

fn wire_char(edges: WireEdges) -> char {
    match edges.0 {
        // Straight segments (including bare ends).
        1..=3 => BOX_HORIZONTAL,
        4 | 8 | 12 => BOX_VERTICAL,
        // Corners.
        10 => BOX_TOP_LEFT,
        9 => BOX_TOP_RIGHT,
        6 => BOX_BOTTOM_LEFT,
        5 => BOX_BOTTOM_RIGHT,
        // Tees.
        14 => BOX_TEE_RIGHT,
        13 => BOX_TEE_LEFT,
        11 => BOX_TEE_DOWN,
        7 => BOX_TEE_UP,
        15 => BOX_CROSS,
        // Empty is filtered out by the caller; keep a deterministic
        // fallback for the unreachable arms.
        _ => BOX_CROSS,
    }
}

fn cell_char(flags: CellFlags) -> char {
    if flags.contains(CellFlags::BUSY) {
        return '#';
    }

    let vertical_block = flags.contains(CellFlags::VERTICAL_BLOCK);
    let horizontal_block = flags.contains(CellFlags::HORIZONTAL_BLOCK);
    match (vertical_block, horizontal_block) {
        (true, true) => return '*',
        (true, false) => return 'v',
        (false, true) => return 'h',
        (false, false) => {}
    }

    let vertical_public = flags.contains(CellFlags::VERTICAL_PUBLIC);
    let horizontal_public = flags.contains(CellFlags::HORIZONTAL_PUBLIC);
    match (vertical_public, horizontal_public) {
        (true, true) => '+',
        (true, false) => '|',
        (false, true) => '-',
        (false, false) => '.',
    }
}

fn join_rows(grid: &[Vec<char>]) -> String {
    let mut out = String::new();
    for row in grid {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}

fn base_grid(cells: &RouterCells) -> Vec<Vec<char>> {
    (0..cells.height())
        .map(|y| (0..cells.width()).map(|x| cell_char(cells.flags(x, y))).collect())
        .collect()
}

/// Render the per-cell flag grid, one row per y coordinate line.
pub fn render_cells(registry: &CoordinatesRegistry, cells: &RouterCells) -> String {
    debug_assert_eq!(registry.width(), cells.width());
    debug_assert_eq!(registry.height(), cells.height());
    join_rows(&base_grid(cells))
}

/// Render the cell grid with route polylines drawn over it.
///
/// Route points whose coordinate lines are missing from `registry` are
/// skipped; with the router's own compacted registry every routed lane is
/// present by construction.
pub fn render_routes(
    registry: &CoordinatesRegistry,
    cells: &RouterCells,
    routes: &[Route],
) -> String {
    debug_assert_eq!(registry.width(), cells.width());
    debug_assert_eq!(registry.height(), cells.height());

    let width = cells.width();
    let mut edges = vec![WireEdges::default(); width * cells.height()];
    let at = |x: usize, y: usize| y * width + x;

    for route in routes {
        for (from, to) in route.segments() {
            let (Some(a), Some(b)) = (registry.indexed_point(from), registry.indexed_point(to))
            else {
                continue;
            };

            let (dx, dy): (i64, i64) = (
                (b.x() as i64 - a.x() as i64).signum(),
                (b.y() as i64 - a.y() as i64).signum(),
            );
            let (outgoing, incoming) = match (dx, dy) {
                (1, _) => (WireEdges::RIGHT, WireEdges::LEFT),
                (-1, _) => (WireEdges::LEFT, WireEdges::RIGHT),
                (_, 1) => (WireEdges::DOWN, WireEdges::UP),
                _ => (WireEdges::UP, WireEdges::DOWN),
            };

            let steps = (b.x() as i64 - a.x() as i64).abs() + (b.y() as i64 - a.y() as i64).abs();
            let (mut x, mut y) = (a.x() as i64, a.y() as i64);
            for _ in 0..steps {
                let idx = at(x as usize, y as usize);
                edges[idx] = edges[idx].union(outgoing);
                x += dx;
                y += dy;
                let idx = at(x as usize, y as usize);
                edges[idx] = edges[idx].union(incoming);
            }
        }
    }

    let mut grid = base_grid(cells);
    for y in 0..cells.height() {
        for x in 0..width {
            let mask = edges[at(x, y)];
            if !mask.is_empty() {
                grid[y][x] = wire_char(mask);
            }
        }
    }

    // Port endpoints last, on top of the wires.
    for route in routes {
        for location in [route.source().location(), route.destination().location()] {
            if let Some(cell) = registry.indexed_point(location) {
                grid[cell.y()][cell.x()] = 'o';
            }
        }
    }

    join_rows(&grid)
}

#[cfg(test)]
mod tests {
    use crate::model::fixtures;
    use crate::router::Router;

    use super::{render_cells, render_routes};

    #[test]
    fn cell_grid_shows_busy_bodies_and_public_lanes() {
        let mut router = Router::new();
        router.set_task(fixtures::facing_pair_blocked());

        // Compacted grid: columns at x = 2, 6, 10; rows at y = 1, 2.5.
        // Row 1 crosses all three bodies; row 2.5 is the public detour lane.
        assert_eq!(render_cells(router.coordinates(), router.cells()), "###\n---\n");
    }

    #[test]
    fn routes_are_drawn_with_merged_box_glyphs_and_port_markers() {
        let mut router = Router::new();
        router.set_task(fixtures::facing_pair_blocked());

        let rendered = render_routes(router.coordinates(), router.cells(), router.routes());
        assert_eq!(rendered, "o#o\n└─┘\n");
    }

    #[test]
    fn straight_route_renders_endpoint_markers_only() {
        let mut router = Router::new();
        router.set_task(fixtures::facing_pair());

        let rendered = render_routes(router.coordinates(), router.cells(), router.routes());
        assert_eq!(rendered, "oo\n");
    }

    #[test]
    fn crossing_routes_merge_into_junctions() {
        let mut router = Router::new();
        router.set_task(fixtures::crossing_board());

        let rendered = render_routes(router.coordinates(), router.cells(), router.routes());
        let junctions = rendered.chars().filter(|&c| c == '┼' || c == '├' || c == '┤' || c == '┬' || c == '┴').count();
        assert!(
            junctions > 0,
            "expected crossing routes to merge into junction glyphs:\n{rendered}"
        );
    }
}
