// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::grid::{CellFlags, IndexedPoint, RouterCells};
use crate::model::{Direction, RouterConnection};

use super::{BUSY_CROSS_PENALTY, TURN_PENALTY};

/// Per-connection movement-legality and cost oracle.
///
/// Queries are phrased in search order: the search walks from the
/// destination cell toward the source, so "leaving the destination" here is
/// the reverse of the route's final arriving segment. Steps are [`Direction`]
/// values, which makes diagonal or multi-cell moves unrepresentable.
#[derive(Debug)]
pub struct CellAnalyser<'a> {
    cells: &'a RouterCells,
    source: IndexedPoint,
    destination: IndexedPoint,
    /// Required step out of the destination cell (fixed-direction ports:
    /// the forward route must arrive against the port's facing).
    destination_exit: Option<Direction>,
    /// Required step into the source cell (so the forward route leaves the
    /// source along the port's facing).
    source_entry: Option<Direction>,
}

impl<'a> CellAnalyser<'a> {
    pub fn new(
        cells: &'a RouterCells,
        connection: &RouterConnection,
        source: IndexedPoint,
        destination: IndexedPoint,
    ) -> Self {
        let destination_exit = connection
            .destination()
            .is_fixed_direction()
            .then(|| connection.destination().direction());
        let source_entry = connection
            .source()
            .is_fixed_direction()
            .then(|| connection.source().direction().opposite());

        Self { cells, source, destination, destination_exit, source_entry }
    }

    fn target(&self, from: IndexedPoint, step: Direction) -> Option<IndexedPoint> {
        let x = from.x() as i64 + step.dx() as i64;
        let y = from.y() as i64 + step.dy() as i64;
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        (x < self.cells.width() && y < self.cells.height()).then(|| IndexedPoint::new(x, y))
    }

    /// Whether a single-cell step from `from` is legal for this connection.
    pub fn is_move_allowed(&self, from: IndexedPoint, step: Direction) -> bool {
        let Some(target) = self.target(from, step) else {
            return false;
        };

        if from == self.destination {
            if let Some(exit) = self.destination_exit {
                if step != exit {
                    return false;
                }
            }
        }

        if target == self.source {
            if let Some(entry) = self.source_entry {
                if step != entry {
                    return false;
                }
            }
        }

        if step.is_horizontal() {
            !self.blocked_horizontally(from)
        } else {
            !self.blocked_vertically(from)
        }
    }

    fn blocked_horizontally(&self, at: IndexedPoint) -> bool {
        if self.cells.is_marked(at.x(), at.y(), CellFlags::HORIZONTAL_BLOCK) {
            return true;
        }
        // Rows other than the endpoints' own rows are only usable as
        // public through-lanes.
        at.y() != self.source.y()
            && at.y() != self.destination.y()
            && !self.cells.is_marked(at.x(), at.y(), CellFlags::HORIZONTAL_PUBLIC)
    }

    fn blocked_vertically(&self, at: IndexedPoint) -> bool {
        if self.cells.is_marked(at.x(), at.y(), CellFlags::VERTICAL_BLOCK) {
            return true;
        }
        at.x() != self.source.x()
            && at.x() != self.destination.x()
            && !self.cells.is_marked(at.x(), at.y(), CellFlags::VERTICAL_PUBLIC)
    }

    /// The cost of stepping from `from` by `step`, given the step direction
    /// that led into `from` (if any), or `None` when the move is illegal.
    ///
    /// Cutting into an obstacle is allowed at a prohibitive price so a
    /// route can still terminate on a port cell inside a body's span.
    pub fn move_cost(
        &self,
        last_step: Option<Direction>,
        from: IndexedPoint,
        step: Direction,
    ) -> Option<f64> {
        if !self.is_move_allowed(from, step) {
            return None;
        }

        let target = self.target(from, step).expect("checked by is_move_allowed");
        let from_busy = self.cells.is_marked(from.x(), from.y(), CellFlags::BUSY);
        let target_busy = self.cells.is_marked(target.x(), target.y(), CellFlags::BUSY);
        if !from_busy && target_busy {
            return Some(BUSY_CROSS_PENALTY);
        }

        if last_step.is_some_and(|last| last != step) {
            return Some(TURN_PENALTY);
        }

        Some(1.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::{build_cells, build_coordinates, IndexedPoint};
    use crate::model::fixtures;
    use crate::model::{Direction, Point, RouterConnection, RouterPort};

    use super::super::{BUSY_CROSS_PENALTY, TURN_PENALTY};
    use super::CellAnalyser;

    struct Board {
        cells: crate::grid::RouterCells,
        registry: crate::grid::CoordinatesRegistry,
        connection: RouterConnection,
    }

    fn facing_pair_board() -> Board {
        let task = fixtures::facing_pair();
        let registry = build_coordinates(&task);
        let cells = build_cells(&registry, &task);
        let connection = task.connections()[0];
        Board { cells, registry, connection }
    }

    fn endpoints(board: &Board) -> (IndexedPoint, IndexedPoint) {
        let source = board
            .registry
            .indexed_point(board.connection.source().location())
            .expect("source cell");
        let destination = board
            .registry
            .indexed_point(board.connection.destination().location())
            .expect("destination cell");
        (source, destination)
    }

    #[test]
    fn moves_off_the_grid_are_rejected() {
        let board = facing_pair_board();
        let (source, destination) = endpoints(&board);
        let analyser = CellAnalyser::new(&board.cells, &board.connection, source, destination);

        assert!(!analyser.is_move_allowed(IndexedPoint::new(0, 0), Direction::West));
        assert!(!analyser.is_move_allowed(IndexedPoint::new(0, 0), Direction::North));
    }

    #[test]
    fn private_rows_only_serve_their_own_endpoints() {
        let board = facing_pair_board();
        let (source, destination) = endpoints(&board);
        let analyser = CellAnalyser::new(&board.cells, &board.connection, source, destination);

        // The endpoint row (y = 1.0, private) is usable by this connection.
        let on_endpoint_row = IndexedPoint::new(2, source.y());
        assert!(analyser.is_move_allowed(on_endpoint_row, Direction::East));

        // A different connection whose endpoints live elsewhere cannot ride
        // that private row.
        let elsewhere = RouterConnection::new(
            RouterPort::flexible(Direction::East, Point::new(-0.5, -0.5)),
            RouterPort::flexible(Direction::West, Point::new(12.5, -0.5)),
        );
        let top_left = IndexedPoint::new(0, 0);
        let stranger = CellAnalyser::new(&board.cells, &elsewhere, top_left, top_left);
        assert!(!stranger.is_move_allowed(on_endpoint_row, Direction::East));
    }

    #[test]
    fn public_lanes_are_open_to_everyone() {
        let board = facing_pair_board();
        let top_left = IndexedPoint::new(0, 0);
        let elsewhere = RouterConnection::new(
            RouterPort::flexible(Direction::East, Point::new(-0.5, -0.5)),
            RouterPort::flexible(Direction::West, Point::new(12.5, -0.5)),
        );
        let analyser = CellAnalyser::new(&board.cells, &elsewhere, top_left, top_left);

        // y = -0.5 (index 0) is a public row.
        assert!(analyser.is_move_allowed(IndexedPoint::new(1, 0), Direction::East));
    }

    #[test]
    fn fixed_destination_constrains_the_exit_step() {
        let base = fixtures::facing_pair();
        let mut task = crate::model::RoutingTask::new();
        for rectangle in base.rectangles() {
            task.add_rectangle(*rectangle);
        }
        task.add_connection(RouterConnection::new(
            base.connections()[0].source(),
            RouterPort::fixed(Direction::West, base.connections()[0].destination().location()),
        ));

        let registry = build_coordinates(&task);
        let cells = build_cells(&registry, &task);
        let connection = task.connections()[0];
        let source = registry.indexed_point(connection.source().location()).expect("cell");
        let destination =
            registry.indexed_point(connection.destination().location()).expect("cell");
        let analyser = CellAnalyser::new(&cells, &connection, source, destination);

        // Leaving the destination (in search order) must follow the port's
        // facing: West.
        assert!(analyser.is_move_allowed(destination, Direction::West));
        assert!(!analyser.is_move_allowed(destination, Direction::East));
        assert!(!analyser.is_move_allowed(destination, Direction::North));
    }

    #[test]
    fn fixed_source_constrains_the_entry_step() {
        let board = facing_pair_board();
        let (source, destination) = endpoints(&board);
        let fixed = RouterConnection::new(
            RouterPort::fixed(
                board.connection.source().direction(),
                board.connection.source().location(),
            ),
            board.connection.destination(),
        );
        let analyser = CellAnalyser::new(&board.cells, &fixed, source, destination);

        // The forward route leaves an east-facing source eastward, so in
        // search order the source is entered stepping West.
        let east_neighbor = IndexedPoint::new(source.x() + 1, source.y());
        assert!(analyser.is_move_allowed(east_neighbor, Direction::West));

        let north_neighbor = IndexedPoint::new(source.x(), source.y() - 1);
        assert!(!analyser.is_move_allowed(north_neighbor, Direction::South));
    }

    #[test]
    fn costs_distinguish_straight_turn_and_busy_moves() {
        let board = facing_pair_board();
        let (source, destination) = endpoints(&board);
        let analyser = CellAnalyser::new(&board.cells, &board.connection, source, destination);

        // Straight along the endpoint row, leaving the busy source cell.
        assert_eq!(analyser.move_cost(Some(Direction::East), source, Direction::East), Some(1.0));
        assert_eq!(analyser.move_cost(None, source, Direction::East), Some(1.0));

        // Entering the busy source cell from open space.
        let before_busy = IndexedPoint::new(source.x() + 1, source.y());
        assert_eq!(
            analyser.move_cost(Some(Direction::West), before_busy, Direction::West),
            Some(BUSY_CROSS_PENALTY)
        );

        // Turning north onto the shared public column (x = 6.0).
        let on_public_column = IndexedPoint::new(2, source.y());
        let turn = analyser.move_cost(Some(Direction::East), on_public_column, Direction::North);
        assert_eq!(turn, Some(TURN_PENALTY));
    }
}
