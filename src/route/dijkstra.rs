// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use smallvec::SmallVec;

use crate::grid::{CoordinatesRegistry, IndexedPoint, RouterCells};
use crate::model::{Direction, Route, RouteFailure, RouterConnection};

use super::analyser::CellAnalyser;

/// Expansion order of the four neighbors. Fixed so that equal-cost
/// relaxations resolve identically on every run.
const STEPS: [Direction; 4] = [
    Direction::East,
    Direction::West,
    Direction::South,
    Direction::North,
];

/// A successfully routed connection: the real-coordinate route plus its
/// grid corners (the cleaned index path), which feed the usage counter.
#[derive(Debug)]
pub(crate) struct RoutedConnection {
    pub route: Route,
    pub corners: SmallVec<[IndexedPoint; 8]>,
}

/// Queue entry: accumulated cost plus the cell, ordered by cost with
/// lexicographic (x, y) tie-breaking for reproducible searches.
#[derive(Debug, Clone, Copy)]
struct VisitPoint {
    score: f64,
    location: IndexedPoint,
}

impl PartialEq for VisitPoint {
    fn eq(&self, other: &Self) -> bool {
        self.score.total_cmp(&other.score).is_eq() && self.location == other.location
    }
}

impl Eq for VisitPoint {}

impl PartialOrd for VisitPoint {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VisitPoint {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.location.cmp(&other.location))
    }
}

/// Reusable flat search state, generation-stamped so consecutive searches
/// over the same grid reset in O(1).
#[derive(Debug, Default)]
pub(crate) struct SearchScratch {
    visit_gen: Vec<u32>,
    score_gen: Vec<u32>,
    scores: Vec<f64>,
    came_from: Vec<i32>,
    gen: u32,
    heap: BinaryHeap<Reverse<VisitPoint>>,
}

impl SearchScratch {
    fn begin(&mut self, len: usize) {
        if self.visit_gen.len() != len {
            self.visit_gen = vec![0; len];
            self.score_gen = vec![0; len];
            self.scores = vec![0.0; len];
            self.came_from = vec![-1; len];
            self.gen = 0;
        }

        self.gen = self.gen.wrapping_add(1);
        if self.gen == 0 {
            self.visit_gen.fill(0);
            self.score_gen.fill(0);
            self.gen = 1;
        }
        self.heap.clear();
    }

    fn is_visited(&self, idx: usize) -> bool {
        self.visit_gen[idx] == self.gen
    }

    fn mark_visited(&mut self, idx: usize) {
        self.visit_gen[idx] = self.gen;
    }

    fn score(&self, idx: usize) -> f64 {
        if self.score_gen[idx] == self.gen {
            self.scores[idx]
        } else {
            f64::INFINITY
        }
    }

    fn set_score(&mut self, idx: usize, score: f64, came_from: i32) {
        self.score_gen[idx] = self.gen;
        self.scores[idx] = score;
        self.came_from[idx] = came_from;
    }

    fn predecessor(&self, idx: usize) -> Option<usize> {
        if self.score_gen[idx] != self.gen || self.came_from[idx] < 0 {
            return None;
        }
        Some(self.came_from[idx] as usize)
    }
}

/// Route one connection over the phase-1 grid.
///
/// The search runs in reverse, destination to source, so that following the
/// predecessor arena from the source cell yields the path already in
/// source-to-destination order.
pub(crate) fn route_connection(
    connection: &RouterConnection,
    registry: &CoordinatesRegistry,
    cells: &RouterCells,
    scratch: &mut SearchScratch,
) -> Result<RoutedConnection, RouteFailure> {
    let source = registry
        .indexed_point(connection.source().location())
        .ok_or(RouteFailure::SourceOutsideGrid)?;
    let destination = registry
        .indexed_point(connection.destination().location())
        .ok_or(RouteFailure::DestinationOutsideGrid)?;

    let height = cells.height();
    let flat = |p: IndexedPoint| p.x() * height + p.y();
    let unflat = |idx: usize| IndexedPoint::new(idx / height, idx % height);

    let analyser = CellAnalyser::new(cells, connection, source, destination);

    scratch.begin(cells.width() * height);
    scratch.set_score(flat(destination), 0.0, -1);
    scratch
        .heap
        .push(Reverse(VisitPoint { score: 0.0, location: destination }));

    let source_idx = flat(source);
    let mut found = false;

    while let Some(Reverse(visit)) = scratch.heap.pop() {
        let idx = flat(visit.location);
        if scratch.is_visited(idx) {
            continue;
        }
        scratch.mark_visited(idx);

        if visit.location == source {
            found = true;
            break;
        }

        let last_step = scratch
            .predecessor(idx)
            .map(|prev| step_between(unflat(prev), visit.location));

        for step in STEPS {
            let Some(cost) = analyser.move_cost(last_step, visit.location, step) else {
                continue;
            };

            let target = IndexedPoint::new(
                (visit.location.x() as i64 + step.dx() as i64) as usize,
                (visit.location.y() as i64 + step.dy() as i64) as usize,
            );
            let target_idx = flat(target);
            if scratch.is_visited(target_idx) {
                continue;
            }

            // Ties overwrite: among equal-cost predecessors the one relaxed
            // last (in deterministic pop order) wins, which keeps corner
            // counts minimal in symmetric layouts instead of freezing the
            // first kinked candidate.
            let new_score = visit.score + cost;
            if new_score <= scratch.score(target_idx) {
                scratch.set_score(target_idx, new_score, idx as i32);
                scratch
                    .heap
                    .push(Reverse(VisitPoint { score: new_score, location: target }));
            }
        }
    }

    if !found {
        return Err(RouteFailure::Unreachable);
    }

    let mut path = Vec::<IndexedPoint>::new();
    let mut cursor = source_idx;
    path.push(unflat(cursor));
    while let Some(prev) = scratch.predecessor(cursor) {
        cursor = prev;
        path.push(unflat(cursor));
    }

    let corners = clean_path(&path);
    let points = corners
        .iter()
        .map(|corner| registry.point(corner.x(), corner.y()))
        .collect::<Vec<_>>();

    Ok(RoutedConnection {
        route: Route::new(connection.source(), connection.destination(), points),
        corners,
    })
}

fn step_between(from: IndexedPoint, to: IndexedPoint) -> Direction {
    if to.x() > from.x() {
        Direction::East
    } else if to.x() < from.x() {
        Direction::West
    } else if to.y() > from.y() {
        Direction::South
    } else {
        Direction::North
    }
}

/// Drop interior points that are collinear with both neighbors, leaving
/// only the endpoints and the corners.
fn clean_path(path: &[IndexedPoint]) -> SmallVec<[IndexedPoint; 8]> {
    let mut corners = SmallVec::new();
    corners.push(path[0]);

    for i in 1..path.len().saturating_sub(1) {
        if !collinear(path[i - 1], path[i], path[i + 1]) {
            corners.push(path[i]);
        }
    }

    if path.len() > 1 {
        corners.push(path[path.len() - 1]);
    }
    corners
}

fn collinear(a: IndexedPoint, b: IndexedPoint, c: IndexedPoint) -> bool {
    (a.x() == b.x() && b.x() == c.x()) || (a.y() == b.y() && b.y() == c.y())
}
