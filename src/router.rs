// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The routing façade: whole-task memoized rebuilds.

use crate::grid::{build_cells, build_coordinates, build_from_usage};
use crate::grid::{CoordinatesRegistry, RouterCells};
use crate::model::{Route, RouteFailure, RouterConnection, RoutingTask};
use crate::route::dijkstra::{route_connection, SearchScratch};
use crate::route::UsageCounter;

/// Everything one rebuild produces, replaced atomically per task change.
///
/// The registry and cell grid here are the phase-2 (usage-compacted) ones
/// meant for rendering and diagnostics; routing correctness is decided on
/// the phase-1 grid inside [`build`].
#[derive(Debug, Clone, Default)]
pub struct RoutingResult {
    routes: Vec<Route>,
    unrouted: Vec<(RouterConnection, RouteFailure)>,
    coordinates: CoordinatesRegistry,
    cells: RouterCells,
}

impl RoutingResult {
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn unrouted(&self) -> &[(RouterConnection, RouteFailure)] {
        &self.unrouted
    }

    pub fn coordinates(&self) -> &CoordinatesRegistry {
        &self.coordinates
    }

    pub fn cells(&self) -> &RouterCells {
        &self.cells
    }
}

/// Compute routes and diagnostics for a task.
///
/// Pure: same task in, same result out. The [`Router`] façade memoizes this
/// on task value-equality; callers with their own caching can invoke it
/// directly.
pub fn build(task: &RoutingTask) -> RoutingResult {
    let phase1 = build_coordinates(task);
    let phase1_cells = build_cells(&phase1, task);

    let mut routes = Vec::with_capacity(task.connections().len());
    let mut unrouted = Vec::new();
    let mut usage = UsageCounter::new(phase1.width(), phase1.height());
    let mut scratch = SearchScratch::default();

    for connection in task.connections() {
        match route_connection(connection, &phase1, &phase1_cells, &mut scratch) {
            Ok(routed) => {
                for pair in routed.corners.windows(2) {
                    usage.mark_segment(pair[0], pair[1]);
                }
                routes.push(routed.route);
            }
            Err(failure) => unrouted.push((*connection, failure)),
        }
    }

    let phase2 = build_from_usage(task, &phase1, &usage);
    let phase2_cells = build_cells(&phase2, task);

    RoutingResult {
        routes,
        unrouted,
        coordinates: phase2,
        cells: phase2_cells,
    }
}

/// Holds the last task and its outputs; rebuilds only when the task
/// actually changes.
///
/// Not reentrant: a rebuild runs to completion inside [`set_task`]
/// (coordinates, cells, routes, compaction) before the outputs are swapped,
/// and callers serialize access.
///
/// [`set_task`]: Self::set_task
#[derive(Debug, Default)]
pub struct Router {
    task: Option<RoutingTask>,
    result: RoutingResult,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new task. Returns `false` (and does nothing) when the task
    /// value-equals the current one.
    pub fn set_task(&mut self, task: RoutingTask) -> bool {
        if self.task.as_ref() == Some(&task) {
            return false;
        }

        self.result = build(&task);
        self.task = Some(task);
        true
    }

    pub fn task(&self) -> Option<&RoutingTask> {
        self.task.as_ref()
    }

    /// One cleaned orthogonal polyline per successfully routed connection.
    pub fn routes(&self) -> &[Route] {
        self.result.routes()
    }

    /// Connections that could not be routed, with the reason each failed.
    pub fn unrouted(&self) -> &[(RouterConnection, RouteFailure)] {
        self.result.unrouted()
    }

    /// The compacted (usage-driven) coordinate registry, for grid overlays.
    pub fn coordinates(&self) -> &CoordinatesRegistry {
        self.result.coordinates()
    }

    /// The compacted grid's cell flags, for busy/blocked/lane diagnostics.
    pub fn cells(&self) -> &RouterCells {
        self.result.cells()
    }
}
