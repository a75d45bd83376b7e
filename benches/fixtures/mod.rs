// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use proteus::model::{
    Direction, Point, Rectangle, RouterConnection, RouterPort, RoutingTask, Segment,
};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    MediumGrid,
    LargeGrid,
}

pub fn task(case: Case) -> RoutingTask {
    match case {
        Case::Small => pair(),
        Case::MediumGrid => component_grid(GridParams::new(4, 3)),
        Case::LargeGrid => component_grid(GridParams::new(8, 6)),
    }
}

fn pair() -> RoutingTask {
    let mut task = RoutingTask::new();
    task.add_rectangle(Rectangle::new(0.0, 0.0, 2.0, 2.0));
    task.add_rectangle(Rectangle::new(10.0, 0.0, 2.0, 2.0));
    task.add_connection(RouterConnection::new(
        RouterPort::flexible(Direction::East, Point::new(2.0, 1.0)),
        RouterPort::flexible(Direction::West, Point::new(10.0, 1.0)),
    ));
    task
}

#[derive(Debug, Clone, Copy)]
pub struct GridParams {
    pub columns: usize,
    pub rows: usize,
}

impl GridParams {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }
}

/// A columns x rows board of 2x2 components on an 8-unit pitch. Every
/// component's east port connects to the west port of its right neighbor,
/// and every last-column component connects back to the first component of
/// the next row, so connection count scales with board size.
pub fn component_grid(params: GridParams) -> RoutingTask {
    let mut task = RoutingTask::new();
    let pitch = 8.0;

    let origin = |column: usize, row: usize| -> (f64, f64) {
        (column as f64 * pitch, row as f64 * pitch)
    };

    for row in 0..params.rows {
        for column in 0..params.columns {
            let (x, y) = origin(column, row);
            task.add_rectangle(Rectangle::new(x, y, 2.0, 2.0));
        }
    }

    let east_port = |column: usize, row: usize| -> RouterPort {
        let (x, y) = origin(column, row);
        RouterPort::flexible(Direction::East, Point::new(x + 2.5, y + 1.0))
    };
    let west_port = |column: usize, row: usize| -> RouterPort {
        let (x, y) = origin(column, row);
        RouterPort::flexible(Direction::West, Point::new(x - 0.5, y + 1.0))
    };
    let stub = |port: RouterPort, body_x: f64| -> Segment {
        Segment::new(port.location(), Point::new(body_x, port.location().y()))
            .expect("axis-aligned stub")
    };

    for row in 0..params.rows {
        for column in 0..params.columns {
            let (x, _) = origin(column, row);
            task.add_segment(stub(east_port(column, row), x + 2.0));
            task.add_segment(stub(west_port(column, row), x));
        }
    }

    for row in 0..params.rows {
        for column in 0..params.columns.saturating_sub(1) {
            task.add_connection(RouterConnection::new(
                east_port(column, row),
                west_port(column + 1, row),
            ));
        }
        if row + 1 < params.rows {
            task.add_connection(RouterConnection::new(
                east_port(params.columns - 1, row),
                west_port(0, row + 1),
            ));
        }
    }

    task
}

pub fn checksum_routes(routes: &[proteus::model::Route]) -> u64 {
    let mut acc = 0u64;
    for route in routes {
        acc = acc.wrapping_mul(131).wrapping_add(route.points().len() as u64);
        for point in route.points() {
            acc = acc.wrapping_add(point.x().to_bits() ^ point.y().to_bits());
        }
    }
    acc
}
