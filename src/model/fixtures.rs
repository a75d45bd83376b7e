// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Shared deterministic routing-task fixtures (no RNG).

use super::geometry::{Direction, Point, Rectangle};
use super::port::{RouterConnection, RouterPort};
use super::task::RoutingTask;

/// Two 2x2 component bodies with a clear straight lane between their
/// facing ports: east port of the left body to west port of the right body.
pub(crate) fn facing_pair() -> RoutingTask {
    let mut task = RoutingTask::new();
    task.add_rectangle(Rectangle::new(0.0, 0.0, 2.0, 2.0));
    task.add_rectangle(Rectangle::new(10.0, 0.0, 2.0, 2.0));
    task.add_connection(RouterConnection::new(
        RouterPort::flexible(Direction::East, Point::new(2.0, 1.0)),
        RouterPort::flexible(Direction::West, Point::new(10.0, 1.0)),
    ));
    task
}

/// Same as [`facing_pair`], with a third 2x2 body dropped onto the direct
/// line so the route has to go around it.
pub(crate) fn facing_pair_blocked() -> RoutingTask {
    let mut task = facing_pair();
    task.add_rectangle(Rectangle::new(5.0, 0.0, 2.0, 2.0));
    task
}

/// A 2x2 arrangement of bodies with two crossing connections, for usage
/// and determinism coverage.
pub(crate) fn crossing_board() -> RoutingTask {
    let mut task = RoutingTask::new();
    task.add_rectangle(Rectangle::new(0.0, 0.0, 2.0, 2.0));
    task.add_rectangle(Rectangle::new(10.0, 0.0, 2.0, 2.0));
    task.add_rectangle(Rectangle::new(0.0, 8.0, 2.0, 2.0));
    task.add_rectangle(Rectangle::new(10.0, 8.0, 2.0, 2.0));

    task.add_connection(RouterConnection::new(
        RouterPort::flexible(Direction::East, Point::new(2.0, 1.0)),
        RouterPort::flexible(Direction::West, Point::new(10.0, 9.0)),
    ));
    task.add_connection(RouterConnection::new(
        RouterPort::flexible(Direction::East, Point::new(2.0, 9.0)),
        RouterPort::flexible(Direction::West, Point::new(10.0, 1.0)),
    ));
    task
}
