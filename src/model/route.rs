// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::geometry::Point;
use super::port::RouterPort;

/// A computed wire: a cleaned orthogonal polyline tied to its connection.
///
/// Invariants (upheld by the search, relied on by the editor):
/// - consecutive points differ in exactly one axis,
/// - the first point is the source port location and the last the
///   destination port location,
/// - no interior point is collinear with both of its neighbors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    source: RouterPort,
    destination: RouterPort,
    points: Vec<Point>,
}

impl Route {
    pub(crate) fn new(source: RouterPort, destination: RouterPort, points: Vec<Point>) -> Self {
        Self { source, destination, points }
    }

    pub fn source(&self) -> RouterPort {
        self.source
    }

    pub fn destination(&self) -> RouterPort {
        self.destination
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consecutive point pairs, one per wire segment.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

/// Why a single connection could not be routed. The rest of the task's
/// connections are unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteFailure {
    /// The source port location is not covered by the coordinate grid.
    SourceOutsideGrid,
    /// The destination port location is not covered by the coordinate grid.
    DestinationOutsideGrid,
    /// The search exhausted all reachable cells without reaching the source.
    Unreachable,
}

impl fmt::Display for RouteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceOutsideGrid => f.write_str("source port lies outside the routing grid"),
            Self::DestinationOutsideGrid => {
                f.write_str("destination port lies outside the routing grid")
            }
            Self::Unreachable => f.write_str("no route exists between the connected ports"),
        }
    }
}

impl std::error::Error for RouteFailure {}

#[cfg(test)]
mod tests {
    use crate::model::geometry::{Direction, Point};
    use crate::model::port::RouterPort;

    use super::Route;

    #[test]
    fn segments_pair_consecutive_points() {
        let source = RouterPort::flexible(Direction::East, Point::new(0.0, 0.0));
        let destination = RouterPort::flexible(Direction::West, Point::new(2.0, 2.0));
        let route = Route::new(
            source,
            destination,
            vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(2.0, 2.0)],
        );

        let segments = route.segments().collect::<Vec<_>>();
        assert_eq!(
            segments,
            vec![
                (Point::new(0.0, 0.0), Point::new(2.0, 0.0)),
                (Point::new(2.0, 0.0), Point::new(2.0, 2.0)),
            ]
        );
    }
}
