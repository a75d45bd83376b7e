// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::geometry::{Rectangle, Segment};
use super::port::{RouterConnection, RouterPort};

/// The full input snapshot for one routing computation: obstacle rectangles,
/// connections (ports are implied by connections), and pin-stub segments.
///
/// Two tasks are equal iff all collections are equal. The schematic layer
/// builds tasks by deterministic model traversal, so this order-sensitive
/// structural equality is the router's sole memoization key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoutingTask {
    rectangles: Vec<Rectangle>,
    connections: Vec<RouterConnection>,
    segments: Vec<Segment>,
}

impl RoutingTask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_rectangle(&mut self, rectangle: Rectangle) {
        self.rectangles.push(rectangle);
    }

    pub fn add_connection(&mut self, connection: RouterConnection) {
        self.connections.push(connection);
    }

    pub fn add_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    pub fn connections(&self) -> &[RouterConnection] {
        &self.connections
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// All connection endpoints, source before destination, in connection
    /// order. Ports shared by several connections appear once per use.
    pub fn ports(&self) -> impl Iterator<Item = RouterPort> + '_ {
        self.connections.iter().flat_map(|connection| {
            [connection.source(), connection.destination()]
        })
    }
}
