// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::geometry::{Direction, Point};

/// A connection endpoint: a pin-like port on the schematic.
///
/// A fixed-direction port forces the first/last route segment to leave/enter
/// exactly along `direction`; a flexible port lets the search use any of the
/// four neighboring cells.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RouterPort {
    location: Point,
    direction: Direction,
    fixed_direction: bool,
}

impl RouterPort {
    pub fn fixed(direction: Direction, location: Point) -> Self {
        Self { location, direction, fixed_direction: true }
    }

    pub fn flexible(direction: Direction, location: Point) -> Self {
        Self { location, direction, fixed_direction: false }
    }

    pub fn location(&self) -> Point {
        self.location
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_fixed_direction(&self) -> bool {
        self.fixed_direction
    }
}

/// An ordered (source, destination) pair of ports: one routing request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RouterConnection {
    source: RouterPort,
    destination: RouterPort,
}

impl RouterConnection {
    pub fn new(source: RouterPort, destination: RouterPort) -> Self {
        Self { source, destination }
    }

    pub fn source(&self) -> RouterPort {
        self.source
    }

    pub fn destination(&self) -> RouterPort {
        self.destination
    }
}
