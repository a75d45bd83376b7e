// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Proteus — orthogonal wire routing for circuit schematics.
//!
//! The editor hands [`router::Router`] a [`model::RoutingTask`] snapshot whenever the
//! schematic geometry changes; the router rebuilds routes and grid diagnostics only when
//! the task actually differs (whole-task value memoization).

pub mod grid;
pub mod model;
pub mod render;
pub mod route;
pub mod router;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}
