// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Constrained shortest-path search over the index grid.
//!
//! Each connection is routed independently by a reverse Dijkstra from its
//! destination cell, consulting a per-connection [`analyser::CellAnalyser`]
//! for movement legality and cost. Tie-breaking is deterministic, so an
//! unchanged task always reproduces the same routes.

pub mod analyser;
pub(crate) mod dijkstra;
pub mod usage;

pub use analyser::CellAnalyser;
pub use usage::UsageCounter;

/// Cost of stepping from open space into an obstacle's span: a last-resort
/// cut-through, three orders of magnitude above a straight step.
pub const BUSY_CROSS_PENALTY: f64 = 1000.0;

/// Cost of a step that changes direction. A corner trades off against ten
/// straight cells, which keeps routes visibly bend-minimal without ever
/// outweighing [`BUSY_CROSS_PENALTY`].
pub const TURN_PENALTY: f64 = 10.0;
