// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Epsilon-tolerant rounding to a grid pitch.
//!
//! Values already on the pitch (within [`EPSILON`](super::EPSILON)) are fixed
//! points of both directed snaps, so repeated snapping never drifts.

use super::EPSILON;

/// Snap `value` up to the next multiple of `snap`.
pub fn snap_to_higher(value: f64, snap: f64) -> f64 {
    debug_assert!(snap > 0.0, "snap size must be positive");
    ((value - EPSILON) / snap).ceil() * snap
}

/// Snap `value` down to the previous multiple of `snap`.
pub fn snap_to_lower(value: f64, snap: f64) -> f64 {
    debug_assert!(snap > 0.0, "snap size must be positive");
    ((value + EPSILON) / snap).floor() * snap
}

/// Snap `value` to the nearest multiple of `snap`.
pub fn snap_to_closest(value: f64, snap: f64) -> f64 {
    debug_assert!(snap > 0.0, "snap size must be positive");
    (value / snap).round() * snap
}
