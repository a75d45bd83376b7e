// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Per-axis coordinate lines and their integer index mapping.
//!
//! Coordinates are accumulated (with orientation/visibility merging) into a
//! [`CoordinateAccumulator`], then frozen into an [`IndexedCoordinates`] for
//! querying. The two phases are separate types on purpose: the frozen side
//! has no interior mutability and no rebuild flag.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::snap::snap_to_closest;
use super::{EPSILON, MINOR_SNAP};

/// Which side of an obstacle boundary a coordinate line represents, used
/// when merging adjoining clearance lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Faces lower coordinate values (a body's low-side clearance).
    Lower,
    /// Faces higher coordinate values (a body's high-side clearance).
    Higher,
    /// Faces both sides (a shared lane between two bodies, or a port's
    /// parallel lane).
    Both,
    /// No boundary association (an isolated body's center anchor).
    None,
}

impl Orientation {
    pub fn merge(self, other: Orientation) -> Orientation {
        match (self, other) {
            (a, b) if a == b => a,
            (Orientation::None, b) => b,
            (a, Orientation::None) => a,
            _ => Orientation::Both,
        }
    }
}

/// A single grid line on one axis.
///
/// Public lanes may be traversed by any route; private lanes only carry the
/// routes of their own connection endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    value: f64,
    orientation: Orientation,
    public: bool,
}

impl Coordinate {
    pub fn new(value: f64, orientation: Orientation, public: bool) -> Self {
        Self { value, orientation, public }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_public(&self) -> bool {
        self.public
    }
}

/// A small-integer grid cell coordinate: the search-node identity.
///
/// Derived ordering is lexicographic on (x, y), which is what gives the
/// search its deterministic tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexedPoint {
    x: usize,
    y: usize,
}

impl IndexedPoint {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }
}

/// An inclusive index range on one axis, normalized at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexInterval {
    from: usize,
    to: usize,
}

impl IndexInterval {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from: from.min(to), to: from.max(to) }
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }
}

/// Total order on raw f64 bits; key type for the accumulator/index maps.
#[derive(Debug, Clone, Copy)]
struct OrdF64(f64);

impl PartialEq for OrdF64 {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0).is_eq()
    }
}

impl Eq for OrdF64 {}

impl PartialOrd for OrdF64 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrdF64 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Mutable, sorted collector of one axis's coordinate lines.
///
/// Re-adding an existing value merges the orientations and upgrades the line
/// to public if either registration was public (never downgrades).
#[derive(Debug, Clone, Default)]
pub struct CoordinateAccumulator {
    values: BTreeMap<OrdF64, Coordinate>,
}

impl CoordinateAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn add_public(&mut self, orientation: Orientation, value: f64) {
        self.add(orientation, true, value);
    }

    pub fn add_private(&mut self, orientation: Orientation, value: f64) {
        self.add(orientation, false, value);
    }

    /// Carry an existing coordinate over verbatim (subject to merging).
    pub fn add_coordinate(&mut self, coordinate: Coordinate) {
        self.add(coordinate.orientation(), coordinate.is_public(), coordinate.value());
    }

    fn add(&mut self, orientation: Orientation, public: bool, value: f64) {
        let key = OrdF64(value);
        let merged = match self.values.get(&key) {
            Some(existing) => Coordinate::new(
                value,
                existing.orientation().merge(orientation),
                existing.is_public() || public,
            ),
            None => Coordinate::new(value, orientation, public),
        };
        self.values.insert(key, merged);
    }

    pub fn remove(&mut self, value: f64) {
        self.values.remove(&OrdF64(value));
    }

    /// True when any registered value lies in `[from - ε, to + ε]`.
    pub fn is_interval_occupied(&self, from: f64, to: f64) -> bool {
        debug_assert!(from <= to, "interval borders must run from lower to higher");
        self.values
            .range(OrdF64(from - EPSILON)..=OrdF64(to + EPSILON))
            .next()
            .is_some()
    }

    /// Collapse redundant public clearance boundaries left by closely packed
    /// obstacles, scanning in increasing value order:
    ///
    /// - Higher directly followed by Higher: the earlier bound is interior
    ///   and dropped (keep the outermost).
    /// - Higher directly followed by Lower: the two clearance lanes overlap;
    ///   both are replaced by one shared Both-oriented lane at their snapped
    ///   midpoint.
    /// - Lower directly followed by Lower: the later bound is interior and
    ///   dropped.
    ///
    /// Without this, two bodies closer than a snap pitch would produce
    /// degenerate zero-width lanes between their boundaries.
    pub fn merge_boundaries(&mut self) {
        let mut to_add = Vec::<Coordinate>::new();
        let mut to_delete = Vec::<f64>::new();

        let mut last: Option<Coordinate> = None;
        for coordinate in self.values.values().copied() {
            if !coordinate.is_public() {
                continue;
            }

            if coordinate.orientation() == Orientation::Higher {
                if let Some(prev) = last {
                    if prev.orientation() == Orientation::Higher {
                        to_delete.push(prev.value());
                    }
                }
                last = Some(coordinate);
                continue;
            }

            if coordinate.orientation() == Orientation::Lower {
                match last.map(|prev| prev.orientation()) {
                    Some(Orientation::Higher) => {
                        let prev = last.expect("checked above");
                        let middle = snap_to_closest(
                            (prev.value() + coordinate.value()) / 2.0,
                            MINOR_SNAP,
                        );
                        to_add.push(Coordinate::new(middle, Orientation::Both, true));
                        to_delete.push(prev.value());
                        to_delete.push(coordinate.value());
                    }
                    Some(Orientation::Lower) => {
                        to_delete.push(coordinate.value());
                    }
                    _ => {}
                }
            }

            last = Some(coordinate);
        }

        for value in to_delete {
            self.remove(value);
        }
        for coordinate in to_add {
            self.add_coordinate(coordinate);
        }
    }

    /// Freeze into the immutable, index-queryable form.
    pub fn into_indexed(self) -> IndexedCoordinates {
        let coords = self.values.into_values().collect::<Vec<_>>();
        let by_value = coords
            .iter()
            .enumerate()
            .map(|(index, coordinate)| (OrdF64(coordinate.value()), index))
            .collect::<BTreeMap<_, _>>();
        IndexedCoordinates { coords, by_value }
    }
}

/// One axis's frozen, sorted, deduplicated coordinate lines with stable
/// integer indices and epsilon-tolerant interval queries.
#[derive(Debug, Clone, Default)]
pub struct IndexedCoordinates {
    coords: Vec<Coordinate>,
    by_value: BTreeMap<OrdF64, usize>,
}

impl IndexedCoordinates {
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coords
    }

    pub fn coordinate_at(&self, index: usize) -> Coordinate {
        self.coords[index]
    }

    pub fn value_at(&self, index: usize) -> f64 {
        self.coords[index].value()
    }

    pub fn is_public(&self, value: f64) -> bool {
        self.by_value
            .get(&OrdF64(value))
            .map(|&index| self.coords[index].is_public())
            .unwrap_or(false)
    }

    /// The index of the coordinate matching `value` within epsilon.
    pub fn index_of(&self, value: f64) -> Option<usize> {
        self.indexed_interval(value, value).map(|interval| interval.from())
    }

    /// Indices of all coordinates whose values lie in `[from - ε, to + ε]`,
    /// or `None` when the interval covers no coordinate.
    pub fn indexed_interval(&self, from: f64, to: f64) -> Option<IndexInterval> {
        debug_assert!(from <= to, "interval borders must run from lower to higher");
        self.interval_between(from - EPSILON, to + EPSILON)
    }

    /// Like [`indexed_interval`](Self::indexed_interval), but strictly
    /// excluding coordinates at the boundary values themselves.
    pub fn indexed_interval_exclusive(&self, from: f64, to: f64) -> Option<IndexInterval> {
        debug_assert!(from <= to, "interval borders must run from lower to higher");
        self.interval_between(from + 2.0 * EPSILON, to - 2.0 * EPSILON)
    }

    fn interval_between(&self, min: f64, max: f64) -> Option<IndexInterval> {
        let from = self.by_value.range(OrdF64(min)..).next().map(|(_, &index)| index)?;
        let to = self.by_value.range(..=OrdF64(max)).next_back().map(|(_, &index)| index)?;
        (from <= to).then(|| IndexInterval::new(from, to))
    }
}

impl PartialEq for IndexedCoordinates {
    fn eq(&self, other: &Self) -> bool {
        self.coords == other.coords
    }
}

impl Eq for IndexedCoordinates {}
