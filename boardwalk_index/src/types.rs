// Copyright 2026 the Boardwalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Query box, traversal flow signal, and the region-query trait.

use core::fmt::Debug;

/// An axis-aligned bounding box over an ordered scalar.
///
/// Invariant: `x1 <= x2` and `y1 <= y2`. Boxes are closed on all four edges,
/// so a degenerate box (`x1 == x2`, `y1 == y2`) still contains its one point
/// and intersects boxes that touch it. Zero-radius queries rely on this.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Aabb<T> {
    /// Minimum x.
    pub x1: T,
    /// Minimum y.
    pub y1: T,
    /// Maximum x.
    pub x2: T,
    /// Maximum y.
    pub y2: T,
}

impl<T: Copy + PartialOrd + Debug> Aabb<T> {
    /// Creates a box from its extents.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the extents are inverted.
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        debug_assert!(x1 <= x2 && y1 <= y2, "inverted box extents");
        Self { x1, y1, x2, y2 }
    }

    /// Returns `true` if the point lies inside or on the edge of the box.
    #[inline]
    pub fn contains_point(&self, x: T, y: T) -> bool {
        self.x1 <= x && x <= self.x2 && self.y1 <= y && y <= self.y2
    }

    /// Returns `true` if the two boxes share at least one point.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x1 <= other.x2 && other.x1 <= self.x2 && self.y1 <= other.y2 && other.y1 <= self.y2
    }
}

/// Flow signal returned by a traversal visitor after each candidate.
///
/// This replaces non-local escapes from an in-progress traversal: the
/// iteration loop checks the returned value after every visited slot and
/// unwinds normally. `Found` and `Cancel` both stop the scan; they differ
/// only in what the caller should conclude afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum Visit {
    /// Keep scanning candidates.
    Continue,
    /// Stop scanning; the visitor has recorded the result it wanted.
    Found,
    /// Stop scanning without a result.
    Cancel,
}

/// A structure that can invoke a visitor per stored slot in a query region.
///
/// Implementations must call `f` at most once per slot, only for slots whose
/// box intersects `query`, and must stop as soon as `f` returns anything
/// other than [`Visit::Continue`]. Visit order is unspecified.
pub trait RegionQuery<T> {
    /// Visits slots intersecting `query`, honoring the visitor's flow signal.
    ///
    /// Returns the flow value that ended the traversal, or
    /// [`Visit::Continue`] if every candidate was visited.
    fn traverse<F: FnMut(usize) -> Visit>(&self, query: Aabb<T>, f: F) -> Visit;
}
