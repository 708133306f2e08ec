// Copyright 2026 the Boardwalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angle normalization and angular spans.

use core::f64::consts::PI;

/// Maps an angle into the canonical half-open turn `[0, 2π)`.
///
/// Normalization is by repeated addition/subtraction rather than `rem_euclid`
/// so that angles already in range (and the exact values produced by the span
/// arithmetic elsewhere) pass through bit-identically.
#[must_use]
pub fn normalize_angle(mut angle: f64) -> f64 {
    while angle < 0.0 {
        angle += 2.0 * PI;
    }
    while angle >= 2.0 * PI {
        angle -= 2.0 * PI;
    }
    angle
}

/// An angular interval: a start angle plus a signed delta, in radians.
///
/// Angles follow the mathematical convention (zero at +x, positive towards
/// +y). A positive delta winds forward from `start`, a negative delta winds
/// backward. Deltas may exceed a full turn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Span {
    /// Start angle in radians.
    pub start: f64,
    /// Signed angular extent in radians.
    pub delta: f64,
}

impl Span {
    /// Creates a span from start and signed delta.
    #[must_use]
    pub const fn new(start: f64, delta: f64) -> Self {
        Self { start, delta }
    }

    /// The angle at the far end of the span.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.start + self.delta
    }

    /// Returns `true` if `theta` lies within the span, boundaries included.
    ///
    /// For a positive delta the forward angular distance from `start` to
    /// `theta` must not exceed `delta`; symmetrically backward for a negative
    /// delta. No angular epsilon is built in: callers needing tolerance must
    /// add it themselves.
    #[must_use]
    pub fn contains(&self, theta: f64) -> bool {
        if self.delta > 0.0 {
            self.delta >= normalize_angle(theta - self.start)
        } else {
            -self.delta >= normalize_angle(self.start - theta)
        }
    }

    /// An equivalent span with a non-negative delta.
    fn forward(&self) -> Self {
        if self.delta < 0.0 {
            Self {
                start: normalize_angle(self.start + self.delta),
                delta: -self.delta,
            }
        } else {
            *self
        }
    }

    /// Returns `true` if the two spans share any angle.
    ///
    /// True iff any endpoint of one span lies inside the other; a span that
    /// covers a full turn contains every angle, so this test is complete.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        let a = self.forward();
        let b = other.forward();
        a.contains(b.start)
            || a.contains(b.end())
            || b.contains(a.start)
            || b.contains(a.end())
    }

    /// Computes the overlapping sub-span, if any.
    ///
    /// The result winds forward regardless of the inputs' winding. When the
    /// spans intersect in two disjoint pieces (both wrap past each other's
    /// gap), only the piece beginning at the later start is reported; this
    /// matches the case analysis the hit-testing callers rely on and is a
    /// documented limit, not a bug to fix.
    #[must_use]
    pub fn overlap(&self, other: &Self) -> Option<Self> {
        let a = self.forward();
        let b = other.forward();
        if !a.overlaps(&b) {
            return None;
        }

        let start = if a.contains(b.start) { b.start } else { a.start };
        let end = if a.contains(b.end()) { b.end() } else { a.end() };
        let delta = normalize_angle(end - start);
        Some(Self {
            start: normalize_angle(start),
            delta,
        })
    }
}
