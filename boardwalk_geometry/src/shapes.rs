// Copyright 2026 the Boardwalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape value types: line segment, rectangle, circle, circular arc.

use crate::angle::Span;
use crate::vec2::{Coord, Vec2};

/// A line segment between two points.
///
/// May degenerate to a single point (`a == b`). Every algorithm that
/// consumes segments spells out its degenerate behavior instead of dividing
/// by a zero-length direction vector.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Seg {
    /// First endpoint.
    pub a: Vec2,
    /// Second endpoint.
    pub b: Vec2,
}

impl Seg {
    /// Creates a segment from its endpoints.
    #[must_use]
    pub const fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// Returns `true` if both endpoints coincide.
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.a == self.b
    }

    /// The displacement from `a` to `b`.
    #[must_use]
    pub fn direction(&self) -> Vec2 {
        self.b - self.a
    }
}

/// A rectangle as four corners in cyclic order; corner 0 is diagonal to
/// corner 2.
///
/// Callers must supply a true rectangle (opposite sides equal and parallel).
/// Algorithms do not detect violations; they only promise consistent answers
/// for compliant input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect4 {
    /// Corners in cyclic order.
    pub corners: [Vec2; 4],
}

impl Rect4 {
    /// Creates a rectangle from its corners.
    #[must_use]
    pub const fn new(corners: [Vec2; 4]) -> Self {
        Self { corners }
    }

    /// The four sides as segments, in cyclic order.
    #[must_use]
    pub fn sides(&self) -> [Seg; 4] {
        let c = &self.corners;
        [
            Seg::new(c[0], c[1]),
            Seg::new(c[1], c[2]),
            Seg::new(c[2], c[3]),
            Seg::new(c[3], c[0]),
        ]
    }

    /// Returns `true` if the point lies inside or on the boundary.
    ///
    /// For each pair of opposite sides, the point's distance to its nearest
    /// point on either side must not exceed the distance between the pair.
    /// Equivalent to rotating into the rectangle's local frame, without the
    /// rotation.
    #[must_use]
    pub fn contains_point(&self, p: Vec2) -> bool {
        let c = &self.corners;
        let sides = self.sides();

        // Distance between each pair of opposite sides.
        let d_01_23 = (c[3] - c[0]).magnitude();
        let d_12_30 = (c[1] - c[0]).magnitude();

        let d_to = |side: &Seg| (side.nearest_point(p) - p).magnitude();

        d_to(&sides[0]) <= d_01_23
            && d_to(&sides[2]) <= d_01_23
            && d_to(&sides[1]) <= d_12_30
            && d_to(&sides[3]) <= d_12_30
    }
}

/// A circle: center plus radius in board units.
///
/// A radius of zero is permitted only where the circle is treated as a
/// filled disk; boundary-intersection routines assert a positive radius.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Circle {
    /// Center point.
    pub center: Vec2,
    /// Radius, non-negative.
    pub radius: Coord,
}

impl Circle {
    /// Creates a circle from center and radius.
    #[must_use]
    pub const fn new(center: Vec2, radius: Coord) -> Self {
        Self { center, radius }
    }

    /// Returns `true` if the point lies in the filled disk (boundary
    /// included).
    #[must_use]
    pub fn contains_point(&self, p: Vec2) -> bool {
        (p - self.center).magnitude() <= self.radius as f64
    }
}

/// A circular arc: an underlying circle plus an angular span.
///
/// Radians, mathematical winding (zero at +x, positive towards +y). Board
/// arcs use a different convention; the model layer converts before anything
/// here sees them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Arc {
    /// The underlying circle.
    pub circle: Circle,
    /// The angular extent of the arc on that circle.
    pub span: Span,
}

impl Arc {
    /// Creates an arc from its circle and span.
    #[must_use]
    pub const fn new(circle: Circle, span: Span) -> Self {
        Self { circle, span }
    }

    /// The two points at the span's start and end angles.
    ///
    /// Endpoints are always reported as two (possibly equal) points, even
    /// when the span covers a full turn or more.
    #[must_use]
    pub fn end_points(&self) -> [Vec2; 2] {
        let r = self.circle.radius as f64;
        let c = self.circle.center;
        let at = |theta: f64| {
            Vec2::new(
                c.x + (r * theta.cos()).round() as Coord,
                c.y + (r * theta.sin()).round() as Coord,
            )
        };
        [at(self.span.start), at(self.span.end())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    #[test]
    fn circle_containment_is_inclusive() {
        let c = Circle::new(Vec2::new(0, 0), 10);
        assert!(c.contains_point(Vec2::new(10, 0)));
        assert!(c.contains_point(Vec2::new(0, 0)));
        assert!(!c.contains_point(Vec2::new(8, 8)));
    }

    #[test]
    fn axis_aligned_rect_containment() {
        let r = Rect4::new([
            Vec2::new(0, 0),
            Vec2::new(10, 0),
            Vec2::new(10, 4),
            Vec2::new(0, 4),
        ]);
        assert!(r.contains_point(Vec2::new(5, 2)));
        assert!(r.contains_point(Vec2::new(0, 0)));
        assert!(r.contains_point(Vec2::new(10, 4)));
        assert!(!r.contains_point(Vec2::new(5, 5)));
        assert!(!r.contains_point(Vec2::new(-1, 2)));
    }

    #[test]
    fn tilted_rect_containment() {
        // Unit-ish square rotated 45 degrees around the origin, scaled up.
        let r = Rect4::new([
            Vec2::new(100, 0),
            Vec2::new(0, 100),
            Vec2::new(-100, 0),
            Vec2::new(0, -100),
        ]);
        assert!(r.contains_point(Vec2::new(0, 0)));
        assert!(r.contains_point(Vec2::new(40, 40)));
        assert!(!r.contains_point(Vec2::new(80, 80)));
    }

    #[test]
    fn arc_end_points_quarter_turn() {
        let arc = Arc::new(
            Circle::new(Vec2::new(0, 0), 100),
            Span::new(0.0, PI / 2.0),
        );
        let [a, b] = arc.end_points();
        assert_eq!(a, Vec2::new(100, 0));
        assert_eq!(b, Vec2::new(0, 100));
    }

    #[test]
    fn arc_end_points_full_turn_coincide() {
        let arc = Arc::new(
            Circle::new(Vec2::new(5, 5), 100),
            Span::new(PI / 3.0, 2.0 * PI),
        );
        let [a, b] = arc.end_points();
        assert_eq!(a, b);
    }
}
