// Copyright 2026 the Boardwalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape/shape intersection: existence tests, representative points, and
//! intersection point sets.
//!
//! Filled-shape tests treat their operands as solid regions and answer with
//! a representative point in the overlap. Boundary tests treat circles as
//! infinitesimally thin curves, require a positive radius, and return the
//! 0, 1, or 2 crossing points.

use smallvec::SmallVec;

use crate::shapes::{Arc, Circle, Rect4, Seg};
use crate::vec2::{Coord, Vec2};

/// Up to two intersection points, inline.
pub type PointPair = SmallVec<[Vec2; 2]>;

impl Circle {
    /// Filled-circle vs. segment: true iff the nearest point on the segment
    /// is within the radius. Returns that nearest point as the
    /// representative point.
    #[must_use]
    pub fn intersects_seg(&self, seg: &Seg) -> Option<Vec2> {
        let np = seg.nearest_point(self.center);
        ((np - self.center).magnitude() <= self.radius as f64).then_some(np)
    }

    /// Filled-circle vs. filled-rectangle.
    ///
    /// Checks, in order: the rectangle contains the circle's center (covers
    /// circle-inside-rectangle), any corner lies in the disk (covers
    /// rectangle-inside-circle), then the four sides as segments. The
    /// representative point comes from whichever test succeeds first.
    #[must_use]
    pub fn intersects_rect(&self, rect: &Rect4) -> Option<Vec2> {
        if rect.contains_point(self.center) {
            return Some(self.center);
        }

        for corner in rect.corners {
            if self.contains_point(corner) {
                return Some(corner);
            }
        }

        rect.sides()
            .iter()
            .find_map(|side| self.intersects_seg(side))
    }

    /// Filled-circle vs. filled-circle.
    ///
    /// Intersecting iff the overlap length `r_a + r_b - distance` is
    /// non-negative. When one circle is wholly contained in the other its
    /// center is the representative point; otherwise the point sits on the
    /// center-to-center line, inside the lens.
    #[must_use]
    pub fn intersects_circle(&self, other: &Self) -> Option<Vec2> {
        let ab = other.center - self.center;
        let dist = ab.magnitude();
        let overlap = (self.radius + other.radius) as f64 - dist;

        if overlap < 0.0 {
            return None;
        }
        if (self.radius as f64) <= overlap {
            return Some(self.center);
        }
        if (other.radius as f64) <= overlap {
            return Some(other.center);
        }
        Some(self.center + ab.scaled((self.radius as f64 - overlap / 2.0) / dist))
    }
}

/// Boundary circle vs. segment: the crossing points of the circle's boundary
/// with the segment.
///
/// Closed-form quadratic on the infinite line, then the solutions are kept
/// only if they fall within the segment, compared along whichever coordinate
/// axis has the wider spread (near-axis-aligned segments make the narrow
/// axis float-sensitive). A tangent line yields two equal points or none,
/// depending on rounding; callers needing "exactly one" cannot get it here.
///
/// A zero-length segment degenerates to a point-in-filled-disk test.
///
/// # Panics
///
/// Panics if the circle's radius is not positive (caller bug).
#[must_use]
pub fn circle_seg_intersection(circle: &Circle, seg: &Seg) -> PointPair {
    let mut out = PointPair::new();
    let c = circle.center;

    // Work with endpoints translated so the circle sits at the origin.
    let p1 = seg.a - c;
    let p2 = seg.b - c;

    if p1 == p2 {
        if circle.contains_point(seg.a) {
            out.push(seg.a);
        }
        return out;
    }

    assert!(
        circle.radius > 0,
        "zero-radius circle in boundary intersection"
    );

    let dx = (p2.x - p1.x) as f64;
    let dy = (p2.y - p1.y) as f64;
    let dr2 = dx * dx + dy * dy;
    let det = (p1.x as f64) * (p2.y as f64) - (p2.x as f64) * (p1.y as f64);
    let r = circle.radius as f64;

    let discriminant = r * r * dr2 - det * det;
    if discriminant < 0.0 {
        return out;
    }
    let sqrt_disc = discriminant.sqrt();

    let sign_dy = if dy < 0.0 { -1.0 } else { 1.0 };
    let ix = [
        (det * dy + sign_dy * dx * sqrt_disc) / dr2,
        (det * dy - sign_dy * dx * sqrt_disc) / dr2,
    ];
    let iy = [
        (-det * dx + dy.abs() * sqrt_disc) / dr2,
        (-det * dx - dy.abs() * sqrt_disc) / dr2,
    ];

    // The solutions lie on the infinite line, so one coordinate suffices to
    // test segment membership; use the axis with the wider spread.
    let in_seg = |i: usize| {
        if dx.abs() >= dy.abs() {
            let (lo, hi) = if p1.x < p2.x { (p1.x, p2.x) } else { (p2.x, p1.x) };
            lo as f64 <= ix[i] && ix[i] <= hi as f64
        } else {
            let (lo, hi) = if p1.y < p2.y { (p1.y, p2.y) } else { (p2.y, p1.y) };
            lo as f64 <= iy[i] && iy[i] <= hi as f64
        }
    };

    for i in 0..2 {
        if in_seg(i) {
            out.push(Vec2::new(
                ix[i].round() as Coord + c.x,
                iy[i].round() as Coord + c.y,
            ));
        }
    }
    out
}

/// Result of a boundary circle/circle intersection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CircleCircle {
    /// The boundaries do not meet.
    None,
    /// The boundaries cross at two points (equal when tangent within
    /// rounding).
    Points(Vec2, Vec2),
    /// The circles are identical; every boundary point is shared.
    Coincident,
}

/// Boundary circle vs. boundary circle.
///
/// Identical centers are detected first: equal radii mean the infinite
/// intersection sentinel, unequal radii never meet. Otherwise the foot of
/// the radical line along the center-to-center direction and the half-chord
/// length give the two crossing points. Near-tangent configurations are
/// rounding-sensitive: they collapse to two equal points or to `None`
/// depending on the exact rounded coordinates, and single-point tangency is
/// never reported as such.
///
/// # Panics
///
/// Panics if either radius is not positive (caller bug).
#[must_use]
pub fn circle_circle_intersection(a: &Circle, b: &Circle) -> CircleCircle {
    assert!(
        a.radius > 0 && b.radius > 0,
        "zero-radius circle in boundary intersection"
    );

    if a.center == b.center {
        return if a.radius == b.radius {
            CircleCircle::Coincident
        } else {
            CircleCircle::None
        };
    }

    let ab = b.center - a.center;
    let dist = ab.magnitude();
    let ra = a.radius as f64;
    let rb = b.radius as f64;

    if dist > ra + rb || dist < (ra - rb).abs() {
        return CircleCircle::None;
    }

    // Foot of the radical line along the center line, then half the chord.
    let foot = (dist * dist + ra * ra - rb * rb) / (2.0 * dist);
    let half_chord = (ra * ra - foot * foot).max(0.0).sqrt();

    let base = a.center + ab.scaled(foot / dist);
    let offset = ab.perp().scaled(half_chord / dist);
    CircleCircle::Points(base + offset, base - offset)
}

/// Boundary intersection of an arc with a segment: circle/segment on the
/// arc's underlying circle, keeping only points whose angle lies in the
/// arc's span.
///
/// # Panics
///
/// Panics if the arc's radius is not positive (caller bug).
#[must_use]
pub fn arc_seg_intersection(arc: &Arc, seg: &Seg) -> PointPair {
    assert!(
        arc.circle.radius > 0,
        "zero-radius arc in boundary intersection"
    );

    let mut out = circle_seg_intersection(&arc.circle, seg);
    out.retain(|p| arc.span.contains(angle_about(arc.circle.center, *p)));
    out
}

/// Result of an arc/arc intersection.
#[derive(Clone, Debug, PartialEq)]
pub enum ArcArc {
    /// The arcs do not meet.
    None,
    /// The arcs cross at these points.
    Points(PointPair),
    /// The arcs lie on the same circle with overlapping spans: infinitely
    /// many shared points (or, unreported, exactly one where two spans
    /// merely touch — a documented rounding limitation).
    Coincident,
}

/// Boundary intersection of two arcs.
///
/// Arcs on the same circle degenerate to the span-overlap test; spans that
/// touch at exactly one angle are indistinguishable from overlapping spans
/// here and also report [`ArcArc::Coincident`]. Otherwise the underlying
/// circles cross at up to two points and each must lie in both spans.
///
/// # Panics
///
/// Panics if either radius is not positive (caller bug).
#[must_use]
pub fn arc_arc_intersection(a: &Arc, b: &Arc) -> ArcArc {
    if a.circle == b.circle {
        return if a.span.overlaps(&b.span) {
            ArcArc::Coincident
        } else {
            ArcArc::None
        };
    }

    match circle_circle_intersection(&a.circle, &b.circle) {
        CircleCircle::None => ArcArc::None,
        CircleCircle::Coincident => unreachable!("identical circles are handled above"),
        CircleCircle::Points(p1, p2) => {
            let mut pts = PointPair::new();
            for p in [p1, p2] {
                if a.span.contains(angle_about(a.circle.center, p))
                    && b.span.contains(angle_about(b.circle.center, p))
                {
                    pts.push(p);
                }
            }
            if pts.is_empty() {
                ArcArc::None
            } else {
                ArcArc::Points(pts)
            }
        }
    }
}

/// Angle of `p` as seen from `center`.
fn angle_about(center: Vec2, p: Vec2) -> f64 {
    let v = p - center;
    (v.y as f64).atan2(v.x as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::Span;
    use core::f64::consts::PI;

    fn circle(x: Coord, y: Coord, r: Coord) -> Circle {
        Circle::new(Vec2::new(x, y), r)
    }

    fn seg(x1: Coord, y1: Coord, x2: Coord, y2: Coord) -> Seg {
        Seg::new(Vec2::new(x1, y1), Vec2::new(x2, y2))
    }

    #[test]
    fn filled_circle_seg_hit_and_miss() {
        let c = circle(0, 0, 5);
        assert_eq!(
            c.intersects_seg(&seg(-10, 3, 10, 3)),
            Some(Vec2::new(0, 3))
        );
        assert!(c.intersects_seg(&seg(-10, 6, 10, 6)).is_none());
    }

    #[test]
    fn boundary_circle_seg_two_crossings() {
        let pts = circle_seg_intersection(&circle(0, 0, 5), &seg(-10, 3, 10, 3));
        assert_eq!(pts.len(), 2);
        assert!(pts.contains(&Vec2::new(4, 3)));
        assert!(pts.contains(&Vec2::new(-4, 3)));
    }

    #[test]
    fn boundary_circle_seg_clipped_to_one_crossing() {
        let pts = circle_seg_intersection(&circle(0, 0, 5), &seg(0, 0, 10, 0));
        assert_eq!(pts.as_slice(), &[Vec2::new(5, 0)]);
    }

    #[test]
    fn boundary_circle_seg_tangent_collapses() {
        // Tangent line: the discriminant is exactly zero here, producing the
        // touch point twice. (Near-tangency may instead produce none; that
        // ambiguity is accepted.)
        let pts = circle_seg_intersection(&circle(0, 0, 5), &seg(-10, 5, 10, 5));
        assert_eq!(pts.len(), 2);
        assert_eq!(pts[0], Vec2::new(0, 5));
        assert_eq!(pts[1], Vec2::new(0, 5));
    }

    #[test]
    fn boundary_circle_seg_vertical_uses_y_axis_filter() {
        let pts = circle_seg_intersection(&circle(0, 0, 5), &seg(3, 0, 3, 10));
        assert_eq!(pts.as_slice(), &[Vec2::new(3, 4)]);
    }

    #[test]
    fn boundary_circle_degenerate_seg_is_point_test() {
        let inside = circle_seg_intersection(&circle(0, 0, 5), &seg(1, 1, 1, 1));
        assert_eq!(inside.as_slice(), &[Vec2::new(1, 1)]);
        let outside = circle_seg_intersection(&circle(0, 0, 5), &seg(9, 9, 9, 9));
        assert!(outside.is_empty());
    }

    #[test]
    #[should_panic(expected = "zero-radius circle")]
    fn boundary_circle_seg_rejects_zero_radius() {
        let _ = circle_seg_intersection(&circle(0, 0, 0), &seg(-10, 0, 10, 0));
    }

    #[test]
    fn filled_rect_tests_in_documented_order() {
        let r = Rect4::new([
            Vec2::new(0, 0),
            Vec2::new(10, 0),
            Vec2::new(10, 10),
            Vec2::new(0, 10),
        ]);
        // Center inside the rectangle.
        assert_eq!(circle(5, 5, 1).intersects_rect(&r), Some(Vec2::new(5, 5)));
        // Corner inside the circle.
        assert_eq!(
            circle(-1, -1, 3).intersects_rect(&r),
            Some(Vec2::new(0, 0))
        );
        // Side crossing only.
        assert!(circle(5, 12, 3).intersects_rect(&r).is_some());
        // Clear miss.
        assert!(circle(20, 20, 3).intersects_rect(&r).is_none());
    }

    #[test]
    fn filled_circle_circle_overlap_rule() {
        let a = circle(0, 0, 5);
        let b = circle(8, 0, 5);
        let p = a.intersects_circle(&b).unwrap();
        // Representative point lies within both radii.
        assert!((p - a.center).magnitude() <= 5.0);
        assert!((p - b.center).magnitude() <= 5.0);

        assert!(circle(0, 0, 5).intersects_circle(&circle(11, 0, 5)).is_none());
        // Touching circles count as intersecting.
        assert!(circle(0, 0, 5).intersects_circle(&circle(10, 0, 5)).is_some());
    }

    #[test]
    fn filled_circle_circle_containment_returns_inner_center() {
        let big = circle(0, 0, 100);
        let small = circle(10, 0, 2);
        assert_eq!(small.intersects_circle(&big), Some(small.center));
        assert_eq!(big.intersects_circle(&small), Some(small.center));
    }

    #[test]
    fn boundary_circle_circle_chord_points() {
        // r=5 circles at (0,0) and (8,0): crossings at (4, ±3).
        match circle_circle_intersection(&circle(0, 0, 5), &circle(8, 0, 5)) {
            CircleCircle::Points(p1, p2) => {
                assert_eq!(p1.x, 4);
                assert_eq!(p2.x, 4);
                assert_eq!((p1.y - p2.y).abs(), 6);
            }
            other => panic!("expected two points, got {other:?}"),
        }
    }

    #[test]
    fn boundary_circle_circle_concentric() {
        assert_eq!(
            circle_circle_intersection(&circle(3, 3, 5), &circle(3, 3, 5)),
            CircleCircle::Coincident
        );
        assert_eq!(
            circle_circle_intersection(&circle(3, 3, 5), &circle(3, 3, 7)),
            CircleCircle::None
        );
    }

    #[test]
    fn boundary_circle_circle_is_symmetric() {
        let a = circle(-3, 2, 7);
        let b = circle(5, -1, 6);
        let fwd = circle_circle_intersection(&a, &b);
        let rev = circle_circle_intersection(&b, &a);
        match (fwd, rev) {
            (CircleCircle::Points(f1, f2), CircleCircle::Points(r1, r2)) => {
                assert!((f1 == r1 && f2 == r2) || (f1 == r2 && f2 == r1));
            }
            (f, r) => assert_eq!(f, r),
        }
    }

    #[test]
    fn arc_seg_filters_by_span() {
        // Upper half of the circle only; a vertical chord at x=3 crosses the
        // full circle at (3, ±4) but the arc at (3, 4) alone.
        let arc = Arc::new(circle(0, 0, 5), Span::new(0.0, PI));
        let pts = arc_seg_intersection(&arc, &seg(3, -10, 3, 10));
        assert_eq!(pts.as_slice(), &[Vec2::new(3, 4)]);
    }

    #[test]
    fn arc_arc_same_circle_span_logic() {
        let c = circle(0, 0, 50);
        let a = Arc::new(c, Span::new(0.0, PI / 4.0));
        let disjoint = Arc::new(c, Span::new(PI, PI / 4.0));
        let overlapping = Arc::new(c, Span::new(PI / 8.0, PI / 2.0));
        assert_eq!(arc_arc_intersection(&a, &disjoint), ArcArc::None);
        assert_eq!(arc_arc_intersection(&a, &overlapping), ArcArc::Coincident);
    }

    #[test]
    fn arc_arc_crossing_arcs_keep_shared_point_only() {
        // The circles cross at (4, 3) and (4, -3); each span admits only the
        // upper point.
        let a = Arc::new(circle(0, 0, 5), Span::new(0.0, PI / 2.0));
        let b = Arc::new(circle(8, 0, 5), Span::new(PI / 2.0, PI / 2.0));
        match arc_arc_intersection(&a, &b) {
            ArcArc::Points(pts) => assert_eq!(pts.as_slice(), &[Vec2::new(4, 3)]),
            other => panic!("expected one point, got {other:?}"),
        }
    }

    #[test]
    fn arc_arc_disjoint_circles() {
        let a = Arc::new(circle(0, 0, 5), Span::new(0.0, 2.0 * PI));
        let b = Arc::new(circle(100, 0, 5), Span::new(0.0, 2.0 * PI));
        assert_eq!(arc_arc_intersection(&a, &b), ArcArc::None);
    }
}
