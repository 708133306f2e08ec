// Copyright 2026 the Boardwalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-object hit-test predicates.
//!
//! Every predicate answers whether a query circle (click point plus
//! tolerance radius) touches one object. A miss is an ordinary `false`,
//! never an error. Inclusive/strict boundary behavior varies per predicate
//! and is kept as the editor has always behaved, so a click that lands
//! exactly on a boundary keeps selecting the same object it used to.

use boardwalk_geometry::{Circle, Coord, Seg, Vec2};
use boardwalk_index::Aabb;

use crate::adapter::{nearest_point_on_aligned_seg, stroked_rect};
use crate::objects::{BoardArc, Bounds, ObjectFlags, Pin, Polygon};

/// Query circle vs. a pin or via.
///
/// Square pins test the grown box around the copper square; round pins
/// compare center distance against `radius` plus half the thickness.
#[must_use]
pub fn pin_hit(pos: Vec2, radius: Coord, pin: &Pin) -> bool {
    let t = pin.thickness / 2;
    if pin.flags.contains(ObjectFlags::SQUARE) {
        let b = Aabb::new(
            pin.center.x - t,
            pin.center.y - t,
            pin.center.x + t,
            pin.center.y + t,
        );
        box_hit(pos, radius, &b)
    } else {
        (pin.center - pos).magnitude() <= (radius + t) as f64
    }
}

/// Query circle vs. an axis-aligned box.
///
/// Clamps the query point into box-relative coordinates and measures the
/// residual. Containment is inclusive; the tolerance comparisons are
/// strict, so a zero radius hits only inside the box itself.
#[must_use]
pub fn box_hit(pos: Vec2, radius: Coord, bounds: &Bounds) -> bool {
    let x = pos.x - bounds.x1;
    let y = pos.y - bounds.y1;
    let width = bounds.x2 - bounds.x1;
    let height = bounds.y2 - bounds.y1;

    let range = if x <= 0 {
        if y < 0 {
            return (radius as f64) > Vec2::new(x, y).magnitude();
        } else if y > height {
            return (radius as f64) > Vec2::new(x, y - height).magnitude();
        }
        -x
    } else if x >= width {
        if y < 0 {
            return (radius as f64) > Vec2::new(x - width, y).magnitude();
        } else if y > height {
            return (radius as f64) > Vec2::new(x - width, y - height).magnitude();
        }
        x - width
    } else if y < 0 {
        -y
    } else if y > height {
        y - height
    } else {
        return true;
    };

    range < radius
}

/// Query circle vs. a thick stroked segment (line or pad).
///
/// Round caps test the stroked rectangle and then a cap circle at each
/// endpoint; square caps extend the centerline by half the thickness first,
/// after which the rectangle alone covers the whole outline. A degenerate
/// segment is a dot and tests as its cap shape.
#[must_use]
pub fn thick_seg_hit(pos: Vec2, radius: Coord, seg: &Seg, thickness: Coord, square: bool) -> bool {
    let circ = Circle::new(pos, radius);
    let cap_radius = (thickness + 1) / 2;

    if seg.is_point() {
        if square {
            let b = Aabb::new(
                seg.a.x - cap_radius,
                seg.a.y - cap_radius,
                seg.a.x + cap_radius,
                seg.a.y + cap_radius,
            );
            return box_hit(pos, radius, &b);
        }
        return Circle::new(seg.a, cap_radius).intersects_circle(&circ).is_some();
    }

    if square {
        let cv = seg
            .direction()
            .scaled(cap_radius as f64 / seg.direction().magnitude());
        let extended = Seg::new(seg.a - cv, seg.b + cv);
        let rect = stroked_rect(&extended, thickness, false, 0);
        return circ.intersects_rect(&rect).is_some();
    }

    let rect = stroked_rect(seg, thickness, false, 0);
    if circ.intersects_rect(&rect).is_some() {
        return true;
    }
    Circle::new(seg.a, cap_radius).intersects_circle(&circ).is_some()
        || Circle::new(seg.b, cap_radius).intersects_circle(&circ).is_some()
}

/// Query circle vs. a thick segment, by perpendicular decomposition.
///
/// Projects the query point onto the infinite line, splits the offset into
/// an along-line part (clamped to the segment) and an across-line part, and
/// compares their Pythagorean sum against `radius` plus half the thickness.
/// Segments shorter than a tenth of a unit fall back to a distance test
/// against the first endpoint. Cheaper than [`thick_seg_hit`] and exact for
/// round caps; rat-lines and endpoint searches use this form.
#[must_use]
pub fn seg_hit(pos: Vec2, radius: Coord, seg: &Seg, thickness: Coord) -> bool {
    let l = seg.direction().magnitude();
    let reach = (radius + thickness / 2) as f64;

    if l < 0.1 {
        return (pos - seg.a).magnitude() < reach;
    }

    let dx = (seg.b.x - seg.a.x) as f64;
    let dy = (seg.b.y - seg.a.y) as f64;
    let px = (pos.x - seg.a.x) as f64;
    let py = (pos.y - seg.a.y) as f64;

    // Along-line distance past either end, zero when the projection lands
    // on the segment.
    let d1 = (py * dy + px * dx) / l;
    let d1 = if d1 < 0.0 {
        -d1
    } else if d1 > l {
        d1 - l
    } else {
        0.0
    };
    // Signed across-line distance.
    let d2 = (px * dy - py * dx) / l;

    (d1 * d1 + d2 * d2).sqrt() <= reach
}

/// Query circle vs. a stroked board arc.
///
/// Classifies the query point's angle against the arc's bounding angles in
/// board degrees, then compares distance either to the nearer endpoint or
/// to the underlying circle. Correct only for true circular arcs whose
/// stroke thickness does not exceed the radius; kept bucket-for-bucket as
/// the editor has always computed it rather than redesigned, so known
/// misclassifications near the span boundaries are preserved too.
#[must_use]
pub fn arc_hit(pos: Vec2, radius: Coord, arc: &BoardArc) -> bool {
    let p_dist = (pos - arc.center).magnitude();
    let p_cos = (pos.x - arc.center.x) as f64 / p_dist;
    let mut p_ang = p_cos.acos().to_degrees();

    let (mut ang1, mut ang2) = if arc.delta > 0.0 {
        (
            normalize_deg(arc.start_angle),
            normalize_deg(arc.start_angle + arc.delta),
        )
    } else {
        (
            normalize_deg(arc.start_angle + arc.delta),
            normalize_deg(arc.start_angle),
        )
    };
    if ang1 > ang2 {
        ang2 += 360.0;
    }
    // Full circles must not collapse to zero-length arcs.
    if arc.delta == 360.0 || arc.delta == -360.0 {
        ang2 = ang1 + 360.0;
    }

    if pos.y > arc.center.y {
        p_ang = -p_ang;
    }
    p_ang += 180.0;

    let reach = (radius + arc.thickness / 2) as f64;

    if ang1 >= p_ang || ang2 <= p_ang {
        // Outside the angular range: the click can only touch an end cap.
        let end_at = |deg: f64| {
            let theta = (deg + 180.0).to_radians();
            Vec2::new(
                arc.center.x + (arc.radius as f64 * theta.cos()) as Coord,
                arc.center.y - (arc.radius as f64 * theta.sin()) as Coord,
            )
        };
        let ea = end_at(arc.start_angle);
        let eb = end_at(arc.start_angle + arc.delta);
        return (pos - ea).magnitude() < reach || (pos - eb).magnitude() < reach;
    }

    (p_dist - arc.radius as f64).abs() < reach
}

fn normalize_deg(mut deg: f64) -> f64 {
    while deg < 0.0 {
        deg += 360.0;
    }
    while deg >= 360.0 {
        deg -= 360.0;
    }
    deg
}

/// Query circle vs. a filled polygon.
///
/// Inside by even-odd crossing counting, or within the tolerance radius of
/// any boundary edge.
#[must_use]
pub fn polygon_hit(pos: Vec2, radius: Coord, polygon: &Polygon) -> bool {
    let v = &polygon.vertices;
    if v.len() < 3 {
        return false;
    }
    if point_in_ring(pos, v) {
        return true;
    }

    let r = radius as f64;
    (0..v.len()).any(|i| {
        let edge = Seg::new(v[i], v[(i + 1) % v.len()]);
        (nearest_point_on_aligned_seg(&edge, pos) - pos).magnitude() <= r
    })
}

fn point_in_ring(pos: Vec2, ring: &[Vec2]) -> bool {
    let mut inside = false;
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[(i + 1) % ring.len()];
        if (a.y > pos.y) != (b.y > pos.y) {
            let t = (pos.y - a.y) as f64 / (b.y - a.y) as f64;
            let x = a.x as f64 + t * (b.x - a.x) as f64;
            if (pos.x as f64) < x {
                inside = !inside;
            }
        }
    }
    inside
}

/// Intersection point of two segments, if they cross.
///
/// Collinear overlapping segments report whichever endpoint of `b` lies on
/// `a`; fully disjoint parallels report nothing.
#[must_use]
pub fn seg_seg_intersection(a: &Seg, b: &Seg) -> Option<Vec2> {
    let r = a.direction();
    let s = b.direction();
    let cross = |u: Vec2, v: Vec2| (u.x as f64) * (v.y as f64) - (u.y as f64) * (v.x as f64);

    let denom = cross(r, s);
    let qp = b.a - a.a;
    if denom == 0.0 {
        if cross(qp, r) != 0.0 {
            return None;
        }
        for p in [b.a, b.b] {
            if a.nearest_point(p) == p {
                return Some(p);
            }
        }
        return None;
    }

    let t = cross(qp, s) / denom;
    let u = cross(qp, r) / denom;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(a.a + r.scaled(t))
    } else {
        None
    }
}

/// Where a segment enters an axis-aligned box, if it does.
///
/// An endpoint strictly inside the box counts; otherwise the segment must
/// cross one of the four borders.
#[must_use]
pub fn seg_in_box(seg: &Seg, bounds: &Bounds) -> Option<Vec2> {
    if bounds.x1 < seg.a.x && seg.a.x < bounds.x2 && bounds.y1 < seg.a.y && seg.a.y < bounds.y2 {
        return Some(seg.a);
    }
    for border in box_borders(bounds) {
        if let Some(p) = seg_seg_intersection(&border, seg) {
            return Some(p);
        }
    }
    None
}

/// Where a segment enters a slanted rectangle, if it does.
///
/// Either endpoint inside counts; otherwise the segment must cross one of
/// the four sides.
#[must_use]
pub fn seg_in_rect(seg: &Seg, rect: &boardwalk_geometry::Rect4) -> Option<Vec2> {
    for p in [seg.a, seg.b] {
        if rect.contains_point(p) {
            return Some(p);
        }
    }
    for side in rect.sides() {
        if let Some(p) = seg_seg_intersection(&side, seg) {
            return Some(p);
        }
    }
    None
}

/// Where a board arc's curve crosses an axis-aligned box border, if it does.
///
/// Tests the four borders against the arc; an arc entirely inside the box
/// (crossing no border) reports nothing, matching the selection semantics
/// this serves.
#[must_use]
pub fn arc_in_box(arc: &BoardArc, bounds: &Bounds) -> Option<Vec2> {
    let math_arc = arc.to_arc();
    for border in box_borders(bounds) {
        let pts = boardwalk_geometry::arc_seg_intersection(&math_arc, &border);
        if let Some(p) = pts.first() {
            return Some(*p);
        }
    }
    None
}

fn box_borders(bounds: &Bounds) -> [Seg; 4] {
    let c0 = Vec2::new(bounds.x1, bounds.y1);
    let c1 = Vec2::new(bounds.x2, bounds.y1);
    let c2 = Vec2::new(bounds.x2, bounds.y2);
    let c3 = Vec2::new(bounds.x1, bounds.y2);
    [
        Seg::new(c0, c1),
        Seg::new(c1, c2),
        Seg::new(c2, c3),
        Seg::new(c3, c0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::ObjectId;

    fn round_pin(x: Coord, y: Coord, thickness: Coord) -> Pin {
        Pin {
            id: ObjectId(1),
            center: Vec2::new(x, y),
            thickness,
            flags: ObjectFlags::empty(),
        }
    }

    #[test]
    fn round_pin_reach_is_inclusive() {
        let pin = round_pin(0, 0, 20);
        assert!(pin_hit(Vec2::new(10, 0), 0, &pin));
        assert!(pin_hit(Vec2::new(15, 0), 5, &pin));
        assert!(!pin_hit(Vec2::new(16, 0), 5, &pin));
    }

    #[test]
    fn square_pin_corner_needs_strict_radius() {
        let mut pin = round_pin(0, 0, 20);
        pin.flags |= ObjectFlags::SQUARE;
        // Inside the square.
        assert!(pin_hit(Vec2::new(9, 9), 0, &pin));
        // A round pin would miss the corner at (9, 9) + nothing; square hits.
        assert!(pin_hit(Vec2::new(10, 10), 1, &pin));
        // Exactly on the corner with zero radius: the corner comparison is
        // strict, so this misses.
        assert!(!pin_hit(Vec2::new(11, 11), 1, &pin));
    }

    #[test]
    fn box_hit_side_and_corner_distances() {
        let b = Aabb::new(0, 0, 100, 40);
        assert!(box_hit(Vec2::new(50, 20), 0, &b));
        assert!(box_hit(Vec2::new(50, 45), 6, &b));
        assert!(!box_hit(Vec2::new(50, 45), 5, &b));
        // Corner: distance from (104, 43) to (100, 40) is 5.
        assert!(box_hit(Vec2::new(104, 43), 6, &b));
        assert!(!box_hit(Vec2::new(104, 43), 5, &b));
    }

    #[test]
    fn thick_seg_round_cap_side_hit() {
        // Stroke half-width 2, query circle radius 1 at distance 3 from the
        // centerline: rectangle boundary is 1 away, so this must hit.
        let seg = Seg::new(Vec2::new(0, 0), Vec2::new(10, 0));
        assert!(thick_seg_hit(Vec2::new(5, 3), 1, &seg, 4, false));
        assert!(!thick_seg_hit(Vec2::new(5, 4), 1, &seg, 4, false));
    }

    #[test]
    fn thick_seg_round_cap_end_hit_uses_cap_circle() {
        let seg = Seg::new(Vec2::new(0, 0), Vec2::new(100, 0));
        // Past the end, diagonal: outside the rectangle, inside the cap.
        assert!(thick_seg_hit(Vec2::new(101, 1), 0, &seg, 4, false));
        // Past the cap too.
        assert!(!thick_seg_hit(Vec2::new(105, 0), 0, &seg, 4, false));
    }

    #[test]
    fn thick_seg_square_cap_covers_corner() {
        let seg = Seg::new(Vec2::new(0, 0), Vec2::new(100, 0));
        // The square cap corner near (102, 2) is solid; a round cap misses it.
        assert!(thick_seg_hit(Vec2::new(102, 2), 0, &seg, 4, true));
        assert!(!thick_seg_hit(Vec2::new(102, 2), 0, &seg, 4, false));
    }

    #[test]
    fn degenerate_thick_seg_is_a_dot() {
        let dot = Seg::new(Vec2::new(50, 50), Vec2::new(50, 50));
        assert!(thick_seg_hit(Vec2::new(52, 50), 0, &dot, 4, false));
        assert!(!thick_seg_hit(Vec2::new(56, 50), 0, &dot, 4, false));
        assert!(thick_seg_hit(Vec2::new(51, 50), 1, &dot, 1, true));
    }

    #[test]
    fn seg_hit_matches_perpendicular_distance() {
        let seg = Seg::new(Vec2::new(0, 0), Vec2::new(100, 0));
        assert!(seg_hit(Vec2::new(50, 11), 1, &seg, 20));
        assert!(!seg_hit(Vec2::new(50, 12), 1, &seg, 20));
        // Past the end the along- and across-line parts combine.
        assert!(seg_hit(Vec2::new(107, 7), 0, &seg, 20));
        assert!(!seg_hit(Vec2::new(108, 8), 0, &seg, 20));
    }

    #[test]
    fn seg_hit_tiny_segment_falls_back_to_endpoint() {
        let seg = Seg::new(Vec2::new(0, 0), Vec2::new(0, 0));
        assert!(seg_hit(Vec2::new(5, 0), 0, &seg, 20));
        assert!(!seg_hit(Vec2::new(10, 0), 0, &seg, 20));
    }

    #[test]
    fn arc_hit_on_the_curve() {
        // Quarter arc from board 0° (the −x direction) sweeping 90°.
        let arc = BoardArc {
            id: ObjectId(1),
            center: Vec2::new(0, 0),
            radius: 100,
            start_angle: 0.0,
            delta: 90.0,
            thickness: 10,
            flags: ObjectFlags::empty(),
        };
        // On the curve at board 45°: between (−100, 0) and (0, 100).
        assert!(arc_hit(Vec2::new(-71, 71), 0, &arc));
        // Same distance from center but on other quarters.
        assert!(!arc_hit(Vec2::new(71, 71), 0, &arc));
        assert!(!arc_hit(Vec2::new(-71, -71), 0, &arc));
        // Far off the circle entirely.
        assert!(!arc_hit(Vec2::new(-50, 50), 0, &arc));
    }

    #[test]
    fn full_circle_arc_is_not_zero_length() {
        let arc = BoardArc {
            id: ObjectId(1),
            center: Vec2::new(0, 0),
            radius: 100,
            start_angle: 0.0,
            delta: 360.0,
            thickness: 10,
            flags: ObjectFlags::empty(),
        };
        for p in [
            Vec2::new(100, 0),
            Vec2::new(-100, 0),
            Vec2::new(0, 100),
            Vec2::new(0, -100),
        ] {
            assert!(arc_hit(p, 0, &arc));
        }
        assert!(!arc_hit(Vec2::new(50, 0), 0, &arc));
    }

    #[test]
    fn polygon_interior_and_boundary_tolerance() {
        let polygon = Polygon {
            id: ObjectId(1),
            vertices: vec![
                Vec2::new(0, 0),
                Vec2::new(100, 0),
                Vec2::new(100, 100),
                Vec2::new(0, 100),
            ],
            flags: ObjectFlags::empty(),
        };
        assert!(polygon_hit(Vec2::new(50, 50), 0, &polygon));
        assert!(!polygon_hit(Vec2::new(50, 105), 0, &polygon));
        assert!(polygon_hit(Vec2::new(50, 105), 5, &polygon));
        assert!(!polygon_hit(Vec2::new(50, 106), 5, &polygon));
    }

    #[test]
    fn concave_polygon_notch_is_outside() {
        let polygon = Polygon {
            id: ObjectId(1),
            vertices: vec![
                Vec2::new(0, 0),
                Vec2::new(100, 0),
                Vec2::new(100, 100),
                Vec2::new(50, 40),
                Vec2::new(0, 100),
            ],
            flags: ObjectFlags::empty(),
        };
        assert!(polygon_hit(Vec2::new(10, 20), 0, &polygon));
        assert!(!polygon_hit(Vec2::new(50, 90), 0, &polygon));
    }

    #[test]
    fn crossing_segments_intersect_at_midpoint() {
        let a = Seg::new(Vec2::new(0, 0), Vec2::new(10, 10));
        let b = Seg::new(Vec2::new(0, 10), Vec2::new(10, 0));
        assert_eq!(seg_seg_intersection(&a, &b), Some(Vec2::new(5, 5)));
    }

    #[test]
    fn parallel_segments_do_not_intersect() {
        let a = Seg::new(Vec2::new(0, 0), Vec2::new(10, 0));
        let b = Seg::new(Vec2::new(0, 5), Vec2::new(10, 5));
        assert_eq!(seg_seg_intersection(&a, &b), None);
    }

    #[test]
    fn collinear_overlap_reports_contained_endpoint() {
        let a = Seg::new(Vec2::new(0, 0), Vec2::new(10, 0));
        let b = Seg::new(Vec2::new(5, 0), Vec2::new(20, 0));
        assert_eq!(seg_seg_intersection(&a, &b), Some(Vec2::new(5, 0)));
    }

    #[test]
    fn seg_in_box_crossing_and_contained() {
        let b = Aabb::new(0, 0, 100, 100);
        // Crosses the left border.
        let crossing = Seg::new(Vec2::new(-50, 50), Vec2::new(50, 50));
        assert!(seg_in_box(&crossing, &b).is_some());
        // Entirely inside: the endpoint-inside check catches it.
        let inside = Seg::new(Vec2::new(10, 10), Vec2::new(20, 20));
        assert_eq!(seg_in_box(&inside, &b), Some(Vec2::new(10, 10)));
        // Entirely outside.
        let outside = Seg::new(Vec2::new(200, 200), Vec2::new(300, 200));
        assert!(seg_in_box(&outside, &b).is_none());
    }

    #[test]
    fn seg_in_slanted_rect() {
        let rect = stroked_rect(&Seg::new(Vec2::new(0, 0), Vec2::new(100, 100)), 20, false, 0);
        let crossing = Seg::new(Vec2::new(0, 100), Vec2::new(100, 0));
        assert!(seg_in_rect(&crossing, &rect).is_some());
        let outside = Seg::new(Vec2::new(100, 0), Vec2::new(200, 0));
        assert!(seg_in_rect(&outside, &rect).is_none());
    }

    #[test]
    fn arc_crossing_a_box_border() {
        let arc = BoardArc {
            id: ObjectId(1),
            center: Vec2::new(0, 0),
            radius: 100,
            start_angle: 0.0,
            delta: 360.0,
            thickness: 1,
            flags: ObjectFlags::empty(),
        };
        // Box straddling the circle on the right.
        let hit = Aabb::new(90, -10, 110, 10);
        assert!(arc_in_box(&arc, &hit).is_some());
        // Box wholly inside the circle.
        let miss = Aabb::new(-10, -10, 10, 10);
        assert!(arc_in_box(&arc, &miss).is_none());
    }
}
