// Copyright 2026 the Boardwalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between board drawing conventions and plain geometry.

use core::f64::consts::PI;

use boardwalk_geometry::{Rect4, Seg, Span, Vec2};

use crate::objects::BoardArc;

/// Converts a board angle range to a mathematical span.
///
/// Board arcs measure degrees from the −x axis and wind opposite to the
/// mathematical direction, so the start angle reflects through π and the
/// sweep negates. The conversion is exact up to the degree-to-radian
/// multiply; a ±360° sweep stays a full turn.
#[must_use]
pub fn board_span(start_deg: f64, delta_deg: f64) -> Span {
    Span::new(PI - start_deg.to_radians(), -delta_deg.to_radians())
}

impl BoardArc {
    /// The arc in mathematical conventions.
    #[must_use]
    pub fn to_arc(&self) -> boardwalk_geometry::Arc {
        boardwalk_geometry::Arc::new(
            boardwalk_geometry::Circle::new(self.center, self.radius),
            board_span(self.start_angle, self.delta),
        )
    }
}

/// Nearest point on a segment, dispatching to the constant-time paths for
/// the axis-aligned segments boards are mostly made of.
#[must_use]
pub fn nearest_point_on_aligned_seg(seg: &Seg, p: Vec2) -> Vec2 {
    if seg.a.y == seg.b.y {
        seg.nearest_point_horizontal(p)
    } else if seg.a.x == seg.b.x {
        seg.nearest_point_vertical(p)
    } else {
        seg.nearest_point(p)
    }
}

/// The rectangle a thick stroked segment covers.
///
/// With `square_caps`, the rectangle extends half the thickness past each
/// endpoint; otherwise it ends at the endpoints and the caller handles the
/// round caps separately. `bloat` grows the rectangle outward on every side.
///
/// # Panics
///
/// Panics if the net half-width `thickness / 2 + bloat` is not positive, or
/// if the segment is degenerate (no direction to stroke along).
#[must_use]
pub fn stroked_rect(seg: &Seg, thickness: i64, square_caps: bool, bloat: i64) -> Rect4 {
    assert!(thickness / 2 + bloat > 0, "stroked rectangle has no width");
    assert!(!seg.is_point(), "cannot stroke a degenerate segment");

    let dir = seg.direction();
    let ov = dir.perp();
    let tv = ov.scaled(thickness as f64 / (2.0 * ov.magnitude()));
    let cv = if square_caps { tv.perp() } else { Vec2::ZERO };

    let (ob, cb) = if bloat != 0 {
        let ob = ov.scaled(bloat as f64 / ov.magnitude());
        (ob, ob.perp())
    } else {
        (Vec2::ZERO, Vec2::ZERO)
    };

    Rect4::new([
        seg.a + tv + cv + ob + cb,
        seg.b + tv - cv + ob - cb,
        seg.b - tv - cv - ob - cb,
        seg.a - tv + cv - ob + cb,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardwalk_geometry::Coord;

    fn seg(ax: Coord, ay: Coord, bx: Coord, by: Coord) -> Seg {
        Seg::new(Vec2::new(ax, ay), Vec2::new(bx, by))
    }

    #[test]
    fn board_zero_degrees_points_along_negative_x() {
        let span = board_span(0.0, 90.0);
        assert_eq!(span.start, PI);
        assert_eq!(span.delta, -(PI / 2.0));
    }

    #[test]
    fn full_turn_survives_conversion() {
        let span = board_span(45.0, 360.0);
        assert_eq!(span.delta, -2.0 * PI);
        // A full turn contains every angle regardless of start.
        assert!(span.contains(0.0));
        assert!(span.contains(2.5));
        assert!(span.contains(-2.5));
    }

    #[test]
    fn converted_arc_endpoints_reflect_through_pi() {
        // Board start 0° is the −x direction.
        let arc = BoardArc {
            id: crate::ObjectId(1),
            center: Vec2::new(0, 0),
            radius: 100,
            start_angle: 0.0,
            delta: 90.0,
            thickness: 10,
            flags: crate::ObjectFlags::empty(),
        };
        let [a, b] = arc.to_arc().end_points();
        assert_eq!(a, Vec2::new(-100, 0));
        // Start reflects through π and the sweep negates: π − 90° = π/2.
        assert_eq!(b, Vec2::new(0, 100));
    }

    #[test]
    fn aligned_dispatch_matches_general_nearest() {
        let h = seg(0, 5, 100, 5);
        let v = seg(5, 0, 5, 100);
        let d = seg(0, 0, 100, 100);
        for p in [Vec2::new(30, 40), Vec2::new(-10, -10), Vec2::new(200, 3)] {
            assert_eq!(nearest_point_on_aligned_seg(&h, p), h.nearest_point(p));
            assert_eq!(nearest_point_on_aligned_seg(&v, p), v.nearest_point(p));
            assert_eq!(nearest_point_on_aligned_seg(&d, p), d.nearest_point(p));
        }
    }

    #[test]
    fn round_cap_rect_ends_at_endpoints() {
        let r = stroked_rect(&seg(0, 0, 10, 0), 4, false, 0);
        assert_eq!(
            r.corners,
            [
                Vec2::new(0, 2),
                Vec2::new(10, 2),
                Vec2::new(10, -2),
                Vec2::new(0, -2),
            ]
        );
    }

    #[test]
    fn square_cap_rect_extends_past_endpoints() {
        let r = stroked_rect(&seg(0, 0, 10, 0), 4, true, 0);
        assert_eq!(
            r.corners,
            [
                Vec2::new(-2, 2),
                Vec2::new(12, 2),
                Vec2::new(12, -2),
                Vec2::new(-2, -2),
            ]
        );
    }

    #[test]
    fn bloat_grows_every_side() {
        let r = stroked_rect(&seg(0, 0, 10, 0), 4, false, 3);
        assert_eq!(
            r.corners,
            [
                Vec2::new(-3, 5),
                Vec2::new(13, 5),
                Vec2::new(13, -5),
                Vec2::new(-3, -5),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "no width")]
    fn zero_width_stroke_is_rejected() {
        let _ = stroked_rect(&seg(0, 0, 10, 0), 1, false, 0);
    }
}
