// Copyright 2026 the Boardwalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest-point algorithms for segments and arcs.

use crate::shapes::{Arc, Seg};
use crate::vec2::Vec2;

impl Seg {
    /// The point on the segment closest to `p`.
    ///
    /// Projects `p` onto the segment's direction and clamps by comparing
    /// magnitudes rather than a signed parameter, which tolerates the grid
    /// rounding performed inside the vector ops: a projection that lands
    /// behind the start shortens the sum of segment and projection vectors,
    /// and one past the end out-measures the segment. Degenerate segments
    /// return their single point.
    #[must_use]
    pub fn nearest_point(&self, p: Vec2) -> Vec2 {
        if self.is_point() {
            return self.a;
        }

        let ab = self.direction();
        let ap = p - self.a;
        let proj = ap.project_onto(ab);
        let seg_mag = ab.magnitude();
        let proj_mag = proj.magnitude();
        let sum_mag = (ab + proj).magnitude();

        if sum_mag < seg_mag || sum_mag < proj_mag {
            // Segment and projection add destructively: before the start.
            self.a
        } else if proj_mag > seg_mag {
            // Past the far end.
            self.b
        } else {
            self.a + proj
        }
    }

    /// Constant-time nearest point for a segment known to be horizontal.
    ///
    /// The endpoints may be in either x order.
    #[must_use]
    pub fn nearest_point_horizontal(&self, p: Vec2) -> Vec2 {
        let (lo, hi) = if self.a.x <= self.b.x {
            (self.a.x, self.b.x)
        } else {
            (self.b.x, self.a.x)
        };
        Vec2::new(p.x.clamp(lo, hi), self.a.y)
    }

    /// Constant-time nearest point for a segment known to be vertical.
    #[must_use]
    pub fn nearest_point_vertical(&self, p: Vec2) -> Vec2 {
        let (lo, hi) = if self.a.y <= self.b.y {
            (self.a.y, self.b.y)
        } else {
            (self.b.y, self.a.y)
        };
        Vec2::new(self.a.x, p.y.clamp(lo, hi))
    }
}

impl Arc {
    /// The point on the arc closest to `p`.
    ///
    /// Scales `p` onto the underlying circle to get the nearest point on the
    /// full circle; if that point's angle falls outside the span, the closer
    /// of the arc's two endpoints wins. A query at the exact center has no
    /// unique answer and returns the arc's start endpoint.
    #[must_use]
    pub fn nearest_point(&self, p: Vec2) -> Vec2 {
        let cent = self.circle.center;
        let rad = self.circle.radius as f64;

        // Work in a frame where the circle is centered at the origin.
        let tp = p - cent;
        if tp == Vec2::ZERO {
            return self.end_points()[0];
        }

        let on_circle = tp.scaled(rad / tp.magnitude());
        let theta = (on_circle.y as f64).atan2(on_circle.x as f64);

        let result = if self.span.contains(theta) {
            on_circle
        } else {
            let [ea, eb] = {
                let mut eps = self.end_points();
                for e in &mut eps {
                    *e = *e - cent;
                }
                eps
            };
            if (ea - on_circle).magnitude() < (eb - on_circle).magnitude() {
                ea
            } else {
                eb
            }
        };

        result + cent
    }
}
