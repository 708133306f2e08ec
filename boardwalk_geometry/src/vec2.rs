// Copyright 2026 the Boardwalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The point/vector value type and its arithmetic.

use core::ops::{Add, Neg, Sub};

/// Board-unit scalar. Signed so differences and translated frames stay
/// representable; wide enough that squared distances fit in `f64` math.
pub type Coord = i64;

/// A point or displacement in board units.
///
/// One canonical type covers both roles; every algorithm here is
/// value-to-value anyway.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2 {
    /// X component.
    pub x: Coord,
    /// Y component.
    pub y: Coord,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Creates a vector from components.
    #[must_use]
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// Euclidean norm.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        (self.x as f64).hypot(self.y as f64)
    }

    /// Dot product, computed in `f64` so large coordinates do not overflow.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        (self.x as f64) * (other.x as f64) + (self.y as f64) * (other.y as f64)
    }

    /// Scales by `factor`, rounding each component back to the grid.
    ///
    /// Caller hazard: scaling to small magnitudes on integer coordinates
    /// loses most of the direction information — trying to build unit
    /// vectors this way will not work.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            x: (self.x as f64 * factor).round() as Coord,
            y: (self.y as f64 * factor).round() as Coord,
        }
    }

    /// Projection of `self` onto `other`.
    ///
    /// `other` must not be the zero vector.
    #[must_use]
    pub fn project_onto(self, other: Self) -> Self {
        other.scaled(self.dot(other) / other.dot(other))
    }

    /// Rotation by a quarter turn in the +x towards +y direction.
    #[must_use]
    pub const fn perp(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }
}

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Neg for Vec2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}
