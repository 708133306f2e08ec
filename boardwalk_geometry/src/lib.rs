// Copyright 2026 the Boardwalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boardwalk Geometry: board-unit geometry for spatial hit testing.
//!
//! Everything here operates on [`Vec2`] points in a fixed integer coordinate
//! space (board units). Intermediate math is `f64`; results land back on the
//! integer grid inside [`Vec2::magnitude`] and [`Vec2::scaled`] rather than
//! at call sites. That keeps composition cheap, at the cost of losing
//! sub-unit information at each step — a deliberate accuracy/ergonomics
//! trade-off for mouse-click tolerances, not exact computational geometry.
//!
//! The crate provides:
//!
//! - [`Vec2`]: point/vector arithmetic (sum, difference, scale, dot,
//!   projection, magnitude).
//! - [`Span`] and [`normalize_angle`]: the angle model shared by every arc
//!   algorithm.
//! - [`Seg`], [`Rect4`], [`Circle`], [`Arc`]: value-type shapes.
//! - Nearest-point and intersection algorithms over those shapes, with
//!   explicit degenerate-case policies (see the individual functions).
//!
//! ## Failure classes
//!
//! Ordinary negative results (no intersection, no hit) are `Option`s, `bool`s
//! or empty point sets. Precondition violations — a zero-radius circle
//! handed to a boundary-intersection routine — are caller bugs and abort via
//! `assert!`, because silently wrong geometry is worse than a crash.
//!
//! ## Known accuracy limits
//!
//! Near-tangent intersections, the identical-circle case of arc/arc
//! intersection, and sub-unit rounding in nearest-point results are
//! best-effort: the consuming application needs "close enough for a mouse
//! click", not exact real arithmetic. The affected routines document their
//! limits individually.

mod angle;
mod intersect;
mod nearest;
mod shapes;
mod vec2;

pub use angle::{Span, normalize_angle};
pub use intersect::{
    ArcArc, CircleCircle, arc_arc_intersection, arc_seg_intersection, circle_circle_intersection,
    circle_seg_intersection,
};
pub use shapes::{Arc, Circle, Rect4, Seg};
pub use vec2::{Coord, Vec2};
