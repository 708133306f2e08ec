// Copyright 2026 the Boardwalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boardwalk Model: the board data model and its hit-test predicates.
//!
//! This crate owns three things:
//!
//! - The board objects a search can land on — pins, vias, pads, lines, arcs,
//!   text, polygons, elements, rat-lines — grouped into layers and a
//!   [`Board`], each kind backed by a region-query index.
//! - The coordinate/unit adapter between board conventions and the math
//!   conventions of [`boardwalk_geometry`]: board arcs measure degrees from
//!   the −x axis with reversed winding ([`board_span`] converts exactly),
//!   and thick lines stroke out to rectangles ([`stroked_rect`]).
//! - The per-object predicates answering "does a click circle touch this
//!   object?" ([`predicates`]).
//!
//! The search orchestrator lives above this crate; nothing here decides
//! priority between object kinds.

mod adapter;
mod objects;
pub mod predicates;

pub use adapter::{board_span, nearest_point_on_aligned_seg, stroked_rect};
pub use objects::{
    Board, BoardArc, BoardFlags, Bounds, Element, Layer, LayerId, Line, ObjectFlags, ObjectId, Pad,
    Pin, Polygon, Rat, Side, Text, query_box,
};
