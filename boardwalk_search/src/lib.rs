// Copyright 2026 the Boardwalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boardwalk Search: finding the object under a click.
//!
//! One entry point, [`search_object_at`], walks a fixed priority ladder of
//! object kinds — rat-lines first, layer polygons last — and returns the
//! highest-priority object the click circle touches, as a typed handle into
//! the board. Ties within a kind break by the policy the editor has always
//! used: first hit for rat-lines, vias, pins, lines, arcs, and text; closest
//! center for pads; smallest bounding box for names, elements, and polygons.
//!
//! A companion entry point, [`search_object_by_id`], resolves a stable
//! object id back to its containing structure without any geometry.
//!
//! Every per-kind scan is a region query against the board's spatial
//! indexes, visited through the cooperative-abort visitor of
//! [`boardwalk_index`]; no search state lives outside the call.

mod by_id;
mod kinds;
mod locate;

pub use by_id::search_object_by_id;
pub use kinds::{End, Found, KindMask};
pub use locate::{Click, search_object_at};
