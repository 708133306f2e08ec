// Copyright 2026 the Boardwalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boardwalk Index: a minimal 2D AABB region-query structure.
//!
//! The search layer above this crate never iterates object storage directly;
//! it asks a [`RegionQuery`] to invoke a visitor once per stored slot whose
//! bounding box intersects a query box. The visitor answers with a [`Visit`]
//! flow value after every candidate, so a traversal can be aborted
//! cooperatively as soon as a satisfying hit is found — there is no
//! exception-like escape, and no iteration state survives the call.
//!
//! [`FlatIndex`] is the provided implementation: a flat slot vector with
//! linear scans. Per-event query regions are small and object counts per
//! region are bounded, so this is adequate; callers with bigger worlds can
//! implement [`RegionQuery`] over an R-tree or grid without touching the
//! layers above.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod flat;
mod types;

pub use flat::FlatIndex;
pub use types::{Aabb, RegionQuery, Visit};
