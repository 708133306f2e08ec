// Copyright 2026 the Boardwalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat slot-vector index with linear scans. Small and simple; good for
//! bounded per-event query regions.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::types::{Aabb, RegionQuery, Visit};

/// Flat slot-vector index with linear scans.
///
/// Slots are allocated on insert and stay stable until removed; removed
/// slots are not reused. The per-kind indexes of a board are rebuilt
/// wholesale when the model changes, so slot churn is not a concern here.
pub struct FlatIndex<T> {
    entries: Vec<Option<Aabb<T>>>,
}

impl<T> Default for FlatIndex<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> Debug for FlatIndex<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.entries.len();
        let alive = self.entries.iter().filter(|e| e.is_some()).count();
        f.debug_struct("FlatIndex")
            .field("total_slots", &total)
            .field("alive", &alive)
            .finish_non_exhaustive()
    }
}

impl<T: Copy + PartialOrd + Debug> FlatIndex<T> {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a box and returns its slot.
    pub fn insert(&mut self, aabb: Aabb<T>) -> usize {
        self.entries.push(Some(aabb));
        self.entries.len() - 1
    }

    /// Replaces the box stored in an existing slot.
    pub fn update(&mut self, slot: usize, aabb: Aabb<T>) {
        if let Some(e) = self.entries.get_mut(slot) {
            *e = Some(aabb);
        }
    }

    /// Removes a slot. The slot number is not reused.
    pub fn remove(&mut self, slot: usize) {
        if let Some(e) = self.entries.get_mut(slot) {
            *e = None;
        }
    }

    /// Removes all slots.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of live slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Returns `true` if no live slots remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Copy + PartialOrd + Debug> RegionQuery<T> for FlatIndex<T> {
    fn traverse<F: FnMut(usize) -> Visit>(&self, query: Aabb<T>, mut f: F) -> Visit {
        for (i, slot) in self.entries.iter().enumerate() {
            if let Some(a) = slot.as_ref()
                && a.intersects(&query)
            {
                match f(i) {
                    Visit::Continue => {}
                    stop => return stop,
                }
            }
        }
        Visit::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(x1: i64, y1: i64, x2: i64, y2: i64) -> Aabb<i64> {
        Aabb::new(x1, y1, x2, y2)
    }

    #[test]
    fn traverse_visits_only_intersecting_slots() {
        let mut idx = FlatIndex::new();
        let a = idx.insert(boxed(0, 0, 10, 10));
        let b = idx.insert(boxed(100, 100, 110, 110));
        let c = idx.insert(boxed(5, 5, 20, 20));

        let mut seen = alloc::vec::Vec::new();
        let flow = idx.traverse(boxed(0, 0, 30, 30), |slot| {
            seen.push(slot);
            Visit::Continue
        });
        assert_eq!(flow, Visit::Continue);
        assert!(seen.contains(&a));
        assert!(seen.contains(&c));
        assert!(!seen.contains(&b));
    }

    #[test]
    fn traverse_stops_on_found() {
        let mut idx = FlatIndex::new();
        idx.insert(boxed(0, 0, 10, 10));
        idx.insert(boxed(0, 0, 10, 10));
        idx.insert(boxed(0, 0, 10, 10));

        let mut visited = 0;
        let flow = idx.traverse(boxed(5, 5, 5, 5), |_| {
            visited += 1;
            Visit::Found
        });
        assert_eq!(flow, Visit::Found);
        assert_eq!(visited, 1);
    }

    #[test]
    fn removed_slots_are_skipped() {
        let mut idx = FlatIndex::new();
        let a = idx.insert(boxed(0, 0, 10, 10));
        idx.remove(a);
        assert!(idx.is_empty());

        let flow = idx.traverse(boxed(0, 0, 10, 10), |_| Visit::Found);
        assert_eq!(flow, Visit::Continue);
    }

    #[test]
    fn degenerate_query_box_hits_touching_edges() {
        let mut idx = FlatIndex::new();
        idx.insert(boxed(0, 0, 10, 10));

        // A zero-radius click exactly on the edge still intersects.
        let flow = idx.traverse(boxed(10, 10, 10, 10), |_| Visit::Found);
        assert_eq!(flow, Visit::Found);
    }
}
