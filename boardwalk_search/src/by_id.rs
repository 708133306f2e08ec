// Copyright 2026 the Boardwalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving a stable object id back to its containing structure.

use boardwalk_model::{Board, LayerId, ObjectId};

use crate::kinds::{Found, KindMask};

/// Finds the object carrying `id`, restricted to the kinds in the mask.
///
/// A plain walk over every object vector; visibility and lock state do not
/// matter here. Layers are visited in physical order, front silk first.
#[must_use]
pub fn search_object_by_id(board: &Board, id: ObjectId, kinds: KindMask) -> Option<Found> {
    let layers = || {
        core::iter::once(LayerId::FrontSilk)
            .chain((0..board.copper.len()).map(LayerId::Copper))
            .chain(core::iter::once(LayerId::BackSilk))
    };

    if kinds.contains(KindMask::LINE) {
        for layer in layers() {
            for (i, line) in board.layer(layer).lines.iter().enumerate() {
                if line.id == id {
                    return Some(Found::Line { layer, line: i });
                }
            }
        }
    }

    if kinds.contains(KindMask::ARC) {
        for layer in layers() {
            for (i, arc) in board.layer(layer).arcs.iter().enumerate() {
                if arc.id == id {
                    return Some(Found::Arc { layer, arc: i });
                }
            }
        }
    }

    if kinds.contains(KindMask::TEXT) {
        for layer in layers() {
            for (i, text) in board.layer(layer).texts.iter().enumerate() {
                if text.id == id {
                    return Some(Found::Text { layer, text: i });
                }
            }
        }
    }

    if kinds.intersects(KindMask::POLYGON | KindMask::POLYGON_POINT) {
        for layer in layers() {
            for (i, polygon) in board.layer(layer).polygons.iter().enumerate() {
                if polygon.id == id {
                    return Some(Found::Polygon { layer, polygon: i });
                }
            }
        }
    }

    if kinds.contains(KindMask::VIA) {
        for (i, via) in board.vias.iter().enumerate() {
            if via.id == id {
                return Some(Found::Via { via: i });
            }
        }
    }

    if kinds.contains(KindMask::RAT) {
        for (i, rat) in board.rats.iter().enumerate() {
            if rat.id == id {
                return Some(Found::Rat { rat: i });
            }
        }
    }

    let element_kinds =
        KindMask::ELEMENT | KindMask::PIN | KindMask::PAD | KindMask::ELEMENT_NAME;
    if kinds.intersects(element_kinds) {
        for (ei, element) in board.elements.iter().enumerate() {
            if element.id == id {
                return Some(Found::Element { element: ei });
            }
            if kinds.contains(KindMask::PIN) {
                for (pi, pin) in element.pins.iter().enumerate() {
                    if pin.id == id {
                        return Some(Found::Pin {
                            element: ei,
                            pin: pi,
                        });
                    }
                }
            }
            if kinds.contains(KindMask::PAD) {
                for (pi, pad) in element.pads.iter().enumerate() {
                    if pad.id == id {
                        return Some(Found::Pad {
                            element: ei,
                            pad: pi,
                        });
                    }
                }
            }
            if kinds.contains(KindMask::ELEMENT_NAME) && element.name.id == id {
                return Some(Found::ElementName { element: ei });
            }
        }
    }

    None
}
