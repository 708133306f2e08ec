// Copyright 2026 the Boardwalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Requested-kind masks and the typed search result.

use boardwalk_model::LayerId;

bitflags::bitflags! {
    /// Which object kinds a search may return.
    ///
    /// `LOCKED` is not a kind: it is a modifier that admits locked objects
    /// into the search instead of filtering them out.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct KindMask: u32 {
        /// Airwires.
        const RAT = 1 << 0;
        /// Standalone vias.
        const VIA = 1 << 1;
        /// Element pins.
        const PIN = 1 << 2;
        /// Element pads.
        const PAD = 1 << 3;
        /// Element name labels.
        const ELEMENT_NAME = 1 << 4;
        /// Whole elements, by their overall bounding box.
        const ELEMENT = 1 << 5;
        /// Individual polygon vertices.
        const POLYGON_POINT = 1 << 6;
        /// Individual line endpoints.
        const LINE_POINT = 1 << 7;
        /// Layer lines.
        const LINE = 1 << 8;
        /// Individual arc endpoints.
        const ARC_POINT = 1 << 9;
        /// Layer arcs.
        const ARC = 1 << 10;
        /// Layer text.
        const TEXT = 1 << 11;
        /// Layer polygons.
        const POLYGON = 1 << 12;
        /// Modifier: include locked objects.
        const LOCKED = 1 << 31;

        /// Every object kind, without the locked modifier.
        const ANY = Self::RAT.bits()
            | Self::VIA.bits()
            | Self::PIN.bits()
            | Self::PAD.bits()
            | Self::ELEMENT_NAME.bits()
            | Self::ELEMENT.bits()
            | Self::POLYGON_POINT.bits()
            | Self::LINE_POINT.bits()
            | Self::LINE.bits()
            | Self::ARC_POINT.bits()
            | Self::ARC.bits()
            | Self::TEXT.bits()
            | Self::POLYGON.bits();
    }
}

/// Which endpoint of a two-point object.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum End {
    /// The first endpoint.
    A,
    /// The second endpoint.
    B,
}

/// A search result: the kind that won plus handles into the board.
///
/// Handles are plain indexes into the [`boardwalk_model::Board`] vectors
/// the search ran against; they stay valid until the board's object
/// vectors are mutated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Found {
    /// An airwire.
    Rat {
        /// Index into `board.rats`.
        rat: usize,
    },
    /// A standalone via.
    Via {
        /// Index into `board.vias`.
        via: usize,
    },
    /// An element pin.
    Pin {
        /// Index into `board.elements`.
        element: usize,
        /// Index into that element's `pins`.
        pin: usize,
    },
    /// An element pad.
    Pad {
        /// Index into `board.elements`.
        element: usize,
        /// Index into that element's `pads`.
        pad: usize,
    },
    /// An element's name label.
    ElementName {
        /// Index into `board.elements`.
        element: usize,
    },
    /// A whole element.
    Element {
        /// Index into `board.elements`.
        element: usize,
    },
    /// A polygon vertex.
    PolygonPoint {
        /// The layer holding the polygon.
        layer: LayerId,
        /// Index into that layer's `polygons`.
        polygon: usize,
        /// Index into the polygon's vertex ring.
        vertex: usize,
    },
    /// A line endpoint.
    LinePoint {
        /// The layer holding the line.
        layer: LayerId,
        /// Index into that layer's `lines`.
        line: usize,
        /// Which endpoint.
        end: End,
    },
    /// A layer line.
    Line {
        /// The layer holding the line.
        layer: LayerId,
        /// Index into that layer's `lines`.
        line: usize,
    },
    /// An arc endpoint.
    ArcPoint {
        /// The layer holding the arc.
        layer: LayerId,
        /// Index into that layer's `arcs`.
        arc: usize,
        /// Which endpoint.
        end: End,
    },
    /// A layer arc.
    Arc {
        /// The layer holding the arc.
        layer: LayerId,
        /// Index into that layer's `arcs`.
        arc: usize,
    },
    /// Layer text.
    Text {
        /// The layer holding the text.
        layer: LayerId,
        /// Index into that layer's `texts`.
        text: usize,
    },
    /// A layer polygon.
    Polygon {
        /// The layer holding the polygon.
        layer: LayerId,
        /// Index into that layer's `polygons`.
        polygon: usize,
    },
}

impl Found {
    /// The kind bit this result corresponds to.
    #[must_use]
    pub fn kind(&self) -> KindMask {
        match self {
            Self::Rat { .. } => KindMask::RAT,
            Self::LinePoint { .. } => KindMask::LINE_POINT,
            Self::Via { .. } => KindMask::VIA,
            Self::Pin { .. } => KindMask::PIN,
            Self::Pad { .. } => KindMask::PAD,
            Self::ElementName { .. } => KindMask::ELEMENT_NAME,
            Self::Element { .. } => KindMask::ELEMENT,
            Self::PolygonPoint { .. } => KindMask::POLYGON_POINT,
            Self::Line { .. } => KindMask::LINE,
            Self::ArcPoint { .. } => KindMask::ARC_POINT,
            Self::Arc { .. } => KindMask::ARC,
            Self::Text { .. } => KindMask::TEXT,
            Self::Polygon { .. } => KindMask::POLYGON,
        }
    }
}
