// Copyright 2026 the Boardwalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Board objects, layers, and the board with its per-kind region indexes.

use boardwalk_geometry::{Coord, Vec2};
use boardwalk_index::{Aabb, FlatIndex, RegionQuery, Visit};

/// Bounding box over board coordinates.
pub type Bounds = Aabb<Coord>;

/// The query box for a click circle: center plus radius on each side.
///
/// A zero radius yields a degenerate box, which still intersects boxes it
/// touches.
#[must_use]
pub fn query_box(pos: Vec2, radius: Coord) -> Bounds {
    Aabb::new(
        pos.x - radius,
        pos.y - radius,
        pos.x + radius,
        pos.y + radius,
    )
}

/// Stable identity of a board object, unique across all kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

bitflags::bitflags! {
    /// Per-object state bits that affect searching.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
    pub struct ObjectFlags: u32 {
        /// The object cannot be picked up by an ordinary search.
        const LOCKED = 1 << 0;
        /// Pins and pads draw as squares instead of round shapes.
        const SQUARE = 1 << 1;
        /// The element's name text is not shown (and not searchable).
        const HIDE_NAME = 1 << 2;
        /// A rat-line drawn as a circle marker at its first endpoint.
        const VIA_RAT = 1 << 3;
    }
}

bitflags::bitflags! {
    /// Board-wide display settings that gate what a search may return.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
    pub struct BoardFlags: u32 {
        /// Element names are locked; searches skip them.
        const LOCK_NAMES = 1 << 0;
        /// Element names are hidden; searches skip them.
        const HIDE_NAMES = 1 << 1;
        /// Only element names are searchable; everything else is skipped.
        const ONLY_NAMES = 1 << 2;
        /// Thin-draw mode: polygons render as outlines and their interiors
        /// do not count as hits.
        const THIN_DRAW = 1 << 3;
    }
}

/// Which face of the board an object sits on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    /// The side currently towards the viewer.
    Front,
    /// The far side.
    Back,
}

/// A plated hole: element pin or standalone via.
#[derive(Clone, Debug)]
pub struct Pin {
    /// Stable identity.
    pub id: ObjectId,
    /// Hole center.
    pub center: Vec2,
    /// Copper annulus diameter.
    pub thickness: Coord,
    /// State bits; `SQUARE` selects a square pad shape.
    pub flags: ObjectFlags,
}

impl Pin {
    /// Conservative bounding box.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let half = (self.thickness + 1) / 2;
        Aabb::new(
            self.center.x - half,
            self.center.y - half,
            self.center.x + half,
            self.center.y + half,
        )
    }
}

/// An SMD pad: a thick segment on one face of the board.
#[derive(Clone, Debug)]
pub struct Pad {
    /// Stable identity.
    pub id: ObjectId,
    /// First endpoint of the centerline.
    pub a: Vec2,
    /// Second endpoint of the centerline.
    pub b: Vec2,
    /// Stroke width.
    pub thickness: Coord,
    /// Which face the pad is on.
    pub side: Side,
    /// State bits; `SQUARE` selects square end caps.
    pub flags: ObjectFlags,
}

impl Pad {
    /// Conservative bounding box; covers square caps.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        thick_seg_bounds(self.a, self.b, self.thickness)
    }
}

/// A copper or silk line: a thick segment with round caps.
#[derive(Clone, Debug)]
pub struct Line {
    /// Stable identity.
    pub id: ObjectId,
    /// First endpoint.
    pub a: Vec2,
    /// Second endpoint.
    pub b: Vec2,
    /// Stroke width.
    pub thickness: Coord,
    /// State bits.
    pub flags: ObjectFlags,
}

impl Line {
    /// Conservative bounding box.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        thick_seg_bounds(self.a, self.b, self.thickness)
    }
}

fn thick_seg_bounds(a: Vec2, b: Vec2, thickness: Coord) -> Bounds {
    // Square caps extend the stroke by half its width past each endpoint,
    // so pad the box by a full width to stay conservative either way.
    Aabb::new(
        a.x.min(b.x) - thickness,
        a.y.min(b.y) - thickness,
        a.x.max(b.x) + thickness,
        a.y.max(b.y) + thickness,
    )
}

/// A stroked circular arc in board angle conventions.
///
/// Angles are degrees measured from the −x axis, winding opposite to the
/// mathematical direction. [`crate::board_span`] converts to the math
/// convention.
#[derive(Clone, Debug)]
pub struct BoardArc {
    /// Stable identity.
    pub id: ObjectId,
    /// Center of the underlying circle.
    pub center: Vec2,
    /// Radius of the underlying circle.
    pub radius: Coord,
    /// Start angle in board degrees.
    pub start_angle: f64,
    /// Signed sweep in board degrees.
    pub delta: f64,
    /// Stroke width.
    pub thickness: Coord,
    /// State bits.
    pub flags: ObjectFlags,
}

impl BoardArc {
    /// Conservative bounding box: the full circle plus stroke.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let half = self.radius + (self.thickness + 1) / 2;
        Aabb::new(
            self.center.x - half,
            self.center.y - half,
            self.center.x + half,
            self.center.y + half,
        )
    }
}

/// Rendered text; hit-testing uses only its bounding box.
#[derive(Clone, Debug)]
pub struct Text {
    /// Stable identity.
    pub id: ObjectId,
    /// The rendered extent.
    pub bbox: Bounds,
    /// Which face the text is on.
    pub side: Side,
    /// State bits.
    pub flags: ObjectFlags,
}

/// A filled polygon given by its vertex ring.
#[derive(Clone, Debug)]
pub struct Polygon {
    /// Stable identity.
    pub id: ObjectId,
    /// Vertices in ring order; the last connects back to the first.
    pub vertices: Vec<Vec2>,
    /// State bits.
    pub flags: ObjectFlags,
}

impl Polygon {
    /// Bounding box of the vertex ring.
    ///
    /// # Panics
    ///
    /// Panics if the polygon has no vertices.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        assert!(!self.vertices.is_empty(), "polygon with no vertices");
        let mut x1 = Coord::MAX;
        let mut y1 = Coord::MAX;
        let mut x2 = Coord::MIN;
        let mut y2 = Coord::MIN;
        for v in &self.vertices {
            x1 = x1.min(v.x);
            y1 = y1.min(v.y);
            x2 = x2.max(v.x);
            y2 = y2.max(v.y);
        }
        Aabb::new(x1, y1, x2, y2)
    }
}

/// A footprint: pins, pads, and a name label grouped on one face.
#[derive(Clone, Debug)]
pub struct Element {
    /// Stable identity.
    pub id: ObjectId,
    /// Which face the element is mounted on.
    pub side: Side,
    /// State bits.
    pub flags: ObjectFlags,
    /// Plated-hole pins.
    pub pins: Vec<Pin>,
    /// Surface pads.
    pub pads: Vec<Pad>,
    /// The reference-designator label.
    pub name: Text,
    /// Overall extent, kept by [`Element::update_bounds`].
    pub bounds: Bounds,
}

impl Element {
    /// Recomputes `bounds` as the union of the pin, pad, and name boxes.
    pub fn update_bounds(&mut self) {
        let mut acc: Option<Bounds> = None;
        let mut grow = |b: Bounds| {
            acc = Some(match acc {
                None => b,
                Some(a) => Aabb::new(
                    a.x1.min(b.x1),
                    a.y1.min(b.y1),
                    a.x2.max(b.x2),
                    a.y2.max(b.y2),
                ),
            });
        };
        for pin in &self.pins {
            grow(pin.bounds());
        }
        for pad in &self.pads {
            grow(pad.bounds());
        }
        grow(self.name.bbox);
        if let Some(b) = acc {
            self.bounds = b;
        }
    }
}

/// An airwire connecting two points that still need routing.
///
/// With `VIA_RAT` set, the rat renders as a circle marker at `a` with radius
/// twice the thickness, and hit-testing follows the rendering.
#[derive(Clone, Debug)]
pub struct Rat {
    /// Stable identity.
    pub id: ObjectId,
    /// First endpoint.
    pub a: Vec2,
    /// Second endpoint.
    pub b: Vec2,
    /// Stroke width.
    pub thickness: Coord,
    /// State bits.
    pub flags: ObjectFlags,
}

impl Rat {
    /// Conservative bounding box; covers the via-rat circle marker.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let half = self.thickness * 2;
        Aabb::new(
            self.a.x.min(self.b.x) - half,
            self.a.y.min(self.b.y) - half,
            self.a.x.max(self.b.x) + half,
            self.a.y.max(self.b.y) + half,
        )
    }
}

/// Identifies a layer within a board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayerId {
    /// Silkscreen on the front face.
    FrontSilk,
    /// A copper layer, by index into [`Board::copper`].
    Copper(usize),
    /// Silkscreen on the back face.
    BackSilk,
}

/// One drawing layer: lines, arcs, text, and polygons, each indexed.
///
/// Indexes are rebuilt wholesale by [`Layer::reindex`]; after a rebuild,
/// slot numbers equal positions in the object vectors.
#[derive(Debug, Default)]
pub struct Layer {
    /// Whether the layer is visible (and searchable).
    pub on: bool,
    /// Line objects.
    pub lines: Vec<Line>,
    /// Arc objects.
    pub arcs: Vec<BoardArc>,
    /// Text objects.
    pub texts: Vec<Text>,
    /// Polygon objects.
    pub polygons: Vec<Polygon>,

    line_index: FlatIndex<Coord>,
    arc_index: FlatIndex<Coord>,
    text_index: FlatIndex<Coord>,
    polygon_index: FlatIndex<Coord>,
}

impl Layer {
    /// Rebuilds the per-kind indexes from the object vectors.
    pub fn reindex(&mut self) {
        self.line_index.clear();
        for line in &self.lines {
            let _ = self.line_index.insert(line.bounds());
        }
        self.arc_index.clear();
        for arc in &self.arcs {
            let _ = self.arc_index.insert(arc.bounds());
        }
        self.text_index.clear();
        for text in &self.texts {
            let _ = self.text_index.insert(text.bbox);
        }
        self.polygon_index.clear();
        for poly in &self.polygons {
            let _ = self.polygon_index.insert(poly.bounds());
        }
    }

    /// Visits lines whose boxes intersect `query`.
    pub fn traverse_lines(
        &self,
        query: Bounds,
        mut f: impl FnMut(usize, &Line) -> Visit,
    ) -> Visit {
        self.line_index.traverse(query, |slot| f(slot, &self.lines[slot]))
    }

    /// Visits arcs whose boxes intersect `query`.
    pub fn traverse_arcs(
        &self,
        query: Bounds,
        mut f: impl FnMut(usize, &BoardArc) -> Visit,
    ) -> Visit {
        self.arc_index.traverse(query, |slot| f(slot, &self.arcs[slot]))
    }

    /// Visits texts whose boxes intersect `query`.
    pub fn traverse_texts(
        &self,
        query: Bounds,
        mut f: impl FnMut(usize, &Text) -> Visit,
    ) -> Visit {
        self.text_index.traverse(query, |slot| f(slot, &self.texts[slot]))
    }

    /// Visits polygons whose boxes intersect `query`.
    pub fn traverse_polygons(
        &self,
        query: Bounds,
        mut f: impl FnMut(usize, &Polygon) -> Visit,
    ) -> Visit {
        self.polygon_index
            .traverse(query, |slot| f(slot, &self.polygons[slot]))
    }
}

/// The whole board: global objects, layers, display state, and indexes.
///
/// Object vectors and display toggles are public; mutate them freely, then
/// call [`Board::reindex`] before searching again.
#[derive(Debug, Default)]
pub struct Board {
    /// Standalone vias.
    pub vias: Vec<Pin>,
    /// Footprints with their pins, pads, and names.
    pub elements: Vec<Element>,
    /// Airwires.
    pub rats: Vec<Rat>,

    /// Front silkscreen layer.
    pub front_silk: Layer,
    /// Copper layers in physical order.
    pub copper: Vec<Layer>,
    /// Back silkscreen layer.
    pub back_silk: Layer,
    /// Copper indexes in current drawing order, topmost first. Searches walk
    /// this order, so reordering it changes which overlapping object wins.
    pub copper_stack: Vec<usize>,

    /// Vias visible.
    pub via_on: bool,
    /// Element pins visible.
    pub pin_on: bool,
    /// Elements (pads, names, outlines) visible.
    pub element_on: bool,
    /// Rat-lines visible.
    pub rat_on: bool,
    /// Far-side objects visible.
    pub invisible_objects_on: bool,
    /// Board-wide search gates.
    pub flags: BoardFlags,

    via_index: FlatIndex<Coord>,
    pin_index: FlatIndex<Coord>,
    pin_handles: Vec<(usize, usize)>,
    pad_index: FlatIndex<Coord>,
    pad_handles: Vec<(usize, usize)>,
    name_index: FlatIndex<Coord>,
    element_index: FlatIndex<Coord>,
    rat_index: FlatIndex<Coord>,
}

impl Board {
    /// Rebuilds every index from the current object vectors.
    pub fn reindex(&mut self) {
        self.via_index.clear();
        for via in &self.vias {
            let _ = self.via_index.insert(via.bounds());
        }

        self.pin_index.clear();
        self.pin_handles.clear();
        self.pad_index.clear();
        self.pad_handles.clear();
        self.name_index.clear();
        self.element_index.clear();
        for (ei, element) in self.elements.iter().enumerate() {
            for (pi, pin) in element.pins.iter().enumerate() {
                let _ = self.pin_index.insert(pin.bounds());
                self.pin_handles.push((ei, pi));
            }
            for (pi, pad) in element.pads.iter().enumerate() {
                let _ = self.pad_index.insert(pad.bounds());
                self.pad_handles.push((ei, pi));
            }
            let _ = self.name_index.insert(element.name.bbox);
            let _ = self.element_index.insert(element.bounds);
        }

        self.rat_index.clear();
        for rat in &self.rats {
            let _ = self.rat_index.insert(rat.bounds());
        }

        self.front_silk.reindex();
        self.back_silk.reindex();
        for layer in &mut self.copper {
            layer.reindex();
        }
    }

    /// Visits standalone vias whose boxes intersect `query`.
    pub fn traverse_vias(
        &self,
        query: Bounds,
        mut f: impl FnMut(usize, &Pin) -> Visit,
    ) -> Visit {
        self.via_index.traverse(query, |slot| f(slot, &self.vias[slot]))
    }

    /// Visits element pins whose boxes intersect `query`, passing the owning
    /// element's index alongside the pin's.
    pub fn traverse_pins(
        &self,
        query: Bounds,
        mut f: impl FnMut(usize, usize, &Pin) -> Visit,
    ) -> Visit {
        self.pin_index.traverse(query, |slot| {
            let (ei, pi) = self.pin_handles[slot];
            f(ei, pi, &self.elements[ei].pins[pi])
        })
    }

    /// Visits element pads whose boxes intersect `query`.
    pub fn traverse_pads(
        &self,
        query: Bounds,
        mut f: impl FnMut(usize, usize, &Pad) -> Visit,
    ) -> Visit {
        self.pad_index.traverse(query, |slot| {
            let (ei, pi) = self.pad_handles[slot];
            f(ei, pi, &self.elements[ei].pads[pi])
        })
    }

    /// Visits elements whose name boxes intersect `query`.
    pub fn traverse_names(
        &self,
        query: Bounds,
        mut f: impl FnMut(usize, &Element) -> Visit,
    ) -> Visit {
        self.name_index
            .traverse(query, |slot| f(slot, &self.elements[slot]))
    }

    /// Visits elements whose overall boxes intersect `query`.
    pub fn traverse_elements(
        &self,
        query: Bounds,
        mut f: impl FnMut(usize, &Element) -> Visit,
    ) -> Visit {
        self.element_index
            .traverse(query, |slot| f(slot, &self.elements[slot]))
    }

    /// Visits rat-lines whose boxes intersect `query`.
    pub fn traverse_rats(
        &self,
        query: Bounds,
        mut f: impl FnMut(usize, &Rat) -> Visit,
    ) -> Visit {
        self.rat_index.traverse(query, |slot| f(slot, &self.rats[slot]))
    }

    /// Looks up a layer by id.
    #[must_use]
    pub fn layer(&self, id: LayerId) -> &Layer {
        match id {
            LayerId::FrontSilk => &self.front_silk,
            LayerId::Copper(i) => &self.copper[i],
            LayerId::BackSilk => &self.back_silk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin(id: u64, x: Coord, y: Coord, thickness: Coord) -> Pin {
        Pin {
            id: ObjectId(id),
            center: Vec2::new(x, y),
            thickness,
            flags: ObjectFlags::empty(),
        }
    }

    #[test]
    fn query_box_is_centered() {
        let b = query_box(Vec2::new(10, 20), 5);
        assert_eq!(b, Aabb::new(5, 15, 15, 25));
        let degenerate = query_box(Vec2::new(3, 4), 0);
        assert!(degenerate.contains_point(3, 4));
    }

    #[test]
    fn reindex_keeps_slot_and_vector_positions_aligned() {
        let mut board = Board::default();
        board.vias.push(pin(1, 0, 0, 10));
        board.vias.push(pin(2, 1000, 1000, 10));
        board.reindex();

        let mut hits = Vec::new();
        let _ = board.traverse_vias(query_box(Vec2::new(1000, 1000), 20), |i, via| {
            hits.push((i, via.id));
            Visit::Continue
        });
        assert_eq!(hits, vec![(1, ObjectId(2))]);
    }

    #[test]
    fn pin_traversal_reports_owning_element() {
        let mut element = Element {
            id: ObjectId(10),
            side: Side::Front,
            flags: ObjectFlags::empty(),
            pins: vec![pin(11, 0, 0, 10), pin(12, 500, 0, 10)],
            pads: Vec::new(),
            name: Text {
                id: ObjectId(13),
                bbox: Aabb::new(0, 0, 1, 1),
                side: Side::Front,
                flags: ObjectFlags::empty(),
            },
            bounds: Aabb::new(0, 0, 0, 0),
        };
        element.update_bounds();
        let mut board = Board::default();
        board.elements.push(element);
        board.reindex();

        let mut seen = Vec::new();
        let _ = board.traverse_pins(query_box(Vec2::new(500, 0), 10), |ei, pi, p| {
            seen.push((ei, pi, p.id));
            Visit::Continue
        });
        assert_eq!(seen, vec![(0, 1, ObjectId(12))]);
    }

    #[test]
    fn element_bounds_cover_members() {
        let mut element = Element {
            id: ObjectId(1),
            side: Side::Front,
            flags: ObjectFlags::empty(),
            pins: vec![pin(2, -100, 0, 20)],
            pads: vec![Pad {
                id: ObjectId(3),
                a: Vec2::new(200, 0),
                b: Vec2::new(300, 0),
                thickness: 40,
                side: Side::Front,
                flags: ObjectFlags::empty(),
            }],
            name: Text {
                id: ObjectId(4),
                bbox: Aabb::new(0, 100, 50, 150),
                side: Side::Front,
                flags: ObjectFlags::empty(),
            },
            bounds: Aabb::new(0, 0, 0, 0),
        };
        element.update_bounds();
        assert!(element.bounds.x1 <= -110);
        assert!(element.bounds.x2 >= 340);
        assert!(element.bounds.y2 >= 150);
    }

    #[test]
    fn arc_bounds_cover_full_circle() {
        let arc = BoardArc {
            id: ObjectId(1),
            center: Vec2::new(0, 0),
            radius: 100,
            start_angle: 0.0,
            delta: 90.0,
            thickness: 10,
            flags: ObjectFlags::empty(),
        };
        let b = arc.bounds();
        assert!(b.contains_point(-105, 0));
        assert!(b.contains_point(0, 105));
    }
}
