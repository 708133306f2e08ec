// Copyright 2026 the Boardwalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The click-point search: a fixed priority ladder over the board.

use boardwalk_geometry::{Coord, Seg, Vec2};
use boardwalk_index::Visit;
use boardwalk_model::{
    Board, BoardFlags, LayerId, ObjectFlags, predicates, query_box,
};

use crate::kinds::{End, Found, KindMask};

/// A click: position plus tolerance radius, both in board units.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Click {
    /// Click position.
    pub pos: Vec2,
    /// Tolerance radius; zero means an exact point.
    pub radius: Coord,
}

impl Click {
    /// Creates a click query.
    #[must_use]
    pub const fn new(pos: Vec2, radius: Coord) -> Self {
        Self { pos, radius }
    }
}

/// Finds the object under a click, by descending priority.
///
/// The ladder: rat-lines, vias, pins, pads, element names, elements, then
/// per layer in stacking order the point-level and object-level layer kinds,
/// then polygons, and finally a far-side re-pass for pads, names, and
/// elements when invisible objects are shown. Pin, pad, name, and element
/// matches above the layer tiers are held pending so that a polygon with a
/// smaller bounding box can still win; everything else returns immediately.
///
/// Board-wide display flags narrow the requested mask before anything runs:
/// locked names drop names and text, hidden names drop names, only-names
/// keeps nothing but names and text, and thin-draw drops polygons. Locked
/// objects are skipped unless the mask carries [`KindMask::LOCKED`].
#[must_use]
pub fn search_object_at(board: &Board, click: Click, kinds: KindMask) -> Option<Found> {
    let mut kinds = kinds;
    if board.flags.contains(BoardFlags::LOCK_NAMES) {
        kinds.remove(KindMask::ELEMENT_NAME | KindMask::TEXT);
    }
    if board.flags.contains(BoardFlags::HIDE_NAMES) {
        kinds.remove(KindMask::ELEMENT_NAME);
    }
    if board.flags.contains(BoardFlags::ONLY_NAMES) {
        kinds &= KindMask::ELEMENT_NAME | KindMask::TEXT | KindMask::LOCKED;
    }
    if board.flags.contains(BoardFlags::THIN_DRAW) {
        kinds.remove(KindMask::POLYGON);
    }

    let ctx = Ctx {
        board,
        pos: click.pos,
        radius: click.radius,
        bypass_lock: kinds.contains(KindMask::LOCKED),
    };

    if kinds.contains(KindMask::RAT)
        && board.rat_on
        && let Some(found) = ctx.find_rat()
    {
        return Some(found);
    }

    if kinds.contains(KindMask::VIA)
        && board.via_on
        && let Some(found) = ctx.find_via()
    {
        return Some(found);
    }

    // Pin through element matches are held pending: a later polygon tier
    // may still beat a name or element on bounding-box area.
    let mut pending = None;
    let mut pending_area = 0.0;

    if kinds.contains(KindMask::PIN) && board.pin_on {
        pending = ctx.find_pin();
    }

    if pending.is_none() && kinds.contains(KindMask::PAD) && board.pin_on {
        pending = ctx.find_pad(false);
    }

    if pending.is_none()
        && kinds.contains(KindMask::ELEMENT_NAME)
        && board.element_on
        && let Some((element, area)) = ctx.find_name(false)
    {
        pending = Some(Found::ElementName { element });
        pending_area = area;
    }

    if pending.is_none()
        && kinds.contains(KindMask::ELEMENT)
        && board.element_on
        && board.pin_on
        && let Some((element, area)) = ctx.find_element(false)
    {
        pending = Some(Found::Element { element });
        pending_area = area;
    }

    let pin_or_pad = matches!(pending, Some(Found::Pin { .. } | Found::Pad { .. }));

    'layers: for layer_id in layer_order(board) {
        if layer_id == LayerId::BackSilk && !board.invisible_objects_on {
            continue;
        }
        let layer = board.layer(layer_id);
        if !layer.on {
            continue;
        }

        if !pin_or_pad {
            if kinds.contains(KindMask::POLYGON_POINT)
                && let Some(found) = ctx.find_polygon_point(layer_id)
            {
                return Some(found);
            }
            if kinds.contains(KindMask::LINE_POINT)
                && let Some(found) = ctx.find_line_point(layer_id)
            {
                return Some(found);
            }
            if kinds.contains(KindMask::LINE)
                && let Some(found) = ctx.find_line(layer_id)
            {
                return Some(found);
            }
            if kinds.contains(KindMask::ARC_POINT)
                && let Some(found) = ctx.find_arc_point(layer_id)
            {
                return Some(found);
            }
            if kinds.contains(KindMask::ARC)
                && let Some(found) = ctx.find_arc(layer_id)
            {
                return Some(found);
            }
            if kinds.contains(KindMask::TEXT)
                && let Some(found) = ctx.find_text(layer_id)
            {
                return Some(found);
            }
        }

        if kinds.contains(KindMask::POLYGON)
            && let Some((polygon, area)) = ctx.find_polygon(layer_id)
        {
            if pending.is_some() {
                // The pending pin/pad (area zero) or smaller-boxed name or
                // element outranks this polygon.
                if pending_area < area {
                    break 'layers;
                }
            }
            return Some(Found::Polygon {
                layer: layer_id,
                polygon,
            });
        }
    }

    if pending.is_some() {
        return pending;
    }

    // The far side gets one more chance for the element-level kinds.
    if !board.invisible_objects_on {
        return None;
    }

    if kinds.contains(KindMask::PAD)
        && board.pin_on
        && let Some(found) = ctx.find_pad(true)
    {
        return Some(found);
    }

    if kinds.contains(KindMask::ELEMENT_NAME)
        && board.element_on
        && let Some((element, _)) = ctx.find_name(true)
    {
        return Some(Found::ElementName { element });
    }

    if kinds.contains(KindMask::ELEMENT)
        && board.element_on
        && board.pin_on
        && let Some((element, _)) = ctx.find_element(true)
    {
        return Some(Found::Element { element });
    }

    None
}

/// All searchable layers in stacking order: front silk, copper per the
/// board's stacking vector, back silk last.
fn layer_order(board: &Board) -> Vec<LayerId> {
    let mut order = Vec::with_capacity(board.copper.len() + 2);
    order.push(LayerId::FrontSilk);
    if board.copper_stack.is_empty() {
        order.extend((0..board.copper.len()).map(LayerId::Copper));
    } else {
        order.extend(board.copper_stack.iter().map(|&i| LayerId::Copper(i)));
    }
    order.push(LayerId::BackSilk);
    order
}

/// Per-search context shared by the tier helpers.
struct Ctx<'a> {
    board: &'a Board,
    pos: Vec2,
    radius: Coord,
    bypass_lock: bool,
}

impl Ctx<'_> {
    fn admits(&self, flags: ObjectFlags) -> bool {
        self.bypass_lock || !flags.contains(ObjectFlags::LOCKED)
    }

    fn query(&self) -> boardwalk_model::Bounds {
        query_box(self.pos, self.radius)
    }

    fn find_rat(&self) -> Option<Found> {
        let mut hit = None;
        let _ = self.board.traverse_rats(self.query(), |i, rat| {
            if !self.admits(rat.flags) {
                return Visit::Continue;
            }
            let touched = if rat.flags.contains(ObjectFlags::VIA_RAT) {
                // Via-rats render as a circle marker at the first endpoint.
                (self.pos - rat.a).magnitude() <= (rat.thickness * 2 + self.radius) as f64
            } else {
                predicates::seg_hit(self.pos, self.radius, &Seg::new(rat.a, rat.b), rat.thickness)
            };
            if touched {
                hit = Some(Found::Rat { rat: i });
                Visit::Found
            } else {
                Visit::Continue
            }
        });
        hit
    }

    fn find_via(&self) -> Option<Found> {
        let mut hit = None;
        let _ = self.board.traverse_vias(self.query(), |i, via| {
            if self.admits(via.flags) && predicates::pin_hit(self.pos, self.radius, via) {
                hit = Some(Found::Via { via: i });
                Visit::Found
            } else {
                Visit::Continue
            }
        });
        hit
    }

    fn find_pin(&self) -> Option<Found> {
        let mut hit = None;
        let _ = self.board.traverse_pins(self.query(), |ei, pi, pin| {
            let owner = &self.board.elements[ei];
            if self.admits(owner.flags) && predicates::pin_hit(self.pos, self.radius, pin) {
                hit = Some(Found::Pin {
                    element: ei,
                    pin: pi,
                });
                Visit::Found
            } else {
                Visit::Continue
            }
        });
        hit
    }

    fn find_pad(&self, back_too: bool) -> Option<Found> {
        let mut best = None;
        let mut best_sq_dist = 0.0;
        let _ = self.board.traverse_pads(self.query(), |ei, pi, pad| {
            let owner = &self.board.elements[ei];
            if !self.admits(owner.flags)
                || (!back_too && pad.side != boardwalk_model::Side::Front)
                || !predicates::thick_seg_hit(
                    self.pos,
                    self.radius,
                    &Seg::new(pad.a, pad.b),
                    pad.thickness,
                    pad.flags.contains(ObjectFlags::SQUARE),
                )
            {
                return Visit::Continue;
            }

            // Of all hit pads, pick the one whose center is closest.
            let center = Vec2::new(
                pad.a.x + (pad.b.x - pad.a.x) / 2,
                pad.a.y + (pad.b.y - pad.a.y) / 2,
            );
            let d = self.pos - center;
            let sq_dist = d.dot(d);
            if best.is_none() || sq_dist < best_sq_dist {
                best = Some(Found::Pad {
                    element: ei,
                    pad: pi,
                });
                best_sq_dist = sq_dist;
            }
            Visit::Continue
        });
        best
    }

    fn find_name(&self, back_too: bool) -> Option<(usize, f64)> {
        let mut best = None;
        let mut best_area = f64::MAX;
        let _ = self.board.traverse_names(self.query(), |ei, element| {
            let name = &element.name;
            if !self.admits(name.flags)
                || (!back_too && element.side != boardwalk_model::Side::Front)
                || element.flags.contains(ObjectFlags::HIDE_NAME)
                || !name.bbox.contains_point(self.pos.x, self.pos.y)
            {
                return Visit::Continue;
            }
            // Smallest label box wins.
            let area = (name.bbox.x2 - name.bbox.x1) as f64 * (name.bbox.y2 - name.bbox.y1) as f64;
            if area < best_area {
                best_area = area;
                best = Some((ei, area));
            }
            Visit::Continue
        });
        best
    }

    fn find_element(&self, back_too: bool) -> Option<(usize, f64)> {
        let mut best = None;
        let mut best_area = f64::MAX;
        let _ = self.board.traverse_elements(self.query(), |ei, element| {
            if !self.admits(element.flags)
                || (!back_too && element.side != boardwalk_model::Side::Front)
                || !element.bounds.contains_point(self.pos.x, self.pos.y)
            {
                return Visit::Continue;
            }
            let b = &element.bounds;
            let area = (b.x2 - b.x1) as f64 * (b.y2 - b.y1) as f64;
            if area < best_area {
                best_area = area;
                best = Some((ei, area));
            }
            Visit::Continue
        });
        best
    }

    fn find_polygon_point(&self, layer_id: LayerId) -> Option<Found> {
        let layer = self.board.layer(layer_id);
        let mut best = None;
        let mut least = self.radius as f64;
        for (polygon, poly) in layer.polygons.iter().enumerate() {
            if !self.admits(poly.flags) {
                continue;
            }
            for (vertex, &v) in poly.vertices.iter().enumerate() {
                let d = (v - self.pos).magnitude();
                if d < least {
                    least = d;
                    best = Some(Found::PolygonPoint {
                        layer: layer_id,
                        polygon,
                        vertex,
                    });
                }
            }
        }
        best
    }

    fn find_line_point(&self, layer_id: LayerId) -> Option<Found> {
        let layer = self.board.layer(layer_id);
        let mut best = None;
        let mut least = self.radius as f64;
        let _ = layer.traverse_lines(self.query(), |i, line| {
            if !self.admits(line.flags) {
                return Visit::Continue;
            }
            for (end, p) in [(End::A, line.a), (End::B, line.b)] {
                let d = (p - self.pos).magnitude();
                if d < least {
                    least = d;
                    best = Some(Found::LinePoint {
                        layer: layer_id,
                        line: i,
                        end,
                    });
                }
            }
            Visit::Continue
        });
        best
    }

    fn find_line(&self, layer_id: LayerId) -> Option<Found> {
        let layer = self.board.layer(layer_id);
        let mut hit = None;
        let _ = layer.traverse_lines(self.query(), |i, line| {
            if self.admits(line.flags)
                && predicates::thick_seg_hit(
                    self.pos,
                    self.radius,
                    &Seg::new(line.a, line.b),
                    line.thickness,
                    line.flags.contains(ObjectFlags::SQUARE),
                )
            {
                hit = Some(Found::Line {
                    layer: layer_id,
                    line: i,
                });
                Visit::Found
            } else {
                Visit::Continue
            }
        });
        hit
    }

    fn find_arc_point(&self, layer_id: LayerId) -> Option<Found> {
        let layer = self.board.layer(layer_id);
        let mut best = None;
        let mut least = self.radius as f64;
        let _ = layer.traverse_arcs(self.query(), |i, arc| {
            if !self.admits(arc.flags) {
                return Visit::Continue;
            }
            let [a, b] = arc.to_arc().end_points();
            for (end, p) in [(End::A, a), (End::B, b)] {
                let d = (p - self.pos).magnitude();
                if d < least {
                    least = d;
                    best = Some(Found::ArcPoint {
                        layer: layer_id,
                        arc: i,
                        end,
                    });
                }
            }
            Visit::Continue
        });
        best
    }

    fn find_arc(&self, layer_id: LayerId) -> Option<Found> {
        let layer = self.board.layer(layer_id);
        let mut hit = None;
        let _ = layer.traverse_arcs(self.query(), |i, arc| {
            if self.admits(arc.flags) && predicates::arc_hit(self.pos, self.radius, arc) {
                hit = Some(Found::Arc {
                    layer: layer_id,
                    arc: i,
                });
                Visit::Found
            } else {
                Visit::Continue
            }
        });
        hit
    }

    fn find_text(&self, layer_id: LayerId) -> Option<Found> {
        let layer = self.board.layer(layer_id);
        let mut hit = None;
        let _ = layer.traverse_texts(self.query(), |i, text| {
            if self.admits(text.flags) && text.bbox.contains_point(self.pos.x, self.pos.y) {
                hit = Some(Found::Text {
                    layer: layer_id,
                    text: i,
                });
                Visit::Found
            } else {
                Visit::Continue
            }
        });
        hit
    }

    fn find_polygon(&self, layer_id: LayerId) -> Option<(usize, f64)> {
        let layer = self.board.layer(layer_id);
        let mut best = None;
        let mut best_area = f64::MAX;
        let _ = layer.traverse_polygons(self.query(), |i, poly| {
            if !self.admits(poly.flags)
                || !predicates::polygon_hit(self.pos, self.radius, poly)
            {
                return Visit::Continue;
            }
            let b = poly.bounds();
            let area = (b.x2 - b.x1) as f64 * (b.y2 - b.y1) as f64;
            if area < best_area {
                best_area = area;
                best = Some((i, area));
            }
            Visit::Continue
        });
        best
    }
}
