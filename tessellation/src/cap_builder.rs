//! §4.6 — square, flat and rounded caps at the two endpoints of a contour.

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::buffers::MeshBuilder;
use crate::path::math::{Point, Vector};
use crate::path::InputPoint;
use crate::vertex::{Origin, PointKind, Tag, Vertex};
use alloc::vec::Vec;
use core::f32::consts::PI;

/// Derived once per cap (§4.6): `sigma = -1` at the start of a contour,
/// `+1` at its end. `v` points outward from the contour along the tangent.
pub struct CommonCapData {
    pub position: Point,
    pub distance_from_edge_start: f32,
    pub distance_from_contour_start: f32,
    pub n: Vector,
    pub v: Vector,
    pub origin: Origin,
}

impl CommonCapData {
    pub fn new(point: InputPoint, normal: Vector, is_start: bool, origin: Origin) -> Self {
        let sigma = if is_start { -1.0 } else { 1.0 };
        let n = normal * sigma;
        let v = Vector::new(normal.y, -normal.x) * sigma;
        CommonCapData {
            position: point.position,
            distance_from_edge_start: point.distance_from_edge_start,
            distance_from_contour_start: point.distance_from_contour_start,
            n,
            v,
            origin,
        }
    }
}

fn emit_corner_cap(mesh: &mut MeshBuilder, closing: bool, common: &CommonCapData, kind: PointKind) {
    let depth = mesh.begin_primitive(closing);
    let mk = |offset: Vector, aux: Vector, on_boundary: f32, kind: PointKind| Vertex {
        position: common.position,
        pre_offset: offset,
        auxiliary_offset: aux,
        distance_from_edge_start: common.distance_from_edge_start,
        distance_from_contour_start: common.distance_from_contour_start,
        on_boundary,
        depth,
        tag: Tag::new(kind),
        origin: common.origin,
    };
    let i0 = mesh.push_vertex(closing, mk(Vector::zero(), Vector::zero(), 0.0, PointKind::Edge));
    let i1 = mesh.push_vertex(closing, mk(common.n, Vector::zero(), 1.0, PointKind::Edge));
    let i2 = mesh.push_vertex(closing, mk(common.n, common.v, 1.0, kind));
    let i3 = mesh.push_vertex(closing, mk(-common.n, common.v, 1.0, kind));
    let i4 = mesh.push_vertex(closing, mk(-common.n, Vector::zero(), 1.0, PointKind::Edge));
    for idx in [i0, i1, i2, i0, i2, i3, i0, i3, i4] {
        mesh.push_index(closing, idx);
    }
}

/// Square caps are emitted even for degenerate (single-point) contours.
pub fn emit_square(mesh: &mut MeshBuilder, closing: bool, common: &CommonCapData) {
    emit_corner_cap(mesh, closing, common, PointKind::SquareCap);
}

/// Flat caps skip degenerate contours (§4.6); the caller is responsible
/// for that check, this just emits the geometry.
pub fn emit_flat(mesh: &mut MeshBuilder, closing: bool, common: &CommonCapData) {
    emit_corner_cap(mesh, closing, common, PointKind::FlatCap);
}

fn arc_sample_count(tau: f32) -> usize {
    let n = (PI / tau).ceil() as i64;
    n.max(3) as usize
}

/// Rounded caps are emitted for degenerate contours too, yielding a full
/// disc.
pub fn emit_rounded(mesh: &mut MeshBuilder, closing: bool, common: &CommonCapData, tau: f32) {
    let n = arc_sample_count(tau);
    let step = PI / (n - 1) as f32;
    let depth = mesh.begin_primitive(closing);
    let mk = |offset: Vector, aux: Vector, on_boundary: f32, kind: PointKind| Vertex {
        position: common.position,
        pre_offset: offset,
        auxiliary_offset: aux,
        distance_from_edge_start: common.distance_from_edge_start,
        distance_from_contour_start: common.distance_from_contour_start,
        on_boundary,
        depth,
        tag: Tag::new(kind),
        origin: common.origin,
    };

    let mut fan: Vec<u32> = Vec::with_capacity(n + 1);
    fan.push(mesh.push_vertex(closing, mk(Vector::zero(), Vector::zero(), 0.0, PointKind::Edge)));
    fan.push(mesh.push_vertex(closing, mk(common.n, Vector::zero(), 1.0, PointKind::Edge)));
    for i in 1..=n.saturating_sub(2) {
        let theta = i as f32 * step;
        fan.push(mesh.push_vertex(
            closing,
            mk(common.n, Vector::new(theta.sin(), theta.cos()), 1.0, PointKind::RoundedCap),
        ));
    }
    fan.push(mesh.push_vertex(closing, mk(-common.n, Vector::zero(), 1.0, PointKind::Edge)));

    for i in 1..fan.len() - 1 {
        mesh.push_index(closing, fan[0]);
        mesh.push_index(closing, fan[i]);
        mesh.push_index(closing, fan[i + 1]);
    }
}
