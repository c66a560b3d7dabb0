//! §4.4 — a 5-vertex fan encoding miter geometry at an interior or closing
//! join.

use crate::buffers::MeshBuilder;
use crate::join_common::{record, CommonJoinData};
use crate::path::math::Vector;
use crate::vertex::{PointKind, Tag, Vertex};
use core::ops::Range;

/// Shared by [`crate::cap_join`], which emits the exact same fan tagged
/// `cap_join` instead of `miter_join` on the two apex vertices.
pub(crate) fn emit_with_kind(
    mesh: &mut MeshBuilder,
    closing: bool,
    common: &CommonJoinData,
    apex_kind: PointKind,
) -> (Range<usize>, Range<usize>) {
    record(mesh, closing, |mesh, closing| {
        let depth = mesh.begin_primitive(closing);
        let base = |offset: Vector, aux: Vector, on_boundary: f32, kind: PointKind| Vertex {
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
        let i0 = mesh.push_vertex(closing, base(Vector::zero(), Vector::zero(), 0.0, PointKind::Edge));
        let i1 = mesh.push_vertex(
            closing,
            base(common.lambda * common.n0, Vector::zero(), 1.0, PointKind::Edge),
        );
        let i2 = mesh.push_vertex(closing, base(common.n0, common.n1, 1.0, apex_kind));
        let i3 = mesh.push_vertex(closing, base(common.n0, common.n1, 1.0, apex_kind));
        let i4 = mesh.push_vertex(
            closing,
            base(common.lambda * common.n1, Vector::zero(), 1.0, PointKind::Edge),
        );
        for idx in [i0, i1, i2, i0, i2, i3, i0, i3, i4] {
            mesh.push_index(closing, idx);
        }
    })
}

pub fn emit(mesh: &mut MeshBuilder, closing: bool, common: &CommonJoinData) -> (Range<usize>, Range<usize>) {
    emit_with_kind(mesh, closing, common, PointKind::MiterJoin)
}
