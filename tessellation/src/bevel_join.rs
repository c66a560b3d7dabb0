//! §4.3 — one triangle per interior or closing join.

use crate::buffers::MeshBuilder;
use crate::join_common::{record, CommonJoinData};
use crate::path::math::Vector;
use crate::vertex::{PointKind, Tag, Vertex};
use core::ops::Range;

pub fn emit(mesh: &mut MeshBuilder, closing: bool, common: &CommonJoinData) -> (Range<usize>, Range<usize>) {
    record(mesh, closing, |mesh, closing| {
        let depth = mesh.begin_primitive(closing);
        let mk = |offset: Vector, on_boundary: f32| Vertex {
            position: common.position,
            pre_offset: offset,
            auxiliary_offset: Vector::zero(),
            distance_from_edge_start: common.distance_from_edge_start,
            distance_from_contour_start: common.distance_from_contour_start,
            on_boundary,
            depth,
            tag: Tag::new(PointKind::Edge),
            origin: common.origin,
        };
        let i0 = mesh.push_vertex(closing, mk(common.lambda * common.n0, 1.0));
        let i1 = mesh.push_vertex(closing, mk(Vector::zero(), 0.0));
        let i2 = mesh.push_vertex(closing, mk(common.lambda * common.n1, 1.0));
        mesh.push_index(closing, i0);
        mesh.push_index(closing, i1);
        mesh.push_index(closing, i2);
    })
}
