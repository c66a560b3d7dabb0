//! §4.5 — an adaptively-tessellated fan encoding a circular arc at an
//! interior or closing join.

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::buffers::MeshBuilder;
use crate::join_common::{record, CommonJoinData};
use crate::path::math::Vector;
use crate::vertex::{PointKind, Tag, Vertex};
use alloc::vec::Vec;
use core::ops::Range;

/// Number of arc samples for an angular span of `delta` radians at
/// tessellation step `tau`: `max(3, ceil(|delta| / tau))`.
fn arc_sample_count(delta: f32, tau: f32) -> usize {
    let n = (delta.abs() / tau).ceil() as i64;
    n.max(3) as usize
}

pub fn emit(
    mesh: &mut MeshBuilder,
    closing: bool,
    common: &CommonJoinData,
    tau: f32,
) -> (Range<usize>, Range<usize>) {
    let z0 = common.lambda * common.n0;
    let z1 = common.lambda * common.n1;
    // delta = arg(z1 * conj(z0))
    let re = z1.x * z0.x + z1.y * z0.y;
    let im = z1.y * z0.x - z1.x * z0.y;
    let delta = im.atan2(re);
    let n = arc_sample_count(delta, tau);
    let step = delta / (n - 1) as f32;

    record(mesh, closing, |mesh, closing| {
        let depth = mesh.begin_primitive(closing);
        let base = |offset: Vector, aux: Vector, on_boundary: f32, tag: Tag| Vertex {
            position: common.position,
            pre_offset: offset,
            auxiliary_offset: aux,
            distance_from_edge_start: common.distance_from_edge_start,
            distance_from_contour_start: common.distance_from_contour_start,
            on_boundary,
            depth,
            tag,
            origin: common.origin,
        };

        let mut indices: Vec<u32> = Vec::with_capacity(n + 1);
        indices.push(mesh.push_vertex(
            closing,
            base(Vector::zero(), Vector::zero(), 0.0, Tag::new(PointKind::Edge)),
        ));
        indices.push(mesh.push_vertex(
            closing,
            base(z0, Vector::zero(), 1.0, Tag::new(PointKind::Edge)),
        ));

        let tag_bits = Tag::new(PointKind::RoundedJoin)
            .with_n0_sign(z0.y)
            .with_n1_sign(z1.y);
        for i in 1..=n.saturating_sub(2) {
            let theta = i as f32 * step;
            let (s, c) = (theta.sin(), theta.cos());
            let real = c * z0.x - s * z0.y;
            let imag = c * z0.y + s * z0.x;
            let t = i as f32 / (n - 1) as f32;
            let tag = tag_bits.with_sin_sign(imag);
            indices.push(mesh.push_vertex(
                closing,
                base(Vector::new(z0.x, z1.x), Vector::new(t, real), 1.0, tag),
            ));
        }

        indices.push(mesh.push_vertex(
            closing,
            base(z1, Vector::zero(), 1.0, Tag::new(PointKind::Edge)),
        ));

        for i in 1..indices.len() - 1 {
            mesh.push_index(closing, indices[0]);
            mesh.push_index(closing, indices[i]);
            mesh.push_index(closing, indices[i + 1]);
        }
    })
}
