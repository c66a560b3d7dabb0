//! §4.1 — turns sub-edges into quad strips and records the per-contour
//! normal tables the join and cap builders read from.

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::buffers::{MeshBuilder, PartitionedMesh};
use crate::geom::lambda;
use crate::path::math::Vector;
use crate::path::{InputPoint, TessellatedPath};
use crate::vertex::{Origin, PointKind, Tag, Vertex};
use alloc::vec;
use alloc::vec::Vec;

/// Sentinel written into normal-table slots before they are filled in, so
/// tests can assert a slot was never read unwritten (§9 open question).
pub const SENTINEL_BEGIN: Vector = Vector::new(999.0, 999.0);
pub const SENTINEL_END: Vector = Vector::new(111.0, 111.0);

/// Normals produced by the edge builder for one contour, consumed by every
/// join and cap builder. Kept as an explicit table handed down rather than
/// a back-pointer into the edge builder.
#[derive(Clone, Debug)]
pub struct ContourNormals {
    pub edge_begin_normal: Vec<Vector>,
    pub edge_end_normal: Vec<Vector>,
    pub begin_cap_normal: Vector,
    pub end_cap_normal: Vector,
    pub degenerate: bool,
}

impl ContourNormals {
    fn new(number_edges: usize, degenerate: bool) -> Self {
        ContourNormals {
            edge_begin_normal: vec![SENTINEL_BEGIN; number_edges],
            edge_end_normal: vec![SENTINEL_END; number_edges],
            begin_cap_normal: SENTINEL_BEGIN,
            end_cap_normal: SENTINEL_END,
            degenerate,
        }
    }
}

const DEGENERATE_EPSILON: f32 = 1e-12;

/// Computes the left-hand unit normal of sub-edge `p -> p_next`, falling
/// back to the per-point tangent, then to the previous normal, when the
/// sub-edge is (near) zero length (§4.1 "Normal fallback").
fn sub_edge_normal(v: Vector, tangent: Vector, previous: Vector) -> Vector {
    if v.square_length() < DEGENERATE_EPSILON {
        if tangent.square_length() > 0.0 {
            return crate::geom::perp(tangent.normalize());
        }
        return previous;
    }
    crate::geom::perp(v.normalize())
}

/// The previous sub-edge's end-side vertices, kept around to stitch the
/// next bevel connector onto: the centerline-end vertex and the two
/// offset vertices on either side of it.
struct PreviousEnd {
    normal: Vector,
    centerline: u32,
    plus: u32,
    minus: u32,
}

/// Builds the `edges` point-set and the per-contour normal tables.
pub fn build(path: &impl TessellatedPath) -> (PartitionedMesh, Vec<ContourNormals>) {
    let mut mesh = MeshBuilder::new();
    let mut normals = Vec::with_capacity(path.number_contours());

    for contour in 0..path.number_contours() {
        let number_edges = path.number_edges(contour);
        let mut table = ContourNormals::new(number_edges, path.contour_is_degenerate(contour));
        let last_non_closing = if number_edges >= 2 {
            Some(number_edges - 2)
        } else {
            None
        };

        let mut previous_normal = Vector::new(1.0, 0.0);
        for edge in 0..number_edges {
            let is_closing = edge == number_edges - 1;
            let range = path.edge_range(contour, edge);
            let points = &path.point_data()[range.clone()];
            if points.len() < 2 {
                continue;
            }

            let mut first_normal = None;
            let mut last_normal = previous_normal;
            let mut previous_end: Option<PreviousEnd> = None;

            for i in 0..points.len() - 1 {
                let p0: InputPoint = points[i];
                let p1: InputPoint = points[i + 1];
                let v = p1.position - p0.position;
                let n = sub_edge_normal(v, p0.tangent, previous_normal);
                previous_normal = n;
                if first_normal.is_none() {
                    first_normal = Some(n);
                }
                last_normal = n;

                let depth = mesh.begin_primitive(is_closing);
                let delta0 = p0.distance_from_edge_start;
                let delta1 = p1.distance_from_edge_start;

                let origin = Origin {
                    contour: contour as u32,
                    edge: edge as u32,
                };
                let mk = |position, offset: Vector, on_boundary: f32, dist: f32, contour_dist: f32| {
                    Vertex {
                        position,
                        pre_offset: offset,
                        auxiliary_offset: Vector::zero(),
                        distance_from_edge_start: dist,
                        distance_from_contour_start: contour_dist,
                        on_boundary,
                        depth,
                        tag: Tag::new(PointKind::Edge),
                        origin,
                    }
                };

                let i0 = mesh.push_vertex(
                    is_closing,
                    mk(p0.position, n, 1.0, delta0, p0.distance_from_contour_start),
                );
                let i1 = mesh.push_vertex(
                    is_closing,
                    mk(p0.position, -n, 1.0, delta0, p0.distance_from_contour_start),
                );
                let i2 = mesh.push_vertex(
                    is_closing,
                    mk(p0.position, Vector::zero(), 0.0, delta0, p0.distance_from_contour_start),
                );
                let i3 = mesh.push_vertex(
                    is_closing,
                    mk(p1.position, n, -1.0, -delta1, p1.distance_from_contour_start),
                );
                let i4 = mesh.push_vertex(
                    is_closing,
                    mk(p1.position, -n, -1.0, -delta1, p1.distance_from_contour_start),
                );
                let i5 = mesh.push_vertex(
                    is_closing,
                    mk(p1.position, Vector::zero(), 0.0, -delta1, p1.distance_from_contour_start),
                );

                for idx in [i0, i2, i5, i0, i5, i3, i2, i1, i4, i2, i4, i5] {
                    mesh.push_index(is_closing, idx);
                }

                // Bevel connector (§4.1): bridges this sub-edge's start to
                // the previous one's end on whichever side is acute, per
                // `lambda` of the two sub-edge normals.
                if let Some(prev) = &previous_end {
                    let l = lambda(prev.normal, n);
                    let start_side = if l > 0.0 { i0 } else { i1 };
                    let prev_side = if l > 0.0 { prev.plus } else { prev.minus };
                    mesh.push_index(is_closing, prev.centerline);
                    mesh.push_index(is_closing, prev_side);
                    mesh.push_index(is_closing, start_side);
                }

                previous_end = Some(PreviousEnd {
                    normal: n,
                    centerline: i5,
                    plus: i3,
                    minus: i4,
                });
            }

            table.edge_begin_normal[edge] = first_normal.unwrap_or(previous_normal);
            table.edge_end_normal[edge] = last_normal;
            if edge == 0 {
                table.begin_cap_normal = table.edge_begin_normal[0];
            }
            // A degenerate contour has no non-closing edge at all; its lone
            // (closing) edge's normal serves as both cap normals, so the two
            // caps together still form a full disc rather than reading a
            // sentinel.
            let is_last_real_edge = Some(edge) == last_non_closing
                || (last_non_closing.is_none() && edge == number_edges - 1);
            if is_last_real_edge {
                table.end_cap_normal = table.edge_end_normal[edge];
            }
        }

        normals.push(table);
    }

    (mesh.finish(), normals)
}
