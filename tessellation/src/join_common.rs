//! §4.2 — data shared by every join style.

use crate::buffers::MeshBuilder;
use crate::geom::lambda;
use crate::path::math::{Point, Vector};
use crate::vertex::Origin;
use core::ops::Range;

/// Derived once per join from the two normals flanking its shared point;
/// every join builder (bevel, miter, rounded, cap-join) starts from this.
#[derive(Copy, Clone, Debug)]
pub struct CommonJoinData {
    pub position: Point,
    pub distance_from_edge_start: f32,
    pub distance_from_contour_start: f32,
    pub n0: Vector,
    pub n1: Vector,
    pub lambda: f32,
    pub origin: Origin,
}

impl CommonJoinData {
    pub fn new(
        position: Point,
        distance_from_edge_start: f32,
        distance_from_contour_start: f32,
        n0: Vector,
        n1: Vector,
        origin: Origin,
    ) -> Self {
        CommonJoinData {
            position,
            distance_from_edge_start,
            distance_from_contour_start,
            n0,
            n1,
            lambda: lambda(n0, n1),
            origin,
        }
    }
}

/// Records the (local) vertex/index ranges a join or cap builder wrote
/// while `emit` ran, for later translation into the JoinLocation table.
pub fn record(
    mesh: &mut MeshBuilder,
    closing: bool,
    emit: impl FnOnce(&mut MeshBuilder, bool),
) -> (Range<usize>, Range<usize>) {
    let v_start = mesh.vertex_count(closing);
    let i_start = mesh.index_count(closing);
    emit(mesh, closing);
    (
        v_start..mesh.vertex_count(closing),
        i_start..mesh.index_count(closing),
    )
}
