//! Orchestrator (§2, §6): runs the six leaf producers in a fixed order
//! and publishes the typed, read-only views callers see.

use crate::buffers::PartitionedMesh;
use crate::cap_builder::{self, CommonCapData};
use crate::edge_builder;
use crate::join_common::CommonJoinData;
use crate::join_location::{JoinLocations, PendingJoin};
use crate::painter_data::PainterAttributeData;
use crate::point_set::PointSet;
use crate::vertex::{Origin, Vertex};
use crate::{bevel_join, cap_join, miter_join, rounded_join};
use crate::{buffers::MeshBuilder, path::TessellatedPath};
use alloc::vec::Vec;
use core::cell::OnceCell;
use core::ops::Range;

/// Built once from a tessellated path and immutable afterward (§5): every
/// accessor below is a plain read of data computed in [`StrokedPath::new`].
pub struct StrokedPath {
    edges: PartitionedMesh,
    bevel_joins: PartitionedMesh,
    miter_joins: PartitionedMesh,
    rounded_joins: PartitionedMesh,
    cap_joins: PartitionedMesh,
    square_caps: PartitionedMesh,
    rounded_caps: PartitionedMesh,
    flat_caps: PartitionedMesh,
    join_locations: JoinLocations,
    number_contours: usize,
    number_joins: Vec<usize>,
    painter_data: OnceCell<PainterAttributeData>,
}

impl StrokedPath {
    pub fn new(path: &impl TessellatedPath) -> Self {
        let (edges, normals) = edge_builder::build(path);

        let mut bevel_mesh = MeshBuilder::new();
        let mut miter_mesh = MeshBuilder::new();
        let mut rounded_mesh = MeshBuilder::new();
        let mut cap_join_mesh = MeshBuilder::new();
        let mut square_cap_mesh = MeshBuilder::new();
        let mut flat_cap_mesh = MeshBuilder::new();
        let mut rounded_cap_mesh = MeshBuilder::new();

        let mut bevel_pending = Vec::new();
        let mut miter_pending = Vec::new();
        let mut rounded_pending = Vec::new();
        let mut cap_join_pending = Vec::new();

        let tau = path.tessellation_parameters().curve_tessellation;
        let mut number_joins = Vec::with_capacity(path.number_contours());

        for contour in 0..path.number_contours() {
            let table = &normals[contour];
            let number_edges = path.number_edges(contour);

            if number_edges < 2 {
                number_joins.push(0);
                continue;
            }
            number_joins.push(number_edges);

            let mut emit_join = |join: usize, closing: bool, n0_e: usize, n1_e: usize, shared_edge: usize| {
                let shared_point = path.point_data()[path.edge_range(contour, shared_edge).start];
                let common = CommonJoinData::new(
                    shared_point.position,
                    shared_point.distance_from_edge_start,
                    shared_point.distance_from_contour_start,
                    table.edge_end_normal[n0_e],
                    table.edge_begin_normal[n1_e],
                    Origin {
                        contour: contour as u32,
                        edge: shared_edge as u32,
                    },
                );

                let (va, ia) = bevel_join::emit(&mut bevel_mesh, closing, &common);
                bevel_pending.push(PendingJoin {
                    point_set: PointSet::BevelJoins,
                    contour,
                    join,
                    closing,
                    attrib_range: va,
                    index_range: ia,
                });

                let (va, ia) = miter_join::emit(&mut miter_mesh, closing, &common);
                miter_pending.push(PendingJoin {
                    point_set: PointSet::MiterJoins,
                    contour,
                    join,
                    closing,
                    attrib_range: va,
                    index_range: ia,
                });

                let (va, ia) = rounded_join::emit(&mut rounded_mesh, closing, &common, tau);
                rounded_pending.push(PendingJoin {
                    point_set: PointSet::RoundedJoins,
                    contour,
                    join,
                    closing,
                    attrib_range: va,
                    index_range: ia,
                });

                let (va, ia) = cap_join::emit(&mut cap_join_mesh, closing, &common);
                cap_join_pending.push(PendingJoin {
                    point_set: PointSet::CapJoins,
                    contour,
                    join,
                    closing,
                    attrib_range: va,
                    index_range: ia,
                });
            };

            let last_non_closing = number_edges - 2;
            for e in 1..number_edges - 1 {
                emit_join(e - 1, false, e - 1, e, e);
            }
            // Closing join A: last non-closing edge -> closing edge.
            emit_join(
                last_non_closing,
                true,
                last_non_closing,
                number_edges - 1,
                number_edges - 1,
            );
            // Closing join B: closing edge -> edge 0.
            emit_join(number_edges - 1, true, number_edges - 1, 0, 0);
        }

        for contour in 0..path.number_contours() {
            let table = &normals[contour];
            let unclosed = path.unclosed_contour_point_data(contour);
            if unclosed.is_empty() {
                continue;
            }
            let degenerate = path.contour_is_degenerate(contour);
            let number_edges = path.number_edges(contour);
            let end_edge = if number_edges >= 2 { number_edges - 2 } else { 0 };
            let start = CommonCapData::new(
                unclosed[0],
                table.begin_cap_normal,
                true,
                Origin {
                    contour: contour as u32,
                    edge: 0,
                },
            );
            let end = CommonCapData::new(
                unclosed[unclosed.len() - 1],
                table.end_cap_normal,
                false,
                Origin {
                    contour: contour as u32,
                    edge: end_edge as u32,
                },
            );

            cap_builder::emit_square(&mut square_cap_mesh, false, &start);
            cap_builder::emit_square(&mut square_cap_mesh, false, &end);

            if !degenerate {
                cap_builder::emit_flat(&mut flat_cap_mesh, false, &start);
                cap_builder::emit_flat(&mut flat_cap_mesh, false, &end);
            }

            cap_builder::emit_rounded(&mut rounded_cap_mesh, false, &start, tau);
            cap_builder::emit_rounded(&mut rounded_cap_mesh, false, &end, tau);
        }

        let bevel_joins = bevel_mesh.finish();
        let miter_joins = miter_mesh.finish();
        let rounded_joins = rounded_mesh.finish();
        let cap_joins = cap_join_mesh.finish();
        let square_caps = square_cap_mesh.finish();
        let flat_caps = flat_cap_mesh.finish();
        let rounded_caps = rounded_cap_mesh.finish();

        let mut join_locations = JoinLocations::new();
        join_locations.commit(bevel_pending, &bevel_joins);
        join_locations.commit(miter_pending, &miter_joins);
        join_locations.commit(rounded_pending, &rounded_joins);
        join_locations.commit(cap_join_pending, &cap_joins);

        StrokedPath {
            edges,
            bevel_joins,
            miter_joins,
            rounded_joins,
            cap_joins,
            square_caps,
            rounded_caps,
            flat_caps,
            join_locations,
            number_contours: path.number_contours(),
            number_joins,
            painter_data: OnceCell::new(),
        }
    }

    fn mesh(&self, point_set: PointSet) -> &PartitionedMesh {
        match point_set {
            PointSet::Edges => &self.edges,
            PointSet::BevelJoins => &self.bevel_joins,
            PointSet::MiterJoins => &self.miter_joins,
            PointSet::RoundedJoins => &self.rounded_joins,
            PointSet::CapJoins => &self.cap_joins,
            PointSet::SquareCaps => &self.square_caps,
            PointSet::RoundedCaps => &self.rounded_caps,
            PointSet::FlatCaps => &self.flat_caps,
        }
    }

    pub fn points(&self, point_set: PointSet, including_closing_edge: bool) -> &[Vertex] {
        self.mesh(point_set).points(including_closing_edge)
    }

    pub fn indices(&self, point_set: PointSet, including_closing_edge: bool) -> &[u32] {
        self.mesh(point_set).indices(including_closing_edge)
    }

    pub fn number_depth(&self, point_set: PointSet, including_closing_edge: bool) -> u32 {
        self.mesh(point_set).number_depth(including_closing_edge)
    }

    pub fn number_contours(&self) -> usize {
        self.number_contours
    }

    pub fn number_joins(&self, contour: usize) -> usize {
        self.number_joins[contour]
    }

    /// Empty if `point_set` is not a join kind.
    pub fn join_points_range(&self, point_set: PointSet, contour: usize, join: usize) -> Range<usize> {
        if !point_set.is_join_kind() {
            return 0..0;
        }
        self.join_locations.points_range(point_set, contour, join)
    }

    pub fn join_indices_range(&self, point_set: PointSet, contour: usize, join: usize) -> Range<usize> {
        if !point_set.is_join_kind() {
            return 0..0;
        }
        self.join_locations.indices_range(point_set, contour, join)
    }

    /// Lazily built and cached on first access (§5). Not safe to race two
    /// concurrent first calls; callers must serialize the first access or
    /// build eagerly by calling this once up front.
    pub fn painter_data(&self) -> &PainterAttributeData {
        self.painter_data.get_or_init(|| PainterAttributeData::build(self))
    }
}
