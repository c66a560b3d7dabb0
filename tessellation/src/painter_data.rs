//! Derived, renderer-facing attribute data (§5, §6).
//!
//! The painter/attribute-packing layer that consumes this is out of
//! scope; what belongs here is only the lazily-built, cached repackaging
//! of each point-set's vertices into a flat per-vertex attribute layout
//! ready for upload, built once on first access and owned by the
//! [`crate::StrokedPath`] that produced it.

use crate::point_set::PointSet;
use crate::stroked_path::StrokedPath;
use alloc::vec::Vec;

/// One vertex, flattened into the attribute layout a vertex buffer upload
/// would use. `tag_bits` and `depth` are carried as-is (not reinterpreted
/// as floats) since they are integers consumed by the shader, typically
/// uploaded through a separate integer-typed attribute.
#[derive(Copy, Clone, Debug, Default)]
pub struct PainterAttribute {
    pub position: [f32; 2],
    pub pre_offset: [f32; 2],
    pub auxiliary_offset: [f32; 2],
    pub on_boundary: f32,
    pub depth: u32,
    pub tag_bits: u32,
}

#[derive(Clone, Debug, Default)]
pub struct PainterAttributeData {
    by_point_set: [Vec<PainterAttribute>; 8],
}

impl PainterAttributeData {
    pub(crate) fn build(path: &StrokedPath) -> Self {
        let mut by_point_set: [Vec<PainterAttribute>; 8] = Default::default();
        for (slot, point_set) in by_point_set.iter_mut().zip(PointSet::ALL) {
            *slot = path
                .points(point_set, true)
                .iter()
                .map(|v| PainterAttribute {
                    position: [v.position.x, v.position.y],
                    pre_offset: [v.pre_offset.x, v.pre_offset.y],
                    auxiliary_offset: [v.auxiliary_offset.x, v.auxiliary_offset.y],
                    on_boundary: v.on_boundary,
                    depth: v.depth,
                    tag_bits: v.tag.0,
                })
                .collect();
        }
        PainterAttributeData { by_point_set }
    }

    pub fn attributes(&self, point_set: PointSet) -> &[PainterAttribute] {
        &self.by_point_set[point_set_index(point_set)]
    }
}

fn point_set_index(point_set: PointSet) -> usize {
    PointSet::ALL.iter().position(|p| *p == point_set).unwrap()
}
