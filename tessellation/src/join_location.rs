//! Per-join `(attrib_range, index_range)` lookup table (§3, §6).
//!
//! Dashed stroking needs to find exactly the vertices and indices that
//! belong to one join, to be able to include or exclude it independently
//! of its neighbours. Modeled as an explicit sparse map rather than a
//! back-pointer, so it stays a pure function of what the join builders
//! already computed.

use crate::buffers::PartitionedMesh;
use crate::point_set::PointSet;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::ops::Range;

/// A join's ranges as recorded during emission, before the owning
/// [`PartitionedMesh`] has inverted depth and laid out its final buffers.
/// `attrib_range`/`index_range` are local to whichever partition `closing`
/// selects.
pub struct PendingJoin {
    pub point_set: PointSet,
    pub contour: usize,
    pub join: usize,
    pub closing: bool,
    pub attrib_range: Range<usize>,
    pub index_range: Range<usize>,
}

#[derive(Clone, Debug, Default)]
pub struct JoinLocations {
    entries: BTreeMap<(PointSet, usize, usize), (Range<usize>, Range<usize>)>,
}

impl JoinLocations {
    pub fn new() -> Self {
        JoinLocations::default()
    }

    /// Translates every pending join's local ranges into ranges valid
    /// against `mesh`'s "including closing edge" view and records them.
    /// Non-closing vertex ranges and closing index ranges need no
    /// translation because they occupy an unchanged prefix/head; the
    /// other two combinations are shifted by the sibling partition's size.
    pub fn commit(&mut self, pending: Vec<PendingJoin>, mesh: &PartitionedMesh) {
        let vertex_shift = mesh.pre_close_vertex_count() as usize;
        let index_shift = mesh.close_index_count() as usize;
        for p in pending {
            let attrib_range = if p.closing {
                (p.attrib_range.start + vertex_shift)..(p.attrib_range.end + vertex_shift)
            } else {
                p.attrib_range
            };
            let index_range = if p.closing {
                p.index_range
            } else {
                (p.index_range.start + index_shift)..(p.index_range.end + index_shift)
            };
            self.insert(p.point_set, p.contour, p.join, attrib_range, index_range);
        }
    }

    fn insert(
        &mut self,
        point_set: PointSet,
        contour: usize,
        join: usize,
        attrib_range: Range<usize>,
        index_range: Range<usize>,
    ) {
        debug_assert!(point_set.is_join_kind());
        self.entries
            .insert((point_set, contour, join), (attrib_range, index_range));
    }

    /// Empty ranges if `point_set` is not a join kind or no such join exists.
    pub fn points_range(&self, point_set: PointSet, contour: usize, join: usize) -> Range<usize> {
        self.entries
            .get(&(point_set, contour, join))
            .map(|(attrib, _)| attrib.clone())
            .unwrap_or(0..0)
    }

    pub fn indices_range(&self, point_set: PointSet, contour: usize, join: usize) -> Range<usize> {
        self.entries
            .get(&(point_set, contour, join))
            .map(|(_, index)| index.clone())
            .unwrap_or(0..0)
    }
}
