//! The read-only, pre-tessellated path view consumed by the stroke generator.
//!
//! The curve tessellator that turns bezier/arc paths into polylines is out
//! of scope for this workspace (see the crate-level docs); this module only
//! describes the *shape* of its output and provides one concrete,
//! in-memory implementation (`FlattenedPath`) built via [`crate::builder`].

use crate::math::{Point, Vector};
use core::ops::Range;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// One point of a flattened (already-tessellated) path.
///
/// This is produced by the curve tessellator and is never mutated by the
/// stroke generator.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct InputPoint {
    /// Position of the point.
    pub position: Point,
    /// Tangent direction at the point. Used as a fallback when a sub-edge
    /// degenerates to zero length.
    pub tangent: Vector,
    /// Arc-length distance from the start of the edge this point belongs to.
    pub distance_from_edge_start: f32,
    /// Arc-length distance from the start of the contour this point belongs to.
    pub distance_from_contour_start: f32,
}

impl InputPoint {
    pub fn new(position: Point, tangent: Vector) -> Self {
        InputPoint {
            position,
            tangent,
            distance_from_edge_start: 0.0,
            distance_from_contour_start: 0.0,
        }
    }
}

/// Parameters that control how the (out of scope) curve tessellator
/// flattened the path. The stroke generator only reads `curve_tessellation`,
/// which sizes the adaptive arcs of rounded joins and rounded caps.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct TessellationParameters {
    /// Angular step, in radians, used to size adaptively-tessellated arcs.
    pub curve_tessellation: f32,
}

impl TessellationParameters {
    pub const DEFAULT_CURVE_TESSELLATION: f32 = 0.2;

    pub const DEFAULT: Self = TessellationParameters {
        curve_tessellation: Self::DEFAULT_CURVE_TESSELLATION,
    };
}

impl Default for TessellationParameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The read-only interface the stroke generator consumes.
///
/// A contour is a sequence of edges; the *last* edge of every contour is a
/// synthetic closing edge connecting the last tessellated point back to the
/// first. It always exists in the data, regardless of whether a caller later
/// chooses to stroke the contour open or closed — that choice is made by
/// picking `including_closing_edge` on the generator's output accessors, not
/// here.
pub trait TessellatedPath {
    /// Number of contours in the path.
    fn number_contours(&self) -> usize;

    /// Number of edges of a contour, including its closing edge.
    fn number_edges(&self, contour: usize) -> usize;

    /// `[begin, end)` range into [`TessellatedPath::point_data`] covering the
    /// sub-edge points of one edge. An edge with `R` points has `R - 1`
    /// sub-edges.
    fn edge_range(&self, contour: usize, edge: usize) -> Range<usize>;

    /// Flat array backing every contour's point data.
    fn point_data(&self) -> &[InputPoint];

    /// Points of a contour, excluding those that only exist for the closing
    /// edge. Used to locate the two endpoints caps are anchored to.
    fn unclosed_contour_point_data(&self, contour: usize) -> &[InputPoint];

    /// A contour is degenerate if it has no real (non-closing) edges, i.e.
    /// it consists of a single point.
    fn contour_is_degenerate(&self, contour: usize) -> bool;

    /// Parameters forwarded from the curve tessellator.
    fn tessellation_parameters(&self) -> TessellationParameters;
}

/// One contour's worth of bookkeeping for [`FlattenedPath`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub(crate) struct ContourData {
    pub edge_ranges: Vec<Range<usize>>,
    pub degenerate: bool,
}

/// A concrete, in-memory [`TessellatedPath`], assembled with
/// [`crate::builder::PathBuilder`].
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct FlattenedPath {
    pub(crate) points: Vec<InputPoint>,
    pub(crate) contours: Vec<ContourData>,
    pub(crate) tessellation_parameters: TessellationParameters,
}

impl FlattenedPath {
    pub fn builder() -> crate::builder::PathBuilder {
        crate::builder::PathBuilder::new()
    }
}

impl TessellatedPath for FlattenedPath {
    fn number_contours(&self) -> usize {
        self.contours.len()
    }

    fn number_edges(&self, contour: usize) -> usize {
        self.contours[contour].edge_ranges.len()
    }

    fn edge_range(&self, contour: usize, edge: usize) -> Range<usize> {
        self.contours[contour].edge_ranges[edge].clone()
    }

    fn point_data(&self) -> &[InputPoint] {
        &self.points
    }

    fn unclosed_contour_point_data(&self, contour: usize) -> &[InputPoint] {
        let c = &self.contours[contour];
        let begin = c.edge_ranges.first().unwrap().start;
        // The closing edge's range ends one point past the real contour
        // points (it wraps back to `begin`); the unclosed view stops at the
        // end of the last real edge.
        let end = if c.edge_ranges.len() >= 2 {
            c.edge_ranges[c.edge_ranges.len() - 2].end
        } else {
            c.edge_ranges[c.edge_ranges.len() - 1].end
        };
        &self.points[begin..end]
    }

    fn contour_is_degenerate(&self, contour: usize) -> bool {
        self.contours[contour].degenerate
    }

    fn tessellation_parameters(&self) -> TessellationParameters {
        self.tessellation_parameters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point;

    #[test]
    fn square_has_four_edges_and_a_closing_edge() {
        let mut b = FlattenedPath::builder();
        b.begin(point(0.0, 0.0));
        b.corner_to(point(1.0, 0.0));
        b.corner_to(point(1.0, 1.0));
        b.corner_to(point(0.0, 1.0));
        let path = b.close();

        assert_eq!(path.number_contours(), 1);
        // 4 real edges + 1 synthetic closing edge.
        assert_eq!(path.number_edges(0), 5);
        assert!(!path.contour_is_degenerate(0));
    }

    #[test]
    fn single_point_contour_is_degenerate() {
        let mut b = FlattenedPath::builder();
        b.begin(point(3.0, 4.0));
        let path = b.close();

        assert_eq!(path.number_contours(), 1);
        assert!(path.contour_is_degenerate(0));
    }
}
