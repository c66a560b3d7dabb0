//! A minimal builder for assembling [`FlattenedPath`] fixtures.
//!
//! Real paths come from a curve tessellator that is out of scope for this
//! workspace. This builder exists so tests and integrators without such a
//! tessellator on hand can still construct a `TessellatedPath`. It follows
//! `lyon_path::builder`'s `begin`/`line_to`/`close` naming, minus every
//! curve command (quadratic/cubic bezier, arcs) since the input here is
//! already flattened into polylines.
//!
//! `line_to` adds a sub-edge point within the current edge (no join is
//! generated between sub-edges of the same edge, only a bevel connector).
//! `corner_to` ends the current edge and starts a new one, which is where
//! the stroke generator places a join.

use crate::math::{Point, Vector};
use crate::path::{ContourData, FlattenedPath, InputPoint, TessellationParameters};
use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

struct ContourBuilder {
    points: Vec<InputPoint>,
    edge_start_in_points: usize,
    edge_ranges: Vec<Range<usize>>,
}

/// Builds a [`FlattenedPath`] one contour at a time.
#[derive(Default)]
pub struct PathBuilder {
    points: Vec<InputPoint>,
    contours: Vec<ContourData>,
    current: Option<ContourBuilder>,
    tessellation_parameters: TessellationParameters,
}

impl PathBuilder {
    pub fn new() -> Self {
        PathBuilder::default()
    }

    pub fn with_tessellation_parameters(mut self, params: TessellationParameters) -> Self {
        self.tessellation_parameters = params;
        self
    }

    /// Starts a new contour at `at`.
    pub fn begin(&mut self, at: Point) -> &mut Self {
        debug_assert!(self.current.is_none(), "begin called without closing the previous contour");
        self.current = Some(ContourBuilder {
            points: vec![InputPoint::new(at, Vector::zero())],
            edge_start_in_points: 0,
            edge_ranges: Vec::new(),
        });
        self
    }

    /// Adds a sub-edge point, continuing the current edge.
    pub fn line_to(&mut self, to: Point) -> &mut Self {
        self.line_to_with_tangent(to, Vector::zero())
    }

    /// Adds a sub-edge point with an explicit tangent, used to exercise the
    /// zero-length-segment normal fallback (§4.1).
    pub fn line_to_with_tangent(&mut self, to: Point, tangent: Vector) -> &mut Self {
        let c = self.current.as_mut().expect("line_to called outside begin/close");
        c.points.push(InputPoint::new(to, tangent));
        self
    }

    /// Ends the current edge (recording it) and starts a new one at `to`.
    /// This is where a join will later be generated.
    pub fn corner_to(&mut self, to: Point) -> &mut Self {
        self.end_edge();
        self.line_to(to);
        self
    }

    fn end_edge(&mut self) {
        let c = self.current.as_mut().expect("end_edge called outside begin/close");
        let begin = c.edge_start_in_points;
        let end = c.points.len() - 1;
        if end > begin {
            c.edge_ranges.push(begin..end + 1);
        }
        c.edge_start_in_points = end;
    }

    /// Finishes the current contour, synthesizing its closing edge, and
    /// returns the finished builder for chaining into the next contour.
    pub fn end_contour(&mut self) -> &mut Self {
        self.end_edge();
        let mut c = self.current.take().expect("end_contour called outside begin");

        let degenerate = c.edge_ranges.is_empty();
        let first_point = c.points[0];
        let closing_edge_start = c.points.len() - 1;
        c.points.push(first_point);
        c.edge_ranges.push(closing_edge_start..c.points.len());

        compute_arc_lengths(&mut c.points, &c.edge_ranges);

        let base = self.points.len();
        self.points.append(&mut c.points);
        let edge_ranges = c
            .edge_ranges
            .into_iter()
            .map(|r| (r.start + base)..(r.end + base))
            .collect();

        self.contours.push(ContourData { edge_ranges, degenerate });
        self
    }

    /// Finishes the current contour and builds the path.
    pub fn close(&mut self) -> FlattenedPath {
        self.end_contour();
        self.build()
    }

    /// Builds the path out of every contour added so far. Any contour left
    /// open (no matching `close`/`end_contour`) is finished automatically.
    pub fn build(&mut self) -> FlattenedPath {
        if self.current.is_some() {
            self.end_contour();
        }
        FlattenedPath {
            points: core::mem::take(&mut self.points),
            contours: core::mem::take(&mut self.contours),
            tessellation_parameters: self.tessellation_parameters,
        }
    }
}

/// Fills in `distance_from_edge_start`/`distance_from_contour_start` and the
/// fallback tangent for every point of a just-finished contour.
fn compute_arc_lengths(points: &mut [InputPoint], edge_ranges: &[Range<usize>]) {
    let mut contour_distance = 0.0f32;
    for range in edge_ranges {
        let mut edge_distance = 0.0f32;
        for i in range.start..range.end {
            points[i].distance_from_edge_start = edge_distance;
            points[i].distance_from_contour_start = contour_distance;
            if i + 1 < range.end {
                let delta = points[i + 1].position - points[i].position;
                if points[i].tangent == Vector::zero() && delta.square_length() > 0.0 {
                    points[i].tangent = delta.normalize();
                }
                let len = delta.length();
                edge_distance += len;
                contour_distance += len;
            }
        }
    }
}
