#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::too_many_arguments)]
#![no_std]

//! A width-independent stroked-path tessellator.
//!
//! This crate consumes a pre-tessellated planar path — contours of
//! polyline edges with arc-length metadata, produced upstream by a curve
//! tessellator that is out of scope here — and builds, once, a collection
//! of GPU-friendly triangle meshes that together contain everything
//! needed to stroke the path at any later width, miter limit or dash
//! pattern. No vertex this crate produces depends on stroke width: the
//! consuming shader scales a per-vertex `offset_vector` by half the
//! stroke width at draw time.
//!
//! The construction pipeline (§2): [`edge_builder`] first walks every
//! sub-edge and records a per-contour table of edge normals; the join
//! builders ([`bevel_join`], [`miter_join`], [`rounded_join`],
//! [`cap_join`]) and [`cap_builder`] then consume that table to emit the
//! remaining seven meshes. [`stroked_path::StrokedPath`] runs all of this
//! in its constructor and is immutable afterward.

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(feature = "serialization")]
#[macro_use]
extern crate serde;

pub use stroked_input_path as path;
pub use crate::path::math;

mod bevel_join;
mod buffers;
mod cap_builder;
mod cap_join;
mod edge_builder;
mod join_common;
mod join_location;
mod geom;
mod miter_join;
mod painter_data;
mod point_set;
mod rounded_join;
mod stroked_path;
mod vertex;

#[cfg(test)]
mod tests;

pub use crate::buffers::PartitionedMesh;
pub use crate::painter_data::{PainterAttribute, PainterAttributeData};
pub use crate::point_set::PointSet;
pub use crate::stroked_path::StrokedPath;
pub use crate::vertex::{Origin, PointKind, Tag, Vertex};
