#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![no_std]

//! Read-only, pre-tessellated path data.
//!
//! This crate plays the role that `lyon_path` plays for `lyon_tessellation`:
//! an independent, upstream data model that the stroke generator
//! (`stroked_path_tessellation`) only ever reads from. Unlike `lyon_path`
//! it has no notion of bezier curves or arcs — the curve tessellator that
//! would produce those is out of scope here, so the only shape this crate
//! describes is a sequence of contours of already-flattened polyline edges.
//!
//! # Example
//!
//! ```
//! use stroked_input_path::FlattenedPath;
//! use stroked_input_path::math::point;
//!
//! let mut builder = FlattenedPath::builder();
//! builder.begin(point(0.0, 0.0));
//! builder.corner_to(point(10.0, 0.0));
//! builder.corner_to(point(10.0, 10.0));
//! let path = builder.close();
//! ```

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(feature = "serialization")]
#[macro_use]
extern crate serde;

pub mod builder;
pub mod math;
mod path;

pub use crate::path::{FlattenedPath, InputPoint, TessellatedPath, TessellationParameters};
