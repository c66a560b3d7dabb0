//! f32 math types used throughout the input path and the tessellator.
//!
//! These are thin aliases over `euclid`, mirroring the way `lyon_path`
//! re-exports `lyon_geom`'s math module: most crates in this workspace
//! never name `euclid` directly, they go through here.

/// Alias for `euclid::default::Point2D<f32>`.
pub type Point = euclid::default::Point2D<f32>;

/// Alias for `euclid::default::Vector2D<f32>`.
pub type Vector = euclid::default::Vector2D<f32>;

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector(x: f32, y: f32) -> Vector {
    Vector::new(x, y)
}
