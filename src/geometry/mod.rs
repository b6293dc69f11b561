//! .
//!
//! Points and the vertex sets the fractal generators start from. [`PointND`] carries the
//! arithmetic; [`Point2D`] and [`Point3D`] are fixed-arity kinds layered on top of it.

pub mod point;
pub mod specialized;
pub mod simplex;
#[cfg(test)] mod tests;

pub use {
  point::{Operand, PointKind, PointND},
  specialized::{Point2D, Point3D},
  simplex::{sample_triangle, tetrahedron_3d, triangle_2d, validate_vertices}
};

/// Coordinate basis handed to the render sinks.
#[derive(Debug, Copy, Clone)]
pub struct WorldSpace;

pub type P2<T = f64> = euclid::Point2D<T, WorldSpace>;
pub type P3<T = f64> = euclid::Point3D<T, WorldSpace>;
