use {
  super::{Point2D, Point3D, PointKind},
  crate::error::{Error, Result},
  rand::Rng,
  std::ops::{Add, Mul}
};

/// Equilateral triangle with one corner in the origin and one edge on the x axis.
pub fn triangle_2d(side: f64) -> [Point2D<f64>; 3] {
  let height = side * 3f64.sqrt() / 2.0;
  [
    Point2D::new(0.0, 0.0),
    Point2D::new(side, 0.0),
    Point2D::new(side / 2.0, height)
  ]
}

/// Regular tetrahedron. The base is an equilateral triangle in the `y = 0` plane starting
/// at `(side, 0, 0)`, the apex sits above its centroid.
pub fn tetrahedron_3d(side: f64) -> [Point3D<f64>; 4] {
  let base_height = side * 3f64.sqrt() / 2.0;
  let apex_height = side * 6f64.sqrt() / 3.0;
  // base centroid: the corner at z = 0 and two corners at z = base_height
  let centroid_z = 2.0 * base_height / 3.0;
  [
    Point3D::new(side, 0.0, 0.0),
    Point3D::new(side / 2.0, 0.0, base_height),
    Point3D::new(3.0 * side / 2.0, 0.0, base_height),
    Point3D::new(side, apex_height, centroid_z)
  ]
}

/// Check that a vertex set is usable by a generator: at least one vertex, all of the same
/// dimensionality. Returns that dimensionality.
pub fn validate_vertices<P: PointKind>(vertices: &[P]) -> Result<usize> {
  let dimension = vertices.first()
    .ok_or(Error::EmptyVertexSet)?
    .dimension();
  match vertices.iter().find(|v| v.dimension() != dimension) {
    Some(v) => Err(Error::dimensionality(dimension, v.dimension())),
    None => Ok(dimension)
  }
}

/// Uniformly distributed point inside the triangle `a, b, c`.
pub fn sample_triangle<P, R>(vertices: &[P; 3], rng: &mut R) -> P
  where P: Clone + Add<Output = P> + Mul<f64, Output = P>,
        R: Rng + ?Sized {
  let [a, b, c] = vertices.clone();
  let s: f64 = rng.gen();
  let t = rng.gen::<f64>().sqrt();
  a * (1.0 - t) + (b * (1.0 - s) + c * s) * t
}
