//! Deterministic Sierpinski triangle: split a triangle into its three corner triangles
//! and recurse, discarding the middle one.

use {
  crate::{
    drawing::Canvas2D,
    geometry::{Point2D, PointKind}
  },
  num_traits::Float,
  std::fmt::Debug
};

/// Visit the leaf triangles of a subdivision `depth` levels deep, depth first.
///
/// Depth 0 visits `vertices` itself; every further level triples the number of leaves.
/// Children of `[v1, v2, v3]` are visited in the order
/// `[v1, m12, m13]`, `[m12, v2, m23]`, `[m13, m23, v3]`.
pub fn subdivide<P, F>(vertices: &[P; 3], depth: u32, visit: &mut F)
  where P: PointKind,
        F: FnMut(&[P; 3]) {
  if depth == 0 {
    visit(vertices);
    return;
  }
  let [v1, v2, v3] = vertices;
  let m12 = v1.midpoint(v2);
  let m13 = v1.midpoint(v3);
  let m23 = v2.midpoint(v3);
  subdivide(&[v1.clone(), m12.clone(), m13.clone()], depth - 1, visit);
  subdivide(&[m12, v2.clone(), m23.clone()], depth - 1, visit);
  subdivide(&[m13, m23, v3.clone()], depth - 1, visit);
}

/// All leaf triangles of [`subdivide`], in visiting order.
pub fn sierpinski_triangles<P: PointKind>(vertices: &[P; 3], depth: u32) -> Vec<[P; 3]> {
  let mut triangles = Vec::with_capacity(3usize.saturating_pow(depth).min(1 << 16));
  subdivide(vertices, depth, &mut |t: &[P; 3]| triangles.push(t.clone()));
  triangles
}

/// Fill every leaf triangle on `canvas`. Returns the number of filled triangles.
pub fn fill_sierpinski<T, B>(canvas: &mut B, vertices: &[Point2D<T>; 3], depth: u32) -> usize
  where T: Float + Debug,
        B: Canvas2D + ?Sized {
  tracing::debug!(depth, "filling sierpinski triangle");
  let mut filled = 0;
  subdivide(vertices, depth, &mut |[a, b, c]: &[Point2D<T>; 3]| {
    canvas.fill(&[a.to_euclid(), b.to_euclid(), c.to_euclid()]);
    filled += 1;
  });
  filled
}
