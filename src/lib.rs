//! N-dimensional points, and Sierpinski fractals built from them.
//!
//! The crate is split into three modules: [`geometry`] for the point types and the vertex
//! sets, [`solver`] for the two fractal generators, and [`drawing`] for the narrow interface
//! through which generated points reach a renderer. Rendering itself is left to the caller.
//!
//! # Points
//! ```
//! # use sierpinski::{error::Result, geometry::{PointND, Point2D}};
//! # fn main() -> Result<()> {
//! let p = PointND::new(vec![3, 4, 5]);
//! assert_eq!(p.to_string(), "(3, 4, 5)");
//! assert_eq!("(3, 4, 5)".parse::<PointND<i32>>()?, p);
//!
//! assert_eq!(PointND::new(vec![1, 2]).dot(&PointND::new(vec![3, 4]))?, 11);
//! assert_eq!(PointND::new(vec![0, 0]).distance(&PointND::new(vec![3, 4]))?, 5.0);
//!
//! // fixed-arity kinds keep their kind under arithmetic
//! let a = Point2D::new(1.0, 2.0);
//! let b: Point2D<f64> = &a * 2.0 + &a;
//! assert_eq!((b.x(), b.y()), (3.0, 6.0));
//! # Ok(())
//! # }
//! ```
//!
//! # Chaos game
//! ```
//! # use {
//! #   sierpinski::{
//! #     drawing::Recorder,
//! #     error::Result,
//! #     geometry::triangle_2d,
//! #     solver::{ChaosGameConfig, sierpinski_chaos_2d}
//! #   },
//! #   rand::SeedableRng
//! # };
//! # fn main() -> Result<()> {
//! // Any `Canvas2D` works here. `Recorder` just keeps what it was given.
//! let mut canvas = Recorder::new();
//! let rng = rand_pcg::Pcg64::seed_from_u64(0);
//! let config = ChaosGameConfig { iterations: 1000, ..Default::default() };
//! sierpinski_chaos_2d(&triangle_2d(2.0), &config, rng, &mut canvas)?;
//! assert_eq!(canvas.markers.len(), 1000);
//! # Ok(())
//! # }
//! ```
//! The generator is also available as a plain iterator:
//! ```
//! # use sierpinski::{error::Result, geometry::tetrahedron_3d, solver::ChaosGame};
//! # fn main() -> Result<()> {
//! let game = ChaosGame::new(tetrahedron_3d(3.0))?;
//! let points: Vec<_> = game.iter_seeded(0).take(200).collect();
//! assert_eq!(points.len(), 200);
//! # Ok(())
//! # }
//! ```
//!
//! # Recursive subdivision
//! ```
//! # use sierpinski::{drawing::Recorder, geometry::triangle_2d, solver::fill_sierpinski};
//! let mut canvas = Recorder::new();
//! assert_eq!(fill_sierpinski(&mut canvas, &triangle_2d(2.0), 4), 81);
//! ```

pub mod error;
pub mod geometry;
pub mod solver;
pub mod drawing;
