//! Fractal generators.

pub mod chaos_game;
pub mod subdivision;

pub use {
  chaos_game::{
    sierpinski_chaos_2d, sierpinski_chaos_2d_animated, sierpinski_chaos_3d,
    AnimationConfig, ChaosGame, ChaosGameConfig, ChaosGameIter
  },
  subdivision::{fill_sierpinski, sierpinski_triangles, subdivide}
};
