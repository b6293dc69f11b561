//! The chaos game: start between two random vertices, then keep jumping halfway towards a
//! randomly chosen vertex. The visited points settle on the Sierpinski attractor of the
//! vertex set.

use {
  crate::{
    drawing::{AnimationSink, Canvas2D, Canvas3D, MarkerStyle, Plot, Snapshot},
    error::Result,
    geometry::{validate_vertices, Point2D, Point3D, PointKind}
  },
  rand::Rng,
  rand_pcg::Pcg64
};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChaosGameConfig {
  pub iterations: usize,
  pub marker: MarkerStyle
}

impl Default for ChaosGameConfig {
  fn default() -> Self {
    ChaosGameConfig {
      iterations: 1000,
      marker: MarkerStyle::default()
    }}}

/// Output mode of [`sierpinski_chaos_2d_animated`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AnimationConfig {
  /// Upper bound on the number of iterations, one frame is captured per iteration.
  pub max_frames: usize,
  pub optimize: bool
}

impl Default for AnimationConfig {
  fn default() -> Self {
    AnimationConfig {
      max_frames: 100,
      optimize: true
    }}}

/// A validated vertex set: non-empty, every vertex of the same dimensionality.
#[derive(Debug, Clone)]
pub struct ChaosGame<P> {
  vertices: Vec<P>
}

impl <P: PointKind> ChaosGame<P> {
  pub fn new(vertices: impl Into<Vec<P>>) -> Result<Self> {
    let vertices = vertices.into();
    let dimension = validate_vertices(&vertices)?;
    tracing::debug!(vertices = vertices.len(), dimension, "chaos game vertex set");
    Ok(Self { vertices })
  }

  pub fn vertices(&self) -> &[P] {
    &self.vertices
  }

  fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &P {
    &self.vertices[rng.gen_range(0..self.vertices.len())]
  }

  /// Infinite stream of chaos game points. The seed is drawn from `rng` right away, see
  /// [`ChaosGameIter::seed`].
  pub fn iter<R: Rng>(&self, mut rng: R) -> ChaosGameIter<'_, P, R> {
    let a = self.pick(&mut rng);
    let b = self.pick(&mut rng);
    let seed = a.midpoint(b);
    ChaosGameIter {
      game: self,
      current: seed.clone(),
      seed,
      rng
    }
  }

  /// Same as [`iter`](ChaosGame::iter), with a reproducible generator.
  pub fn iter_seeded(&self, seed: u64) -> ChaosGameIter<'_, P, Pcg64> {
    use rand::SeedableRng;
    self.iter(Pcg64::seed_from_u64(seed))
  }
}

pub struct ChaosGameIter<'a, P, R> {
  game: &'a ChaosGame<P>,
  seed: P,
  current: P,
  rng: R
}

impl <'a, P, R> ChaosGameIter<'a, P, R> {
  /// Midpoint of the two vertices the game started from. It is never yielded.
  pub fn seed(&self) -> &P {
    &self.seed
  }

  /// The last yielded point, or the seed before the first step.
  pub fn current(&self) -> &P {
    &self.current
  }
}

impl <'a, P: PointKind, R: Rng> Iterator for ChaosGameIter<'a, P, R> {
  type Item = P;

  fn next(&mut self) -> Option<P> {
    let vertex = self.game.pick(&mut self.rng);
    self.current = vertex.midpoint(&self.current);
    Some(self.current.clone())
  }
}

fn plot_chaos_game<P, B, R>(
  vertices: &[P],
  config: &ChaosGameConfig,
  rng: R,
  canvas: &mut B
) -> Result<usize>
  where P: PointKind + Plot<B>,
        B: ?Sized,
        R: Rng {
  let game = ChaosGame::new(vertices)?;
  tracing::debug!(iterations = config.iterations, "running chaos game");
  let mut plotted = 0;
  for point in game.iter(rng).take(config.iterations) {
    tracing::trace!(?point, "chaos game step");
    point.plot(canvas, &config.marker);
    plotted += 1;
  }
  Ok(plotted)
}

/// Plot `config.iterations` chaos game points of a triangle. Returns the number of points
/// plotted.
pub fn sierpinski_chaos_2d<B, R>(
  vertices: &[Point2D<f64>; 3],
  config: &ChaosGameConfig,
  rng: R,
  canvas: &mut B
) -> Result<usize>
  where B: Canvas2D + ?Sized,
        R: Rng {
  plot_chaos_game(vertices, config, rng, canvas)
}

/// Plot chaos game points of a tetrahedron.
pub fn sierpinski_chaos_3d<B, R>(
  vertices: &[Point3D<f64>; 4],
  config: &ChaosGameConfig,
  rng: R,
  canvas: &mut B
) -> Result<usize>
  where B: Canvas3D + ?Sized,
        R: Rng {
  plot_chaos_game(vertices, config, rng, canvas)
}

/// Like [`sierpinski_chaos_2d`], recording an animation: the canvas is captured after every
/// plotted point and the frame is handed to `animation`, which is finished once the loop
/// ends. The iteration count is capped at `animation_config.max_frames`.
pub fn sierpinski_chaos_2d_animated<B, A, R>(
  vertices: &[Point2D<f64>; 3],
  config: &ChaosGameConfig,
  animation_config: &AnimationConfig,
  rng: R,
  canvas: &mut B,
  animation: &mut A
) -> Result<usize>
  where B: Canvas2D + Snapshot + ?Sized,
        A: AnimationSink<B::Frame> + ?Sized,
        R: Rng {
  let iterations = config.iterations.min(animation_config.max_frames);
  if iterations < config.iterations {
    tracing::debug!(requested = config.iterations, iterations, "iterations capped by frame limit");
  }
  let game = ChaosGame::new(&vertices[..])?;
  for (i, point) in game.iter(rng).take(iterations).enumerate() {
    point.plot(canvas, &config.marker);
    animation.push_frame(canvas.snapshot()?)?;
    tracing::trace!(iteration = i, "captured frame");
  }
  animation.finish(animation_config.optimize)?;
  Ok(iterations)
}
