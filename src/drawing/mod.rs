//! Render sinks.
//!
//! The fractal generators never touch pixels. They hand points and polygons to a backend
//! through the traits below; rasterizing, saving and assembling animations is the backend's
//! business. [`Recorder`] and [`Animation`] are in-memory backends that keep everything
//! they receive.

use {
  crate::geometry::{Point2D, Point3D, P2, P3},
  num_traits::ToPrimitive
};

mod recorder;
pub use recorder::{Animation, Marked, Recorder};

/// A flat surface that can show markers and filled polygons.
pub trait Canvas2D {
  fn marker(&mut self, at: P2, style: &MarkerStyle);
  fn fill(&mut self, polygon: &[P2]);
  fn clear(&mut self);
}

/// A 3D scatter surface.
pub trait Canvas3D {
  fn marker(&mut self, at: P3, style: &MarkerStyle);
  fn clear(&mut self);
}

/// Capture the current state of a canvas as a single frame.
pub trait Snapshot {
  type Frame;
  fn snapshot(&mut self) -> anyhow::Result<Self::Frame>;
}

/// Assembles frames into one animated artifact.
pub trait AnimationSink<Frame> {
  fn push_frame(&mut self, frame: Frame) -> anyhow::Result<()>;
  /// Finalize the animation. `optimize` asks the backend to shrink the result, e.g. by
  /// storing only the changed region of each frame.
  fn finish(&mut self, optimize: bool) -> anyhow::Result<()>;
}

/// Something that knows how to put itself on a `Backend`.
pub trait Plot<Backend: ?Sized> {
  fn plot(&self, backend: &mut Backend, style: &MarkerStyle);
}

impl <T, B> Plot<B> for Point2D<T>
  where T: ToPrimitive + Copy,
        B: Canvas2D + ?Sized {
  fn plot(&self, backend: &mut B, style: &MarkerStyle) {
    backend.marker(self.to_euclid(), style)
  }
}

impl <T, B> Plot<B> for Point3D<T>
  where T: ToPrimitive + Copy,
        B: Canvas3D + ?Sized {
  fn plot(&self, backend: &mut B, style: &MarkerStyle) {
    backend.marker(self.to_euclid(), style)
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Marker {
  Point,
  Pixel,
  Circle,
  Cross
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerStyle {
  pub shape: Marker,
  /// Marker size in backend units.
  pub size: f64,
  /// RGBA
  pub color: [u8; 4]
}

impl Default for MarkerStyle {
  fn default() -> Self {
    MarkerStyle {
      shape: Marker::Point,
      size: 1.0,
      color: [0x1F, 0x77, 0xB4, 0xFF]
    }}}
