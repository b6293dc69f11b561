use {
  super::{AnimationSink, Canvas2D, Canvas3D, MarkerStyle, Snapshot},
  crate::geometry::{P2, P3},
  anyhow::bail
};

/// A marker as it was received by a [`Recorder`].
#[derive(Debug, Clone, PartialEq)]
pub struct Marked {
  /// Two or three coordinates, depending on the canvas it was drawn on.
  pub at: Vec<f64>,
  pub style: MarkerStyle
}

/// Canvas that remembers what was drawn on it since the last clear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recorder {
  pub markers: Vec<Marked>,
  pub polygons: Vec<Vec<P2>>,
  /// How many times the canvas was cleared.
  pub clears: usize
}

impl Recorder {
  pub fn new() -> Self {
    Self::default()
  }

  fn reset(&mut self) {
    self.markers.clear();
    self.polygons.clear();
    self.clears += 1;
  }
}

impl Canvas2D for Recorder {
  fn marker(&mut self, at: P2, style: &MarkerStyle) {
    self.markers.push(Marked { at: vec![at.x, at.y], style: *style });
  }

  fn fill(&mut self, polygon: &[P2]) {
    self.polygons.push(polygon.to_vec());
  }

  fn clear(&mut self) {
    self.reset()
  }
}

impl Canvas3D for Recorder {
  fn marker(&mut self, at: P3, style: &MarkerStyle) {
    self.markers.push(Marked { at: vec![at.x, at.y, at.z], style: *style });
  }

  fn clear(&mut self) {
    self.reset()
  }
}

/// Each frame is a copy of the canvas at the time of the snapshot.
impl Snapshot for Recorder {
  type Frame = Recorder;

  fn snapshot(&mut self) -> anyhow::Result<Recorder> {
    Ok(self.clone())
  }
}

/// Collects frames; refuses new ones once finished.
#[derive(Debug, Clone)]
pub struct Animation<Frame> {
  pub frames: Vec<Frame>,
  /// `Some(optimize)` after [`finish`](AnimationSink::finish).
  pub finished: Option<bool>
}

impl <F> Default for Animation<F> {
  fn default() -> Self {
    Self { frames: vec![], finished: None }
  }
}

impl <F> Animation<F> {
  pub fn new() -> Self {
    Self::default()
  }
}

impl <F> AnimationSink<F> for Animation<F> {
  fn push_frame(&mut self, frame: F) -> anyhow::Result<()> {
    if self.finished.is_some() {
      bail!("animation is already finished");
    }
    self.frames.push(frame);
    Ok(())
  }

  fn finish(&mut self, optimize: bool) -> anyhow::Result<()> {
    if self.finished.is_some() {
      bail!("animation is already finished");
    }
    self.finished = Some(optimize);
    Ok(())
  }
}
