//! Crate-wide error type.
//!
//! Every fallible operation of this crate returns [`Result`]. Failures coming from the
//! render sinks (which live outside of this crate) are carried as [`Error::Sink`].

use std::fmt::Display;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// Operands of different dimensionality were used together.
  #[error("dimensionality mismatch: expected {expected}, found {found}")]
  Dimensionality {
    expected: usize,
    found: usize
  },

  #[error("cannot parse point from {input:?}: {reason}")]
  Parse {
    input: String,
    reason: String
  },

  #[error("index {index} is out of range for a point of length {len}")]
  IndexOutOfRange {
    index: usize,
    len: usize
  },

  #[error("vertex set is empty")]
  EmptyVertexSet,

  /// A snapshot or animation sink failed.
  #[error(transparent)]
  Sink(#[from] anyhow::Error)
}

impl Error {
  pub(crate) fn parse(input: &str, reason: impl Display) -> Self {
    Error::Parse {
      input: input.to_string(),
      reason: reason.to_string()
    }
  }

  pub(crate) fn dimensionality(expected: usize, found: usize) -> Self {
    Error::Dimensionality { expected, found }
  }
}
