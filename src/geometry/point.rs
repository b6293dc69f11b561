use {
  crate::error::{Error, Result},
  itertools::Itertools,
  num_traits::{Float, Num, ToPrimitive},
  std::{
    fmt::{self, Debug, Display, Formatter},
    ops::{Index, IndexMut},
    str::FromStr
  }
};

/// Right-hand side of an elementwise operation.
#[derive(Debug, Copy, Clone)]
pub enum Operand<'a, T> {
  /// Applied uniformly to every component.
  Scalar(T),
  /// Combined component-wise. Components missing on either side act as the identity
  /// element of the operation.
  Point(&'a [T])
}

impl <'a, T> From<T> for Operand<'a, T> {
  fn from(scalar: T) -> Self { Operand::Scalar(scalar) } }

impl <'a, T> From<&'a [T]> for Operand<'a, T> {
  fn from(components: &'a [T]) -> Self { Operand::Point(components) } }

impl <'a, T> From<&'a PointND<T>> for Operand<'a, T> {
  fn from(point: &'a PointND<T>) -> Self { Operand::Point(&point.data) } }

/// A point with any number of dimensions.
///
/// The number of components is fixed at construction; components can be changed in place
/// through [`set`](PointND::set) or indexing. Arithmetic returns a new point and never
/// touches its operands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PointND<T> {
  data: Vec<T>
}

impl <T> PointND<T> {
  pub fn new(data: impl Into<Vec<T>>) -> Self {
    Self { data: data.into() }
  }

  pub fn len(&self) -> usize {
    self.data.len()
  }

  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  pub fn as_slice(&self) -> &[T] {
    &self.data
  }

  /// Components in index order. The iterator borrows the point, so it can be restarted
  /// any number of times.
  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.data.iter()
  }

  pub fn into_inner(self) -> Vec<T> {
    self.data
  }

  fn check_index(&self, index: usize) -> Result<()> {
    match index < self.len() {
      true => Ok(()),
      false => Err(Error::IndexOutOfRange { index, len: self.len() })
    }
  }

  fn check_dimensionality(&self, other: &Self) -> Result<()> {
    match self.len() == other.len() {
      true => Ok(()),
      false => Err(Error::dimensionality(self.len(), other.len()))
    }
  }
}

impl <T: Copy> PointND<T> {
  pub fn from_slice(components: &[T]) -> Self {
    Self { data: components.to_vec() }
  }

  pub fn get(&self, index: usize) -> Result<T> {
    self.check_index(index)?;
    Ok(self.data[index])
  }

  /// Overwrite a single component, returning `self` for chaining.
  pub fn set(&mut self, index: usize, value: T) -> Result<&mut Self> {
    self.check_index(index)?;
    self.data[index] = value;
    Ok(self)
  }

  /// Combine every component with `rhs` through `f`.
  ///
  /// A scalar is applied to each component. A point is combined index by index; where it is
  /// shorter than `self`, `identity` stands in for the missing components. The result always
  /// has the length of `self`.
  pub fn elementwise<'a>(
    &self,
    rhs: impl Into<Operand<'a, T>>,
    identity: T,
    f: impl Fn(T, T) -> T
  ) -> Self where T: 'a {
    let data = match rhs.into() {
      Operand::Scalar(scalar) => self.data.iter()
        .map(|&a| f(a, scalar))
        .collect(),
      Operand::Point(other) => self.data.iter()
        .enumerate()
        .map(|(i, &a)| f(a, other.get(i).copied().unwrap_or(identity)))
        .collect()
    };
    Self { data }
  }
}

impl <T: Num + Copy> PointND<T> {
  pub fn dot(&self, other: &Self) -> Result<T> {
    self.check_dimensionality(other)?;
    Ok(self.data.iter()
      .zip(other.data.iter())
      .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
  }
}

impl <T: Float> PointND<T> {
  /// Average of two points, component by component. Only defined for floating point
  /// components, integer division would truncate towards zero.
  pub fn midpoint(&self, other: &Self) -> Self {
    (self + other) / (T::one() + T::one())
  }
}

impl <T: Copy + ToPrimitive> PointND<T> {
  /// Euclidean distance. Computed in `f64` so that integer points are measured exactly.
  pub fn distance(&self, other: &Self) -> Result<f64> {
    self.check_dimensionality(other)?;
    Ok(self.data.iter()
      .zip(other.data.iter())
      .map(|(&a, &b)| to_f64(a) - to_f64(b))
      .map(|d| d * d)
      .sum::<f64>()
      .sqrt())
  }
}

/// Components that do not fit into an `f64` become `NaN`, and so does anything computed
/// from them (distances, euclid points handed to the sinks).
pub(crate) fn to_f64<T: ToPrimitive>(value: T) -> f64 {
  value.to_f64().unwrap_or(f64::NAN)
}

/// A point of one concrete kind. Operations that combine points never leave the kind.
///
/// The generators move by halving distances, so only floating point components qualify.
pub trait PointKind: Clone + Debug {
  type Scalar: Float;

  fn as_nd(&self) -> &PointND<Self::Scalar>;
  fn midpoint(&self, other: &Self) -> Self;

  fn dimension(&self) -> usize {
    self.as_nd().len()
  }
}

impl <T: Float + Debug> PointKind for PointND<T> {
  type Scalar = T;

  fn as_nd(&self) -> &PointND<T> { self }
  fn midpoint(&self, other: &Self) -> Self { PointND::midpoint(self, other) }
}

impl <T> Index<usize> for PointND<T> {
  type Output = T;

  fn index(&self, index: usize) -> &T {
    &self.data[index]
  }
}

impl <T> IndexMut<usize> for PointND<T> {
  fn index_mut(&mut self, index: usize) -> &mut T {
    &mut self.data[index]
  }
}

impl <'a, T> IntoIterator for &'a PointND<T> {
  type Item = &'a T;
  type IntoIter = std::slice::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter { self.data.iter() }
}

impl <T> IntoIterator for PointND<T> {
  type Item = T;
  type IntoIter = std::vec::IntoIter<T>;

  fn into_iter(self) -> Self::IntoIter { self.data.into_iter() }
}

impl <T> FromIterator<T> for PointND<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self { data: iter.into_iter().collect() }
  }
}

impl <T> From<Vec<T>> for PointND<T> {
  fn from(data: Vec<T>) -> Self { Self { data } } }

impl <T, const N: usize> From<[T; N]> for PointND<T> {
  fn from(data: [T; N]) -> Self { Self { data: data.into() } } }

impl <T: PartialEq> PartialEq<[T]> for PointND<T> {
  fn eq(&self, other: &[T]) -> bool { self.data == other } }

impl <T: PartialEq> PartialEq<Vec<T>> for PointND<T> {
  fn eq(&self, other: &Vec<T>) -> bool { &self.data == other } }

impl <T: PartialEq, const N: usize> PartialEq<[T; N]> for PointND<T> {
  fn eq(&self, other: &[T; N]) -> bool { self.data == other } }

impl <T: PartialEq> PartialEq<PointND<T>> for Vec<T> {
  fn eq(&self, other: &PointND<T>) -> bool { other == self } }

impl <T: PartialEq, const N: usize> PartialEq<PointND<T>> for [T; N] {
  fn eq(&self, other: &PointND<T>) -> bool { other == self } }

impl <T: PartialEq> PartialEq<PointND<T>> for [T] {
  fn eq(&self, other: &PointND<T>) -> bool { other == self } }

/// `(c0, c1, ..., cn)`
impl <T: Display> Display for PointND<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "({})", self.data.iter().join(", "))
  }
}

/// Inverse of [`Display`]. Each component is read with `T::from_str`, so an integer point
/// rejects `"1.5"` while a floating point one accepts `"3"`.
impl <T> FromStr for PointND<T>
  where T: FromStr,
        T::Err: Display {
  type Err = Error;

  fn from_str(input: &str) -> Result<Self> {
    let inner = input.trim()
      .strip_prefix('(')
      .and_then(|s| s.strip_suffix(')'))
      .ok_or_else(|| Error::parse(input, "expected a parenthesised list"))?;
    if inner.trim().is_empty() {
      return Ok(Self { data: vec![] });
    }
    inner.split(", ")
      .map(|token| token.trim()
        .parse::<T>()
        .map_err(|e| Error::parse(input, format!("{token:?}: {e}"))))
      .collect::<Result<Vec<_>>>()
      .map(Self::new)
  }
}

/// Implements `Add`, `Sub`, `Mul` and `Div` on a point kind, for scalar and same-kind
/// operands, owned and borrowed. The kind must provide `map_nd`, a length-preserving
/// transformation of the underlying [`PointND`].
macro_rules! impl_elementwise_ops {
  ($Point:ident) => {
    impl_elementwise_ops!(@op $Point, Add, add, Zero, zero, +);
    impl_elementwise_ops!(@op $Point, Sub, sub, Zero, zero, -);
    impl_elementwise_ops!(@op $Point, Mul, mul, One, one, *);
    impl_elementwise_ops!(@op $Point, Div, div, One, one, /);
  };
  (@op $Point:ident, $Trait:ident, $method:ident, $Identity:ident, $identity:ident, $op:tt) => {
    impl <T: num_traits::Num + Copy> std::ops::$Trait<T> for &$Point<T> {
      type Output = $Point<T>;
      fn $method(self, rhs: T) -> $Point<T> {
        self.map_nd(|p| p.elementwise(
          rhs,
          <T as num_traits::$Identity>::$identity(),
          |a, b| a $op b
        ))
      }
    }
    impl <T: num_traits::Num + Copy> std::ops::$Trait<&$Point<T>> for &$Point<T> {
      type Output = $Point<T>;
      fn $method(self, rhs: &$Point<T>) -> $Point<T> {
        self.map_nd(|p| p.elementwise(
          rhs.as_slice(),
          <T as num_traits::$Identity>::$identity(),
          |a, b| a $op b
        ))
      }
    }
    impl <T: num_traits::Num + Copy> std::ops::$Trait<T> for $Point<T> {
      type Output = $Point<T>;
      fn $method(self, rhs: T) -> $Point<T> { std::ops::$Trait::$method(&self, rhs) }
    }
    impl <T: num_traits::Num + Copy> std::ops::$Trait<&$Point<T>> for $Point<T> {
      type Output = $Point<T>;
      fn $method(self, rhs: &$Point<T>) -> $Point<T> { std::ops::$Trait::$method(&self, rhs) }
    }
    impl <T: num_traits::Num + Copy> std::ops::$Trait<$Point<T>> for $Point<T> {
      type Output = $Point<T>;
      fn $method(self, rhs: $Point<T>) -> $Point<T> { std::ops::$Trait::$method(&self, &rhs) }
    }
    impl <T: num_traits::Num + Copy> std::ops::$Trait<$Point<T>> for &$Point<T> {
      type Output = $Point<T>;
      fn $method(self, rhs: $Point<T>) -> $Point<T> { std::ops::$Trait::$method(self, &rhs) }
    }
  };
}

pub(crate) use impl_elementwise_ops;

impl <T> PointND<T> {
  pub(crate) fn map_nd(&self, f: impl FnOnce(&PointND<T>) -> PointND<T>) -> PointND<T> {
    f(self)
  }
}

impl_elementwise_ops!(PointND);
