//! Two and three component points.
//!
//! Both wrap a [`PointND`] of fixed arity, add named accessors, and keep their kind under
//! arithmetic: `Point2D + Point2D` is again a `Point2D`.

use {
  super::{
    point::{impl_elementwise_ops, to_f64, PointKind, PointND},
    WorldSpace
  },
  crate::error::{Error, Result},
  num_traits::{Float, ToPrimitive},
  std::{
    fmt::{self, Debug, Display, Formatter},
    ops::{Deref, Index, IndexMut},
    str::FromStr
  }
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point2D<T>(PointND<T>);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point3D<T>(PointND<T>);

impl <T> Point2D<T> {
  pub const DIMENSION: usize = 2;

  pub fn new(x: T, y: T) -> Self {
    Self(PointND::new(vec![x, y]))
  }
}

impl <T: Copy> Point2D<T> {
  pub fn x(&self) -> T { self.0[0] }
  pub fn y(&self) -> T { self.0[1] }

  pub fn x_mut(&mut self) -> &mut T { &mut self.0[0] }
  pub fn y_mut(&mut self) -> &mut T { &mut self.0[1] }

  pub fn set_x(&mut self, x: T) -> &mut Self { self.0[0] = x; self }
  pub fn set_y(&mut self, y: T) -> &mut Self { self.0[1] = y; self }

  pub fn to_euclid(&self) -> euclid::Point2D<f64, WorldSpace> where T: ToPrimitive {
    euclid::Point2D::new(to_f64(self.x()), to_f64(self.y()))
  }
}

impl <T> Point3D<T> {
  pub const DIMENSION: usize = 3;

  pub fn new(x: T, y: T, z: T) -> Self {
    Self(PointND::new(vec![x, y, z]))
  }
}

impl <T: Copy> Point3D<T> {
  pub fn x(&self) -> T { self.0[0] }
  pub fn y(&self) -> T { self.0[1] }
  pub fn z(&self) -> T { self.0[2] }

  pub fn x_mut(&mut self) -> &mut T { &mut self.0[0] }
  pub fn y_mut(&mut self) -> &mut T { &mut self.0[1] }
  pub fn z_mut(&mut self) -> &mut T { &mut self.0[2] }

  pub fn set_x(&mut self, x: T) -> &mut Self { self.0[0] = x; self }
  pub fn set_y(&mut self, y: T) -> &mut Self { self.0[1] = y; self }
  pub fn set_z(&mut self, z: T) -> &mut Self { self.0[2] = z; self }

  pub fn to_euclid(&self) -> euclid::Point3D<f64, WorldSpace> where T: ToPrimitive {
    euclid::Point3D::new(to_f64(self.x()), to_f64(self.y()), to_f64(self.z()))
  }
}

impl <T: Copy, U> From<euclid::Point2D<T, U>> for Point2D<T> {
  fn from(p: euclid::Point2D<T, U>) -> Self { Self::new(p.x, p.y) } }

impl <T: Copy, U> From<euclid::Point3D<T, U>> for Point3D<T> {
  fn from(p: euclid::Point3D<T, U>) -> Self { Self::new(p.x, p.y, p.z) } }

impl <T: Default> Default for Point2D<T> {
  fn default() -> Self { Self::new(T::default(), T::default()) } }

impl <T: Default> Default for Point3D<T> {
  fn default() -> Self { Self::new(T::default(), T::default(), T::default()) } }

/// Everything the fixed-arity kinds share.
macro_rules! specialized_point {
  ($Point:ident, $N:literal) => {
    impl <T> $Point<T> {
      pub fn into_nd(self) -> PointND<T> { self.0 }

      pub(crate) fn map_nd(&self, f: impl FnOnce(&PointND<T>) -> PointND<T>) -> Self {
        let nd = f(&self.0);
        debug_assert_eq!(nd.len(), $N);
        Self(nd)
      }
    }

    impl <T: Copy> $Point<T> {
      /// Overwrite a single component, returning `self` for chaining.
      pub fn set(&mut self, index: usize, value: T) -> Result<&mut Self> {
        self.0.set(index, value)?;
        Ok(self)
      }
    }

    impl <T: Float> $Point<T> {
      /// Average of two points, component by component.
      pub fn midpoint(&self, other: &Self) -> Self {
        self.map_nd(|p| p.midpoint(&other.0))
      }
    }

    impl <T: Float + Debug> PointKind for $Point<T> {
      type Scalar = T;

      fn as_nd(&self) -> &PointND<T> { &self.0 }
      fn midpoint(&self, other: &Self) -> Self { $Point::midpoint(self, other) }
    }

    /// Read-only view of the underlying point. Mutation goes through the wrapper so the
    /// arity cannot change.
    impl <T> Deref for $Point<T> {
      type Target = PointND<T>;
      fn deref(&self) -> &PointND<T> { &self.0 }
    }

    impl <T> Index<usize> for $Point<T> {
      type Output = T;
      fn index(&self, index: usize) -> &T { &self.0[index] }
    }

    impl <T> IndexMut<usize> for $Point<T> {
      fn index_mut(&mut self, index: usize) -> &mut T { &mut self.0[index] }
    }

    impl <T> From<$Point<T>> for PointND<T> {
      fn from(point: $Point<T>) -> Self { point.0 } }

    impl <T> From<[T; $N]> for $Point<T> {
      fn from(data: [T; $N]) -> Self { Self(PointND::from(data)) } }

    impl <T> TryFrom<PointND<T>> for $Point<T> {
      type Error = Error;
      fn try_from(point: PointND<T>) -> Result<Self> {
        match point.len() {
          $N => Ok(Self(point)),
          found => Err(Error::dimensionality($N, found))
        }
      }
    }

    impl <'a, T> From<&'a $Point<T>> for super::Operand<'a, T> {
      fn from(point: &'a $Point<T>) -> Self { super::Operand::Point(point.0.as_slice()) } }

    impl <T: PartialEq> PartialEq<PointND<T>> for $Point<T> {
      fn eq(&self, other: &PointND<T>) -> bool { &self.0 == other } }

    impl <T: PartialEq> PartialEq<$Point<T>> for PointND<T> {
      fn eq(&self, other: &$Point<T>) -> bool { self == &other.0 } }

    impl <T: PartialEq> PartialEq<[T; $N]> for $Point<T> {
      fn eq(&self, other: &[T; $N]) -> bool { &self.0 == other } }

    impl <T: PartialEq> PartialEq<$Point<T>> for [T; $N] {
      fn eq(&self, other: &$Point<T>) -> bool { other == self } }

    impl <T: PartialEq> PartialEq<[T]> for $Point<T> {
      fn eq(&self, other: &[T]) -> bool { &self.0 == other } }

    impl <T: PartialEq> PartialEq<$Point<T>> for [T] {
      fn eq(&self, other: &$Point<T>) -> bool { other == self } }

    impl <T: PartialEq> PartialEq<Vec<T>> for $Point<T> {
      fn eq(&self, other: &Vec<T>) -> bool { &self.0 == other } }

    impl <T: PartialEq> PartialEq<$Point<T>> for Vec<T> {
      fn eq(&self, other: &$Point<T>) -> bool { other == self } }

    impl <'a, T> IntoIterator for &'a $Point<T> {
      type Item = &'a T;
      type IntoIter = std::slice::Iter<'a, T>;
      fn into_iter(self) -> Self::IntoIter { self.0.iter() }
    }

    impl <T: Display> Display for $Point<T> {
      fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { Display::fmt(&self.0, f) } }

    impl <T> FromStr for $Point<T>
      where T: FromStr,
            T::Err: Display {
      type Err = Error;
      fn from_str(input: &str) -> Result<Self> {
        input.parse::<PointND<T>>()?.try_into()
      }
    }

    impl_elementwise_ops!($Point);
  };
}

specialized_point!(Point2D, 2);
specialized_point!(Point3D, 3);

/// Kinds of different arity never compare equal.
impl <T: PartialEq> PartialEq<Point3D<T>> for Point2D<T> {
  fn eq(&self, other: &Point3D<T>) -> bool { self.0 == other.0 } }

impl <T: PartialEq> PartialEq<Point2D<T>> for Point3D<T> {
  fn eq(&self, other: &Point2D<T>) -> bool { self.0 == other.0 } }
