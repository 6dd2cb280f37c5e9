use std::cmp::Ordering;
use std::fmt::{self, Debug};

use num_traits::AsPrimitive;

use crate::*;

/// A 2D vector over any [`Scalar`] element type.
///
/// Angle and length are derived from `x`/`y` on demand, nothing polar is stored. Every method is
/// pure and returns a new vector, except the explicitly named mutators [`Vector2::set_angle`] and
/// [`Vector2::set_length`].
///
/// `PartialOrd` compares lengths but leaves different vectors of equal length unordered, so
/// `vec2(3, 4) <= vec2(4, 3)` is false. Use [`Vector2::cmp_length`] for the plain length ordering.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct Vector2<T> {
  pub x: T,
  pub y: T,
}

pub fn vec2<T>(x: T, y: T) -> Vector2<T> {
  Vector2::new(x, y)
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vector2<T> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vector2<T> {}

impl_pair_conversions!(Vector2<T> { x, y });

impl<T> Vector2<T> {
  #[inline(always)]
  pub const fn new(x: T, y: T) -> Self {
    Self { x, y }
  }
}

impl<T: Copy> Vector2<T> {
  #[inline(always)]
  pub const fn splat(v: T) -> Self {
    Self { x: v, y: v }
  }

  #[inline]
  #[must_use]
  pub fn swap(&self) -> Self {
    Self::new(self.y, self.x)
  }

  #[inline]
  pub fn map<U>(self, f: impl Fn(T) -> U) -> Vector2<U> {
    Vector2::new(f(self.x), f(self.y))
  }

  /// Element wise `as` cast, narrowing or widening.
  #[inline]
  pub fn cast<U>(self) -> Vector2<U>
  where
    T: AsPrimitive<U>,
    U: Copy + 'static,
  {
    self.map(|v| v.as_())
  }
}

impl<T: Scalar> Vector2<T> {
  #[inline]
  pub fn zero() -> Self {
    Self::splat(T::zero())
  }

  #[inline]
  pub fn unit_x() -> Self {
    Self::new(T::one(), T::zero())
  }

  #[inline]
  pub fn unit_y() -> Self {
    Self::new(T::zero(), T::one())
  }

  pub fn from_polar(length: T, angle: Angle) -> Self {
    Self::from_real(polar_to_real(length.to_real(), angle))
  }

  #[inline]
  pub(crate) fn real(self) -> Vector2<f64> {
    self.map(Scalar::to_real)
  }

  #[inline]
  pub(crate) fn from_real(v: Vector2<f64>) -> Self {
    v.map(T::from_real)
  }

  /// Direction of the vector, `atan2(y, x)`. The zero vector reports `atan2(0, 0)`, which is 0.
  #[inline]
  pub fn angle(&self) -> Angle {
    radians(self.y.to_real().atan2(self.x.to_real()))
  }

  #[inline]
  pub fn length(&self) -> T {
    T::from_real(self.real_length())
  }

  /// Squared length computed in `T`, so it follows the integer overflow rules of `T`
  /// (`vec2(50_000_i32, 50_000).length2()` overflows). [`Vector2::length`] and
  /// [`Vector2::cmp_length`] go through `f64` and do not.
  #[inline]
  pub fn length2(&self) -> T {
    self.x * self.x + self.y * self.y
  }

  pub fn distance(&self, other: Self) -> T {
    let (a, b) = (self.real(), other.real());
    T::from_real((a.x - b.x).hypot(a.y - b.y))
  }

  #[inline]
  fn real_length(&self) -> f64 {
    let v = self.real();
    (v.x * v.x + v.y * v.y).sqrt()
  }

  /// Point the vector along `angle`, keeping its length.
  pub fn set_angle(&mut self, angle: Angle) {
    let length = self.real_length();
    *self = Self::from_real(polar_to_real(length, angle));
  }

  /// Scale the vector to `length`, keeping its direction.
  pub fn set_length(&mut self, length: T) {
    let angle = self.angle();
    *self = Self::from_real(polar_to_real(length.to_real(), angle));
  }

  #[must_use]
  pub fn with_angle(&self, angle: Angle) -> Self {
    let mut v = *self;
    v.set_angle(angle);
    v
  }

  #[must_use]
  pub fn with_length(&self, length: T) -> Self {
    let mut v = *self;
    v.set_length(length);
    v
  }

  /// Counter clockwise rotation around the origin.
  #[must_use]
  pub fn rotate(&self, angle: Angle) -> Self {
    let v = self.real();
    let (s, c) = angle.to_radians().sin_cos();
    Self::from_real(Vector2::new(v.x * c - v.y * s, v.x * s + v.y * c))
  }

  #[inline]
  #[must_use]
  pub fn translate(&self, offset: Self) -> Self {
    Self::new(self.x + offset.x, self.y + offset.y)
  }

  #[inline]
  #[must_use]
  pub fn scale(&self, factor: T) -> Self {
    Self::new(self.x * factor, self.y * factor)
  }

  /// The vector with the same direction and length one.
  pub fn unit(&self) -> Result<Self, GeometryError> {
    let length = self.real_length();
    if length == 0. {
      log::debug!("unit vector of zero length vector {:?} requested", self);
      return Err(GeometryError::ZeroLength { operation: "unit" });
    }
    let v = self.real();
    Ok(Self::from_real(Vector2::new(v.x / length, v.y / length)))
  }

  /// Order by length only, ignoring direction.
  pub fn cmp_length(&self, other: &Self) -> Option<Ordering> {
    let (a, b) = (self.real(), other.real());
    (a.x * a.x + a.y * a.y).partial_cmp(&(b.x * b.x + b.y * b.y))
  }
}

fn polar_to_real(length: f64, angle: Angle) -> Vector2<f64> {
  let (s, c) = angle.to_radians().sin_cos();
  Vector2::new(length * c, length * s)
}

/// Vectors are ordered by length.
///
/// Two different vectors of the same length are unordered rather than equal, so `<=` and `>=`
/// only hold for them when the components match.
impl<T: Scalar> PartialOrd for Vector2<T> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    if self == other {
      return Some(Ordering::Equal);
    }
    match self.cmp_length(other) {
      Some(Ordering::Equal) | None => None,
      ordering => ordering,
    }
  }
}

impl<T> fmt::Display for Vector2<T>
where
  T: Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "({:?}, {:?})", self.x, self.y)
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;

  use super::*;

  #[test]
  fn construction() {
    assert_eq!(Vector2::<f64>::default(), vec2(0., 0.));
    assert_eq!(Vector2::<i32>::default(), vec2(0, 0));
    assert_eq!(Vector2::splat(5_i32), vec2(5, 5));
    assert_eq!(Vector2::from((3_i32, 4_i32)), vec2(3, 4));
    assert_eq!(Vector2::from([3.0_f32, 4.0]), vec2(3., 4.));
    let (x, y): (i32, i32) = vec2(3, 4).into();
    assert_eq!((x, y), (3, 4));
    let arr: [u8; 2] = vec2(1_u8, 2).into();
    assert_eq!(arr, [1, 2]);
  }

  #[test]
  fn cast_between_element_types() {
    assert_eq!(vec2(3.7_f64, -1.2).cast::<i32>(), vec2(3, -1));
    assert_eq!(vec2(3_i32, 4).cast::<f32>(), vec2(3., 4.));
  }

  #[test]
  fn length_and_angle() {
    assert_eq!(vec2(3.0_f64, 4.).length(), 5.);
    assert_eq!(vec2(3_i32, 4).length(), 5);
    assert_eq!(vec2(3_i32, 4).length2(), 25);
    assert_relative_eq!(
      vec2(3_i32, 4).angle().to_degrees(),
      4.0_f64.atan2(3.).to_degrees()
    );
    assert_relative_eq!(vec2(10.0_f64, 10.).angle().to_degrees(), 45.);
    assert_relative_eq!(vec2(10_u8, 10).angle().to_degrees(), 45.);
    assert_eq!(Vector2::<f64>::zero().angle(), radians(0.));
    assert_eq!(vec2(0_i32, 0).distance(vec2(3, 4)), 5);
  }

  #[test]
  fn large_integer_vectors_measure_in_f64() {
    assert_eq!(vec2(30_000_i32, 40_000).length(), 50_000);
    assert_eq!(vec2(50_000_i32, 50_000).length(), 70_710);
    assert_eq!(vec2(50_000_i64, 50_000).length2(), 5_000_000_000);
    assert_eq!(
      vec2(50_000_i32, 50_000).cmp_length(&vec2(60_000, 0)),
      Some(Ordering::Greater)
    );
  }

  #[test]
  fn polar_mutators_keep_the_other_coordinate() {
    let mut v = vec2(3.0_f64, 4.);
    v.set_angle(degrees(90.));
    assert_relative_eq!(v.length(), 5., epsilon = 1e-12);
    assert_relative_eq!(v.x, 0., epsilon = 1e-12);
    assert_relative_eq!(v.y, 5., epsilon = 1e-12);

    let mut v = vec2(10.0_f64, 10.);
    v.set_length(2.);
    assert_relative_eq!(v.angle().to_degrees(), 45., epsilon = 1e-12);
    assert_relative_eq!(v.length(), 2., epsilon = 1e-12);

    let mut b = Vector2::<f64>::default();
    let a = vec2(2.0_f64, 4.);
    b.set_length(a.length());
    b.set_angle(a.angle());
    assert_relative_eq!(b.x, a.x, epsilon = 1e-12);
    assert_relative_eq!(b.y, a.y, epsilon = 1e-12);

    let v = vec2(3.0_f64, 4.);
    assert_relative_eq!(v.with_length(10.).length(), 10., epsilon = 1e-12);
    assert_eq!(v, vec2(3., 4.));
    assert_relative_eq!(v.with_angle(degrees(0.)).x, 5.);
    assert_relative_eq!(Vector2::from_polar(2.0_f64, degrees(90.)).y, 2.);
  }

  #[test]
  fn rotation() {
    let v = vec2(1.0_f64, 0.).rotate(degrees(90.));
    assert_relative_eq!(v.x, 0., epsilon = 1e-12);
    assert_relative_eq!(v.y, 1., epsilon = 1e-12);

    let v = vec2(1.0_f64, 0.).rotate(degrees(360.));
    assert_relative_eq!(v.x, 1., epsilon = 1e-12);
    assert_relative_eq!(v.y, 0., epsilon = 1e-12);

    let v = vec2(2.0_f64, 4.).rotate(degrees(-45.)).rotate(degrees(45.));
    assert_relative_eq!(v.x, 2., epsilon = 1e-12);
    assert_relative_eq!(v.y, 4., epsilon = 1e-12);
  }

  #[test]
  fn rotation_matches_cgmath() {
    use cgmath::{Basis2, Rad, Rotation, Rotation2};

    let angle = degrees(33.);
    let rot: Basis2<f64> = Rotation2::from_angle(Rad(angle.to_radians()));
    let expect = rot.rotate_vector(cgmath::vec2(2., -7.));
    let v = vec2(2.0_f64, -7.).rotate(angle);
    assert_relative_eq!(v.x, expect.x, epsilon = 1e-12);
    assert_relative_eq!(v.y, expect.y, epsilon = 1e-12);
  }

  #[test]
  fn pure_transforms() {
    let v = vec2(2_i32, 4);
    assert_eq!(v.translate(vec2(1, -1)), vec2(3, 3));
    assert_eq!(v.scale(3), vec2(6, 12));
    assert_eq!(v.swap(), vec2(4, 2));
    assert_eq!(v, vec2(2, 4));
  }

  #[test]
  fn unit_vector() {
    let u = vec2(3.0_f64, 4.).unit().unwrap();
    assert_relative_eq!(u.x, 0.6);
    assert_relative_eq!(u.y, 0.8);
    assert_relative_eq!(u.length(), 1.);
    assert_eq!(vec2(0_i32, 7).unit().unwrap(), vec2(0, 1));
    assert_eq!(
      Vector2::<f32>::zero().unit(),
      Err(GeometryError::ZeroLength { operation: "unit" })
    );
  }

  #[test]
  fn ordering_is_by_length() {
    assert!(vec2(1_i32, 1) < vec2(0, 2));
    assert!(vec2(-5_i32, 0) > vec2(3, 3));
    assert!(vec2(3_i32, 4) <= vec2(3, 4));
    assert_eq!(vec2(3_i32, 4).partial_cmp(&vec2(4, 3)), None);
    let same_length_le = vec2(3_i32, 4) <= vec2(4, 3);
    assert!(!same_length_le);
    assert_eq!(vec2(3_i32, 4).cmp_length(&vec2(4, 3)), Some(Ordering::Equal));
  }

  #[test]
  fn display() {
    assert_eq!(vec2(1_i32, -2).to_string(), "(1, -2)");
  }
}
