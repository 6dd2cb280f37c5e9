use std::fmt;
use std::ops::*;

/// A planar angle.
///
/// The value is stored in radians and never wrapped implicitly: `degrees(370.)` and
/// `degrees(10.)` are different angles until one of them is passed through
/// [`Angle::wrap_unsigned`]. Construct it with [`degrees`] or [`radians`] so the unit is visible at
/// the call site.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct Angle {
  radians: f64,
}

#[cfg(feature = "bytemuck")]
unsafe impl bytemuck::Zeroable for Angle {}
#[cfg(feature = "bytemuck")]
unsafe impl bytemuck::Pod for Angle {}

pub fn degrees(value: f64) -> Angle {
  Angle::from_degrees(value)
}

pub fn radians(value: f64) -> Angle {
  Angle::from_radians(value)
}

impl Angle {
  #[inline]
  pub fn from_degrees(value: f64) -> Self {
    Self::from_radians(value.to_radians())
  }

  #[inline]
  pub const fn from_radians(value: f64) -> Self {
    Self { radians: value }
  }

  #[inline]
  pub fn to_degrees(self) -> f64 {
    self.radians.to_degrees()
  }

  #[inline]
  pub const fn to_radians(self) -> f64 {
    self.radians
  }

  /// 180°, derived through the degree factory so that `degrees(180.)` wraps onto exactly
  /// `degrees(-180.)`.
  #[inline]
  fn half_turn() -> f64 {
    Self::from_degrees(180.).radians
  }

  #[inline]
  fn full_turn() -> f64 {
    Self::half_turn() * 2.
  }

  /// The same direction in [-180°, 180°).
  #[must_use]
  pub fn wrap_signed(self) -> Self {
    let half = Self::half_turn();
    Self::from_radians(reduce_into_turn(self.radians - half, Self::full_turn()) - half)
  }

  /// The same direction in [0°, 360°).
  #[must_use]
  pub fn wrap_unsigned(self) -> Self {
    Self::from_radians(reduce_into_turn(self.radians, Self::full_turn()))
  }
}

/// Reduce into [0, turn) with a ceil based remainder.
///
/// `value - ceil(value / turn) * turn` lands in (-turn, 0], negative results are shifted up by one
/// turn. When the shift rounds up to exactly one turn the result collapses to zero so the range
/// stays half open.
fn reduce_into_turn(value: f64, turn: f64) -> f64 {
  let ret = value - (value / turn).ceil() * turn;
  if ret >= 0. {
    return ret;
  }
  let ret = ret + turn;
  if ret >= turn {
    0.
  } else {
    ret
  }
}

impl fmt::Display for Angle {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match f.precision() {
      Some(p) => write!(f, "{:.*}°", p, self.to_degrees()),
      None => write!(f, "{}°", self.to_degrees()),
    }
  }
}

impl Neg for Angle {
  type Output = Self;
  #[inline]
  fn neg(self) -> Self {
    Self::from_radians(-self.radians)
  }
}

macro_rules! impl_angle_binary_op {
  ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt) => {
    impl $Op for Angle {
      type Output = Self;
      #[inline]
      fn $op(self, rhs: Self) -> Self {
        Self::from_radians(self.radians $sym rhs.radians)
      }
    }

    impl $OpAssign for Angle {
      #[inline]
      fn $op_assign(&mut self, rhs: Self) {
        *self = *self $sym rhs;
      }
    }
  };
}

impl_angle_binary_op!(Add, add, AddAssign, add_assign, +);
impl_angle_binary_op!(Sub, sub, SubAssign, sub_assign, -);
// plain numeric product/quotient of the radian values, not a composition of rotations
impl_angle_binary_op!(Mul, mul, MulAssign, mul_assign, *);
impl_angle_binary_op!(Div, div, DivAssign, div_assign, /);

/// Reduces the left operand into [0°, 360°). The right operand is not used.
impl Rem for Angle {
  type Output = Self;
  #[inline]
  fn rem(self, _rhs: Self) -> Self {
    self.wrap_unsigned()
  }
}

impl RemAssign for Angle {
  #[inline]
  fn rem_assign(&mut self, rhs: Self) {
    *self = *self % rhs;
  }
}

impl Mul<f64> for Angle {
  type Output = Self;
  #[inline]
  fn mul(self, s: f64) -> Self {
    Self::from_radians(self.radians * s)
  }
}

impl Mul<Angle> for f64 {
  type Output = Angle;
  #[inline]
  fn mul(self, a: Angle) -> Angle {
    a * self
  }
}

impl Div<f64> for Angle {
  type Output = Self;
  #[inline]
  fn div(self, s: f64) -> Self {
    Self::from_radians(self.radians / s)
  }
}

/// Unit suffixes for numeric literals: `90_i32.deg()`, `1.5_f64.rad()`.
pub trait AngleLiteral {
  fn deg(self) -> Angle;
  fn rad(self) -> Angle;
}

macro_rules! impl_angle_literal {
  ($($t:ty),+) => {
    $(
      impl AngleLiteral for $t {
        #[inline]
        fn deg(self) -> Angle {
          degrees(self as f64)
        }
        #[inline]
        fn rad(self) -> Angle {
          radians(self as f64)
        }
      }
    )+
  };
}

impl_angle_literal!(f32, f64, i32, i64, u32, u64);
