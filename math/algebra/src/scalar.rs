use std::fmt::Debug;

use num_traits::{AsPrimitive, Num};

/// Element type of a [`Vector2`](crate::Vector2).
///
/// Integers are allowed. Every polar quantity (angle, length, rotation) is
/// evaluated in `f64` and cast back with `as` semantics, so integer vectors
/// truncate toward zero the way a static cast does.
pub trait Scalar: Num + Copy + PartialOrd + Debug + AsPrimitive<f64> + 'static {
  fn from_real(v: f64) -> Self;

  #[inline(always)]
  fn to_real(self) -> f64 {
    self.as_()
  }
}

macro_rules! impl_scalar {
  ($($t:ty),+) => {
    $(
      impl Scalar for $t {
        #[inline(always)]
        fn from_real(v: f64) -> Self {
          v as $t
        }
      }
    )+
  };
}

impl_scalar!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

/// Numeric promotion between two element types.
///
/// Mixing element types in vector arithmetic yields the wider type, e.g.
/// `Vector2<i32> + Vector2<f32>` is a `Vector2<f32>`. The pairs follow the
/// usual arithmetic conversions of C-family languages: any float wins over any
/// integer, `f64` wins over `f32`, the larger integer wins, and on a tie the
/// unsigned one wins.
pub trait Promote<Rhs: Scalar>: Scalar {
  type Output: Scalar;

  fn promote(self) -> <Self as Promote<Rhs>>::Output;
  fn promote_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

impl<T: Scalar> Promote<T> for T {
  type Output = T;

  #[inline(always)]
  fn promote(self) -> T {
    self
  }
  #[inline(always)]
  fn promote_rhs(rhs: T) -> T {
    rhs
  }
}

crate::impl_promote_table! {
  i32, i64 => i64;
  i32, u32 => u32;
  i32, u64 => u64;
  i32, f32 => f32;
  i32, f64 => f64;
  i64, u32 => i64;
  i64, u64 => u64;
  i64, f32 => f32;
  i64, f64 => f64;
  u32, u64 => u64;
  u32, f32 => f32;
  u32, f64 => f64;
  u64, f32 => f32;
  u64, f64 => f64;
  f32, f64 => f64;
}

/// The promoted element type of `A` combined with `B`.
pub type Promoted<A, B> = <A as Promote<B>>::Output;
