//! Blending between two vectors.
//!
//! [`linear`] and [`smoothstep`] clamp the blend factor into [0, 1], so they never extrapolate
//! past their end points. Use [`Lerp`] directly for the unclamped blend.

use crate::*;

pub trait Lerp<T> {
  /// `self + (b - self) * t`, `t` is not clamped.
  #[must_use]
  fn lerp(self, b: Self, t: T) -> Self;
}

impl<T: Scalar> Lerp<f64> for Vector2<T> {
  #[inline]
  fn lerp(self, b: Self, t: f64) -> Self {
    let (a, b) = (self.real(), b.real());
    Self::from_real(Vector2::new(
      a.x + (b.x - a.x) * t,
      a.y + (b.y - a.y) * t,
    ))
  }
}

fn promote_pair<T, U>(a: Vector2<T>, b: Vector2<U>) -> (Vector2<Promoted<T, U>>, Vector2<Promoted<T, U>>)
where
  T: Promote<U>,
  U: Scalar,
{
  (
    a.map(<T as Promote<U>>::promote),
    b.map(<T as Promote<U>>::promote_rhs),
  )
}

pub fn linear<T, U>(a: Vector2<T>, b: Vector2<U>, t: f64) -> Vector2<Promoted<T, U>>
where
  T: Promote<U>,
  U: Scalar,
{
  let (a, b) = promote_pair(a, b);
  a.lerp(b, t.clamp(0., 1.))
}

/// Cubic ease in and out, the clamped factor is reshaped by `t² (3 - 2t)` before blending.
pub fn smoothstep<T, U>(a: Vector2<T>, b: Vector2<U>, t: f64) -> Vector2<Promoted<T, U>>
where
  T: Promote<U>,
  U: Scalar,
{
  let (a, b) = promote_pair(a, b);
  let t = t.clamp(0., 1.);
  a.lerp(b, t * t * (3. - 2. * t))
}
