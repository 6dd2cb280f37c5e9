use std::ops::*;

use crate::*;

macro_rules! impl_component_wise_op {
  ($Op:ident, $op:ident, $sym:tt) => {
    impl<T, U> $Op<Vector2<U>> for Vector2<T>
    where
      T: Promote<U>,
      U: Scalar,
    {
      type Output = Vector2<Promoted<T, U>>;

      #[inline]
      fn $op(self, rhs: Vector2<U>) -> Self::Output {
        Vector2::new(
          <T as Promote<U>>::promote(self.x) $sym <T as Promote<U>>::promote_rhs(rhs.x),
          <T as Promote<U>>::promote(self.y) $sym <T as Promote<U>>::promote_rhs(rhs.y),
        )
      }
    }
  };
}

impl_component_wise_op!(Add, add, +);
impl_component_wise_op!(Sub, sub, -);
impl_component_wise_op!(Mul, mul, *);

/// Component wise division. A divisor with any component equal to zero is rejected instead of
/// producing infinities.
impl<T, U> Div<Vector2<U>> for Vector2<T>
where
  T: Promote<U>,
  U: Scalar,
{
  type Output = Result<Vector2<Promoted<T, U>>, GeometryError>;

  fn div(self, rhs: Vector2<U>) -> Self::Output {
    let divisor = rhs.map(<T as Promote<U>>::promote_rhs);
    if divisor.x == num_traits::zero() || divisor.y == num_traits::zero() {
      log::debug!("vector {:?} divided by {:?}", self, rhs);
      return Err(GeometryError::DivisionByZero {
        dividend: (self.x.to_real(), self.y.to_real()),
        divisor: (rhs.x.to_real(), rhs.y.to_real()),
      });
    }
    Ok(Vector2::new(
      <T as Promote<U>>::promote(self.x) / divisor.x,
      <T as Promote<U>>::promote(self.y) / divisor.y,
    ))
  }
}

impl<T: Neg<Output = T>> Neg for Vector2<T> {
  type Output = Self;

  #[inline]
  fn neg(self) -> Self {
    Self::new(-self.x, -self.y)
  }
}

impl<T: Scalar> AddAssign for Vector2<T> {
  #[inline]
  fn add_assign(&mut self, rhs: Self) {
    *self = self.translate(rhs);
  }
}

impl<T: Scalar> SubAssign for Vector2<T> {
  #[inline]
  fn sub_assign(&mut self, rhs: Self) {
    *self = Self::new(self.x - rhs.x, self.y - rhs.y);
  }
}

impl<T: Scalar> MulAssign<T> for Vector2<T> {
  #[inline]
  fn mul_assign(&mut self, factor: T) {
    *self = self.scale(factor);
  }
}

impl_scalar_broadcast!(Vector2; i32, i64, u32, u64, f32, f64);
