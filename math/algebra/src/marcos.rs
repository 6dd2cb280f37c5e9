/// Generate array and tuple conversion implementations for a two component type
#[macro_export]
macro_rules! impl_pair_conversions {
  ($Pair:ident <$S:ident> { $first:ident, $second:ident }) => {
    impl<$S> From<$Pair<$S>> for [$S; 2] {
      #[inline]
      fn from(v: $Pair<$S>) -> [$S; 2] {
        match v { $Pair { $first, $second } => [$first, $second] }
      }
    }

    impl<$S> From<[$S; 2]> for $Pair<$S> {
      #[inline]
      fn from(v: [$S; 2]) -> $Pair<$S> {
        let [$first, $second] = v;
        $Pair { $first, $second }
      }
    }

    impl<$S> From<$Pair<$S>> for ($S, $S) {
      #[inline]
      fn from(v: $Pair<$S>) -> ($S, $S) {
        match v { $Pair { $first, $second } => ($first, $second) }
      }
    }

    impl<$S> From<($S, $S)> for $Pair<$S> {
      #[inline]
      fn from(v: ($S, $S)) -> $Pair<$S> {
        match v { ($first, $second) => $Pair { $first, $second } }
      }
    }
  };
}

/// Generate the mixed type rows of the promotion table, both directions per row
#[macro_export]
macro_rules! impl_promote_table {
  ($($a:ty, $b:ty => $out:ty;)+) => {
    $(
      impl $crate::Promote<$b> for $a {
        type Output = $out;
        #[inline(always)]
        fn promote(self) -> $out {
          self as $out
        }
        #[inline(always)]
        fn promote_rhs(rhs: $b) -> $out {
          rhs as $out
        }
      }

      impl $crate::Promote<$a> for $b {
        type Output = $out;
        #[inline(always)]
        fn promote(self) -> $out {
          self as $out
        }
        #[inline(always)]
        fn promote_rhs(rhs: $a) -> $out {
          rhs as $out
        }
      }
    )+
  };
}

/// Generate scalar broadcast operators between a vector type and primitive scalars,
/// with the scalar on either side
#[macro_export]
macro_rules! impl_scalar_broadcast {
  ($Vector:ident; $($s:ty),+) => {
    $(
      impl<T: $crate::Promote<$s>> std::ops::Mul<$s> for $Vector<T> {
        type Output = $Vector<$crate::Promoted<T, $s>>;
        #[inline]
        fn mul(self, s: $s) -> Self::Output {
          let s = <T as $crate::Promote<$s>>::promote_rhs(s);
          let x = <T as $crate::Promote<$s>>::promote(self.x);
          let y = <T as $crate::Promote<$s>>::promote(self.y);
          $Vector::new(x * s, y * s)
        }
      }

      impl<T> std::ops::Mul<$Vector<T>> for $s
      where
        T: $crate::Scalar,
        $s: $crate::Promote<T>,
      {
        type Output = $Vector<$crate::Promoted<$s, T>>;
        #[inline]
        fn mul(self, v: $Vector<T>) -> Self::Output {
          let s = <$s as $crate::Promote<T>>::promote(self);
          let x = <$s as $crate::Promote<T>>::promote_rhs(v.x);
          let y = <$s as $crate::Promote<T>>::promote_rhs(v.y);
          $Vector::new(s * x, s * y)
        }
      }

      impl<T: $crate::Promote<$s>> std::ops::Div<$s> for $Vector<T> {
        type Output = Result<$Vector<$crate::Promoted<T, $s>>, $crate::GeometryError>;
        #[inline]
        fn div(self, s: $s) -> Self::Output {
          let divisor = <T as $crate::Promote<$s>>::promote_rhs(s);
          if divisor == num_traits::Zero::zero() {
            log::debug!("vector {:?} divided by zero scalar", self);
            return Err($crate::GeometryError::DivisionByZero {
              dividend: ($crate::Scalar::to_real(self.x), $crate::Scalar::to_real(self.y)),
              divisor: (0., 0.),
            });
          }
          let x = <T as $crate::Promote<$s>>::promote(self.x);
          let y = <T as $crate::Promote<$s>>::promote(self.y);
          Ok($Vector::new(x / divisor, y / divisor))
        }
      }
    )+
  };
}
