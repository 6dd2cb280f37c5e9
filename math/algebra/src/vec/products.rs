use crate::*;

#[inline]
pub fn dot_product<T, U>(a: Vector2<T>, b: Vector2<U>) -> Promoted<T, U>
where
  T: Promote<U>,
  U: Scalar,
{
  let a = a.map(<T as Promote<U>>::promote);
  let b = b.map(<T as Promote<U>>::promote_rhs);
  a.x * b.x + a.y * b.y
}

/// The 2D cross product `a.x * b.y - a.y * b.x`, i.e. the determinant of the matrix with columns
/// `a` and `b`. Positive when `b` is counter clockwise from `a`.
#[inline]
pub fn cross_product<T, U>(a: Vector2<T>, b: Vector2<U>) -> Promoted<T, U>
where
  T: Promote<U>,
  U: Scalar,
{
  let a = a.map(<T as Promote<U>>::promote);
  let b = b.map(<T as Promote<U>>::promote_rhs);
  a.x * b.y - a.y * b.x
}

fn project_real(v: Vector2<f64>, onto: Vector2<f64>) -> Result<Vector2<f64>, GeometryError> {
  let length2 = dot_product(onto, onto);
  if length2 == 0. {
    log::debug!("projection of {:?} onto the zero vector", v);
    return Err(GeometryError::ZeroLength {
      operation: "project",
    });
  }
  Ok(onto * (dot_product(v, onto) / length2))
}

/// The component of `v` along `onto`.
pub fn project<T, U>(v: Vector2<T>, onto: Vector2<U>) -> Result<Vector2<Promoted<T, U>>, GeometryError>
where
  T: Promote<U>,
  U: Scalar,
{
  project_real(v.real(), onto.real()).map(Vector2::from_real)
}

/// The component of `v` perpendicular to `from`, `v - project(v, from)`.
pub fn reject<T, U>(v: Vector2<T>, from: Vector2<U>) -> Result<Vector2<Promoted<T, U>>, GeometryError>
where
  T: Promote<U>,
  U: Scalar,
{
  let v = v.real();
  let projected = project_real(v, from.real())?;
  Ok(Vector2::from_real(v - projected))
}

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;
  use cgmath::InnerSpace;

  use super::*;

  #[test]
  fn products() {
    assert_eq!(dot_product(vec2(3_i32, 4), vec2(4_i32, 3)), 24);
    assert_eq!(cross_product(vec2(3_i32, 4), vec2(4_i32, 3)), -7);
    assert_eq!(cross_product(vec2(1.0_f64, 0.), vec2(0.0_f64, 1.)), 1.);
    let d: f64 = dot_product(vec2(3_i32, 4), vec2(0.5_f64, 0.5));
    assert_eq!(d, 3.5);
  }

  #[test]
  fn products_match_cgmath() {
    let (a, b) = (vec2(1.5_f64, -2.25), vec2(-0.75_f64, 4.));
    let (ca, cb) = (cgmath::vec2(1.5, -2.25), cgmath::vec2(-0.75, 4.));
    assert_relative_eq!(dot_product(a, b), ca.dot(cb));
    assert_relative_eq!(cross_product(a, b), ca.perp_dot(cb));

    let p = project(a, b).unwrap();
    let cp = ca.project_on(cb);
    assert_relative_eq!(p.x, cp.x, epsilon = 1e-12);
    assert_relative_eq!(p.y, cp.y, epsilon = 1e-12);
  }

  #[test]
  fn projection_and_rejection() {
    assert_eq!(project(vec2(2.0_f64, 2.), vec2(4.0_f64, 0.)).unwrap(), vec2(2., 0.));
    assert_eq!(reject(vec2(2.0_f64, 2.), vec2(4.0_f64, 0.)).unwrap(), vec2(0., 2.));
    assert_eq!(project(vec2(2_i32, 2), vec2(4_i32, 0)).unwrap(), vec2(2, 0));
    assert_eq!(reject(vec2(2_i32, 2), vec2(4_i32, 0)).unwrap(), vec2(0, 2));
  }

  #[test]
  fn projection_and_rejection_recompose() {
    let (v, onto) = (vec2(-3.0_f64, 7.5), vec2(2.0_f64, 1.));
    let p = project(v, onto).unwrap();
    let r = reject(v, onto).unwrap();
    assert_relative_eq!(dot_product(r, onto), 0., epsilon = 1e-12);
    assert_relative_eq!(p.x + r.x, v.x, epsilon = 1e-12);
    assert_relative_eq!(p.y + r.y, v.y, epsilon = 1e-12);
  }

  #[test]
  fn projection_onto_zero_vector_is_an_error() {
    let err = Err(GeometryError::ZeroLength {
      operation: "project",
    });
    assert_eq!(project(vec2(1.0_f64, 1.), Vector2::<f64>::zero()), err);
    assert_eq!(reject(vec2(1.0_f64, 1.), Vector2::<f64>::zero()), err);
  }
}
