#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
  #[error("division by zero: {dividend:?} / {divisor:?}")]
  DivisionByZero {
    dividend: (f64, f64),
    divisor: (f64, f64),
  },
  /// The operation needs a reference vector with non-zero length, e.g. normalizing or projecting
  /// onto the zero vector.
  #[error("{operation} requires a vector with non-zero length")]
  ZeroLength { operation: &'static str },
}
