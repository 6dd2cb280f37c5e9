//! Planar angle and vector value types.
//!
//! [`Angle`] stores radians and only wraps on request. [`Vector2`] is generic over integer and
//! float element types; arithmetic between different element types promotes to the wider one
//! (see [`Promote`]).

#[macro_use]
mod marcos;

mod angle;
mod error;
pub mod interpolation;
mod scalar;
mod vec;

pub use angle::*;
pub use error::*;
pub use interpolation::Lerp;
pub use scalar::*;
pub use vec::*;
