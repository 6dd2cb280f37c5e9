mod ops;
mod products;
mod vec2;

pub use products::*;
pub use vec2::*;
