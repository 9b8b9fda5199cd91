//! Floating-point geometric primitives.
//!
//! Points and vectors are plain values. [`Edge`] and [`Triangle`] are
//! canonicalized when built, so structurally equal geometry compares and
//! hashes equal no matter how it was constructed.

mod edge;
mod point2;
mod triangle;
mod vec2;

pub use edge::Edge;
pub use point2::Point2;
pub use triangle::{heron_circumradius_squared, Triangle};
pub use vec2::Vec2;
