//! Bounding volumes used to seed the sweep.

mod aabb;

pub use aabb::Aabb2;
