//! Planar convex hull (Andrew's monotone chain).
//!
//! Purpose
//! - Turn an unordered point set into the CCW-ordered boundary of its convex
//!   hull, with a deterministic start (lexicographically smallest point).
//! - Keep the API minimal: one predicate, one builder, one containment check.
//!
//! Conventions
//! - Points are `Vector2<f64>`; equality is coordinate equality and duplicate
//!   points are legal input.
//! - The chain predicate is a strict sign test on `cross`, so collinear
//!   boundary points are pruned and only extreme vertices remain.

mod chain;
mod orient;

pub use chain::{contains, convex_hull};
pub use orient::{cross, orientation, Orientation};

#[cfg(test)]
mod tests;
