//! Planar convex hulls and random point sets.
//!
//! The crate has two parts:
//! - `hull`: the monotone-chain convex hull over `Vec2` point sets, plus the
//!   orientation predicate that drives it and an on-or-inside containment check.
//! - `sample`: a reproducible uniform point sampler for a bounded pixel region,
//!   used by the executable front end and by benchmarks.
//!
//! Everything here is a pure function of its input: callers own the returned
//! hulls, and no state survives an invocation.

pub mod hull;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull::{contains, convex_hull, cross, orientation, Orientation};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{contains, convex_hull, cross, orientation, Orientation};
    pub use crate::sample::{draw_points_rect, RectCfg, ReplayToken};
    pub use nalgebra::Vector2 as Vec2;
}
