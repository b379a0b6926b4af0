//! Hull a few random point sets for quick visual sanity on counts.
//!
//! Usage:
//!   cargo run -p chull --example random_hull -- 25
//!
//! Prints each sample with (points, hull vertices) counts and the hull start.

use chull::prelude::*;

fn main() {
    let n: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(25);
    let cfg = RectCfg {
        count: n,
        ..RectCfg::default()
    };
    for i in 0..5 {
        let pts = draw_points_rect(cfg, ReplayToken { seed: 2025, index: i });
        let hull = convex_hull(&pts);
        println!(
            "sample {i}: n={}, hull={}, start=({}, {})",
            pts.len(),
            hull.len(),
            hull.first().map(|p| p.x).unwrap_or(f64::NAN),
            hull.first().map(|p| p.y).unwrap_or(f64::NAN),
        );
    }
}
