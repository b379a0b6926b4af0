//! Random point sets in a bounded pixel region (uniform + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic point source for the hull front end and
//!   the benchmarks. The sampler is parameterizable, reproducible, and makes
//!   no promise beyond "inside the region": the hull builder assumes nothing
//!   about distribution or bounds.
//!
//! Model
//! - Draw `count` points uniformly inside a `width × height` region, kept
//!   `margin` away from every border, optionally rounded to whole pixels.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform rectangle sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RectCfg {
    /// Number of points to draw.
    pub count: usize,
    /// Region width in pixels.
    pub width: f64,
    /// Region height in pixels.
    pub height: f64,
    /// Border margin kept point-free. Clamped when the region is too small.
    pub margin: f64,
    /// Round coordinates to whole pixels?
    pub round_to_pixel: bool,
}

impl Default for RectCfg {
    fn default() -> Self {
        Self {
            count: 5,
            width: 800.0,
            height: 600.0,
            margin: 40.0,
            round_to_pixel: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` uniform points inside the margined region.
///
/// The margin is clamped so the usable span never collapses below zero; a
/// degenerate region (zero span) yields all points at its single coordinate
/// rather than failing.
pub fn draw_points_rect(cfg: RectCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let w = cfg.width.max(0.0);
    let h = cfg.height.max(0.0);
    let m = cfg.margin.max(0.0).min(w / 2.0).min(h / 2.0);
    let span_x = w - 2.0 * m;
    let span_y = h - 2.0 * m;
    (0..cfg.count)
        .map(|_| {
            let x = m + rng.gen::<f64>() * span_x;
            let y = m + rng.gen::<f64>() * span_y;
            if cfg.round_to_pixel {
                Vector2::new(x.round(), y.round())
            } else {
                Vector2::new(x, y)
            }
        })
        .collect()
}
