//! Two-chain hull sweep and point-in-hull containment.

use nalgebra::Vector2;

use super::orient::cross;

/// Convex hull of `points`, as a CCW non-closed polygon starting at the
/// lexicographically smallest point.
///
/// Total for every input shape. Fewer than 3 points come back as a copy in
/// their original order (a point or a segment, so callers can still render
/// something). Otherwise the input is copied, the copy is sorted by x then y
/// (the caller's slice is never reordered), and the lower and upper chains
/// are swept with a strict left-turn predicate. Collinear boundary points are
/// pruned, so a fully collinear set degenerates to its two extreme points
/// and duplicate points are dropped — with one corner: when every input
/// point is identical, the result is that point twice (the two coincident
/// extremes of the degenerate chain).
pub fn convex_hull(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let mut pts = points.to_vec();
    // Stable sort keeps duplicate points adjacent; the sweep drops them as
    // zero-turn triples.
    pts.sort_by(|a, b| {
        match a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal) {
            std::cmp::Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal),
            o => o,
        }
    });

    let mut lower: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }
    let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }
    // Each chain ends where the other begins.
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

/// On-or-inside test against a CCW hull (the polygon is treated as closed).
///
/// Degenerate hulls are handled: an empty hull contains nothing, a single
/// point contains only itself, a segment contains exactly the points on it.
pub fn contains(hull: &[Vector2<f64>], p: Vector2<f64>) -> bool {
    match hull.len() {
        0 => false,
        1 => hull[0] == p,
        2 => on_segment(hull[0], hull[1], p),
        _ => (0..hull.len()).all(|i| {
            let a = hull[i];
            let b = hull[(i + 1) % hull.len()];
            cross(a, b, p) >= 0.0
        }),
    }
}

/// Collinear with `a → b` and within its bounding box.
fn on_segment(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> bool {
    if cross(a, b, p) != 0.0 {
        return false;
    }
    let (lo_x, hi_x) = if a.x <= b.x { (a.x, b.x) } else { (b.x, a.x) };
    let (lo_y, hi_y) = if a.y <= b.y { (a.y, b.y) } else { (b.y, a.y) };
    (lo_x..=hi_x).contains(&p.x) && (lo_y..=hi_y).contains(&p.y)
}
