//! Turn-direction predicate for ordered point triples.

use nalgebra::Vector2;

/// Classification of the turn made by an ordered triple of points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Strictly left turn (positive signed area).
    CounterClockwise,
    /// Strictly right turn (negative signed area).
    Clockwise,
    /// Zero signed area.
    Collinear,
}

/// Signed area of the parallelogram spanned by `a - o` and `b - o`.
///
/// Positive for a left (counter-clockwise) turn `o → a → b`, negative for a
/// right turn, zero when the three points are collinear. Exact for
/// pixel-scale integer coordinates: the products stay far below the range
/// where `f64` loses integer precision.
#[inline]
pub fn cross(o: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Classify the turn `o → a → b` by the exact sign of [`cross`].
///
/// No tolerance is applied: the hull builder wants a strict sign test, and
/// the coordinate domain (small reals, pixel integers) makes the zero case
/// meaningful rather than noise.
#[inline]
pub fn orientation(o: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> Orientation {
    let s = cross(o, a, b);
    if s > 0.0 {
        Orientation::CounterClockwise
    } else if s < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}
