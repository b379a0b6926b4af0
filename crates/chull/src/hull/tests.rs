use super::*;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};

fn pts(coords: &[(f64, f64)]) -> Vec<Vector2<f64>> {
    coords.iter().map(|&(x, y)| vector![x, y]).collect()
}

#[test]
fn orientation_sign_cases() {
    let o = vector![0.0, 0.0];
    let a = vector![1.0, 0.0];
    assert_eq!(
        orientation(o, a, vector![1.0, 1.0]),
        Orientation::CounterClockwise
    );
    assert_eq!(orientation(o, a, vector![1.0, -1.0]), Orientation::Clockwise);
    assert_eq!(orientation(o, a, vector![2.0, 0.0]), Orientation::Collinear);
    assert_eq!(cross(o, a, vector![1.0, 1.0]), 1.0);
}

#[test]
fn fewer_than_three_points_pass_through_unchanged() {
    assert!(convex_hull(&[]).is_empty());
    let single = pts(&[(0.0, 0.0)]);
    assert_eq!(convex_hull(&single), single);
    // Original relative order is kept, not sorted.
    let pair = pts(&[(1.0, 1.0), (0.0, 0.0)]);
    assert_eq!(convex_hull(&pair), pair);
}

#[test]
fn square_with_interior_point() {
    let input = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (2.0, 2.0)]);
    let hull = convex_hull(&input);
    assert_eq!(
        hull,
        pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)])
    );
}

#[test]
fn collinear_input_degenerates_to_extremes() {
    let input = pts(&[(0.0, 0.0), (2.0, 0.0), (4.0, 0.0)]);
    assert_eq!(convex_hull(&input), pts(&[(0.0, 0.0), (4.0, 0.0)]));
}

#[test]
fn duplicate_points_are_pruned() {
    let input = pts(&[(0.0, 0.0), (0.0, 0.0), (1.0, 1.0), (1.0, 0.0)]);
    assert_eq!(
        convex_hull(&input),
        pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)])
    );
}

#[test]
fn all_identical_points_yield_coincident_extremes() {
    // The chains collapse to one point each, so the point appears twice.
    let input = pts(&[(3.0, 3.0), (3.0, 3.0), (3.0, 3.0)]);
    assert_eq!(convex_hull(&input), pts(&[(3.0, 3.0), (3.0, 3.0)]));
}

#[test]
fn hull_starts_at_lexicographic_minimum() {
    let input = pts(&[(3.0, 1.0), (1.0, 4.0), (1.0, 2.0), (5.0, 3.0), (2.0, 0.0)]);
    let hull = convex_hull(&input);
    assert_eq!(hull[0], vector![1.0, 2.0]);
}

#[test]
fn caller_slice_is_not_reordered() {
    let input = pts(&[(4.0, 4.0), (0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]);
    let before = input.clone();
    let _ = convex_hull(&input);
    assert_eq!(input, before);
}

#[test]
fn containment_degenerate_hulls() {
    assert!(!contains(&[], vector![0.0, 0.0]));
    let point = pts(&[(1.0, 1.0)]);
    assert!(contains(&point, vector![1.0, 1.0]));
    assert!(!contains(&point, vector![1.0, 2.0]));
    let seg = pts(&[(0.0, 0.0), (4.0, 0.0)]);
    assert!(contains(&seg, vector![2.0, 0.0]));
    assert!(!contains(&seg, vector![5.0, 0.0]));
    assert!(!contains(&seg, vector![2.0, 1.0]));
}

/// Integer coordinates keep `cross` exact, so the properties below are sharp
/// sign tests rather than epsilon comparisons.
fn point_sets() -> impl Strategy<Value = Vec<Vector2<f64>>> {
    prop::collection::vec((-64i32..=64, -64i32..=64), 0..48)
        .prop_map(|v| v.into_iter().map(|(x, y)| vector![x as f64, y as f64]).collect())
}

proptest! {
    #[test]
    fn every_input_point_on_or_inside(input in point_sets()) {
        let hull = convex_hull(&input);
        if input.len() < 3 {
            prop_assert_eq!(&hull, &input);
        } else {
            for &p in &input {
                prop_assert!(contains(&hull, p), "point {:?} escaped hull {:?}", p, hull);
            }
        }
    }

    #[test]
    fn consecutive_triples_turn_strictly_left(input in point_sets()) {
        let hull = convex_hull(&input);
        if hull.len() >= 3 {
            let n = hull.len();
            for i in 0..n {
                // Includes the wraparound triples last→first→second.
                let s = cross(hull[i], hull[(i + 1) % n], hull[(i + 2) % n]);
                prop_assert!(s > 0.0, "non-left turn at {i}: {s}");
            }
        }
    }

    #[test]
    fn rehulling_a_hull_is_identity(input in point_sets()) {
        let hull = convex_hull(&input);
        prop_assert_eq!(convex_hull(&hull), hull);
    }

    #[test]
    fn hull_is_invariant_under_input_shuffles(input in point_sets(), seed in any::<u64>()) {
        let mut shuffled = input.clone();
        shuffled.shuffle(&mut StdRng::seed_from_u64(seed));
        if input.len() < 3 {
            // Pass-through region: output tracks input order by contract.
            prop_assert_eq!(convex_hull(&shuffled), shuffled);
        } else {
            prop_assert_eq!(convex_hull(&shuffled), convex_hull(&input));
        }
    }
}
