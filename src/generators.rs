//! Utilities for generating examples, benchmarks, and test cases.

use std::ops::RangeInclusive;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::Rect;

/// Generate `count` random rectangles.
///
/// Every coordinate and every side length is drawn uniformly from `range`, so
/// with a narrow range there will be lots of overlaps and shared edges. The
/// same seed always gives the same rectangles.
pub fn random_rects(seed: u64, count: usize, range: RangeInclusive<i32>) -> Vec<Rect<i32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Rect::new(
                rng.gen_range(range.clone()),
                rng.gen_range(range.clone()),
                rng.gen_range(range.clone()),
                rng.gen_range(range.clone()),
            )
        })
        .collect()
}

/// Generate a bunch of squares, arranged in a grid.
///
/// The top-left of the first square is at (x0, y0). Each square has size `size
/// x size`, and the distance between squares (both horizontally and vertically)
/// is `offset`.
fn squares((x0, y0): (i32, i32), size: i32, offset: i32, count: usize) -> Vec<Rect<i32>> {
    let mut ret = Vec::new();
    for i in 0..count as i32 {
        for j in 0..count as i32 {
            ret.push(Rect::new(x0 + i * offset, y0 + j * offset, size, size));
        }
    }
    ret
}

/// Generate an `n` by `n` checkerboard-like pattern with overlapping squares.
/// For `n = 3`, it looks like:
///
/// ```text
/// ┌────┐ ┌────┐ ┌────┐
/// │    │ │    │ │    │
/// │  ┌─┼─┼─┐┌─┼─┼─┐  │
/// └──┼─┘ └─┼┼─┘ └─┼──┘
/// ┌──┼─┐ ┌─┼┼─┐ ┌─┼──┐
/// │  └─┼─┼─┘└─┼─┼─┘  │
/// │  ┌─┼─┼─┐┌─┼─┼─┐  │
/// └──┼─┘ └─┼┼─┘ └─┼──┘
/// ┌──┼─┐ ┌─┼┼─┐ ┌─┼──┐
/// │  └─┼─┼─┘└─┼─┼─┘  │
/// │    │ │    │ │    │
/// └────┘ └────┘ └────┘
/// ```
///
/// The outer `n x n` squares come first, followed by the inner
/// `(n - 1) x (n - 1)` squares. Within each group, nothing overlaps; each inner
/// square overlaps the corners of four outer squares.
pub fn checkerboard(n: usize) -> Vec<Rect<i32>> {
    let mut ret = squares((0, 0), 30, 40, n);
    ret.extend(squares((20, 20), 30, 40, n.saturating_sub(1)));
    ret
}

/// Generate `n` concentric squares, biggest first.
///
/// Every square contains all the ones after it, so the union is just the
/// first one, but every pair overlaps.
pub fn nested(n: usize) -> Vec<Rect<i32>> {
    (0..n as i32)
        .map(|i| Rect::new(i, i, 2 * (n as i32 - i), 2 * (n as i32 - i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{any_intersection, bounding_box, union_area};

    #[test]
    fn random_is_seeded() {
        let a = random_rects(13607, 100, 1..=100);
        let b = random_rects(13607, 100, 1..=100);
        assert_eq!(a, b);
        assert_eq!(a.len(), 100);
        assert!(a.iter().all(|r| (1..=100).contains(&r.width)));
    }

    #[test]
    fn checkerboard_overlaps() {
        let rects = checkerboard(3);
        assert_eq!(rects.len(), 13);
        assert!(!any_intersection(&rects[..9]));
        assert!(!any_intersection(&rects[9..]));
        assert!(any_intersection(&rects));
        assert_eq!(union_area(&rects), 13 * 900 - 4 * 4 * 100);
    }

    #[test]
    fn nested_squares() {
        let rects = nested(4);
        assert_eq!(union_area(&rects), 64);
        assert_eq!(bounding_box(&rects), Some(rects[0]));
    }
}
