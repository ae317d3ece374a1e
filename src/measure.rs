//! Measurements on collections of rectangles.
//!
//! None of these are used by the sweep itself. They exist to check its output:
//! a correct decomposition has no intersections, the same bounding box as its
//! input, and a total area equal to the covered area of its input.

use crate::{geom::Rect, num::Coord};

/// The smallest rectangle containing all of `rects`, or `None` if there are none.
///
/// Empty rectangles count too: pass in only the non-empty ones if that's what
/// you want.
pub fn bounding_box<'a, T: Coord>(rects: impl IntoIterator<Item = &'a Rect<T>>) -> Option<Rect<T>> {
    let mut rects = rects.into_iter();
    let first = *rects.next()?;
    Some(rects.fold(first, |acc, r| acc.union(r)))
}

/// The sum of the areas of `rects`, not accounting for overlaps.
pub fn sum_areas<'a, T: Coord>(rects: impl IntoIterator<Item = &'a Rect<T>>) -> T {
    rects.into_iter().fold(T::zero(), |acc, r| acc + r.area())
}

/// The area covered by the union of `rects`.
///
/// Overlapping parts are only counted once. This is computed exactly, by
/// cutting the plane into vertical slabs at every left and right edge and
/// measuring the covered part of each slab.
pub fn union_area<'a, T: Coord>(rects: impl IntoIterator<Item = &'a Rect<T>>) -> T {
    let rects = rects
        .into_iter()
        .filter(|r| !r.is_empty())
        .collect::<Vec<_>>();

    let mut xs = rects.iter().flat_map(|r| [r.x, r.x2()]).collect::<Vec<_>>();
    xs.sort();
    xs.dedup();

    let mut total = T::zero();
    let mut spans = Vec::new();
    for slab in xs.windows(2) {
        let (x0, x1) = (slab[0], slab[1]);
        spans.clear();
        spans.extend(
            rects
                .iter()
                .filter(|r| r.x <= x0 && x1 <= r.x2())
                .map(|r| (r.y, r.y2())),
        );
        total = total + covered_length(&mut spans) * (x1 - x0);
    }
    total
}

// The total length of a union of intervals. Sorts its input.
fn covered_length<T: Coord>(spans: &mut [(T, T)]) -> T {
    spans.sort();

    let mut len = T::zero();
    let mut current: Option<(T, T)> = None;
    for &(start, end) in spans.iter() {
        current = match current {
            Some((cur_start, cur_end)) if start <= cur_end => Some((cur_start, cur_end.max(end))),
            Some((cur_start, cur_end)) => {
                len = len + (cur_end - cur_start);
                Some((start, end))
            }
            None => Some((start, end)),
        };
    }
    if let Some((cur_start, cur_end)) = current {
        len = len + (cur_end - cur_start);
    }
    len
}

/// Finds the indices of some pair of intersecting rectangles.
///
/// This checks every pair, so it's quadratic.
pub fn find_intersection<T: Coord>(rects: &[Rect<T>]) -> Option<(usize, usize)> {
    rects.iter().enumerate().find_map(|(i, a)| {
        rects[(i + 1)..]
            .iter()
            .position(|b| a.intersects(b))
            .map(|j| (i, i + 1 + j))
    })
}

/// Do any two of `rects` intersect?
pub fn any_intersection<T: Coord>(rects: &[Rect<T>]) -> bool {
    find_intersection(rects).is_some()
}
