//! Utilities for fuzz and/or property testing using `arbitrary`.

use std::ops::RangeInclusive;

use arbitrary::Unstructured;

use crate::Rect;

/// Generate an arbitrary rectangle whose corners both lie in `range`.
///
/// The rectangle can be empty.
pub fn rect_in_range(
    range: RangeInclusive<i32>,
    u: &mut Unstructured<'_>,
) -> Result<Rect<i32>, arbitrary::Error> {
    let x0 = u.int_in_range(range.clone())?;
    let y0 = u.int_in_range(range.clone())?;
    let x1 = u.int_in_range(range.clone())?;
    let y1 = u.int_in_range(range)?;
    Ok(Rect::from_corners(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1)))
}

/// Generate an arbitrary rectangle that is close to `orig`.
///
/// It has a chance to share `orig`'s edges, or to be `orig` itself.
fn another_rect_in_range(
    orig: &Rect<i32>,
    range: RangeInclusive<i32>,
    u: &mut Unstructured<'_>,
) -> Result<Rect<i32>, arbitrary::Error> {
    let same: bool = u.arbitrary()?;
    if same {
        return Ok(*orig);
    }

    let mut edge = |e: i32| -> Result<i32, arbitrary::Error> {
        let reuse: bool = u.arbitrary()?;
        if reuse {
            Ok(e)
        } else {
            u.int_in_range(range.clone())
        }
    };
    let x0 = edge(orig.x)?;
    let y0 = edge(orig.y)?;
    let x1 = edge(orig.x2())?;
    let y1 = edge(orig.y2())?;
    Ok(Rect::from_corners(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1)))
}

/// Generate a collection of arbitrary rectangles with corners in `range`.
///
/// Rectangles are biased towards sharing edges with, or duplicating, the
/// previous one, because that's where the sweep's tie-breaking gets tested.
pub fn rects(
    range: RangeInclusive<i32>,
    u: &mut Unstructured<'_>,
) -> Result<Vec<Rect<i32>>, arbitrary::Error> {
    let len = u.arbitrary_len::<[i32; 4]>()?;
    let mut ret: Vec<Rect<i32>> = Vec::with_capacity(len);
    for _ in 0..len {
        let r = match ret.last() {
            Some(prev) => another_rect_in_range(prev, range.clone(), u)?,
            None => rect_in_range(range.clone(), u)?,
        };
        ret.push(r);
    }
    Ok(ret)
}

/// Property checks, shared between the `arbtest` tests and the fuzzer.
pub mod arbtests {
    use arbitrary::Unstructured;

    use crate::{
        measure::{bounding_box, find_intersection, sum_areas, union_area},
        Splitter,
    };

    /// Splits some arbitrary rectangles and checks that the output is a
    /// valid decomposition.
    ///
    /// Panics if it isn't.
    pub fn split_properties(u: &mut Unstructured<'_>) -> arbitrary::Result<()> {
        let input = super::rects(-64..=64, u)?;
        let emit_trailing: bool = u.arbitrary()?;
        let splitter = Splitter::new().emit_trailing_fragments(emit_trailing);

        let mut output = Vec::new();
        let stats = splitter
            .split_into(input.iter().copied(), |r| output.push(r))
            .expect("generated rects are well-formed");

        if let Some((i, j)) = find_intersection(&output) {
            panic!(
                "{:?} and {:?} intersect\ninput: {input:?}\noutput: {output:?}",
                output[i], output[j]
            );
        }
        assert!(output.iter().all(|r| !r.is_empty()));
        assert_eq!(sum_areas(&output), union_area(&input));
        assert_eq!(
            bounding_box(&output),
            bounding_box(input.iter().filter(|r| !r.is_empty()))
        );
        assert_eq!(stats.emitted, output.len());

        // Running it again gives exactly the same thing.
        assert_eq!(splitter.split(input.iter().copied()).unwrap(), output);
        Ok(())
    }
}
