//! Geometric primitives: axis-aligned rectangles and the set operations the sweep needs.

use std::ops::Range;

use arrayvec::ArrayVec;

use crate::num::Coord;

/// An axis-aligned rectangle.
///
/// The rectangle covers the half-open region `[x, x + width) × [y, y + height)`,
/// so two rectangles that share an edge do not overlap. Although it isn't
/// important for functionality, the documentation and method naming assume that
/// `(x, y)` is the top-left corner, with larger `y` values further down.
///
/// Rectangles are sorted by `x` and then by `y`. (Width and height break any
/// remaining ties, so that the order is consistent with equality.)
#[derive(Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Rect<T> {
    /// Left edge.
    pub x: T,
    /// Top edge.
    pub y: T,
    /// Horizontal extent. Should be non-negative.
    pub width: T,
    /// Vertical extent. Should be non-negative.
    pub height: T,
}

/// The pieces of a rectangle left over after subtracting another one.
pub type Fragments<T> = ArrayVec<Rect<T>, 4>;

impl<T: Coord> Ord for Rect<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.x, self.y, self.width, self.height).cmp(&(
            other.x,
            other.y,
            other.width,
            other.height,
        ))
    }
}

impl<T: Coord> PartialOrd for Rect<T> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Rect<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect({:?}, {:?}, {:?}, {:?})",
            self.x, self.y, self.width, self.height
        )
    }
}

impl<T: Coord> Rect<T> {
    /// Create a new rectangle from its top-left corner and its size.
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a new rectangle from its top-left and bottom-right corners.
    ///
    /// `x0` must be at most `x1`, and `y0` at most `y1`.
    pub fn from_corners(x0: T, y0: T, x1: T, y1: T) -> Self {
        debug_assert!(x0 <= x1 && y0 <= y1);
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// The right edge.
    #[inline]
    pub fn x2(&self) -> T {
        self.x + self.width
    }

    /// The bottom edge.
    #[inline]
    pub fn y2(&self) -> T {
        self.y + self.height
    }

    /// The vertical extent, as a half-open range.
    pub fn y_range(&self) -> Range<T> {
        self.y..self.y2()
    }

    /// Width times height.
    pub fn area(&self) -> T {
        self.width * self.height
    }

    /// Is either dimension zero (or negative)?
    pub fn is_empty(&self) -> bool {
        self.width <= T::zero() || self.height <= T::zero()
    }

    /// Are both dimensions non-negative?
    pub fn is_well_formed(&self) -> bool {
        self.width >= T::zero() && self.height >= T::zero()
    }

    /// Returns true if `other` lies entirely within `self` (touching the boundary is allowed).
    pub fn contains(&self, other: &Rect<T>) -> bool {
        other.x >= self.x && other.y >= self.y && other.x2() <= self.x2() && other.y2() <= self.y2()
    }

    /// Returns true if the interiors of the two rectangles overlap.
    ///
    /// Rectangles that only touch along an edge or at a corner do not intersect.
    /// Empty rectangles never intersect anything.
    pub fn intersects(&self, other: &Rect<T>) -> bool {
        !(self.is_empty()
            || other.is_empty()
            || other.x2() <= self.x
            || other.y2() <= self.y
            || other.x >= self.x2()
            || other.y >= self.y2())
    }

    /// The smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Rect<T>) -> Rect<T> {
        Rect::from_corners(
            self.x.min(other.x),
            self.y.min(other.y),
            self.x2().max(other.x2()),
            self.y2().max(other.y2()),
        )
    }

    /// Converts to a `kurbo` rectangle, with `f64` coordinates.
    pub fn to_kurbo(&self) -> kurbo::Rect {
        kurbo::Rect::new(
            self.x.to_f64(),
            self.y.to_f64(),
            self.x2().to_f64(),
            self.y2().to_f64(),
        )
    }
}

/// The intersection of two rectangles.
///
/// This is only meaningful if `a.intersects(b)`. Otherwise, the result has a
/// zero or negative width or height (and for unsigned coordinates, computing
/// it might underflow).
pub fn collision_box<T: Coord>(a: &Rect<T>, b: &Rect<T>) -> Rect<T> {
    let x = a.x.max(b.x);
    let y = a.y.max(b.y);
    Rect::new(x, y, a.x2().min(b.x2()) - x, a.y2().min(b.y2()) - y)
}

/// Subtracts `rhs` from `lhs`.
///
/// The part of `lhs` outside of `rhs` is returned as at most four disjoint
/// rectangles, in this order: the strip above `rhs`, the strip below `rhs`,
/// the strip to the left of `rhs` and the strip to the right of `rhs`. The
/// top and bottom strips span the full width of `lhs`; the left and right
/// strips only span the vertical extent of the overlap. Only strips with
/// positive size are returned.
///
/// Together with `collision_box(lhs, rhs)`, the fragments exactly tile `lhs`.
/// If `rhs` covers `lhs`, there are no fragments; if they don't intersect at
/// all, the only fragment is `lhs` itself.
pub fn difference<T: Coord>(lhs: &Rect<T>, rhs: &Rect<T>) -> Fragments<T> {
    let mut out = ArrayVec::new();

    if lhs.is_empty() || rhs.contains(lhs) {
        return out;
    }

    if !lhs.intersects(rhs) {
        out.push(*lhs);
        return out;
    }

    // top
    if rhs.y > lhs.y {
        out.push(Rect::new(lhs.x, lhs.y, lhs.width, rhs.y - lhs.y));
    }

    // bottom
    if lhs.y2() > rhs.y2() {
        out.push(Rect::new(lhs.x, rhs.y2(), lhs.width, lhs.y2() - rhs.y2()));
    }

    let y1 = lhs.y.max(rhs.y);
    let y2 = lhs.y2().min(rhs.y2());
    if y2 > y1 {
        let height = y2 - y1;

        // left
        if rhs.x > lhs.x {
            out.push(Rect::new(lhs.x, y1, rhs.x - lhs.x, height));
        }

        // right
        if lhs.x2() > rhs.x2() {
            out.push(Rect::new(rhs.x2(), y1, lhs.x2() - rhs.x2(), height));
        }
    }

    out
}

impl<T: Coord> std::ops::Sub for Rect<T> {
    type Output = Fragments<T>;

    fn sub(self, rhs: Rect<T>) -> Fragments<T> {
        difference(&self, &rhs)
    }
}
