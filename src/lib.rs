#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

#[cfg(any(test, feature = "arbitrary"))]
pub mod arbitrary;
#[cfg(feature = "debug-svg")]
pub mod debug_svg;
mod geom;
pub mod measure;
mod num;
pub mod sweep;

#[cfg(feature = "generators")]
pub mod generators;

pub use geom::{collision_box, difference, Fragments, Rect};
pub use num::Coord;
pub use sweep::{Splitter, SweepStats};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The input rectangles were faulty.
pub enum Error {
    /// One of the inputs had a negative width or height.
    NegativeSize {
        /// The position of the first bad rectangle in the input.
        index: usize,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NegativeSize { index } => {
                write!(f, "input rectangle {index} has a negative width or height")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Decomposes a collection of possibly-overlapping rectangles into
/// pairwise non-intersecting rectangles covering exactly the same area.
///
/// This uses the default [`Splitter`] configuration; see there for details
/// and other options.
pub fn split<T: Coord>(rects: impl IntoIterator<Item = Rect<T>>) -> Result<Vec<Rect<T>>, Error> {
    Splitter::new().split(rects)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_squares() {
        let output = split([Rect::new(0, 0, 2, 2), Rect::new(1, 1, 2, 2)]).unwrap();
        assert_eq!(output.len(), 5);
        assert!(!measure::any_intersection(&output));
        assert_eq!(measure::sum_areas(&output), 7);
    }

    #[test]
    fn error_message() {
        let err = split([Rect::new(0, 0, 1, 1), Rect::new(5, 5, -1, 1)]).unwrap_err();
        assert_eq!(err, Error::NegativeSize { index: 1 });
        assert_eq!(
            err.to_string(),
            "input rectangle 1 has a negative width or height"
        );
    }
}
