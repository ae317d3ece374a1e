//! The sweep-line implementation.
//!
//! We sweep a vertical line from left to right across the rectangles. Each
//! rectangle produces two events: one when the line reaches its left edge
//! ("enter") and one when the line reaches its right edge ("leave"). While it's
//! between the two, the rectangle is "active" and owns its vertical extent in
//! an [`ActiveIntervals`](active::ActiveIntervals) index.
//!
//! When a rectangle enters and its vertical extent is already (partly) owned by
//! some active rectangle, the two of them overlap. We replace both of them by
//! their intersection and the leftover pieces of each, and send all the new
//! rectangles back into the sweep: a leftover piece might overlap some third
//! rectangle. When a rectangle leaves without having been replaced, nothing
//! overlapped it and it goes to the output.
//!
//! The main entry point is [`Splitter`].

use std::collections::HashSet;

use arrayvec::ArrayVec;

use crate::{
    geom::{collision_box, difference, Rect},
    num::Coord,
    Error,
};

#[doc(hidden)]
pub mod active;
pub mod event;

use active::ActiveIntervals;
use event::{Event, EventKind, EventQueue, RectId};

/// Counters describing the work done by a single sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct SweepStats {
    /// The number of events popped from the queue, including the stale ones
    /// belonging to rectangles that had already been split.
    pub events: usize,
    /// The number of overlaps that were found and resolved.
    pub splits: usize,
    /// The number of rectangles in the output.
    pub emitted: usize,
}

/// Decomposes overlapping rectangles into disjoint ones.
///
/// ```
/// use rectsweeper::{Rect, Splitter};
///
/// let out = Splitter::new()
///     .split([Rect::new(0, 0, 2, 2), Rect::new(1, 1, 2, 2)])
///     .unwrap();
/// assert_eq!(out.iter().map(Rect::area).sum::<i32>(), 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Splitter {
    emit_trailing_fragments: bool,
}

impl Default for Splitter {
    fn default() -> Self {
        Self {
            emit_trailing_fragments: true,
        }
    }
}

impl Splitter {
    /// A splitter with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Controls what happens to leftover pieces that are entirely behind the sweep-line.
    ///
    /// When an overlap is resolved, the active rectangle might have a leftover
    /// piece to the left of the entering one. That piece ends exactly where the
    /// overlap begins, so nothing still to come can overlap it. If this is
    /// `true` (the default), such pieces go straight to the output. If `false`,
    /// they go back into the sweep like every other piece (and then come out
    /// unchanged).
    ///
    /// Both settings produce valid decompositions, but the two decompositions
    /// are not necessarily the same.
    pub fn emit_trailing_fragments(mut self, emit: bool) -> Self {
        self.emit_trailing_fragments = emit;
        self
    }

    /// Decomposes `rects` into pairwise non-intersecting rectangles covering
    /// the same area.
    ///
    /// See [`Splitter::split_into`] for the details.
    pub fn split<T: Coord>(
        &self,
        rects: impl IntoIterator<Item = Rect<T>>,
    ) -> Result<Vec<Rect<T>>, Error> {
        let mut out = Vec::new();
        self.split_into(rects, |r| out.push(r))?;
        Ok(out)
    }

    /// Decomposes `rects` into pairwise non-intersecting rectangles, handing
    /// each one to `sink` as soon as it's final.
    ///
    /// The output covers exactly the same area as the input, and has the same
    /// bounding box. Input rectangles with zero width or height cover no area
    /// and are ignored. If any input rectangle has a negative width or height,
    /// nothing is emitted and an error is returned.
    ///
    /// The output is deterministic: the same input (in the same order) always
    /// produces the same output, in the same order.
    pub fn split_into<T: Coord>(
        &self,
        rects: impl IntoIterator<Item = Rect<T>>,
        mut sink: impl FnMut(Rect<T>),
    ) -> Result<SweepStats, Error> {
        let rects = rects.into_iter().collect::<Vec<_>>();
        if let Some(index) = rects.iter().position(|r| !r.is_well_formed()) {
            return Err(Error::NegativeSize { index });
        }

        let _span = tracing::debug_span!("sweep", inputs = rects.len()).entered();

        let mut sweep = Sweep::new(self.emit_trailing_fragments);
        for r in rects.into_iter().filter(|r| !r.is_empty()) {
            sweep.events.admit(r);
        }
        sweep.run(&mut sink);

        tracing::debug!(
            events = sweep.stats.events,
            splits = sweep.stats.splits,
            emitted = sweep.stats.emitted,
            "sweep finished"
        );
        Ok(sweep.stats)
    }
}

/// The state of a single sweep.
#[derive(Debug)]
struct Sweep<T: Coord> {
    events: EventQueue<T>,
    active: ActiveIntervals<T>,
    /// Rectangles that were split while they still had a pending leave event.
    /// Their ids are forgotten once the leave event shows up.
    invalidated: HashSet<RectId>,
    emit_trailing_fragments: bool,
    stats: SweepStats,
}

impl<T: Coord> Sweep<T> {
    fn new(emit_trailing_fragments: bool) -> Self {
        Self {
            events: EventQueue::default(),
            active: ActiveIntervals::default(),
            invalidated: HashSet::new(),
            emit_trailing_fragments,
            stats: SweepStats::default(),
        }
    }

    fn run(&mut self, sink: &mut impl FnMut(Rect<T>)) {
        while let Some(ev) = self.events.pop() {
            self.stats.events += 1;

            if self.invalidated.contains(&ev.id) {
                // Enter always comes before leave, so after the leave event
                // this id will never come up again.
                if ev.kind == EventKind::Leave {
                    self.invalidated.remove(&ev.id);
                }
                continue;
            }

            match ev.kind {
                EventKind::Enter => self.enter(ev, sink),
                EventKind::Leave => self.leave(ev, sink),
            }

            #[cfg(feature = "slow-asserts")]
            self.check_invariants();
        }

        debug_assert!(self.active.is_empty());
        debug_assert!(self.invalidated.is_empty());
    }

    fn enter(&mut self, ev: Event<T>, sink: &mut impl FnMut(Rect<T>)) {
        let found = self.active.find(&ev.rect.y_range()).copied();
        match found {
            Some(other) => self.resolve(ev, other, sink),
            None => self.active.insert(ev),
        }
    }

    fn leave(&mut self, ev: Event<T>, sink: &mut impl FnMut(Rect<T>)) {
        let removed = self.active.remove(&ev.rect.y_range());
        debug_assert_eq!(removed.map(|e| e.id), Some(ev.id));
        self.emit(ev.rect, sink);
    }

    /// Replaces the entering rectangle of `ev` and the active rectangle of
    /// `other` by their intersection and their leftovers.
    fn resolve(&mut self, ev: Event<T>, other: Event<T>, sink: &mut impl FnMut(Rect<T>)) {
        let collision = collision_box(&ev.rect, &other.rect);
        debug_assert!(!collision.is_empty(), "{ev:?} doesn't overlap {other:?}");

        let mut fragments = ArrayVec::<Rect<T>, 8>::new();
        fragments.extend(difference(&ev.rect, &other.rect));
        fragments.extend(difference(&other.rect, &ev.rect));

        tracing::trace!(
            entering = ?ev.id,
            active = ?other.id,
            ?collision,
            fragments = fragments.len(),
            "split"
        );

        self.events.admit(collision);
        for frag in fragments {
            if self.emit_trailing_fragments && frag.x2() <= collision.x {
                self.emit(frag, sink);
            } else {
                self.events.admit(frag);
            }
        }

        // The entering rectangle was never made active, but both of them
        // still have leave events in the queue.
        self.invalidated.insert(ev.id);
        self.invalidated.insert(other.id);
        self.active.remove(&other.rect.y_range());
        self.stats.splits += 1;
    }

    fn emit(&mut self, rect: Rect<T>, sink: &mut impl FnMut(Rect<T>)) {
        self.stats.emitted += 1;
        sink(rect);
    }

    #[cfg(feature = "slow-asserts")]
    fn check_invariants(&self) {
        self.active.check_invariants();
        for (_, ev) in self.active.iter() {
            assert!(!self.invalidated.contains(&ev.id), "{ev:?} is stale");
        }
    }
}
