//! The set of rectangles currently crossed by the sweep-line, indexed by vertical extent.

use std::{collections::BTreeMap, ops::Range};

use crate::num::Coord;

use super::event::Event;

#[derive(Clone, Debug)]
struct Entry<T> {
    end: T,
    event: Event<T>,
}

/// The "open" rectangles, keyed by their vertical extents.
///
/// The extents of the stored rectangles never overlap one another, so each
/// vertical position is owned by at most one rectangle. Entries are stored by
/// the start of their interval; because they're disjoint, the ends come out
/// sorted too, and an overlap query only needs to look at one entry.
///
/// All intervals are half-open.
#[derive(Clone, Debug)]
pub struct ActiveIntervals<T: Coord> {
    by_start: BTreeMap<T, Entry<T>>,
}

impl<T: Coord> Default for ActiveIntervals<T> {
    fn default() -> Self {
        Self {
            by_start: BTreeMap::new(),
        }
    }
}

impl<T: Coord> ActiveIntervals<T> {
    /// Finds a stored entry whose interval overlaps `range`.
    ///
    /// Touching isn't overlapping: `[0, 1)` and `[1, 2)` don't overlap.
    /// If there are several overlapping entries, the bottom-most one is returned.
    pub fn find(&self, range: &Range<T>) -> Option<&Event<T>> {
        debug_assert!(range.start < range.end, "empty query {range:?}");

        // The candidate is the last interval starting before our end. Any
        // interval before it ends before the candidate starts, so if the
        // candidate doesn't reach into our range then nothing does.
        let (_, entry) = self.by_start.range(..range.end).next_back()?;
        (entry.end > range.start).then_some(&entry.event)
    }

    /// Stores `event` under its rectangle's vertical extent.
    ///
    /// The extent must not overlap anything already stored: that would mean the
    /// caller failed to resolve an overlap.
    pub fn insert(&mut self, event: Event<T>) {
        let range = event.rect.y_range();
        debug_assert!(
            self.find(&range).is_none(),
            "{event:?} overlaps {:?}",
            self.find(&range)
        );

        self.by_start.insert(
            range.start,
            Entry {
                end: range.end,
                event,
            },
        );
    }

    /// Removes the entry stored under exactly `range`, returning it.
    pub fn remove(&mut self, range: &Range<T>) -> Option<Event<T>> {
        let entry = self.by_start.remove(&range.start)?;
        debug_assert!(
            entry.end == range.end,
            "removing {range:?}, but found {:?}",
            entry.event
        );
        Some(entry.event)
    }

    /// The number of stored entries.
    pub fn len(&self) -> usize {
        self.by_start.len()
    }

    /// Is the sweep-line crossing nothing?
    pub fn is_empty(&self) -> bool {
        self.by_start.is_empty()
    }

    /// Iterates over the stored intervals and their events, from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = (Range<T>, &Event<T>)> + '_ {
        self.by_start
            .iter()
            .map(|(start, entry)| (*start..entry.end, &entry.event))
    }

    /// Panics if the stored intervals are empty or overlap, or if they disagree
    /// with their rectangles.
    ///
    /// Used in tests, and when enabling slow-asserts.
    pub fn check_invariants(&self) {
        let mut prev_end: Option<T> = None;
        for (range, event) in self.iter() {
            assert!(range.start < range.end, "empty interval for {event:?}");
            assert_eq!(range, event.rect.y_range(), "stale interval for {event:?}");
            if let Some(prev_end) = prev_end {
                assert!(prev_end <= range.start, "overlapping interval for {event:?}");
            }
            prev_end = Some(range.end);
        }
    }
}
