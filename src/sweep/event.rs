//! Sweep events and the queue that orders them.

use std::collections::BTreeSet;

use crate::{geom::Rect, num::Coord};

/// The identity of a rectangle that has been admitted into the sweep.
///
/// Throughout the sweep, we assign identities to rectangles, so that we may
/// consider rectangles as different even if they have the same coordinates.
/// Identities are handed out in increasing order and are never reused within
/// a single sweep.
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, serde::Serialize)]
pub struct RectId(pub u64);

impl std::fmt::Debug for RectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "r_{}", self.0)
    }
}

/// Whether the sweep-line is crossing the left or the right edge of a rectangle.
///
/// The declaration order matters: at equal horizontal positions, leave events
/// come before enter events. That way, a rectangle ending exactly where another
/// one starts is gone before the other one arrives, and they aren't mistaken for
/// overlapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub enum EventKind {
    /// The sweep-line is at the rectangle's right edge.
    Leave,
    /// The sweep-line is at the rectangle's left edge.
    Enter,
}

/// A boundary crossing of one rectangle.
///
/// Two events are equal if they have the same kind and belong to the same
/// rectangle instance (i.e. they have the same [`RectId`]); the coordinates
/// aren't compared, because ids are unique.
///
/// Events are ordered by their horizontal position, then by their kind
/// (leave before enter), then by the top of their rectangle, and finally by
/// id. This is a total order, so the sweep is deterministic.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct Event<T> {
    /// The rectangle whose edge is being crossed.
    pub rect: Rect<T>,
    /// Which edge.
    pub kind: EventKind,
    /// The rectangle's identity.
    pub id: RectId,
}

impl<T: Coord> Event<T> {
    /// The event of the sweep-line reaching the left edge of `rect`.
    pub fn enter(rect: Rect<T>, id: RectId) -> Self {
        Event {
            rect,
            kind: EventKind::Enter,
            id,
        }
    }

    /// The event of the sweep-line reaching the right edge of `rect`.
    pub fn leave(rect: Rect<T>, id: RectId) -> Self {
        Event {
            rect,
            kind: EventKind::Leave,
            id,
        }
    }

    /// The horizontal position of the sweep-line when this event happens.
    pub fn x(&self) -> T {
        match self.kind {
            EventKind::Enter => self.rect.x,
            EventKind::Leave => self.rect.x2(),
        }
    }
}

impl<T> PartialEq for Event<T> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.id == other.id
    }
}

impl<T> Eq for Event<T> {}

impl<T: Coord> Ord for Event<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.x(), self.kind, self.rect.y, self.id).cmp(&(
            other.x(),
            other.kind,
            other.rect.y,
            other.id,
        ))
    }
}

impl<T: Coord> PartialOrd for Event<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// The pending events, smallest first.
#[derive(Clone, Debug)]
pub struct EventQueue<T: Coord> {
    events: BTreeSet<Event<T>>,
    next_id: u64,
}

impl<T: Coord> Default for EventQueue<T> {
    fn default() -> Self {
        Self {
            events: BTreeSet::new(),
            next_id: 0,
        }
    }
}

impl<T: Coord> EventQueue<T> {
    /// Admits a rectangle into the sweep, by giving it a fresh id and
    /// queueing its enter and leave events.
    pub fn admit(&mut self, rect: Rect<T>) -> RectId {
        let id = RectId(self.next_id);
        self.next_id += 1;

        debug_assert!(!rect.is_empty(), "admitting empty {rect:?}");
        self.events.insert(Event::enter(rect, id));
        self.events.insert(Event::leave(rect, id));
        id
    }

    /// Removes and returns the smallest event.
    pub fn pop(&mut self) -> Option<Event<T>> {
        self.events.pop_first()
    }

    /// The number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Are there no more events?
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The number of rectangles admitted so far.
    pub fn admitted(&self) -> u64 {
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events<T: Coord + From<u8>>() -> [Event<T>; 10] {
        let r = |x: u8, y: u8, w: u8, h: u8| -> Rect<T> {
            Rect::new(x.into(), y.into(), w.into(), h.into())
        };
        [
            Event::enter(r(0, 0, 2, 1), RectId(0)),
            Event::enter(r(0, 1, 1, 1), RectId(1)),
            Event::leave(r(0, 1, 1, 1), RectId(1)),
            Event::enter(r(1, 1, 1, 1), RectId(2)),
            Event::enter(r(1, 2, 2, 1), RectId(3)),
            Event::leave(r(0, 0, 2, 1), RectId(0)),
            Event::leave(r(1, 1, 1, 1), RectId(2)),
            Event::enter(r(2, 1, 1, 1), RectId(4)),
            Event::leave(r(2, 1, 1, 1), RectId(4)),
            Event::leave(r(1, 2, 2, 1), RectId(3)),
        ]
    }

    fn check_ordering<T: Coord + From<u8>>() {
        let expected = events::<T>();
        let mut queue = BTreeSet::new();
        for e in expected.iter().rev() {
            queue.insert(*e);
        }

        for e in &expected {
            let popped = queue.pop_first().unwrap();
            assert_eq!(popped, *e);
            assert_eq!(popped.rect, e.rect);
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn ordering() {
        check_ordering::<i32>();
        check_ordering::<u32>();
        check_ordering::<i64>();
    }

    #[test]
    fn leave_before_enter() {
        let a = Rect::new(0, 0, 1, 1);
        let b = Rect::new(1, 0, 1, 1);
        assert!(Event::leave(a, RectId(0)) < Event::enter(b, RectId(1)));
        // Even if the entering rectangle is above.
        let c = Rect::new(1, -5, 1, 1);
        assert!(Event::leave(a, RectId(7)) < Event::enter(c, RectId(1)));
    }

    #[test]
    fn identical_rects_are_distinct() {
        let a = Rect::new(0, 0, 1, 1);
        let mut queue = EventQueue::default();
        let id0 = queue.admit(a);
        let id1 = queue.admit(a);
        assert_ne!(id0, id1);
        assert_eq!(queue.len(), 4);
        assert_eq!(queue.admitted(), 2);

        let first = queue.pop().unwrap();
        let second = queue.pop().unwrap();
        assert_eq!(first.kind, EventKind::Enter);
        assert_eq!(second.kind, EventKind::Enter);
        assert_eq!((first.id, second.id), (id0, id1));
        assert_eq!(queue.pop().unwrap(), Event::leave(a, id0));
        assert_eq!(queue.pop().unwrap(), Event::leave(a, id1));
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn debug_ids() {
        assert_eq!(format!("{:?}", RectId(12)), "r_12");
    }
}
