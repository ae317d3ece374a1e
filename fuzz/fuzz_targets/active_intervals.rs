#![no_main]

use std::ops::Range;

use arbitrary::{Arbitrary, Unstructured};

use libfuzzer_sys::fuzz_target;
use rectsweeper::{
    sweep::{
        active::ActiveIntervals,
        event::{Event, RectId},
    },
    Rect,
};

#[derive(Arbitrary, Debug)]
enum Op {
    Insert { y: i16, height: u8 },
    Remove { idx: usize },
    Find { y: i16, height: u8 },
}

fn range(y: i16, height: u8) -> Range<i32> {
    let y = i32::from(y);
    y..(y + i32::from(height) + 1)
}

fn overlaps(a: &Range<i32>, b: &Range<i32>) -> bool {
    a.start < b.end && b.start < a.end
}

fn arbitrary_ops(mut u: Unstructured) -> Result<(), arbitrary::Error> {
    let len = u.arbitrary_len::<Op>()?;
    let mut vec: Vec<(Range<i32>, RectId)> = Vec::new();
    let mut active = ActiveIntervals::default();
    for id in 0..(len as u64) {
        let op: Op = u.arbitrary()?;
        match op {
            Op::Insert { y, height } => {
                let r = range(y, height);
                if !vec.iter().any(|(s, _)| overlaps(s, &r)) {
                    let rect = Rect::new(0, r.start, 1, r.end - r.start);
                    active.insert(Event::enter(rect, RectId(id)));
                    vec.push((r, RectId(id)));
                }
            }
            Op::Remove { idx } => {
                if !vec.is_empty() {
                    let (r, id) = vec.remove(idx % vec.len());
                    assert_eq!(active.remove(&r).map(|e| e.id), Some(id));
                }
            }
            Op::Find { y, height } => {
                let r = range(y, height);
                let found = active.find(&r);
                assert_eq!(found.is_some(), vec.iter().any(|(s, _)| overlaps(s, &r)));
                if let Some(ev) = found {
                    assert!(overlaps(&ev.rect.y_range(), &r));
                }
            }
        }
        active.check_invariants();
        assert_eq!(active.len(), vec.len());
    }
    Ok(())
}

fuzz_target!(|data: &[u8]| {
    let u = Unstructured::new(data);
    let _ = arbitrary_ops(u);
});
