//! Delayed-task queue on a virtual millisecond clock.
//!
//! Nothing in here sleeps. The host moves the clock forward (from
//! `requestAnimationFrame` in the browser, or by hand in tests) and pulls
//! every task that became due, in due-time order. Tasks scheduled for the same
//! instant come out in the order they were scheduled.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

struct Entry<T> {
    due_ms: u64,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due_ms == other.due_ms && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due_ms, self.seq).cmp(&(other.due_ms, other.seq))
    }
}

pub struct Scheduler<T> {
    now_ms: u64,
    next_seq: u64,
    queue: BinaryHeap<Reverse<Entry<T>>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            queue: BinaryHeap::new(),
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time. While a due task is being handled this is the
    /// task's due time, not the host time it was pulled at.
    #[inline]
    pub fn now(&self) -> u64 {
        self.now_ms
    }

    /// Schedule `task` to run `delay_ms` after the current virtual time.
    pub fn after(&mut self, delay_ms: u64, task: T) {
        let due_ms = self.now_ms.saturating_add(delay_ms);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Entry { due_ms, seq, task }));
    }

    /// Pop the earliest task due at or before `until_ms`, moving the clock to
    /// its due time. Returns `None` once nothing else is due; the caller then
    /// finishes with [`Scheduler::settle`].
    pub fn pop_due(&mut self, until_ms: u64) -> Option<T> {
        let due = self.queue.peek().map(|Reverse(e)| e.due_ms)?;
        if due > until_ms {
            return None;
        }
        let Reverse(entry) = self.queue.pop()?;
        self.now_ms = self.now_ms.max(entry.due_ms);
        Some(entry.task)
    }

    /// Move the clock to `until_ms` once every due task has been drained.
    /// The clock never runs backwards.
    pub fn settle(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drop every pending task. The clock keeps its value.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
