use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

struct Entry<A> {
    due: Duration,
    seq: u64,
    action: A,
}

impl<A> PartialEq for Entry<A> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<A> Eq for Entry<A> {}

impl<A> PartialOrd for Entry<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A> Ord for Entry<A> {
    // Reversed so the max-heap pops the earliest entry first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Ordered set of one-shot actions keyed by an absolute due time.
///
/// Entries fire exactly once, earliest first; entries sharing a due time fire
/// in the order they were scheduled. There is no cancellation. Time is
/// whatever the caller's clock says, so a virtual clock drives it in tests.
pub struct Timeline<A> {
    pending: BinaryHeap<Entry<A>>,
    next_seq: u64,
}

impl<A> Default for Timeline<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Timeline<A> {
    pub fn new() -> Self {
        Self {
            pending: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn schedule(&mut self, due: Duration, action: A) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Entry { due, seq, action });
    }

    /// Remove and return the earliest entry whose due time is `<= now`.
    ///
    /// Callers loop on this, so an action that schedules a follow-up already
    /// due is still picked up within the same poll.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, A)> {
        if self.pending.peek()?.due > now {
            return None;
        }
        self.pending.pop().map(|e| (e.due, e.action))
    }

    /// Due time of the next pending entry, if any.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.peek().map(|e| e.due)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
