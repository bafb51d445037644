//! Deferred action queue
//!
//! Holds state changes that must wait for a visual effect to finish.
//! Time is virtual: the frame driver moves it forward with
//! [`Scheduler::advance_to`] and then drains whatever came due.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

struct Entry<A> {
    fire_at: u64,
    seq: u64,
    action: A,
}

impl<A> PartialEq for Entry<A> {
    fn eq(&self, other: &Self) -> bool {
        self.fire_at == other.fire_at && self.seq == other.seq
    }
}

impl<A> Eq for Entry<A> {}

impl<A> PartialOrd for Entry<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A> Ord for Entry<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.fire_at, self.seq).cmp(&(other.fire_at, other.seq))
    }
}

/// Timer queue keyed by absolute fire time, FIFO among equal times.
pub struct Scheduler<A> {
    now: u64,
    next_seq: u64,
    queue: BinaryHeap<Reverse<Entry<A>>>,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Scheduler<A> {
    pub fn new() -> Self {
        Scheduler {
            now: 0,
            next_seq: 0,
            queue: BinaryHeap::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Queue `action` to fire `delay_ms` after the current time.
    pub fn schedule(&mut self, delay_ms: u64, action: A) {
        let entry = Entry {
            fire_at: self.now.saturating_add(delay_ms),
            seq: self.next_seq,
            action,
        };
        self.next_seq += 1;
        self.queue.push(Reverse(entry));
    }

    /// Move virtual time forward. Time never runs backwards.
    pub fn advance_to(&mut self, tick: u64) {
        self.now = self.now.max(tick);
    }

    /// Take the earliest action that is due, if any.
    pub fn pop_due(&mut self) -> Option<A> {
        let due = self.next_due().is_some_and(|at| at <= self.now);
        if !due {
            return None;
        }
        self.queue.pop().map(|Reverse(entry)| entry.action)
    }

    /// Fire time of the earliest pending action.
    pub fn next_due(&self) -> Option<u64> {
        self.queue.peek().map(|Reverse(entry)| entry.fire_at)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(scheduler: &mut Scheduler<&'static str>) -> Vec<&'static str> {
        std::iter::from_fn(|| scheduler.pop_due()).collect()
    }

    #[test]
    fn nothing_fires_before_its_time() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(500, "impact");

        scheduler.advance_to(499);
        assert_eq!(scheduler.pop_due(), None);
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance_to(500);
        assert_eq!(scheduler.pop_due(), Some("impact"));
        assert!(scheduler.is_idle());
    }

    #[test]
    fn fires_in_time_order_then_insertion_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(500, "first-500");
        scheduler.schedule(300, "pose");
        scheduler.schedule(500, "second-500");

        scheduler.advance_to(1000);
        assert_eq!(drain(&mut scheduler), vec!["pose", "first-500", "second-500"]);
    }

    #[test]
    fn delays_are_relative_to_current_time() {
        let mut scheduler = Scheduler::new();
        scheduler.advance_to(1000);
        scheduler.schedule(500, "late");
        assert_eq!(scheduler.next_due(), Some(1500));

        scheduler.advance_to(1200);
        assert_eq!(scheduler.pop_due(), None);
    }

    #[test]
    fn time_does_not_run_backwards() {
        let mut scheduler: Scheduler<()> = Scheduler::new();
        scheduler.advance_to(100);
        scheduler.advance_to(50);
        assert_eq!(scheduler.now(), 100);
    }

    #[test]
    fn zero_delay_actions_fire_in_same_drain() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(0, "now");
        assert_eq!(scheduler.pop_due(), Some("now"));
    }
}
