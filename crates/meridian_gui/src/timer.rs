//! Frame-driven cancelable timers.
//!
//! The widget runs entirely on the host's render loop; there is no runtime
//! to hand wall-clock timeouts to. Delayed transitions (popup settle,
//! rotation resume) are deadlines on the widget's accumulated clock,
//! checked once per tick. Every entry has an id so a superseded deadline
//! can be cancelled before it fires; firing is additionally re-validated by
//! the caller against its current state, so a stale timer can never act.

use std::time::Duration;

/// Handle for cancelling a scheduled entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Entry<K> {
    id: TimerId,
    deadline: Duration,
    kind: K,
}

/// Deadline queue keyed by a caller-supplied kind.
#[derive(Debug, Default)]
pub struct TimerQueue<K> {
    next_id: u64,
    entries: Vec<Entry<K>>,
}

impl<K> TimerQueue<K> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Schedules `kind` to fire `after` the current clock value `now`.
    pub fn schedule(&mut self, now: Duration, after: Duration, kind: K) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            deadline: now + after,
            kind,
        });
        id
    }

    /// Removes a pending entry. Returns `false` if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Pops every entry due at `now`, earliest deadline first.
    pub fn pop_due(&mut self, now: Duration) -> Vec<(TimerId, K)> {
        let mut due: Vec<Entry<K>> = Vec::new();
        let mut remaining: Vec<Entry<K>> = Vec::new();
        for e in self.entries.drain(..) {
            if e.deadline <= now {
                due.push(e);
            } else {
                remaining.push(e);
            }
        }
        self.entries = remaining;
        due.sort_by_key(|e| e.deadline);
        due.into_iter().map(|e| (e.id, e.kind)).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: u64 = 1;
    fn ms(v: u64) -> Duration {
        Duration::from_millis(v * MS)
    }

    #[test]
    fn fires_at_deadline_not_before() {
        let mut q = TimerQueue::new();
        q.schedule(ms(0), ms(100), "resume");
        assert!(q.pop_due(ms(99)).is_empty());
        let due = q.pop_due(ms(100));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].1, "resume");
        assert!(q.is_empty());
    }

    #[test]
    fn cancel_prevents_firing() {
        let mut q = TimerQueue::new();
        let id = q.schedule(ms(0), ms(50), "resume");
        assert!(q.cancel(id));
        assert!(q.pop_due(ms(100)).is_empty());
        assert!(!q.cancel(id));
    }

    #[test]
    fn due_entries_come_out_in_deadline_order() {
        let mut q = TimerQueue::new();
        q.schedule(ms(0), ms(300), "close-resume");
        q.schedule(ms(0), ms(100), "drag-resume");
        let due = q.pop_due(ms(400));
        assert_eq!(due.iter().map(|(_, k)| *k).collect::<Vec<_>>(), vec!["drag-resume", "close-resume"]);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut q = TimerQueue::new();
        let a = q.schedule(ms(0), ms(10), ());
        q.pop_due(ms(20));
        let b = q.schedule(ms(20), ms(10), ());
        assert_ne!(a, b);
        assert!(!q.is_pending(a));
    }
}
