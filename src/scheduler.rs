use std::time::Duration;

/// Handle returned when a timer is registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Repeat {
    Once,
    Every(Duration),
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    id: TimerId,
    due: Duration,
    repeat: Repeat,
}

/// Timer queue against an externally supplied clock.
///
/// Time is a `Duration` since an arbitrary epoch chosen by the caller. Timers
/// due at the same instant fire in registration order, and a repeating timer
/// keeps its original place in that order every time it is rescheduled.
#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    entries: Vec<Entry>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-shot timer firing `delay` after `now`
    pub fn set_timeout(&mut self, now: Duration, delay: Duration) -> TimerId {
        self.insert(now + delay, Repeat::Once)
    }

    /// Repeating timer first firing `period` after `now`.
    /// A zero period is bumped to one millisecond so the queue always drains.
    pub fn set_interval(&mut self, now: Duration, period: Duration) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        self.insert(now + period, Repeat::Every(period))
    }

    /// Returns false if the timer had already fired (one-shot) or was cancelled
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Next instant the timer will fire, if it is still pending
    pub fn due(&self, id: TimerId) -> Option<Duration> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.due)
    }

    /// Pop the earliest timer due at or before `now`. Repeating timers are
    /// pushed forward by one period instead of being removed, so calling this
    /// in a loop catches up on every missed firing.
    pub fn pop_due(&mut self, now: Duration) -> Option<TimerId> {
        let (idx, entry) = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= now)
            .min_by_key(|(_, e)| (e.due, e.id))
            .map(|(idx, e)| (idx, *e))?;

        match entry.repeat {
            Repeat::Once => {
                self.entries.swap_remove(idx);
            }
            Repeat::Every(period) => {
                self.entries[idx].due = entry.due + period;
            }
        }

        Some(entry.id)
    }

    fn insert(&mut self, due: Duration, repeat: Repeat) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, due, repeat });
        id
    }
}
