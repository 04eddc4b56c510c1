//! Virtual-time timer queue.
//!
//! The engine never sleeps or spawns. The host reports how much time has
//! passed and the queue hands back due timers one at a time, earliest
//! first, so each handler runs to completion before the next one fires.
//!
//! A repeating timer that falls due several times before the next other
//! timer fires once with a `count` of the periods it covered. Huge steps
//! therefore cost one firing per timer, not one per period.
//!
//! ```
//! use std::time::Duration;
//! use memory_match::core::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! let tick = timers.schedule_repeating(Duration::from_secs(1), "tick").unwrap();
//! timers.schedule_once(Duration::from_millis(1500), "once");
//!
//! let until = Duration::from_secs(2);
//! let mut fired = Vec::new();
//! while let Some(timer) = timers.pop_due(until) {
//!     fired.push((timer.event, timer.count));
//! }
//! assert_eq!(fired, vec![("tick", 1), ("once", 1), ("tick", 1)]);
//!
//! assert!(timers.cancel(tick));
//! assert!(timers.is_empty());
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Timers re-armed past the end of representable time park here and
/// never fire again.
const PARKED: Duration = Duration::MAX;

/// Handle to a scheduled timer. Needed to cancel it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerHandle(u64);

impl TimerHandle {
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// A timer handed back by [`TimerQueue::pop_due`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fired<E> {
    pub handle: TimerHandle,
    pub event: E,
    /// Periods covered by this firing. Always 1 for one-shot timers.
    pub count: u64,
}

#[derive(Clone, Debug)]
struct Scheduled<E> {
    handle: TimerHandle,
    due: Duration,
    /// `Some` for repeating timers.
    period: Option<Duration>,
    event: E,
}

impl<E> Scheduled<E> {
    fn key(&self) -> (Duration, TimerHandle) {
        (self.due, self.handle)
    }

    fn is_due(&self, until: Duration) -> bool {
        self.due <= until && self.due < PARKED
    }
}

/// Pending one-shot and repeating timers on a virtual clock.
#[derive(Clone, Debug)]
pub struct TimerQueue<E> {
    now: Duration,
    next_handle: u64,
    entries: Vec<Scheduled<E>>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_handle: 0,
            entries: Vec::new(),
        }
    }
}

impl<E: Clone> TimerQueue<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Fire `event` once, `delay` from now.
    pub fn schedule_once(&mut self, delay: Duration, event: E) -> TimerHandle {
        self.push(delay, None, event)
    }

    /// Fire `event` every `period`, first at `now + period`.
    ///
    /// Returns `None` and schedules nothing if `period` is zero.
    pub fn schedule_repeating(&mut self, period: Duration, event: E) -> Option<TimerHandle> {
        if period.is_zero() {
            return None;
        }
        Some(self.push(period, Some(period), event))
    }

    fn push(&mut self, delay: Duration, period: Option<Duration>, event: E) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push(Scheduled {
            handle,
            due: self.now.saturating_add(delay),
            period,
            event,
        });
        handle
    }

    /// Cancel a timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        self.entries.len() != before
    }

    #[must_use]
    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pop the earliest timer due at or before `until`.
    ///
    /// Ties fire in scheduling order. A repeating timer covers every
    /// period due before the next other timer (or up to `until`) and is
    /// re-armed after the last one. The clock moves to the last covered
    /// due time. Returns `None` once nothing is due; the clock is then
    /// left where it is, call [`advance_to`](Self::advance_to) to finish
    /// the step.
    pub fn pop_due(&mut self, until: Duration) -> Option<Fired<E>> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_due(until))
            .min_by_key(|(_, e)| e.key())
            .map(|(i, _)| i)?;

        let (due, handle) = self.entries[idx].key();

        let Some(period) = self.entries[idx].period else {
            let entry = self.entries.swap_remove(idx);
            self.now = self.now.max(due);
            return Some(Fired {
                handle,
                event: entry.event,
                count: 1,
            });
        };

        // The next other timer bounds the batch; it fires after any period
        // due strictly before it, or at the same instant but scheduled later
        let next_other = self
            .entries
            .iter()
            .filter(|e| e.handle != handle && e.is_due(until))
            .map(Scheduled::key)
            .min();
        let count = match next_other {
            Some((other_due, other_handle)) => {
                periods_within(due, period, other_due, handle < other_handle)
            }
            None => periods_within(due, period, until, true),
        };

        let entry = &mut self.entries[idx];
        self.now = self.now.max(offset(due, period, count - 1));
        entry.due = offset(due, period, count);

        Some(Fired {
            handle,
            event: entry.event.clone(),
            count,
        })
    }

    /// Move the clock forward to `time`. Never moves it back.
    pub fn advance_to(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }
}

/// How many of `first, first + period, ...` lie before `bound`, counting
/// `bound` itself when `inclusive`. At least one: `first` is already due.
fn periods_within(first: Duration, period: Duration, bound: Duration, inclusive: bool) -> u64 {
    let span = bound.saturating_sub(first).as_nanos();
    let period = period.as_nanos();
    let whole = span / period;
    let count = if inclusive || span % period != 0 {
        whole + 1
    } else {
        whole
    };
    u64::try_from(count.max(1)).unwrap_or(u64::MAX)
}

/// `start + period * n`, parked when it runs past `Duration::MAX`.
fn offset(start: Duration, period: Duration, n: u64) -> Duration {
    period
        .as_nanos()
        .checked_mul(u128::from(n))
        .and_then(|step| step.checked_add(start.as_nanos()))
        .and_then(|nanos| {
            let secs = u64::try_from(nanos / NANOS_PER_SEC).ok()?;
            // Remainder is below one billion
            Some(Duration::new(secs, (nanos % NANOS_PER_SEC) as u32))
        })
        .unwrap_or(PARKED)
}
