//! Logical-clock timer queue
//!
//! Replaces engine-side delayed callbacks. Timers fire in due-time order;
//! timers due at the same instant fire in the order they were scheduled.

use serde::{Deserialize, Serialize};

/// What a timer does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerAction {
    /// Activate one pooled star at a random world edge
    ActivateCollectible,
    /// Drop a bomb on the far side of the player
    SpawnHazard,
}

pub type TimerId = u64;

/// A pending timer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timer {
    pub id: TimerId,
    pub action: TimerAction,
    /// Absolute logical time of the next firing (ms)
    pub due_ms: u64,
    /// Gap between repeated firings (ms)
    pub interval_ms: u64,
    /// Firings left after the next one
    pub repeats_left: u32,
}

/// A timer firing handed back to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub id: TimerId,
    pub action: TimerAction,
    pub at_ms: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scheduler {
    now_ms: u64,
    timers: Vec<Timer>,
    next_id: TimerId,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time (ms)
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending(&self) -> &[Timer] {
        &self.timers
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Fire `action` once, `delay_ms` from now
    pub fn schedule_once(&mut self, delay_ms: u64, action: TimerAction) -> TimerId {
        self.schedule_repeating(delay_ms, 0, action)
    }

    /// Fire `action` after `delay_ms`, then `repeat` more times at the same interval
    pub fn schedule_repeating(
        &mut self,
        delay_ms: u64,
        repeat: u32,
        action: TimerAction,
    ) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            action,
            due_ms: self.now_ms + delay_ms,
            interval_ms: delay_ms,
            repeats_left: repeat,
        });
        id
    }

    /// Drop a pending timer. Returns false if it already finished.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    /// Drop every pending timer
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Pop the earliest timer due at or before `until_ms`.
    ///
    /// The clock moves to the firing time so that anything scheduled while
    /// handling it is measured from that instant. Returns `None` once nothing
    /// else is due; call [`Scheduler::advance_to`] afterwards to finish the step.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Fired> {
        // Ids grow monotonically, so (due, id) is a total, stable order
        let idx = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= until_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.id))
            .map(|(i, _)| i)?;

        let timer = &mut self.timers[idx];
        let fired = Fired {
            id: timer.id,
            action: timer.action,
            at_ms: timer.due_ms,
        };
        self.now_ms = self.now_ms.max(fired.at_ms);

        if timer.repeats_left > 0 {
            timer.repeats_left -= 1;
            timer.due_ms += timer.interval_ms.max(1);
        } else {
            self.timers.remove(idx);
        }

        Some(fired)
    }

    /// Move the clock forward (never backward)
    pub fn advance_to(&mut self, ms: u64) {
        self.now_ms = self.now_ms.max(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(scheduler: &mut Scheduler, until_ms: u64) -> Vec<Fired> {
        let mut fired = Vec::new();
        while let Some(f) = scheduler.pop_due(until_ms) {
            fired.push(f);
        }
        scheduler.advance_to(until_ms);
        fired
    }

    #[test]
    fn test_repeating_fires_repeat_plus_one_times() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_repeating(5000, 3, TimerAction::ActivateCollectible);

        let fired = drain(&mut scheduler, 60_000);
        let times: Vec<u64> = fired.iter().map(|f| f.at_ms).collect();
        assert_eq!(times, vec![5000, 10_000, 15_000, 20_000]);
        assert!(scheduler.is_empty());
        assert_eq!(scheduler.now_ms(), 60_000);
    }

    #[test]
    fn test_not_due_yet() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_once(3000, TimerAction::SpawnHazard);
        assert!(drain(&mut scheduler, 2999).is_empty());
        assert_eq!(drain(&mut scheduler, 3000).len(), 1);
    }

    #[test]
    fn test_fires_in_due_then_schedule_order() {
        let mut scheduler = Scheduler::new();
        let late = scheduler.schedule_once(4000, TimerAction::ActivateCollectible);
        let tie_a = scheduler.schedule_once(3000, TimerAction::ActivateCollectible);
        let tie_b = scheduler.schedule_once(3000, TimerAction::SpawnHazard);

        let ids: Vec<TimerId> = drain(&mut scheduler, 5000).iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![tie_a, tie_b, late]);
    }

    #[test]
    fn test_schedule_relative_to_firing_time() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_once(1000, TimerAction::ActivateCollectible);

        let fired = scheduler.pop_due(10_000).unwrap();
        assert_eq!(fired.at_ms, 1000);
        assert_eq!(scheduler.now_ms(), 1000);

        // Scheduled from inside the firing: due at 1000 + 500
        scheduler.schedule_once(500, TimerAction::SpawnHazard);
        let next = scheduler.pop_due(10_000).unwrap();
        assert_eq!(next.at_ms, 1500);
    }

    #[test]
    fn test_cancel_and_clear() {
        let mut scheduler = Scheduler::new();
        let a = scheduler.schedule_once(100, TimerAction::ActivateCollectible);
        scheduler.schedule_repeating(100, 5, TimerAction::ActivateCollectible);

        assert!(scheduler.cancel(a));
        assert!(!scheduler.cancel(a));
        assert_eq!(scheduler.pending().len(), 1);

        scheduler.clear();
        assert!(drain(&mut scheduler, 10_000).is_empty());
    }

    #[test]
    fn test_clock_never_rewinds() {
        let mut scheduler = Scheduler::new();
        scheduler.advance_to(500);
        scheduler.advance_to(100);
        assert_eq!(scheduler.now_ms(), 500);
    }
}
