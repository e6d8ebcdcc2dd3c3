use std::thread;
use std::time::{Duration, Instant};

use crate::session::Scheduler;

/// Scheduler that paces ticks by sleeping on the calling thread
///
/// Ticks are spaced from the previous tick's due time, not from the call to
/// `wait_for_tick`.
#[derive(Debug, Default)]
pub struct IntervalScheduler {
    interval: Option<Duration>,
    next_tick: Option<Instant>,
    ticks: u64,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks delivered since creation
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }
}

impl Scheduler for IntervalScheduler {
    fn start(&mut self, interval: Duration) {
        self.interval = Some(interval);
        self.next_tick = Some(Instant::now() + interval);
    }

    fn stop(&mut self) {
        self.interval = None;
        self.next_tick = None;
    }

    fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    fn wait_for_tick(&mut self) -> bool {
        let (Some(interval), Some(due)) = (self.interval, self.next_tick) else {
            return false;
        };

        let now = Instant::now();
        if due > now {
            thread::sleep(due - now);
        }
        self.next_tick = Some(due.max(now) + interval);
        self.ticks += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_scheduler_never_ticks() {
        let mut scheduler = IntervalScheduler::new();
        assert!(!scheduler.is_running());
        assert!(!scheduler.wait_for_tick());

        scheduler.start(Duration::ZERO);
        scheduler.stop();
        assert!(!scheduler.wait_for_tick());
        assert_eq!(scheduler.ticks(), 0);
    }

    #[test]
    fn test_ticks_are_paced() {
        let interval = Duration::from_millis(5);
        let mut scheduler = IntervalScheduler::new();
        scheduler.start(interval);
        assert_eq!(scheduler.interval(), Some(interval));

        let started = Instant::now();
        for _ in 0..3 {
            assert!(scheduler.wait_for_tick());
        }
        assert!(started.elapsed() >= interval * 2);
        assert_eq!(scheduler.ticks(), 3);
    }

    #[test]
    fn test_restart_changes_interval() {
        let mut scheduler = IntervalScheduler::new();
        scheduler.start(Duration::from_secs(60));
        scheduler.start(Duration::ZERO);
        assert!(scheduler.is_running());
        assert!(scheduler.wait_for_tick());
    }
}
