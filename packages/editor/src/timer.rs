//! One-shot deferred callbacks driven by the host's clock
//!
//! The editor never sleeps. The host reports the current time (as a
//! duration since any fixed epoch) and pending timers fire once it has
//! passed their deadline.

use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OneShotTimer {
    deadline: Option<Duration>,
}

impl OneShotTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer, replacing any pending deadline
    pub fn schedule(&mut self, now: Duration, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Disarm and return `true` if the deadline has passed
    pub fn fire_if_due(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
