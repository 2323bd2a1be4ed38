//! Fixed-period tick scheduling
//!
//! The engine only knows how to take one step; [`TickDriver`] decides when.
//! It is armed while the game runs and disarmed otherwise, and re-arming
//! restarts the period so a pause never leaves a backlog of ticks behind.

use std::future;
use std::time::Duration;
use tokio::time::{Interval, MissedTickBehavior, interval};

use crate::game::Phase;

pub struct TickDriver {
    interval: Interval,
    armed: bool,
}

impl TickDriver {
    /// Create a disarmed driver. Must be called inside a tokio runtime.
    pub fn new(period: Duration) -> Self {
        let mut interval = interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self {
            interval,
            armed: false,
        }
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Start ticking one full period from now
    pub fn arm(&mut self) {
        if !self.armed {
            self.interval.reset();
            self.armed = true;
        }
    }

    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Arm while running, disarm in every other phase
    pub fn sync(&mut self, phase: Phase) {
        if phase == Phase::Running {
            self.arm();
        } else {
            self.disarm();
        }
    }

    /// Resolve at the next tick; never resolves while disarmed
    pub async fn tick(&mut self) {
        if self.armed {
            self.interval.tick().await;
        } else {
            future::pending::<()>().await;
        }
    }
}
