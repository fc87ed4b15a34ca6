//! Session clock: integer seconds, ticked by the front end
//!
//! The engine never schedules anything itself; the front end calls `tick`
//! once per wall-clock second and stops doing so on teardown. Once the
//! clock is stopped it stays stopped for the rest of the session.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClock {
    seconds: u32,
    running: bool,
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionClock {
    /// A fresh clock at zero, running
    pub fn new() -> Self {
        Self {
            seconds: 0,
            running: true,
        }
    }

    /// Advance one second; ignored once stopped
    pub fn tick(&mut self) {
        if self.running {
            self.seconds += 1;
        }
    }

    /// Freeze the clock permanently
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Format as minutes:seconds with the seconds zero-padded
    pub fn elapsed_string(&self) -> String {
        format!("{}:{:02}", self.seconds / 60, self.seconds % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_advance_one_second() {
        let mut clock = SessionClock::new();
        assert_eq!(clock.seconds(), 0);
        clock.tick();
        clock.tick();
        assert_eq!(clock.seconds(), 2);
    }

    #[test]
    fn no_tick_is_processed_once_stopped() {
        let mut clock = SessionClock::new();
        clock.tick();
        clock.stop();
        clock.tick();
        clock.tick();
        assert_eq!(clock.seconds(), 1);
        assert!(!clock.is_running());
    }

    #[test]
    fn formats_minutes_and_padded_seconds() {
        let mut clock = SessionClock::new();
        assert_eq!(clock.elapsed_string(), "0:00");
        for _ in 0..5 {
            clock.tick();
        }
        assert_eq!(clock.elapsed_string(), "0:05");
        for _ in 0..749 {
            clock.tick();
        }
        assert_eq!(clock.elapsed_string(), "12:34");
    }
}
