// Periodic ball spawning

use std::time::Duration;

/// Adds balls on a fixed interval once play has started.
///
/// The manager never touches the ball list itself: `advance` reports how many
/// balls are due and the caller spawns them. It stays idle until `start` is
/// called (the host does that once the first ball is moving), and the
/// interval only runs while the game is not paused.
#[derive(Debug, Clone)]
pub struct SpawnManager {
    interval: Duration,
    started: bool,
    /// Time left until the next spawn; `None` while disarmed
    remaining: Option<Duration>,
}

impl SpawnManager {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            started: false,
            remaining: None,
        }
    }

    /// Begin spawning. Only the first call has any effect.
    pub fn start(&mut self, paused: bool) {
        if self.started {
            return;
        }
        self.started = true;
        if !paused {
            self.arm();
        }
    }

    pub fn pause(&mut self) {
        self.remaining = None;
    }

    /// Re-arm with a full interval after a pause
    pub fn resume(&mut self, paused: bool) {
        if !self.started {
            return;
        }
        if self.remaining.is_none() && !paused {
            self.arm();
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advance the timer by `dt` and return the number of balls due
    pub fn advance(&mut self, dt: Duration) -> usize {
        let Some(remaining) = self.remaining else {
            return 0;
        };
        if self.interval.is_zero() {
            return 0;
        }

        let mut due = 0;
        let mut left = dt;
        let mut remaining = remaining;
        while left >= remaining {
            left -= remaining;
            remaining = self.interval;
            due += 1;
        }
        self.remaining = Some(remaining - left);
        due
    }

    fn arm(&mut self) {
        self.remaining = Some(self.interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_secs(10);

    #[test]
    fn test_idle_until_started() {
        let mut spawner = SpawnManager::new(INTERVAL);
        assert_eq!(spawner.advance(Duration::from_secs(60)), 0);
        assert!(!spawner.is_started());
    }

    #[test]
    fn test_spawns_every_interval() {
        let mut spawner = SpawnManager::new(INTERVAL);
        spawner.start(false);

        assert_eq!(spawner.advance(Duration::from_secs(9)), 0);
        assert_eq!(spawner.advance(Duration::from_secs(1)), 1);
        assert_eq!(spawner.advance(Duration::from_secs(25)), 2);
        assert_eq!(spawner.advance(Duration::from_secs(5)), 1);
    }

    #[test]
    fn test_start_only_once() {
        let mut spawner = SpawnManager::new(INTERVAL);
        spawner.start(false);
        spawner.advance(Duration::from_secs(8));

        // A second start must not reset the countdown
        spawner.start(false);
        assert_eq!(spawner.advance(Duration::from_secs(2)), 1);
    }

    #[test]
    fn test_start_while_paused_stays_disarmed() {
        let mut spawner = SpawnManager::new(INTERVAL);
        spawner.start(true);

        assert!(spawner.is_started());
        assert!(!spawner.is_running());
        assert_eq!(spawner.advance(Duration::from_secs(30)), 0);

        spawner.resume(false);
        assert_eq!(spawner.advance(Duration::from_secs(10)), 1);
    }

    #[test]
    fn test_pause_and_resume_restart_interval() {
        let mut spawner = SpawnManager::new(INTERVAL);
        spawner.start(false);
        spawner.advance(Duration::from_secs(9));

        spawner.pause();
        assert_eq!(spawner.advance(Duration::from_secs(100)), 0);

        spawner.resume(false);
        // Fresh interval, the 9 seconds before the pause are forgotten
        assert_eq!(spawner.advance(Duration::from_secs(9)), 0);
        assert_eq!(spawner.advance(Duration::from_secs(1)), 1);
    }

    #[test]
    fn test_resume_before_start_is_ignored() {
        let mut spawner = SpawnManager::new(INTERVAL);
        spawner.resume(false);
        assert!(!spawner.is_running());
    }

    #[test]
    fn test_resume_while_still_paused() {
        let mut spawner = SpawnManager::new(INTERVAL);
        spawner.start(false);
        spawner.pause();
        spawner.resume(true);
        assert!(!spawner.is_running());
    }
}
