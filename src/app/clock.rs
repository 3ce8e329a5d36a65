use std::time::{Duration, Instant};

use blocktris::config::{FRAME_COUNTER_WRAP, SOFT_DROP_GRACE_MS};

/// Decides on which frames the falling piece takes a soft drop: every
/// `interval` frames, and on every frame while soft drop is held.
pub struct DropClock {
    frame: u32,
    interval: u32,
    held_until: Option<Instant>,
}

impl DropClock {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: 0,
            interval: (fps / 2).max(1),
            held_until: None,
        }
    }

    /// Holds soft drop for a grace window; repeated presses extend it.
    pub fn hold_soft_drop(&mut self, now: Instant) {
        self.held_until = Some(now + Duration::from_millis(SOFT_DROP_GRACE_MS));
    }

    pub fn release_soft_drop(&mut self) {
        self.held_until = None;
    }

    pub fn soft_drop_held(&self, now: Instant) -> bool {
        self.held_until.is_some_and(|until| now < until)
    }

    /// Advances one frame; true when a drop is due.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.frame += 1;
        if self.frame > FRAME_COUNTER_WRAP {
            self.frame = 0;
        }
        self.frame % self.interval == 0 || self.soft_drop_held(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_every_half_second_of_frames() {
        let mut clock = DropClock::new(25);
        let now = Instant::now();
        let due: Vec<u32> = (1..=40).filter(|_| clock.tick(now)).collect();
        assert_eq!(due, vec![12, 24, 36]);
    }

    #[test]
    fn held_soft_drop_fires_every_frame_until_released() {
        let mut clock = DropClock::new(25);
        let now = Instant::now();
        clock.hold_soft_drop(now);
        assert!((0..5).all(|_| clock.tick(now)));
        clock.release_soft_drop();
        assert!(!clock.tick(now));
    }

    #[test]
    fn held_soft_drop_expires() {
        let mut clock = DropClock::new(25);
        let now = Instant::now();
        clock.hold_soft_drop(now);
        let later = now + Duration::from_millis(SOFT_DROP_GRACE_MS + 1);
        assert!(!clock.soft_drop_held(later));
        assert!(!clock.tick(later));
    }

    #[test]
    fn slow_rates_still_drop() {
        let mut clock = DropClock::new(1);
        assert!(clock.tick(Instant::now()));
    }
}
