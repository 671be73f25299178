//! The spell switching animation.
//!
//! Switching spells starts a short timer. Its sign records the direction and
//! its magnitude counts down one step per game tick; render passes read it
//! together with the partial tick to interpolate smoothly.

/// Number of ticks the switching animation lasts.
pub const SWITCH_TICKS: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchDirection {
    Next,
    Previous,
}

/// Timer driving the switching animation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwitchAnimation {
    /// Positive while switching to the next spell, negative for the previous.
    timer: i32,
    /// Last game tick that advanced the timer.
    last_tick: Option<u64>,
}

impl SwitchAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart the animation in the given direction.
    pub fn play(&mut self, direction: SwitchDirection) {
        self.timer = match direction {
            SwitchDirection::Next => SWITCH_TICKS,
            SwitchDirection::Previous => -SWITCH_TICKS,
        };
    }

    /// Advance by one game tick.
    ///
    /// Only the first call for a given tick number counts, so the timer moves
    /// at most once per tick however often the host reports it. Returns
    /// whether the timer changed.
    pub fn tick(&mut self, game_tick: u64) -> bool {
        if self.last_tick == Some(game_tick) {
            return false;
        }
        self.last_tick = Some(game_tick);
        if self.timer == 0 {
            return false;
        }
        self.timer -= self.timer.signum();
        true
    }

    pub fn timer(&self) -> i32 {
        self.timer
    }

    pub fn is_playing(&self) -> bool {
        self.timer != 0
    }

    /// Signed progress in `[-1, 1]`; 0 when idle.
    pub fn progress(&self, partial_ticks: f32) -> f32 {
        if self.timer == 0 {
            return 0.0;
        }
        let elapsed = (SWITCH_TICKS - self.timer.abs()) as f32 + partial_ticks;
        self.timer.signum() as f32 * elapsed / SWITCH_TICKS as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_by_default() {
        let anim = SwitchAnimation::new();
        assert_eq!(anim.timer(), 0);
        assert!(!anim.is_playing());
        assert_eq!(anim.progress(0.7), 0.0);
    }

    #[test]
    fn play_sets_signed_timer() {
        let mut anim = SwitchAnimation::new();
        anim.play(SwitchDirection::Next);
        assert_eq!(anim.timer(), SWITCH_TICKS);
        anim.play(SwitchDirection::Previous);
        assert_eq!(anim.timer(), -SWITCH_TICKS);
    }

    #[test]
    fn decays_one_step_per_tick_to_zero() {
        let mut anim = SwitchAnimation::new();
        anim.play(SwitchDirection::Next);
        for (i, tick) in (100u64..100 + SWITCH_TICKS as u64).enumerate() {
            assert!(anim.tick(tick));
            assert_eq!(anim.timer(), SWITCH_TICKS - 1 - i as i32);
            assert!(anim.timer() >= 0);
        }
        assert_eq!(anim.timer(), 0);
        assert!(!anim.tick(200));
        assert_eq!(anim.timer(), 0);
    }

    #[test]
    fn backward_keeps_sign() {
        let mut anim = SwitchAnimation::new();
        anim.play(SwitchDirection::Previous);
        anim.tick(1);
        assert_eq!(anim.timer(), -3);
        anim.tick(2);
        anim.tick(3);
        anim.tick(4);
        assert_eq!(anim.timer(), 0);
        anim.tick(5);
        assert_eq!(anim.timer(), 0);
    }

    #[test]
    fn repeated_tick_number_counts_once() {
        let mut anim = SwitchAnimation::new();
        anim.play(SwitchDirection::Next);
        assert!(anim.tick(7));
        assert!(!anim.tick(7));
        assert!(!anim.tick(7));
        assert_eq!(anim.timer(), SWITCH_TICKS - 1);
        assert!(anim.tick(8));
        assert_eq!(anim.timer(), SWITCH_TICKS - 2);
    }

    #[test]
    fn progress_follows_timer_and_partial_ticks() {
        let mut anim = SwitchAnimation::new();
        anim.play(SwitchDirection::Next);
        assert_eq!(anim.progress(0.0), 0.0 / 4.0);
        assert_eq!(anim.progress(0.5), 0.125);
        anim.tick(1);
        anim.tick(2);
        assert_eq!(anim.progress(0.0), 0.5);

        anim.play(SwitchDirection::Previous);
        assert_eq!(anim.progress(0.5), -0.125);
    }
}
