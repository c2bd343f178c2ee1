//! Frame driver - the morph state machine
//!
//! Owns all mutable animation state and advances it one tick at a time.
//! `next_frame` is the single per-frame entry point for the render layer;
//! the four reconfiguration operations are pushed from the input layer and
//! apply between ticks.

use std::array;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::arrangement::{self, Arrangement};
use super::easing::ease;
use super::sequencer::Sequencer;
use super::state::{AnimationConfig, DURATION_MIN, DURATION_STEP, Frame, FrameState};

/// The animation core: arrangements, traversal order, config and cycle state
pub struct Animation {
    seed: u64,
    arrangements: Vec<Arrangement>,
    sequencer: Sequencer,
    config: AnimationConfig,
    state: FrameState,
}

impl Animation {
    /// Create an animation over the built-in arrangement table with default
    /// config, shuffled by the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, AnimationConfig::default())
    }

    /// Create an animation over the built-in arrangement table
    pub fn with_config(seed: u64, config: AnimationConfig) -> Self {
        Self::with_table(seed, config, arrangement::load().to_vec())
    }

    fn with_table(seed: u64, config: AnimationConfig, arrangements: Vec<Arrangement>) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let sequencer = Sequencer::new(arrangements.len(), &mut rng);
        Self {
            seed,
            arrangements,
            sequencer,
            config,
            state: FrameState::default(),
        }
    }

    /// Advance one tick: blend the current and next arrangement at the eased
    /// cycle progress, then step the cycle counter, moving to the next pair
    /// when the cycle completes.
    pub fn next_frame(&mut self) -> Frame {
        let progress = self.state.frame_in_cycle as f32 / self.config.frame_count as f32;
        let eased = ease(progress, self.config.sharpness);

        let current = &self.arrangements[self.sequencer.current()];
        let next = &self.arrangements[self.sequencer.peek_next()];
        let circles = array::from_fn(|i| current.circles[i].lerp(&next.circles[i], eased));

        self.state.frame_in_cycle = (self.state.frame_in_cycle + 1) % self.config.frame_count;
        if self.state.frame_in_cycle == 0 {
            self.sequencer.advance();
        }

        Frame {
            circles,
            progress,
            eased,
            sharpness: self.config.sharpness,
        }
    }

    /// Lengthen the cycle by one step
    pub fn increase_duration(&mut self) {
        self.apply_duration(self.config.duration_secs + DURATION_STEP);
    }

    /// Shorten the cycle by one step; no-op at the floor
    pub fn decrease_duration(&mut self) {
        if self.config.duration_secs > DURATION_MIN {
            self.apply_duration(self.config.duration_secs - DURATION_STEP);
        }
    }

    fn apply_duration(&mut self, duration_secs: f32) {
        let old_count = self.config.frame_count;
        self.config.set_duration(duration_secs);
        let new_count = self.config.frame_count;
        // Rescale the cycle position so the morph continues from the same
        // relative point instead of jumping.
        self.state.frame_in_cycle =
            (self.state.frame_in_cycle as f32 / old_count as f32 * new_count as f32) as u32;
        log::debug!(
            "duration -> {:.2}s ({} ticks per cycle)",
            self.config.duration_secs,
            new_count
        );
    }

    /// Bend the easing curve harder; no-op at the top level
    pub fn increase_sharpness(&mut self) {
        self.apply_sharpness_level(self.config.sharpness_level + 1);
    }

    /// Relax the easing curve; no-op at the bottom level
    pub fn decrease_sharpness(&mut self) {
        self.apply_sharpness_level(self.config.sharpness_level - 1);
    }

    fn apply_sharpness_level(&mut self, level: i32) {
        self.config.set_sharpness_level(level);
        log::debug!(
            "sharpness level -> {} (exponent {:.3})",
            self.config.sharpness_level,
            self.config.sharpness
        );
    }

    /// Seed the traversal order was shuffled with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Number of arrangements in the table
    pub fn group_count(&self) -> usize {
        self.arrangements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::arrangement::Circle;

    fn single_group() -> Vec<Arrangement> {
        vec![Arrangement {
            circles: [
                Circle::new(-50.0, 0.0, 30.0),
                Circle::new(50.0, 0.0, 30.0),
                Circle::new(0.0, 50.0, 30.0),
                Circle::new(0.0, -50.0, 30.0),
            ],
        }]
    }

    #[test]
    fn test_cycle_boundary_advances_cursor_once() {
        let mut anim = Animation::new(42);
        anim.config.frame_count = 10;
        let start_cursor = anim.sequencer.cursor();

        for _ in 0..9 {
            anim.next_frame();
            assert_eq!(anim.sequencer.cursor(), start_cursor);
        }
        anim.next_frame();
        assert_eq!(anim.sequencer.cursor(), (start_cursor + 1) % anim.group_count());
        assert_eq!(anim.state.frame_in_cycle, 0);
    }

    #[test]
    fn test_cursor_wraps_at_end_of_order() {
        let mut anim = Animation::new(42);
        anim.config.frame_count = 1;
        let n = anim.group_count();
        for _ in 0..n {
            anim.next_frame();
        }
        assert_eq!(anim.sequencer.cursor(), 0);
    }

    #[test]
    fn test_duration_rescale_preserves_cycle_position() {
        let mut anim = Animation::with_config(42, AnimationConfig::new(2.0, 12));
        assert_eq!(anim.config.frame_count, 120);
        for _ in 0..60 {
            anim.next_frame();
        }
        assert_eq!(anim.state.frame_in_cycle, 60);

        anim.apply_duration(1.0);
        assert_eq!(anim.config.frame_count, 60);
        assert_eq!(anim.state.frame_in_cycle, 30);
    }

    #[test]
    fn test_full_cycle_scenario() {
        // 2.0s at 60Hz spans exactly 120 ticks
        let mut anim = Animation::with_config(7, AnimationConfig::new(2.0, 12));
        let start_cursor = anim.sequencer.cursor();
        for _ in 0..120 {
            anim.next_frame();
        }
        assert_eq!(anim.sequencer.cursor(), (start_cursor + 1) % anim.group_count());
        assert_eq!(anim.state.frame_in_cycle, 0);
    }

    #[test]
    fn test_cycle_start_shows_current_arrangement() {
        let mut anim = Animation::new(3);
        let expected = anim.arrangements[anim.sequencer.current()].circles;
        let frame = anim.next_frame();
        assert_eq!(frame.eased, 0.0);
        for (blended, want) in frame.circles.iter().zip(expected.iter()) {
            assert!((blended.center - want.center).length() < 1e-4);
            assert!((blended.radius - want.radius).abs() < 1e-4);
        }
    }

    #[test]
    fn test_new_cycle_starts_on_previous_target() {
        let mut anim = Animation::with_config(11, AnimationConfig::new(2.0, 12));
        let target = anim.arrangements[anim.sequencer.peek_next()].circles;
        for _ in 0..120 {
            anim.next_frame();
        }
        // First frame of the new cycle sits exactly on the arrangement the
        // previous cycle was morphing toward.
        let frame = anim.next_frame();
        for (blended, want) in frame.circles.iter().zip(target.iter()) {
            assert!((blended.center - want.center).length() < 1e-4);
            assert!((blended.radius - want.radius).abs() < 1e-4);
        }
    }

    #[test]
    fn test_decrease_duration_stops_at_floor() {
        let mut anim = Animation::with_config(5, AnimationConfig::new(DURATION_MIN, 12));
        let before = anim.config.duration_secs;
        anim.decrease_duration();
        assert_eq!(anim.config.duration_secs, before);
        assert!(anim.config.frame_count >= 1);
    }

    #[test]
    fn test_sharpness_saturates_at_bounds() {
        let mut anim = Animation::new(5);
        for _ in 0..40 {
            anim.increase_sharpness();
        }
        assert_eq!(anim.config.sharpness_level, crate::anim::SHARPNESS_LEVEL_MAX);
        for _ in 0..40 {
            anim.decrease_sharpness();
        }
        assert_eq!(anim.config.sharpness_level, crate::anim::SHARPNESS_LEVEL_MIN);
        assert_eq!(anim.config.sharpness, 1.0);
    }

    #[test]
    fn test_single_arrangement_self_morph_is_stable() {
        let mut anim =
            Animation::with_table(9, AnimationConfig::new(2.0, 12), single_group());
        let reference = anim.arrangements[0].circles;
        for _ in 0..300 {
            let frame = anim.next_frame();
            for (blended, want) in frame.circles.iter().zip(reference.iter()) {
                assert!(blended.center.is_finite());
                assert!((blended.center - want.center).length() < 1e-3);
                assert!((blended.radius - want.radius).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_same_seed_same_frames() {
        let mut a = Animation::new(1234);
        let mut b = Animation::new(1234);
        for _ in 0..200 {
            let fa = a.next_frame();
            let fb = b.next_frame();
            for (ca, cb) in fa.circles.iter().zip(fb.circles.iter()) {
                assert_eq!(ca, cb);
            }
        }
    }
}
