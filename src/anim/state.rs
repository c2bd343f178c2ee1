//! Animation configuration and per-tick state
//!
//! The only mutable state in the core lives here, owned by the
//! [`Animation`](super::Animation) driver. The render layer sees it only as
//! a by-value [`Frame`] snapshot.

use super::arrangement::{CIRCLES_PER_GROUP, Circle};
use super::easing::{SHARPNESS_LEVEL_MAX, SHARPNESS_LEVEL_MIN, sharpness_from_level};
use crate::consts::FRAME_RATE;

/// Shortest allowed cycle duration in seconds
pub const DURATION_MIN: f32 = 0.2;
/// Duration adjustment per input step in seconds
pub const DURATION_STEP: f32 = 0.05;
/// Startup cycle duration in seconds
pub const DEFAULT_DURATION: f32 = 2.7;
/// Startup sharpness control level
pub const DEFAULT_SHARPNESS_LEVEL: i32 = 12;

/// Runtime-tunable animation parameters with their derived quantities
#[derive(Debug, Clone, Copy)]
pub struct AnimationConfig {
    /// Seconds per morph cycle
    pub duration_secs: f32,
    /// Discrete sharpness control level in
    /// [`SHARPNESS_LEVEL_MIN`, `SHARPNESS_LEVEL_MAX`]
    pub sharpness_level: i32,
    /// Ticks per morph cycle, derived from `duration_secs`; never zero
    pub frame_count: u32,
    /// Easing exponent, derived from `sharpness_level`
    pub sharpness: f32,
}

impl AnimationConfig {
    /// Build a config, clamping both parameters to their bounds
    pub fn new(duration_secs: f32, sharpness_level: i32) -> Self {
        let duration_secs = duration_secs.max(DURATION_MIN);
        let sharpness_level = sharpness_level.clamp(SHARPNESS_LEVEL_MIN, SHARPNESS_LEVEL_MAX);
        Self {
            duration_secs,
            sharpness_level,
            frame_count: Self::frames_for(duration_secs),
            sharpness: sharpness_from_level(sharpness_level),
        }
    }

    /// Ticks spanned by a cycle of the given duration, truncated, floored at 1
    fn frames_for(duration_secs: f32) -> u32 {
        ((duration_secs * FRAME_RATE as f32) as u32).max(1)
    }

    /// Set a new duration (clamped) and recompute the frame count
    pub fn set_duration(&mut self, duration_secs: f32) {
        self.duration_secs = duration_secs.max(DURATION_MIN);
        self.frame_count = Self::frames_for(self.duration_secs);
    }

    /// Set a new sharpness level (clamped) and recompute the exponent
    pub fn set_sharpness_level(&mut self, level: i32) {
        self.sharpness_level = level.clamp(SHARPNESS_LEVEL_MIN, SHARPNESS_LEVEL_MAX);
        self.sharpness = sharpness_from_level(self.sharpness_level);
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION, DEFAULT_SHARPNESS_LEVEL)
    }
}

/// Position within the current morph cycle. The group cursor lives in the
/// [`Sequencer`](super::Sequencer).
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameState {
    /// Tick counter in [0, frame_count)
    pub frame_in_cycle: u32,
}

/// Read-only snapshot emitted to the render layer each tick
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    /// The four blended circles
    pub circles: [Circle; CIRCLES_PER_GROUP],
    /// Raw cycle progress in [0, 1)
    pub progress: f32,
    /// Eased cycle progress, places the marker on the curve preview
    pub eased: f32,
    /// Easing exponent in effect, shapes the curve preview
    pub sharpness: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_derivations() {
        let config = AnimationConfig::default();
        // 2.7s * 60Hz truncates to 162 ticks
        assert_eq!(config.frame_count, 162);
        assert!((config.sharpness - sharpness_from_level(12)).abs() < 1e-6);
    }

    #[test]
    fn test_duration_clamped_to_floor() {
        let config = AnimationConfig::new(0.01, 0);
        assert_eq!(config.duration_secs, DURATION_MIN);
        assert!(config.frame_count >= 1);
    }

    #[test]
    fn test_sharpness_level_clamped() {
        assert_eq!(AnimationConfig::new(1.0, 99).sharpness_level, SHARPNESS_LEVEL_MAX);
        assert_eq!(AnimationConfig::new(1.0, -99).sharpness_level, SHARPNESS_LEVEL_MIN);
    }

    #[test]
    fn test_set_duration_recomputes_frames() {
        let mut config = AnimationConfig::new(2.0, 0);
        assert_eq!(config.frame_count, 120);
        config.set_duration(1.0);
        assert_eq!(config.frame_count, 60);
    }
}
