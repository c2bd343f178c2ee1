//! Deterministic animation core
//!
//! All animation logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (consumed once, for the startup shuffle)
//! - No rendering or platform dependencies

pub mod arrangement;
pub mod driver;
pub mod easing;
pub mod sequencer;
pub mod state;

pub use arrangement::{Arrangement, CIRCLES_PER_GROUP, Circle, GROUP_COUNT};
pub use driver::Animation;
pub use easing::{SHARPNESS_LEVEL_MAX, SHARPNESS_LEVEL_MIN, ease, sharpness_from_level};
pub use sequencer::Sequencer;
pub use state::{AnimationConfig, Frame, FrameState};
