//! Quartet - a morphing animation of four-circle arrangements
//!
//! Core modules:
//! - `anim`: Deterministic animation core (arrangements, easing, sequencing)
//! - `renderer`: WebGPU rendering pipeline

pub mod anim;
pub mod renderer;

pub use anim::{Animation, Frame};

/// Animation configuration constants
pub mod consts {
    /// Fixed animation tick rate (ticks per second)
    pub const FRAME_RATE: u32 = 60;
    /// Duration of one tick in seconds
    pub const TICK_DT: f32 = 1.0 / FRAME_RATE as f32;
    /// Maximum ticks consumed per redraw to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Half-height of the orthographic viewport in world units
    pub const VIEW_SCALE: f32 = 200.0;

    /// Alpha of each circle fill (overlaps accumulate into a glow)
    pub const CIRCLE_ALPHA: f32 = 0.27;
    /// Tessellation segments per circle
    pub const CIRCLE_SEGMENTS: u32 = 200;

    /// Sample count for the easing-curve preview
    pub const CURVE_SAMPLES: u32 = 100;
    /// Width of the easing-curve preview in world units
    pub const CURVE_WIDTH: f32 = 80.0;
    /// Height of the easing-curve preview in world units
    pub const CURVE_HEIGHT: f32 = 40.0;
    /// Line width of the easing-curve preview in world units
    pub const CURVE_LINE_WIDTH: f32 = 1.5;
}
