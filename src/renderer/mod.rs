//! WebGPU rendering module
//!
//! Turns the per-tick [`Frame`](crate::anim::Frame) snapshot into triangle
//! geometry and draws it with flat alpha blending.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
