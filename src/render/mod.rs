//! View adapters: camera math plus the canvas-2D painter
//!
//! Strictly read-only over the world state; no mutation path back into
//! the simulation.

pub mod camera;
#[cfg(target_arch = "wasm32")]
pub mod draw;

pub use camera::Camera;
