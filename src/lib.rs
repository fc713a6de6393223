//! Ropebox - a 2D platformer physics sandbox
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, world state)
//! - `math`: Pure 2D geometry shared by the sim and the view adapters
//! - `render`: Camera math and the canvas-2D draw adapter
//! - `settings`: User preferences persisted in LocalStorage

pub mod math;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (50 ms per tick)
    pub const TICK_DT: f32 = 0.05;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Added to the player's vertical velocity each tick (+y is down)
    pub const GRAVITY: f32 = 100.0;
    /// Per-tick exponential damping factor for drag-affected objects
    pub const DRAG_FACTOR: f32 = 0.9;
    /// Upward impulse applied while jumping off a surface
    pub const JUMP_IMPULSE: f32 = 1000.0;
    /// Speed of user-directed movement (units/s per active axis)
    pub const MOVE_SPEED: f32 = 300.0;
    /// Collision resolver iteration bound per tick
    pub const MAX_COLLISION_PASSES: u32 = 5;

    /// Player body extent (square)
    pub const PLAYER_SIZE: f32 = 100.0;
    /// Wall tile extent (square)
    pub const WALL_SIZE: f32 = 50.0;

    /// Rope projectile extent (square)
    pub const PROJECTILE_SIZE: f32 = 20.0;
    /// Rope projectile launch speed
    pub const PROJECTILE_SPEED: f32 = 1000.0;
    /// Distance from the player center at which projectiles appear
    pub const PROJECTILE_SPAWN_OFFSET: f32 = 50.0;

    /// Square viewport edge length; world units map 1:1 to canvas pixels
    pub const VIEWPORT_SIZE: f32 = 800.0;
}
