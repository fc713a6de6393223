//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (spawn order, player first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{intersects, overlap_x, overlap_y, resolve_player};
pub use state::{GameObject, GameState, ObjectId, ObjectKind, PlayerState};
pub use tick::{TickInput, tick};
