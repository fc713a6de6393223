//! Fixed timestep simulation tick
//!
//! Advances the world deterministically. The step order is load-bearing:
//! input, gravity, drag, integration, user-movement overlay, collision
//! resolution. Each step reads state the previous one wrote.

use glam::Vec2;

use super::collision;
use super::state::GameState;
use crate::consts::*;

/// Input snapshot for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Desired movement velocity, ±`MOVE_SPEED` per active axis.
    /// Horizontal only in the current control scheme; vertical intent is
    /// expressed through `jump`.
    pub movement: Vec2,
    /// True while a jump control is held
    pub jump: bool,
}

/// Advance the world by one fixed timestep.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;

    apply_input(state, input);
    apply_gravity(state);
    apply_drag(state);
    integrate(state, dt);
    apply_user_movement(state, dt);
    collision::resolve_player(state);
}

/// Store the movement intent and trigger the jump impulse.
///
/// Jumping is level-triggered, not edge-triggered: the impulse re-applies
/// on every tick the control is held while the player is grounded.
fn apply_input(state: &mut GameState, input: &TickInput) {
    let player = state.player_mut();
    let Some(ps) = player.player.as_mut() else {
        return;
    };
    ps.user_movement = input.movement;
    if input.jump && ps.on_surface {
        player.vel.y -= JUMP_IMPULSE;
    }
}

/// Constant per-tick acceleration. Applies to the player only; spawned
/// projectiles fly ballistically.
fn apply_gravity(state: &mut GameState) {
    state.player_mut().vel.y += GRAVITY;
}

/// Per-tick exponential damping for flagged objects.
fn apply_drag(state: &mut GameState) {
    for obj in state.objects_mut() {
        if obj.affected_by_drag {
            obj.vel *= DRAG_FACTOR;
        }
    }
}

/// Semi-implicit Euler: velocity already carries this tick's gravity and
/// drag before positions move.
fn integrate(state: &mut GameState, dt: f32) {
    for obj in state.objects_mut() {
        let vel = obj.vel;
        obj.pos += vel * dt;
    }
}

/// User movement rides on top of the physics displacement as an
/// instantaneous velocity, neither damped nor accelerated.
fn apply_user_movement(state: &mut GameState, dt: f32) {
    let player = state.player_mut();
    if let Some(ps) = player.player {
        player.pos += ps.user_movement * dt;
    }
}
