//! AABB overlap math and the player depenetration resolver
//!
//! The tricky part of the sandbox: after a tick of movement the player can
//! overlap several wall tiles at once. Resolution is a greedy
//! one-contact-at-a-time scheme: pick the most-overlapping obstacle, push
//! the player out along the shallower axis, recompute, repeat until
//! separated or the pass bound is reached. It is a discrete depenetration,
//! not a contact solve: no momentum, no friction, no multi-body stacking.

use crate::consts::MAX_COLLISION_PASSES;
use crate::sim::state::{GameObject, GameState};

/// Overlap depth on the x axis; positive means the extents overlap.
#[inline]
pub fn overlap_x(a: &GameObject, b: &GameObject) -> f32 {
    (a.size.x + b.size.x) / 2.0 - (a.pos.x - b.pos.x).abs()
}

/// Overlap depth on the y axis; positive means the extents overlap.
#[inline]
pub fn overlap_y(a: &GameObject, b: &GameObject) -> f32 {
    (a.size.y + b.size.y) / 2.0 - (a.pos.y - b.pos.y).abs()
}

/// Two boxes intersect iff they overlap on both axes.
pub fn intersects(a: &GameObject, b: &GameObject) -> bool {
    overlap_x(a, b) > 0.0 && overlap_y(a, b) > 0.0
}

/// Depenetrate the player from every blocking object, up to
/// `MAX_COLLISION_PASSES` passes.
///
/// Grounding is recomputed here each tick: the flag is set iff some pass
/// pushed the player upward off an obstacle below it. Residual overlap
/// after the pass bound is left for the next tick, never raised.
pub fn resolve_player(state: &mut GameState) {
    let player_index = state.player_index();
    if let Some(ps) = state.player_mut().player.as_mut() {
        ps.on_surface = false;
    }

    for _ in 0..MAX_COLLISION_PASSES {
        let Some(obstacle_index) = most_overlapping(state, player_index) else {
            break;
        };

        let obstacle = &state.objects()[obstacle_index];
        let obstacle_pos = obstacle.pos;
        let x_overlap = overlap_x(state.player(), obstacle);
        let y_overlap = overlap_y(state.player(), obstacle);

        let player = state.player_mut();
        if x_overlap < y_overlap {
            // Shallower horizontally: slide out sideways
            player.vel.x = 0.0;
            if player.pos.x < obstacle_pos.x {
                player.pos.x -= x_overlap;
            } else {
                // Equal centers fall through here and push right
                player.pos.x += x_overlap;
            }
        } else {
            player.vel.y = 0.0;
            if player.pos.y < obstacle_pos.y {
                // Obstacle below (+y is down): push up and ground
                player.pos.y -= y_overlap;
                if let Some(ps) = player.player.as_mut() {
                    ps.on_surface = true;
                }
            } else {
                player.pos.y += y_overlap;
            }
        }
    }
}

/// Index of the blocking object whose overlap sum with the player is
/// largest. The sum tie-breaks toward boxes penetrating on both axes over
/// one deep axis alone; exact ties keep the earliest in sequence order.
pub(crate) fn most_overlapping(state: &GameState, player_index: usize) -> Option<usize> {
    let player = state.player();
    let mut best: Option<(usize, f32)> = None;
    for (i, obj) in state.objects().iter().enumerate() {
        if i == player_index || !obj.blocks_movement {
            continue;
        }
        let x = overlap_x(player, obj);
        let y = overlap_y(player, obj);
        if x <= 0.0 || y <= 0.0 {
            continue;
        }
        let total = x + y;
        if best.map_or(true, |(_, b)| total > b) {
            best = Some((i, total));
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn no_blocking_overlap(state: &GameState) -> bool {
        let player = state.player();
        state
            .objects()
            .iter()
            .skip(1)
            .filter(|o| o.blocks_movement)
            .all(|o| !intersects(player, o))
    }

    #[test]
    fn test_overlap_depths() {
        let mut state = GameState::empty_world();
        state.add_wall(Vec2::new(60.0, 10.0), Vec2::splat(50.0));
        let player = &state.objects()[0];
        let wall = &state.objects()[1];
        // Half extents 50 + 25 = 75 on both axes
        assert_eq!(overlap_x(player, wall), 15.0);
        assert_eq!(overlap_y(player, wall), 65.0);
        assert!(intersects(player, wall));
        // Symmetric in argument order
        assert_eq!(overlap_x(wall, player), 15.0);
    }

    #[test]
    fn test_edge_touching_is_not_intersecting() {
        let mut state = GameState::empty_world();
        state.add_wall(Vec2::new(75.0, 0.0), Vec2::splat(50.0));
        let player = &state.objects()[0];
        let wall = &state.objects()[1];
        assert_eq!(overlap_x(player, wall), 0.0);
        assert!(!intersects(player, wall));
    }

    #[test]
    fn test_resolve_pushes_up_and_grounds() {
        let mut state = GameState::empty_world();
        // Floor tile just below the player's lower edge
        state.add_wall(Vec2::new(0.0, 70.0), Vec2::splat(50.0));
        state.player_mut().vel = Vec2::new(0.0, 90.0);

        resolve_player(&mut state);

        let player = state.player();
        // y overlap was 75 - 70 = 5, x overlap 75: y is shallower
        assert_eq!(player.pos.y, -5.0);
        assert_eq!(player.vel.y, 0.0);
        assert!(player.player.unwrap().on_surface);
        assert!(no_blocking_overlap(&state));
    }

    #[test]
    fn test_resolve_ceiling_push_is_not_grounded() {
        let mut state = GameState::empty_world();
        state.add_wall(Vec2::new(0.0, -70.0), Vec2::splat(50.0));
        state.player_mut().vel = Vec2::new(0.0, -90.0);

        resolve_player(&mut state);

        let player = state.player();
        assert_eq!(player.pos.y, 5.0);
        assert_eq!(player.vel.y, 0.0);
        assert!(!player.player.unwrap().on_surface);
    }

    #[test]
    fn test_resolve_sideways_keeps_vertical_velocity() {
        let mut state = GameState::empty_world();
        state.add_wall(Vec2::new(70.0, 0.0), Vec2::splat(50.0));
        state.player_mut().vel = Vec2::new(50.0, 80.0);

        resolve_player(&mut state);

        let player = state.player();
        assert_eq!(player.pos.x, -5.0);
        assert_eq!(player.vel.x, 0.0);
        assert_eq!(player.vel.y, 80.0);
        assert!(!player.player.unwrap().on_surface);
    }

    #[test]
    fn test_equal_centers_push_right() {
        let mut state = GameState::empty_world();
        // Tall pillar sharing the player's center: x overlap (100) is
        // shallower than y overlap (200), and the x tie pushes +x
        state.add_wall(Vec2::ZERO, Vec2::new(100.0, 300.0));

        resolve_player(&mut state);

        assert_eq!(state.player().pos.x, 100.0);
        assert_eq!(state.player().pos.y, 0.0);
    }

    #[test]
    fn test_deepest_sum_selected() {
        let mut state = GameState::empty_world();
        // Corner graze: small overlap on both axes
        state.add_wall(Vec2::new(70.0, 70.0), Vec2::splat(50.0));
        // Deep centered hit: much larger overlap sum
        state.add_wall(Vec2::new(0.0, 60.0), Vec2::splat(50.0));

        let picked = most_overlapping(&state, 0).unwrap();
        assert_eq!(state.objects()[picked].pos, Vec2::new(0.0, 60.0));
    }

    #[test]
    fn test_overlap_sum_tie_keeps_first() {
        let mut state = GameState::empty_world();
        // Mirror-image obstacles with identical overlap sums
        state.add_wall(Vec2::new(-60.0, 0.0), Vec2::splat(50.0));
        state.add_wall(Vec2::new(60.0, 0.0), Vec2::splat(50.0));

        let picked = most_overlapping(&state, 0).unwrap();
        assert_eq!(picked, 1);
    }

    #[test]
    fn test_non_blocking_objects_ignored() {
        let mut state = GameState::empty_world();
        state.spawn_projectile(Vec2::ZERO, Vec2::new(100.0, 0.0), Vec2::splat(20.0));

        assert!(most_overlapping(&state, 0).is_none());

        let before = state.player().pos;
        resolve_player(&mut state);
        assert_eq!(state.player().pos, before);
    }

    #[test]
    fn test_multi_tile_floor_converges() {
        let mut state = GameState::empty_world();
        // Player sunk into a seam between two floor tiles
        state.add_wall(Vec2::new(-25.0, 72.0), Vec2::splat(50.0));
        state.add_wall(Vec2::new(25.0, 72.0), Vec2::splat(50.0));
        state.player_mut().vel = Vec2::new(0.0, 60.0);

        resolve_player(&mut state);

        assert!(no_blocking_overlap(&state));
        assert!(state.player().player.unwrap().on_surface);
        assert_eq!(state.player().vel.y, 0.0);
    }

    #[test]
    fn test_pass_bound_leaves_residual_quietly() {
        let mut state = GameState::empty_world();
        // Pincer the player cannot escape: the gap between the pillars is
        // narrower than the player, so passes alternate without converging
        state.add_wall(Vec2::new(-60.0, 0.0), Vec2::new(50.0, 300.0));
        state.add_wall(Vec2::new(60.0, 0.0), Vec2::new(50.0, 300.0));

        resolve_player(&mut state);

        // Still overlapping after the bound; deferred, not an error
        assert!(!no_blocking_overlap(&state));
    }
}
