//! World state and the simulation object model
//!
//! Everything the updater mutates lives here: the object sequence, the
//! player handle, and the monotonic id counter. The whole container is
//! in-memory and discarded at session end.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

pub type ObjectId = u32;

/// Discriminant for everything that exists in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    Player,
    Wall,
    RopePart,
}

impl ObjectKind {
    /// Stable tag used for sprite/color lookup in the draw adapter
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Player => "player",
            ObjectKind::Wall => "wall",
            ObjectKind::RopePart => "rope-part",
        }
    }
}

/// Player-only state, carried as a variant payload on the player object
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Desired velocity written from input each tick, independent of the
    /// physics velocity
    pub user_movement: Vec2,
    /// True iff the last collision resolution pushed the player up off a
    /// surface below it; recomputed every tick
    pub on_surface: bool,
}

/// A body in the world: the player, a wall tile, or a rope part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameObject {
    pub id: ObjectId,
    pub kind: ObjectKind,
    /// Center point, not a corner
    pub pos: Vec2,
    pub vel: Vec2,
    /// Full extent on each axis; half-extents are size / 2
    pub size: Vec2,
    /// Participates in collision resolution as an obstacle
    pub blocks_movement: bool,
    /// Velocity damped each tick
    pub affected_by_drag: bool,
    /// Present iff `kind` is `Player`
    pub player: Option<PlayerState>,
}

impl GameObject {
    fn player(id: ObjectId) -> Self {
        Self {
            id,
            kind: ObjectKind::Player,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: Vec2::splat(PLAYER_SIZE),
            blocks_movement: true,
            affected_by_drag: true,
            player: Some(PlayerState::default()),
        }
    }

    fn wall(id: ObjectId, pos: Vec2) -> Self {
        Self {
            id,
            kind: ObjectKind::Wall,
            pos,
            vel: Vec2::ZERO,
            size: Vec2::splat(WALL_SIZE),
            blocks_movement: true,
            affected_by_drag: false,
            player: None,
        }
    }

    fn rope_part(id: ObjectId, pos: Vec2, vel: Vec2, size: Vec2) -> Self {
        Self {
            id,
            kind: ObjectKind::RopePart,
            pos,
            vel,
            size,
            blocks_movement: false,
            affected_by_drag: false,
            player: None,
        }
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Corner bounds as (min, max)
    pub fn bounds(&self) -> (Vec2, Vec2) {
        (
            Vec2::new(self.min_x(), self.min_y()),
            Vec2::new(self.max_x(), self.max_y()),
        )
    }
}

/// The world container: the full object sequence, the player handle, and
/// the id counter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Spawn order; the player is always first
    objects: Vec<GameObject>,
    /// Index of the player within `objects` (single source of truth, no
    /// second live reference)
    player_index: usize,
    /// Next id to hand out; ids are never reused
    next_id: ObjectId,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create the session world: the player at the origin plus the fixed
    /// level layout
    pub fn new() -> Self {
        let mut state = Self {
            objects: Vec::new(),
            player_index: 0,
            next_id: 1,
            time_ticks: 0,
        };
        let id = state.next_object_id();
        state.objects.push(GameObject::player(id));
        state.build_level();
        state
    }

    /// Allocate a fresh object id
    fn next_object_id(&mut self) -> ObjectId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Static level layout: two long rows of wall tiles plus two floating
    /// single tiles. Deterministic, built once, never regenerated.
    fn build_level(&mut self) {
        let row_left = -1000.0;
        let row_top = 200.0;
        for row_y in [row_top, row_top - WALL_SIZE * 8.0] {
            for i in 0..50 {
                let x = row_left + i as f32 * WALL_SIZE;
                let id = self.next_object_id();
                self.objects.push(GameObject::wall(id, Vec2::new(x, row_y)));
            }
        }
        let id = self.next_object_id();
        self.objects.push(GameObject::wall(
            id,
            Vec2::new(-WALL_SIZE * 3.0, row_top - WALL_SIZE * 2.0),
        ));
        let id = self.next_object_id();
        self.objects.push(GameObject::wall(
            id,
            Vec2::new(-WALL_SIZE * 6.0, row_top - WALL_SIZE * 4.0),
        ));
    }

    /// Read-only view of the object sequence (spawn order, player first).
    /// This is the renderer's entire surface; no mutation path is exposed.
    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    pub(crate) fn objects_mut(&mut self) -> &mut [GameObject] {
        &mut self.objects
    }

    pub fn player_index(&self) -> usize {
        self.player_index
    }

    pub fn player(&self) -> &GameObject {
        &self.objects[self.player_index]
    }

    pub(crate) fn player_mut(&mut self) -> &mut GameObject {
        &mut self.objects[self.player_index]
    }

    /// Spawn a rope projectile and return its id.
    ///
    /// The caller provides a valid (non-zero-direction) velocity; aim
    /// normalization happens in the spawn adapter before this call.
    pub fn spawn_projectile(&mut self, pos: Vec2, vel: Vec2, size: Vec2) -> ObjectId {
        let id = self.next_object_id();
        self.objects.push(GameObject::rope_part(id, pos, vel, size));
        id
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl GameState {
    /// Minimal world for physics tests: just the player at the origin.
    pub(crate) fn empty_world() -> Self {
        let mut state = Self {
            objects: Vec::new(),
            player_index: 0,
            next_id: 1,
            time_ticks: 0,
        };
        let id = state.next_object_id();
        state.objects.push(GameObject::player(id));
        state
    }

    /// Append a wall tile with an explicit size.
    pub(crate) fn add_wall(&mut self, pos: Vec2, size: Vec2) -> ObjectId {
        let id = self.next_object_id();
        let mut wall = GameObject::wall(id, pos);
        wall.size = size;
        self.objects.push(wall);
        id
    }
}
