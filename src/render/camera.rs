//! Player-centered viewport math
//!
//! Pure world-to-screen mapping and visibility culling. The draw adapter
//! consumes this; the simulation never does.

use glam::Vec2;

use crate::consts::VIEWPORT_SIZE;
use crate::sim::GameObject;

/// A fixed-size view into the world, centered on a world point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World-space view center (the player's position)
    pub center: Vec2,
    /// View extent in world units; world units map 1:1 to canvas pixels
    pub viewport: Vec2,
}

impl Camera {
    /// The default square viewport centered on `center`
    pub fn centered_on(center: Vec2) -> Self {
        Self {
            center,
            viewport: Vec2::splat(VIEWPORT_SIZE),
        }
    }

    /// World coordinate of the top-left screen corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.viewport / 2.0
    }

    /// World coordinate of the bottom-right screen corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.viewport / 2.0
    }

    /// Map a world point to canvas pixels
    #[inline]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world - self.min()
    }

    /// Map a canvas point back to world space
    #[inline]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen + self.min()
    }

    /// Interval-overlap culling against the view rectangle
    pub fn is_visible(&self, obj: &GameObject) -> bool {
        let min = self.min();
        let max = self.max();
        min.x <= obj.max_x()
            && obj.min_x() <= max.x
            && min.y <= obj.max_y()
            && obj.min_y() <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    #[test]
    fn test_view_corners_follow_center() {
        let camera = Camera::centered_on(Vec2::new(100.0, -40.0));
        assert_eq!(camera.min(), Vec2::new(-300.0, -440.0));
        assert_eq!(camera.max(), Vec2::new(500.0, 360.0));
    }

    #[test]
    fn test_world_screen_round_trip() {
        let camera = Camera::centered_on(Vec2::new(100.0, -40.0));
        let world = Vec2::new(12.0, 34.0);
        let screen = camera.world_to_screen(world);
        assert_eq!(screen, Vec2::new(312.0, 474.0));
        assert_eq!(camera.screen_to_world(screen), world);
    }

    #[test]
    fn test_culling() {
        let state = GameState::new();
        let camera = Camera::centered_on(Vec2::ZERO);

        // The player itself is always in its own view
        assert!(camera.is_visible(state.player()));

        // Near wall row is visible, the far end of the row is not
        let near = state
            .objects()
            .iter()
            .find(|o| o.pos == Vec2::new(0.0, 200.0))
            .unwrap();
        let far = state
            .objects()
            .iter()
            .find(|o| o.pos == Vec2::new(-1000.0, 200.0))
            .unwrap();
        assert!(camera.is_visible(near));
        assert!(!camera.is_visible(far));
    }

    #[test]
    fn test_edge_touching_counts_as_visible() {
        let mut state = GameState::empty_world();
        // Left edge of the tile exactly on the right view edge
        state.add_wall(Vec2::new(425.0, 0.0), Vec2::splat(50.0));
        let camera = Camera::centered_on(Vec2::ZERO);
        let wall = &state.objects()[1];
        assert_eq!(wall.min_x(), camera.max().x);
        assert!(camera.is_visible(wall));
    }
}
