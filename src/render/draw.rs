//! Canvas-2D draw adapter
//!
//! A thin painter over a read-only view of the world: clear, cull, one
//! filled rectangle per visible object, plus the optional aim overlay.
//! Nothing here feeds back into the simulation.

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::Camera;
use crate::math::segment_hits_aabb;
use crate::settings::Settings;
use crate::sim::{GameState, ObjectKind};

fn fill_color(kind: ObjectKind) -> &'static str {
    match kind {
        ObjectKind::Player => "#e4572e",
        ObjectKind::Wall => "#4f5d75",
        ObjectKind::RopePart => "#ffc914",
    }
}

/// Paint one frame. `aim` is the cursor position in canvas pixels, used
/// for the aim overlay when enabled.
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    state: &GameState,
    settings: &Settings,
    aim: Option<Vec2>,
) {
    let camera = Camera::centered_on(state.player().pos);
    ctx.clear_rect(
        0.0,
        0.0,
        camera.viewport.x as f64,
        camera.viewport.y as f64,
    );

    for obj in state.objects() {
        if !camera.is_visible(obj) {
            continue;
        }
        let top_left = camera.world_to_screen(Vec2::new(obj.min_x(), obj.min_y()));
        ctx.set_fill_style_str(fill_color(obj.kind));
        ctx.fill_rect(
            top_left.x as f64,
            top_left.y as f64,
            obj.size.x as f64,
            obj.size.y as f64,
        );
        if settings.outline_objects {
            ctx.set_stroke_style_str("#2d3142");
            ctx.stroke_rect(
                top_left.x as f64,
                top_left.y as f64,
                obj.size.x as f64,
                obj.size.y as f64,
            );
        }
    }

    if settings.show_aim_line {
        if let Some(cursor) = aim {
            draw_aim_overlay(ctx, state, &camera, cursor);
        }
    }
}

/// Aim overlay: a line from the player to the cursor, outlining every
/// visible wall the aim segment crosses.
fn draw_aim_overlay(
    ctx: &CanvasRenderingContext2d,
    state: &GameState,
    camera: &Camera,
    cursor: Vec2,
) {
    let player_pos = state.player().pos;
    let cursor_world = camera.screen_to_world(cursor);

    for obj in state.objects() {
        if obj.kind != ObjectKind::Wall || !camera.is_visible(obj) {
            continue;
        }
        let (min, max) = obj.bounds();
        if segment_hits_aabb(player_pos, cursor_world, min, max) {
            let top_left = camera.world_to_screen(min);
            ctx.set_stroke_style_str("#ffc914");
            ctx.stroke_rect(
                top_left.x as f64,
                top_left.y as f64,
                obj.size.x as f64,
                obj.size.y as f64,
            );
        }
    }

    let start = camera.world_to_screen(player_pos);
    ctx.begin_path();
    ctx.set_stroke_style_str("#ef8354");
    ctx.move_to(start.x as f64, start.y as f64);
    ctx.line_to(cursor.x as f64, cursor.y as f64);
    ctx.stroke();
}
