use crate::domain::Vec2;

/// Screen and world extents the camera has to reconcile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub screen_width: f32,
    pub screen_height: f32,
    pub world_width: f32,
    pub world_height: f32,
}

/// World offset that centers `focus` on screen without showing anything past the world edges.
///
/// Each axis is bounded to `[screen - world, 0]`.
pub fn camera_offset(viewport: Viewport, focus: Vec2) -> Vec2 {
    let x = viewport.screen_width / 2.0 - focus.x;
    let y = viewport.screen_height / 2.0 - focus.y;
    Vec2::new(
        x.min(0.0).max(viewport.screen_width - viewport.world_width),
        y.min(0.0).max(viewport.screen_height - viewport.world_height),
    )
}
