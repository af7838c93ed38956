use crate::domain::{Rect, Vec2};
use crate::use_cases::{ObstacleSnapshot, StageSnapshot, Viewport};

pub const MINIMAP_SIZE: f32 = 120.0;

/// What the minimap draws for one frame, in minimap pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimapFrame {
    /// Hidden (None) once the player is gone.
    pub player_dot: Option<Vec2>,
    pub camera_rect: Option<Rect>,
}

/// Scales world state down to a square minimap.
///
/// The scale comes from the world width only, so non-square worlds are squashed vertically
/// the same way the on-screen minimap has always been drawn.
#[derive(Debug, Clone)]
pub struct Minimap {
    viewport: Viewport,
    scale: f32,
    obstacles: Vec<Rect>,
}

impl Minimap {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            scale: MINIMAP_SIZE / viewport.world_width,
            obstacles: Vec::new(),
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Called once at setup; obstacles never move afterwards.
    pub fn set_obstacles(&mut self, obstacles: &[ObstacleSnapshot]) {
        self.obstacles = obstacles
            .iter()
            .map(|o| {
                Rect::new(
                    o.rect.x * self.scale,
                    o.rect.y * self.scale,
                    o.rect.width * self.scale,
                    o.rect.height * self.scale,
                )
            })
            .collect();
    }

    pub fn obstacles(&self) -> &[Rect] {
        &self.obstacles
    }

    pub fn update(&self, snapshot: &StageSnapshot) -> MinimapFrame {
        let Some(player) = &snapshot.player else {
            return MinimapFrame {
                player_dot: None,
                camera_rect: None,
            };
        };

        MinimapFrame {
            player_dot: Some(Vec2::new(
                player.position.x * self.scale,
                player.position.y * self.scale,
            )),
            camera_rect: Some(Rect::new(
                -snapshot.camera.x * self.scale,
                -snapshot.camera.y * self.scale,
                self.viewport.screen_width * self.scale,
                self.viewport.screen_height * self.scale,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ActorId, Vec2};
    use crate::use_cases::{ActorSnapshot, StageStatus};

    fn viewport() -> Viewport {
        Viewport {
            screen_width: 1200.0,
            screen_height: 800.0,
            world_width: 2400.0,
            world_height: 2400.0,
        }
    }

    fn snapshot(player: Option<Vec2>, camera: Vec2) -> StageSnapshot {
        StageSnapshot {
            tick: 1,
            status: StageStatus::Running,
            player: player.map(|position| ActorSnapshot {
                id: ActorId::PLAYER,
                position,
                width: 26.0,
                height: 37.0,
                health: 4,
                max_health: 4,
                aim_indicator: Some(Vec2::ZERO),
                ai: None,
            }),
            enemies: vec![],
            projectiles: vec![],
            obstacles: vec![],
            camera,
        }
    }

    #[test]
    fn when_obstacles_are_set_then_they_are_scaled() {
        let mut minimap = Minimap::new(viewport());

        minimap.set_obstacles(&[ObstacleSnapshot {
            rect: Rect::new(200.0, 400.0, 100.0, 20.0),
            homebase_segments: None,
        }]);

        assert_eq!(minimap.scale(), 0.05);
        assert_eq!(minimap.obstacles(), &[Rect::new(10.0, 20.0, 5.0, 1.0)]);
    }

    #[test]
    fn when_player_is_present_then_dot_and_camera_rect_are_shown() {
        let minimap = Minimap::new(viewport());

        let frame = minimap.update(&snapshot(
            Some(Vec2::new(1000.0, 600.0)),
            Vec2::new(-400.0, -200.0),
        ));

        assert_eq!(frame.player_dot, Some(Vec2::new(50.0, 30.0)));
        assert_eq!(frame.camera_rect, Some(Rect::new(20.0, 10.0, 60.0, 40.0)));
    }

    #[test]
    fn when_player_is_absent_then_everything_is_hidden() {
        let minimap = Minimap::new(viewport());

        let frame = minimap.update(&snapshot(None, Vec2::new(-400.0, -200.0)));

        assert_eq!(frame.player_dot, None);
        assert_eq!(frame.camera_rect, None);
    }
}
