// Use-case level outputs of the stage: read-only snapshots for render/minimap collaborators.

use crate::domain::{Actor, ActorId, AiState, Obstacle, Projectile, Rect, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Running,
    /// The player died on tick `at_tick`; the camera stays where it was.
    GameOver { at_tick: u64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActorSnapshot {
    pub id: ActorId,
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    pub health: i32,
    pub max_health: i32,
    /// Aim indicator offset from the actor (player only).
    pub aim_indicator: Option<Vec2>,
    /// AI state (enemies only).
    pub ai: Option<AiState>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectileSnapshot {
    pub owner: ActorId,
    pub position: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleSnapshot {
    pub rect: Rect,
    pub homebase_segments: Option<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StageSnapshot {
    pub tick: u64,
    pub status: StageStatus,
    pub player: Option<ActorSnapshot>,
    pub enemies: Vec<ActorSnapshot>,
    pub projectiles: Vec<ProjectileSnapshot>,
    pub obstacles: Vec<ObstacleSnapshot>,
    pub camera: Vec2,
}

impl From<&Actor> for ActorSnapshot {
    fn from(a: &Actor) -> Self {
        let (width, height) = a.extent();
        Self {
            id: a.id,
            position: a.position,
            width,
            height,
            health: a.health(),
            max_health: a.max_health(),
            aim_indicator: a.as_player().map(|p| p.aim_indicator),
            ai: a.as_enemy().map(|e| e.ai),
        }
    }
}

impl From<&Projectile> for ProjectileSnapshot {
    fn from(p: &Projectile) -> Self {
        Self {
            owner: p.owner,
            position: p.position,
            radius: p.radius,
        }
    }
}

impl From<&Obstacle> for ObstacleSnapshot {
    fn from(o: &Obstacle) -> Self {
        Self {
            rect: o.rect,
            homebase_segments: o.visible_segments(),
        }
    }
}
