// Serializable DTOs for render and minimap collaborators.
// Domain snapshots stay serde-free; everything that leaves the process goes through here.

use crate::domain::{AiState, StageEvent};
use crate::use_cases::{
    ActorSnapshot, ObstacleSnapshot, ProjectileSnapshot, StageSnapshot, StageStatus,
};
use serde::Serialize;

/// Full stage snapshot for one tick.
#[derive(Debug, Clone, Serialize)]
pub struct StageSnapshotDto {
    pub tick: u64,
    pub status: StageStatusDto,
    pub player: Option<ActorDto>,
    pub enemies: Vec<ActorDto>,
    pub projectiles: Vec<ProjectileDto>,
    pub obstacles: Vec<ObstacleDto>,
    pub camera: PointDto,
}

impl From<&StageSnapshot> for StageSnapshotDto {
    fn from(snapshot: &StageSnapshot) -> Self {
        Self {
            tick: snapshot.tick,
            status: snapshot.status.into(),
            player: snapshot.player.as_ref().map(ActorDto::from),
            enemies: snapshot.enemies.iter().map(ActorDto::from).collect(),
            projectiles: snapshot.projectiles.iter().map(ProjectileDto::from).collect(),
            obstacles: snapshot.obstacles.iter().map(ObstacleDto::from).collect(),
            camera: PointDto {
                x: snapshot.camera.x,
                y: snapshot.camera.y,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PointDto {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActorDto {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub hp: i32,
    pub max_hp: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aim: Option<PointDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai: Option<&'static str>,
}

impl From<&ActorSnapshot> for ActorDto {
    fn from(actor: &ActorSnapshot) -> Self {
        Self {
            id: actor.id.0,
            x: actor.position.x,
            y: actor.position.y,
            width: actor.width,
            height: actor.height,
            hp: actor.health,
            max_hp: actor.max_health,
            aim: actor.aim_indicator.map(|a| PointDto { x: a.x, y: a.y }),
            ai: actor.ai.map(|state| match state {
                AiState::Idle => "idle",
                AiState::Pursuing => "pursuing",
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectileDto {
    pub owner_id: u64,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl From<&ProjectileSnapshot> for ProjectileDto {
    fn from(projectile: &ProjectileSnapshot) -> Self {
        Self {
            owner_id: projectile.owner.0,
            x: projectile.position.x,
            y: projectile.position.y,
            radius: projectile.radius,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ObstacleDto {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homebase_segments: Option<u8>,
}

impl From<&ObstacleSnapshot> for ObstacleDto {
    fn from(obstacle: &ObstacleSnapshot) -> Self {
        Self {
            x: obstacle.rect.x,
            y: obstacle.rect.y,
            w: obstacle.rect.width,
            h: obstacle.rect.height,
            homebase_segments: obstacle.homebase_segments,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum StageStatusDto {
    Running,
    GameOver { at_tick: u64 },
}

impl From<StageStatus> for StageStatusDto {
    fn from(status: StageStatus) -> Self {
        match status {
            StageStatus::Running => StageStatusDto::Running,
            StageStatus::GameOver { at_tick } => StageStatusDto::GameOver { at_tick },
        }
    }
}

/// Per-tick event stream entry.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum StageEventDto {
    ProjectileFired { owner_id: u64 },
    ActorHit { target_id: u64, attacker_id: u64, hp: i32 },
    EnemyKilled { enemy_id: u64, killer_id: u64 },
    PlayerKilled { killer_id: u64 },
    ProjectileExpired { owner_id: u64 },
}

impl From<&StageEvent> for StageEventDto {
    fn from(event: &StageEvent) -> Self {
        match *event {
            StageEvent::ProjectileFired { owner } => StageEventDto::ProjectileFired {
                owner_id: owner.0,
            },
            StageEvent::ActorHit {
                target,
                attacker,
                health,
            } => StageEventDto::ActorHit {
                target_id: target.0,
                attacker_id: attacker.0,
                hp: health,
            },
            StageEvent::EnemyKilled { id, by } => StageEventDto::EnemyKilled {
                enemy_id: id.0,
                killer_id: by.0,
            },
            StageEvent::PlayerKilled { by } => StageEventDto::PlayerKilled { killer_id: by.0 },
            StageEvent::ProjectileExpired { owner } => StageEventDto::ProjectileExpired {
                owner_id: owner.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ActorId, Rect, Vec2};
    use serde_json::json;

    #[test]
    fn when_snapshot_is_serialized_then_fields_are_flattened() {
        let snapshot = StageSnapshot {
            tick: 7,
            status: StageStatus::GameOver { at_tick: 7 },
            player: None,
            enemies: vec![ActorSnapshot {
                id: ActorId(3),
                position: Vec2::new(10.0, 20.0),
                width: 26.0,
                height: 37.0,
                health: 1,
                max_health: 2,
                aim_indicator: None,
                ai: Some(AiState::Pursuing),
            }],
            projectiles: vec![ProjectileSnapshot {
                owner: ActorId(3),
                position: Vec2::new(11.0, 21.0),
                radius: 8.0,
            }],
            obstacles: vec![ObstacleSnapshot {
                rect: Rect::new(120.0, 120.0, 240.0, 240.0),
                homebase_segments: Some(4),
            }],
            camera: Vec2::ZERO,
        };

        let value = serde_json::to_value(StageSnapshotDto::from(&snapshot))
            .expect("snapshot should serialize");

        assert_eq!(
            value,
            json!({
                "tick": 7,
                "status": { "type": "GameOver", "data": { "at_tick": 7 } },
                "player": null,
                "enemies": [{
                    "id": 3, "x": 10.0, "y": 20.0, "width": 26.0, "height": 37.0,
                    "hp": 1, "max_hp": 2, "ai": "pursuing"
                }],
                "projectiles": [{ "owner_id": 3, "x": 11.0, "y": 21.0, "radius": 8.0 }],
                "obstacles": [{
                    "x": 120.0, "y": 120.0, "w": 240.0, "h": 240.0, "homebase_segments": 4
                }],
                "camera": { "x": 0.0, "y": 0.0 }
            })
        );
    }

    #[test]
    fn when_event_is_serialized_then_it_is_tagged() {
        let event = StageEvent::EnemyKilled {
            id: ActorId(2),
            by: ActorId::PLAYER,
        };

        let value = serde_json::to_value(StageEventDto::from(&event)).expect("event serializes");

        assert_eq!(
            value,
            json!({ "type": "EnemyKilled", "data": { "enemy_id": 2, "killer_id": 0 } })
        );
    }
}
