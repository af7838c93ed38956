use super::actor::ActorId;

/// Something that happened during a tick, reported to presentation and logging collaborators.
#[derive(Debug, Clone, PartialEq)]
pub enum StageEvent {
    ProjectileFired { owner: ActorId },
    /// `health` is the target's health right after the hit and may be negative.
    ActorHit {
        target: ActorId,
        attacker: ActorId,
        health: i32,
    },
    EnemyKilled { id: ActorId, by: ActorId },
    PlayerKilled { by: ActorId },
    /// Left the world or struck an obstacle.
    ProjectileExpired { owner: ActorId },
}
