use super::stage::{Stage, StageSettings};
use crate::domain::tuning::{EnemyTuning, PlayerTuning};
use crate::domain::{Actor, ActorId, Clock, Obstacle, Vec2};

// Clock that only moves when a test sets it.
#[derive(Debug, Default)]
pub(crate) struct ManualClock(pub(crate) f64);

impl ManualClock {
    pub(crate) fn set(&mut self, now_ms: f64) {
        self.0 = now_ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.0
    }
}

pub(crate) fn player_at(x: f32, y: f32) -> Actor {
    Actor::player(Vec2::new(x, y), &PlayerTuning::default())
}

pub(crate) fn enemy_at(id: u64, x: f32, y: f32) -> Actor {
    Actor::enemy(ActorId(id), Vec2::new(x, y), &EnemyTuning::default())
}

pub(crate) fn stage_with(
    player: Actor,
    enemies: Vec<Actor>,
    obstacles: Vec<Obstacle>,
) -> Stage<ManualClock> {
    Stage::new(
        StageSettings::default(),
        ManualClock::default(),
        player,
        enemies,
        obstacles,
    )
}
