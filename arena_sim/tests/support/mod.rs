// Shared stage builders for integration tests.
#![allow(dead_code)]

use arena_sim::domain::tuning::{EnemyTuning, PlayerTuning};
use arena_sim::domain::{Actor, ActorId, InputState, Obstacle, StageEvent, Vec2};
use arena_sim::interface_adapters::clock::FrameClock;
use arena_sim::use_cases::{Stage, StageSettings};

// Simulated clock so cooldowns follow tick count, not the machine running the tests.
pub fn stage(player: Actor, enemies: Vec<Actor>, obstacles: Vec<Obstacle>) -> Stage<FrameClock> {
    stage_in(StageSettings::default(), player, enemies, obstacles)
}

pub fn stage_in(
    settings: StageSettings,
    player: Actor,
    enemies: Vec<Actor>,
    obstacles: Vec<Obstacle>,
) -> Stage<FrameClock> {
    Stage::new(settings, FrameClock::default(), player, enemies, obstacles)
}

pub fn player_at(x: f32, y: f32) -> Actor {
    Actor::player(Vec2::new(x, y), &PlayerTuning::default())
}

// Enemy that shoots but never moves.
pub fn turret_at(id: u64, x: f32, y: f32) -> Actor {
    let tuning = EnemyTuning {
        speed: 0.0,
        ..EnemyTuning::default()
    };
    Actor::enemy(ActorId(id), Vec2::new(x, y), &tuning)
}

// Runs `frames` ticks of one nominal frame each and collects every event.
pub fn run_frames<C: arena_sim::domain::Clock>(
    stage: &mut Stage<C>,
    frames: usize,
    input: &InputState,
) -> Vec<StageEvent> {
    (0..frames).flat_map(|_| stage.tick(1.0, input)).collect()
}

pub fn count_fired(events: &[StageEvent], owner: ActorId) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, StageEvent::ProjectileFired { owner: o } if *o == owner))
        .count()
}
