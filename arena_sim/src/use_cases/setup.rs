// Bootstraps a stage from a layout: fixed obstacles, the player, and randomly placed enemies.

use super::stage::{Stage, StageSettings};
use crate::domain::{Actor, ActorId, Clock, Obstacle, Rect, SetupError, Vec2};
use rand::Rng;
use tracing::{debug, info};

/// Resamples allowed per enemy before setup gives up.
pub const MAX_SPAWN_ATTEMPTS: usize = 1000;

/// Initial placement handed to the stage before the first tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ArenaLayout {
    pub obstacles: Vec<Rect>,
    pub homebase: Option<Rect>,
    pub enemy_count: usize,
    /// Defaults to the world center.
    pub player_spawn: Option<Vec2>,
}

impl Default for ArenaLayout {
    fn default() -> Self {
        Self {
            obstacles: vec![
                Rect::new(200.0, 200.0, 100.0, 100.0),
                Rect::new(800.0, 150.0, 50.0, 300.0),
                Rect::new(500.0, 500.0, 200.0, 40.0),
                Rect::new(900.0, 600.0, 120.0, 120.0),
            ],
            homebase: Some(Rect::new(120.0, 120.0, 240.0, 240.0)),
            enemy_count: 3,
            player_spawn: None,
        }
    }
}

impl ArenaLayout {
    /// Obstacle list in stage order: plain blocks first, then the homebase.
    pub fn build_obstacles(&self) -> Vec<Obstacle> {
        self.obstacles
            .iter()
            .copied()
            .map(Obstacle::block)
            .chain(self.homebase.map(Obstacle::homebase))
            .collect()
    }
}

/// Places the player and `enemy_count` enemies, rejecting spawn points that overlap obstacles
/// or the player.
pub fn build_stage<C: Clock, R: Rng + ?Sized>(
    settings: StageSettings,
    layout: &ArenaLayout,
    clock: C,
    rng: &mut R,
) -> Result<Stage<C>, SetupError> {
    let tuning = settings.tuning;
    let too_small = settings.world_width < tuning.player.width.max(tuning.enemy.width)
        || settings.world_height < tuning.player.height.max(tuning.enemy.height);
    if too_small {
        return Err(SetupError::WorldTooSmall {
            width: settings.world_width,
            height: settings.world_height,
        });
    }

    let obstacles = layout.build_obstacles();
    let spawn = layout.player_spawn.unwrap_or(Vec2::new(
        settings.world_width / 2.0,
        settings.world_height / 2.0,
    ));
    let player = Actor::player(spawn, &tuning.player);

    let mut enemies = Vec::with_capacity(layout.enemy_count);
    for index in 0..layout.enemy_count {
        let id = ActorId(index as u64 + 1);
        let mut enemy = Actor::enemy(id, Vec2::ZERO, &tuning.enemy);
        let mut placed = false;
        for attempt in 1..=MAX_SPAWN_ATTEMPTS {
            enemy.position = Vec2::new(
                rng.gen_range(0.0..settings.world_width),
                rng.gen_range(0.0..settings.world_height),
            );
            if !enemy.collides_with_obstacles(&obstacles) && !enemy.collides_with_actors([&player]) {
                debug!(enemy_id = %id, attempt, x = enemy.position.x, y = enemy.position.y, "enemy placed");
                placed = true;
                break;
            }
        }
        if !placed {
            return Err(SetupError::NoSpawnPosition {
                enemy: index,
                attempts: MAX_SPAWN_ATTEMPTS,
            });
        }
        enemies.push(enemy);
    }

    info!(
        obstacles = obstacles.len(),
        enemies = enemies.len(),
        player_x = spawn.x,
        player_y = spawn.y,
        "stage ready"
    );
    Ok(Stage::new(settings, clock, player, enemies, obstacles))
}
