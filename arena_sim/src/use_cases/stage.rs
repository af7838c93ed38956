// World orchestrator: owns every actor and obstacle and runs one frame at a time.

use super::camera::{Viewport, camera_offset};
use super::types::{
    ActorSnapshot, ObstacleSnapshot, ProjectileSnapshot, StageSnapshot, StageStatus,
};
use crate::domain::systems::{MovementConfig, ProjectileConfig, ai, movement, projectiles};
use crate::domain::{Actor, Clock, InputState, Obstacle, StageEvent, Tuning, Vec2};
use tracing::{info, trace};

/// Fixed dimensions and tuning for a stage.
#[derive(Debug, Clone, Copy)]
pub struct StageSettings {
    pub world_width: f32,
    pub world_height: f32,
    pub screen_width: f32,
    pub screen_height: f32,
    pub tuning: Tuning,
}

impl StageSettings {
    pub fn viewport(&self) -> Viewport {
        Viewport {
            screen_width: self.screen_width,
            screen_height: self.screen_height,
            world_width: self.world_width,
            world_height: self.world_height,
        }
    }

    fn movement(&self) -> MovementConfig {
        MovementConfig {
            world_width: self.world_width,
            world_height: self.world_height,
        }
    }

    fn projectiles(&self) -> ProjectileConfig {
        ProjectileConfig::new(self.world_width, self.world_height, &self.tuning.projectile)
    }
}

impl Default for StageSettings {
    fn default() -> Self {
        Self {
            world_width: 2800.0,
            world_height: 2000.0,
            screen_width: 1200.0,
            screen_height: 800.0,
            tuning: Tuning::default(),
        }
    }
}

/// Authoritative simulation state. The stage is the only writer of anything it owns.
pub struct Stage<C> {
    settings: StageSettings,
    clock: C,
    tick: u64,
    status: StageStatus,
    player: Option<Actor>,
    enemies: Vec<Actor>,
    obstacles: Vec<Obstacle>,
    camera: Vec2,
}

impl<C: Clock> Stage<C> {
    pub fn new(
        settings: StageSettings,
        clock: C,
        player: Actor,
        enemies: Vec<Actor>,
        obstacles: Vec<Obstacle>,
    ) -> Self {
        let camera = camera_offset(settings.viewport(), player.position);
        Self {
            settings,
            clock,
            tick: 0,
            status: StageStatus::Running,
            player: Some(player),
            enemies,
            obstacles,
            camera,
        }
    }

    /// Runs one frame: player, enemies, player shots, enemy shots, camera. In that order.
    pub fn tick(&mut self, delta: f32, input: &InputState) -> Vec<StageEvent> {
        let mut events = Vec::new();
        self.clock.advance(delta);
        let now_ms = self.clock.now_ms();
        self.tick += 1;

        let move_cfg = self.settings.movement();
        let shot_cfg = self.settings.projectiles();

        if let Some(player) = self.player.as_mut() {
            let intent = movement::tick_player(
                player,
                input,
                &self.enemies,
                &self.obstacles,
                move_cfg,
                delta,
                now_ms,
            );
            if let Some(intent) = intent {
                projectiles::spawn_projectile(player, intent, shot_cfg, &mut events);
            }
        }

        for enemy in self.enemies.iter_mut() {
            let intent = ai::tick_enemy(
                enemy,
                self.player.as_ref(),
                &self.obstacles,
                move_cfg,
                delta,
                now_ms,
            );
            if let Some(intent) = intent {
                projectiles::spawn_projectile(enemy, intent, shot_cfg, &mut events);
            }
        }

        if let Some(player) = self.player.as_mut() {
            projectiles::resolve_player_projectiles(
                player,
                &mut self.enemies,
                &self.obstacles,
                shot_cfg,
                delta,
                &mut events,
            );
        }

        let player_was_alive = self.player.is_some();
        projectiles::resolve_enemy_projectiles(
            &mut self.enemies,
            &mut self.player,
            &self.obstacles,
            shot_cfg,
            delta,
            &mut events,
        );
        if player_was_alive && self.player.is_none() {
            self.status = StageStatus::GameOver { at_tick: self.tick };
            info!(tick = self.tick, enemies = self.enemies.len(), "game over");
        }

        if let Some(player) = &self.player {
            self.camera = camera_offset(self.settings.viewport(), player.position);
        }

        trace!(
            tick = self.tick,
            delta,
            enemies = self.enemies.len(),
            events = events.len(),
            "tick"
        );
        events
    }

    pub fn snapshot(&self) -> StageSnapshot {
        let projectiles = self
            .player
            .iter()
            .chain(self.enemies.iter())
            .flat_map(|a| a.projectiles.iter())
            .map(ProjectileSnapshot::from)
            .collect();

        StageSnapshot {
            tick: self.tick,
            status: self.status,
            player: self.player.as_ref().map(ActorSnapshot::from),
            enemies: self.enemies.iter().map(ActorSnapshot::from).collect(),
            projectiles,
            obstacles: self.obstacles.iter().map(ObstacleSnapshot::from).collect(),
            camera: self.camera,
        }
    }

    /// Drives the homebase health bar; the value is display-only.
    pub fn set_homebase_health(&mut self, health: i32) {
        for obstacle in self.obstacles.iter_mut().filter(|o| o.is_homebase()) {
            obstacle.set_homebase_health(health);
        }
    }

    pub fn settings(&self) -> &StageSettings {
        &self.settings
    }

    pub fn player(&self) -> Option<&Actor> {
        self.player.as_ref()
    }

    pub fn enemies(&self) -> &[Actor] {
        &self.enemies
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn camera(&self) -> Vec2 {
        self.camera
    }

    pub fn status(&self) -> StageStatus {
        self.status
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
