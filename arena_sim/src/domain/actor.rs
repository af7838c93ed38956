// Shared actor record plus the per-variant state for the player and enemies.

use super::geometry::{Rect, Vec2};
use super::obstacle::Obstacle;
use super::projectile::Projectile;
use super::state::HeldDirections;
use super::tuning::{EnemyTuning, PlayerTuning};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub u64);

impl ActorId {
    pub const PLAYER: ActorId = ActorId(0);
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Request to spawn a projectile, produced by a behaviour and fulfilled by the stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireIntent {
    pub owner: ActorId,
    pub origin: Vec2,
    pub angle: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiState {
    #[default]
    Idle,
    Pursuing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub held: HeldDirections,
    /// World-space point the player is aiming at.
    pub aim_target: Vec2,
    /// Aim indicator offset from the player, clamped to `aim_radius`.
    pub aim_indicator: Vec2,
    pub aim_radius: f32,
    pub firing: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnemyState {
    pub pursuit_radius: f32,
    pub min_engagement_distance: f32,
    pub ai: AiState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActorKind {
    Player(PlayerState),
    Enemy(EnemyState),
}

impl ActorKind {
    pub fn player(aim_radius: f32) -> Self {
        ActorKind::Player(PlayerState {
            held: HeldDirections::default(),
            aim_target: Vec2::ZERO,
            aim_indicator: Vec2::ZERO,
            aim_radius,
            firing: false,
        })
    }

    pub fn enemy(pursuit_radius: f32, min_engagement_distance: f32) -> Self {
        ActorKind::Enemy(EnemyState {
            pursuit_radius,
            min_engagement_distance,
            ai: AiState::Idle,
        })
    }
}

/// Anything that moves, takes damage and shoots.
///
/// The hitbox is never stored; it is always derived from `position` and the fixed extent.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: ActorId,
    pub kind: ActorKind,
    pub position: Vec2,
    health: i32,
    max_health: i32,
    pub speed: f32,
    fire_period_ms: f64,
    last_fired_ms: Option<f64>,
    width: f32,
    height: f32,
    /// Projectiles this actor fired that are still in flight, oldest first.
    /// Only the stage pushes to or removes from this list.
    pub projectiles: Vec<Projectile>,
}

impl Actor {
    pub fn player(position: Vec2, tuning: &PlayerTuning) -> Self {
        Self {
            id: ActorId::PLAYER,
            kind: ActorKind::player(tuning.aim_radius),
            position,
            health: tuning.max_health,
            max_health: tuning.max_health,
            speed: tuning.speed,
            fire_period_ms: tuning.fire_period_ms,
            last_fired_ms: None,
            width: tuning.width,
            height: tuning.height,
            projectiles: Vec::new(),
        }
    }

    pub fn enemy(id: ActorId, position: Vec2, tuning: &EnemyTuning) -> Self {
        Self {
            id,
            kind: ActorKind::enemy(tuning.pursuit_radius, tuning.min_engagement_distance),
            position,
            health: tuning.max_health,
            max_health: tuning.max_health,
            speed: tuning.speed,
            fire_period_ms: tuning.fire_period_ms,
            last_fired_ms: None,
            width: tuning.width,
            height: tuning.height,
            projectiles: Vec::new(),
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn extent(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn hitbox(&self) -> Rect {
        Rect::centered(self.position, self.width, self.height)
    }

    /// Health may go negative here; callers check `is_dead` afterwards.
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn collides_with_obstacles(&self, obstacles: &[Obstacle]) -> bool {
        let hitbox = self.hitbox();
        obstacles.iter().any(|o| hitbox.intersects(&o.rect))
    }

    /// Tests against every other actor in `others`; an actor never blocks itself.
    pub fn collides_with_actors<'a>(&self, others: impl IntoIterator<Item = &'a Actor>) -> bool {
        let hitbox = self.hitbox();
        others
            .into_iter()
            .filter(|other| other.id != self.id)
            .any(|other| hitbox.intersects(&other.hitbox()))
    }

    /// Clamps the position so the whole visual extent stays inside the world.
    pub fn keep_in_bounds(&mut self, world_width: f32, world_height: f32) {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        self.position.x = self.position.x.min(world_width - half_w).max(half_w);
        self.position.y = self.position.y.min(world_height - half_h).max(half_h);
    }

    pub fn cooldown_elapsed(&self, now_ms: f64) -> bool {
        match self.last_fired_ms {
            None => true,
            Some(last) => now_ms - last > self.fire_period_ms,
        }
    }

    /// Fires toward `target` if the cooldown allows it, resetting the cooldown.
    pub fn try_fire_at(&mut self, target: Vec2, now_ms: f64) -> Option<FireIntent> {
        if !self.cooldown_elapsed(now_ms) {
            return None;
        }
        self.last_fired_ms = Some(now_ms);
        Some(FireIntent {
            owner: self.id,
            origin: self.position,
            angle: self.position.to(target).angle(),
        })
    }

    pub fn as_player(&self) -> Option<&PlayerState> {
        match &self.kind {
            ActorKind::Player(state) => Some(state),
            ActorKind::Enemy(_) => None,
        }
    }

    pub fn as_enemy(&self) -> Option<&EnemyState> {
        match &self.kind {
            ActorKind::Enemy(state) => Some(state),
            ActorKind::Player(_) => None,
        }
    }
}
