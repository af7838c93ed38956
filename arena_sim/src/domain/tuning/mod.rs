// Gameplay tuning, kept apart from runtime configuration (tick rate, seed, clock source).

pub mod enemy;
pub mod player;
pub mod projectile;

pub use enemy::EnemyTuning;
pub use player::PlayerTuning;
pub use projectile::ProjectileTuning;

use serde::Deserialize;

/// Every tuning table the stage needs, grouped so config can override any of them.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
    pub projectile: ProjectileTuning,
}
