// Domain layer: core simulation types and rules.

pub mod actor;
pub mod errors;
pub mod events;
pub mod geometry;
pub mod obstacle;
pub mod ports;
pub mod projectile;
pub mod state;
pub mod systems;
pub mod tuning;

pub use actor::{Actor, ActorId, ActorKind, AiState, EnemyState, FireIntent, PlayerState};
pub use errors::SetupError;
pub use events::StageEvent;
pub use geometry::{Rect, Vec2, intersects};
pub use obstacle::{Obstacle, ObstacleKind};
pub use ports::Clock;
pub use projectile::Projectile;
pub use state::{Direction, HeldDirections, InputState};
pub use tuning::Tuning;
