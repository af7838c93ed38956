// Use cases layer: stage orchestration and bootstrap workflows.

pub mod camera;
pub mod setup;
pub mod stage;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use camera::{Viewport, camera_offset};
pub use setup::{ArenaLayout, MAX_SPAWN_ATTEMPTS, build_stage};
pub use stage::{Stage, StageSettings};
pub use types::{ActorSnapshot, ObstacleSnapshot, ProjectileSnapshot, StageSnapshot, StageStatus};
