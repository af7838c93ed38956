// Per-frame rules: actor movement, enemy AI and projectile resolution.

pub mod ai;
pub mod movement;
pub mod projectiles;

pub use movement::MovementConfig;
pub use projectiles::ProjectileConfig;
