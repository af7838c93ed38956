use serde::Deserialize;

/// Gameplay tuning for projectiles.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    /// Travel per nominal frame.
    pub speed: f32,

    /// Half the side of the square bounding box used for hit checks.
    pub radius: f32,

    /// How far past a world edge a projectile may fly before it is culled.
    pub out_of_bounds_margin: f32,

    /// Health removed from an actor on hit.
    pub damage: i32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            speed: 10.0,
            radius: 8.0,
            out_of_bounds_margin: 50.0,
            damage: 1,
        }
    }
}
