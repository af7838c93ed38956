use serde::Deserialize;

/// Gameplay tuning for AI-controlled enemies.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    /// Movement per nominal frame while pursuing.
    pub speed: f32,

    /// Minimum milliseconds between two shots.
    pub fire_period_ms: f64,

    pub max_health: i32,

    pub width: f32,
    pub height: f32,

    /// Enemies only chase a player closer than this.
    pub pursuit_radius: f32,

    /// Enemies hold fire when the player is this close or closer.
    pub min_engagement_distance: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            speed: 2.0,
            fire_period_ms: 1000.0,
            max_health: 2,
            width: 26.0,
            height: 37.0,
            pursuit_radius: 600.0,
            min_engagement_distance: 50.0,
        }
    }
}
