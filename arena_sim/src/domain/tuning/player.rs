use serde::Deserialize;

/// Gameplay tuning for the player-controlled actor.
///
/// Speeds are in world units per nominal 60 Hz frame; the tick delta scales them.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Movement per nominal frame on each held axis.
    pub speed: f32,

    /// Minimum milliseconds between two shots.
    pub fire_period_ms: f64,

    /// Starting and maximum health.
    pub max_health: i32,

    /// Visual extent the hitbox is derived from.
    pub width: f32,
    pub height: f32,

    /// Farthest the aim indicator is drawn from the player.
    pub aim_radius: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: 3.0,
            fire_period_ms: 300.0,
            max_health: 4,
            width: 26.0,
            height: 37.0,
            aim_radius: 300.0,
        }
    }
}
