// Reactive enemy behaviour: chase inside the pursuit radius, shoot outside point-blank range.
// There is no path-finding; an enemy stuck behind an obstacle stays stuck.

use super::movement::{MovementConfig, step_axis_separated};
use crate::domain::actor::{Actor, ActorKind, AiState, FireIntent};
use crate::domain::obstacle::Obstacle;

/// Runs one frame of an enemy against the (possibly absent) player.
///
/// With no player the enemy does nothing at all this frame, not even the bounds clamp.
pub fn tick_enemy(
    enemy: &mut Actor,
    player: Option<&Actor>,
    obstacles: &[Obstacle],
    cfg: MovementConfig,
    delta: f32,
    now_ms: f64,
) -> Option<FireIntent> {
    let ActorKind::Enemy(state) = &mut enemy.kind else {
        return None;
    };
    let Some(player) = player else {
        state.ai = AiState::Idle;
        return None;
    };

    let to_player = enemy.position.to(player.position);
    let distance = to_player.length();
    let pursuing = distance > 0.0 && distance < state.pursuit_radius;
    let min_engagement_distance = state.min_engagement_distance;
    state.ai = if pursuing {
        AiState::Pursuing
    } else {
        AiState::Idle
    };

    if pursuing {
        let step = enemy.speed * delta;
        let dx = to_player.x / distance * step;
        let dy = to_player.y / distance * step;
        let player_hitbox = player.hitbox();
        step_axis_separated(enemy, dx, dy, |e| {
            e.collides_with_obstacles(obstacles) || e.hitbox().intersects(&player_hitbox)
        });
    }

    enemy.keep_in_bounds(cfg.world_width, cfg.world_height);

    if distance > min_engagement_distance {
        enemy.try_fire_at(player.position, now_ms)
    } else {
        None
    }
}
