use crate::domain::actor::{Actor, ActorKind, FireIntent};
use crate::domain::geometry::Vec2;
use crate::domain::obstacle::Obstacle;
use crate::domain::state::InputState;

#[derive(Debug, Clone, Copy)]
pub struct MovementConfig {
    pub world_width: f32,
    pub world_height: f32,
}

/// Moves `actor` by `(dx, dy)` one axis at a time.
///
/// Each axis is applied, tested with `blocked`, and reverted on its own, so a diagonal move
/// into a wall still slides along the free axis.
pub fn step_axis_separated(
    actor: &mut Actor,
    dx: f32,
    dy: f32,
    blocked: impl Fn(&Actor) -> bool,
) {
    if dx != 0.0 {
        let old_x = actor.position.x;
        actor.position.x += dx;
        if blocked(actor) {
            actor.position.x = old_x;
        }
    }

    if dy != 0.0 {
        let old_y = actor.position.y;
        actor.position.y += dy;
        if blocked(actor) {
            actor.position.y = old_y;
        }
    }
}

/// Offset from `origin` toward `target`, shortened to at most `radius`.
pub fn clamp_to_radius(origin: Vec2, target: Vec2, radius: f32) -> Vec2 {
    let offset = origin.to(target);
    let distance = offset.length();
    if distance <= radius || distance == 0.0 {
        return offset;
    }
    let scale = radius / distance;
    Vec2::new(offset.x * scale, offset.y * scale)
}

/// Runs one frame of the player: move, clamp, update the aim indicator, maybe fire.
///
/// Returns the shot the stage should spawn, if any. Non-player actors are left untouched.
pub fn tick_player(
    player: &mut Actor,
    input: &InputState,
    enemies: &[Actor],
    obstacles: &[Obstacle],
    cfg: MovementConfig,
    delta: f32,
    now_ms: f64,
) -> Option<FireIntent> {
    let ActorKind::Player(state) = &mut player.kind else {
        return None;
    };
    state.held = input.held;
    state.firing = input.fire;
    // A non-finite aim is treated as no aim this frame.
    if let Some(aim) = input.aim.filter(|a| a.x.is_finite() && a.y.is_finite()) {
        state.aim_target = aim;
    }
    let (axis_x, axis_y) = state.held.axis();
    let firing = state.firing;

    let step = player.speed * delta;
    step_axis_separated(player, axis_x * step, axis_y * step, |p| {
        p.collides_with_obstacles(obstacles) || p.collides_with_actors(enemies)
    });
    player.keep_in_bounds(cfg.world_width, cfg.world_height);

    let position = player.position;
    let ActorKind::Player(state) = &mut player.kind else {
        return None;
    };
    state.aim_indicator = clamp_to_radius(position, state.aim_target, state.aim_radius);
    let aim_target = state.aim_target;

    if firing {
        player.try_fire_at(aim_target, now_ms)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::actor::ActorId;
    use crate::domain::geometry::Rect;
    use crate::domain::state::Direction;
    use crate::domain::tuning::{EnemyTuning, PlayerTuning};

    const CFG: MovementConfig = MovementConfig {
        world_width: 2800.0,
        world_height: 2000.0,
    };

    fn player_at(x: f32, y: f32) -> Actor {
        Actor::player(Vec2::new(x, y), &PlayerTuning::default())
    }

    #[test]
    fn when_east_is_blocked_then_diagonal_move_still_goes_north() {
        let mut player = player_at(400.0, 400.0);
        // Hitbox right edge is 413; the wall starts just past it.
        let obstacles = vec![Obstacle::block(Rect::new(414.0, 300.0, 50.0, 200.0))];
        let input = InputState::moving([Direction::Right, Direction::Up]);

        tick_player(&mut player, &input, &[], &obstacles, CFG, 1.0, 0.0);

        assert_eq!(player.position, Vec2::new(400.0, 397.0));
    }

    #[test]
    fn when_enemy_blocks_the_path_then_player_stops() {
        let mut player = player_at(400.0, 400.0);
        let enemies = vec![Actor::enemy(
            ActorId(1),
            Vec2::new(428.0, 400.0),
            &EnemyTuning::default(),
        )];
        let input = InputState::moving([Direction::Right]);

        tick_player(&mut player, &input, &enemies, &[], CFG, 1.0, 0.0);

        assert_eq!(player.position, Vec2::new(400.0, 400.0));
    }

    #[test]
    fn when_delta_is_scaled_then_step_scales() {
        let mut player = player_at(400.0, 400.0);
        let input = InputState::moving([Direction::Left, Direction::Down]);

        tick_player(&mut player, &input, &[], &[], CFG, 2.0, 0.0);

        assert_eq!(player.position, Vec2::new(394.0, 406.0));
    }

    #[test]
    fn when_moving_off_the_world_edge_then_position_is_clamped() {
        let mut player = player_at(14.0, 20.0);
        let input = InputState::moving([Direction::Left, Direction::Up]);

        tick_player(&mut player, &input, &[], &[], CFG, 1.0, 0.0);

        assert_eq!(player.position, Vec2::new(13.0, 18.5));
    }

    #[test]
    fn when_aim_is_far_then_indicator_is_clamped_to_radius() {
        let mut player = player_at(400.0, 400.0);
        let input = InputState::default().with_aim(Vec2::new(1000.0, 400.0));

        tick_player(&mut player, &input, &[], &[], CFG, 1.0, 0.0);

        let state = player.as_player().expect("player state");
        assert_eq!(state.aim_target, Vec2::new(1000.0, 400.0));
        assert_eq!(state.aim_indicator, Vec2::new(300.0, 0.0));
    }

    #[test]
    fn when_aim_is_missing_then_previous_target_is_kept() {
        let mut player = player_at(400.0, 400.0);
        let aimed = InputState::default().with_aim(Vec2::new(450.0, 400.0));
        tick_player(&mut player, &aimed, &[], &[], CFG, 1.0, 0.0);

        tick_player(&mut player, &InputState::default(), &[], &[], CFG, 1.0, 0.0);

        let state = player.as_player().expect("player state");
        assert_eq!(state.aim_target, Vec2::new(450.0, 400.0));
        assert_eq!(state.aim_indicator, Vec2::new(50.0, 0.0));
    }

    #[test]
    fn when_aim_is_not_finite_then_it_is_ignored_and_shots_stay_finite() {
        let mut player = player_at(400.0, 400.0);
        let aimed = InputState::default().with_aim(Vec2::new(450.0, 400.0));
        tick_player(&mut player, &aimed, &[], &[], CFG, 1.0, 0.0);

        let broken = InputState::default()
            .with_aim(Vec2::new(f32::NAN, 400.0))
            .with_fire(true);
        let shot = tick_player(&mut player, &broken, &[], &[], CFG, 1.0, 0.0);

        let state = player.as_player().expect("player state");
        assert_eq!(state.aim_target, Vec2::new(450.0, 400.0));
        assert_eq!(state.aim_indicator, Vec2::new(50.0, 0.0));
        let shot = shot.expect("fires at the previous target");
        assert!(shot.angle.is_finite());
        assert_eq!(shot.angle, 0.0);
    }

    #[test]
    fn when_fire_is_held_then_shots_respect_cooldown() {
        let mut player = player_at(400.0, 400.0);
        let input = InputState::default()
            .with_aim(Vec2::new(400.0, 0.0))
            .with_fire(true);

        let first = tick_player(&mut player, &input, &[], &[], CFG, 1.0, 1000.0);
        let blocked = tick_player(&mut player, &input, &[], &[], CFG, 1.0, 1300.0);
        let second = tick_player(&mut player, &input, &[], &[], CFG, 1.0, 1301.0);

        let first = first.expect("first shot");
        assert!((first.angle + std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!(blocked.is_none());
        assert!(second.is_some());
    }

    #[test]
    fn when_fire_is_released_then_no_shot() {
        let mut player = player_at(400.0, 400.0);
        let input = InputState::default().with_aim(Vec2::new(0.0, 0.0));

        assert!(tick_player(&mut player, &input, &[], &[], CFG, 1.0, 5000.0).is_none());
    }
}
