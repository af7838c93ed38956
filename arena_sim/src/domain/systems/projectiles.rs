use crate::domain::actor::{Actor, FireIntent};
use crate::domain::events::StageEvent;
use crate::domain::obstacle::Obstacle;
use crate::domain::projectile::Projectile;
use crate::domain::tuning::ProjectileTuning;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy)]
pub struct ProjectileConfig {
    pub world_width: f32,
    pub world_height: f32,
    pub speed: f32,
    pub radius: f32,
    pub out_of_bounds_margin: f32,
    pub damage: i32,
}

impl ProjectileConfig {
    pub fn new(world_width: f32, world_height: f32, tuning: &ProjectileTuning) -> Self {
        Self {
            world_width,
            world_height,
            speed: tuning.speed,
            radius: tuning.radius,
            out_of_bounds_margin: tuning.out_of_bounds_margin,
            damage: tuning.damage,
        }
    }
}

/// Turns a fire intent into a live projectile in the shooter's own set.
pub fn spawn_projectile(
    shooter: &mut Actor,
    intent: FireIntent,
    cfg: ProjectileConfig,
    events: &mut Vec<StageEvent>,
) {
    debug!(
        owner = %intent.owner,
        x = intent.origin.x,
        y = intent.origin.y,
        angle = intent.angle,
        "projectile fired"
    );
    shooter.projectiles.push(Projectile::new(
        intent.owner,
        intent.origin,
        intent.angle,
        cfg.speed,
        cfg.radius,
    ));
    events.push(StageEvent::ProjectileFired {
        owner: intent.owner,
    });
}

fn is_spent(p: &Projectile, obstacles: &[Obstacle], cfg: ProjectileConfig) -> bool {
    p.is_out_of_world_bounds(cfg.world_width, cfg.world_height, cfg.out_of_bounds_margin)
        || p.collides_with_any(obstacles)
}

/// Advances the player's projectiles and resolves them against enemies.
///
/// Projectiles are visited newest first. Each one damages at most the first enemy, in list
/// order, that it overlaps. Dead enemies leave the list immediately, taking their own
/// projectiles with them.
pub fn resolve_player_projectiles(
    player: &mut Actor,
    enemies: &mut Vec<Actor>,
    obstacles: &[Obstacle],
    cfg: ProjectileConfig,
    delta: f32,
    events: &mut Vec<StageEvent>,
) {
    for i in (0..player.projectiles.len()).rev() {
        let projectile = &mut player.projectiles[i];
        projectile.advance(delta);

        let mut hit = false;
        if let Some(j) = enemies.iter().position(|e| projectile.collides_with_actor(e)) {
            hit = true;
            let enemy = &mut enemies[j];
            enemy.take_damage(cfg.damage);
            debug!(
                victim_id = %enemy.id,
                shooter_id = %projectile.owner,
                victim_hp = enemy.health(),
                "enemy hit"
            );
            events.push(StageEvent::ActorHit {
                target: enemy.id,
                attacker: projectile.owner,
                health: enemy.health(),
            });
            if enemy.is_dead() {
                let dead = enemies.remove(j);
                info!(enemy_id = %dead.id, remaining = enemies.len(), "enemy killed");
                events.push(StageEvent::EnemyKilled {
                    id: dead.id,
                    by: projectile.owner,
                });
            }
        }

        let spent = is_spent(projectile, obstacles, cfg);
        if hit || spent {
            let removed = player.projectiles.remove(i);
            if !hit {
                events.push(StageEvent::ProjectileExpired {
                    owner: removed.owner,
                });
            }
        }
    }
}

/// Advances every enemy's projectiles and resolves them against the player.
///
/// Once the player dies it is taken out of `player`; later projectiles keep flying and are
/// only culled by bounds and obstacles.
pub fn resolve_enemy_projectiles(
    enemies: &mut [Actor],
    player: &mut Option<Actor>,
    obstacles: &[Obstacle],
    cfg: ProjectileConfig,
    delta: f32,
    events: &mut Vec<StageEvent>,
) {
    for enemy in enemies.iter_mut() {
        for i in (0..enemy.projectiles.len()).rev() {
            let projectile = &mut enemy.projectiles[i];
            projectile.advance(delta);

            let mut hit = false;
            if let Some(target) = player.as_mut() {
                if !target.is_dead() && projectile.collides_with_actor(target) {
                    hit = true;
                    target.take_damage(cfg.damage);
                    debug!(
                        shooter_id = %projectile.owner,
                        player_hp = target.health(),
                        "player hit"
                    );
                    events.push(StageEvent::ActorHit {
                        target: target.id,
                        attacker: projectile.owner,
                        health: target.health(),
                    });
                    if target.is_dead() {
                        info!(killer_id = %projectile.owner, "player killed");
                        events.push(StageEvent::PlayerKilled {
                            by: projectile.owner,
                        });
                        *player = None;
                    }
                }
            }

            let spent = is_spent(projectile, obstacles, cfg);
            if hit || spent {
                let removed = enemy.projectiles.remove(i);
                if !hit {
                    events.push(StageEvent::ProjectileExpired {
                        owner: removed.owner,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::actor::ActorId;
    use crate::domain::geometry::{Rect, Vec2};
    use crate::domain::tuning::{EnemyTuning, PlayerTuning};

    fn cfg() -> ProjectileConfig {
        ProjectileConfig::new(2800.0, 2000.0, &ProjectileTuning::default())
    }

    fn enemy(id: u64, x: f32, y: f32) -> Actor {
        Actor::enemy(ActorId(id), Vec2::new(x, y), &EnemyTuning::default())
    }

    fn shoot(shooter: &mut Actor, x: f32, y: f32, angle: f32) {
        let intent = FireIntent {
            owner: shooter.id,
            origin: Vec2::new(x, y),
            angle,
        };
        spawn_projectile(shooter, intent, cfg(), &mut Vec::new());
    }

    #[test]
    fn when_spawned_then_projectile_joins_shooter_set_and_event_is_emitted() {
        let mut player = Actor::player(Vec2::new(100.0, 100.0), &PlayerTuning::default());
        let mut events = Vec::new();
        let intent = FireIntent {
            owner: ActorId::PLAYER,
            origin: player.position,
            angle: 0.0,
        };

        spawn_projectile(&mut player, intent, cfg(), &mut events);

        assert_eq!(player.projectiles.len(), 1);
        assert_eq!(player.projectiles[0].velocity, Vec2::new(10.0, 0.0));
        assert_eq!(
            events,
            vec![StageEvent::ProjectileFired {
                owner: ActorId::PLAYER
            }]
        );
    }

    #[test]
    fn when_projectile_overlaps_two_enemies_then_only_first_in_list_is_damaged() {
        let mut player = Actor::player(Vec2::new(100.0, 100.0), &PlayerTuning::default());
        let mut enemies = vec![enemy(1, 500.0, 500.0), enemy(2, 505.0, 500.0)];
        shoot(&mut player, 492.0, 500.0, 0.0);
        let mut events = Vec::new();

        resolve_player_projectiles(&mut player, &mut enemies, &[], cfg(), 1.0, &mut events);

        assert!(player.projectiles.is_empty());
        assert_eq!(enemies[0].health(), 1);
        assert_eq!(enemies[1].health(), 2);
        assert_eq!(
            events,
            vec![StageEvent::ActorHit {
                target: ActorId(1),
                attacker: ActorId::PLAYER,
                health: 1
            }]
        );
    }

    #[test]
    fn when_enemy_health_reaches_zero_then_enemy_and_its_projectiles_are_removed() {
        let mut player = Actor::player(Vec2::new(100.0, 100.0), &PlayerTuning::default());
        let mut doomed = enemy(1, 500.0, 500.0);
        doomed.take_damage(1);
        shoot(&mut doomed, 500.0, 500.0, 3.0);
        let mut enemies = vec![doomed, enemy(2, 900.0, 900.0)];
        shoot(&mut player, 480.0, 500.0, 0.0);
        let mut events = Vec::new();

        resolve_player_projectiles(&mut player, &mut enemies, &[], cfg(), 1.0, &mut events);

        assert_eq!(enemies.len(), 1);
        assert_eq!(enemies[0].id, ActorId(2));
        assert!(events.contains(&StageEvent::EnemyKilled {
            id: ActorId(1),
            by: ActorId::PLAYER
        }));
    }

    #[test]
    fn when_projectile_hits_obstacle_or_leaves_world_then_it_expires() {
        let mut player = Actor::player(Vec2::new(100.0, 100.0), &PlayerTuning::default());
        let obstacles = vec![Obstacle::block(Rect::new(300.0, 0.0, 20.0, 400.0))];
        shoot(&mut player, 285.0, 100.0, 0.0);
        shoot(&mut player, 2845.0, 100.0, 0.0);
        shoot(&mut player, 1000.0, 1000.0, 0.0);
        let mut enemies = Vec::new();
        let mut events = Vec::new();

        resolve_player_projectiles(&mut player, &mut enemies, &obstacles, cfg(), 1.0, &mut events);

        assert_eq!(player.projectiles.len(), 1);
        assert_eq!(player.projectiles[0].position, Vec2::new(1010.0, 1000.0));
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, StageEvent::ProjectileExpired { .. }))
                .count(),
            2
        );
    }

    #[test]
    fn when_enemy_projectile_kills_player_then_player_becomes_absent() {
        let mut player = Some(Actor::player(
            Vec2::new(400.0, 400.0),
            &PlayerTuning {
                max_health: 1,
                ..PlayerTuning::default()
            },
        ));
        let mut shooter = enemy(1, 400.0, 300.0);
        shoot(&mut shooter, 380.0, 400.0, 0.0);
        shoot(&mut shooter, 390.0, 400.0, 0.0);
        let mut enemies = vec![shooter];
        let mut events = Vec::new();

        resolve_enemy_projectiles(&mut enemies, &mut player, &[], cfg(), 1.0, &mut events);

        assert!(player.is_none());
        // The older shot was still in flight when the player vanished.
        assert_eq!(enemies[0].projectiles.len(), 1);
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, StageEvent::PlayerKilled { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn when_player_is_absent_then_enemy_projectiles_still_advance() {
        let mut player = None;
        let mut shooter = enemy(1, 400.0, 300.0);
        shoot(&mut shooter, 400.0, 300.0, 0.0);
        let mut enemies = vec![shooter];

        resolve_enemy_projectiles(&mut enemies, &mut player, &[], cfg(), 1.0, &mut Vec::new());

        assert_eq!(enemies[0].projectiles[0].position, Vec2::new(410.0, 300.0));
    }
}
