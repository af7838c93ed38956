use super::actor::{Actor, ActorId};
use super::geometry::{Rect, Vec2};
use super::obstacle::Obstacle;

/// A shot in flight. Velocity is fixed at creation; the owner is only used for attribution.
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub owner: ActorId,
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl Projectile {
    pub fn new(owner: ActorId, origin: Vec2, angle: f32, speed: f32, radius: f32) -> Self {
        Self {
            owner,
            position: origin,
            velocity: Vec2::new(angle.cos() * speed, angle.sin() * speed),
            radius,
        }
    }

    pub fn advance(&mut self, delta: f32) {
        self.position.x += self.velocity.x * delta;
        self.position.y += self.velocity.y * delta;
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered(self.position, self.radius * 2.0, self.radius * 2.0)
    }

    /// True once the projectile is more than `margin` past any edge of the world,
    /// or once its position stops being a finite point.
    pub fn is_out_of_world_bounds(&self, world_width: f32, world_height: f32, margin: f32) -> bool {
        let Vec2 { x, y } = self.position;
        !x.is_finite()
            || !y.is_finite()
            || x < -margin || x > world_width + margin || y < -margin || y > world_height + margin
    }

    pub fn collides_with_any(&self, obstacles: &[Obstacle]) -> bool {
        let bounds = self.bounds();
        obstacles.iter().any(|o| bounds.intersects(&o.rect))
    }

    pub fn collides_with_actor(&self, actor: &Actor) -> bool {
        self.bounds().intersects(&actor.hitbox())
    }
}
