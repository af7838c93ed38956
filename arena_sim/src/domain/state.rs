// Per-frame input handed to the simulation by the input collaborator.

use super::geometry::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Movement keys currently held down. Opposite directions held together cancel out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldDirections {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl HeldDirections {
    pub fn is_held(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }

    /// Unit step per axis: -1, 0 or +1 (screen coordinates, +Y is down).
    pub fn axis(&self) -> (f32, f32) {
        let x = f32::from(u8::from(self.right)) - f32::from(u8::from(self.left));
        let y = f32::from(u8::from(self.down)) - f32::from(u8::from(self.up));
        (x, y)
    }
}

impl FromIterator<Direction> for HeldDirections {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut held = HeldDirections::default();
        for direction in iter {
            match direction {
                Direction::Left => held.left = true,
                Direction::Right => held.right = true,
                Direction::Up => held.up = true,
                Direction::Down => held.down = true,
            }
        }
        held
    }
}

/// Snapshot of the player's controls for one frame. `Default` means no input at all.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    pub held: HeldDirections,
    /// World-space aim target; `None` keeps the previously tracked target.
    pub aim: Option<Vec2>,
    pub fire: bool,
}

impl InputState {
    pub fn moving(directions: impl IntoIterator<Item = Direction>) -> Self {
        Self {
            held: directions.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_aim(mut self, target: Vec2) -> Self {
        self.aim = Some(target);
        self
    }

    pub fn with_fire(mut self, fire: bool) -> Self {
        self.fire = fire;
        self
    }
}
