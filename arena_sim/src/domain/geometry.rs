// Plain 2D geometry shared by every collision test in the arena.

/// World-space point or direction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Vector from `self` to `other`.
    pub fn to(self, other: Vec2) -> Vec2 {
        Vec2::new(other.x - self.x, other.y - self.y)
    }

    pub fn distance(self, other: Vec2) -> f32 {
        self.to(other).length()
    }

    /// Angle of the vector in radians, measured from +X toward +Y.
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given extent centered on `center`.
    pub fn centered(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        intersects(self, other)
    }
}

/// Overlap test on both axes. Rectangles that only touch along an edge do not collide.
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}
