use super::geometry::Rect;

/// Segments shown on the homebase health bar.
pub const HOMEBASE_SEGMENTS: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Block,
    /// Blocks like any obstacle; `segments` is display state only and never affects collision.
    Homebase { segments: u8 },
}

/// Immovable rectangle that blocks actors and absorbs projectiles.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub rect: Rect,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn block(rect: Rect) -> Self {
        Self {
            rect,
            kind: ObstacleKind::Block,
        }
    }

    pub fn homebase(rect: Rect) -> Self {
        Self {
            rect,
            kind: ObstacleKind::Homebase {
                segments: HOMEBASE_SEGMENTS,
            },
        }
    }

    pub fn is_homebase(&self) -> bool {
        matches!(self.kind, ObstacleKind::Homebase { .. })
    }

    /// Sets the homebase health bar from an external health value, clamped to `0..=4`.
    /// No-op for plain blocks.
    pub fn set_homebase_health(&mut self, health: i32) {
        if let ObstacleKind::Homebase { segments } = &mut self.kind {
            *segments = health.clamp(0, HOMEBASE_SEGMENTS as i32) as u8;
        }
    }

    pub fn visible_segments(&self) -> Option<u8> {
        match self.kind {
            ObstacleKind::Homebase { segments } => Some(segments),
            ObstacleKind::Block => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_homebase_is_placed_then_all_segments_are_visible() {
        let base = Obstacle::homebase(Rect::new(120.0, 120.0, 240.0, 240.0));

        assert!(base.is_homebase());
        assert_eq!(base.visible_segments(), Some(4));
    }

    #[test]
    fn when_homebase_health_is_out_of_range_then_segments_are_clamped() {
        let mut base = Obstacle::homebase(Rect::new(0.0, 0.0, 10.0, 10.0));

        base.set_homebase_health(2);
        assert_eq!(base.visible_segments(), Some(2));

        base.set_homebase_health(-3);
        assert_eq!(base.visible_segments(), Some(0));

        base.set_homebase_health(9);
        assert_eq!(base.visible_segments(), Some(4));
    }

    #[test]
    fn when_block_receives_health_then_nothing_changes() {
        let mut block = Obstacle::block(Rect::new(0.0, 0.0, 10.0, 10.0));

        block.set_homebase_health(1);

        assert_eq!(block.kind, ObstacleKind::Block);
        assert_eq!(block.visible_segments(), None);
    }
}
