use crate::domain::InputState;
use crate::use_cases::StageSnapshot;

/// Producer of per-frame player input. Polled once before every tick.
pub trait InputSource: Send {
    fn poll(&mut self, snapshot: &StageSnapshot) -> InputState;
}

/// Never moves, never fires.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdleInput;

impl InputSource for IdleInput {
    fn poll(&mut self, _snapshot: &StageSnapshot) -> InputState {
        InputState::default()
    }
}

/// Stands still, aims at the nearest enemy and holds fire while any enemy is alive.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutopilotInput;

impl InputSource for AutopilotInput {
    fn poll(&mut self, snapshot: &StageSnapshot) -> InputState {
        let Some(player) = &snapshot.player else {
            return InputState::default();
        };

        let nearest = snapshot.enemies.iter().min_by(|a, b| {
            let da = player.position.distance(a.position);
            let db = player.position.distance(b.position);
            da.total_cmp(&db)
        });

        match nearest {
            Some(enemy) => InputState::default()
                .with_aim(enemy.position)
                .with_fire(true),
            None => InputState::default(),
        }
    }
}
