// Concrete time sources for fire cooldowns.

use crate::domain::Clock;
use serde::Deserialize;
use std::time::Instant;

/// Length of one nominal frame; a tick delta of 1.0 stands for this much time.
pub const NOMINAL_FRAME_MS: f64 = 1000.0 / 60.0;

/// Which timeline cooldowns follow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CooldownClock {
    /// Real elapsed time, independent of the tick delta.
    #[default]
    Wall,
    /// Accumulated tick deltas, so pauses and slow motion stretch cooldowns.
    Simulated,
}

impl std::str::FromStr for CooldownClock {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wall" => Ok(CooldownClock::Wall),
            "simulated" => Ok(CooldownClock::Simulated),
            other => Err(format!("unknown cooldown clock '{other}'")),
        }
    }
}

impl CooldownClock {
    pub fn build(self) -> Box<dyn Clock> {
        match self {
            CooldownClock::Wall => Box::new(SystemClock::new()),
            CooldownClock::Simulated => Box::new(FrameClock::default()),
        }
    }
}

/// Monotonic wall-clock milliseconds since the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Simulated milliseconds accumulated from tick deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    elapsed_ms: f64,
}

impl Clock for FrameClock {
    fn now_ms(&self) -> f64 {
        self.elapsed_ms
    }

    fn advance(&mut self, delta: f32) {
        self.elapsed_ms += f64::from(delta.max(0.0)) * NOMINAL_FRAME_MS;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_frames_advance_then_frame_clock_accumulates_nominal_time() {
        let mut clock = FrameClock::default();

        clock.advance(1.0);
        clock.advance(2.0);
        clock.advance(-5.0);

        assert!((clock.now_ms() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn when_wall_clock_is_advanced_then_delta_is_ignored() {
        let mut clock = SystemClock::new();
        let before = clock.now_ms();

        clock.advance(1_000.0);

        assert!(clock.now_ms() - before < 1_000.0);
    }

    #[test]
    fn when_clock_name_is_parsed_then_case_is_ignored() {
        assert_eq!("Wall".parse::<CooldownClock>(), Ok(CooldownClock::Wall));
        assert_eq!(" simulated ".parse::<CooldownClock>(), Ok(CooldownClock::Simulated));
        assert!("sundial".parse::<CooldownClock>().is_err());
    }
}
