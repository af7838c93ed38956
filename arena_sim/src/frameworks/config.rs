use crate::domain::tuning::{EnemyTuning, PlayerTuning, ProjectileTuning, Tuning};
use crate::domain::{Rect, Vec2};
use crate::interface_adapters::clock::CooldownClock;
use crate::use_cases::{ArenaLayout, StageSettings};
use serde::Deserialize;
use std::{env, fmt, io, time::Duration};

// Runtime constants (not gameplay tuning).

pub const DEFAULT_CONFIG_PATH: &str = "arena.toml";
pub const DEFAULT_TICK_HZ: u32 = 60;
pub const DEFAULT_LOG_EVERY: u64 = 60;

/// Errors raised while loading or validating the arena configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: String, source: io::Error },
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => write!(f, "failed to read {path}: {source}"),
            ConfigError::Parse(e) => write!(f, "invalid config file: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RectConfig {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl From<RectConfig> for Rect {
    fn from(r: RectConfig) -> Self {
        Rect::new(r.x, r.y, r.w, r.h)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PointConfig {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub tick_hz: u32,
    /// Stop after this many ticks; unset runs until the match ends.
    pub max_ticks: Option<u64>,
    /// Seed for enemy placement; unset derives one from the clock.
    pub seed: Option<u64>,
    pub cooldown_clock: CooldownClock,
    /// Log a JSON snapshot every N ticks (0 disables).
    pub log_every: u64,
    /// Let the built-in autopilot shoot back instead of idling.
    pub autopilot: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_hz: DEFAULT_TICK_HZ,
            max_ticks: None,
            seed: None,
            cooldown_clock: CooldownClock::Wall,
            log_every: DEFAULT_LOG_EVERY,
            autopilot: true,
        }
    }
}

impl RuntimeConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_hz.max(1)))
    }
}

/// Everything needed to build and run one arena.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub enemy_count: usize,
    pub player_spawn: Option<PointConfig>,
    pub world: Extent,
    pub screen: Extent,
    pub runtime: RuntimeConfig,
    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
    pub projectile: ProjectileTuning,
    pub obstacles: Vec<RectConfig>,
    pub homebase: Option<RectConfig>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        let layout = ArenaLayout::default();
        let settings = StageSettings::default();
        Self {
            enemy_count: layout.enemy_count,
            player_spawn: None,
            world: Extent {
                width: settings.world_width,
                height: settings.world_height,
            },
            screen: Extent {
                width: settings.screen_width,
                height: settings.screen_height,
            },
            runtime: RuntimeConfig::default(),
            player: PlayerTuning::default(),
            enemy: EnemyTuning::default(),
            projectile: ProjectileTuning::default(),
            obstacles: layout
                .obstacles
                .iter()
                .map(|r| RectConfig {
                    x: r.x,
                    y: r.y,
                    w: r.width,
                    h: r.height,
                })
                .collect(),
            homebase: layout.homebase.map(|r| RectConfig {
                x: r.x,
                y: r.y,
                w: r.width,
                h: r.height,
            }),
        }
    }
}

impl ArenaConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads the TOML file at `$ARENA_CONFIG` (or `arena.toml`), then applies env overrides.
    /// A missing default file falls back to built-in defaults; a missing explicit file is an error.
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = env::var("ARENA_CONFIG").ok();
        let path = explicit
            .clone()
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
        let mut config = match std::fs::read_to_string(&path) {
            Ok(text) => Self::from_toml(&text)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound && explicit.is_none() => {
                tracing::debug!(%path, "no config file, using defaults");
                Self::default()
            }
            Err(source) => return Err(ConfigError::Io { path, source }),
        };

        config.apply_env_overrides(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `ARENA_*` overrides from `lookup` (the process environment in production).
    pub fn apply_env_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(value) = lookup("ARENA_TICK_HZ") {
            self.runtime.tick_hz = parse_var("ARENA_TICK_HZ", &value)?;
        }
        if let Some(value) = lookup("ARENA_MAX_TICKS") {
            self.runtime.max_ticks = Some(parse_var("ARENA_MAX_TICKS", &value)?);
        }
        if let Some(value) = lookup("ARENA_SEED") {
            self.runtime.seed = Some(parse_var("ARENA_SEED", &value)?);
        }
        if let Some(value) = lookup("ARENA_COOLDOWN_CLOCK") {
            self.runtime.cooldown_clock = value.parse().map_err(ConfigError::Invalid)?;
        }
        if let Some(value) = lookup("ARENA_ENEMY_COUNT") {
            self.enemy_count = parse_var("ARENA_ENEMY_COUNT", &value)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let extents = [
            ("world", self.world),
            ("screen", self.screen),
        ];
        for (name, extent) in extents {
            let finite = extent.width.is_finite() && extent.height.is_finite();
            if !(finite && extent.width > 0.0 && extent.height > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} dimensions must be positive, got {}x{}",
                    extent.width, extent.height
                )));
            }
        }
        if self.runtime.tick_hz == 0 {
            return Err(ConfigError::Invalid("tick_hz must be at least 1".into()));
        }
        if self.player.max_health <= 0 || self.enemy.max_health <= 0 {
            return Err(ConfigError::Invalid("max_health must be positive".into()));
        }

        for (i, rect) in self.obstacles.iter().enumerate() {
            check_rect(&format!("obstacles[{i}]"), rect)?;
        }
        if let Some(homebase) = &self.homebase {
            check_rect("homebase", homebase)?;
        }
        if let Some(spawn) = &self.player_spawn {
            if !(spawn.x.is_finite() && spawn.y.is_finite()) {
                return Err(ConfigError::Invalid("player_spawn must be a finite point".into()));
            }
        }

        let player = &self.player;
        non_negative("player.speed", player.speed.into())?;
        non_negative("player.fire_period_ms", player.fire_period_ms)?;
        non_negative("player.width", player.width.into())?;
        non_negative("player.height", player.height.into())?;
        non_negative("player.aim_radius", player.aim_radius.into())?;

        let enemy = &self.enemy;
        non_negative("enemy.speed", enemy.speed.into())?;
        non_negative("enemy.fire_period_ms", enemy.fire_period_ms)?;
        non_negative("enemy.width", enemy.width.into())?;
        non_negative("enemy.height", enemy.height.into())?;
        non_negative("enemy.pursuit_radius", enemy.pursuit_radius.into())?;
        non_negative("enemy.min_engagement_distance", enemy.min_engagement_distance.into())?;

        let projectile = &self.projectile;
        non_negative("projectile.speed", projectile.speed.into())?;
        non_negative("projectile.radius", projectile.radius.into())?;
        non_negative("projectile.out_of_bounds_margin", projectile.out_of_bounds_margin.into())?;
        non_negative("projectile.damage", projectile.damage.into())?;
        Ok(())
    }

    pub fn stage_settings(&self) -> StageSettings {
        StageSettings {
            world_width: self.world.width,
            world_height: self.world.height,
            screen_width: self.screen.width,
            screen_height: self.screen.height,
            tuning: Tuning {
                player: self.player,
                enemy: self.enemy,
                projectile: self.projectile,
            },
        }
    }

    pub fn layout(&self) -> ArenaLayout {
        ArenaLayout {
            obstacles: self.obstacles.iter().copied().map(Rect::from).collect(),
            homebase: self.homebase.map(Rect::from),
            enemy_count: self.enemy_count,
            player_spawn: self.player_spawn.map(|p| Vec2::new(p.x, p.y)),
        }
    }
}

fn non_negative(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{name} must be a finite non-negative number, got {value}"
        )))
    }
}

// Origins may sit anywhere finite; sizes must be finite and non-negative.
fn check_rect(name: &str, rect: &RectConfig) -> Result<(), ConfigError> {
    if !(rect.x.is_finite() && rect.y.is_finite()) {
        return Err(ConfigError::Invalid(format!("{name} origin must be finite")));
    }
    non_negative(&format!("{name}.w"), rect.w.into())?;
    non_negative(&format!("{name}.h"), rect.h.into())
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("{key} has invalid value '{value}'")))
}
