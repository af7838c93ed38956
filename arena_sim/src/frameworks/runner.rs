// Framework bootstrap and host loop for the arena runtime.

use crate::domain::{Clock, SetupError, StageEvent};
use crate::frameworks::config::{ArenaConfig, RuntimeConfig};
use crate::interface_adapters::clock::NOMINAL_FRAME_MS;
use crate::interface_adapters::input::{AutopilotInput, IdleInput, InputSource};
use crate::interface_adapters::minimap::Minimap;
use crate::interface_adapters::protocol::{StageEventDto, StageSnapshotDto};
use crate::interface_adapters::utils::rng::arena_rng;
use crate::use_cases::{Stage, StageSnapshot, StageStatus, build_stage};

use std::{fmt, sync::Arc};
use tokio::sync::{Notify, watch};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Upper bound on a single tick's delta, in nominal frames.
pub const MAX_FRAME_DELTA: f32 = 4.0;

/// Used when `RUST_LOG` is unset or unparsable: this crate at info, dependencies at warn.
pub const DEFAULT_LOG_FILTER: &str = "warn,arena_sim=info";

/// Loads `.env`, installs the tracing subscriber and routes panics through tracing.
///
/// `LOG_FORMAT=json` switches to JSON lines with the current span attached.
pub fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    GameOver,
    EnemiesCleared,
    TickLimit,
    Shutdown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub reason: StopReason,
    pub ticks: u64,
    pub enemies_left: usize,
    pub player_health: Option<i32>,
}

#[derive(Debug)]
pub enum RunError {
    Setup(SetupError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Setup(e) => write!(f, "arena setup failed: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::Setup(e) => Some(e),
        }
    }
}

impl From<SetupError> for RunError {
    fn from(e: SetupError) -> Self {
        RunError::Setup(e)
    }
}

/// A built arena waiting to run. Subscribe before `run` to follow the live snapshots.
pub struct Arena {
    stage: Stage<Box<dyn Clock>>,
    input: Box<dyn InputSource>,
    runtime: RuntimeConfig,
    snapshot_tx: watch::Sender<StageSnapshot>,
}

impl Arena {
    pub fn build(config: &ArenaConfig) -> Result<Self, RunError> {
        let (mut rng, seed) = arena_rng(config.runtime.seed);
        let clock = config.runtime.cooldown_clock.build();
        let stage = build_stage(config.stage_settings(), &config.layout(), clock, &mut rng)?;
        info!(
            seed,
            tick_hz = config.runtime.tick_hz,
            cooldown_clock = ?config.runtime.cooldown_clock,
            "arena ready"
        );

        let input: Box<dyn InputSource> = if config.runtime.autopilot {
            Box::new(AutopilotInput)
        } else {
            Box::new(IdleInput)
        };
        let (snapshot_tx, _) = watch::channel(stage.snapshot());

        Ok(Self {
            stage,
            input,
            runtime: config.runtime.clone(),
            snapshot_tx,
        })
    }

    /// Latest-wins view of the stage, updated after every tick.
    pub fn subscribe(&self) -> watch::Receiver<StageSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Drives the stage until the match ends, the tick limit is hit, or ctrl-c.
    pub async fn run(self) -> RunSummary {
        let Arena {
            stage,
            mut input,
            runtime,
            snapshot_tx,
        } = self;

        let shutdown = Arc::new(Notify::new());
        let signal_task = tokio::spawn({
            let shutdown = shutdown.clone();
            async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    info!("ctrl-c received");
                    shutdown.notify_one();
                }
            }
        });

        let summary = run_stage(stage, input.as_mut(), &runtime, &snapshot_tx, shutdown).await;
        signal_task.abort();
        summary
    }
}

/// Builds and runs an arena with nobody watching its snapshots; use [`Arena`] to subscribe.
pub async fn run(config: ArenaConfig) -> Result<RunSummary, RunError> {
    Ok(Arena::build(&config)?.run().await)
}

/// Ticks `stage` on a fixed interval, publishing the latest snapshot after every tick.
///
/// The delta handed to the stage is the real time since the previous tick, in nominal frames.
pub async fn run_stage<C: Clock>(
    mut stage: Stage<C>,
    input: &mut dyn InputSource,
    runtime: &RuntimeConfig,
    snapshot_tx: &watch::Sender<StageSnapshot>,
    shutdown: Arc<Notify>,
) -> RunSummary {
    let mut interval = tokio::time::interval(runtime.tick_interval());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut minimap = Minimap::new(stage.settings().viewport());
    minimap.set_obstacles(&stage.snapshot().obstacles);

    let mut last_tick: Option<Instant> = None;
    let mut snapshot = stage.snapshot();

    let reason = loop {
        tokio::select! {
            biased;
            _ = shutdown.notified() => {
                break StopReason::Shutdown;
            }
            now = interval.tick() => {
                let delta = last_tick
                    .map(|prev| frames_between(prev, now))
                    .unwrap_or(1.0);
                last_tick = Some(now);

                let frame_input = input.poll(&snapshot);
                let events = stage.tick(delta, &frame_input);
                log_events(&events);

                snapshot = stage.snapshot();
                snapshot_tx.send_replace(snapshot.clone());

                if runtime.log_every > 0 && snapshot.tick % runtime.log_every == 0 {
                    log_snapshot(&snapshot);
                    debug!(minimap = ?minimap.update(&snapshot), "minimap");
                }

                if let Some(reason) = stop_reason(&snapshot, runtime) {
                    break reason;
                }
            }
        }
    };

    let summary = RunSummary {
        reason,
        ticks: snapshot.tick,
        enemies_left: snapshot.enemies.len(),
        player_health: snapshot.player.as_ref().map(|p| p.health),
    };
    info!(
        reason = ?summary.reason,
        ticks = summary.ticks,
        enemies_left = summary.enemies_left,
        player_health = ?summary.player_health,
        "arena stopped"
    );
    summary
}

fn frames_between(prev: Instant, now: Instant) -> f32 {
    let elapsed_ms = now.saturating_duration_since(prev).as_secs_f64() * 1000.0;
    ((elapsed_ms / NOMINAL_FRAME_MS) as f32).min(MAX_FRAME_DELTA)
}

fn stop_reason(snapshot: &StageSnapshot, runtime: &RuntimeConfig) -> Option<StopReason> {
    if matches!(snapshot.status, StageStatus::GameOver { .. }) {
        return Some(StopReason::GameOver);
    }
    if snapshot.enemies.is_empty() {
        return Some(StopReason::EnemiesCleared);
    }
    match runtime.max_ticks {
        Some(max) if snapshot.tick >= max => Some(StopReason::TickLimit),
        _ => None,
    }
}

fn log_events(events: &[StageEvent]) {
    for event in events {
        match event {
            StageEvent::EnemyKilled { id, by } => info!(enemy_id = %id, killer_id = %by, "enemy killed"),
            StageEvent::PlayerKilled { by } => info!(killer_id = %by, "player killed"),
            _ => match serde_json::to_string(&StageEventDto::from(event)) {
                Ok(json) => debug!(event = %json, "stage event"),
                Err(e) => warn!(error = %e, "failed to serialize event"),
            },
        }
    }
}

fn log_snapshot(snapshot: &StageSnapshot) {
    match serde_json::to_string(&StageSnapshotDto::from(snapshot)) {
        Ok(json) => info!(tick = snapshot.tick, snapshot = %json, "snapshot"),
        Err(e) => warn!(tick = snapshot.tick, error = %e, "failed to serialize snapshot"),
    }
}
