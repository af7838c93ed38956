pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use frameworks::config::{ArenaConfig, ConfigError};
pub use frameworks::runner::{Arena, RunError, RunSummary, StopReason, init_runtime, run, run_stage};
