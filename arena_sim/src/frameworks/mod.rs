// Frameworks layer: runtime bootstrap, configuration and the host loop.

pub mod config;
pub mod runner;
