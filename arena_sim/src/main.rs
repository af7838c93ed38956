use arena_sim::{ArenaConfig, init_runtime, run};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    init_runtime();

    let config = match ArenaConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "failed to load config");
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "arena failed");
            ExitCode::FAILURE
        }
    }
}
