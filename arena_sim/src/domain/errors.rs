// Domain-level errors for arena setup. The per-frame simulation itself never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum SetupError {
    /// Every sampled spawn point for this enemy overlapped an obstacle.
    NoSpawnPosition { enemy: usize, attempts: usize },
    /// The world is smaller than an actor's visual extent.
    WorldTooSmall { width: f32, height: f32 },
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::NoSpawnPosition { enemy, attempts } => write!(
                f,
                "no free spawn position for enemy {enemy} after {attempts} attempts"
            ),
            SetupError::WorldTooSmall { width, height } => {
                write!(f, "world {width}x{height} cannot fit an actor")
            }
        }
    }
}

impl std::error::Error for SetupError {}
