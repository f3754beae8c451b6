use thiserror::Error;

/// Failures detected while building timers, animations, entities or levels.
///
/// These are all construction-time problems: once a `World` exists the frame
/// step itself cannot fail.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("timer length must be positive and finite, got {0}")]
    InvalidTimerLength(f32),

    #[error("animation must have at least one frame")]
    EmptyAnimation,

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("level has no player spawn")]
    MissingPlayer,

    #[error("level declares more than one player spawn")]
    DuplicatePlayer,

    #[error("tile layer '{layer}' has {actual} cells, expected {expected}")]
    LayerSizeMismatch {
        layer: String,
        expected: usize,
        actual: usize,
    },

    #[error("tile gid {gid} in layer '{layer}' is not covered by any tileset")]
    UnknownTile { layer: String, gid: u32 },

    #[error("unknown spawn type '{0}'")]
    UnknownSpawn(String),

    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
