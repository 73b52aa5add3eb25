// error.rs - Engine error type
//
// Terrain parsing never fails (bad tokens are skipped), so everything here
// comes from queries and configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Column query outside `[0, len)`. The engine is left untouched.
    #[error("column index {index} out of range for terrain of {len} columns")]
    IndexOutOfRange { index: usize, len: usize },

    /// Elevations must be finite and non-negative.
    #[error("invalid elevation {value} at column {index}")]
    InvalidElevation { index: usize, value: f64 },

    /// Render target larger than `render::MAX_CELLS`.
    #[error("canvas {w}x{h} is too large to render")]
    CanvasTooLarge { w: u32, h: u32 },

    #[error("invalid simulation config: {0}")]
    InvalidConfig(String),

    #[error("malformed config JSON: {0}")]
    ConfigFormat(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
