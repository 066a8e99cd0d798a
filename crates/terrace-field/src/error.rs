/// Failures of terrain sampling and mesh construction.
///
/// All of these are caller mistakes rather than transient conditions; nothing
/// retries them.
#[derive(Clone, Debug, PartialEq)]
pub enum TerrainError {
    /// A tile dimension or other numeric option is out of range.
    InvalidConfig(String),
    /// The height source has no extent, or its data does not match its extent.
    InvalidSource { width: usize, height: usize },
    /// A tile geometry call received fewer than four corners.
    InvalidCorners(usize),
}

impl std::fmt::Display for TerrainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerrainError::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
            TerrainError::InvalidSource { width, height } => {
                write!(f, "invalid height source: {}x{}", width, height)
            }
            TerrainError::InvalidCorners(n) => {
                write!(f, "invalid corners: expected 4, got {}", n)
            }
        }
    }
}

impl std::error::Error for TerrainError {}

/// Checks that a tile dimension is strictly positive (rejects NaN too).
pub fn require_positive(name: &str, value: f32) -> Result<(), TerrainError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(TerrainError::InvalidConfig(format!(
            "{} must be a positive number, got {}",
            name, value
        )))
    }
}
