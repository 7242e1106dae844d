use thiserror::Error;

/// Invalid-argument failures raised while building a provider.
///
/// All of these are caller mistakes; none are worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PositionError {
    #[error("corner value {0} is out of range (expected 0..=5)")]
    InvalidCorner(i32),

    #[error("unknown corner name '{0}'")]
    InvalidCornerName(String),

    #[error("{axis} offset must be a finite, non-negative number of pixels, got {value}")]
    InvalidOffset { axis: &'static str, value: f64 },

    #[error("screen metrics must be finite, got {0}")]
    InvalidMetrics(String),
}

pub type Result<T> = std::result::Result<T, PositionError>;
