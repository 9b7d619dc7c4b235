use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid plot geometry: width={width}, height={height}")]
    InvalidGeometry { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown axis identifier `{0}` (expected `x` or `y`)")]
    InvalidAxis(String),

    #[error("series has no numeric values for field `{0}`")]
    MissingField(String),
}
