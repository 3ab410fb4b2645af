use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid band options: {0}")]
    InvalidOptions(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
