use thiserror::Error;

/// Top-level error type for the Inkmesh stroke kernel.
#[derive(Debug, Error)]
pub enum InkmeshError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("non-finite {component} = {value}")]
    NonFinite { component: &'static str, value: f64 },
}

/// Errors related to stroke operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("offset count {actual} does not match vertex count {expected}")]
    OffsetCountMismatch { expected: usize, actual: usize },
}

/// Convenience type alias for results using [`InkmeshError`].
pub type Result<T> = std::result::Result<T, InkmeshError>;
