use thiserror::Error;

/// Top-level error type for the geomask kernel.
#[derive(Debug, Error)]
pub enum GeomaskError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Errors raised while building a boundary.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("unsupported dimension {dim}, expected 2 or 3")]
    UnsupportedDimension { dim: usize },

    #[error("invalid face {face}: {reason}")]
    InvalidFace { face: usize, reason: String },
}

/// Errors raised by containment queries and rasterization.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("dimension mismatch: boundary is {expected}-dimensional, input is {found}-dimensional")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("invalid grid shape {shape:?}: every extent must be positive")]
    InvalidShape { shape: Vec<usize> },

    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`GeomaskError`].
pub type Result<T> = std::result::Result<T, GeomaskError>;
