use thiserror::Error;

/// Top-level error type for the geopoly crate.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while building a polygon from its input shape.
#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("polygon must have at least 3 points, found {found}")]
    TooFewPoints { found: usize },

    #[error("cannot construct polygon: {0}")]
    Unrecognized(String),
}

/// Errors raised while parsing coordinate or polygon text.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("invalid coordinate: {0:?}")]
    InvalidCoordinate(String),

    #[error("invalid WKT polygon: {0}")]
    InvalidWkt(String),

    #[error("unknown boolean operation: {0:?}")]
    UnknownOperation(String),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to polygon boolean operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("face walk from sub-edge {start_edge} did not close within {steps} steps")]
    FaceExtraction { start_edge: usize, steps: usize },
}

/// Convenience type alias for results using [`GeoError`].
pub type Result<T> = std::result::Result<T, GeoError>;
