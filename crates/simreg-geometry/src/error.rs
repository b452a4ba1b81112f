use crate::params::TransformModel;

/// An error type for the geometry module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GeometryError {
    /// Error when an operation needs at least one point.
    #[error("Cannot compute the centroid of an empty point set")]
    EmptyPointSet,

    /// Error when a coordinate axis does not exist.
    #[error("Dimension should be comprised between 0 and {1}, got {0}")]
    InvalidDimension(usize, usize),

    /// Error when a transform model has no counterpart in the requested dimension.
    #[error("Transform model {0:?} is not available in {1}D")]
    UnsupportedModel(TransformModel, usize),
}
