#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the geometry module.
pub mod error;

/// Registration parameters and transform builders.
pub mod params;

/// 2D and 3D points.
pub mod point;

/// Transform models from reference space to moving image space.
pub mod transform;

pub use crate::error::GeometryError;
pub use crate::params::{RegistrationParams, TransformModel};
pub use crate::point::{Point2D, Point3D};
pub use crate::transform::{
    CenteredMotion2D, CenteredSimilarity2D, Transform, Transform2D, Transform3D, Translation2D,
    Translation3D,
};
