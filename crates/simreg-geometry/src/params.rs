use serde::{Deserialize, Serialize};

use simreg_image::ImageSize;

use crate::error::GeometryError;
use crate::point::Point2D;
use crate::transform::{
    CenteredMotion2D, CenteredSimilarity2D, Transform2D, Transform3D, Translation2D,
    Translation3D,
};

/// The family of transform to build from registration parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformModel {
    /// Shift only.
    #[default]
    Translation,
    /// Rotation around a center and shift.
    Motion,
    /// Scaling and rotation around a center and shift.
    Similarity,
}

/// The numeric parameters of a manual registration.
///
/// This is a plain snapshot: callers build a new value whenever a parameter
/// changes and derive the transform from it. Parameters that the selected
/// model does not use are ignored.
///
/// # Example
///
/// ```
/// use simreg_geometry::{Point2D, RegistrationParams, Transform, TransformModel};
///
/// let params = RegistrationParams {
///     model: TransformModel::Motion,
///     angle: 90.0,
///     ..Default::default()
/// };
///
/// // the rotation is centered on the middle of a 20x10 reference image
/// let transform = params.to_transform_2d([20, 10].into());
/// let p = transform.transform(&Point2D::new(11.0, 5.0));
/// assert!(p.almost_equals(&Point2D::new(10.0, 6.0), 1e-12));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationParams {
    /// The transform model.
    pub model: TransformModel,
    /// Shift along the x axis, in pixels.
    pub shift_x: f64,
    /// Shift along the y axis, in pixels.
    pub shift_y: f64,
    /// Shift along the z axis, in slices.
    pub shift_z: f64,
    /// Rotation angle in degrees.
    pub angle: f64,
    /// Binary logarithm of the scaling factor.
    pub log_scaling: f64,
    /// Center of rotation and scaling. Defaults to the reference image center.
    pub center: Option<Point2D>,
}

impl RegistrationParams {
    /// The center used by the centered models for a given reference size.
    pub fn center_for(&self, reference_size: ImageSize) -> Point2D {
        self.center.unwrap_or(Point2D::new(
            reference_size.width as f64 / 2.0,
            reference_size.height as f64 / 2.0,
        ))
    }

    /// Build the planar transform described by the parameters.
    ///
    /// # Arguments
    ///
    /// * `reference_size` - The size of the reference image, used for the default center.
    pub fn to_transform_2d(&self, reference_size: ImageSize) -> Transform2D {
        match self.model {
            TransformModel::Translation => {
                Translation2D::new(self.shift_x, self.shift_y).into()
            }
            TransformModel::Motion => CenteredMotion2D::new(
                self.center_for(reference_size),
                self.angle,
                self.shift_x,
                self.shift_y,
            )
            .into(),
            TransformModel::Similarity => CenteredSimilarity2D::new(
                self.center_for(reference_size),
                self.log_scaling,
                self.angle,
                self.shift_x,
                self.shift_y,
            )
            .into(),
        }
    }

    /// Build the 3D transform described by the parameters.
    ///
    /// # Errors
    ///
    /// Only translations exist in 3D; other models return
    /// [`GeometryError::UnsupportedModel`].
    pub fn to_transform_3d(&self) -> Result<Transform3D, GeometryError> {
        match self.model {
            TransformModel::Translation => {
                Ok(Translation3D::new(self.shift_x, self.shift_y, self.shift_z).into())
            }
            model => Err(GeometryError::UnsupportedModel(model, 3)),
        }
    }
}
