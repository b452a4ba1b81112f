use serde::{Deserialize, Serialize};

use simreg_geometry::{
    CenteredMotion2D, CenteredSimilarity2D, Point2D, Transform2D, Transform3D, Translation2D,
    Translation3D,
};
use simreg_image::{ImageBuffer, PixelType};

use crate::error::IoError;

/// The value of the `type` field of a registration record.
pub const REGISTRATION_RECORD_TYPE: &str = "Registration";

/// Describes one image of a registration: its name, size and pixel type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    /// The name of the image.
    pub name: String,
    /// The number of dimensions, 2 for planar images and 3 for volumes.
    pub ndims: usize,
    /// The size along each dimension: width, height and depth for volumes.
    pub size: Vec<usize>,
    /// The pixel type of the image.
    #[serde(rename = "type")]
    pub pixel_type: PixelType,
}

impl ImageDescriptor {
    /// Describe an image buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use simreg_image::{Image, ImageBuffer, PixelType};
    /// use simreg_io::record::ImageDescriptor;
    ///
    /// let buffer: ImageBuffer = Image::<u16, 1>::zeros([30, 20].into()).into();
    /// let desc = ImageDescriptor::from_buffer("cells", &buffer);
    ///
    /// assert_eq!(desc.ndims, 2);
    /// assert_eq!(desc.size, vec![30, 20]);
    /// assert_eq!(desc.pixel_type, PixelType::Gray16);
    /// ```
    pub fn from_buffer(name: impl Into<String>, buffer: &ImageBuffer) -> Self {
        let size = buffer.size();
        let ndims = buffer.ndims();
        let size = match ndims {
            2 => vec![size.width, size.height],
            _ => vec![size.width, size.height, size.depth],
        };

        Self {
            name: name.into(),
            ndims,
            size,
            pixel_type: buffer.pixel_type(),
        }
    }

    /// Check that the dimensions of the descriptor are consistent.
    pub fn validate(&self) -> Result<(), IoError> {
        if !(2..=3).contains(&self.ndims) {
            return Err(IoError::InvalidImageDescriptor(
                self.name.clone(),
                format!("ndims must be 2 or 3, got {}", self.ndims),
            ));
        }

        if self.size.len() != self.ndims {
            return Err(IoError::InvalidImageDescriptor(
                self.name.clone(),
                format!(
                    "size has {} entries but ndims is {}",
                    self.size.len(),
                    self.ndims
                ),
            ));
        }

        Ok(())
    }

    /// Check that a buffer has the size and pixel type of the descriptor.
    ///
    /// Useful to apply a stored registration to freshly loaded images.
    pub fn ensure_matches(&self, buffer: &ImageBuffer) -> Result<(), IoError> {
        let other = Self::from_buffer(self.name.clone(), buffer);
        if other.size != self.size || other.pixel_type != self.pixel_type {
            return Err(IoError::InvalidImageDescriptor(
                self.name.clone(),
                format!(
                    "expected {:?} {}, got {:?} {}",
                    self.size, self.pixel_type, other.size, other.pixel_type
                ),
            ));
        }
        Ok(())
    }
}

/// The serialized form of a transform, tagged by its `type` field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TransformRecord {
    /// A planar translation.
    #[serde(rename_all = "camelCase")]
    Translation2D {
        /// Shift along the x axis.
        shift_x: f64,
        /// Shift along the y axis.
        shift_y: f64,
    },
    /// A planar rotation around a center followed by a shift.
    #[serde(rename_all = "camelCase")]
    CenteredMotion2D {
        /// X coordinate of the center.
        center_x: f64,
        /// Y coordinate of the center.
        center_y: f64,
        /// Rotation angle in degrees.
        angle: f64,
        /// Shift along the x axis.
        shift_x: f64,
        /// Shift along the y axis.
        shift_y: f64,
    },
    /// A planar scaling and rotation around a center followed by a shift.
    #[serde(rename_all = "camelCase")]
    CenteredSimilarity2D {
        /// X coordinate of the center.
        center_x: f64,
        /// Y coordinate of the center.
        center_y: f64,
        /// Rotation angle in degrees.
        angle: f64,
        /// Binary logarithm of the scaling factor.
        log_scaling: f64,
        /// Shift along the x axis.
        shift_x: f64,
        /// Shift along the y axis.
        shift_y: f64,
    },
    /// A 3D translation.
    #[serde(rename_all = "camelCase")]
    Translation3D {
        /// Shift along the x axis.
        shift_x: f64,
        /// Shift along the y axis.
        shift_y: f64,
        /// Shift along the z axis.
        shift_z: f64,
    },
}

impl TransformRecord {
    /// The value of the `type` field.
    pub fn type_name(&self) -> &'static str {
        match self {
            TransformRecord::Translation2D { .. } => "Translation2D",
            TransformRecord::CenteredMotion2D { .. } => "CenteredMotion2D",
            TransformRecord::CenteredSimilarity2D { .. } => "CenteredSimilarity2D",
            TransformRecord::Translation3D { .. } => "Translation3D",
        }
    }

    /// The dimension of the points the transform applies to.
    pub fn ndims(&self) -> usize {
        match self {
            TransformRecord::Translation3D { .. } => 3,
            _ => 2,
        }
    }
}

impl From<Transform2D> for TransformRecord {
    fn from(transform: Transform2D) -> Self {
        match transform {
            Transform2D::Translation(t) => TransformRecord::Translation2D {
                shift_x: t.shift_x,
                shift_y: t.shift_y,
            },
            Transform2D::CenteredMotion(t) => TransformRecord::CenteredMotion2D {
                center_x: t.center.x,
                center_y: t.center.y,
                angle: t.angle,
                shift_x: t.shift_x,
                shift_y: t.shift_y,
            },
            Transform2D::CenteredSimilarity(t) => TransformRecord::CenteredSimilarity2D {
                center_x: t.center.x,
                center_y: t.center.y,
                angle: t.angle,
                log_scaling: t.log_scaling,
                shift_x: t.shift_x,
                shift_y: t.shift_y,
            },
        }
    }
}

impl From<Transform3D> for TransformRecord {
    fn from(transform: Transform3D) -> Self {
        match transform {
            Transform3D::Translation(t) => TransformRecord::Translation3D {
                shift_x: t.shift_x,
                shift_y: t.shift_y,
                shift_z: t.shift_z,
            },
        }
    }
}

impl TryFrom<TransformRecord> for Transform2D {
    type Error = IoError;

    fn try_from(record: TransformRecord) -> Result<Self, Self::Error> {
        let transform = match record {
            TransformRecord::Translation2D { shift_x, shift_y } => {
                Translation2D::new(shift_x, shift_y).into()
            }
            TransformRecord::CenteredMotion2D {
                center_x,
                center_y,
                angle,
                shift_x,
                shift_y,
            } => CenteredMotion2D::new(Point2D::new(center_x, center_y), angle, shift_x, shift_y)
                .into(),
            TransformRecord::CenteredSimilarity2D {
                center_x,
                center_y,
                angle,
                log_scaling,
                shift_x,
                shift_y,
            } => CenteredSimilarity2D::new(
                Point2D::new(center_x, center_y),
                log_scaling,
                angle,
                shift_x,
                shift_y,
            )
            .into(),
            other => {
                return Err(IoError::InvalidTransformDimension(other.type_name(), 2));
            }
        };
        Ok(transform)
    }
}

impl TryFrom<TransformRecord> for Transform3D {
    type Error = IoError;

    fn try_from(record: TransformRecord) -> Result<Self, Self::Error> {
        match record {
            TransformRecord::Translation3D {
                shift_x,
                shift_y,
                shift_z,
            } => Ok(Translation3D::new(shift_x, shift_y, shift_z).into()),
            other => Err(IoError::InvalidTransformDimension(other.type_name(), 3)),
        }
    }
}

/// The result of a registration: the two images and the transform between them.
///
/// The transform maps points of the reference image to the points of the
/// moving image to sample.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    /// Always [`REGISTRATION_RECORD_TYPE`] for valid records.
    #[serde(rename = "type")]
    pub record_type: String,
    /// The reference image, defining the output grid.
    pub reference_image: ImageDescriptor,
    /// The moving image, sampled through the transform.
    pub moving_image: ImageDescriptor,
    /// The transform from reference space to moving image space.
    pub transform: TransformRecord,
}

impl RegistrationRecord {
    /// Create a new registration record.
    ///
    /// # Arguments
    ///
    /// * `reference_image` - The descriptor of the reference image.
    /// * `moving_image` - The descriptor of the moving image.
    /// * `transform` - A [`Transform2D`], a [`Transform3D`] or a [`TransformRecord`].
    pub fn new(
        reference_image: ImageDescriptor,
        moving_image: ImageDescriptor,
        transform: impl Into<TransformRecord>,
    ) -> Self {
        Self {
            record_type: REGISTRATION_RECORD_TYPE.to_string(),
            reference_image,
            moving_image,
            transform: transform.into(),
        }
    }

    /// Check the record type and both image descriptors.
    pub fn validate(&self) -> Result<(), IoError> {
        if self.record_type != REGISTRATION_RECORD_TYPE {
            return Err(IoError::InvalidRecordType(self.record_type.clone()));
        }
        self.reference_image.validate()?;
        self.moving_image.validate()
    }

    /// The stored transform as a planar transform.
    pub fn transform_2d(&self) -> Result<Transform2D, IoError> {
        self.transform.try_into()
    }

    /// The stored transform as a 3D transform.
    pub fn transform_3d(&self) -> Result<Transform3D, IoError> {
        self.transform.try_into()
    }
}
