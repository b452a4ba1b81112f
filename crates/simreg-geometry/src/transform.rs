//! Geometric transforms used to register a moving image onto a reference image.
//!
//! Every transform maps a point of the reference image space to the point of
//! the moving image space that has to be sampled. Parameters are applied
//! exactly as given by all variants: a positive `shift_x` samples the moving
//! image at `x + shift_x`, so the content of the moving image appears shifted
//! by `-shift_x` once resampled on the reference grid.
//!
//! # Examples
//!
//! ```
//! use simreg_geometry::{CenteredMotion2D, Point2D, Transform};
//!
//! let motion = CenteredMotion2D::new(Point2D::new(10.0, 10.0), 90.0, 0.0, 0.0);
//! let p = motion.transform(&Point2D::new(11.0, 10.0));
//! assert!(p.almost_equals(&Point2D::new(10.0, 11.0), 1e-12));
//! ```

use crate::point::{Point2D, Point3D};

/// A mapping from reference space to moving image space.
///
/// Implementations are pure: the result only depends on the construction
/// parameters and the input point.
pub trait Transform<P>: Send + Sync {
    /// Apply the transform to a point.
    fn transform(&self, point: &P) -> P;
}

/// A 2D translation defined by the shift in each dimension.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Translation2D {
    /// Shift along the x axis.
    pub shift_x: f64,
    /// Shift along the y axis.
    pub shift_y: f64,
}

impl Translation2D {
    /// Create a new translation.
    pub const fn new(shift_x: f64, shift_y: f64) -> Self {
        Self { shift_x, shift_y }
    }

    /// The translation with opposite shift.
    pub fn inverse(&self) -> Self {
        Self::new(-self.shift_x, -self.shift_y)
    }
}

impl Transform<Point2D> for Translation2D {
    fn transform(&self, point: &Point2D) -> Point2D {
        point.translate(self.shift_x, self.shift_y)
    }
}

/// A rotation around a center point, followed by a translation.
///
/// The point is moved to the center frame, rotated, shifted and then moved
/// back to the global frame. The order of these steps is part of the model.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CenteredMotion2D {
    /// The center of the rotation.
    pub center: Point2D,
    /// The angle of rotation in degrees.
    pub angle: f64,
    /// Shift along the x axis.
    pub shift_x: f64,
    /// Shift along the y axis.
    pub shift_y: f64,
}

impl CenteredMotion2D {
    /// Create a new centered motion.
    ///
    /// # Arguments
    ///
    /// * `center` - The center of the rotation.
    /// * `angle` - The angle of rotation in degrees.
    /// * `shift_x` - The shift along the x axis.
    /// * `shift_y` - The shift along the y axis.
    pub const fn new(center: Point2D, angle: f64, shift_x: f64, shift_y: f64) -> Self {
        Self {
            center,
            angle,
            shift_x,
            shift_y,
        }
    }

    /// The motion that undoes this one, around the same center.
    pub fn inverse(&self) -> Self {
        let shift = Point2D::new(self.shift_x, self.shift_y).rotate(-self.angle.to_radians());
        Self::new(self.center, -self.angle, -shift.x, -shift.y)
    }
}

impl Transform<Point2D> for CenteredMotion2D {
    fn transform(&self, point: &Point2D) -> Point2D {
        point
            .translate(-self.center.x, -self.center.y)
            .rotate(self.angle.to_radians())
            .translate(self.shift_x, self.shift_y)
            .translate(self.center.x, self.center.y)
    }
}

/// A scaling and rotation around a center point, followed by a translation.
///
/// The scaling factor is given by its binary logarithm, so that opposite
/// values of `log_scaling` give inverse scalings.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CenteredSimilarity2D {
    /// The center of the scaling and rotation.
    pub center: Point2D,
    /// The binary logarithm of the scaling factor.
    pub log_scaling: f64,
    /// The angle of rotation in degrees.
    pub angle: f64,
    /// Shift along the x axis.
    pub shift_x: f64,
    /// Shift along the y axis.
    pub shift_y: f64,
}

impl CenteredSimilarity2D {
    /// Create a new centered similarity.
    ///
    /// # Arguments
    ///
    /// * `center` - The center of the scaling and rotation.
    /// * `log_scaling` - The binary logarithm of the scaling factor.
    /// * `angle` - The angle of rotation in degrees.
    /// * `shift_x` - The shift along the x axis.
    /// * `shift_y` - The shift along the y axis.
    pub const fn new(
        center: Point2D,
        log_scaling: f64,
        angle: f64,
        shift_x: f64,
        shift_y: f64,
    ) -> Self {
        Self {
            center,
            log_scaling,
            angle,
            shift_x,
            shift_y,
        }
    }

    /// The scaling factor `2^log_scaling`.
    pub fn scaling_factor(&self) -> f64 {
        self.log_scaling.exp2()
    }

    /// The similarity that undoes this one, around the same center.
    pub fn inverse(&self) -> Self {
        let shift = Point2D::new(self.shift_x, self.shift_y)
            .rotate(-self.angle.to_radians())
            .scale(1.0 / self.scaling_factor());
        Self::new(
            self.center,
            -self.log_scaling,
            -self.angle,
            -shift.x,
            -shift.y,
        )
    }
}

impl Transform<Point2D> for CenteredSimilarity2D {
    fn transform(&self, point: &Point2D) -> Point2D {
        point
            .translate(-self.center.x, -self.center.y)
            .scale(self.scaling_factor())
            .rotate(self.angle.to_radians())
            .translate(self.shift_x, self.shift_y)
            .translate(self.center.x, self.center.y)
    }
}

/// A 3D translation defined by the shift in each dimension.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Translation3D {
    /// Shift along the x axis.
    pub shift_x: f64,
    /// Shift along the y axis.
    pub shift_y: f64,
    /// Shift along the z axis.
    pub shift_z: f64,
}

impl Translation3D {
    /// Create a new translation.
    pub const fn new(shift_x: f64, shift_y: f64, shift_z: f64) -> Self {
        Self {
            shift_x,
            shift_y,
            shift_z,
        }
    }

    /// The translation with opposite shift.
    pub fn inverse(&self) -> Self {
        Self::new(-self.shift_x, -self.shift_y, -self.shift_z)
    }
}

impl Transform<Point3D> for Translation3D {
    fn transform(&self, point: &Point3D) -> Point3D {
        point.translate(self.shift_x, self.shift_y, self.shift_z)
    }
}

/// The planar transform models.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform2D {
    /// A pure translation.
    Translation(Translation2D),
    /// A rotation around a center, followed by a translation.
    CenteredMotion(CenteredMotion2D),
    /// A scaling and rotation around a center, followed by a translation.
    CenteredSimilarity(CenteredSimilarity2D),
}

impl Transform2D {
    /// The identity transform.
    pub const fn identity() -> Self {
        Transform2D::Translation(Translation2D::new(0.0, 0.0))
    }

    /// The transform that undoes this one.
    pub fn inverse(&self) -> Self {
        match self {
            Transform2D::Translation(t) => Transform2D::Translation(t.inverse()),
            Transform2D::CenteredMotion(t) => Transform2D::CenteredMotion(t.inverse()),
            Transform2D::CenteredSimilarity(t) => Transform2D::CenteredSimilarity(t.inverse()),
        }
    }
}

impl Transform<Point2D> for Transform2D {
    fn transform(&self, point: &Point2D) -> Point2D {
        match self {
            Transform2D::Translation(t) => t.transform(point),
            Transform2D::CenteredMotion(t) => t.transform(point),
            Transform2D::CenteredSimilarity(t) => t.transform(point),
        }
    }
}

impl From<Translation2D> for Transform2D {
    fn from(t: Translation2D) -> Self {
        Transform2D::Translation(t)
    }
}

impl From<CenteredMotion2D> for Transform2D {
    fn from(t: CenteredMotion2D) -> Self {
        Transform2D::CenteredMotion(t)
    }
}

impl From<CenteredSimilarity2D> for Transform2D {
    fn from(t: CenteredSimilarity2D) -> Self {
        Transform2D::CenteredSimilarity(t)
    }
}

/// The 3D transform models.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform3D {
    /// A pure translation.
    Translation(Translation3D),
}

impl Transform3D {
    /// The identity transform.
    pub const fn identity() -> Self {
        Transform3D::Translation(Translation3D::new(0.0, 0.0, 0.0))
    }

    /// The transform that undoes this one.
    pub fn inverse(&self) -> Self {
        match self {
            Transform3D::Translation(t) => Transform3D::Translation(t.inverse()),
        }
    }
}

impl Transform<Point3D> for Transform3D {
    fn transform(&self, point: &Point3D) -> Point3D {
        match self {
            Transform3D::Translation(t) => t.transform(point),
        }
    }
}

impl From<Translation3D> for Transform3D {
    fn from(t: Translation3D) -> Self {
        Transform3D::Translation(t)
    }
}
