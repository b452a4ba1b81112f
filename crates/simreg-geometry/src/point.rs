use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// A point with floating point coordinates in the plane.
///
/// Points are values: every operation returns a new point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// The x coordinate of the point.
    pub x: f64,
    /// The y coordinate of the point.
    pub y: f64,
}

impl Point2D {
    /// Create a new point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Computes the centroid of a collection of points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyPointSet`] when `points` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use simreg_geometry::Point2D;
    ///
    /// let points = [Point2D::new(0.0, 0.0), Point2D::new(4.0, 2.0)];
    /// let centroid = Point2D::centroid(&points).unwrap();
    /// assert_eq!(centroid, Point2D::new(2.0, 1.0));
    /// ```
    pub fn centroid(points: &[Point2D]) -> Result<Point2D, GeometryError> {
        if points.is_empty() {
            return Err(GeometryError::EmptyPointSet);
        }

        let (sx, sy) = points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        let n = points.len() as f64;

        Ok(Point2D::new(sx / n, sy / n))
    }

    /// Returns the point shifted by `(tx, ty)`.
    pub fn translate(&self, tx: f64, ty: f64) -> Point2D {
        Point2D::new(self.x + tx, self.y + ty)
    }

    /// Returns the point rotated counter-clockwise around the origin.
    ///
    /// # Arguments
    ///
    /// * `angle` - The angle of rotation in radians.
    pub fn rotate(&self, angle: f64) -> Point2D {
        let (sit, cot) = angle.sin_cos();
        Point2D::new(self.x * cot - self.y * sit, self.x * sit + self.y * cot)
    }

    /// Returns the point scaled by `k` around the origin.
    pub fn scale(&self, k: f64) -> Point2D {
        Point2D::new(self.x * k, self.y * k)
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Checks that every coordinate is within `eps` of the other point's.
    pub fn almost_equals(&self, other: &Point2D, eps: f64) -> bool {
        (other.x - self.x).abs() <= eps && (other.y - self.y).abs() <= eps
    }

    /// Get the coordinate along axis `dim` (0 for x, 1 for y).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidDimension`] for any other axis.
    pub fn get(&self, dim: usize) -> Result<f64, GeometryError> {
        match dim {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(GeometryError::InvalidDimension(dim, 1)),
        }
    }
}

impl From<[f64; 2]> for Point2D {
    fn from(p: [f64; 2]) -> Self {
        Point2D::new(p[0], p[1])
    }
}

impl From<Point2D> for [f64; 2] {
    fn from(p: Point2D) -> Self {
        [p.x, p.y]
    }
}

impl std::fmt::Display for Point2D {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Point2D({},{})", self.x, self.y)
    }
}

/// A point with floating point coordinates in a three-dimensional space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    /// The x coordinate of the point.
    pub x: f64,
    /// The y coordinate of the point.
    pub y: f64,
    /// The z coordinate of the point.
    pub z: f64,
}

impl Point3D {
    /// Create a new point from its coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Computes the centroid of a collection of points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyPointSet`] when `points` is empty.
    pub fn centroid(points: &[Point3D]) -> Result<Point3D, GeometryError> {
        if points.is_empty() {
            return Err(GeometryError::EmptyPointSet);
        }

        let (sx, sy, sz) = points.iter().fold((0.0, 0.0, 0.0), |(sx, sy, sz), p| {
            (sx + p.x, sy + p.y, sz + p.z)
        });
        let n = points.len() as f64;

        Ok(Point3D::new(sx / n, sy / n, sz / n))
    }

    /// Returns the point shifted by `(tx, ty, tz)`.
    pub fn translate(&self, tx: f64, ty: f64, tz: f64) -> Point3D {
        Point3D::new(self.x + tx, self.y + ty, self.z + tz)
    }

    /// Homogeneous scaling by a factor `k` around the origin.
    pub fn scale(&self, k: f64) -> Point3D {
        Point3D::new(self.x * k, self.y * k, self.z * k)
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point3D) -> f64 {
        (self.x - other.x)
            .hypot(self.y - other.y)
            .hypot(self.z - other.z)
    }

    /// Checks that every coordinate is within `eps` of the other point's.
    pub fn almost_equals(&self, other: &Point3D, eps: f64) -> bool {
        (other.x - self.x).abs() <= eps
            && (other.y - self.y).abs() <= eps
            && (other.z - self.z).abs() <= eps
    }

    /// Get the coordinate along axis `dim` (0 for x, 1 for y, 2 for z).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidDimension`] for any other axis.
    pub fn get(&self, dim: usize) -> Result<f64, GeometryError> {
        match dim {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(GeometryError::InvalidDimension(dim, 2)),
        }
    }
}

impl From<[f64; 3]> for Point3D {
    fn from(p: [f64; 3]) -> Self {
        Point3D::new(p[0], p[1], p[2])
    }
}

impl From<Point3D> for [f64; 3] {
    fn from(p: Point3D) -> Self {
        [p.x, p.y, p.z]
    }
}

impl std::fmt::Display for Point3D {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Point3D({},{},{})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_translate_2d() {
        let p = Point2D::new(1.5, -2.0).translate(0.5, 3.0);
        assert_eq!(p, Point2D::new(2.0, 1.0));
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let p = Point2D::new(1.0, 0.0).rotate(std::f64::consts::FRAC_PI_2);
        assert!(p.almost_equals(&Point2D::new(0.0, 1.0), 1e-12));

        let q = Point2D::new(0.0, 2.0).rotate(std::f64::consts::FRAC_PI_2);
        assert!(q.almost_equals(&Point2D::new(-2.0, 0.0), 1e-12));
    }

    #[test]
    fn test_distance_uses_hypot() {
        assert_relative_eq!(Point2D::new(0.0, 0.0).distance(&Point2D::new(3.0, 4.0)), 5.0);
        assert_relative_eq!(
            Point3D::new(1.0, 1.0, 1.0).distance(&Point3D::new(3.0, 4.0, 7.0)),
            7.0
        );

        // a naive sqrt of squares overflows here
        let far = Point2D::new(1e300, 1e300);
        assert!(Point2D::default().distance(&far).is_finite());
    }

    #[test]
    fn test_centroid() -> Result<(), GeometryError> {
        let points = [
            Point3D::new(0.0, 0.0, 0.0),
            Point3D::new(2.0, 4.0, 6.0),
            Point3D::new(4.0, 2.0, 0.0),
        ];
        assert_eq!(Point3D::centroid(&points)?, Point3D::new(2.0, 2.0, 2.0));
        Ok(())
    }

    #[test]
    fn test_centroid_empty() {
        assert_eq!(Point2D::centroid(&[]), Err(GeometryError::EmptyPointSet));
        assert_eq!(Point3D::centroid(&[]), Err(GeometryError::EmptyPointSet));
    }

    #[test]
    fn test_almost_equals_is_inclusive() {
        let p = Point2D::new(1.0, 1.0);
        assert!(p.almost_equals(&Point2D::new(1.5, 0.5), 0.5));
        assert!(!p.almost_equals(&Point2D::new(1.5, 0.5), 0.25));
    }

    #[test]
    fn test_scale_3d() {
        let p = Point3D::new(1.0, -2.0, 0.5).scale(2.0);
        assert_eq!(p, Point3D::new(2.0, -4.0, 1.0));
    }

    #[test]
    fn test_get_axis() {
        let p = Point3D::new(1.0, 2.0, 3.0);
        assert_eq!(p.get(2), Ok(3.0));
        assert_eq!(p.get(3), Err(GeometryError::InvalidDimension(3, 2)));
        assert_eq!(
            Point2D::new(1.0, 2.0).get(2),
            Err(GeometryError::InvalidDimension(2, 1))
        );
    }
}
