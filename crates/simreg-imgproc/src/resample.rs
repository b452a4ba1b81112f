//! Nearest-neighbor resampling of a moving image on the grid of a reference image.
//!
//! For every voxel of the output, the transform gives the position to sample
//! in the moving image. The position is rounded to the nearest voxel with
//! `floor(v + 0.5)`, so exact halves round toward positive infinity. Positions
//! falling outside the moving image leave the output at zero.
//!
//! Planar images and volumes go through the same routine: a planar image is
//! resampled as a volume with a single slice.
//!
//! # Examples
//!
//! ```
//! use simreg_geometry::Translation2D;
//! use simreg_image::Image;
//! use simreg_imgproc::resample::resample_2d;
//!
//! let image = Image::<u8, 1>::new([3, 1].into(), vec![1, 2, 3]).unwrap();
//! let shifted = resample_2d(&image, &Translation2D::new(1.0, 0.0), &image);
//! assert_eq!(shifted.as_slice(), &[2, 3, 0]);
//! ```

use simreg_geometry::{Point2D, Point3D, Transform};
use simreg_image::{Image, ImageBuffer, ImageError, Pixel, Volume};

use crate::parallel;

/// A point that can be built from voxel indices and rounded back to them.
pub trait GridPoint: Copy {
    /// The point at the center of voxel `(x, y, z)`.
    fn from_grid(x: usize, y: usize, z: usize) -> Self;

    /// The nearest voxel indices of the point.
    ///
    /// Planar points have no z coordinate and stay on slice `z`.
    fn to_grid(&self, z: usize) -> [i64; 3];
}

impl GridPoint for Point2D {
    fn from_grid(x: usize, y: usize, _z: usize) -> Self {
        Point2D::new(x as f64, y as f64)
    }

    fn to_grid(&self, z: usize) -> [i64; 3] {
        [round_half_up(self.x), round_half_up(self.y), z as i64]
    }
}

impl GridPoint for Point3D {
    fn from_grid(x: usize, y: usize, z: usize) -> Self {
        Point3D::new(x as f64, y as f64, z as f64)
    }

    fn to_grid(&self, _z: usize) -> [i64; 3] {
        [
            round_half_up(self.x),
            round_half_up(self.y),
            round_half_up(self.z),
        ]
    }
}

/// Round to the nearest integer, exact halves going toward positive infinity.
#[inline]
pub fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

/// Resample one output slice from the slices of the moving image.
///
/// Pixels of `dst` whose transformed position falls outside the moving image
/// are left untouched.
///
/// # Arguments
///
/// * `transform` - The transform from reference space to moving image space.
/// * `moving` - The slices of the moving image, ordered by increasing z.
/// * `z` - The index of the output slice.
/// * `dst` - The output slice, with the size of the reference slices.
pub fn resample_slice<P, F, T, const C: usize>(
    transform: &F,
    moving: &[Image<T, C>],
    z: usize,
    dst: &mut Image<T, C>,
) where
    P: GridPoint,
    F: Transform<P>,
    T: Pixel,
{
    parallel::par_iter_rows_indexed(dst, |x, y, dst_pixel| {
        let [xi, yi, zi] = transform.transform(&P::from_grid(x, y, z)).to_grid(z);
        if xi < 0 || yi < 0 || zi < 0 {
            return;
        }

        let src_pixel = moving
            .get(zi as usize)
            .and_then(|slice| slice.pixel(xi as usize, yi as usize));

        if let Some(src_pixel) = src_pixel {
            dst_pixel.copy_from_slice(src_pixel);
        }
    });
}

/// Resample a moving image on the grid of a reference image.
///
/// # Arguments
///
/// * `reference` - The image defining the output grid.
/// * `transform` - The transform from reference space to moving image space.
/// * `moving` - The image to sample.
///
/// # Returns
///
/// A new image with the size of the reference image.
pub fn resample_2d<F, T, const C: usize>(
    reference: &Image<T, C>,
    transform: &F,
    moving: &Image<T, C>,
) -> Image<T, C>
where
    F: Transform<Point2D>,
    T: Pixel,
{
    let mut dst = Image::zeros(reference.size());
    resample_slice(transform, std::slice::from_ref(moving), 0, &mut dst);
    dst
}

/// Resample a single slice of a volume.
///
/// Computing a volume one slice at a time lets callers report progress or
/// stop between slices; [`resample_3d`] is the loop over all slices.
///
/// # Errors
///
/// Returns [`ImageError::SliceIndexOutOfBounds`] when `z` is not a slice of
/// the reference volume.
pub fn resample_volume_slice<P, F, T, const C: usize>(
    reference: &Volume<T, C>,
    transform: &F,
    moving: &Volume<T, C>,
    z: usize,
) -> Result<Image<T, C>, ImageError>
where
    P: GridPoint,
    F: Transform<P>,
    T: Pixel,
{
    let mut dst = Image::zeros(reference.slice(z)?.size());
    resample_slice(transform, moving.slices(), z, &mut dst);
    Ok(dst)
}

/// Resample a moving volume on the grid of a reference volume.
///
/// The transform is either a 3D transform, or a planar one applied to each
/// slice in place.
///
/// # Arguments
///
/// * `reference` - The volume defining the output grid.
/// * `transform` - The transform from reference space to moving image space.
/// * `moving` - The volume to sample.
///
/// # Returns
///
/// A new volume with the size of the reference volume.
pub fn resample_3d<P, F, T, const C: usize>(
    reference: &Volume<T, C>,
    transform: &F,
    moving: &Volume<T, C>,
) -> Result<Volume<T, C>, ImageError>
where
    P: GridPoint,
    F: Transform<P>,
    T: Pixel,
{
    log::debug!("resampling {} onto {}", moving.size(), reference.size());

    let slices = (0..reference.depth())
        .map(|z| resample_volume_slice(reference, transform, moving, z))
        .collect::<Result<Vec<_>, _>>()?;

    Volume::new(slices)
}

/// Resample a moving buffer on the grid of a reference buffer of the same pixel type.
///
/// # Errors
///
/// Returns [`ImageError::PixelTypeMismatch`] when the buffers hold different
/// pixel types.
pub fn resample<P, F>(
    reference: &ImageBuffer,
    transform: &F,
    moving: &ImageBuffer,
) -> Result<ImageBuffer, ImageError>
where
    P: GridPoint,
    F: Transform<P>,
{
    let buffer: ImageBuffer = match (reference, moving) {
        (ImageBuffer::Gray8(r), ImageBuffer::Gray8(m)) => resample_3d(r, transform, m)?.into(),
        (ImageBuffer::Gray16(r), ImageBuffer::Gray16(m)) => resample_3d(r, transform, m)?.into(),
        (ImageBuffer::Rgb8(r), ImageBuffer::Rgb8(m)) => resample_3d(r, transform, m)?.into(),
        (ImageBuffer::Float32(r), ImageBuffer::Float32(m)) => {
            resample_3d(r, transform, m)?.into()
        }
        (r, m) => {
            return Err(ImageError::PixelTypeMismatch(
                r.pixel_type(),
                m.pixel_type(),
            ))
        }
    };

    Ok(buffer)
}
