//! Composites of an image pair, used to inspect the quality of a registration.
//!
//! Each composite combines two images with the same size, typically the
//! reference image and the registered moving image, into a single image:
//!
//! - [`checkerboard`]: alternating square tiles of each image
//! - [`magenta_green`]: first image in red and blue, second one in green
//! - [`sum_of_intensities`]: per-pixel sum
//! - [`difference_of_intensities`]: per-pixel difference centered on 127
//!
//! Volumes are composited slice by slice, see [`composite`] for the entry
//! point working on any [`ImageBuffer`].

use serde::{Deserialize, Serialize};

use simreg_image::{pixel::pack_rgb, Image, ImageBuffer, ImageError, Pixel, PixelType, Volume};

use crate::parallel;

/// The display range advertised by [`difference_of_intensities`].
pub const DIFFERENCE_DISPLAY_RANGE: DisplayRange = DisplayRange {
    min: 0.0,
    max: 255.0,
};

/// The intensity range a viewer should map to black and white.
///
/// This is a display hint only; the stored samples are never rescaled.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayRange {
    /// Intensity displayed as black.
    pub min: f64,
    /// Intensity displayed as white.
    pub max: f64,
}

/// The kind of composite to compute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompositeKind {
    /// Checkerboard of square tiles with the given side in pixels.
    Checkerboard {
        /// Side of the tiles, in pixels.
        tile_size: usize,
    },
    /// First image in magenta, second one in green.
    MagentaGreen,
    /// Sum of intensities.
    Sum,
    /// Difference of intensities.
    Difference,
}

impl CompositeKind {
    /// A short name of the composite.
    pub fn name(&self) -> &'static str {
        match self {
            CompositeKind::Checkerboard { .. } => "checkerboard",
            CompositeKind::MagentaGreen => "magenta_green",
            CompositeKind::Sum => "sum_of_intensities",
            CompositeKind::Difference => "difference_of_intensities",
        }
    }
}

/// The result of [`composite`].
#[derive(Clone, Debug, PartialEq)]
pub struct Composite {
    /// The composited image.
    pub buffer: ImageBuffer,
    /// The range to use for display, if it differs from the data range.
    pub display_range: Option<DisplayRange>,
}

fn ensure_same_sizes<T1, const C1: usize, T2, const C2: usize, T3, const C3: usize>(
    src1: &Image<T1, C1>,
    src2: &Image<T2, C2>,
    dst: &Image<T3, C3>,
) -> Result<(), ImageError>
where
    T1: Pixel,
    T2: Pixel,
    T3: Pixel,
{
    src1.ensure_same_size(src2)?;
    src1.ensure_same_size(dst)
}

/// Combine two images with a checkerboard pattern.
///
/// Tiles with an odd parity `(x / tile_size) ^ (y / tile_size)` take the
/// pixels of the first image, the others the pixels of the second image.
///
/// # Arguments
///
/// * `src1` - The first input image.
/// * `src2` - The second input image.
/// * `dst` - The output image.
/// * `tile_size` - The side of the tiles in pixels.
///
/// # Errors
///
/// Returns an error if the sizes of the images do not match, or if `tile_size` is zero.
///
/// # Example
///
/// ```
/// use simreg_image::Image;
/// use simreg_imgproc::composite::checkerboard;
///
/// let image1 = Image::<u8, 1>::from_size_val([2, 2].into(), 10);
/// let image2 = Image::<u8, 1>::from_size_val([2, 2].into(), 20);
/// let mut dst = Image::<u8, 1>::zeros([2, 2].into());
///
/// checkerboard(&image1, &image2, &mut dst, 1).unwrap();
/// assert_eq!(dst.as_slice(), &[20, 10, 10, 20]);
/// ```
pub fn checkerboard(
    src1: &Image<u8, 1>,
    src2: &Image<u8, 1>,
    dst: &mut Image<u8, 1>,
    tile_size: usize,
) -> Result<(), ImageError> {
    ensure_same_sizes(src1, src2, dst)?;

    if tile_size == 0 {
        return Err(ImageError::InvalidTileSize(tile_size));
    }

    parallel::par_iter_rows_indexed_two(src1, src2, dst, |x, y, p1, p2, out| {
        let odd = ((x / tile_size) ^ (y / tile_size)) & 1 == 1;
        out[0] = if odd { p1[0] } else { p2[0] };
    });

    Ok(())
}

/// The packed `0xRRGGBB` code of a magenta-green pixel.
///
/// The first value goes to the red and blue channels, the second to green.
pub fn magenta_green_code(v1: u8, v2: u8) -> u32 {
    pack_rgb([v1, v2, v1])
}

/// Combine two images into a color image, the first one in the red and blue
/// channels and the second one in the green channel.
///
/// Aligned structures appear gray, misaligned ones magenta or green.
///
/// # Errors
///
/// Returns an error if the sizes of the images do not match.
pub fn magenta_green(
    src1: &Image<u8, 1>,
    src2: &Image<u8, 1>,
    dst: &mut Image<u8, 3>,
) -> Result<(), ImageError> {
    ensure_same_sizes(src1, src2, dst)?;

    parallel::par_iter_rows_indexed_two(src1, src2, dst, |_, _, p1, p2, out| {
        out.copy_from_slice(&[p1[0], p2[0], p1[0]]);
    });

    Ok(())
}

/// Combine two images by summing their intensities.
///
/// The sum is computed in `f64` and stored with [`Pixel::from_f64`]: exact for
/// floating point images, wrapping for integer images. No clamping is applied.
///
/// # Errors
///
/// Returns an error if the sizes of the images do not match.
pub fn sum_of_intensities<T: Pixel>(
    src1: &Image<T, 1>,
    src2: &Image<T, 1>,
    dst: &mut Image<T, 1>,
) -> Result<(), ImageError> {
    ensure_same_sizes(src1, src2, dst)?;

    parallel::par_iter_rows_indexed_two(src1, src2, dst, |_, _, p1, p2, out| {
        out[0] = T::from_f64(p1[0].to_f64() + p2[0].to_f64());
    });

    Ok(())
}

/// Combine two images by computing the difference of their intensities.
///
/// The output is `(v1 - v2) * 0.5 + 127`, stored with [`Pixel::from_f64`].
/// Identical pixels give 127; the result should be displayed with
/// [`DIFFERENCE_DISPLAY_RANGE`].
///
/// # Errors
///
/// Returns an error if the sizes of the images do not match.
pub fn difference_of_intensities<T: Pixel>(
    src1: &Image<T, 1>,
    src2: &Image<T, 1>,
    dst: &mut Image<T, 1>,
) -> Result<(), ImageError> {
    ensure_same_sizes(src1, src2, dst)?;

    parallel::par_iter_rows_indexed_two(src1, src2, dst, |_, _, p1, p2, out| {
        out[0] = T::from_f64((p1[0].to_f64() - p2[0].to_f64()) * 0.5 + 127.0);
    });

    Ok(())
}

/// Apply a slice composite to each pair of slices and stack the results.
fn map_slices<T1, const C1: usize, T2, const C2: usize, T3, const C3: usize>(
    src1: &Volume<T1, C1>,
    src2: &Volume<T2, C2>,
    f: impl Fn(&Image<T1, C1>, &Image<T2, C2>, &mut Image<T3, C3>) -> Result<(), ImageError>,
) -> Result<Volume<T3, C3>, ImageError>
where
    T1: Pixel,
    T2: Pixel,
    T3: Pixel,
{
    src1.ensure_same_size(src2)?;

    let slices = src1
        .slices()
        .iter()
        .zip(src2.slices())
        .map(|(slice1, slice2)| {
            let mut dst = Image::zeros(slice1.size());
            f(slice1, slice2, &mut dst)?;
            Ok(dst)
        })
        .collect::<Result<Vec<_>, ImageError>>()?;

    Volume::new(slices)
}

/// Checkerboard composite of two volumes, slice by slice.
///
/// # Errors
///
/// Returns an error if the sizes of the volumes do not match, or if `tile_size` is zero.
pub fn checkerboard_volume(
    src1: &Volume<u8, 1>,
    src2: &Volume<u8, 1>,
    tile_size: usize,
) -> Result<Volume<u8, 1>, ImageError> {
    map_slices(src1, src2, |s1, s2, dst| checkerboard(s1, s2, dst, tile_size))
}

/// Magenta-green composite of two volumes, slice by slice.
///
/// # Errors
///
/// Returns an error if the sizes of the volumes do not match.
pub fn magenta_green_volume(
    src1: &Volume<u8, 1>,
    src2: &Volume<u8, 1>,
) -> Result<Volume<u8, 3>, ImageError> {
    map_slices(src1, src2, magenta_green)
}

/// Sum of intensities of two volumes, slice by slice.
///
/// # Errors
///
/// Returns an error if the sizes of the volumes do not match.
pub fn sum_of_intensities_volume<T: Pixel>(
    src1: &Volume<T, 1>,
    src2: &Volume<T, 1>,
) -> Result<Volume<T, 1>, ImageError> {
    map_slices(src1, src2, sum_of_intensities::<T>)
}

/// Difference of intensities of two volumes, slice by slice.
///
/// # Errors
///
/// Returns an error if the sizes of the volumes do not match.
pub fn difference_of_intensities_volume<T: Pixel>(
    src1: &Volume<T, 1>,
    src2: &Volume<T, 1>,
) -> Result<Volume<T, 1>, ImageError> {
    map_slices(src1, src2, difference_of_intensities::<T>)
}

/// Compute a composite of two buffers of any pixel type.
///
/// # Arguments
///
/// * `kind` - The composite to compute.
/// * `image1` - The first image, usually the reference image.
/// * `image2` - The second image, usually the registered moving image.
///
/// # Errors
///
/// Fails when the buffers do not have the same size, hold different pixel
/// types, or hold a pixel type the composite does not support: checkerboard
/// and magenta-green need 8-bit grayscale images, sum and difference need
/// grayscale images.
///
/// # Example
///
/// ```
/// use simreg_image::{Image, ImageBuffer};
/// use simreg_imgproc::composite::{composite, CompositeKind, DIFFERENCE_DISPLAY_RANGE};
///
/// let image: ImageBuffer = Image::<f32, 1>::from_size_val([3, 3].into(), 42.0).into();
/// let result = composite(CompositeKind::Difference, &image, &image).unwrap();
///
/// let expected: ImageBuffer = Image::<f32, 1>::from_size_val([3, 3].into(), 127.0).into();
/// assert_eq!(result.buffer, expected);
/// assert_eq!(result.display_range, Some(DIFFERENCE_DISPLAY_RANGE));
/// ```
pub fn composite(
    kind: CompositeKind,
    image1: &ImageBuffer,
    image2: &ImageBuffer,
) -> Result<Composite, ImageError> {
    let (size1, size2) = (image1.size(), image2.size());
    if size1 != size2 {
        return Err(ImageError::InvalidVolumeSize(
            size1.width,
            size1.height,
            size1.depth,
            size2.width,
            size2.height,
            size2.depth,
        ));
    }

    if image1.pixel_type() != image2.pixel_type() {
        return Err(ImageError::PixelTypeMismatch(
            image1.pixel_type(),
            image2.pixel_type(),
        ));
    }

    log::debug!("computing {} composite of {}", kind.name(), size1);

    let unsupported =
        |pixel_type: PixelType| ImageError::UnsupportedPixelType(kind.name(), pixel_type);

    let buffer: ImageBuffer = match (kind, image1, image2) {
        (
            CompositeKind::Checkerboard { tile_size },
            ImageBuffer::Gray8(v1),
            ImageBuffer::Gray8(v2),
        ) => checkerboard_volume(v1, v2, tile_size)?.into(),
        (CompositeKind::MagentaGreen, ImageBuffer::Gray8(v1), ImageBuffer::Gray8(v2)) => {
            magenta_green_volume(v1, v2)?.into()
        }
        (CompositeKind::Sum, ImageBuffer::Gray8(v1), ImageBuffer::Gray8(v2)) => {
            sum_of_intensities_volume(v1, v2)?.into()
        }
        (CompositeKind::Sum, ImageBuffer::Gray16(v1), ImageBuffer::Gray16(v2)) => {
            sum_of_intensities_volume(v1, v2)?.into()
        }
        (CompositeKind::Sum, ImageBuffer::Float32(v1), ImageBuffer::Float32(v2)) => {
            sum_of_intensities_volume(v1, v2)?.into()
        }
        (CompositeKind::Difference, ImageBuffer::Gray8(v1), ImageBuffer::Gray8(v2)) => {
            difference_of_intensities_volume(v1, v2)?.into()
        }
        (CompositeKind::Difference, ImageBuffer::Gray16(v1), ImageBuffer::Gray16(v2)) => {
            difference_of_intensities_volume(v1, v2)?.into()
        }
        (CompositeKind::Difference, ImageBuffer::Float32(v1), ImageBuffer::Float32(v2)) => {
            difference_of_intensities_volume(v1, v2)?.into()
        }
        (_, image1, _) => return Err(unsupported(image1.pixel_type())),
    };

    let display_range = match kind {
        CompositeKind::Difference => Some(DIFFERENCE_DISPLAY_RANGE),
        _ => None,
    };

    Ok(Composite {
        buffer,
        display_range,
    })
}
