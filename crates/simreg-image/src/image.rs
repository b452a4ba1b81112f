use serde::{Deserialize, Serialize};

use crate::error::ImageError;
use crate::pixel::Pixel;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use simreg_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of pixels of an image with this size.
    pub fn num_pixels(&self) -> usize {
        self.width * self.height
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents an image with pixel data.
///
/// The samples are stored row-major with shape (H, W, C), where H is the height
/// of the image, W the width and C the number of channels.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const CHANNELS: usize> Image<T, CHANNELS>
where
    T: Pixel,
{
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use simreg_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        // check if the data length matches the image size
        if data.len() != size.num_pixels() * CHANNELS {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.num_pixels() * CHANNELS,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and a constant pixel value.
    ///
    /// # Examples
    ///
    /// ```
    /// use simreg_image::{Image, ImageSize};
    ///
    /// let image = Image::<f32, 1>::from_size_val([4, 2].into(), 1.5);
    ///
    /// assert_eq!(image.as_slice(), &[1.5f32; 8]);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Self {
        Self {
            size,
            data: vec![val; size.num_pixels() * CHANNELS],
        }
    }

    /// Create a new image filled with the default value of the pixel type.
    pub fn zeros(size: ImageSize) -> Self {
        Self::from_size_val(size, T::default())
    }

    /// Create a new image by evaluating `f(x, y)` at every pixel.
    pub fn from_fn(size: ImageSize, f: impl Fn(usize, usize) -> [T; CHANNELS]) -> Self {
        let mut data = Vec::with_capacity(size.num_pixels() * CHANNELS);
        for y in 0..size.height {
            for x in 0..size.width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self { size, data }
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Get the pixel data as a flat slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a flat mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return its pixel data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get the channels of the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[T]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let base = (y * self.width() + x) * CHANNELS;
        Some(&self.data[base..base + CHANNELS])
    }

    /// Get one sample of the image.
    ///
    /// # Errors
    ///
    /// If the pixel or the channel is out of bounds, an error is returned.
    pub fn get_pixel(&self, x: usize, y: usize, ch: usize) -> Result<T, ImageError> {
        if x >= self.width() || y >= self.height() || ch >= CHANNELS {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }

        Ok(self.data[(y * self.width() + x) * CHANNELS + ch])
    }

    /// Set one sample of the image.
    ///
    /// # Errors
    ///
    /// If the pixel or the channel is out of bounds, an error is returned.
    pub fn set_pixel(&mut self, x: usize, y: usize, ch: usize, val: T) -> Result<(), ImageError> {
        if x >= self.width() || y >= self.height() || ch >= CHANNELS {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }

        let idx = (y * self.width() + x) * CHANNELS + ch;
        self.data[idx] = val;

        Ok(())
    }

    /// Cast the pixel data of the image to a different type.
    ///
    /// Conversions follow [`Pixel::from_f64`].
    pub fn cast<U: Pixel>(&self) -> Image<U, CHANNELS> {
        Image {
            size: self.size,
            data: self.data.iter().map(|&x| U::from_f64(x.to_f64())).collect(),
        }
    }

    /// Check that `other` has the same size as this image.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidImageSize`] when the sizes differ.
    pub fn ensure_same_size<U: Pixel, const C: usize>(
        &self,
        other: &Image<U, C>,
    ) -> Result<(), ImageError> {
        if self.size() != other.size() {
            return Err(ImageError::InvalidImageSize(
                self.width(),
                self.height(),
                other.width(),
                other.height(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Image, ImageSize};
    use crate::error::ImageError;

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert_eq!(image_size.num_pixels(), 200);
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20 * 3],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.num_channels(), 3);

        Ok(())
    }

    #[test]
    fn image_wrong_data_length() {
        let image = Image::<u8, 1>::new([2, 2].into(), vec![0u8; 3]);
        assert_eq!(image, Err(ImageError::InvalidChannelShape(3, 4)));
    }

    #[test]
    fn image_get_set_pixel() -> Result<(), ImageError> {
        let mut image = Image::<f32, 2>::zeros([3, 2].into());
        image.set_pixel(2, 1, 1, 5.0)?;
        assert_eq!(image.get_pixel(2, 1, 1)?, 5.0);
        assert_eq!(image.pixel(2, 1), Some(&[0.0f32, 5.0][..]));
        assert_eq!(image.pixel(3, 0), None);
        assert!(image.get_pixel(0, 2, 0).is_err());
        assert!(image.set_pixel(0, 0, 2, 1.0).is_err());
        Ok(())
    }

    #[test]
    fn image_from_fn_is_row_major() {
        let image = Image::<u16, 1>::from_fn([3, 2].into(), |x, y| [(y * 10 + x) as u16]);
        assert_eq!(image.as_slice(), &[0, 1, 2, 10, 11, 12]);
    }

    #[test]
    fn image_cast() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new([2, 1].into(), vec![12.7, 256.0])?;
        let casted = image.cast::<u8>();
        assert_eq!(casted.as_slice(), &[12, 0]);
        Ok(())
    }

    #[test]
    fn image_ensure_same_size() {
        let a = Image::<u8, 1>::zeros([3, 2].into());
        let b = Image::<f32, 3>::zeros([3, 2].into());
        let c = Image::<u8, 1>::zeros([2, 3].into());
        assert!(a.ensure_same_size(&b).is_ok());
        assert_eq!(
            a.ensure_same_size(&c),
            Err(ImageError::InvalidImageSize(3, 2, 2, 3))
        );
    }
}
