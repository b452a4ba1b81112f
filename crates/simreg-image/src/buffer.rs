use crate::image::Image;
use crate::pixel::PixelType;
use crate::volume::{Volume, VolumeSize};

/// An image buffer of any of the supported pixel types.
///
/// Every variant holds a [`Volume`]; a 2D image is stored as a volume with a
/// single slice.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageBuffer {
    /// 8-bit grayscale image
    Gray8(Volume<u8, 1>),
    /// 16-bit grayscale image
    Gray16(Volume<u16, 1>),
    /// 8-bit RGB image
    Rgb8(Volume<u8, 3>),
    /// 32-bit float grayscale image
    Float32(Volume<f32, 1>),
}

impl ImageBuffer {
    /// The pixel type of the buffer.
    pub fn pixel_type(&self) -> PixelType {
        match self {
            ImageBuffer::Gray8(_) => PixelType::Gray8,
            ImageBuffer::Gray16(_) => PixelType::Gray16,
            ImageBuffer::Rgb8(_) => PixelType::Rgb8,
            ImageBuffer::Float32(_) => PixelType::Float32,
        }
    }

    /// The size of the buffer in voxels.
    pub fn size(&self) -> VolumeSize {
        match self {
            ImageBuffer::Gray8(v) => v.size(),
            ImageBuffer::Gray16(v) => v.size(),
            ImageBuffer::Rgb8(v) => v.size(),
            ImageBuffer::Float32(v) => v.size(),
        }
    }

    /// Number of spatial dimensions: 2 for a single slice, 3 otherwise.
    pub fn ndims(&self) -> usize {
        if self.size().depth == 1 {
            2
        } else {
            3
        }
    }
}

macro_rules! impl_from_buffer {
    ($variant:ident, $t:ty, $c:literal) => {
        impl From<Volume<$t, $c>> for ImageBuffer {
            fn from(volume: Volume<$t, $c>) -> Self {
                ImageBuffer::$variant(volume)
            }
        }

        impl From<Image<$t, $c>> for ImageBuffer {
            fn from(image: Image<$t, $c>) -> Self {
                ImageBuffer::$variant(image.into())
            }
        }
    };
}

impl_from_buffer!(Gray8, u8, 1);
impl_from_buffer!(Gray16, u16, 1);
impl_from_buffer!(Rgb8, u8, 3);
impl_from_buffer!(Float32, f32, 1);

#[cfg(test)]
mod tests {
    use super::ImageBuffer;
    use crate::error::ImageError;
    use crate::image::Image;
    use crate::pixel::PixelType;
    use crate::volume::Volume;

    #[test]
    fn buffer_from_image_is_2d() {
        let buffer: ImageBuffer = Image::<f32, 1>::zeros([3, 2].into()).into();
        assert_eq!(buffer.pixel_type(), PixelType::Float32);
        assert_eq!(buffer.ndims(), 2);
        assert_eq!(buffer.size(), [3, 2, 1].into());
    }

    #[test]
    fn buffer_from_volume_is_3d() -> Result<(), ImageError> {
        let buffer: ImageBuffer = Volume::<u8, 3>::zeros([3, 2, 4].into())?.into();
        assert_eq!(buffer.pixel_type(), PixelType::Rgb8);
        assert_eq!(buffer.ndims(), 3);
        Ok(())
    }
}
