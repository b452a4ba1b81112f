use serde::{Deserialize, Serialize};

use crate::error::ImageError;
use crate::image::{Image, ImageSize};
use crate::pixel::Pixel;

/// Volume size in voxels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VolumeSize {
    /// Width of each slice in pixels
    pub width: usize,
    /// Height of each slice in pixels
    pub height: usize,
    /// Number of slices
    pub depth: usize,
}

impl VolumeSize {
    /// The size of one slice of the volume.
    pub fn slice_size(&self) -> ImageSize {
        ImageSize {
            width: self.width,
            height: self.height,
        }
    }
}

impl std::fmt::Display for VolumeSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "VolumeSize {{ width: {}, height: {}, depth: {} }}",
            self.width, self.height, self.depth
        )
    }
}

impl From<[usize; 3]> for VolumeSize {
    fn from(size: [usize; 3]) -> Self {
        VolumeSize {
            width: size[0],
            height: size[1],
            depth: size[2],
        }
    }
}

/// A stack of equally sized images.
///
/// A single image is the degenerate volume with one slice, so every routine
/// written against volumes also covers the 2D case.
#[derive(Clone, Debug, PartialEq)]
pub struct Volume<T, const CHANNELS: usize> {
    slices: Vec<Image<T, CHANNELS>>,
}

impl<T, const CHANNELS: usize> Volume<T, CHANNELS>
where
    T: Pixel,
{
    /// Create a volume from its slices, ordered by increasing z.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::EmptyVolume`] when no slice is given, and
    /// [`ImageError::InvalidImageSize`] when the slices do not share one size.
    pub fn new(slices: Vec<Image<T, CHANNELS>>) -> Result<Self, ImageError> {
        let first = slices.first().ok_or(ImageError::EmptyVolume)?;
        for slice in slices.iter().skip(1) {
            first.ensure_same_size(slice)?;
        }
        Ok(Self { slices })
    }

    /// Create a volume with the given size and a constant voxel value.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::EmptyVolume`] when `size.depth` is zero.
    pub fn from_size_val(size: VolumeSize, val: T) -> Result<Self, ImageError> {
        if size.depth == 0 {
            return Err(ImageError::EmptyVolume);
        }
        let slices = (0..size.depth)
            .map(|_| Image::from_size_val(size.slice_size(), val))
            .collect();
        Ok(Self { slices })
    }

    /// Create a volume filled with the default value of the pixel type.
    pub fn zeros(size: VolumeSize) -> Result<Self, ImageError> {
        Self::from_size_val(size, T::default())
    }

    /// Get the size of the volume in voxels.
    pub fn size(&self) -> VolumeSize {
        let slice_size = self.slice_size();
        VolumeSize {
            width: slice_size.width,
            height: slice_size.height,
            depth: self.slices.len(),
        }
    }

    /// Get the size of one slice.
    pub fn slice_size(&self) -> ImageSize {
        // a volume always holds at least one slice
        self.slices[0].size()
    }

    /// Get the width of the slices in pixels.
    pub fn width(&self) -> usize {
        self.slice_size().width
    }

    /// Get the height of the slices in pixels.
    pub fn height(&self) -> usize {
        self.slice_size().height
    }

    /// Get the number of slices.
    pub fn depth(&self) -> usize {
        self.slices.len()
    }

    /// Get the number of channels of each voxel.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Get the slice at index `z`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::SliceIndexOutOfBounds`] when `z >= depth`.
    pub fn slice(&self, z: usize) -> Result<&Image<T, CHANNELS>, ImageError> {
        self.slices
            .get(z)
            .ok_or(ImageError::SliceIndexOutOfBounds(z, self.slices.len()))
    }

    /// Get all slices, ordered by increasing z.
    pub fn slices(&self) -> &[Image<T, CHANNELS>] {
        &self.slices
    }

    /// Consume the volume and return its slices.
    pub fn into_slices(self) -> Vec<Image<T, CHANNELS>> {
        self.slices
    }

    /// Get the channels of the voxel at `(x, y, z)`, or `None` when out of bounds.
    pub fn voxel(&self, x: usize, y: usize, z: usize) -> Option<&[T]> {
        self.slices.get(z).and_then(|slice| slice.pixel(x, y))
    }

    /// Check that `other` has the same size as this volume.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidVolumeSize`] when the sizes differ.
    pub fn ensure_same_size<U: Pixel, const C: usize>(
        &self,
        other: &Volume<U, C>,
    ) -> Result<(), ImageError> {
        let (a, b) = (self.size(), other.size());
        if a != b {
            return Err(ImageError::InvalidVolumeSize(
                a.width, a.height, a.depth, b.width, b.height, b.depth,
            ));
        }
        Ok(())
    }
}

impl<T, const CHANNELS: usize> From<Image<T, CHANNELS>> for Volume<T, CHANNELS> {
    fn from(image: Image<T, CHANNELS>) -> Self {
        Self {
            slices: vec![image],
        }
    }
}
